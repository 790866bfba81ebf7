//! Property-based tests for pipeline execution

use formpatch::field::ensure;
use formpatch::patch::{apply_all, collapse};
use formpatch::prelude::*;
use proptest::prelude::*;

/// A form of three integer fields, each with its own error flag.
#[derive(Debug, Clone, Default, PartialEq)]
struct Triple {
    a: i32,
    b: i32,
    c: i32,
    a_bad: bool,
    b_bad: bool,
    c_bad: bool,
    trail: Vec<char>,
}

fn triple(a: i32, b: i32, c: i32) -> Triple {
    Triple {
        a,
        b,
        c,
        ..Triple::default()
    }
}

fn non_negative(mark: fn(Triple) -> Triple) -> impl FieldValidator<i32, Triple, Output = i32> {
    ensure(|n: &i32| *n >= 0, mark)
}

fn mark_a(t: Triple) -> Triple {
    Triple { a_bad: true, ..t }
}

fn mark_b(t: Triple) -> Triple {
    Triple { b_bad: true, ..t }
}

fn mark_c(t: Triple) -> Triple {
    Triple { c_bad: true, ..t }
}

fn triple_pipeline() -> impl FormValidator<Triple, Output = (i32, i32, i32)> {
    validate(|a: i32| move |b: i32| move |c: i32| (a, b, c))
        .verify(|t: &Triple| t.a, non_negative(mark_a))
        .verify(|t: &Triple| t.b, non_negative(mark_b))
        .verify(|t: &Triple| t.c, non_negative(mark_c))
}

fn trail(tag: char) -> Patch<Triple> {
    Patch::new(move |mut t: Triple| {
        t.trail.push(tag);
        t
    })
}

proptest! {
    #[test]
    fn prop_success_returns_constructor_output(
        a in 0i32..1000,
        b in 0i32..1000,
        c in 0i32..1000,
    ) {
        prop_assert_eq!(run(&triple_pipeline(), triple(a, b, c)), Validation::Success((a, b, c)));
    }

    #[test]
    fn prop_every_failure_is_applied(
        a in -50i32..50,
        b in -50i32..50,
        c in -50i32..50,
    ) {
        let form = triple(a, b, c);
        match run(&triple_pipeline(), form.clone()) {
            Validation::Success(_) => prop_assert!(a >= 0 && b >= 0 && c >= 0),
            Validation::Failure(patched) => {
                prop_assert!(a < 0 || b < 0 || c < 0);
                prop_assert_eq!(patched.a_bad, a < 0);
                prop_assert_eq!(patched.b_bad, b < 0);
                prop_assert_eq!(patched.c_bad, c < 0);
                // raw values are never rewritten
                prop_assert_eq!((patched.a, patched.b, patched.c), (a, b, c));
            }
        }
    }

    #[test]
    fn prop_failure_count_matches_failing_fields(
        a in -50i32..50,
        b in -50i32..50,
        c in -50i32..50,
    ) {
        let expected = [a, b, c].iter().filter(|n| **n < 0).count();
        match triple_pipeline().check(&triple(a, b, c)) {
            Validation::Success(_) => prop_assert_eq!(expected, 0),
            Validation::Failure(patches) => prop_assert_eq!(patches.len(), expected),
        }
    }

    #[test]
    fn prop_run_is_deterministic(
        a in -50i32..50,
        b in -50i32..50,
        c in -50i32..50,
    ) {
        let pipeline = triple_pipeline();
        let form = triple(a, b, c);
        prop_assert_eq!(run(&pipeline, form.clone()), run(&pipeline, form));
    }

    #[test]
    fn prop_disjoint_patches_commute(order in Just(vec![0usize, 1, 2]).prop_shuffle()) {
        let marks: [fn(Triple) -> Triple; 3] = [mark_a, mark_b, mark_c];
        let patches = |indices: &[usize]| {
            NonEmptyVec::from_vec(indices.iter().map(|i| Patch::new(marks[*i])).collect())
        };

        let (Some(shuffled), Some(declared)) = (patches(order.as_slice()), patches(&[0, 1, 2][..])) else {
            return Err(TestCaseError::fail("three marks were given"));
        };
        prop_assert_eq!(
            apply_all(shuffled, Triple::default()),
            apply_all(declared, Triple::default())
        );
    }

    #[test]
    fn prop_reordered_verify_steps_give_same_run(a in -50i32..50, c in -50i32..50) {
        let a_then_c = validate(|a: i32| move |c: i32| (a, c))
            .verify(|t: &Triple| t.a, non_negative(mark_a))
            .verify(|t: &Triple| t.c, non_negative(mark_c));
        let c_then_a = validate(|c: i32| move |a: i32| (a, c))
            .verify(|t: &Triple| t.c, non_negative(mark_c))
            .verify(|t: &Triple| t.a, non_negative(mark_a));

        let form = triple(a, 0, c);
        prop_assert_eq!(run(&a_then_c, form.clone()), run(&c_then_a, form));
    }

    #[test]
    fn prop_keep_never_fails(a in any::<i32>(), b in any::<i32>()) {
        let pipeline = validate(|a: i32| move |b: i32| (a, b))
            .keep(|t: &Triple| t.a)
            .keep(|t: &Triple| t.b);
        prop_assert_eq!(run(&pipeline, triple(a, b, 0)), Validation::Success((a, b)));
    }

    #[test]
    fn prop_collapse_matches_apply_all(tags in prop::collection::vec(any::<char>(), 1..12)) {
        let patches = || NonEmptyVec::from_vec(tags.iter().map(|tag| trail(*tag)).collect());
        let (Some(first), Some(second)) = (patches(), patches()) else {
            return Err(TestCaseError::fail("tags is never empty"));
        };

        let applied = apply_all(first, Triple::default());
        let collapsed = collapse(second).apply(Triple::default());
        prop_assert_eq!(&applied, &collapsed);

        // last declared runs first
        let mut expected = tags.clone();
        expected.reverse();
        prop_assert_eq!(applied.trail, expected);
    }
}

#[cfg(feature = "proptest")]
mod generated {
    use super::*;

    proptest! {
        #[test]
        fn prop_and_accumulates_generated_failures(
            left in any::<Validation<u8, NonEmptyVec<u8>>>(),
            right in any::<Validation<u8, NonEmptyVec<u8>>>(),
        ) {
            let errors = |v: &Validation<u8, NonEmptyVec<u8>>| match v {
                Validation::Success(_) => Vec::new(),
                Validation::Failure(errors) => errors.clone().into_vec(),
            };
            let mut expected = errors(&left);
            expected.extend(errors(&right));

            match left.clone().and(right.clone()) {
                Validation::Success((l, r)) => {
                    prop_assert_eq!(left, Validation::Success(l));
                    prop_assert_eq!(right, Validation::Success(r));
                }
                Validation::Failure(combined) => {
                    prop_assert!(left.is_failure() || right.is_failure());
                    prop_assert_eq!(combined.into_vec(), expected);
                }
            }
        }
    }
}
