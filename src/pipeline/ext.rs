//! Method syntax for building and running pipelines.
//!
//! `FormValidatorExt` is implemented for every [`FormValidator`], so fields can be
//! chained in declaration order instead of nesting [`verify`](crate::verify) calls.

use super::{BoxedFormValidator, FormValidator, Keep, Map, Verify};
use crate::field::FieldValidator;
use crate::Validation;

/// Extension trait providing builder methods for all pipelines.
///
/// # Example
///
/// ```
/// use formpatch::field::ensure;
/// use formpatch::{validate, FormValidatorExt, Validation};
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Point {
///     x: String,
///     y: String,
///     errors: Vec<&'static str>,
/// }
///
/// fn number(tag: &'static str) -> impl formpatch::FieldValidator<String, Point, Output = i32> {
///     move |raw: String| match raw.parse::<i32>() {
///         Ok(n) => Validation::success(n),
///         Err(_) => Validation::failure(formpatch::Patch::new(move |mut p: Point| {
///             p.errors.push(tag);
///             p
///         })),
///     }
/// }
///
/// let pipeline = validate(|x: i32| move |y: i32| (x, y))
///     .verify(|p: &Point| p.x.clone(), number("x"))
///     .verify(|p: &Point| p.y.clone(), number("y"))
///     .map(|(x, y)| x * y);
///
/// let form = Point { x: "6".into(), y: "7".into(), ..Point::default() };
/// assert_eq!(pipeline.run(form), Validation::Success(42));
///
/// let form = Point { x: "a".into(), y: "b".into(), ..Point::default() };
/// match pipeline.run(form) {
///     Validation::Failure(p) => assert_eq!(p.errors, vec!["y", "x"]),
///     Validation::Success(_) => unreachable!(),
/// }
/// ```
pub trait FormValidatorExt<F>: FormValidator<F> + Sized {
    /// Add a verified field. Same as [`verify`](crate::verify).
    fn verify<G, V, A>(self, accessor: G, field: V) -> Verify<Self, G, V, A>
    where
        G: Fn(&F) -> A,
        V: FieldValidator<A, F>,
    {
        super::verify(accessor, field, self)
    }

    /// Add a field passed through as-is. Same as [`keep`](crate::keep).
    fn keep<G, A>(self, accessor: G) -> Keep<Self, G, A>
    where
        G: Fn(&F) -> A,
    {
        super::keep(accessor, self)
    }

    /// Transform the verified output.
    fn map<U, M>(self, f: M) -> Map<Self, M>
    where
        M: Fn(Self::Output) -> U,
    {
        Map { inner: self, f }
    }

    /// Erase the pipeline's type.
    fn boxed(self) -> BoxedFormValidator<F, Self::Output>
    where
        Self: Send + Sync + 'static,
        F: 'static,
        Self::Output: 'static,
    {
        BoxedFormValidator::new(self)
    }

    /// Run the pipeline against `form`. Same as [`run`](crate::run).
    fn run(&self, form: F) -> Validation<Self::Output, F> {
        super::run(self, form)
    }
}

impl<F, P: FormValidator<F>> FormValidatorExt<F> for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ensure;
    use crate::validate;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Pair {
        left: u32,
        right: u32,
        flagged: Vec<&'static str>,
    }

    fn flag(tag: &'static str) -> impl Fn(Pair) -> Pair + Clone {
        move |mut p: Pair| {
            p.flagged.push(tag);
            p
        }
    }

    #[test]
    fn test_method_chain_matches_declaration_order() {
        let pipeline = validate(|l: u32| move |r: u32| l + r)
            .verify(|p: &Pair| p.left, ensure(|n: &u32| *n < 10, flag("left")))
            .verify(|p: &Pair| p.right, ensure(|n: &u32| *n < 10, flag("right")));

        let form = Pair { left: 11, right: 12, ..Pair::default() };
        assert_eq!(
            pipeline.run(form),
            Validation::Failure(Pair { left: 11, right: 12, flagged: vec!["right", "left"] })
        );
    }

    #[test]
    fn test_keep_method() {
        let pipeline = validate(|l: u32| move |r: u32| (l, r))
            .keep(|p: &Pair| p.left)
            .keep(|p: &Pair| p.right);
        let form = Pair { left: 1, right: 2, ..Pair::default() };
        assert_eq!(pipeline.run(form), Validation::Success((1, 2)));
    }

    #[test]
    fn test_map_leaves_failures_alone() {
        let pipeline = validate(|l: u32| l)
            .verify(|p: &Pair| p.left, ensure(|n: &u32| *n > 0, flag("left")))
            .map(|n| n * 100);

        assert_eq!(
            pipeline.run(Pair { left: 3, ..Pair::default() }),
            Validation::Success(300)
        );
        assert_eq!(
            pipeline.run(Pair::default()),
            Validation::Failure(Pair { flagged: vec!["left"], ..Pair::default() })
        );
    }

    #[test]
    fn test_boxed_method() {
        let pipeline = validate(|l: u32| l).keep(|p: &Pair| p.left).boxed();
        assert_eq!(pipeline.run(Pair { left: 9, ..Pair::default() }), Validation::Success(9));
    }
}
