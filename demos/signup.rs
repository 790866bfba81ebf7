//! Signup Example
//!
//! A larger form combining the ways a field can be verified:
//! - `refine` narrowing raw values into refined types
//! - `lift_validator` reusing a validator that reports a list of errors
//! - `keep` for optional fields
//! - `instrument` and the `run` log events
//!
//! Run with: cargo run --example signup --features tracing

use formpatch::pipeline::FormValidatorTracingExt;
use formpatch::prelude::*;
use formpatch::refined::{InRange, MaxLength, NonEmptyString};

#[derive(Debug, Clone, Default)]
struct SignupForm {
    username: String,
    password: String,
    age: i32,
    newsletter: bool,
    username_error: Option<String>,
    password_errors: Vec<String>,
    age_error: Option<String>,
}

#[derive(Debug)]
#[allow(dead_code)]
struct Account {
    username: Refined<String, MaxLength<16>>,
    password: NonEmptyString,
    age: Refined<i32, InRange<13, 130>>,
    newsletter: bool,
}

// An existing validator in the usual shape: a first error plus the rest
fn password_strength(raw: String) -> Validation<NonEmptyString, NonEmptyVec<String>> {
    let mut problems = Vec::new();
    if raw.len() < 10 {
        problems.push(format!("use at least 10 characters (got {})", raw.len()));
    }
    if raw.chars().all(|c| c.is_ascii_alphanumeric()) {
        problems.push("include a symbol".to_string());
    }
    match NonEmptyVec::from_vec(problems) {
        Some(problems) => Validation::failure(problems),
        None => NonEmptyString::validate_nev(raw).map_err(|e| e.map(str::to_string)),
    }
}

fn signup_pipeline() -> impl FormValidator<SignupForm, Output = Account> {
    validate(
        |username: Refined<String, MaxLength<16>>| {
            move |password: NonEmptyString| {
                move |age: Refined<i32, InRange<13, 130>>| {
                    move |newsletter: bool| Account {
                        username,
                        password,
                        age,
                        newsletter,
                    }
                }
            }
        },
    )
    .verify(
        |f: &SignupForm| f.username.clone(),
        refine::<String, MaxLength<16>, SignupForm, _>(|errors, f| SignupForm {
            username_error: Some(errors.head().clone()),
            ..f
        }),
    )
    .verify(
        |f: &SignupForm| f.password.clone(),
        lift_validator(
            |errors: NonEmptyVec<String>, f: SignupForm| SignupForm {
                password_errors: errors.into_vec(),
                ..f
            },
            password_strength,
        ),
    )
    .verify(
        |f: &SignupForm| f.age,
        refine::<i32, InRange<13, 130>, SignupForm, _>(|errors, f| SignupForm {
            age_error: Some(errors.head().clone()),
            ..f
        }),
    )
    .keep(|f: &SignupForm| f.newsletter)
    .instrument(tracing::info_span!("signup_form"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let pipeline = signup_pipeline();

    let good = SignupForm {
        username: "ada".into(),
        password: "difference-engine".into(),
        age: 36,
        newsletter: true,
        ..SignupForm::default()
    };
    match pipeline.run(good) {
        Validation::Success(account) => tracing::info!("account created: {:?}", account),
        Validation::Failure(form) => tracing::error!("unexpected rejection: {:?}", form),
    }

    let bad = SignupForm {
        username: "countess_of_lovelace".into(),
        password: "short".into(),
        age: 9,
        ..SignupForm::default()
    };
    match pipeline.run(bad) {
        Validation::Success(account) => tracing::error!("unexpected success: {:?}", account),
        Validation::Failure(form) => {
            tracing::info!("username: {:?}", form.username_error);
            for problem in &form.password_errors {
                tracing::info!("password: {}", problem);
            }
            tracing::info!("age: {:?}", form.age_error);
        }
    }
}
