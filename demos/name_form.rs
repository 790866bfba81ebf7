//! Name Form Example
//!
//! A two-field form where both names are required. Shows:
//! - Building a pipeline from a curried constructor
//! - Verifying fields with `ensure`
//! - Getting the annotated form back when fields fail
//! - A keep-only pipeline that checks nothing
//!
//! Run with: cargo run --example name_form

use formpatch::field::ensure;
use formpatch::prelude::*;

// Raw input, with a slot for each field's error message
#[derive(Debug, Clone, Default)]
struct NameForm {
    first_name: String,
    last_name: String,
    first_name_error: Option<String>,
    last_name_error: Option<String>,
}

impl NameForm {
    fn new(first: &str, last: &str) -> Self {
        Self {
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug)]
struct VerifiedName {
    first_name: String,
    last_name: String,
}

fn name_pipeline() -> impl FormValidator<NameForm, Output = VerifiedName> {
    validate(|first_name: String| move |last_name: String| VerifiedName {
        first_name,
        last_name,
    })
    .verify(
        |f: &NameForm| f.first_name.clone(),
        ensure(
            |s: &String| !s.is_empty(),
            |f: NameForm| NameForm {
                first_name_error: Some("First name cannot be empty".into()),
                ..f
            },
        ),
    )
    .verify(
        |f: &NameForm| f.last_name.clone(),
        ensure(
            |s: &String| !s.is_empty(),
            |f: NameForm| NameForm {
                last_name_error: Some("Last name cannot be empty".into()),
                ..f
            },
        ),
    )
}

fn show(label: &str, form: NameForm) {
    println!("{}", label);
    match run(&name_pipeline(), form) {
        Validation::Success(name) => println!("  verified: {:?}", name),
        Validation::Failure(form) => {
            println!("  rejected, form comes back as:");
            println!("    first_name       = {:?}", form.first_name);
            println!("    first_name_error = {:?}", form.first_name_error);
            println!("    last_name        = {:?}", form.last_name);
            println!("    last_name_error  = {:?}", form.last_name_error);
        }
    }
}

fn main() {
    println!("Name Form Examples");
    println!("==================\n");

    show("Both names given:", NameForm::new("John", "Doe"));
    show("\nBoth names empty:", NameForm::new("", ""));
    show("\nLast name empty:", NameForm::new("John", ""));

    println!("\nKeep-only pipeline:");
    let pipeline = validate(|first: String| move |last: String| (first, last))
        .keep(|f: &NameForm| f.first_name.clone())
        .keep(|f: &NameForm| f.last_name.clone());
    match pipeline.run(NameForm::new("Tony", "Bradley")) {
        Validation::Success(pair) => println!("  verified: {:?}", pair),
        Validation::Failure(_) => unreachable!("keep never fails"),
    }
}
