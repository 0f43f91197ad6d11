//! Validates a small sign-up form and prints the JSON error report.
//!
//! Run with `RUST_LOG=fieldrules=debug` to see per-field tracing.

use fieldrules::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let first_name = string_field("first_name", "").required().min_length(3);
    let last_name = string_field("last_name", "Smith").max_length(3);
    let age = int_field("age", 16)
        .required()
        .to_float()
        .min_size(18.0)
        .max_size(21.0);
    let email = string_field("email", "ada@example.com")
        .required()
        .raw_pattern("email", r"^[^@\s]+@[^@\s]+$", "must be a valid email")?;

    let pairs = vec![
        to_serializable(&first_name.validate(), "", ErrorFormat::Map),
        to_serializable(&last_name.validate(), "renamed_last_name", ErrorFormat::Map),
        to_serializable(&age.validate(), "", ErrorFormat::List),
        to_serializable(&email.validate(), "", ErrorFormat::Map),
    ];

    println!("{}", serializables_to_string(&pairs));
    if has_errors(&pairs) {
        println!("form has errors");
    }
    Ok(())
}
