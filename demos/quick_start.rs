use smart_result::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
struct Person {
    name: String,
    age: u8,
}

fn validate_person(name: &str, age: u8) -> SmartResult<Person> {
    let mut errors = Vec::new();
    if name.len() < 3 {
        errors.push(Error::validation("User.Name", "Name is too short"));
    }
    if age < 18 {
        errors.push(
            Error::validation("User.Age", "User is too young")
                .with_metadata("min_age", 18u8),
        );
    }

    match SmartResult::from_errors(errors) {
        Ok(failed) => failed,
        Err(EmptyErrors) => SmartResult::from_value(Person {
            name: name.to_owned(),
            age,
        }),
    }
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Dispatch on every error
    println!("\n1. match_all:");
    let message = validate_person("Al", 12).match_all(
        |person| format!("welcome, {}", person.name),
        |errors| {
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        },
    );
    println!("{message}");

    // 2. Dispatch on the first error only
    println!("\n2. match_first:");
    let message = validate_person("Amichai", 30).match_first(
        |person| format!("welcome, {}", person.name),
        |error| error.to_string(),
    );
    println!("{message}");

    // 3. Manual branching with the safe accessors
    println!("\n3. Accessors:");
    let result = validate_person("Amichai", 12);
    if result.is_error() {
        for error in result.errors_or_empty() {
            println!("[{}] {}", error.category(), error);
        }
    }
    println!("value() on an error result: {:?}", result.value());

    // 4. Well-known markers
    println!("\n4. Markers:");
    SmartResult::from_value(DELETED).switch(
        |marker| println!("ok: {marker:?}"),
        |errors| println!("{} error(s)", errors.len()),
    );
}
