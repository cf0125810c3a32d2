use smart_result::traits::ErrorState;
use smart_result::{Error, ErrorCategory, SmartResult};

#[test]
fn value_state_has_no_errors() {
    let result = SmartResult::from_value("value");
    let view: &dyn ErrorState = &result;

    assert!(!view.is_error());
    assert!(view.errors_if_any().is_none());
}

#[test]
fn error_state_exposes_stored_errors() {
    let result: SmartResult<u64> = [
        Error::validation("User.Name", "Name is too short"),
        Error::of(ErrorCategory::Conflict),
    ]
    .into();
    let view: &dyn ErrorState = &result;

    assert!(view.is_error());
    let errors = view.errors_if_any().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].code(), "User.Name");
    assert_eq!(errors[1].category(), ErrorCategory::Conflict);
}

#[test]
fn heterogeneous_results_can_be_inspected_together() {
    let name = SmartResult::from_value(String::from("Amichai"));
    let age: SmartResult<u8> = Error::validation("User.Age", "User is too young").into();
    let email: SmartResult<Vec<u8>> = Error::conflict("User.Email", "Email already taken").into();

    let checks: Vec<Box<dyn ErrorState>> = vec![Box::new(name), Box::new(age), Box::new(email)];
    let failed = checks.iter().filter(|c| c.is_error()).count();
    let codes: Vec<String> = checks
        .iter()
        .filter_map(|c| c.errors_if_any())
        .flatten()
        .map(|e| e.code().to_string())
        .collect();

    assert_eq!(failed, 2);
    assert_eq!(codes, ["User.Age", "User.Email"]);
}
