use smart_result::convert::*;
use smart_result::{EmptyErrors, Error, ErrorCategory, SmartResult};

#[test]
fn from_wraps_value() {
    let result = from("value");
    assert!(!result.is_error());
    assert_eq!(result.value(), "value");
}

#[test]
fn from_error_and_from_errors_build_error_state() {
    let single: SmartResult<u8> = from_error(Error::of(ErrorCategory::NotFound));
    assert_eq!(single.errors().len(), 1);

    let many: SmartResult<u8> = from_errors([
        Error::of(ErrorCategory::Validation),
        Error::of(ErrorCategory::Conflict),
    ])
    .unwrap();
    assert_eq!(many.first_error().category(), ErrorCategory::Validation);

    let empty = from_errors::<u8, _>(std::iter::empty());
    assert_eq!(empty, Err(EmptyErrors));
}

#[test]
fn from_result_maps_both_sides() {
    assert_eq!(from_result(Ok::<_, Error>(1)).value(), 1);

    let failed = from_result::<u8>(Err(Error::failure("Io.Read", "disk")));
    assert_eq!(failed.first_error().code(), "Io.Read");
}

#[test]
fn try_from_result_rejects_empty_error_list() {
    let ok = try_from_result::<_, Vec<Error>>(Ok(3)).unwrap();
    assert_eq!(ok.value(), 3);

    let failed =
        try_from_result::<u8, _>(Err(vec![Error::of(ErrorCategory::Forbidden)])).unwrap();
    assert!(failed.is_error());

    assert_eq!(try_from_result::<u8, _>(Err(Vec::<Error>::new())), Err(EmptyErrors));
}

#[test]
fn to_result_keeps_every_error() {
    let result: SmartResult<u8> =
        [Error::validation("A", "a"), Error::validation("B", "b")].into();
    let errors = to_result(result).unwrap_err();
    let codes: Vec<_> = errors.iter().map(Error::code).collect();
    assert_eq!(codes, ["A", "B"]);

    assert_eq!(to_result(from(9u8)), Ok(9));
}

#[test]
fn to_result_first_keeps_only_the_first_error() {
    let result: SmartResult<u8> =
        [Error::validation("A", "a"), Error::validation("B", "b")].into();
    assert_eq!(to_result_first(result).unwrap_err().code(), "A");
    assert_eq!(to_result_first(from(9u8)), Ok(9));
}
