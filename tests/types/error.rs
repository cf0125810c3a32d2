use smart_result::{Error, ErrorCategory, MetadataValue, NO_ERRORS_CODE};

#[test]
fn category_constructors_set_category_code_and_description() {
    let cases = [
        (Error::failure("c", "d"), ErrorCategory::Failure),
        (Error::unexpected("c", "d"), ErrorCategory::Unexpected),
        (Error::validation("c", "d"), ErrorCategory::Validation),
        (Error::conflict("c", "d"), ErrorCategory::Conflict),
        (Error::not_found("c", "d"), ErrorCategory::NotFound),
        (Error::unauthorized("c", "d"), ErrorCategory::Unauthorized),
        (Error::forbidden("c", "d"), ErrorCategory::Forbidden),
    ];

    for (error, category) in cases {
        assert_eq!(error.category(), category);
        assert_eq!(error.code(), "c");
        assert_eq!(error.description(), "d");
        assert!(error.metadata().is_none());
    }
}

#[test]
fn of_uses_category_defaults() {
    for category in ErrorCategory::ALL {
        let error = Error::of(category);
        assert_eq!(error.category(), category);
        assert_eq!(error.code(), category.default_code());
        assert_eq!(error.description(), category.default_description());
        assert_eq!(Error::from(category), error);
    }
    assert_eq!(Error::of(ErrorCategory::NotFound).code(), "General.NotFound");
}

#[test]
fn equality_is_structural() {
    assert_eq!(
        Error::validation("User.Name", "Name is too short"),
        Error::validation("User.Name", "Name is too short")
    );
    assert_ne!(
        Error::validation("User.Name", "Name is too short"),
        Error::conflict("User.Name", "Name is too short")
    );
    assert_ne!(
        Error::validation("User.Name", "Name is too short"),
        Error::validation("User.Name", "Name is too short").with_metadata("min", 3u32)
    );
}

#[test]
fn with_metadata_accumulates_and_replaces_keys() {
    let error = Error::validation("User.Age", "User is too young")
        .with_metadata("min_age", 18u8)
        .with_metadata("field", "age")
        .with_metadata("min_age", 21i32);

    let metadata = error.metadata().unwrap();
    assert_eq!(metadata.len(), 2);
    assert_eq!(error.metadata_value("min_age"), Some(&MetadataValue::Int(21)));
    assert_eq!(error.metadata_value("field"), Some(&MetadataValue::Text("age".to_string())));
    assert_eq!(error.metadata_value("missing"), None);
}

#[test]
fn metadata_value_conversions() {
    assert_eq!(MetadataValue::from(true), MetadataValue::Bool(true));
    assert_eq!(MetadataValue::from(-4i16), MetadataValue::Int(-4));
    assert_eq!(MetadataValue::from(7u64), MetadataValue::Int(7));
    assert_eq!(MetadataValue::from(18u8), MetadataValue::Int(18));
    assert!(matches!(MetadataValue::from(u64::MAX), MetadataValue::UInt(u64::MAX)));
    assert_eq!(MetadataValue::from(1.5f64), MetadataValue::Float(1.5));
    assert_eq!(MetadataValue::from(String::from("x")), MetadataValue::Text("x".into()));
    assert_eq!(MetadataValue::from(()), MetadataValue::Null);
    assert_eq!(MetadataValue::from(1.5f64).to_string(), "1.5");
}

#[test]
fn display_renders_code_and_description() {
    let error = Error::conflict("Order.Duplicate", "Order already placed");
    assert_eq!(error.to_string(), "Order.Duplicate: Order already placed");
    assert_eq!(ErrorCategory::NotFound.to_string(), "NotFound");
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::failure("c", "d"));

    let boxed: Box<dyn std::error::Error> = Box::new(Error::failure("Io.Read", "disk gone"));
    assert_eq!(boxed.to_string(), "Io.Read: disk gone");
}

#[test]
fn sentinel_is_fresh_unexpected_error() {
    let first = Error::no_errors_sentinel();
    let second = Error::no_errors_sentinel();

    assert_eq!(first.category(), ErrorCategory::Unexpected);
    assert_eq!(first.code(), NO_ERRORS_CODE);
    assert_eq!(first, second);
}

#[cfg(feature = "serde")]
#[test]
fn error_serde_roundtrip_keeps_metadata() {
    let error = Error::not_found("User.NotFound", "No such user")
        .with_metadata("id", 42i64)
        .with_metadata("active", false);

    let json = serde_json::to_value(&error).unwrap();
    assert_eq!(json["category"], "NotFound");
    assert_eq!(json["metadata"]["id"], 42);

    let back: Error = serde_json::from_value(json).unwrap();
    assert_eq!(back, error);
}

#[test]
fn unsigned_and_signed_metadata_compare_numerically() {
    assert_eq!(MetadataValue::UInt(3), MetadataValue::Int(3));
    assert_eq!(MetadataValue::Int(3), MetadataValue::UInt(3));
    assert_ne!(MetadataValue::Int(-1), MetadataValue::UInt(u64::MAX));
    assert_ne!(MetadataValue::Int(1), MetadataValue::Float(1.0));
}

#[cfg(feature = "serde")]
#[test]
fn error_serde_roundtrip_keeps_unsigned_metadata() {
    let error = Error::validation("User.Age", "User is too young")
        .with_metadata("min_age", 18u8)
        .with_metadata("id", 7u64)
        .with_metadata("max", u64::MAX);

    let json = serde_json::to_string(&error).unwrap();
    let back: Error = serde_json::from_str(&json).unwrap();

    assert_eq!(back, error);
    assert!(matches!(back.metadata_value("min_age"), Some(MetadataValue::Int(18))));
    assert!(matches!(back.metadata_value("max"), Some(MetadataValue::UInt(u64::MAX))));
}

#[cfg(feature = "serde")]
#[test]
fn error_without_metadata_omits_field() {
    let json = serde_json::to_value(Error::of(ErrorCategory::Forbidden)).unwrap();
    assert!(json.get("metadata").is_none());
}
