use smart_result::markers::{Created, Deleted, Success, Updated, CREATED, DELETED, SUCCESS, UPDATED};

#[test]
fn markers_are_distinct_unit_values() {
    assert_eq!(SUCCESS, Success);
    assert_eq!(CREATED, Created::default());
    assert_eq!(DELETED, Deleted);
    assert_eq!(UPDATED, Updated);
    assert_eq!(format!("{SUCCESS:?}"), "Success");
    assert_eq!(std::mem::size_of::<Created>(), 0);
}

#[cfg(feature = "serde")]
#[test]
fn markers_serialize_as_unit() {
    assert_eq!(serde_json::to_string(&CREATED).unwrap(), "null");
    let back: Created = serde_json::from_str("null").unwrap();
    assert_eq!(back, CREATED);
}
