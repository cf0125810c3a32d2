use smart_result::traits::IntoSmartResult;
use smart_result::{Error, ErrorCategory, MetadataValue};

#[derive(Debug)]
enum RepoError {
    Missing(u32),
    Locked,
}

impl From<RepoError> for Error {
    fn from(error: RepoError) -> Self {
        match error {
            RepoError::Missing(id) => {
                Error::not_found("Repo.Missing", format!("row {id} not found"))
                    .with_metadata("id", id)
            }
            RepoError::Locked => Error::of(ErrorCategory::Conflict),
        }
    }
}

#[test]
fn ok_becomes_value() {
    let result = Ok::<_, RepoError>(7).into_smart();
    assert!(!result.is_error());
    assert_eq!(result.value(), 7);
}

#[test]
fn err_becomes_single_error() {
    let result = Err::<u8, _>(RepoError::Missing(3)).into_smart();

    assert!(result.is_error());
    assert_eq!(result.errors().len(), 1);
    let error = result.first_error();
    assert_eq!(error.category(), ErrorCategory::NotFound);
    assert_eq!(error.description(), "row 3 not found");
    assert_eq!(error.metadata_value("id"), Some(&MetadataValue::Int(3)));
}

#[test]
fn domain_errors_convert_directly() {
    let result = Err::<(), _>(Error::forbidden("Admin.Only", "Admins only")).into_smart();
    assert_eq!(result.first_error().code(), "Admin.Only");

    let locked = Err::<(), _>(RepoError::Locked).into_smart();
    assert_eq!(locked.first_error().category(), ErrorCategory::Conflict);
}
