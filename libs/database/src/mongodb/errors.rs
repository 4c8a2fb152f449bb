//! Classification of driver errors by server error code

use mongodb::error::{Error, ErrorKind, WriteFailure};

/// Server error code for a unique index violation (E11000)
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// Whether `err` is a unique-index violation
///
/// Inserts report the violation as a write error; `findAndModify`-style
/// commands report it as a command error. Both carry code 11000.
pub fn is_duplicate_key(err: &Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document};
    use mongodb::error::{CommandError, WriteError};
    use mongodb::options::ClientOptions;

    fn write_error(code: i32, message: &str) -> Error {
        let write_error: WriteError =
            from_document(doc! { "code": code, "errmsg": message }).unwrap();
        Error::from(ErrorKind::Write(WriteFailure::WriteError(write_error)))
    }

    fn command_error(code: i32, message: &str) -> Error {
        let command_error: CommandError =
            from_document(doc! { "code": code, "codeName": "", "errmsg": message }).unwrap();
        Error::from(ErrorKind::Command(command_error))
    }

    #[test]
    fn test_write_error_with_11000_is_duplicate_key() {
        assert!(is_duplicate_key(&write_error(
            DUPLICATE_KEY_CODE,
            "E11000 duplicate key error collection: myapp.items index: name_1"
        )));
    }

    #[test]
    fn test_command_error_with_11000_is_duplicate_key() {
        assert!(is_duplicate_key(&command_error(
            DUPLICATE_KEY_CODE,
            "E11000 duplicate key error"
        )));
    }

    #[test]
    fn test_classification_ignores_message_text() {
        assert!(is_duplicate_key(&write_error(DUPLICATE_KEY_CODE, "")));
        assert!(!is_duplicate_key(&write_error(121, "E11000 duplicate key error")));
        assert!(!is_duplicate_key(&command_error(121, "Document failed validation")));
    }

    #[tokio::test]
    async fn test_argument_errors_are_not_duplicate_keys() {
        let err = ClientOptions::parse("definitely not a uri").await.unwrap_err();
        assert!(!is_duplicate_key(&err));
    }
}
