use uuid::Uuid;

use crate::data::models::ApiError;

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Checks that `raw` is a record identifier and returns it in canonical form.
/// `field` names the offending input in the error message.
pub fn parse_id(raw: &str, field: &str) -> Result<String, ApiError> {
    Uuid::parse_str(raw.trim())
        .map(|id| id.to_string())
        .map_err(|_| ApiError::Validation(format!("Invalid {field}: {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_parse_back() {
        let id = new_id();
        assert_eq!(parse_id(&id, "id").unwrap(), id);
    }

    #[test]
    fn uppercase_ids_are_canonicalised() {
        let id = new_id();
        assert_eq!(parse_id(&id.to_uppercase(), "id").unwrap(), id);
    }

    #[test]
    fn garbage_is_a_validation_error() {
        match parse_id("not-an-id", "schoolId") {
            Err(ApiError::Validation(msg)) => assert!(msg.contains("schoolId")),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
