//! Wire codec between backend payloads and [`Employee`] records.
//!
//! The backend speaks JSON. Decoding never yields an "absent but treated
//! as present" value: a payload either decodes, is explicitly empty, or
//! fails with a [`TranscodeError`].

use crate::domain::Employee;

/// Failure to convert between wire bytes and employee records.
#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    /// The collection payload was empty where an array was required.
    #[error("empty collection payload")]
    EmptyCollection,

    /// The payload was not valid JSON for the expected shape.
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decodes the backend's collection payload.
///
/// # Errors
///
/// Returns [`TranscodeError::EmptyCollection`] for an empty body and
/// [`TranscodeError::Malformed`] when the body is not a JSON array of
/// employee objects.
pub fn decode_list(bytes: &[u8]) -> Result<Vec<Employee>, TranscodeError> {
    if is_blank(bytes) {
        return Err(TranscodeError::EmptyCollection);
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Decodes a single-record payload.
///
/// An empty body or a literal `null` is the backend saying "no record"
/// and decodes to `None`.
///
/// # Errors
///
/// Returns [`TranscodeError::Malformed`] when the body is neither empty
/// nor a JSON employee object.
pub fn decode_one(bytes: &[u8]) -> Result<Option<Employee>, TranscodeError> {
    if is_blank(bytes) {
        return Ok(None);
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Encodes a record for a backend request body.
///
/// # Errors
///
/// Returns [`TranscodeError::Malformed`] if an opaque attribute cannot be
/// serialized.
pub fn encode(employee: &Employee) -> Result<Vec<u8>, TranscodeError> {
    Ok(serde_json::to_vec(employee)?)
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::EmployeeId;

    #[test]
    fn decodes_collection() {
        let raw = br#"[{"id":1,"name":"Ada"},{"id":2,"name":"Grace"}]"#;
        let Ok(list) = decode_list(raw) else {
            panic!("decode failed");
        };
        assert_eq!(list.len(), 2);
        assert_eq!(list.first().and_then(|e| e.id), Some(EmployeeId::new(1)));
    }

    #[test]
    fn empty_array_is_an_empty_collection_not_an_error() {
        let Ok(list) = decode_list(b"[]") else {
            panic!("decode failed");
        };
        assert!(list.is_empty());
    }

    #[test]
    fn empty_collection_body_is_an_error() {
        assert!(matches!(
            decode_list(b"  \n"),
            Err(TranscodeError::EmptyCollection)
        ));
    }

    #[test]
    fn malformed_collection_is_an_error() {
        assert!(matches!(
            decode_list(br#"{"id":1}"#),
            Err(TranscodeError::Malformed(_))
        ));
        assert!(matches!(
            decode_list(b"<html>"),
            Err(TranscodeError::Malformed(_))
        ));
    }

    #[test]
    fn empty_or_null_record_is_absent() {
        assert!(matches!(decode_one(b""), Ok(None)));
        assert!(matches!(decode_one(b"null"), Ok(None)));
    }

    #[test]
    fn decodes_record() {
        let Ok(Some(employee)) = decode_one(br#"{"id":42,"name":"Ada"}"#) else {
            panic!("decode failed");
        };
        assert_eq!(employee.id, Some(EmployeeId::new(42)));
        assert_eq!(employee.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn malformed_record_is_an_error() {
        assert!(matches!(
            decode_one(br#""oops""#),
            Err(TranscodeError::Malformed(_))
        ));
    }

    #[test]
    fn encode_omits_missing_id() {
        let Ok(bytes) = encode(&Employee::named("Grace")) else {
            panic!("encode failed");
        };
        assert_eq!(bytes, br#"{"name":"Grace"}"#.to_vec());
    }
}
