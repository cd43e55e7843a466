use super::*;

#[test]
fn status_error_names_code() {
    assert_eq!(ApiError::Status(502).to_string(), "unexpected status: 502");
}

#[test]
fn decode_error_carries_detail() {
    let err = ApiError::Decode("expected value at line 1 column 1".to_owned());
    assert_eq!(err.to_string(), "response decode failed: expected value at line 1 column 1");
}

#[test]
fn unavailable_error_message() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
