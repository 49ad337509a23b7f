use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("A malformed json payload was received: {0}")]
    Json(#[from] serde_json::Error),
    #[error("The payload is not a json object, found {0}")]
    NotAnObject(&'static str),
    #[error("The payload has an unknown key `{0}`")]
    UnknownKey(String),
    #[error("The payload has key `{key}` more than once (as `{first}` and `{second}`)")]
    DuplicateKey {
        key: &'static str,
        first: String,
        second: String,
    },
    #[error("The payload is missing key `{0}`")]
    MissingKey(String),
    #[error("Key `{key}` has token `{token}`, expected one of [{expected}]")]
    UnknownToken {
        key: String,
        token: String,
        expected: String,
    },
    #[error("Key `{key}` has timestamp `{raw}` not matching `{pattern}`: {source}")]
    Timestamp {
        key: String,
        raw: String,
        pattern: &'static str,
        source: crate::TimestampError,
    },
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("A serialization json error occurred: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Field `{key}` can't be represented: {reason}")]
    Unrepresentable { key: &'static str, reason: String },
}

/// One variant per check of the decode → encode → decode → compare script.
#[derive(Error, Debug)]
pub enum RoundTripError {
    #[error("Unable to decode a character: {0}")]
    Decode(#[source] DecodeError),
    #[error("Unable to encode a character: {0}")]
    Encode(#[source] EncodeError),
    #[error("Unable to decode the re-encoded character: {0}")]
    Redecode(#[source] DecodeError),
    #[error("Re-encoded character did not match originally decoded character")]
    Mismatch,
}
