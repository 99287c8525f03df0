//! Wire codec for log records.
//!
//! One record per line. Call and Return records are postcard-encoded
//! and hex-armored so a line can never embed its own terminator; Error
//! records use the literal `ERROR: {message}` form so fault messages
//! stay greppable.

use crate::record::Record;
use std::fmt;

/// Literal prefix of an error record line.
pub const ERROR_PREFIX: &str = "ERROR: ";

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The payload cannot be represented in the wire format
    Unrepresentable {
        /// Why encoding failed
        reason: String,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrepresentable { reason } => {
                write!(f, "Payload cannot be encoded: {}", reason)
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The line is not valid hex armor
    BadArmor,
    /// The payload bytes are truncated or malformed
    Malformed,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadArmor => write!(f, "Record line is not valid hex armor"),
            Self::Malformed => write!(f, "Record payload is truncated or malformed"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Encode a record as one wire line, without the `\n` terminator.
///
/// # Errors
///
/// Returns an error if the payload cannot be encoded.
pub fn encode_record(record: &Record) -> Result<String, EncodeError> {
    match record {
        // Error lines stay plain text; the message must not carry the
        // line terminator into the file.
        Record::Error { message } => {
            let sanitized = message.replace(['\n', '\r'], " ");
            Ok(format!("{}{}", ERROR_PREFIX, sanitized))
        }
        other => {
            let bytes =
                postcard::to_allocvec(other).map_err(|err| EncodeError::Unrepresentable {
                    reason: err.to_string(),
                })?;
            Ok(hex::encode(bytes))
        }
    }
}

/// Decode one wire line back into a record.
///
/// # Errors
///
/// Returns an error on a truncated or malformed line.
pub fn decode_record(line: &str) -> Result<Record, DecodeError> {
    if let Some(message) = line.strip_prefix(ERROR_PREFIX) {
        return Ok(Record::Error {
            message: message.to_string(),
        });
    }
    let bytes = hex::decode(line.trim_end()).map_err(|_| DecodeError::BadArmor)?;
    postcard::from_bytes(&bytes).map_err(|_| DecodeError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use reprise_core::{Kwargs, Value};

    #[test]
    fn test_call_roundtrip() {
        let mut kwargs = Kwargs::new();
        kwargs.insert("a".to_string(), Value::Int(4));
        kwargs.insert("b".to_string(), Value::Int(5));
        let record = Record::call(vec![Value::Int(1), Value::Int(2), Value::Int(3)], kwargs);

        let line = encode_record(&record).unwrap();
        let decoded = decode_record(&line).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_return_roundtrip() {
        let record = Record::ret(Value::Int(42), 0.123);
        let line = encode_record(&record).unwrap();
        let decoded = decode_record(&line).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_error_line_is_greppable() {
        let record = Record::error("An error occurred");
        let line = encode_record(&record).unwrap();
        assert_eq!(line, "ERROR: An error occurred");

        let decoded = decode_record(&line).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_error_message_newlines_sanitized() {
        let record = Record::error("line one\nline two");
        let line = encode_record(&record).unwrap();
        assert!(!line.contains('\n'));
        assert_eq!(line, "ERROR: line one line two");
    }

    #[test]
    fn test_encoded_line_never_embeds_terminator() {
        let record = Record::call(
            vec![Value::Bytes(vec![b'\n'; 8]), Value::Str("a\nb".to_string())],
            Kwargs::new(),
        );
        let line = encode_record(&record).unwrap();
        assert!(!line.contains('\n'));
        assert_eq!(decode_record(&line).unwrap(), record);
    }

    #[test]
    fn test_decode_malformed() {
        assert_eq!(decode_record("not hex").unwrap_err(), DecodeError::BadArmor);
        // Valid hex, but not a valid record payload
        assert_eq!(decode_record("ffffff").unwrap_err(), DecodeError::Malformed);
    }

    #[test]
    fn test_decode_truncated() {
        let line = encode_record(&Record::ret(Value::Int(7), 1.0)).unwrap();
        let truncated = &line[..line.len() / 2];
        assert!(decode_record(truncated).is_err());
    }

    fn value_strategy() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            // Finite floats only: NaN payloads can never compare equal
            (-1.0e9..1.0e9f64).prop_map(Value::Float),
            "[a-zA-Z0-9 ]{0,12}".prop_map(Value::Str),
            prop::collection::vec(any::<u8>(), 0..16).prop_map(Value::Bytes),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Seq),
                prop::collection::vec(("[a-z]{1,8}", inner), 0..4)
                    .prop_map(|pairs| Value::Map(pairs.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_call_roundtrip(
            args in prop::collection::vec(value_strategy(), 0..4),
            kwargs in prop::collection::vec(("[a-z]{1,8}", value_strategy()), 0..4)
        ) {
            let record = Record::call(args, kwargs.into_iter().collect());
            let line = encode_record(&record).unwrap();
            prop_assert!(!line.contains('\n'));
            prop_assert_eq!(decode_record(&line).unwrap(), record);
        }

        #[test]
        fn prop_return_roundtrip(result in value_strategy(), secs in 0.0..3600.0f64) {
            let record = Record::ret(result, secs);
            let line = encode_record(&record).unwrap();
            prop_assert_eq!(decode_record(&line).unwrap(), record);
        }

        #[test]
        fn prop_encode_deterministic(result in value_strategy()) {
            let record = Record::ret(result, 0.0);
            let line1 = encode_record(&record).unwrap();
            let line2 = encode_record(&record).unwrap();
            prop_assert_eq!(line1, line2);
        }
    }
}
