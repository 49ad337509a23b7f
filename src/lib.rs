mod codec;
mod config;
mod error;
mod fixture;
mod keys;
mod locator;
mod record;
mod timestamp;
mod tokens;

// lib.rs is the public API hub: everything is re-exported at the crate root,
// so callers write `use swapi_codec::RecordCodec;` rather than `swapi_codec::codec::RecordCodec`.
pub use codec::RecordCodec;
pub use config::{CodecConfig, CodecConfigBuilder, CodecConfigBuilderError};
pub use error::{DecodeError, EncodeError, RoundTripError};
pub use fixture::ORIGINAL_CHARACTER_DATA;
pub use keys::{camel_to_snake, snake_to_camel, KeyConvention, FIELDS};
pub use locator::{ResourceUrl, UrlError};
pub use record::CharacterRecord;
pub use timestamp::{DateFormat, TimestampError};
pub use tokens::{ColorToken, Gender, GenderToken, SwColor, Token};
