use core::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use strum::VariantNames;
use tracing::{debug, info, instrument, warn};

use crate::{
    record::CharacterWire, CharacterRecord, CodecConfig, DecodeError, EncodeError,
    RoundTripError, Token,
};

/// Converts between JSON payloads and `CharacterRecord`s.
///
/// Holds no state besides its config; calls on independent payloads don't interact.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordCodec {
    config: CodecConfig,
}

impl RecordCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// payload -> field-named keys -> wire struct (URLs checked) -> tokens and timestamps.
    #[instrument(skip_all, fields(bytes = payload.len(), convention = ?self.config.key_convention))]
    pub fn decode(&self, payload: &[u8]) -> Result<CharacterRecord, DecodeError> {
        let object = match serde_json::from_slice::<Value>(payload)? {
            Value::Object(object) => object,
            other => return Err(DecodeError::NotAnObject(json_kind(&other))),
        };
        let fields = self.config.key_convention.to_fields(object)?;
        let wire: CharacterWire = serde_json::from_value(Value::Object(fields))?;

        let record = CharacterRecord {
            hair_color: self.read_token("hairColor", wire.hair_color)?,
            skin_color: self.read_token("skinColor", wire.skin_color)?,
            eye_color: self.read_token("eyeColor", wire.eye_color)?,
            gender: self.read_token("gender", wire.gender)?,
            created: self.read_timestamp("created", wire.created)?,
            edited: self.read_timestamp("edited", wire.edited)?,
            name: wire.name,
            height: wire.height,
            mass: wire.mass,
            birth_year: wire.birth_year,
            homeworld: wire.homeworld,
            films: wire.films,
            species: wire.species,
            vehicles: wire.vehicles,
            starships: wire.starships,
            url: wire.url,
        };
        debug!(name = record.name(), "decoded character");
        Ok(record)
    }

    /// Writes the record with the same key convention and date format `decode` reads.
    #[instrument(skip_all, fields(name = record.name(), convention = ?self.config.key_convention))]
    pub fn encode(&self, record: &CharacterRecord) -> Result<Vec<u8>, EncodeError> {
        let wire = CharacterWire {
            name: record.name.clone(),
            height: record.height.clone(),
            mass: record.mass.clone(),
            hair_color: self.write_token("hairColor", &record.hair_color)?,
            skin_color: self.write_token("skinColor", &record.skin_color)?,
            eye_color: self.write_token("eyeColor", &record.eye_color)?,
            birth_year: record.birth_year.clone(),
            gender: self.write_token("gender", &record.gender)?,
            homeworld: record.homeworld.clone(),
            films: record.films.clone(),
            species: record.species.clone(),
            vehicles: record.vehicles.clone(),
            starships: record.starships.clone(),
            created: self.write_timestamp("created", &record.created)?,
            edited: self.write_timestamp("edited", &record.edited)?,
            url: record.url.clone(),
        };

        let fields = match serde_json::to_value(&wire)? {
            Value::Object(fields) => fields,
            other => {
                return Err(EncodeError::Unrepresentable {
                    key: "record",
                    reason: format!("serialized as {} instead of an object", json_kind(&other)),
                })
            }
        };
        let object = self.config.key_convention.to_keys(fields);
        let payload = serde_json::to_vec(&Value::Object(object))?;
        debug!(bytes = payload.len(), "encoded character");
        Ok(payload)
    }

    /// Exact field-by-field equality, `url` included only when the config says so.
    pub fn equals(&self, a: &CharacterRecord, b: &CharacterRecord) -> bool {
        a.matches(b, self.config.compare_url)
    }

    /// decode -> encode -> decode -> compare; returns the first decoded record.
    #[instrument(skip_all)]
    pub fn round_trip(&self, payload: &[u8]) -> Result<CharacterRecord, RoundTripError> {
        let character = self.decode(payload).map_err(RoundTripError::Decode)?;
        let data = self.encode(&character).map_err(RoundTripError::Encode)?;
        let again = self.decode(&data).map_err(RoundTripError::Redecode)?;
        if !self.equals(&character, &again) {
            return Err(RoundTripError::Mismatch);
        }
        info!(name = character.name(), bytes = data.len(), "round trip succeeded");
        Ok(character)
    }

    fn read_token<T>(&self, field: &'static str, raw: String) -> Result<Token<T>, DecodeError>
    where
        T: FromStr + VariantNames,
    {
        let token = Token::parse(&raw);
        if self.config.strict_enums && !token.is_known() {
            warn!(field, token = raw.as_str(), "rejected unknown token");
            return Err(DecodeError::UnknownToken {
                key: self.config.key_convention.key_for(field),
                token: raw,
                expected: Token::<T>::expected(),
            });
        }
        Ok(token)
    }

    fn write_token<T>(&self, field: &'static str, token: &Token<T>) -> Result<String, EncodeError>
    where
        T: fmt::Display + VariantNames,
    {
        if self.config.strict_enums && !token.is_known() {
            return Err(EncodeError::Unrepresentable {
                key: field,
                reason: format!("`{}` is not one of [{}]", token, Token::<T>::expected()),
            });
        }
        Ok(token.to_string())
    }

    fn read_timestamp(
        &self,
        field: &'static str,
        raw: String,
    ) -> Result<DateTime<FixedOffset>, DecodeError> {
        let format = self.config.date_format;
        format.parse(&raw).map_err(|source| DecodeError::Timestamp {
            key: self.config.key_convention.key_for(field),
            raw,
            pattern: format.pattern(),
            source,
        })
    }

    fn write_timestamp(
        &self,
        field: &'static str,
        ts: &DateTime<FixedOffset>,
    ) -> Result<String, EncodeError> {
        let format = self.config.date_format;
        format.format(ts).ok_or_else(|| EncodeError::Unrepresentable {
            key: field,
            reason: format!("{} doesn't fit `{}`", ts.to_rfc3339(), format.pattern()),
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorToken, Gender, ORIGINAL_CHARACTER_DATA};
    use serde_json::json;

    fn luke() -> Value {
        serde_json::from_slice(ORIGINAL_CHARACTER_DATA).unwrap()
    }

    #[test]
    fn lenient_codec_keeps_unlisted_tokens() {
        let mut payload = luke();
        payload["hair_color"] = json!("brown, grey");
        let record = RecordCodec::new(CodecConfig::table())
            .decode(payload.to_string().as_bytes())
            .unwrap();
        assert_eq!(record.hair_color(), &ColorToken::Unlisted("brown, grey".into()));
        assert_eq!(record.gender().known(), Some(&Gender::Male));
    }

    #[test]
    fn strict_codec_refuses_to_encode_unlisted_tokens() {
        let mut payload = luke();
        payload["eye_color"] = json!("yellow");
        let record = RecordCodec::new(CodecConfig::table())
            .decode(payload.to_string().as_bytes())
            .unwrap();

        let strict = RecordCodec::new(CodecConfig {
            strict_enums: true,
            ..CodecConfig::table()
        });
        let err = strict.encode(&record).unwrap_err();
        assert!(matches!(err, EncodeError::Unrepresentable { key: "eyeColor", .. }));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = RecordCodec::default().decode(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, DecodeError::NotAnObject("an array")));
    }

    #[test]
    fn timestamp_error_names_key_and_pattern() {
        let mut payload = luke();
        payload["edited"] = json!("2014-12-20");
        let codec = RecordCodec::new(CodecConfig::snake_case());
        let err = codec.decode(payload.to_string().as_bytes()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("`edited`"), "{msg}");
        assert!(msg.contains("yyyy-MM-dd'T'HH:mm:ss.SSSZZZZZ"), "{msg}");
    }

    #[test]
    fn encoded_keys_follow_convention() {
        for config in [CodecConfig::table(), CodecConfig::snake_case()] {
            let codec = RecordCodec::new(config);
            let record = codec.decode(ORIGINAL_CHARACTER_DATA).unwrap();
            let encoded: Value = serde_json::from_slice(&codec.encode(&record).unwrap()).unwrap();
            let object = encoded.as_object().unwrap();
            assert_eq!(object.len(), 16);
            assert!(object.contains_key("hair_color"));
            assert!(object.contains_key("birth_year"));
            assert!(!object.contains_key("hairColor"));
        }
    }
}
