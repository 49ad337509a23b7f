// Key conventions
// A payload spells its keys one way (hair_color), the record's wire struct another (hairColor).
// ExplicitTable: a fixed table of the 16 accepted payload keys and the field each one fills.
// SnakeToCamel: a structural rule; any snake_case key is converted and must land on a known field.
// Decoding rewrites payload keys -> field names before serde sees the object;
// encoding rewrites field names -> payload keys after serde produced it.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::DecodeError;

/// Field names as the wire struct serializes them (`rename_all = "camelCase"`).
pub const FIELDS: [&str; 16] = [
    "name",
    "height",
    "mass",
    "hairColor",
    "skinColor",
    "eyeColor",
    "birthYear",
    "gender",
    "homeworld",
    "films",
    "species",
    "vehicles",
    "starships",
    "created",
    "edited",
    "url",
];

// (payload key, field)
const KEY_TABLE: [(&str, &str); 16] = [
    ("name", "name"),
    ("height", "height"),
    ("mass", "mass"),
    ("hair_color", "hairColor"),
    ("skin_color", "skinColor"),
    ("eye_color", "eyeColor"),
    ("birth_year", "birthYear"),
    ("gender", "gender"),
    ("homeworld", "homeworld"),
    ("films", "films"),
    ("species", "species"),
    ("vehicles", "vehicles"),
    ("starships", "starships"),
    ("created", "created"),
    ("edited", "edited"),
    ("url", "url"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyConvention {
    #[default]
    ExplicitTable,
    SnakeToCamel,
}

impl KeyConvention {
    /// The field a payload key fills, if any.
    pub fn field_for(&self, key: &str) -> Option<&'static str> {
        match self {
            Self::ExplicitTable => KEY_TABLE
                .iter()
                .find(|(wire, _)| *wire == key)
                .map(|(_, field)| *field),
            Self::SnakeToCamel => {
                let camel = snake_to_camel(key);
                FIELDS.iter().copied().find(|field| *field == camel)
            }
        }
    }

    /// The payload key a field is written under.
    pub fn key_for(&self, field: &str) -> String {
        match self {
            Self::ExplicitTable => KEY_TABLE
                .iter()
                .find(|(_, f)| *f == field)
                .map(|(wire, _)| (*wire).to_owned())
                .unwrap_or_else(|| field.to_owned()),
            Self::SnakeToCamel => camel_to_snake(field),
        }
    }

    /// Rewrites a payload object so its keys are field names.
    ///
    /// Every field must be present exactly once and every key must map to a field.
    pub fn to_fields(
        &self,
        object: Map<String, Value>,
    ) -> Result<Map<String, Value>, DecodeError> {
        let mut seen: HashMap<&'static str, String> = HashMap::with_capacity(FIELDS.len());
        let mut fields = Map::new();
        for (key, value) in object {
            let field = self
                .field_for(&key)
                .ok_or_else(|| DecodeError::UnknownKey(key.clone()))?;
            if let Some(first) = seen.insert(field, key.clone()) {
                return Err(DecodeError::DuplicateKey {
                    key: field,
                    first,
                    second: key,
                });
            }
            debug!(key = key.as_str(), field, "mapped payload key");
            fields.insert(field.to_owned(), value);
        }

        if let Some(missing) = FIELDS.iter().find(|field| !fields.contains_key(**field)) {
            return Err(DecodeError::MissingKey(self.key_for(missing)));
        }
        Ok(fields)
    }

    /// Rewrites a serialized wire object so its keys are payload keys.
    pub fn to_keys(&self, fields: Map<String, Value>) -> Map<String, Value> {
        fields
            .into_iter()
            .map(|(field, value)| (self.key_for(&field), value))
            .collect()
    }
}

/// `hair_color` -> `hairColor`.
///
/// Leading and trailing underscores are kept, the first word is copied as-is and every
/// later word is capitalised. A key without an inner underscore comes back unchanged.
pub fn snake_to_camel(key: &str) -> String {
    let start = key.len() - key.trim_start_matches('_').len();
    let end = key.trim_end_matches('_').len();
    if start >= end {
        return key.to_owned();
    }

    let core = &key[start..end];
    if !core.contains('_') {
        return key.to_owned();
    }

    let mut out = String::with_capacity(key.len());
    out.push_str(&key[..start]);
    for (i, word) in core.split('_').filter(|w| !w.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out.push_str(&key[end..]);
    out
}

/// `hairColor` -> `hair_color`, `myURLValue` -> `my_url_value`.
pub fn camel_to_snake(field: &str) -> String {
    let chars: Vec<char> = field.chars().collect();
    let mut out = String::with_capacity(field.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // a new word starts after a lowercase run, or at the last capital of an acronym
            let boundary =
                (prev != '_' && !prev.is_uppercase()) || (prev.is_uppercase() && next_is_lower);
            if boundary {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload_object(convention: KeyConvention) -> Map<String, Value> {
        FIELDS
            .iter()
            .map(|field| (convention.key_for(field), json!(field)))
            .collect()
    }

    #[test]
    fn structural_rule_agrees_with_table() {
        for (wire, field) in KEY_TABLE {
            assert_eq!(snake_to_camel(wire), field);
            assert_eq!(camel_to_snake(field), wire);
        }
    }

    #[test]
    fn snake_to_camel_keeps_edge_underscores() {
        assert_eq!(snake_to_camel("_hair_color_"), "_hairColor_");
        assert_eq!(snake_to_camel("__"), "__");
        assert_eq!(snake_to_camel("HAIR_COLOR"), "HAIRColor");
        assert_eq!(snake_to_camel("Birth_YEAR"), "BirthYear");
        assert_eq!(snake_to_camel("hair__color"), "hairColor");
        assert_eq!(snake_to_camel("hairColor"), "hairColor");
    }

    #[test]
    fn camel_to_snake_splits_acronyms() {
        assert_eq!(camel_to_snake("myURLValue"), "my_url_value");
        assert_eq!(camel_to_snake("homeworldURL"), "homeworld_url");
        assert_eq!(camel_to_snake("url"), "url");
    }

    #[test]
    fn to_fields_maps_every_key() {
        for convention in [KeyConvention::ExplicitTable, KeyConvention::SnakeToCamel] {
            let fields = convention.to_fields(payload_object(convention)).unwrap();
            assert_eq!(fields.len(), FIELDS.len());
            assert_eq!(fields["hairColor"], json!("hairColor"));
            assert_eq!(convention.to_keys(fields), payload_object(convention));
        }
    }

    #[test]
    fn explicit_table_rejects_camel_keys() {
        let mut object = payload_object(KeyConvention::ExplicitTable);
        let value = object.remove("hair_color").unwrap();
        object.insert("hairColor".to_owned(), value);
        let err = KeyConvention::ExplicitTable.to_fields(object).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownKey(ref key) if key == "hairColor"));
    }

    #[test]
    fn snake_rule_keeps_first_word_case() {
        for key in ["HAIR_COLOR", "Birth_Year", "NAME"] {
            assert_eq!(KeyConvention::SnakeToCamel.field_for(key), None, "{key}");
        }
        assert_eq!(KeyConvention::SnakeToCamel.field_for("hair_COLOR"), Some("hairColor"));
    }

    #[test]
    fn snake_rule_rejects_same_field_twice() {
        let mut object = payload_object(KeyConvention::SnakeToCamel);
        object.insert("hairColor".to_owned(), json!("blond"));
        let err = KeyConvention::SnakeToCamel.to_fields(object).unwrap_err();
        assert!(matches!(err, DecodeError::DuplicateKey { key: "hairColor", .. }));
    }

    #[test]
    fn missing_key_is_named_in_payload_spelling() {
        let mut object = payload_object(KeyConvention::SnakeToCamel);
        object.remove("birth_year");
        let err = KeyConvention::SnakeToCamel.to_fields(object).unwrap_err();
        assert!(matches!(err, DecodeError::MissingKey(ref key) if key == "birth_year"));
    }
}
