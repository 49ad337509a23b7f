use derive_builder::Builder;

use crate::{DateFormat, KeyConvention};

/// How a `RecordCodec` reads and writes payloads.
///
/// Two presets mirror the two ways the character payload is handled:
/// `table()` spells out every key and keeps colors/gender as free text,
/// `snake_case()` converts keys structurally and only accepts known tokens.
#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[builder(default)] // every field falls back to CodecConfig::default()
pub struct CodecConfig {
    pub key_convention: KeyConvention,
    // reject gender/color tokens outside the known sets
    pub strict_enums: bool,
    // include `url` in RecordCodec::equals
    pub compare_url: bool,
    pub date_format: DateFormat,
}

impl CodecConfig {
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::default()
    }

    /// Explicit key table, free-text tokens, `url` compared, `...SSSZ` timestamps.
    pub fn table() -> Self {
        Self {
            key_convention: KeyConvention::ExplicitTable,
            strict_enums: false,
            compare_url: true,
            date_format: DateFormat::Rfc822,
        }
    }

    /// snake_case <-> camelCase keys, strict tokens, `url` not compared, `...SSSZZZZZ` timestamps.
    pub fn snake_case() -> Self {
        Self {
            key_convention: KeyConvention::SnakeToCamel,
            strict_enums: true,
            compare_url: false,
            date_format: DateFormat::Iso8601Full,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_unset_fields() {
        let config = CodecConfig::builder()
            .key_convention(KeyConvention::SnakeToCamel)
            .strict_enums(true)
            .build()
            .unwrap();
        assert_eq!(config.key_convention, KeyConvention::SnakeToCamel);
        assert!(config.strict_enums);
        assert!(!config.compare_url);
        assert_eq!(config.date_format, DateFormat::Rfc822);
    }

    #[test]
    fn builder_reproduces_presets() {
        let config = CodecConfig::builder()
            .key_convention(KeyConvention::SnakeToCamel)
            .strict_enums(true)
            .compare_url(false)
            .date_format(DateFormat::Iso8601Full)
            .build()
            .unwrap();
        assert_eq!(config, CodecConfig::snake_case());
        assert_ne!(config, CodecConfig::table());
    }
}
