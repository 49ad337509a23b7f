// Closed token sets for gender and colors.
// EnumString: FromStr, case-sensitive, using the lowercase names below.
// Display: writes the same lowercase names back.
// VariantNames: `Gender::VARIANTS` lists the accepted tokens for error messages.

use core::fmt;
use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

// TODO: only the tokens of the bundled Luke Skywalker payload are listed; supply the full
// SWAPI color vocabulary (e.g. "n/a", "brown, grey") before decoding live API traffic strictly.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum SwColor {
    // hair
    Blond,
    // skin
    Fair,
    // eye
    Blue,
}

/// A token that is either one of the known variants of `T` or kept as raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token<T> {
    Known(T),
    Unlisted(String),
}

pub type GenderToken = Token<Gender>;
pub type ColorToken = Token<SwColor>;

impl<T: FromStr> Token<T> {
    pub fn parse(raw: &str) -> Self {
        raw.parse()
            .map(Token::Known)
            .unwrap_or_else(|_| Token::Unlisted(raw.to_owned()))
    }
}

impl<T> Token<T> {
    pub fn is_known(&self) -> bool {
        matches!(self, Token::Known(_))
    }

    pub fn known(&self) -> Option<&T> {
        match self {
            Token::Known(v) => Some(v),
            Token::Unlisted(_) => None,
        }
    }
}

impl<T: VariantNames> Token<T> {
    /// Comma separated list of the accepted tokens.
    pub fn expected() -> String {
        T::VARIANTS.join(", ")
    }
}

impl<T: fmt::Display> fmt::Display for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Known(v) => write!(f, "{}", v),
            Token::Unlisted(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn tokens_round_trip_through_text() {
        for gender in Gender::iter() {
            assert_eq!(GenderToken::parse(&gender.to_string()), Token::Known(gender));
        }
        for color in SwColor::iter() {
            let s: &'static str = color.into();
            assert_eq!(ColorToken::parse(s), Token::Known(color));
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(GenderToken::parse("male"), Token::Known(Gender::Male));
        assert_eq!(GenderToken::parse("Male"), Token::Unlisted("Male".into()));
        assert!(!ColorToken::parse("brown").is_known());
    }

    #[test]
    fn unlisted_keeps_raw_text() {
        let token = GenderToken::parse("n/a");
        assert_eq!(token.to_string(), "n/a");
        assert_eq!(token.known(), None);
    }

    #[test]
    fn expected_lists_serialized_names() {
        assert_eq!(GenderToken::expected(), "male, female");
        assert_eq!(ColorToken::expected(), "blond, fair, blue");
    }
}
