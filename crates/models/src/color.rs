//! Pet color in the store.
//!
//! The wire form is one of five upper-case tokens; matching is exact and case-sensitive.

use petstore_core::ModelError;
use petstore_core::model::{
    JsonConvertible, MultipartConvertible, Validatable, expect_json_str, required_part,
    to_http_content, value_from_http_content,
};
use petstore_core::multipart::MultipartFormData;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::str::FromStr;
use strum::VariantArray;
use strum_macros::{Display, FromRepr, IntoStaticStr};
use tracing::debug;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    IntoStaticStr,
    FromRepr,
    strum_macros::VariantArray,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Color {
    #[default]
    Black,
    White,
    Brown,
    Golden,
    Mixed,
}

impl Color {
    pub const MODEL: &'static str = "Color";

    #[must_use]
    pub const fn get_value(self) -> Self {
        self
    }

    pub fn set_value(&mut self, value: Self) {
        *self = value;
    }

    /// Canonical wire token.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Exact lookup of a canonical token.
    ///
    /// # Errors
    /// Returns [`ModelError::UnknownEnumToken`] for anything outside the five tokens,
    /// including differently cased spellings.
    pub fn from_token(token: &str) -> Result<Self, ModelError> {
        Self::lookup(token).ok_or_else(|| {
            debug!(model = Self::MODEL, token, "Rejected unknown enum token");
            ModelError::unknown_token(Self::MODEL, token)
        })
    }

    /// Builds a color from its declaration index.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidEnumValue`] for indices past the last variant.
    pub fn from_ordinal(ordinal: u8) -> Result<Self, ModelError> {
        Self::from_repr(ordinal).ok_or_else(|| {
            ModelError::invalid_value(
                Self::MODEL,
                format!("ordinal {ordinal} is outside 0..{}", Self::VARIANTS.len()),
            )
        })
    }

    // Reverse table, derived from the forward one so the two cannot drift.
    fn lookup(token: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|color| color.as_str() == token)
    }
}

impl FromStr for Color {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ModelError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        Self::from_token(token)
    }
}

impl TryFrom<u8> for Color {
    type Error = ModelError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal)
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        color.to_json()
    }
}

impl Validatable for Color {
    fn validate(&self) -> Result<(), ModelError> {
        match Self::lookup(self.as_str()) {
            Some(found) if found == *self => Ok(()),
            _ => Err(ModelError::invalid_value(
                Self::MODEL,
                format!("{self:?} does not round-trip through its token {:?}", self.as_str()),
            )),
        }
    }
}

impl JsonConvertible for Color {
    fn to_json(&self) -> Value {
        Value::from(self.as_str())
    }

    fn from_json(&mut self, json: &Value) -> Result<(), ModelError> {
        *self = Self::from_token(expect_json_str(Self::MODEL, json)?)?;
        Ok(())
    }
}

impl MultipartConvertible for Color {
    fn to_multipart(&self, parts: &mut MultipartFormData, name_prefix: &str) {
        let content = to_http_content(parts, name_prefix, self.as_str());
        parts.add(content);
    }

    fn from_multipart(
        &mut self,
        parts: &MultipartFormData,
        name_prefix: &str,
    ) -> Result<(), ModelError> {
        let part = required_part(parts, name_prefix)?;
        *self = Self::from_token(&value_from_http_content(part))?;
        Ok(())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Self::from_token(&token).map_err(serde::de::Error::custom)
    }
}
