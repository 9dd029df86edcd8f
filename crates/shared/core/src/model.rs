//! Capability traits every generated model implements, plus the shared decode helpers.

use crate::error::ModelError;
use crate::multipart::{HttpContent, MultipartFormData};
use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

/// Confirms a model's held state is acceptable.
pub trait Validatable {
    /// # Errors
    /// Returns [`ModelError::InvalidEnumValue`] (or a model-specific kind) when the held
    /// state violates the model's constraints.
    fn validate(&self) -> Result<(), ModelError>;
}

/// Conversion to and from a generic JSON value.
pub trait JsonConvertible {
    fn to_json(&self) -> Value;

    /// Replaces `self` with the value decoded from `json`.
    ///
    /// On error `self` is left untouched.
    ///
    /// # Errors
    /// Returns the model's decode error when `json` does not describe a valid value.
    fn from_json(&mut self, json: &Value) -> Result<(), ModelError>;

    /// Decodes a fresh value from `json`.
    ///
    /// # Errors
    /// See [`JsonConvertible::from_json`].
    fn decode_json(json: &Value) -> Result<Self, ModelError>
    where
        Self: Default + Sized,
    {
        let mut model = Self::default();
        model.from_json(json)?;
        Ok(model)
    }
}

/// Conversion to and from multipart form fields.
pub trait MultipartConvertible {
    /// Appends this model's field(s) to `parts`, named from `name_prefix`.
    fn to_multipart(&self, parts: &mut MultipartFormData, name_prefix: &str);

    /// Replaces `self` with the value read from the field(s) named from `name_prefix`.
    ///
    /// On error `self` is left untouched.
    ///
    /// # Errors
    /// Returns [`ModelError::MissingField`] when a required field is absent, or the model's
    /// decode error when the field content is not a valid value.
    fn from_multipart(
        &mut self,
        parts: &MultipartFormData,
        name_prefix: &str,
    ) -> Result<(), ModelError>;

    /// Decodes a fresh value from the field(s) named from `name_prefix`.
    ///
    /// # Errors
    /// See [`MultipartConvertible::from_multipart`].
    fn decode_multipart(parts: &MultipartFormData, name_prefix: &str) -> Result<Self, ModelError>
    where
        Self: Default + Sized,
    {
        let mut model = Self::default();
        model.from_multipart(parts, name_prefix)?;
        Ok(model)
    }
}

/// Full model contract: composes into the generated model graph.
pub trait ModelBase: Validatable + JsonConvertible + MultipartConvertible {}

impl<T> ModelBase for T where T: Validatable + JsonConvertible + MultipartConvertible {}

/// JSON type name used in decode error messages.
#[must_use]
pub const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrows the string inside `json`, rejecting every other JSON shape.
///
/// # Errors
/// Returns [`ModelError::UnexpectedJsonType`] when `json` is not a string.
pub fn expect_json_str<'a>(model: &'static str, json: &'a Value) -> Result<&'a str, ModelError> {
    json.as_str().ok_or_else(|| {
        let found = json_type_name(json);
        debug!(model, found, "Rejected non-string JSON value");
        ModelError::UnexpectedJsonType { model, found, context: None }
    })
}

/// Looks up the part named `name`, treating absence as a decode failure.
///
/// # Errors
/// Returns [`ModelError::MissingField`] when no part carries that name.
pub fn required_part<'a>(
    parts: &'a MultipartFormData,
    name: &str,
) -> Result<&'a HttpContent, ModelError> {
    parts.get_content(name).ok_or_else(|| {
        debug!(field = name, "Multipart field is missing");
        ModelError::missing_field(name)
    })
}

/// Wraps a string value as a part of `parts`, named `name` and encoded with the form's
/// configured defaults. The part is returned, not added.
#[must_use]
pub fn to_http_content(parts: &MultipartFormData, name: &str, value: &str) -> HttpContent {
    parts.text_part(name, value)
}

/// Text carried by a part. Invalid UTF-8 is replaced with U+FFFD rather than rejected, so
/// the model's token check reports it.
#[must_use]
pub fn value_from_http_content(content: &HttpContent) -> Cow<'_, str> {
    content.text_value()
}
