use std::borrow::Cow;

/// Errors reported by model validation and (de)serialization.
///
/// Every decode failure is terminal for the enclosing parse; nothing here is retried.
#[petstore_derive::model_error]
pub enum ModelError {
    /// A decoded string is not one of the model's canonical tokens.
    #[error("Unknown {model} token{}: {token:?}", format_context(.context))]
    UnknownEnumToken { model: &'static str, token: String, context: Option<Cow<'static, str>> },

    /// The held value is not a member of the model's allowed set.
    #[error("Invalid {model} value{}: {message}", format_context(.context))]
    InvalidEnumValue {
        model: &'static str,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// A multipart form lacks the named field.
    #[error("Missing multipart field{}: {field:?}", format_context(.context))]
    MissingField { field: String, context: Option<Cow<'static, str>> },

    /// The JSON value has a shape the model cannot decode from.
    #[error("Expected a JSON string for {model}{}, found {found}", format_context(.context))]
    UnexpectedJsonType {
        model: &'static str,
        found: &'static str,
        context: Option<Cow<'static, str>>,
    },

    /// Writing a multipart body to the output failed.
    #[error("Multipart I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

impl ModelError {
    pub fn unknown_token(model: &'static str, token: impl Into<String>) -> Self {
        Self::UnknownEnumToken { model, token: token.into(), context: None }
    }

    pub fn invalid_value(model: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidEnumValue { model, message: message.into(), context: None }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField { field: field.into(), context: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = Err::<(), _>(ModelError::unknown_token("Color", "TABBY"))
            .context("Decoding pet")
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown Color token (Decoding pet): \"TABBY\"");
        assert_eq!(err.kind(), "UnknownEnumToken");
    }

    #[test]
    fn io_errors_convert() {
        let err: ModelError = std::io::Error::other("closed").into();
        assert_eq!(err.kind(), "Io");
        assert_eq!(err.to_string(), "Multipart I/O error: closed");
    }
}
