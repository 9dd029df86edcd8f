use petstore_derive::model_error;
use std::borrow::Cow;

#[model_error]
pub enum DemoError {
    #[error("Unknown token{}: {token:?}", format_context(.context))]
    UnknownToken { token: String, context: Option<Cow<'static, str>> },

    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("boom")).context("reading token")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.kind(), "Io");
    assert_eq!(err.to_string(), "IO error (reading token): boom");

    let err = DemoError::Internal { message: Cow::Borrowed("fallback"), context: None };
    assert_eq!(err.kind(), "Internal");
    assert_eq!(err.to_string(), "Internal error: fallback");

    let err = Err::<(), _>(DemoError::UnknownToken { token: "x".to_owned(), context: None })
        .context("decoding")
        .unwrap_err();
    assert_eq!(err.to_string(), "Unknown token (decoding): \"x\"");
}
