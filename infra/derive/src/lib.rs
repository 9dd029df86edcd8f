#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the petstore model layer.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! petstore-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! Consumers must depend on `thiserror` as well; the generated code refers to it by path.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring model error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait with `.context(...)` for
///   `Result<T, Name>` and for `Result<T, Source>` of every variant wrapping a source error.
/// * **Conversions**: `From<Source>` for variants with a `source` field (or a field marked
///   `#[source]`/`#[from]`), enabling `?`.
/// * **Kind Names**: A `kind()` method returning the variant name, for log fields and
///   matching in callers that do not want to depend on the variant layout.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 4. Variants with a source must also carry a `context` field.
/// 5. `#[derive(...)]` lists on the enum must parse; a malformed list is reported as is.
///
/// # Example
///
/// ```rust,ignore
/// use petstore_derive::model_error;
/// use std::borrow::Cow;
///
/// #[model_error]
/// pub enum ModelError {
///     #[error("Unknown {model} token{}: {token:?}", format_context(.context))]
///     UnknownEnumToken {
///         model: &'static str,
///         token: String,
///         context: Option<Cow<'static, str>>,
///     },
///
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
/// }
///
/// fn write(out: &mut impl std::io::Write) -> Result<(), ModelError> {
///     out.write_all(b"--").context("Writing boundary")?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn model_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
