//! Multipart form container used by the multipart model adapters.
//!
//! Parts keep their insertion order; rendering follows the `multipart/form-data`
//! framing of RFC 7578.

use crate::config::MultipartConfig;
use crate::error::{ModelError, ModelErrorExt};
use nanoid::nanoid;
use std::borrow::Cow;
use std::io::Write;
use tracing::trace;

pub const FORM_DATA: &str = "form-data";
pub const TEXT_PLAIN: &str = "text/plain";
pub const BOUNDARY_PREFIX: &str = "PetstoreBoundary-";
const BOUNDARY_LEN: usize = 24;

// Excludes visually ambiguous characters (I, O, l, 0, 1).
const BOUNDARY_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Generates a fresh boundary: `PetstoreBoundary-` followed by a random `NanoID`.
#[must_use]
pub fn random_boundary() -> String {
    format!("{BOUNDARY_PREFIX}{}", nanoid!(BOUNDARY_LEN, BOUNDARY_ALPHABET))
}

/// Percent-encodes the characters that would end a quoted parameter or header line
/// (RFC 7578 section 4.2).
fn escape_param(value: &str) -> Cow<'_, str> {
    if !value.contains(['"', '\r', '\n']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("%22"),
            '\r' => escaped.push_str("%0D"),
            '\n' => escaped.push_str("%0A"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// One named part of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpContent {
    content_disposition: String,
    name: String,
    file_name: Option<String>,
    content_type: String,
    data: Vec<u8>,
}

impl HttpContent {
    /// Creates a `form-data` part with no content type.
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            content_disposition: FORM_DATA.to_owned(),
            name: name.into(),
            file_name: None,
            content_type: String::new(),
            data: data.into(),
        }
    }

    /// Creates a `form-data` part carrying `text/plain` content.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value.into().into_bytes()).with_content_type(TEXT_PLAIN)
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    #[must_use]
    pub fn with_content_disposition(mut self, disposition: impl Into<String>) -> Self {
        self.content_disposition = disposition.into();
        self
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[must_use]
    pub fn content_disposition(&self) -> &str {
        &self.content_disposition
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Content as text; invalid UTF-8 sequences are replaced, never dropped.
    #[must_use]
    pub fn text_value(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    fn write_to(&self, boundary: &str, out: &mut impl Write) -> std::io::Result<()> {
        write!(out, "--{boundary}\r\n")?;

        if !self.content_disposition.is_empty() {
            write!(out, "Content-Disposition: {}", self.content_disposition)?;
            if !self.name.is_empty() {
                write!(out, "; name=\"{}\"", escape_param(&self.name))?;
            }
            if let Some(file_name) = &self.file_name {
                write!(out, "; filename=\"{}\"", escape_param(file_name))?;
            }
            out.write_all(b"\r\n")?;
        }
        if !self.content_type.is_empty() {
            write!(out, "Content-Type: {}\r\n", self.content_type)?;
        }

        out.write_all(b"\r\n")?;
        out.write_all(&self.data)?;
        out.write_all(b"\r\n")
    }
}

/// Ordered collection of [`HttpContent`] parts sharing one boundary.
#[derive(Debug, Clone)]
pub struct MultipartFormData {
    boundary: String,
    content_type: String,
    content_disposition: String,
    contents: Vec<HttpContent>,
}

impl Default for MultipartFormData {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartFormData {
    /// Creates an empty form with default encoding settings and a random boundary.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&MultipartConfig::default())
    }

    /// Creates an empty form using the configured part defaults.
    ///
    /// A random boundary is generated when the config does not pin one.
    #[must_use]
    pub fn with_config(config: &MultipartConfig) -> Self {
        Self {
            boundary: config.boundary.clone().unwrap_or_else(random_boundary),
            content_type: config.content_type.clone(),
            content_disposition: config.content_disposition.clone(),
            contents: Vec::new(),
        }
    }

    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn set_boundary(&mut self, boundary: impl Into<String>) {
        self.boundary = boundary.into();
    }

    /// Value for the request's `Content-Type` header.
    #[must_use]
    pub fn content_type_header(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn add(&mut self, content: HttpContent) {
        trace!(name = content.name(), bytes = content.data().len(), "Adding multipart part");
        self.contents.push(content);
    }

    /// Builds, without adding, a text part carrying this form's configured content type
    /// and disposition.
    #[must_use]
    pub fn text_part(&self, name: impl Into<String>, value: impl Into<String>) -> HttpContent {
        HttpContent::new(name, value.into().into_bytes())
            .with_content_type(self.content_type.clone())
            .with_content_disposition(self.content_disposition.clone())
    }

    /// Adds a text part using this form's configured content type and disposition.
    pub fn add_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let content = self.text_part(name, value);
        self.add(content);
    }

    /// Returns the most recently added part named `name`.
    #[must_use]
    pub fn get_content(&self, name: &str) -> Option<&HttpContent> {
        self.contents.iter().rev().find(|content| content.name == name)
    }

    #[must_use]
    pub fn has_content(&self, name: &str) -> bool {
        self.get_content(name).is_some()
    }

    #[must_use]
    pub fn contents(&self) -> &[HttpContent] {
        &self.contents
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Renders the full body, closing delimiter included.
    ///
    /// # Errors
    /// Returns [`ModelError::Io`] if writing to `out` fails.
    pub fn write_to(&self, out: &mut impl Write) -> Result<(), ModelError> {
        for content in &self.contents {
            content.write_to(&self.boundary, &mut *out).context("Writing multipart part")?;
        }
        write!(out, "--{}--\r\n", self.boundary).context("Writing closing boundary")?;
        Ok(())
    }

    /// Renders the full body into memory.
    ///
    /// # Errors
    /// Never fails in practice; the signature mirrors [`MultipartFormData::write_to`].
    pub fn to_bytes(&self) -> Result<Vec<u8>, ModelError> {
        let mut body = Vec::new();
        self.write_to(&mut body)?;
        Ok(body)
    }
}
