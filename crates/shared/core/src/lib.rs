//! # Petstore Core
//!
//! Runtime shared by every generated petstore model.
//! Keep this crate lightweight: the capability traits a model implements, the error type
//! those traits report, the multipart container they read from and write into, and the
//! configuration that controls multipart encoding defaults.
//!
//! ## Implementing a model
//! ```rust
//! use petstore_core::model::{JsonConvertible, expect_json_str};
//! use petstore_core::ModelError;
//! use serde_json::Value;
//!
//! #[derive(Debug, Default)]
//! struct Tag(String);
//!
//! impl JsonConvertible for Tag {
//!     fn to_json(&self) -> Value {
//!         Value::String(self.0.clone())
//!     }
//!
//!     fn from_json(&mut self, json: &Value) -> Result<(), ModelError> {
//!         self.0 = expect_json_str("Tag", json)?.to_owned();
//!         Ok(())
//!     }
//! }
//!
//! let tag = Tag::decode_json(&Value::from("friendly")).unwrap();
//! assert_eq!(tag.0, "friendly");
//! ```
pub mod config;
mod error;
pub mod model;
pub mod multipart;

pub use crate::error::{ModelError, ModelErrorExt};
pub use crate::model::{JsonConvertible, ModelBase, MultipartConvertible, Validatable};
pub use crate::multipart::{HttpContent, MultipartFormData};
