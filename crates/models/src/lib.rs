//! # Petstore Models
//!
//! Model types of the petstore API. Each model implements the capability traits from
//! [`petstore_core::model`] so it composes into requests and responses, and `serde`
//! so it nests inside derived structs.

pub mod color;

pub use crate::color::Color;
