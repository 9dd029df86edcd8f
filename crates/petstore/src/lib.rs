//! Facade crate for the petstore model layer.
//! Re-exports the model-base runtime and the generated models.
//! Keep this crate thin: it should compose other crates, not implement model logic.
//!
//! ## Usage
//! ```rust
//! use petstore::prelude::*;
//!
//! let color = Color::decode_json(&serde_json::json!("GOLDEN")).unwrap();
//! color.validate().unwrap();
//!
//! let mut form = MultipartFormData::new();
//! color.to_multipart(&mut form, "color");
//! assert_eq!(Color::decode_multipart(&form, "color").unwrap(), Color::Golden);
//! ```

pub use petstore_core as base;
pub use petstore_models as models;

pub mod prelude {
    pub use petstore_core::config::{ModelConfig, MultipartConfig};
    pub use petstore_core::{
        HttpContent, JsonConvertible, ModelBase, ModelError, ModelErrorExt, MultipartConvertible,
        MultipartFormData, Validatable,
    };
    pub use petstore_models::Color;
}
