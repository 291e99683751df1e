//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record
///
/// Also used as the create payload: missing fields fall back to their
/// zero value, unknown fields are ignored and any `id` sent by the client
/// is replaced when the book is stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Store-assigned identifier, empty until the book is stored
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "The Rust Programming Language")]
    pub title: String,
    #[schema(example = "Steve Klabnik")]
    pub author: String,
    #[schema(example = 39.99)]
    pub price: f64,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, price: f64) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            author: author.into(),
            price,
        }
    }
}
