//! Repository layer for book storage

pub mod books;

use std::sync::Arc;

/// Main repository struct holding the book store
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<books::BooksRepository>,
}

impl Repository {
    /// Create a repository around the given book store
    pub fn new(books: books::BooksRepository) -> Self {
        Self {
            books: Arc::new(books),
        }
    }
}
