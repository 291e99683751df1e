//! Books service

use crate::{
    error::{AppError, AppResult, BOOK_NOT_FOUND},
    models::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> Vec<Book> {
        self.repository.books.list()
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.repository
            .books
            .get(id)
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    pub fn create(&self, book: Book) -> Book {
        let book = self.repository.books.add(book);
        tracing::debug!("Created book id={}", book.id);
        book
    }

    pub fn delete(&self, id: &str) -> AppResult<()> {
        if self.repository.books.delete(id) {
            tracing::debug!("Deleted book id={}", id);
            Ok(())
        } else {
            Err(AppError::NotFound(BOOK_NOT_FOUND.to_string()))
        }
    }
}
