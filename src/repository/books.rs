//! Books repository
//!
//! In-memory store keyed by identifier. A single reader-writer lock guards
//! both the map and the id counter, so assigning an id and inserting the
//! book happen atomically and concurrent readers never block each other.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::Book;

#[derive(Debug)]
struct BookTable {
    books: HashMap<String, Book>,
    next_id: u64,
}

#[derive(Debug)]
pub struct BooksRepository {
    table: RwLock<BookTable>,
}

impl BooksRepository {
    /// Create an empty store whose first id will be "1"
    fn new() -> Self {
        Self {
            table: RwLock::new(BookTable {
                books: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store holding the three sample books (ids "1" to "3")
    pub fn seeded() -> Self {
        let repository = Self::new();
        repository.add(Book::new("The Go Programming Language", "Alan Donovan", 39.99));
        repository.add(Book::new(
            "Designing Data-Intensive Applications",
            "Martin Kleppmann",
            44.99,
        ));
        repository.add(Book::new("Clean Code", "Robert C. Martin", 34.99));
        repository
    }

    // Nothing panics while the lock is held, so a poisoned lock still
    // guards a consistent table.
    fn read(&self) -> RwLockReadGuard<'_, BookTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BookTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every stored book, in no particular order
    pub fn list(&self) -> Vec<Book> {
        self.read().books.values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<Book> {
        self.read().books.get(id).cloned()
    }

    /// Store a book under the next sequential id and return the stored copy.
    /// Any id already on `book` is overwritten.
    pub fn add(&self, mut book: Book) -> Book {
        let mut table = self.write();
        book.id = table.next_id.to_string();
        table.next_id += 1;
        table.books.insert(book.id.clone(), book.clone());
        book
    }

    /// Remove a book, returning whether it was present
    pub fn delete(&self, id: &str) -> bool {
        self.write().books.remove(id).is_some()
    }
}
