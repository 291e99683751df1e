//! Book catalog endpoints

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult, INVALID_REQUEST_BODY},
    models::Book,
};

/// List all books
#[utoipa::path(
    get,
    path = "/api/books/",
    tag = "books",
    responses(
        (status = 200, description = "All books in the store", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    Json(state.services.books.list())
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(&id)?;
    Ok(Json(book))
}

/// Create a new book
///
/// The body is decoded as JSON whatever its Content-Type. Any `id` in it
/// is ignored; the store assigns the next one.
#[utoipa::path(
    post,
    path = "/api/books/",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid request body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = decode_book(&body?)?;
    let book = state.services.books.create(book);
    Ok((StatusCode::CREATED, Json(book)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.books.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Decode the first JSON value of a request body into a book.
///
/// `null` yields an empty book; anything after the first value is ignored.
fn decode_book(body: &[u8]) -> AppResult<Book> {
    let book = serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<Book>>()
        .next()
        .ok_or_else(|| AppError::BadRequest(INVALID_REQUEST_BODY.to_string()))??;
    Ok(book.unwrap_or_default())
}
