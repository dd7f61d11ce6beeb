use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("item already exists")]
    AlreadyExists,

    #[error("item not found")]
    NotFound,

    #[error("item not found to update")]
    NotFoundToUpdate,

    #[error("item not found to delete")]
    NotFoundToDelete,

    /// Raw store failure, as reported by the repository
    #[error("database error: {0}")]
    Database(String),

    /// Store failure with operation context, as reported to clients
    #[error("{0}")]
    Internal(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl ItemError {
    /// Turn a raw [`ItemError::Database`] into an [`ItemError::Internal`]
    /// prefixed with `context`; other variants pass through.
    pub fn with_context(self, context: &str) -> Self {
        match self {
            ItemError::Database(cause) => ItemError::Internal(format!("{context}: {cause}")),
            other => other,
        }
    }
}

impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::AlreadyExists => AppError::BadRequest(err.to_string()),
            ItemError::NotFound | ItemError::NotFoundToUpdate | ItemError::NotFoundToDelete => {
                AppError::NotFound(err.to_string())
            }
            ItemError::Database(msg) | ItemError::Internal(msg) => {
                AppError::InternalServerError(msg)
            }
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<mongodb::error::Error> for ItemError {
    fn from(err: mongodb::error::Error) -> Self {
        ItemError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for ItemError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        ItemError::Database(format!("BSON serialization error: {err}"))
    }
}
