mod document;
mod error;
mod health;
mod query;
mod retrieve;
mod rewrite;
mod session;
mod summary;

pub use document::upload_document_handler;
pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use query::query_handler;
pub use retrieve::{NO_DOCUMENT_MESSAGE, retrieve_handler};
pub use rewrite::rewrite_handler;
pub use session::{create_session_handler, delete_session_handler, session_status_handler};
pub use summary::summary_handler;
