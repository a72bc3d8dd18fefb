mod error;
pub use error::{ErrorResponse, ResourceError, WebError, WebResult};

mod state;
pub use state::AppState;

pub mod dto;
pub mod routes;

pub mod doc;
