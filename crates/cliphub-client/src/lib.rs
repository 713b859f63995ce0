mod error;
mod http;

pub use error::{Error, Result};
pub use http::HubClient;
