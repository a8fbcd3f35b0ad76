pub mod header;

pub use header::{API_KEY_SCHEME, AuthHeaderError, get_api_key};
