//! Status provider implementations

mod http;

pub use http::{HttpProvider, DEFAULT_FETCH_TIMEOUT, DEFAULT_STATUS_URL};
pub use test::ScriptProvider;
