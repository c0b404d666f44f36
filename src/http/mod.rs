//! HTTP Protocol types resolved from parsed tokens.
mod status;
mod version;

pub use status::StatusCode;
pub use version::Version;
