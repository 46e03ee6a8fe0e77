//! Request middleware.
//!
//! - [`api_key`]: the authorization gate checked before every token
//!   operation

pub mod api_key;
