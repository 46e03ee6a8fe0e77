//! Configuration modules, each loaded from environment variables:
//!
//! - [`api_key`]: shared caller credential for the authorization gate
//! - [`cors`]: CORS allowed origins
//! - [`database`]: PostgreSQL pool initialization
//! - [`jwt`]: signing secret, algorithm and token lifetimes

pub mod api_key;
pub mod cors;
pub mod database;
pub mod jwt;
