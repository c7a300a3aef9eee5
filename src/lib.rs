//! In-memory player service: list, fetch and create player records over HTTP.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use db::PlayerStore;
pub use routes::{router, App};
