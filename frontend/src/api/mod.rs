mod auth;
pub mod client;
mod dashboard;
pub mod types;

pub use client::*;
pub use types::*;
