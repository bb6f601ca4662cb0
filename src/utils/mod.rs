pub mod body;
pub mod config;
pub mod error;
pub mod id;
pub mod validation;
