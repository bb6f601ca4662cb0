pub mod repository;
pub mod routes;
mod validation;
