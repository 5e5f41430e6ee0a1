pub mod config;
pub mod errors;
pub mod feed;
pub mod fetch;
pub mod routes;
pub mod scheduler;
pub mod store;
pub mod tasks;
pub mod types;
