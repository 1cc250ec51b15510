pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod model;
pub mod ops;
pub mod store;
pub mod validation;
