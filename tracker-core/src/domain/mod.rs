mod error;

pub mod engine;
pub mod models;
pub mod ports;
pub mod services;

pub use error::*;
