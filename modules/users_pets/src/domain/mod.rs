pub mod error;
pub mod repo;
pub mod service;
pub mod validation;
pub mod walk;
