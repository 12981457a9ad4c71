//! Configuration, request/response models and validation.

pub mod config;
pub mod models;
pub mod validation;
