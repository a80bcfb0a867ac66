//! Infrastructure layer.
//!
//! Concrete room stores and the DTOs they read and write.

pub mod dto;
pub mod repository;
