//! Infrastructure layer: storage backends and transport DTOs.

pub mod dto;
pub mod repository;
