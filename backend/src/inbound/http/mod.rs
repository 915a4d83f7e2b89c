//! HTTP inbound adapter exposing the people REST endpoints.

pub mod error;
pub mod health;
pub mod people;
pub mod people_dto;
pub mod state;
pub mod validation;

pub use error::{ApiResult, ErrorResponse};
