//! Row models and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row, plus the DTOs the stores accept for mutations.

pub mod session;
pub mod user;
