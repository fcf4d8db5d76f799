//! Shared primitives for the credstore identity and session store.
//!
//! This crate carries the pieces both the storage layer and any embedding
//! application need: the closed [`error::StoreError`] outcome type, time and
//! identifier aliases, and bearer-token generation. It deliberately has no
//! database dependency.

pub mod error;
pub mod token;
pub mod types;
