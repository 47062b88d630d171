//! Service layer providing business-oriented operations on top of models.
//! - Forwards one-to-one to the storage layer.
//! - Adds not-found semantics for lookups and mutations that miss.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod producer_service;
#[cfg(test)]
pub mod test_support;
