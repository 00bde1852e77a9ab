//! Defines some common functions used in this library.

/// Defines some checker functions.
pub(crate) mod checker;

/// Defines the loss functions reported by the logger.
pub mod loss_functions;

/// Constants shared across the crate.
pub mod constants;
