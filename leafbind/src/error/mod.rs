//! Error types raised while constructing operation schemas.

mod aggregate;
mod constructors;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::SchemaError;

/// Convenience alias for results carrying a [`SchemaError`].
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests;
