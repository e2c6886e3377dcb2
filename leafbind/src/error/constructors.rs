//! Constructors and aggregation helpers for `SchemaError`.

use super::{AggregatedErrors, SchemaError};

impl SchemaError {
    /// Tries to build a single error from an iterator of violations.
    ///
    /// The iterator is consumed eagerly. It returns `None` when no violations
    /// are supplied, the violation itself when there is exactly one, and
    /// [`Self::Aggregate`] combining every violation otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use leafbind::SchemaError;
    /// assert!(SchemaError::try_aggregate(Vec::new()).is_none());
    /// ```
    #[must_use]
    pub fn try_aggregate<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut collected: Vec<Self> = errors.into_iter().collect();
        match collected.len() {
            0 => None,
            1 => collected.pop(),
            _ => Some(Self::Aggregate(Box::new(AggregatedErrors::new(collected)))),
        }
    }

    /// Builds a single error from at least one violation.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty. Use [`Self::try_aggregate`] when the
    /// violation list may be empty.
    #[must_use]
    #[track_caller]
    pub fn aggregate<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::try_aggregate(errors).map_or_else(
            || panic!("aggregate requires at least one error"),
            |error| error,
        )
    }

    /// Wraps a declarative table parser error.
    #[must_use]
    pub fn table(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Table {
            source: source.into(),
        }
    }
}
