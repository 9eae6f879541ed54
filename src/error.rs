//! Error types for synchronization operations

use thiserror::Error;

/// Result type for synchronization operations
pub type SyncResult<T> = std::result::Result<T, SyncError>;

/// Errors surfaced by the synchronization primitives
#[derive(Debug, Error)]
pub enum SyncError {
    /// A wait group counter would have been driven below zero.
    ///
    /// This is a usage bug on the caller's side: more completions were
    /// signaled than tasks were registered. The counter is left at its
    /// prior value.
    #[error("wait group counter would go negative (count {count}, delta {delta})")]
    NegativeCounter {
        /// Counter value before the failing call
        count: i64,
        /// Delta that would have pushed it below zero
        delta: i64,
    },

    /// An object factory failed while producing a new instance.
    ///
    /// Propagated verbatim from the factory; the pool adds no retry.
    #[error("object factory failed")]
    Factory {
        /// The factory's own error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl SyncError {
    /// Create a negative-counter error
    pub fn negative_counter(count: i64, delta: i64) -> Self {
        Self::NegativeCounter { count, delta }
    }

    /// Wrap a factory failure
    pub fn factory(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Factory { source: source.into() }
    }

    /// True if this error came from a caller-supplied factory
    pub fn is_factory(&self) -> bool {
        matches!(self, Self::Factory { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_counter_display_names_both_values() {
        let err = SyncError::negative_counter(1, -2);
        let msg = err.to_string();
        assert!(msg.contains("count 1"));
        assert!(msg.contains("delta -2"));
    }

    #[test]
    fn factory_error_keeps_source() {
        let err = SyncError::factory(std::io::Error::new(
            std::io::ErrorKind::Other,
            "allocation refused",
        ));
        assert!(err.is_factory());
        let source = std::error::Error::source(&err).expect("source must be preserved");
        assert!(source.to_string().contains("allocation refused"));
    }
}
