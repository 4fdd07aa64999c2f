use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// An invariant violation raised while constructing or updating an entity.
///
/// Displays as `"<entity>: <reason>"`, e.g. `"Game: Name is required"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity}: {reason}")]
pub struct EntityError {
    entity: &'static str,
    reason: String,
}

impl EntityError {
    pub fn new(entity: &'static str, reason: impl Into<String>) -> Self {
        Self {
            entity,
            reason: reason.into(),
        }
    }

    /// Name of the entity whose invariant failed.
    #[cfg(test)]
    pub(crate) fn entity(&self) -> &'static str {
        self.entity
    }

    /// The violated rule, without the entity prefix.
    #[cfg(test)]
    pub(crate) fn reason(&self) -> &str {
        &self.reason
    }
}

/// The only failure type a service returns.
///
/// Either a bare message (`"Game not found"`) or a context string composed
/// with the message of the wrapped cause (`"Error adding game - Game: ..."`).
/// The cause stays reachable through [`std::error::Error::source`].
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl ServiceError {
    /// A failure with no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap `cause` under a use-case context string.
    pub fn wrap<E>(context: &str, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: format!("{context} - {cause}"),
            source: Some(Box::new(cause)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this error wraps an underlying cause.
    pub fn has_cause(&self) -> bool {
        self.source.is_some()
    }
}
