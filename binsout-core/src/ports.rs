//! Traits describing provider capabilities and shared helper types.

use async_trait::async_trait;

use crate::model::{Address, CouncilId, CouncilMeta, Schedule};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while resolving a lookup.
///
/// A query that simply matches nothing is not an error; ports report that as
/// an empty result set.
pub enum LookupError {
    /// The council has no registered plugin.
    #[error("Unknown council")]
    UnknownCouncil,
    /// The council defines no schedule. Cannot happen with well-formed
    /// provider data, which always carries one rule per bin type.
    #[error("No schedule published for council {0}")]
    MissingSchedule(CouncilId),
    /// Internal provider error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone)]
/// Free-text query entered by the user.
pub struct AddressQuery {
    /// Raw query text as typed.
    pub text: String,
}

impl AddressQuery {
    /// Construct a new query.
    #[must_use]
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    /// Check if the query is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[async_trait]
/// Trait for provider-specific address lookup backends.
pub trait AddressPort: Send + Sync {
    /// Metadata describing the council handled by this port.
    fn council(&self) -> &CouncilMeta;

    /// Find addresses matching the query within the council.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when the provider backend fails. A query
    /// that matches nothing yields `Ok(vec![])`.
    async fn search(
        &self,
        query: &AddressQuery,
        limit: usize,
    ) -> Result<Vec<Address>, LookupError>;
}

#[async_trait]
/// Trait for provider-specific schedule backends.
pub trait SchedulePort: Send + Sync {
    /// Metadata describing the council handled by this port.
    fn council(&self) -> &CouncilMeta;

    /// Fetch the council's kerbside collection schedule.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when the provider backend fails or the
    /// council publishes no schedule.
    async fn schedule(&self) -> Result<Schedule, LookupError>;
}
