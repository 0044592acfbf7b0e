//! Retry policies for catalog searches.

use async_trait::async_trait;
use discount_core::catalog::CatalogProduct;
use discount_core::search::CatalogQuery;
use tracing::warn;

use crate::client::{CatalogClient, FetchError};

/// Conditions that trigger a retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryCondition {
    /// Retry on specific HTTP status code.
    StatusCode(u16),
    /// Retry on any 5xx status.
    ServerError,
    /// Retry on connection error.
    ConnectionError,
}

impl RetryCondition {
    /// Check if an error matches this condition.
    pub fn matches(&self, error: &FetchError) -> bool {
        match (self, error) {
            (Self::StatusCode(code), FetchError::Http { status, .. }) => status == code,
            (Self::ServerError, FetchError::Http { status, .. }) => (500..600).contains(status),
            (Self::ConnectionError, FetchError::Connection(_)) => true,
            _ => false,
        }
    }
}

/// Retry policy configuration.
///
/// `max_attempts` counts retries after the first request, so `0` means a
/// single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts.
    pub max_attempts: u32,
    /// Conditions that trigger retry.
    pub retry_on: Vec<RetryCondition>,
}

impl RetryPolicy {
    /// Create a new retry policy.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            retry_on: vec![RetryCondition::ServerError, RetryCondition::ConnectionError],
        }
    }

    /// Create a policy with no retries.
    pub fn none() -> Self {
        Self {
            max_attempts: 0,
            retry_on: Vec::new(),
        }
    }

    /// Set retry conditions.
    pub fn with_conditions(mut self, conditions: Vec<RetryCondition>) -> Self {
        self.retry_on = conditions;
        self
    }

    /// Check if a failed attempt should be retried.
    pub fn should_retry(&self, error: &FetchError, attempt: u32) -> bool {
        if attempt >= self.max_attempts {
            return false;
        }
        self.retry_on.iter().any(|c| c.matches(error))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Wraps a client and re-issues failed searches per a [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct RetryingCatalog<C> {
    inner: C,
    policy: RetryPolicy,
}

impl<C> RetryingCatalog<C> {
    pub fn new(inner: C, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait(?Send)]
impl<C: CatalogClient> CatalogClient for RetryingCatalog<C> {
    async fn search(&self, query: &CatalogQuery) -> Result<Vec<CatalogProduct>, FetchError> {
        let mut attempt = 0;
        loop {
            match self.inner.search(query).await {
                Ok(products) => return Ok(products),
                Err(err) if self.policy.should_retry(&err, attempt) => {
                    attempt += 1;
                    warn!(
                        key = %query.key(),
                        attempt,
                        error = %err,
                        "Catalog search failed, retrying"
                    );
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> FetchError {
        FetchError::Http {
            status,
            url: "https://api.example.com".to_string(),
        }
    }

    #[test]
    fn test_conditions() {
        assert!(RetryCondition::ServerError.matches(&http(503)));
        assert!(!RetryCondition::ServerError.matches(&http(404)));
        assert!(RetryCondition::StatusCode(429).matches(&http(429)));
        assert!(RetryCondition::ConnectionError.matches(&FetchError::Connection("reset".into())));
        assert!(!RetryCondition::ServerError.matches(&FetchError::Deserialization("x".into())));
    }

    #[test]
    fn test_attempt_budget() {
        let policy = RetryPolicy::new(2);
        assert!(policy.should_retry(&http(500), 0));
        assert!(policy.should_retry(&http(500), 1));
        assert!(!policy.should_retry(&http(500), 2));
        assert!(!RetryPolicy::none().should_retry(&http(500), 0));
    }
}
