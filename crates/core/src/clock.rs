//! Clock collaborator supplying issuance timestamps.

use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// The issuance log reads the clock exactly once per appended entry. Inject
/// [`FixedClock`] in tests for deterministic timestamps.
pub trait Clock: core::fmt::Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Test clock that always returns the same instant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
