//! Process-unique object identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::error;

use crate::domain::error::{DomainError, DomainResult};

/// Object identifier of a node. Never 0 when drawn from an [`OidGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Oid(u64);

impl Oid {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Oid {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Monotonic oid counter, safe to share between threads.
///
/// The counter holds the next oid to hand out. Once `u64::MAX` has been
/// issued it wraps to 0, and from then on every draw fails with
/// [`DomainError::OidExhausted`].
#[derive(Debug)]
pub struct OidGenerator {
    next: AtomicU64,
}

impl Default for OidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl OidGenerator {
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    pub fn next_oid(&self) -> DomainResult<Oid> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                (current != 0).then(|| current.wrapping_add(1))
            })
            .map(Oid)
            .map_err(|_| {
                error!("oid counter wrapped around");
                DomainError::OidExhausted
            })
    }

    /// The oid the next successful draw would return, 0 when exhausted.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

static GLOBAL_OIDS: OidGenerator = OidGenerator::new();

/// The process-wide generator used by the default node factory.
pub fn global_oids() -> &'static OidGenerator {
    &GLOBAL_OIDS
}

/// Draw from the process-wide generator.
pub fn next_oid() -> DomainResult<Oid> {
    GLOBAL_OIDS.next_oid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_fresh_generator_when_drawing_then_starts_at_one() {
        let oids = OidGenerator::new();
        assert_eq!(oids.next_oid().unwrap(), Oid::new(1));
        assert_eq!(oids.next_oid().unwrap(), Oid::new(2));
    }

    #[test]
    fn given_last_value_when_drawing_then_exhausts_and_stays_exhausted() {
        let oids = OidGenerator::starting_at(u64::MAX);
        assert_eq!(oids.next_oid().unwrap(), Oid::new(u64::MAX));
        assert_eq!(oids.next_oid(), Err(DomainError::OidExhausted));
        assert_eq!(oids.next_oid(), Err(DomainError::OidExhausted));
        assert_eq!(oids.peek(), 0);
    }

    #[test]
    fn given_global_generator_when_drawing_then_never_zero() {
        let a = next_oid().unwrap();
        let b = next_oid().unwrap();
        assert!(a.value() > 0);
        assert!(b > a);
    }
}
