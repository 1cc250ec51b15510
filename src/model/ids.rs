use std::collections::HashSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{ContactsError, ContactsResult};

/// Largest identifier the generator will mint. Generated IDs live in `1..=MAX_ID`.
pub const MAX_ID: u32 = 1000;

/// Random draws tried before falling back to a scan for the lowest free value.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Contact identifier. Generated IDs are decimal integers, but imported
/// files may carry any string in the ID column, so the value is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Canonical form of an ID read from user input or a file. Surrounding
    /// whitespace is dropped, a blank ID becomes `"0"` and decimal IDs lose
    /// their leading zeros, so `"07"`, `" 7"` and `"7"` are the same ID.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self("0".to_string());
        }
        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            let digits = trimmed.trim_start_matches('0');
            return Self(if digits.is_empty() { "0" } else { digits }.to_string());
        }
        Self(trimmed.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Mints an ID that is not in `in_use`.
    ///
    /// Draws up to `max_attempts` candidates from `source`, then takes the
    /// lowest free value. Fails only when all of `1..=MAX_ID` is taken.
    pub fn generate(
        source: &mut dyn IdSource,
        in_use: &HashSet<ContactId>,
        max_attempts: usize,
    ) -> ContactsResult<Self> {
        let taken = |n: u32| in_use.contains(&ContactId::from(n));

        if (1..=MAX_ID).all(taken) {
            return Err(ContactsError::IdSpaceExhausted { max: MAX_ID });
        }

        for attempt in 1..=max_attempts {
            let candidate = source.next_candidate();
            if (1..=MAX_ID).contains(&candidate) && !taken(candidate) {
                tracing::debug!(id = candidate, attempt, "generated contact id");
                return Ok(ContactId::from(candidate));
            }
        }

        let fallback = (1..=MAX_ID)
            .find(|n| !taken(*n))
            .ok_or(ContactsError::IdSpaceExhausted { max: MAX_ID })?;
        tracing::debug!(id = fallback, max_attempts, "random draws exhausted, using lowest free id");
        Ok(ContactId::from(fallback))
    }
}

impl From<u32> for ContactId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Supplies candidate IDs to [`ContactId::generate`].
pub trait IdSource {
    /// Next candidate, expected in `1..=MAX_ID`. Out-of-range values are skipped.
    fn next_candidate(&mut self) -> u32;
}

/// Uniform random draws over `1..=MAX_ID`.
pub struct RandomIds {
    rng: StdRng,
}

impl RandomIds {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl IdSource for RandomIds {
    fn next_candidate(&mut self) -> u32 {
        self.rng.gen_range(1..=MAX_ID)
    }
}

/// Counts up from 1, wrapping after `MAX_ID`.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: u32,
}

impl IdSource for SequentialIds {
    fn next_candidate(&mut self) -> u32 {
        self.last = self.last % MAX_ID + 1;
        self.last
    }
}
