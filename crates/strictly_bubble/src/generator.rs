//! Random list generation.

use derive_more::{Display, Error};
use derive_new::new;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default number of elements in a generated list.
pub const DEFAULT_LEN: usize = 6;
/// Smallest value a generated list may contain by default.
pub const DEFAULT_MIN: u32 = 1;
/// Largest value a generated list may contain by default.
pub const DEFAULT_MAX: u32 = 19;

/// Shape of a list to generate: its length and inclusive value range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ListSpec {
    /// Number of elements.
    pub len: usize,
    /// Smallest allowed value.
    pub min: u32,
    /// Largest allowed value.
    pub max: u32,
}

impl Default for ListSpec {
    fn default() -> Self {
        Self::new(DEFAULT_LEN, DEFAULT_MIN, DEFAULT_MAX)
    }
}

/// Error that can occur when generating a list.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GenerateError {
    /// The value range is empty.
    #[display("Empty value range {}..={}", min, max)]
    EmptyRange {
        /// Requested minimum.
        min: u32,
        /// Requested maximum.
        max: u32,
    },

    /// The range holds fewer distinct values than requested.
    #[display("Cannot draw {} distinct values from {}..={}", len, min, max)]
    RangeTooSmall {
        /// Requested length.
        len: usize,
        /// Requested minimum.
        min: u32,
        /// Requested maximum.
        max: u32,
    },
}

/// Draws `spec.len` distinct values from `spec.min..=spec.max` in random order.
#[instrument(skip(rng))]
pub fn generate_values<R: Rng + ?Sized>(
    spec: ListSpec,
    rng: &mut R,
) -> Result<Vec<u32>, GenerateError> {
    let ListSpec { len, min, max } = spec;
    if min > max {
        return Err(GenerateError::EmptyRange { min, max });
    }

    let available = (max - min) as u64 + 1;
    if len as u64 > available {
        return Err(GenerateError::RangeTooSmall { len, min, max });
    }

    // Every index in the range fits in u32 since the range itself does.
    let values: Vec<u32> = rand::seq::index::sample(rng, available as usize, len)
        .into_iter()
        .map(|offset| min + offset as u32)
        .collect();

    debug!(?values, "Generated list");
    Ok(values)
}
