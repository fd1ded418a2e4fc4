//! Id Allocation
//!
//! How `begin_add` picks the id of a new draft.

use serde::{Deserialize, Serialize};

/// Id synthesis strategy for new items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `item count + 1`. Can reuse a live id after a deletion.
    #[default]
    LengthPlusOne,
    /// One past the highest id ever seen; never reuses ids
    Monotonic,
}

impl IdStrategy {
    /// Next id given the current item count and the highest id seen so far
    pub fn next_id(&self, len: usize, highest_seen: u32) -> u32 {
        let by_len = u32::try_from(len).unwrap_or(u32::MAX).saturating_add(1);
        match self {
            IdStrategy::LengthPlusOne => by_len,
            IdStrategy::Monotonic => by_len.max(highest_seen.saturating_add(1)),
        }
    }
}
