use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::ConfigError;
use crate::VlanId;

/// A validated old-range to new-range translation.
///
/// Both ranges are closed, hold at least two ids, and have the same length,
/// so every old id maps to exactly one new id by a constant offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeSpec {
    old_start: VlanId,
    old_end: VlanId,
    new_start: VlanId,
    new_end: VlanId,
}

impl RangeSpec {
    pub fn new(old: (VlanId, VlanId), new: (VlanId, VlanId)) -> Result<Self, ConfigError> {
        let spec = Self {
            old_start: old.0,
            old_end: old.1,
            new_start: new.0,
            new_end: new.1,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.old_start >= self.old_end {
            return Err(ConfigError::InvalidOldRange {
                start: self.old_start,
                end: self.old_end,
            });
        }
        if self.new_start >= self.new_end {
            return Err(ConfigError::InvalidNewRange {
                start: self.new_start,
                end: self.new_end,
            });
        }
        let old_len = span_len(self.old_start, self.old_end);
        let new_len = span_len(self.new_start, self.new_end);
        if old_len != new_len {
            return Err(ConfigError::RangeSizeMismatch {
                old_start: self.old_start,
                old_end: self.old_end,
                old_len,
                new_start: self.new_start,
                new_end: self.new_end,
                new_len,
            });
        }
        Ok(())
    }

    pub fn old_range(&self) -> RangeInclusive<VlanId> {
        self.old_start..=self.old_end
    }

    pub fn new_range(&self) -> RangeInclusive<VlanId> {
        self.new_start..=self.new_end
    }

    /// Number of ids in each range.
    pub fn size(&self) -> u64 {
        span_len(self.old_start, self.old_end)
    }

    /// Signed distance from the old range to the new one.
    pub fn offset(&self) -> i64 {
        i64::from(self.new_start) - i64::from(self.old_start)
    }

    pub fn contains(&self, id: VlanId) -> bool {
        self.old_range().contains(&id)
    }

    /// Translate an id from the old range; `None` outside it.
    pub fn translate(&self, id: VlanId) -> Option<VlanId> {
        if !self.contains(id) {
            return None;
        }
        // Equal lengths keep the result inside the new range.
        VlanId::try_from(i64::from(id) + self.offset()).ok()
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} -> {}-{}",
            self.old_start, self.old_end, self.new_start, self.new_end
        )
    }
}

fn span_len(start: VlanId, end: VlanId) -> u64 {
    u64::from(end) - u64::from(start) + 1
}
