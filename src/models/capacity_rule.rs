//! The concurrent-vacation capacity rule.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

/// Default share of the headcount that may be on vacation at once.
pub const DEFAULT_CAPACITY_PERCENTAGE: u8 = 30;

/// Policy defining how many employees may be on vacation simultaneously.
///
/// The cap is either a percentage of the total headcount or, when
/// `fixed_cap` is set, that fixed number of people. The rule is handed to
/// every evaluation explicitly; nothing in the crate keeps a global copy.
///
/// On the wire and in `capacity.yaml` the fields are named
/// `max_concurrent_percentage` and `max_concurrent_fixed`.
///
/// # Example
///
/// ```
/// use vacation_planner::models::CapacityRule;
///
/// let rule = CapacityRule::default();
/// assert_eq!(rule.percentage, 30);
/// assert_eq!(rule.max_allowed(20), 6);
/// assert_eq!(rule.max_allowed(0), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityRule {
    /// Percentage of the headcount (0 to 100).
    #[serde(rename = "max_concurrent_percentage", default = "default_percentage")]
    pub percentage: u8,
    /// Fixed number of people; overrides the percentage when present.
    #[serde(rename = "max_concurrent_fixed", default)]
    pub fixed_cap: Option<NonZeroU32>,
}

fn default_percentage() -> u8 {
    DEFAULT_CAPACITY_PERCENTAGE
}

impl Default for CapacityRule {
    fn default() -> Self {
        Self {
            percentage: DEFAULT_CAPACITY_PERCENTAGE,
            fixed_cap: None,
        }
    }
}

impl CapacityRule {
    /// Creates a percentage-based rule.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidCapacityRule`] if `percentage > 100`.
    pub fn with_percentage(percentage: u8) -> PlannerResult<Self> {
        let rule = Self {
            percentage,
            fixed_cap: None,
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Creates a rule capping vacations at a fixed number of people.
    pub fn with_fixed_cap(cap: NonZeroU32) -> Self {
        Self {
            percentage: DEFAULT_CAPACITY_PERCENTAGE,
            fixed_cap: Some(cap),
        }
    }

    /// Checks the percentage lies within 0..=100.
    pub fn validate(&self) -> PlannerResult<()> {
        if self.percentage > 100 {
            return Err(PlannerError::InvalidCapacityRule {
                message: format!(
                    "max_concurrent_percentage {} is outside 0..=100",
                    self.percentage
                ),
            });
        }
        Ok(())
    }

    /// Returns the number of people allowed on vacation on the same day.
    ///
    /// A fixed cap wins. Otherwise the percentage share of the headcount is
    /// rounded down, but never below one so that small companies can still
    /// take leave. An empty company also allows one.
    pub fn max_allowed(&self, total_employees: u32) -> u32 {
        if let Some(cap) = self.fixed_cap {
            return cap.get();
        }
        if total_employees == 0 {
            return 1;
        }
        let share = u64::from(self.percentage) * u64::from(total_employees) / 100;
        u32::try_from(share).unwrap_or(u32::MAX).max(1)
    }
}
