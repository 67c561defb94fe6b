//! Handle alignment rules relative to the track.

use serde::{Deserialize, Serialize};

/// A rule pinning the handle to one edge of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleRule {
    /// Flush with the leading (left) edge
    AlignLeading,
    /// Flush with the trailing (right) edge
    AlignTrailing,
}

impl HandleRule {
    /// Rule for a checked state: trailing when checked, leading otherwise.
    #[must_use]
    pub const fn for_checked(checked: bool) -> Self {
        if checked {
            Self::AlignTrailing
        } else {
            Self::AlignLeading
        }
    }

    /// The rule for the other edge.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::AlignLeading => Self::AlignTrailing,
            Self::AlignTrailing => Self::AlignLeading,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::AlignLeading => 0b01,
            Self::AlignTrailing => 0b10,
        }
    }
}

/// The set of alignment rules currently applied to the handle.
///
/// A freshly created set is empty; a rendered toggle always holds exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AlignmentRules(u8);

impl AlignmentRules {
    /// Empty rule set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a rule. Adding a present rule is a no-op.
    pub fn add(&mut self, rule: HandleRule) {
        self.0 |= rule.bit();
    }

    /// Remove a rule. Removing an absent rule is a no-op.
    pub fn remove(&mut self, rule: HandleRule) {
        self.0 &= !rule.bit();
    }

    /// Whether `rule` is present.
    #[must_use]
    pub const fn contains(self, rule: HandleRule) -> bool {
        self.0 & rule.bit() != 0
    }

    /// Number of rules present.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether no rule is present.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The single rule in effect, or `None` when the set is empty or
    /// contradictory.
    #[must_use]
    pub const fn resolved(self) -> Option<HandleRule> {
        match self.0 {
            0b01 => Some(HandleRule::AlignLeading),
            0b10 => Some(HandleRule::AlignTrailing),
            _ => None,
        }
    }
}
