//! Attack outcomes and their ordering.
//!
//! One creature's attack roll classifies into exactly one of three shapes:
//! - [`AttackOutcome::CriticalMiss`]: a natural 1, always misses, zero damage
//! - [`AttackOutcome::Normal`]: an ordinary roll carrying a to-hit value and
//!   rolled damage
//! - [`AttackOutcome::CriticalHit`]: a natural 20, always hits, carrying
//!   doubled-dice damage
//!
//! # Ordering
//!
//! Group resolution sorts a batch of outcomes into ascending display order:
//! misses first, then normals ascending by `(to_hit, damage)`, then critical
//! hits ascending by damage. That relation is captured by [`OutcomeKey`], a
//! rank-then-payload key whose derived ordering compares the variant first
//! and the payload lexicographically second. No sentinel to-hit values are
//! involved; a critical hit outranks every normal outcome by construction.
//!
//! # Example
//!
//! ```
//! use melee_core::outcome::AttackOutcome;
//!
//! let mut outcomes = vec![
//!     AttackOutcome::CriticalHit { damage: 9 },
//!     AttackOutcome::Normal { to_hit: 14, damage: 6 },
//!     AttackOutcome::CriticalMiss,
//!     AttackOutcome::Normal { to_hit: 14, damage: 2 },
//! ];
//! outcomes.sort_by_key(AttackOutcome::key);
//!
//! assert_eq!(outcomes[0], AttackOutcome::CriticalMiss);
//! assert_eq!(outcomes[1], AttackOutcome::Normal { to_hit: 14, damage: 2 });
//! assert_eq!(outcomes[2], AttackOutcome::Normal { to_hit: 14, damage: 6 });
//! assert_eq!(outcomes[3], AttackOutcome::CriticalHit { damage: 9 });
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The classified result of one creature's attack roll.
///
/// Exactly one shape per roll; `damage` is always well-defined and is zero
/// for a critical miss.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// Natural 1: automatic miss regardless of any attack bonus.
    CriticalMiss,
    /// An ordinary roll, compared against the defender's armor class.
    Normal {
        /// Raw d20 face plus the attacker's attack bonus.
        to_hit: i32,
        /// Rolled damage (dice plus flat bonus).
        damage: u32,
    },
    /// Natural 20: automatic hit with damage dice doubled.
    CriticalHit {
        /// Rolled damage (doubled dice plus flat bonus, applied once).
        damage: u32,
    },
}

impl AttackOutcome {
    /// Returns the damage this outcome deals if it lands.
    ///
    /// A critical miss contributes zero.
    #[must_use]
    pub const fn damage(&self) -> u32 {
        match *self {
            Self::CriticalMiss => 0,
            Self::Normal { damage, .. } | Self::CriticalHit { damage } => damage,
        }
    }

    /// Returns the sort key placing this outcome in ascending display order.
    #[must_use]
    pub const fn key(&self) -> OutcomeKey {
        match *self {
            Self::CriticalMiss => OutcomeKey::Miss,
            Self::Normal { to_hit, damage } => OutcomeKey::Normal { to_hit, damage },
            Self::CriticalHit { damage } => OutcomeKey::Critical { damage },
        }
    }

    /// Returns `true` if this outcome is a critical miss.
    #[must_use]
    pub const fn is_critical_miss(&self) -> bool {
        matches!(self, Self::CriticalMiss)
    }

    /// Returns `true` if this outcome is a critical hit.
    #[must_use]
    pub const fn is_critical_hit(&self) -> bool {
        matches!(self, Self::CriticalHit { .. })
    }

    /// Returns `true` if this outcome is an ordinary roll.
    #[must_use]
    pub const fn is_normal(&self) -> bool {
        matches!(self, Self::Normal { .. })
    }
}

impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::CriticalMiss => write!(f, "critical miss"),
            Self::Normal { to_hit, damage } => {
                write!(f, "{to_hit} to hit for {damage}")
            }
            Self::CriticalHit { damage } => write!(f, "critical hit for {damage}"),
        }
    }
}

/// Rank-then-payload ordering key for attack outcomes.
///
/// The variant declaration order is the ordering contract: every `Miss`
/// sorts below every `Normal`, which sorts below every `Critical`. Within
/// `Normal` the derived ordering compares `to_hit` first and `damage`
/// second; within `Critical` it compares `damage`. Two misses compare
/// equal, so a stable sort leaves them in roll order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OutcomeKey {
    /// Critical miss: below everything else.
    Miss,
    /// Ordinary roll, ordered by to-hit then damage.
    Normal {
        /// Primary sort key.
        to_hit: i32,
        /// Tie-break between equal to-hit values.
        damage: u32,
    },
    /// Critical hit: above everything else, ordered by damage.
    Critical {
        /// Sort key among critical hits.
        damage: u32,
    },
}
