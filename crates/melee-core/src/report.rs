//! Structured reports produced by party operations.
//!
//! Every mutating operation returns a report instead of printing. The
//! numeric values carried here — to-hit values, damage, running totals, HP
//! before/after — are the load-bearing contract; the `Display`
//! implementations render the human-readable transcript and may be reworded
//! freely.
//!
//! # Running Totals
//!
//! [`AttackLine`] carries the "total damage at this AC threshold" figures:
//! the total shown beside a to-hit value is the damage an opponent would
//! take if its armor class equalled that value, i.e. the sum of every
//! outcome at that to-hit or better, critical hits included. See
//! [`Party::attack`](crate::party::Party::attack) for how the figures are
//! produced.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::creature::Ability;

/// One display line of a group attack report.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackLine {
    /// A natural 1; contributes nothing to any total.
    CriticalMiss,
    /// An ordinary attack result.
    Normal {
        /// The outcome's to-hit value.
        to_hit: i32,
        /// The outcome's rolled damage.
        damage: u32,
        /// The running total, shown the first time this to-hit value
        /// appears; `None` for repeats of the same to-hit.
        total: Option<u32>,
    },
    /// A natural 20; always lands, so it always shows the remaining total.
    CriticalHit {
        /// The outcome's rolled damage.
        damage: u32,
        /// The running total at this line (undiminished by critical hits).
        total: u32,
    },
}

impl fmt::Display for AttackLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::CriticalMiss => write!(f, "Critical Miss!"),
            Self::Normal {
                to_hit,
                damage,
                total: Some(total),
            } => write!(f, "{to_hit} to hit {damage} damage ({total} total)"),
            Self::Normal {
                to_hit,
                damage,
                total: None,
            } => write!(f, "{to_hit} to hit {damage} damage"),
            Self::CriticalHit { damage, total } => {
                write!(f, "Critical hit! {damage} damage ({total} total)")
            }
        }
    }
}

/// Report of one group attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackReport {
    /// The party was empty; no dice were rolled.
    NoTargets,
    /// One line per attacker, in ascending display order.
    Resolved {
        /// Sum of damage over every outcome in the batch.
        grand_total: u32,
        /// Display lines: misses, then normals, then critical hits.
        lines: Vec<AttackLine>,
    },
}

impl AttackReport {
    /// Returns the display lines, empty when there were no targets.
    #[must_use]
    pub fn lines(&self) -> &[AttackLine] {
        match self {
            Self::NoTargets => &[],
            Self::Resolved { lines, .. } => lines,
        }
    }

    /// Returns the batch's grand total damage (zero when empty).
    #[must_use]
    pub const fn grand_total(&self) -> u32 {
        match self {
            Self::NoTargets => 0,
            Self::Resolved { grand_total, .. } => *grand_total,
        }
    }
}

impl fmt::Display for AttackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTargets => write!(f, "No creatures left to attack with"),
            Self::Resolved { lines, .. } => {
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{line}")?;
                }
                Ok(())
            }
        }
    }
}

/// Report of a single incoming attack against the front of the party.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiveReport {
    /// The party was empty; nothing happened.
    NoTargets,
    /// The to-hit value failed against the target's armor class.
    Miss {
        /// The attacker's to-hit value.
        to_hit: i32,
    },
    /// The attack landed.
    Hit {
        /// Damage applied (before clamping).
        damage: u32,
        /// Target HP before the hit.
        hp_before: u32,
        /// Target HP after the hit.
        hp_after: u32,
        /// `true` if the target reached zero HP and was removed.
        destroyed: bool,
    },
}

impl fmt::Display for ReceiveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NoTargets => write!(f, "No creatures left to take damage"),
            Self::Miss { to_hit } => write!(f, "{to_hit} to hit misses"),
            Self::Hit {
                damage,
                hp_before,
                hp_after,
                destroyed,
            } => {
                write!(f, "{damage} damage, HP: {hp_before} -> {hp_after}")?;
                if destroyed {
                    write!(f, " (destroyed)")?;
                }
                Ok(())
            }
        }
    }
}

/// One creature's line of a saving-throw pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveLine {
    /// `true` if the check met or exceeded the DC.
    pub saved: bool,
    /// The check result (d20 plus ability modifier; may be negative).
    pub attempt: i32,
    /// HP before damage was applied.
    pub hp_before: u32,
    /// HP after damage was applied.
    pub hp_after: u32,
}

impl SaveLine {
    /// Returns `true` if this creature reached zero HP on this line.
    #[must_use]
    pub const fn destroyed(&self) -> bool {
        self.hp_after == 0
    }
}

impl fmt::Display for SaveLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.saved { "Saved!" } else { "Failed" };
        write!(
            f,
            "{verdict} ({}) HP: {} -> {}",
            self.attempt, self.hp_before, self.hp_after
        )
    }
}

/// Report of a saving-throw pass over the whole party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveReport {
    /// The party was empty; no dice were rolled.
    NoTargets,
    /// One line per creature, in the order they were visited.
    Resolved {
        /// The ability the throw was made with.
        ability: Ability,
        /// The difficulty class each attempt was compared against.
        dc: i32,
        /// Damage on a failed save.
        damage: u32,
        /// One line per visited creature.
        lines: Vec<SaveLine>,
    },
}

impl SaveReport {
    /// Returns the per-creature lines, empty when there were no targets.
    #[must_use]
    pub fn lines(&self) -> &[SaveLine] {
        match self {
            Self::NoTargets => &[],
            Self::Resolved { lines, .. } => lines,
        }
    }
}

impl fmt::Display for SaveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTargets => write!(f, "No creatures left to make saves"),
            Self::Resolved {
                ability,
                dc,
                damage,
                lines,
            } => {
                writeln!(f, "Running {ability} save DC: {dc} or {damage} damage")?;
                for line in lines {
                    writeln!(f, "{line}")?;
                }
                write!(f, "----")
            }
        }
    }
}

/// Snapshot of the party's surviving creatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// HP of each survivor, in sequence order.
    pub hp: Vec<u32>,
}

impl StatusReport {
    /// Returns the number of surviving creatures.
    #[must_use]
    pub fn count(&self) -> usize {
        self.hp.len()
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Num left: {}", self.hp.len())?;
        write!(f, "HPs: ")?;
        for (i, hp) in self.hp.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{hp}")?;
        }
        Ok(())
    }
}
