//! # Melee Core
//!
//! Group combat encounter resolution for Melee.
//!
//! This crate simulates a party of identical weak creatures — animated
//! objects — attacking, being struck, and resisting area-effect saving
//! throws, all driven by d20 rolls with advantage/disadvantage semantics.
//!
//! ## Architecture
//!
//! - **Dice** ([`dice`]): uniform die faces behind the [`dice::Roller`]
//!   capability; production rolls come from a seeded `ChaCha8Rng`
//! - **Creatures** ([`creature`]): a template value (HP, AC, abilities,
//!   attack numbers) stamped into live combatants
//! - **Outcomes** ([`outcome`]): critical-miss / normal / critical-hit
//!   classification with a rank-then-payload ordering key
//! - **Party** ([`party`]): group attack resolution with running totals,
//!   single-target incoming attacks, and saving-throw passes
//! - **Reports** ([`report`]): structured transcript lines carrying the
//!   numeric contract of every operation
//!
//! ## Usage
//!
//! ```
//! use melee_core::{CreatureTemplate, Dice, Party, RollMode};
//!
//! let mut party = Party::from_template(CreatureTemplate::tiny_animated_object(), 10);
//! let mut dice = Dice::seeded(42);
//!
//! let report = party.attack(&mut dice, RollMode::Advantage);
//! println!("{report}");
//! ```
//!
//! ## Determinism
//!
//! The engine is single-threaded and synchronous: all draws come from one
//! sequential stream, so a session seeded with [`Dice::seeded`] replays
//! identically. No global random state exists anywhere in the crate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod creature;
pub mod dice;
pub mod outcome;
pub mod party;
pub mod report;

// Re-exports for convenience
pub use creature::{Ability, AbilityScores, AttackProfile, Conditions, Creature, CreatureTemplate};
pub use dice::{Dice, RollMode, Roller};
pub use outcome::{AttackOutcome, OutcomeKey};
pub use party::{DamageShare, Party};
pub use report::{
    AttackLine, AttackReport, ReceiveReport, SaveLine, SaveReport, StatusReport,
};

#[cfg(test)]
mod tests;
