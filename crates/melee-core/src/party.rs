//! The party: an ordered group of creatures and its group operations.
//!
//! A [`Party`] owns creatures in a significant order: new creatures join at
//! the back, and the back is also the conventional "front" target struck by
//! incoming single-target attacks. A creature is removed the moment a
//! damage-applying operation observes it at zero HP, never deferred.
//!
//! Operations:
//! - [`Party::attack`]: every creature rolls; outcomes are sorted and
//!   folded into the running-total display
//! - [`Party::receive_attack`]: one AC-checked hit against the back
//!   creature
//! - [`Party::save`]: a saving-throw pass over the whole party with
//!   in-place removal of the defeated
//! - [`Party::status`]: survivor count and HP snapshot
//!
//! All operations are synchronous and complete in one call; the party is
//! never observable in a partially-applied state.
//!
//! # Example
//!
//! ```
//! use melee_core::creature::CreatureTemplate;
//! use melee_core::dice::{Dice, RollMode};
//! use melee_core::party::Party;
//!
//! let mut party = Party::from_template(CreatureTemplate::tiny_animated_object(), 10);
//! let mut dice = Dice::seeded(42);
//!
//! let report = party.attack(&mut dice, RollMode::Standard);
//! assert_eq!(report.lines().len(), 10);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::creature::{Ability, Creature, CreatureTemplate};
use crate::dice::{RollMode, Roller};
use crate::outcome::AttackOutcome;
use crate::report::{AttackLine, AttackReport, ReceiveReport, SaveLine, SaveReport, StatusReport};

/// How much damage a successful save leaves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageShare {
    /// Half damage on success, rounded down.
    Half,
    /// No damage on success.
    None,
}

impl DamageShare {
    /// Returns the damage a creature takes given its save result.
    #[must_use]
    pub const fn applied(self, damage: u32, saved: bool) -> u32 {
        if saved {
            match self {
                Self::Half => damage / 2,
                Self::None => 0,
            }
        } else {
            damage
        }
    }
}

impl fmt::Display for DamageShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Half => write!(f, "half"),
            Self::None => write!(f, "none"),
        }
    }
}

/// An ordered group of creatures.
///
/// The sequence order is significant; see the module docs. Removal shifts
/// later creatures one slot toward the front without changing their
/// relative order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Party {
    creatures: Vec<Creature>,
}

impl Party {
    /// Creates an empty party.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            creatures: Vec::new(),
        }
    }

    /// Creates a party of `count` creatures stamped from one template.
    #[must_use]
    pub fn from_template(template: CreatureTemplate, count: usize) -> Self {
        Self {
            creatures: vec![Creature::from_template(template); count],
        }
    }

    /// Appends a creature at the back of the sequence.
    pub fn push(&mut self, creature: Creature) {
        self.creatures.push(creature);
    }

    /// Returns the number of surviving creatures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Returns `true` if no creatures survive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Returns the creatures in sequence order.
    #[must_use]
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Rolls a group attack: one independent roll per creature.
    ///
    /// Outcomes are sorted ascending — critical misses, then normals by
    /// `(to_hit, damage)`, then critical hits by damage — and folded into
    /// display lines carrying running totals:
    ///
    /// - the first normal line at each distinct to-hit value shows the
    ///   running total at that point; repeats of the same to-hit do not
    /// - every normal line's damage is subtracted from the running total
    ///   after the line is emitted, whether or not a total was shown
    /// - critical hits always show the remaining total and never diminish
    ///   it, since they land regardless of the defender's armor class
    ///
    /// The total shown beside a to-hit value therefore equals the damage a
    /// defender with that armor class would take: every outcome at that
    /// to-hit or better, critical hits included.
    pub fn attack<R: Roller>(&self, dice: &mut R, mode: RollMode) -> AttackReport {
        if self.creatures.is_empty() {
            return AttackReport::NoTargets;
        }
        debug!(attackers = self.creatures.len(), %mode, "resolving group attack");

        let mut outcomes: Vec<AttackOutcome> = self
            .creatures
            .iter()
            .map(|creature| creature.roll_attack(dice, mode))
            .collect();
        outcomes.sort_by_key(AttackOutcome::key);

        let grand_total: u32 = outcomes.iter().map(AttackOutcome::damage).sum();

        let mut remaining = grand_total;
        let mut last_to_hit: Option<i32> = None;
        let mut lines = Vec::with_capacity(outcomes.len());
        for outcome in &outcomes {
            match *outcome {
                AttackOutcome::CriticalMiss => lines.push(AttackLine::CriticalMiss),
                AttackOutcome::Normal { to_hit, damage } => {
                    let total = if last_to_hit == Some(to_hit) {
                        None
                    } else {
                        last_to_hit = Some(to_hit);
                        Some(remaining)
                    };
                    lines.push(AttackLine::Normal {
                        to_hit,
                        damage,
                        total,
                    });
                    remaining -= damage;
                }
                AttackOutcome::CriticalHit { damage } => {
                    lines.push(AttackLine::CriticalHit {
                        damage,
                        total: remaining,
                    });
                }
            }
        }

        AttackReport::Resolved { grand_total, lines }
    }

    /// Resolves one incoming attack against the back creature.
    ///
    /// If the to-hit value fails against the target's armor class, nothing
    /// changes. On a hit the damage is applied (clamped at zero) and the
    /// target is removed immediately if its HP reaches zero.
    pub fn receive_attack(&mut self, to_hit: i32, damage: u32) -> ReceiveReport {
        let target = match self.creatures.last_mut() {
            Some(creature) => creature,
            None => return ReceiveReport::NoTargets,
        };

        if !target.check_against_ac(to_hit) {
            debug!(to_hit, "incoming attack missed");
            return ReceiveReport::Miss { to_hit };
        }

        let hp_before = target.hp();
        target.apply_damage(damage);
        let hp_after = target.hp();
        let destroyed = hp_after == 0;
        if destroyed {
            self.creatures.pop();
        }
        debug!(to_hit, damage, hp_after, destroyed, "incoming attack hit");

        ReceiveReport::Hit {
            damage,
            hp_before,
            hp_after,
            destroyed,
        }
    }

    /// Runs a saving-throw pass over every creature, front to back.
    ///
    /// Each creature rolls an ability check against `dc`; a success takes
    /// the `share` of `damage` (integer halving rounds down), a failure
    /// takes it all. Creatures reaching zero HP are removed in place.
    ///
    /// The pass walks forward once with a write index, compacting the
    /// survivors as it goes, so every creature is visited exactly once no
    /// matter how many die mid-pass.
    pub fn save<R: Roller>(
        &mut self,
        dice: &mut R,
        ability: Ability,
        share: DamageShare,
        dc: i32,
        damage: u32,
        mode: RollMode,
    ) -> SaveReport {
        if self.creatures.is_empty() {
            return SaveReport::NoTargets;
        }
        debug!(%ability, %share, dc, damage, %mode, "resolving saving throw");

        let mut lines = Vec::with_capacity(self.creatures.len());
        let mut write = 0;
        for read in 0..self.creatures.len() {
            let creature = &mut self.creatures[read];
            let attempt = creature.roll_ability_check(dice, ability, mode);
            let saved = attempt >= dc;

            let hp_before = creature.hp();
            creature.apply_damage(share.applied(damage, saved));
            let hp_after = creature.hp();
            lines.push(SaveLine {
                saved,
                attempt,
                hp_before,
                hp_after,
            });

            if hp_after > 0 {
                self.creatures.swap(write, read);
                write += 1;
            }
        }
        self.creatures.truncate(write);

        SaveReport::Resolved {
            ability,
            dc,
            damage,
            lines,
        }
    }

    /// Returns a snapshot of survivor count and HP in sequence order.
    #[must_use]
    pub fn status(&self) -> StatusReport {
        StatusReport {
            hp: self.creatures.iter().map(Creature::hp).collect(),
        }
    }
}
