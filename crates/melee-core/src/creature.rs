//! Creatures and the templates they are stamped from.
//!
//! This module provides the entity side of the engine:
//! - [`Ability`] and [`AbilityScores`]: the six named stats and their
//!   derived modifiers
//! - [`AttackProfile`]: the fixed attack numbers of a template
//! - [`CreatureTemplate`]: immutable profile data a creature is built from
//! - [`Conditions`]: condition tags carried on a creature (reserved)
//! - [`Creature`]: a live combatant with current HP
//!
//! # Templates Are Data
//!
//! A creature is a single record parameterized by a template value, not a
//! subtype. The engine is generic over the template; the shell instantiates
//! exactly one profile ([`CreatureTemplate::tiny_animated_object`]) but
//! nothing here depends on that.
//!
//! # Example
//!
//! ```
//! use melee_core::creature::{Creature, CreatureTemplate};
//!
//! let mut creature = Creature::from_template(CreatureTemplate::tiny_animated_object());
//! assert_eq!(creature.hp(), 20);
//!
//! creature.apply_damage(25);
//! assert_eq!(creature.hp(), 0); // clamped, never negative
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use crate::dice::{RollMode, Roller};
use crate::outcome::AttackOutcome;

/// One of the six named ability stats.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// Physical power.
    Strength,
    /// Agility and reflexes.
    Dexterity,
    /// Endurance and vital force.
    Constitution,
    /// Reasoning and memory.
    Intelligence,
    /// Perception and insight.
    Wisdom,
    /// Force of personality.
    Charisma,
}

impl Ability {
    /// All six abilities in conventional order.
    pub const ALL: [Self; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strength => write!(f, "Strength"),
            Self::Dexterity => write!(f, "Dexterity"),
            Self::Constitution => write!(f, "Constitution"),
            Self::Intelligence => write!(f, "Intelligence"),
            Self::Wisdom => write!(f, "Wisdom"),
            Self::Charisma => write!(f, "Charisma"),
        }
    }
}

/// The six ability scores of a template.
///
/// Scores are plain integers; the derived modifier is `score / 2 - 5` using
/// truncation-toward-zero division, which matters for odd and negative
/// scores (a score of 3 gives -4, a score of -3 gives -6).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Strength score.
    pub strength: i32,
    /// Dexterity score.
    pub dexterity: i32,
    /// Constitution score.
    pub constitution: i32,
    /// Intelligence score.
    pub intelligence: i32,
    /// Wisdom score.
    pub wisdom: i32,
    /// Charisma score.
    pub charisma: i32,
}

impl AbilityScores {
    /// Creates a score block in Str/Dex/Con/Int/Wis/Cha order.
    #[must_use]
    pub const fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    /// Returns the raw score for an ability.
    #[must_use]
    pub const fn score(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Returns the derived modifier for an ability.
    ///
    /// # Example
    ///
    /// ```
    /// use melee_core::creature::{Ability, AbilityScores};
    ///
    /// let scores = AbilityScores::new(4, 18, 10, 3, 3, 1);
    /// assert_eq!(scores.modifier(Ability::Dexterity), 4);
    /// assert_eq!(scores.modifier(Ability::Strength), -3);
    /// assert_eq!(scores.modifier(Ability::Charisma), -5);
    /// ```
    #[must_use]
    pub const fn modifier(&self, ability: Ability) -> i32 {
        self.score(ability) / 2 - 5
    }
}

/// The fixed attack numbers of a creature template.
///
/// Immutable after construction. `die_size` must be at least 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackProfile {
    /// Added to the raw d20 face to form the to-hit value.
    pub attack_bonus: i32,
    /// Number of damage dice rolled on a hit.
    pub die_count: u32,
    /// Faces per damage die.
    pub die_size: u32,
    /// Flat damage added once, never doubled by a critical hit.
    pub flat_bonus: u32,
}

impl AttackProfile {
    /// Creates an attack profile.
    #[must_use]
    pub const fn new(attack_bonus: i32, die_count: u32, die_size: u32, flat_bonus: u32) -> Self {
        Self {
            attack_bonus,
            die_count,
            die_size,
            flat_bonus,
        }
    }
}

/// Immutable profile data a creature is created from.
///
/// Templates are plain serializable data so the shell can load a custom one
/// from JSON; the engine only ever reads them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureTemplate {
    /// Hit points at creation.
    pub max_hp: u32,
    /// Defense threshold a to-hit value must meet or exceed.
    pub armor_class: i32,
    /// The six ability scores.
    pub scores: AbilityScores,
    /// The template's attack numbers.
    pub attack: AttackProfile,
}

impl CreatureTemplate {
    /// The tiny animated object profile used by the standard encounter.
    ///
    /// HP 20, AC 18, Str 4 / Dex 18 / Con 10 / Int 3 / Wis 3 / Cha 1,
    /// attacking at +8 for 1d4+4.
    #[must_use]
    pub const fn tiny_animated_object() -> Self {
        Self {
            max_hp: 20,
            armor_class: 18,
            scores: AbilityScores::new(4, 18, 10, 3, 3, 1),
            attack: AttackProfile::new(8, 1, 4, 4),
        }
    }
}

bitflags! {
    /// Condition tags a creature can carry.
    ///
    /// Present in the data model as an extension point; no current
    /// operation reads or writes these.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Conditions: u8 {
        /// Knocked prone.
        const PRONE = 1 << 0;
        /// Movement pinned.
        const RESTRAINED = 1 << 1;
        /// Unable to act.
        const INCAPACITATED = 1 << 2;
        /// Stunned.
        const STUNNED = 1 << 3;
    }
}

/// A live combatant: template data plus current HP and condition tags.
///
/// Creatures are created fully-formed from a template and mutate only via
/// HP reduction. HP never goes negative; damage past zero clamps.
///
/// # Example
///
/// ```
/// use melee_core::creature::{Creature, CreatureTemplate};
///
/// let creature = Creature::from_template(CreatureTemplate::tiny_animated_object());
/// assert!(creature.check_against_ac(18)); // meets AC exactly: a hit
/// assert!(!creature.check_against_ac(17));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    hp: u32,
    template: CreatureTemplate,
    conditions: Conditions,
}

impl Creature {
    /// Creates a creature at full HP from a template.
    #[must_use]
    pub const fn from_template(template: CreatureTemplate) -> Self {
        Self {
            hp: template.max_hp,
            template,
            conditions: Conditions::empty(),
        }
    }

    /// Returns current hit points.
    #[must_use]
    pub const fn hp(&self) -> u32 {
        self.hp
    }

    /// Returns the template this creature was created from.
    #[must_use]
    pub const fn template(&self) -> &CreatureTemplate {
        &self.template
    }

    /// Returns the creature's condition tags.
    #[must_use]
    pub const fn conditions(&self) -> Conditions {
        self.conditions
    }

    /// Returns a mutable reference to the creature's condition tags.
    pub fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.conditions
    }

    /// Returns `true` if the given to-hit value lands against this
    /// creature's armor class.
    #[must_use]
    pub const fn check_against_ac(&self, to_hit: i32) -> bool {
        to_hit >= self.template.armor_class
    }

    /// Reduces HP by `amount`, clamping at zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Rolls an ability check: a d20 under `mode` plus the ability's
    /// modifier. The result may be negative.
    pub fn roll_ability_check<R: Roller>(
        &self,
        dice: &mut R,
        ability: Ability,
        mode: RollMode,
    ) -> i32 {
        let roll = dice.d20(mode);
        let modifier = self.template.scores.modifier(ability);
        trace!(%ability, roll, modifier, "ability check");
        roll as i32 + modifier
    }

    /// Rolls an attack and classifies the result.
    ///
    /// A natural 1 is a critical miss regardless of the attack bonus. A
    /// natural 20 is a critical hit: the damage dice are doubled, the flat
    /// bonus is applied exactly once. Anything else is a normal outcome
    /// with `to_hit = roll + attack_bonus`.
    pub fn roll_attack<R: Roller>(&self, dice: &mut R, mode: RollMode) -> AttackOutcome {
        let attack = &self.template.attack;
        let roll = dice.d20(mode);

        if roll == 1 {
            trace!(roll, "attack roll");
            return AttackOutcome::CriticalMiss;
        }

        let crit_multiplier = if roll == 20 { 2 } else { 1 };
        let die_count = crit_multiplier * attack.die_count;
        let mut damage = attack.flat_bonus;
        for _ in 0..die_count {
            damage += dice.die(attack.die_size);
        }
        trace!(roll, damage, "attack roll");

        if roll == 20 {
            AttackOutcome::CriticalHit { damage }
        } else {
            AttackOutcome::Normal {
                to_hit: roll as i32 + attack.attack_bonus,
                damage,
            }
        }
    }
}
