//! Test helper functions for setting up parties and scripted dice.

use crate::creature::{AbilityScores, AttackProfile, Creature, CreatureTemplate};
use crate::dice::Roller;
use crate::party::Party;

/// Roller that replays a fixed sequence of faces.
///
/// Panics if a test consumes more faces than it scripted, which is exactly
/// the failure mode we want: it means the operation rolled more dice than
/// the test accounted for.
pub struct ScriptedRolls {
    faces: std::vec::IntoIter<u32>,
}

impl ScriptedRolls {
    /// Creates a scripted roller from the given faces, consumed in order.
    pub fn new(faces: &[u32]) -> Self {
        Self {
            faces: faces.to_vec().into_iter(),
        }
    }
}

impl Roller for ScriptedRolls {
    fn die(&mut self, _sides: u32) -> u32 {
        self.faces.next().expect("scripted rolls exhausted")
    }
}

/// Template whose attack reads straight off the roll stream: +0 to hit,
/// one d20 of damage, no flat bonus. Lets a test pick to-hit and damage
/// values directly.
pub fn transparent_template() -> CreatureTemplate {
    CreatureTemplate {
        max_hp: 20,
        armor_class: 10,
        scores: AbilityScores::new(10, 10, 10, 10, 10, 10),
        attack: AttackProfile::new(0, 1, 20, 0),
    }
}

/// A party of `count` tiny animated objects, the standard encounter.
pub fn tiny_party(count: usize) -> Party {
    Party::from_template(CreatureTemplate::tiny_animated_object(), count)
}

/// A party of creatures with the given HP values, in order, stamped from
/// the transparent template.
pub fn party_with_hp(hps: &[u32]) -> Party {
    let mut party = Party::new();
    for &hp in hps {
        party.push(Creature::from_template(CreatureTemplate {
            max_hp: hp,
            ..transparent_template()
        }));
    }
    party
}
