//! Line commands for the interactive shell.
//!
//! One line of input is one command:
//!
//! ```text
//! attack [adv|disadv]
//! take <to_hit> <damage>
//! <stat> <half|none> <dc> <damage> [adv|disadv]
//! status
//! help
//! stop
//! ```
//!
//! where `<stat>` is one of `str`, `dex`, `con`, `int`, `wis`, `cha`.

use melee_core::{Ability, DamageShare, RollMode};
use thiserror::Error;

/// A parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Group attack under the given roll mode.
    Attack {
        /// Roll mode for every attacker.
        mode: RollMode,
    },
    /// Single incoming attack against the front of the party.
    Take {
        /// Attacker's to-hit value.
        to_hit: i32,
        /// Damage on a hit.
        damage: u32,
    },
    /// Saving-throw pass over the whole party.
    Save {
        /// Ability the throw is made with.
        ability: Ability,
        /// Damage share on a successful save.
        share: DamageShare,
        /// Difficulty class.
        dc: i32,
        /// Damage on a failed save.
        damage: u32,
        /// Roll mode for every check.
        mode: RollMode,
    },
    /// Print survivor count and HP.
    Status,
    /// Print the command summary.
    Help,
    /// End the session.
    Stop,
}

/// Why a line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The line was empty or whitespace.
    #[error("empty command")]
    Empty,
    /// The first token named no known command or stat.
    #[error("`{0}` is not a command (try `help`)")]
    UnknownCommand(String),
    /// A save's share token was neither `half` nor `none`.
    #[error("`{0}` is not a damage share (expected `half` or `none`)")]
    BadShare(String),
    /// An advantage token was neither `adv` nor `disadv`.
    #[error("`{0}` not recognised (expected `adv` or `disadv`)")]
    BadRollMode(String),
    /// A required argument was missing.
    #[error("missing {0}")]
    MissingArgument(&'static str),
    /// A numeric argument failed to parse.
    #[error("`{value}` is not a valid {what}")]
    BadNumber {
        /// What the argument was supposed to be.
        what: &'static str,
        /// The offending token.
        value: String,
    },
}

/// Parses one line of input into a command.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (head, rest) = match tokens.split_first() {
        Some((head, rest)) => (*head, rest),
        None => return Err(CommandError::Empty),
    };

    if let Some(ability) = parse_ability(head) {
        return parse_save(ability, rest);
    }

    match head {
        "attack" => Ok(Command::Attack {
            mode: parse_mode(rest.first().copied())?,
        }),
        "take" => {
            let to_hit = parse_number(rest.first().copied(), "to-hit value")?;
            let damage = parse_number(rest.get(1).copied(), "damage amount")?;
            Ok(Command::Take { to_hit, damage })
        }
        "status" => Ok(Command::Status),
        "help" => Ok(Command::Help),
        "stop" => Ok(Command::Stop),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

fn parse_save(ability: Ability, rest: &[&str]) -> Result<Command, CommandError> {
    let share = match rest.first() {
        Some(&"half") => DamageShare::Half,
        Some(&"none") => DamageShare::None,
        Some(other) => return Err(CommandError::BadShare((*other).to_string())),
        None => return Err(CommandError::MissingArgument("damage share")),
    };
    let dc = parse_number(rest.get(1).copied(), "difficulty class")?;
    let damage = parse_number(rest.get(2).copied(), "damage amount")?;
    let mode = parse_mode(rest.get(3).copied())?;
    Ok(Command::Save {
        ability,
        share,
        dc,
        damage,
        mode,
    })
}

fn parse_ability(token: &str) -> Option<Ability> {
    match token {
        "str" => Some(Ability::Strength),
        "dex" => Some(Ability::Dexterity),
        "con" => Some(Ability::Constitution),
        "int" => Some(Ability::Intelligence),
        "wis" => Some(Ability::Wisdom),
        "cha" => Some(Ability::Charisma),
        _ => None,
    }
}

fn parse_mode(token: Option<&str>) -> Result<RollMode, CommandError> {
    match token {
        None => Ok(RollMode::Standard),
        Some("adv") => Ok(RollMode::Advantage),
        Some("disadv") => Ok(RollMode::Disadvantage),
        Some(other) => Err(CommandError::BadRollMode(other.to_string())),
    }
}

fn parse_number<T: std::str::FromStr>(
    token: Option<&str>,
    what: &'static str,
) -> Result<T, CommandError> {
    let token = token.ok_or(CommandError::MissingArgument(what))?;
    token.parse().map_err(|_| CommandError::BadNumber {
        what,
        value: token.to_string(),
    })
}

/// The interactive command summary.
pub const HELP: &str = "\
Commands:
[stat] [half/none] [dc] [damage] [adv/disadv?]
attack [adv/disadv?]
take [to hit] [damage]
status
help
stop
---";
