//! Interactive encounter shell for Melee.
//!
//! Reads one command per line from stdin, drives a [`Party`] of creatures,
//! and prints each operation's transcript. See [`command`] for the
//! grammar. The session ends on `stop` or end of input.
//!
//! Startup flags:
//! - `--seed <u64>`: reproducible session (defaults to OS entropy)
//! - `--count <n>`: starting party size (default 10)
//! - `--template <path>`: creature template JSON instead of the built-in
//!   tiny animated object

mod command;

use anyhow::Context;
use clap::Parser;
use melee_core::{CreatureTemplate, Dice, Party};
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::info;

use command::{Command, CommandError};

#[derive(Debug, Parser)]
#[command(name = "melee", about = "Group combat encounter simulator")]
struct Args {
    /// Seed for a reproducible session (defaults to OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of creatures in the starting party
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Creature template JSON file (defaults to the tiny animated object)
    #[arg(long)]
    template: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let template = load_template(args.template.as_deref())?;

    let mut dice = match args.seed {
        Some(seed) => Dice::seeded(seed),
        None => Dice::from_entropy(),
    };
    let mut party = Party::from_template(template, args.count);
    info!(count = party.len(), seed = ?args.seed, "encounter ready");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        match command::parse(&line) {
            Ok(cmd) => {
                if !handle(cmd, &mut party, &mut dice) {
                    break;
                }
            }
            // A blank line is not worth a complaint.
            Err(CommandError::Empty) => {}
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

fn load_template(path: Option<&std::path::Path>) -> anyhow::Result<CreatureTemplate> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading template {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing template {}", path.display()))
        }
        None => Ok(CreatureTemplate::tiny_animated_object()),
    }
}

/// Runs one command; returns `false` when the session should end.
fn handle(cmd: Command, party: &mut Party, dice: &mut Dice) -> bool {
    match cmd {
        Command::Attack { mode } => println!("{}", party.attack(dice, mode)),
        Command::Take { to_hit, damage } => {
            println!("{}", party.receive_attack(to_hit, damage));
        }
        Command::Save {
            ability,
            share,
            dc,
            damage,
            mode,
        } => println!("{}", party.save(dice, ability, share, dc, damage, mode)),
        Command::Status => println!("{}", party.status()),
        Command::Help => println!("{}", command::HELP),
        Command::Stop => return false,
    }
    true
}
