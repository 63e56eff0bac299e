use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use battle_engine::{Action, Battle, SideId};
use clap::Args;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::{read_json, TeamsFile};
use crate::output::Transcript;

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// JSON file with both teams (`{"p1": {...}, "p2": {...}}`)
    #[arg(short, long)]
    pub teams: PathBuf,

    /// Seed for the engine; the action chooser derives its own from it
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// JSON ruleset overriding the teams file's
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Stop after this many steps even if the battle is still running
    #[arg(long, default_value_t = 1000)]
    pub max_steps: usize,

    /// Print events as JSON lines
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let teams: TeamsFile = read_json(&args.teams)?;
    let rules = match &args.rules {
        Some(path) => read_json(path)?,
        None => teams.rules.unwrap_or_default(),
    };

    let (mut battle, opening) = Battle::reset_with_rules(&teams.p1, &teams.p2, rules, args.seed)
        .context("building the battle")?;
    let mut chooser = StdRng::seed_from_u64(args.seed ^ 0x5eed_c0de);
    let mut transcript = Transcript::new(args.json);
    transcript.events(&opening)?;

    tracing::info!(seed = args.seed, "simulation started");
    let mut steps = 0;
    while !battle.is_over() && steps < args.max_steps {
        let p1 = choose(&battle, SideId::P1, &mut chooser)?;
        let p2 = choose(&battle, SideId::P2, &mut chooser)?;
        tracing::debug!(step = steps, ?p1, ?p2, "chosen");
        let result = battle.step(p1, p2)?;
        transcript.events(&result.events)?;
        steps += 1;
    }
    if !battle.is_over() {
        tracing::warn!(steps, "step limit reached before the battle ended");
    }

    tracing::info!(turns = battle.state().turn, steps, "simulation finished");
    transcript.summary(battle.state())
}

/// Uniformly random legal action.
fn choose(battle: &Battle, side: SideId, rng: &mut StdRng) -> Result<Action> {
    let options = battle.legal_actions(side).actions();
    match options.choose(rng) {
        Some(&action) => Ok(action),
        None => bail!("{side} has no legal action on turn {}", battle.state().turn),
    }
}
