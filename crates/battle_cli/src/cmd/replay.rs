use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_engine::Battle;
use clap::Args;

use crate::models::{read_json, Script};
use crate::output::Transcript;

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// JSON script with seed, teams and per-turn actions
    #[arg(short, long)]
    pub script: PathBuf,

    /// Print events as JSON lines
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ReplayArgs) -> Result<()> {
    let script: Script = read_json(&args.script)?;
    let rules = script.rules.unwrap_or_default();

    let (mut battle, opening) =
        Battle::reset_with_rules(&script.p1, &script.p2, rules, script.seed).context("building the battle")?;
    let mut transcript = Transcript::new(args.json);
    transcript.events(&opening)?;

    for (step, [p1, p2]) in script.turns.into_iter().enumerate() {
        if battle.is_over() {
            tracing::warn!(step, "battle ended before the script did; ignoring the rest");
            break;
        }
        let result = battle
            .step(p1, p2)
            .with_context(|| format!("step {step}: {p1:?} / {p2:?}"))?;
        transcript.events(&result.events)?;
    }

    transcript.summary(battle.state())
}
