//! Input file formats.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use battle_engine::{Action, Ruleset, TeamSpec};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// `--teams` file: both rosters, lead first.
#[derive(Deserialize, Debug)]
pub struct TeamsFile {
    pub p1: TeamSpec,
    pub p2: TeamSpec,
    /// Used when `--rules` is not given.
    #[serde(default)]
    pub rules: Option<Ruleset>,
}

/// `--script` file: teams plus every turn's actions.
#[derive(Deserialize, Debug)]
pub struct Script {
    pub seed: u64,
    pub p1: TeamSpec,
    pub p2: TeamSpec,
    #[serde(default)]
    pub rules: Option<Ruleset>,
    /// One `[p1, p2]` pair per step, replacement phases included.
    pub turns: Vec<[Action; 2]>,
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
