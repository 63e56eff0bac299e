//! Scripted battle scenarios loaded from `tests/fixtures/*.json`.
//!
//! A scenario names two teams, a seed and the actions for every turn, then
//! states what must hold afterwards. Expected events are matched as an
//! ordered subsequence of the full log (opening included), and each expected
//! event only has to agree on the fields it lists.

use battle_engine::{Action, Battle, BattleError, Ruleset, SideId, TeamSpec};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug, Clone)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub seed: u64,
    #[serde(default)]
    pub rules: Option<Ruleset>,
    pub p1: TeamSpec,
    pub p2: TeamSpec,
    /// One `[p1, p2]` pair per call to `step`.
    pub turns: Vec<[Action; 2]>,
    pub expect: Expectation,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Expectation {
    #[serde(default)]
    pub terminal: Option<bool>,
    /// `Some(None)` expects a draw.
    #[serde(default, deserialize_with = "nullable")]
    pub winner: Option<Option<SideId>>,
    #[serde(default)]
    pub turn: Option<u16>,
    #[serde(default)]
    pub events: Vec<Value>,
    /// The last scripted step must fail with a message containing this.
    #[serde(default)]
    pub error: Option<String>,
}

fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<SideId>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<SideId>::deserialize(deserializer).map(Some)
}

/// Load every scenario in a fixture file. A file holds either one scenario
/// or an array of them.
pub fn load(path: &std::path::Path) -> Result<Vec<Scenario>, String> {
    let text = std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let value: Value = serde_json::from_str(&text).map_err(|e| format!("{}: {e}", path.display()))?;
    let parsed = match value {
        Value::Array(_) => serde_json::from_value(value),
        _ => serde_json::from_value(value).map(|one| vec![one]),
    };
    parsed.map_err(|e| format!("{}: {e}", path.display()))
}

/// Play the scenario and check its expectations.
pub fn run(scenario: &Scenario) -> Result<(), String> {
    let rules = scenario.rules.clone().unwrap_or_default();
    let (mut battle, mut log) = Battle::reset_with_rules(&scenario.p1, &scenario.p2, rules, scenario.seed)
        .map_err(|e| format!("reset failed: {e}"))?;

    let mut failure: Option<BattleError> = None;
    for (i, [p1, p2]) in scenario.turns.iter().copied().enumerate() {
        match battle.step(p1, p2) {
            Ok(result) => log.extend(result.events),
            Err(err) if i + 1 == scenario.turns.len() && scenario.expect.error.is_some() => {
                failure = Some(err);
            }
            Err(err) => return Err(format!("step {i} ({p1:?}, {p2:?}) failed: {err}")),
        }
    }

    let expect = &scenario.expect;
    match (&expect.error, failure) {
        (Some(needle), Some(err)) => {
            let message = err.to_string();
            if !message.contains(needle.as_str()) {
                return Err(format!("expected error containing {needle:?}, got {message:?}"));
            }
        }
        (Some(needle), None) => return Err(format!("expected error containing {needle:?}, got none")),
        _ => {}
    }

    let state = battle.state();
    if let Some(terminal) = expect.terminal {
        if state.is_terminal() != terminal {
            return Err(format!("terminal: expected {terminal}, got {}", state.is_terminal()));
        }
    }
    if let Some(winner) = expect.winner {
        let actual = state.outcome.and_then(|o| o.winner);
        if state.outcome.is_none() || actual != winner {
            return Err(format!("winner: expected {winner:?}, got {:?}", state.outcome));
        }
    }
    if let Some(turn) = expect.turn {
        if state.turn != turn {
            return Err(format!("turn: expected {turn}, got {}", state.turn));
        }
    }

    let actual: Vec<Value> = log
        .iter()
        .map(|e| serde_json::to_value(e).map_err(|e| e.to_string()))
        .collect::<Result<_, _>>()?;
    match_subsequence(&expect.events, &actual)
}

fn match_subsequence(expected: &[Value], actual: &[Value]) -> Result<(), String> {
    let mut cursor = 0;
    for want in expected {
        match actual[cursor..].iter().position(|got| contains(got, want)) {
            Some(offset) => cursor += offset + 1,
            None => {
                let log = actual
                    .iter()
                    .map(Value::to_string)
                    .collect::<Vec<_>>()
                    .join("\n  ");
                return Err(format!("event {want} not found after position {cursor}; log:\n  {log}"));
            }
        }
    }
    Ok(())
}

/// Whether `got` agrees with every field `want` lists, recursively.
fn contains(got: &Value, want: &Value) -> bool {
    match (got, want) {
        (Value::Object(got), Value::Object(want)) => want
            .iter()
            .all(|(key, value)| got.get(key).is_some_and(|g| contains(g, value))),
        _ => got == want,
    }
}
