//! Transcript printing.

use std::io::{self, Write};

use anyhow::Result;
use battle_engine::{BattleEvent, BattleState, SideId};
use serde::Serialize;

/// Where events go: a readable transcript or one JSON object per line.
pub struct Transcript {
    json: bool,
    out: io::StdoutLock<'static>,
}

#[derive(Serialize)]
struct Summary {
    #[serde(rename = "type")]
    kind: &'static str,
    turns: u16,
    finished: bool,
    winner: Option<SideId>,
    remaining: [usize; 2],
}

impl Transcript {
    pub fn new(json: bool) -> Self {
        Self {
            json,
            out: io::stdout().lock(),
        }
    }

    pub fn events(&mut self, events: &[BattleEvent]) -> Result<()> {
        for event in events {
            if self.json {
                serde_json::to_writer(&mut self.out, event)?;
                writeln!(self.out)?;
            } else {
                writeln!(self.out, "{event}")?;
            }
        }
        Ok(())
    }

    /// Final line: outcome and how many combatants each side has left.
    pub fn summary(&mut self, state: &BattleState) -> Result<()> {
        let remaining = SideId::BOTH.map(|side| {
            state
                .side(side)
                .roster
                .iter()
                .filter(|c| !c.is_fainted())
                .count()
        });
        let summary = Summary {
            kind: "summary",
            turns: state.turn,
            finished: state.is_terminal(),
            winner: state.outcome.and_then(|o| o.winner),
            remaining,
        };

        if self.json {
            serde_json::to_writer(&mut self.out, &summary)?;
            writeln!(self.out)?;
            return Ok(());
        }
        let result = match (summary.finished, summary.winner) {
            (false, _) => "unfinished".to_string(),
            (true, None) => "draw".to_string(),
            (true, Some(side)) => format!("{side} wins"),
        };
        writeln!(
            self.out,
            "-- {result} after {} turns ({} / {} left)",
            summary.turns, remaining[0], remaining[1]
        )?;
        Ok(())
    }
}
