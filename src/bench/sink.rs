//! Result sinks: where round results and the summary are written.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::config::ReportFormat;
use super::runner::{RoundOutcome, RoundResult};
use super::stats::BenchSummary;
use super::BenchError;
use crate::core::PlayerId;

/// Destination for benchmark output.
pub trait ResultSink {
    fn write_round(&mut self, round: &RoundResult) -> Result<(), BenchError>;
    fn write_summary(&mut self, summary: &BenchSummary) -> Result<(), BenchError>;
    fn flush(&mut self) -> Result<(), BenchError>;
}

/// Plain text, one block per round.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultSink for TextSink<W> {
    fn write_round(&mut self, round: &RoundResult) -> Result<(), BenchError> {
        writeln!(self.out, "Round {} (seed {}):", round.round, round.seed)?;
        writeln!(self.out, "  Elapsed: {:.3} ms", round.elapsed_ms)?;
        match &round.outcome {
            RoundOutcome::Completed(game) => {
                for player in PlayerId::all() {
                    writeln!(self.out, "  {} score: {}", player, game.scores[player])?;
                }
                writeln!(self.out, "  Turns: {} ({:?})", game.turns, game.end_reason)?;
            }
            RoundOutcome::TimedOut => {
                for player in PlayerId::all() {
                    writeln!(self.out, "  {} score: N/A", player)?;
                }
                writeln!(self.out, "  Timed out")?;
            }
        }
        Ok(())
    }

    fn write_summary(&mut self, summary: &BenchSummary) -> Result<(), BenchError> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Rounds: {} completed, {} timed out, {} stalled",
            summary.completed, summary.timed_out, summary.stalled
        )?;
        for player in PlayerId::all() {
            writeln!(
                self.out,
                "{}: {} wins, mean score {:.2}",
                player,
                summary.wins[player],
                summary.mean_score(player)
            )?;
        }
        writeln!(self.out, "Draws: {}", summary.draws)?;
        writeln!(self.out, "Mean turns: {:.1}", summary.mean_turns())?;
        writeln!(self.out, "Total time: {:.3} ms", summary.total_elapsed_ms)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), BenchError> {
        self.out.flush()?;
        Ok(())
    }
}

/// JSON lines: one object per round, then the summary.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultSink for JsonSink<W> {
    fn write_round(&mut self, round: &RoundResult) -> Result<(), BenchError> {
        serde_json::to_writer(&mut self.out, round)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &BenchSummary) -> Result<(), BenchError> {
        serde_json::to_writer(&mut self.out, summary)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), BenchError> {
        self.out.flush()?;
        Ok(())
    }
}

/// Open a sink on `path`, or stdout when no path is given.
pub fn open_sink(format: ReportFormat, path: Option<&Path>) -> Result<Box<dyn ResultSink>, BenchError> {
    let out: Box<dyn Write> = match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    Ok(match format {
        ReportFormat::Text => Box::new(TextSink::new(out)),
        ReportFormat::Json => Box::new(JsonSink::new(out)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerMap;
    use crate::game::{EndReason, GameSummary};
    use crate::rules::GameResult;

    fn rounds() -> Vec<RoundResult> {
        let scores = PlayerMap::new(|p| if p == PlayerId::FIRST { 24 } else { -7 });
        vec![
            RoundResult {
                round: 1,
                seed: 9,
                elapsed_ms: 0.25,
                outcome: RoundOutcome::Completed(GameSummary {
                    seed: 9,
                    result: GameResult::from_scores(&scores),
                    scores,
                    turns: 88,
                    deck_draws: 44,
                    discard_draws: 44,
                    end_reason: EndReason::DeckExhausted,
                }),
            },
            RoundResult {
                round: 2,
                seed: 10,
                elapsed_ms: 16000.0,
                outcome: RoundOutcome::TimedOut,
            },
        ]
    }

    #[test]
    fn test_text_sink() {
        let mut sink = TextSink::new(Vec::new());
        for round in rounds() {
            sink.write_round(&round).unwrap();
        }
        sink.write_summary(&BenchSummary::from_rounds(&rounds())).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains("Round 1 (seed 9):"));
        assert!(text.contains("score: 24"));
        assert!(text.contains("score: -7"));
        assert!(text.contains("score: N/A"));
        assert!(text.contains("Rounds: 1 completed, 1 timed out, 0 stalled"));
    }

    #[test]
    fn test_json_sink_lines_parse_back() {
        let mut sink = JsonSink::new(Vec::new());
        for round in rounds() {
            sink.write_round(&round).unwrap();
        }
        let summary = BenchSummary::from_rounds(&rounds());
        sink.write_summary(&summary).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: RoundResult = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, rounds()[0]);
        let parsed: BenchSummary = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(parsed, summary);
    }
}
