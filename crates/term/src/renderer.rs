//! TerminalRenderer: writes quiz snapshots to a line-oriented terminal.
//!
//! Input stays in cooked mode so the player can type suburb names. The
//! countdown is redrawn in place on the current line; a new round or the
//! end-of-game summary starts fresh lines.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::view::{QuizView, StatusView, SummaryView, TimeStyle};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    view: QuizView,
    /// `(game_id, round index)` of the status line currently on screen
    status_line: Option<(u32, u32)>,
    summarized: Option<u32>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            view: QuizView::default(),
            status_line: None,
            summarized: None,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn with_view(mut self, view: QuizView) -> Self {
        self.view = view;
        self
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Draw one published snapshot.
    ///
    /// Repeated snapshots for the same round only rewrite the status line.
    /// A finished game prints its summary once.
    pub fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.buf.clear();

        if let Some(summary) = self.view.summary(snapshot) {
            if self.summarized == Some(snapshot.game_id) {
                return Ok(());
            }
            self.end_status_line()?;
            encode_summary_into(&summary, &mut self.buf)?;
            self.summarized = Some(snapshot.game_id);
        } else if let Some(status) = self.view.status(snapshot) {
            let key = (snapshot.game_id, status.round);
            if self.status_line != Some(key) {
                self.end_status_line()?;
                encode_prompt_into(&status, &mut self.buf)?;
            }
            encode_status_into(&status, &mut self.buf)?;
            self.status_line = Some(key);
        } else {
            return Ok(());
        }

        self.flush_buf()
    }

    /// Print an informational line below whatever is on screen.
    pub fn message(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.end_status_line()?;
        for line in text.lines() {
            self.buf.queue(Print(line))?;
            self.buf.queue(Print("\r\n"))?;
        }
        self.flush_buf()
    }

    /// Forget the on-screen status so the next snapshot starts a new line.
    pub fn invalidate(&mut self) {
        self.status_line = None;
    }

    fn end_status_line(&mut self) -> Result<()> {
        if self.status_line.take().is_some() {
            self.buf.queue(Print("\r\n"))?;
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode the "Find <target>" prompt line into `out`.
pub fn encode_prompt_into(status: &StatusView, out: &mut Vec<u8>) -> Result<()> {
    out.queue(SetAttribute(Attribute::Bold))?;
    out.queue(Print(status.prompt()))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(Print("\r\n"))?;
    Ok(())
}

/// Encode the in-place status line into `out` (no trailing newline).
pub fn encode_status_into(status: &StatusView, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveToColumn(0))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(Print(status.round_text()))?;
    out.queue(Print(" | "))?;
    out.queue(SetForegroundColor(time_color(status.time_style)))?;
    out.queue(Print(status.time_text()))?;
    out.queue(ResetColor)?;
    Ok(())
}

/// Encode the end-of-game summary table into `out`.
pub fn encode_summary_into(summary: &SummaryView, out: &mut Vec<u8>) -> Result<()> {
    out.queue(SetAttribute(Attribute::Bold))?;
    out.queue(Print(summary.score_text()))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(Print("\r\n"))?;

    for row in &summary.rows {
        let color = if row.correct { Color::Green } else { Color::Red };
        out.queue(Print(format!(
            "{:>3}  {:<24} {:<24} ",
            row.index, row.target, row.guessed
        )))?;
        out.queue(SetForegroundColor(color))?;
        out.queue(Print(row.mark()))?;
        out.queue(ResetColor)?;
        out.queue(Print("\r\n"))?;
    }
    Ok(())
}

fn time_color(style: TimeStyle) -> Color {
    match style {
        TimeStyle::Normal => Color::Reset,
        TimeStyle::Danger => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoundSnapshot;

    fn snapshot(game_id: u32, current: usize, time_left: u32) -> GameSnapshot {
        let mut rounds: Vec<RoundSnapshot> = ["Richmond", "Fitzroy"]
            .iter()
            .enumerate()
            .map(|(i, t)| RoundSnapshot {
                index: i as u32 + 1,
                target: t.to_string(),
                time_left: 15,
                ..Default::default()
            })
            .collect();
        rounds[current].time_left = time_left;
        GameSnapshot {
            game_id,
            current_round: Some(rounds[current].clone()),
            rounds,
            game_finished: false,
        }
    }

    fn output(renderer: &TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8_lossy(renderer.writer()).into_owned()
    }

    #[test]
    fn prompt_printed_once_per_round() {
        let mut r = TerminalRenderer::with_writer(Vec::new());
        r.draw(&snapshot(1, 0, 15)).unwrap();
        r.draw(&snapshot(1, 0, 14)).unwrap();
        r.draw(&snapshot(1, 1, 15)).unwrap();

        let out = output(&r);
        assert_eq!(out.matches("Find Richmond").count(), 1);
        assert_eq!(out.matches("Find Fitzroy").count(), 1);
        assert!(out.contains("Round 1 of 2"));
        assert!(out.contains("Time left 14s"));
        assert!(out.contains("Round 2 of 2"));
    }

    #[test]
    fn summary_printed_once_per_game() {
        let mut finished = snapshot(1, 1, 0);
        finished.current_round = None;
        finished.game_finished = true;
        finished.rounds[0].guessed = Some("Richmond".into());
        finished.rounds[0].score = 1;
        finished.rounds[0].correct = true;

        let mut r = TerminalRenderer::with_writer(Vec::new());
        r.draw(&snapshot(1, 1, 1)).unwrap();
        r.draw(&finished).unwrap();
        r.draw(&finished).unwrap();

        let out = output(&r);
        assert_eq!(out.matches("Your final score is 1 / 2").count(), 1);
        assert!(out.contains("Richmond"));
        assert!(out.contains("✔"));
        assert!(out.contains("✘"));
    }

    #[test]
    fn new_game_with_same_round_index_reprompts() {
        let mut r = TerminalRenderer::with_writer(Vec::new());
        r.draw(&snapshot(1, 0, 15)).unwrap();
        r.draw(&snapshot(2, 0, 15)).unwrap();

        assert_eq!(output(&r).matches("Find Richmond").count(), 2);
    }

    #[test]
    fn idle_snapshot_draws_nothing() {
        let mut r = TerminalRenderer::with_writer(Vec::new());
        r.draw(&GameSnapshot::default()).unwrap();
        assert!(r.into_inner().is_empty());
    }

    #[test]
    fn message_ends_status_line() {
        let mut r = TerminalRenderer::with_writer(Vec::new());
        r.draw(&snapshot(1, 0, 15)).unwrap();
        r.message("type a suburb name").unwrap();

        let out = output(&r);
        assert!(out.ends_with("type a suburb name\r\n"));
        assert!(out.contains("\r\ntype a suburb name"));
    }

    #[test]
    fn danger_time_uses_red() {
        let mut plain = Vec::new();
        let mut danger = Vec::new();
        let view = QuizView::default();
        encode_status_into(&view.status(&snapshot(1, 0, 10)).unwrap(), &mut plain).unwrap();
        encode_status_into(&view.status(&snapshot(1, 0, 2)).unwrap(), &mut danger).unwrap();

        assert_ne!(plain, danger);
        assert_eq!(time_color(TimeStyle::Danger), Color::Red);
    }
}
