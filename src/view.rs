//! Text view: draws the board with the floating piece into the terminal.
//!
//! Full redraw whenever anything visible changed; nothing otherwise.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor},
    terminal::{self, ClearType},
    QueueableCommand,
};

use minofall::core::{Board, GameState};
use minofall::types::MinoColor;

/// Everything shown on screen
#[derive(Debug, PartialEq)]
struct Frame {
    board: Board,
    score: u32,
    lines: u32,
    paused: bool,
    game_over: bool,
}

impl Frame {
    fn of(state: &GameState) -> Self {
        Self {
            board: state.preview_board(),
            score: state.score(),
            lines: state.lines(),
            paused: state.paused(),
            game_over: state.game_over(),
        }
    }
}

pub struct TerminalView {
    stdout: io::Stdout,
    last: Option<Frame>,
    buf: Vec<u8>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, state: &GameState) -> Result<()> {
        let frame = Frame::of(state);
        if self.last.as_ref() == Some(&frame) {
            return Ok(());
        }

        self.buf.clear();
        self.buf.queue(terminal::Clear(ClearType::All))?;

        let border = format!("+{}+", "--".repeat(frame.board.width()));
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf.queue(Print(&border))?;

        let mut line: u16 = 1;
        for row in frame.board.rows() {
            self.buf.queue(cursor::MoveTo(0, line))?;
            self.buf.queue(Print("|"))?;
            for cell in row {
                match cell {
                    Some(color) => {
                        self.buf.queue(SetBackgroundColor(term_color(*color)))?;
                        self.buf.queue(Print("  "))?;
                        self.buf.queue(ResetColor)?;
                    }
                    None => {
                        self.buf.queue(Print(" ."))?;
                    }
                }
            }
            self.buf.queue(Print("|"))?;
            line = line.saturating_add(1);
        }

        self.buf.queue(cursor::MoveTo(0, line))?;
        self.buf.queue(Print(&border))?;

        let status = if frame.game_over {
            "GAME OVER  r: restart  q: quit"
        } else if frame.paused {
            "PAUSED  p: resume"
        } else {
            ""
        };
        self.buf.queue(cursor::MoveTo(0, line.saturating_add(1)))?;
        self.buf.queue(Print(format!(
            "score {}  lines {}  {status}",
            frame.score, frame.lines
        )))?;

        self.flush_buf()?;
        self.last = Some(frame);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

fn term_color(color: MinoColor) -> Color {
    match color {
        MinoColor::LightGrey => Color::Grey,
        MinoColor::Green => Color::Green,
        MinoColor::Red => Color::Red,
        MinoColor::Blue => Color::Blue,
        MinoColor::Yellow => Color::Yellow,
        MinoColor::Orange => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        MinoColor::Purple => Color::Magenta,
    }
}
