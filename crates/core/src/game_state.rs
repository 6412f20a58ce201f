//! Game state module - the controller as a reducer
//!
//! [`GameState`] is a value. [`GameState::step`] consumes one state and one
//! event and returns the next state; callers that need the previous state
//! (undo, replays) keep a clone. The board inside is only ever changed through
//! [`Board::stamp`] and [`Board::clear_complete_lines`].
//!
//! Gravity: every `move_period_ms` of accumulated tick time the active piece
//! moves down one row. If it cannot, it locks, unless the player touched it
//! less than one period ago (lock grace).

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::minos::{Catalog, Mino};
use crate::rng::SimpleRng;
use crate::types::{GameAction, GameEvent, LockEvent, MinoColor, Offset};

/// The falling piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub mino: Mino,
    pub color: MinoColor,
    pub offset: Offset,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    catalog: Arc<Catalog>,
    rng: SimpleRng,
    board: Board,
    active: ActivePiece,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    paused: bool,
    game_over: bool,
    drop_timer_ms: u32,
    /// Time since the last successful piece action
    idle_ms: u32,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a game with the tetromino catalog
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_catalog(config, Arc::new(Catalog::tetrominoes()))
    }

    pub fn with_catalog(config: GameConfig, catalog: Arc<Catalog>) -> Result<Self, ConfigError> {
        config.validate(&catalog)?;
        let board = Board::new(config.board_width, config.board_height)?;
        let mut rng = SimpleRng::new(config.seed);
        let active = spawn(&board, &catalog, &mut rng);

        Ok(Self {
            paused: config.start_paused,
            idle_ms: config.move_period_ms,
            config,
            catalog,
            rng,
            board,
            active,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            game_over: false,
            drop_timer_ms: 0,
            last_event: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Locked cells only
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Outcome of the most recent lock
    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// The board with the active piece drawn where it currently floats
    pub fn preview_board(&self) -> Board {
        let ActivePiece {
            mino,
            color,
            offset,
        } = &self.active;
        self.board.stamp_preview(mino, *color, *offset)
    }

    /// Apply one event and return the resulting state
    pub fn step(mut self, event: GameEvent) -> Self {
        match event {
            GameEvent::Action(GameAction::Restart) => return self.restarted(),
            GameEvent::Action(GameAction::TogglePause) => {
                if !self.game_over {
                    self.paused = !self.paused;
                    debug!(paused = self.paused, "pause toggled");
                }
            }
            _ if self.paused || self.game_over => {}
            GameEvent::Tick { elapsed_ms } => self.tick(elapsed_ms),
            GameEvent::Action(action) => {
                if action.moves_piece() && self.apply_action(action) {
                    self.idle_ms = 0;
                }
            }
        }
        self
    }

    /// Apply a sequence of events in order
    pub fn replay<I>(self, events: I) -> Self
    where
        I: IntoIterator<Item = GameEvent>,
    {
        events.into_iter().fold(self, GameState::step)
    }

    /// Move or rotate the active piece; true if it changed
    fn apply_action(&mut self, action: GameAction) -> bool {
        let ActivePiece { mino, offset, .. } = &self.active;
        let max_x = i32::try_from(self.board.width().saturating_sub(mino.width())).unwrap_or(i32::MAX);

        let (mino, offset) = match action {
            GameAction::MoveLeft => (None, Offset::new((offset.x - 1).max(0), offset.y)),
            GameAction::MoveRight => (None, Offset::new((offset.x + 1).min(max_x), offset.y)),
            GameAction::SoftDrop => (None, offset.shifted(0, 1)),
            GameAction::RotateCw => (Some(mino.rotated(true)), *offset),
            GameAction::RotateCcw => (Some(mino.rotated(false)), *offset),
            GameAction::TogglePause | GameAction::Restart => return false,
        };

        if mino.is_none() && offset == self.active.offset {
            return false;
        }
        if !self
            .board
            .can_place(mino.as_ref().unwrap_or(&self.active.mino), offset)
        {
            return false;
        }

        if let Some(mino) = mino {
            self.active.mino = mino;
        }
        self.active.offset = offset;
        true
    }

    fn tick(&mut self, elapsed_ms: u32) {
        let period = self.config.move_period_ms;
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);

        while self.drop_timer_ms >= period && !self.game_over {
            self.drop_timer_ms -= period;
            self.gravity_step();
        }
    }

    fn gravity_step(&mut self) {
        let below = self.active.offset.shifted(0, 1);
        if self.board.can_place(&self.active.mino, below) {
            self.active.offset = below;
            return;
        }
        if self.idle_ms < self.config.move_period_ms {
            return;
        }
        self.lock_active();
    }

    fn lock_active(&mut self) {
        let ActivePiece {
            mino,
            color,
            offset,
        } = &self.active;

        let stamped = match self.board.stamp(mino, *color, *offset) {
            Ok(board) => board,
            Err(err) => {
                warn!(%err, "active piece rejected by the board");
                self.game_over = true;
                return;
            }
        };

        let (board, cleared) = stamped.clear_complete_lines();
        let cleared = u32::try_from(cleared).unwrap_or(u32::MAX);
        let width = u32::try_from(board.width()).unwrap_or(u32::MAX);
        let gained = cleared.saturating_mul(width);

        self.board = board;
        self.score = self.score.saturating_add(gained);
        self.lines = self.lines.saturating_add(cleared);
        self.pieces_locked = self.pieces_locked.saturating_add(1);
        self.last_event = Some(LockEvent {
            lines_cleared: cleared,
            score_gained: gained,
        });
        debug!(cleared, gained, score = self.score, "piece locked");

        self.active = spawn(&self.board, &self.catalog, &mut self.rng);
        if self.board.empty_rows_from_top() <= self.active.mino.height() {
            self.game_over = true;
            info!(score = self.score, lines = self.lines, "game over");
        }
    }

    fn restarted(self) -> Self {
        info!(score = self.score, "restart");
        let board = self.board.emptied();
        let mut rng = self.rng;
        let active = spawn(&board, &self.catalog, &mut rng);

        Self {
            board,
            rng,
            active,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            paused: false,
            game_over: false,
            drop_timer_ms: 0,
            idle_ms: self.config.move_period_ms,
            last_event: None,
            ..self
        }
    }
}

/// Draw a random catalog piece, centred at the top of `board`
fn spawn(board: &Board, catalog: &Catalog, rng: &mut SimpleRng) -> ActivePiece {
    let (mino, color) = catalog.pick(rng.next_index(catalog.len()));
    let x = board.width().saturating_sub(mino.width()) / 2;
    let piece = ActivePiece {
        mino: mino.clone(),
        color,
        offset: Offset::new(i32::try_from(x).unwrap_or(0), 0),
    };
    debug!(color = color.as_str(), x = piece.offset.x, "spawned piece");
    piece
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_piece_game(rows: &[&[bool]], width: usize, height: usize) -> GameState {
        let mino = Mino::from_rows(rows).unwrap();
        let catalog = Catalog::new(vec![mino], vec![MinoColor::Red]).unwrap();
        let config = GameConfig {
            board_width: width,
            board_height: height,
            ..GameConfig::default()
        };
        GameState::with_catalog(config, Arc::new(catalog)).unwrap()
    }

    #[test]
    fn test_spawn_centred() {
        let state = single_piece_game(&[&[true, true]], 6, 6);
        assert_eq!(state.active().offset, Offset::new(2, 0));
        assert_eq!(state.active().color, MinoColor::Red);
    }

    #[test]
    fn test_move_at_wall_is_not_an_interaction() {
        let mut state = single_piece_game(&[&[true, true]], 6, 6);
        for _ in 0..5 {
            state = state.step(GameAction::MoveLeft.into());
        }
        assert_eq!(state.active().offset.x, 0);
        assert!(!state.clone().apply_action(GameAction::MoveLeft));
    }

    #[test]
    fn test_idle_resets_on_successful_action() {
        let state = single_piece_game(&[&[true, true]], 6, 6);
        assert_eq!(state.idle_ms, 1000);
        let state = state.step(GameAction::MoveRight.into());
        assert_eq!(state.idle_ms, 0);
    }

    #[test]
    fn test_pause_toggle_is_not_an_interaction() {
        let state = single_piece_game(&[&[true, true]], 6, 6)
            .step(GameAction::MoveRight.into())
            .step(GameEvent::Tick { elapsed_ms: 400 });
        assert_eq!(state.idle_ms, 400);

        let state = state
            .step(GameAction::TogglePause.into())
            .step(GameAction::TogglePause.into());
        assert!(!state.paused());
        assert_eq!(state.idle_ms, 400);
    }

    #[test]
    fn test_restart_keeps_config_and_rng_stream() {
        let state = GameState::new(GameConfig::default()).unwrap();
        let rng_before = state.rng.clone();
        let state = state
            .step(GameEvent::Tick { elapsed_ms: 3000 })
            .step(GameAction::Restart.into());
        assert_eq!(state.score(), 0);
        assert_eq!(state.board().filled_cells(), 0);
        assert_ne!(state.rng, rng_before);
    }
}
