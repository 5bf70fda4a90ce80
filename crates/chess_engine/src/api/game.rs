//! Game lifecycle management
//!
//! Creating, starting, pausing and resetting a game session, plus read
//! access for presentation layers.
//!
//! ```text
//! NotStarted --start--> Running <--pause/resume--> Paused
//!      ^                                              |
//!      +------------------- reset --------------------+
//! ```

use serde::Serialize;
use tracing::{info, warn};

use crate::board::{AppliedMove, Board};
use crate::config::RulesConfig;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::hash::Fingerprint;
use crate::player::Player;
use crate::types::*;

/// One committed move in the game log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// The move as played, with its category and promoted flag
    pub mv: Move,
    /// Log text such as `"12... Qxf2#"`
    pub text: String,
    #[serde(skip)]
    pub(crate) applied: AppliedMove,
    #[serde(skip)]
    pub(crate) mover: usize,
    #[serde(skip)]
    pub(crate) countdown_before: u32,
    #[serde(skip)]
    pub(crate) full_move: u32,
}

/// A single game session
///
/// Owns the board, both players and every history the rules need: the move
/// log (for undo and notation) and the position fingerprints (for
/// repetition). All mutation goes through `&mut self`, so one session has
/// exactly one writer.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) config: RulesConfig,
    pub(crate) players: [Player; 2],
    pub(crate) current: usize,
    pub(crate) status: GameStatus,
    pub(crate) ply: u32,
    pub(crate) full_move: u32,
    pub(crate) countdown: u32,
    pub(crate) log: Vec<LogEntry>,
    pub(crate) fingerprints: Vec<Fingerprint>,
    pub(crate) pending_promotion: Option<Square>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard game: White against Black on the default 8×8 layout
    pub fn new() -> Self {
        Self::from_parts(
            Board::standard(),
            RulesConfig::default(),
            [Player::new(Color::White), Player::new(Color::Black)],
        )
    }

    /// Game on the default layout with custom rule parameters
    pub fn with_config(config: RulesConfig) -> ChessEngineResult<Self> {
        Self::with_players(config, Color::White, Color::Black)
    }

    /// Game with explicit player colors
    ///
    /// Equal colors are accepted here and reported by [`Game::start`].
    /// Rule parameters are checked with [`RulesConfig::validate`].
    pub fn with_players(
        config: RulesConfig,
        player1: Color,
        player2: Color,
    ) -> ChessEngineResult<Self> {
        config.validate()?;
        let board = Board::with_default_layout(config.board_size)?;
        Ok(Self::from_parts(
            board,
            config,
            [Player::new(player1), Player::new(player2)],
        ))
    }

    fn from_parts(board: Board, config: RulesConfig, players: [Player; 2]) -> Self {
        let mut game = Self {
            board,
            config,
            players,
            current: 0,
            status: GameStatus::NotStarted,
            ply: 0,
            full_move: 1,
            countdown: config.fifty_move_countdown,
            log: Vec::new(),
            fingerprints: Vec::new(),
            pending_promotion: None,
        };
        game.current = game.white_holder();
        game
    }

    /// Index of the player holding White, or the first player when neither does
    fn white_holder(&self) -> usize {
        self.players
            .iter()
            .position(|player| player.color() == Color::White)
            .unwrap_or(0)
    }

    pub(crate) fn has_valid_players(&self) -> bool {
        self.players[0].color() != self.players[1].color()
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// Enter `Running`; fails without a state change when both players share a color
    pub fn start(&mut self) -> ChessEngineResult<()> {
        if !self.has_valid_players() {
            let color = self.players[0].color();
            warn!("[ENGINE] Refusing to start: both players are {}", color);
            return Err(ChessEngineError::SameColorPlayers {
                color: color.to_string(),
            });
        }
        self.status = GameStatus::Running;
        info!("[ENGINE] Game started");
        Ok(())
    }

    /// `Running` → `Paused`; no effect in other states
    pub fn pause(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::Paused;
            info!("[ENGINE] Game paused");
        }
    }

    /// `Paused` → `Running`; no effect in other states
    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Running;
            info!("[ENGINE] Game resumed");
        }
    }

    /// Back to `NotStarted` with the default layout and empty histories
    pub fn reset(&mut self) {
        self.reset_with(|board| {
            if let Err(err) = board.set_default_layout() {
                warn!("[ENGINE] Default layout unavailable: {}", err);
            }
        });
    }

    /// Back to `NotStarted` with a custom layout
    ///
    /// The board is cleared before `setup` runs, so `setup` only places pieces.
    pub fn reset_with<F>(&mut self, setup: F)
    where
        F: FnOnce(&mut Board),
    {
        self.board.clear();
        setup(&mut self.board);

        self.log.clear();
        self.fingerprints.clear();
        for player in &mut self.players {
            player.reset();
        }
        self.status = GameStatus::NotStarted;
        self.ply = 0;
        self.full_move = 1;
        self.countdown = self.config.fifty_move_countdown;
        self.pending_promotion = None;
        self.current = self.white_holder();
        info!("[ENGINE] Game reset");
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, color: Color) -> Option<&Player> {
        self.players.iter().find(|player| player.color() == color)
    }

    pub fn player_mut(&mut self, color: Color) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.color() == color)
    }

    /// The player to move
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn side_to_move(&self) -> Color {
        self.current_player().color()
    }

    /// Half-moves played
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Full-move number, starting at 1 and advancing after Black moves
    pub fn full_move(&self) -> u32 {
        self.full_move
    }

    /// Half-moves left before the fifty-move draw
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn log_text(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(|entry| entry.text.as_str())
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.log.last().map(|entry| &entry.mv)
    }

    pub fn fingerprints(&self) -> &[Fingerprint] {
        &self.fingerprints
    }

    /// Square of the pawn waiting for a promotion choice
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    pub fn is_awaiting_promotion(&self) -> bool {
        self.pending_promotion.is_some()
    }
}
