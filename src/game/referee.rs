//! Headless game driver
//!
//! A [`Referee`] owns one [`Game`] and feeds it parsed move input, one step
//! per move, the way an interactive front end would feed it clicks. After
//! every committed move it asks the engine for the terminal outcome and
//! stops at the first decisive one. A move the engine refuses ends the run
//! and is reported in the [`Transcript`].

use chess_engine::{Color, Game, Outcome, PromotionChoice, StepResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{CoreResult, RefereeSettings};
use crate::input::{MoveInput, PromotionKeymap};

/// Promotion used when move text carries no promotion key
pub const DEFAULT_PROMOTION: PromotionChoice = PromotionChoice::Queen;

/// A move the engine did not accept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedMove {
    /// Zero-based position in the submitted move list
    pub index: usize,
    pub text: String,
}

/// Record of a refereed session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Move-log text, one entry per committed move
    pub moves: Vec<String>,
    pub outcome: Outcome,
    /// Human-readable form of `outcome`
    pub result: String,
    pub plies: u32,
    pub white_material_captured: u32,
    pub black_material_captured: u32,
    /// Fingerprint of the final position
    pub final_position: String,
    /// First refused move, if the run stopped early
    pub rejected: Option<RejectedMove>,
}

/// Drives a [`Game`] from text input
pub struct Referee {
    game: Game,
    keys: PromotionKeymap,
}

impl Referee {
    /// Start a game with the given settings
    pub fn new(settings: &RefereeSettings) -> CoreResult<Self> {
        let mut game = Game::with_config(settings.rules)?;
        game.start()?;
        info!(
            "[REFEREE] New {}x{} game",
            settings.rules.board_size, settings.rules.board_size
        );
        Ok(Self {
            game,
            keys: settings.promotion_keys,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn keys(&self) -> &PromotionKeymap {
        &self.keys
    }

    /// Submit one move, resolving a resulting promotion at once
    pub fn submit(&mut self, input: &MoveInput) -> StepResult {
        let result = self.game.step(Some(input.intent), input.promotion);
        if result == StepResult::TurnPassed && self.game.is_awaiting_promotion() {
            let choice = input.promotion.unwrap_or(DEFAULT_PROMOTION);
            self.game.choose_promotion(choice);
        }
        result
    }

    /// Play `moves` in order until one is refused or the game ends
    pub fn play(&mut self, moves: &[MoveInput]) -> Transcript {
        let mut rejected = None;
        let mut outcome = self.game.evaluate();

        for (index, input) in moves.iter().enumerate() {
            if outcome.is_game_over() {
                debug!("[REFEREE] Ignoring {} moves after the result", moves.len() - index);
                break;
            }
            let text = self.move_label(input);
            match self.submit(input) {
                StepResult::TurnPassed => outcome = self.game.evaluate(),
                other => {
                    warn!("[REFEREE] Move {} ({}) refused: {:?}", index + 1, text, other);
                    rejected = Some(RejectedMove { index, text });
                    break;
                }
            }
        }

        if outcome.is_game_over() {
            info!("[REFEREE] {}", outcome);
        }
        self.transcript(outcome, rejected)
    }

    /// Every legal move for the side to move, as coordinate text
    pub fn legal_moves(&mut self) -> Vec<String> {
        let origins: Vec<_> = self
            .game
            .board()
            .pieces_of(self.game.side_to_move())
            .map(|piece| piece.position)
            .collect();
        let mut moves = Vec::new();
        for from in origins {
            for to in self.game.legal_destinations(from) {
                moves.push(format!("{from}{to}"));
            }
        }
        moves
    }

    fn move_label(&self, input: &MoveInput) -> String {
        let mut text = format!("{}{}", input.intent.from, input.intent.to);
        if let Some(choice) = input.promotion {
            text.push(self.keys.key_for(choice));
        }
        text
    }

    fn material_of(&self, color: Color) -> u32 {
        self.game
            .player(color)
            .map(|player| player.material_captured())
            .unwrap_or(0)
    }

    fn transcript(&self, outcome: Outcome, rejected: Option<RejectedMove>) -> Transcript {
        Transcript {
            moves: self.game.log_text().map(str::to_string).collect(),
            outcome,
            result: outcome.message().to_string(),
            plies: self.game.ply(),
            white_material_captured: self.material_of(Color::White),
            black_material_captured: self.material_of(Color::Black),
            final_position: chess_engine::Fingerprint::of(self.game.board()).to_string(),
            rejected,
        }
    }
}
