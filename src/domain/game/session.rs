//! Game session aggregate - One player's progress through a game mode.
//!
//! The session is owned by its caller and mutated through `&mut self`; the
//! question bank it plays is shared read-only and passed into every call.
//! Every operation validates before it mutates, so a rejected call leaves
//! the session exactly as it was.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scoring::{points_for_guess, points_for_streak, GuessReaction, GUESS_STREAK_THRESHOLD};
use super::{GameError, GameMode, GamePhase, GameSummary};
use crate::domain::foundation::{GameSessionId, Percentage, StateMachine};
use crate::domain::questions::{ChartPoint, ComparisonQuestion, EstimationQuestion, QuestionBank};

/// Seed used when none is configured.
pub const DEFAULT_SHUFFLE_SEED: u64 = 42;

/// Result of one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AnswerOutcome {
    HigherLower {
        said_higher: bool,
        correct: bool,
        points: u32,
        anchor: ChartPoint,
        compare: ChartPoint,
    },
    Guess {
        guess: Percentage,
        answer: Percentage,
        off_by: Percentage,
        points: u32,
        reaction: GuessReaction,
    },
}

impl AnswerOutcome {
    pub fn points(&self) -> u32 {
        match self {
            Self::HigherLower { points, .. } | Self::Guess { points, .. } => *points,
        }
    }

    /// True when the answer extended the streak.
    pub fn is_success(&self) -> bool {
        match self {
            Self::HigherLower { correct, .. } => *correct,
            Self::Guess { points, .. } => *points >= GUESS_STREAK_THRESHOLD,
        }
    }
}

/// The question currently in front of the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "question", rename_all = "snake_case")]
pub enum CurrentQuestion {
    Comparison(ComparisonQuestion),
    Estimation(EstimationQuestion),
}

/// Serialisable view of a session for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub id: GameSessionId,
    pub mode: Option<GameMode>,
    pub phase: GamePhase,
    pub score: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub questions_answered: u32,
    pub question_index: usize,
    pub total_questions: usize,
    pub question: Option<CurrentQuestion>,
    pub last_outcome: Option<AnswerOutcome>,
}

/// One player's game.
///
/// # Invariants
///
/// - `mode` is `None` exactly when `phase` is `Menu`.
/// - In Higher/Lower, `order` is a permutation of the comparison indices and
///   `question_index < order.len()`.
/// - `best_streak >= streak`.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: GameSessionId,
    mode: Option<GameMode>,
    phase: GamePhase,
    score: u32,
    streak: u32,
    best_streak: u32,
    questions_answered: u32,
    question_index: usize,
    order: Option<Vec<usize>>,
    seed: u64,
    rng: ChaCha8Rng,
    last_outcome: Option<AnswerOutcome>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(DEFAULT_SHUFFLE_SEED)
    }
}

impl GameSession {
    /// Creates a session in the menu. `seed` fixes every question order.
    pub fn new(seed: u64) -> Self {
        Self {
            id: GameSessionId::new(),
            mode: None,
            phase: GamePhase::Menu,
            score: 0,
            streak: 0,
            best_streak: 0,
            questions_answered: 0,
            question_index: 0,
            order: None,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            last_outcome: None,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> GameSessionId {
        self.id
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn questions_answered(&self) -> u32 {
        self.questions_answered
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    /// Comparison order of the current Higher/Lower pass.
    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn last_outcome(&self) -> Option<&AnswerOutcome> {
        self.last_outcome.as_ref()
    }

    // ───────────────────────────────────────────────────────────────
    // Lifecycle
    // ───────────────────────────────────────────────────────────────

    /// Starts `mode` from the menu with zeroed counters.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if a mode is already being played
    /// - `EmptyQuestionBank` if `bank` has no questions for `mode`
    pub fn select_mode(&mut self, mode: GameMode, bank: &QuestionBank) -> Result<(), GameError> {
        const OPERATION: &str = "select a mode";
        if self.phase != GamePhase::Menu {
            return Err(GameError::invalid_transition(OPERATION, self.phase));
        }
        self.start(OPERATION, mode, bank)
    }

    /// Restarts the current mode with zeroed counters and a fresh order.
    ///
    /// # Errors
    ///
    /// - `NoModeSelected` from the menu
    /// - `EmptyQuestionBank` if `bank` has no questions for the mode
    pub fn reset(&mut self, bank: &QuestionBank) -> Result<(), GameError> {
        let mode = self.mode.ok_or(GameError::NoModeSelected)?;
        self.start("reset", mode, bank)
    }

    /// Leaves the current game. Always succeeds.
    pub fn exit_to_menu(&mut self) {
        self.mode = None;
        self.phase = GamePhase::Menu;
        self.order = None;
        self.last_outcome = None;
        debug!(session_id = %self.id, score = self.score, "Game exited to menu");
    }

    fn start(&mut self, operation: &'static str, mode: GameMode, bank: &QuestionBank) -> Result<(), GameError> {
        let total = Self::count_for(mode, bank);
        if total == 0 {
            return Err(GameError::EmptyQuestionBank { mode });
        }
        let phase = self.checked_transition(operation, GamePhase::AwaitingAnswer)?;

        // Reseeding makes every start replay the same order.
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let order = match mode {
            GameMode::HigherLower => {
                let mut order: Vec<usize> = (0..total).collect();
                order.shuffle(&mut rng);
                Some(order)
            }
            GameMode::Guess => None,
        };

        self.mode = Some(mode);
        self.phase = phase;
        self.score = 0;
        self.streak = 0;
        self.best_streak = 0;
        self.questions_answered = 0;
        self.question_index = 0;
        self.order = order;
        self.rng = rng;
        self.last_outcome = None;

        debug!(session_id = %self.id, mode = ?mode, questions = total, "Game started");
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Answers
    // ───────────────────────────────────────────────────────────────

    /// Answers the current comparison with "higher" (`true`) or "lower".
    ///
    /// A correct answer extends the streak and scores 10 × min(streak, 5);
    /// a wrong one resets the streak.
    pub fn submit_higher_lower(
        &mut self,
        says_higher: bool,
        bank: &QuestionBank,
    ) -> Result<AnswerOutcome, GameError> {
        const OPERATION: &str = "submit a higher/lower answer";
        self.require_mode(OPERATION, GameMode::HigherLower)?;
        let phase = self.checked_transition(OPERATION, GamePhase::Revealed)?;
        let question = self
            .current_comparison(bank)
            .ok_or(GameError::EmptyQuestionBank {
                mode: GameMode::HigherLower,
            })?;

        let correct = question.is_correct(says_higher);
        let points = if correct {
            points_for_streak(self.streak + 1)
        } else {
            0
        };
        let outcome = AnswerOutcome::HigherLower {
            said_higher: says_higher,
            correct,
            points,
            anchor: question.anchor.clone(),
            compare: question.compare.clone(),
        };

        self.record(outcome.clone(), phase);
        Ok(outcome)
    }

    /// Submits a percentage guess for the current estimation fact.
    ///
    /// # Errors
    ///
    /// - `InvalidGuess` if `guess` is not a finite value in [0, 100]
    pub fn submit_guess(&mut self, guess: f64, bank: &QuestionBank) -> Result<AnswerOutcome, GameError> {
        const OPERATION: &str = "submit a guess";
        self.require_mode(OPERATION, GameMode::Guess)?;
        let phase = self.checked_transition(OPERATION, GamePhase::Revealed)?;
        let guess_pct = Percentage::try_from_f64(guess).map_err(|_| GameError::InvalidGuess { guess })?;
        let question = self
            .current_estimation(bank)
            .ok_or(GameError::EmptyQuestionBank {
                mode: GameMode::Guess,
            })?;

        let points = points_for_guess(guess_pct, question.answer);
        let outcome = AnswerOutcome::Guess {
            guess: guess_pct,
            answer: question.answer,
            off_by: Percentage::from_tenths(guess_pct.tenths().abs_diff(question.answer.tenths())),
            points,
            reaction: GuessReaction::from_points(points),
        };

        self.record(outcome.clone(), phase);
        Ok(outcome)
    }

    fn record(&mut self, outcome: AnswerOutcome, phase: GamePhase) {
        if outcome.is_success() {
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
        self.score += outcome.points();
        self.questions_answered += 1;
        self.phase = phase;

        debug!(
            session_id = %self.id,
            points = outcome.points(),
            score = self.score,
            streak = self.streak,
            "Answer recorded"
        );
        self.last_outcome = Some(outcome);
    }

    /// Moves past a revealed answer.
    ///
    /// Higher/Lower never ends: after the last comparison the order is
    /// reshuffled (continuing the session generator) and restarts at 0.
    /// Guess ends in `Summary` once every fact has been answered.
    pub fn next(&mut self, bank: &QuestionBank) -> Result<GamePhase, GameError> {
        const OPERATION: &str = "advance";
        let mode = self
            .mode
            .ok_or_else(|| GameError::invalid_transition(OPERATION, self.phase))?;
        if self.phase != GamePhase::Revealed {
            return Err(GameError::invalid_transition(OPERATION, self.phase));
        }

        match mode {
            GameMode::HigherLower => {
                let mut index = self.question_index + 1;
                if let Some(order) = self.order.as_mut() {
                    if index >= order.len() {
                        order.shuffle(&mut self.rng);
                        index = 0;
                        debug!(session_id = %self.id, "Comparison order reshuffled");
                    }
                }
                self.question_index = index;
                self.phase = GamePhase::AwaitingAnswer;
            }
            GameMode::Guess => {
                if self.questions_answered as usize >= bank.estimations().len() {
                    self.phase = GamePhase::Summary;
                    debug!(session_id = %self.id, score = self.score, "Guess run complete");
                } else {
                    self.question_index += 1;
                    self.phase = GamePhase::AwaitingAnswer;
                }
            }
        }
        Ok(self.phase)
    }

    // ───────────────────────────────────────────────────────────────
    // Views
    // ───────────────────────────────────────────────────────────────

    /// The question being asked or revealed; `None` in the menu.
    pub fn current_question(&self, bank: &QuestionBank) -> Option<CurrentQuestion> {
        match self.mode? {
            GameMode::HigherLower => self
                .current_comparison(bank)
                .cloned()
                .map(CurrentQuestion::Comparison),
            GameMode::Guess => self
                .current_estimation(bank)
                .cloned()
                .map(CurrentQuestion::Estimation),
        }
    }

    /// Questions available to the current mode; 0 in the menu.
    pub fn total_questions(&self, bank: &QuestionBank) -> usize {
        self.mode.map_or(0, |mode| Self::count_for(mode, bank))
    }

    pub fn snapshot(&self, bank: &QuestionBank) -> GameSnapshot {
        GameSnapshot {
            id: self.id,
            mode: self.mode,
            phase: self.phase,
            score: self.score,
            streak: self.streak,
            best_streak: self.best_streak,
            questions_answered: self.questions_answered,
            question_index: self.question_index,
            total_questions: self.total_questions(bank),
            question: self.current_question(bank),
            last_outcome: self.last_outcome.clone(),
        }
    }

    /// Score card of a Guess run, once something has been answered.
    pub fn summary(&self, bank: &QuestionBank) -> Option<GameSummary> {
        if self.mode != Some(GameMode::Guess) {
            return None;
        }
        GameSummary::compute(
            self.score,
            self.questions_answered,
            bank.estimations().len() as u32,
            self.best_streak,
        )
    }

    // ───────────────────────────────────────────────────────────────
    // Helpers
    // ───────────────────────────────────────────────────────────────

    fn count_for(mode: GameMode, bank: &QuestionBank) -> usize {
        match mode {
            GameMode::HigherLower => bank.comparisons().len(),
            GameMode::Guess => bank.estimations().len(),
        }
    }

    fn current_comparison<'b>(&self, bank: &'b QuestionBank) -> Option<&'b ComparisonQuestion> {
        let index = *self.order.as_ref()?.get(self.question_index)?;
        bank.comparison(index)
    }

    fn current_estimation<'b>(&self, bank: &'b QuestionBank) -> Option<&'b EstimationQuestion> {
        bank.estimation(self.question_index)
    }

    fn require_mode(&self, operation: &'static str, expected: GameMode) -> Result<(), GameError> {
        match self.mode {
            None => Err(GameError::invalid_transition(operation, self.phase)),
            Some(mode) if mode != expected => Err(GameError::WrongMode { operation, mode }),
            Some(_) => Ok(()),
        }
    }

    fn checked_transition(&self, operation: &'static str, target: GamePhase) -> Result<GamePhase, GameError> {
        self.phase
            .transition_to(target)
            .map_err(|_| GameError::invalid_transition(operation, self.phase))
    }
}
