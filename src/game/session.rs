//! The flip/match state machine and scoring.

use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::status::{GamePhase, GameStatus, MatchResult};
use crate::board::Board;
use crate::cards::{AssetResolver, Card};
use crate::core::{
    Clock, EndBonus, GameConfig, GameRng, MemoryError, MonotonicClock, Result, ScoringRules,
    Stopwatch, Transition,
};
use crate::leaderboard::ScoreRecord;

/// A single game session.
///
/// Owns its board and all session state. Every operation is synchronous;
/// the caller owns timing. The usual loop is:
///
/// 1. `flip` one card, then a second.
/// 2. Wait for a display delay so both faces are visible.
/// 3. `resolve`. On `NoMatch`, call `flip_back`.
///
/// ```
/// use memory_match::core::{GameConfig, ManualClock};
/// use memory_match::game::{Game, MatchResult};
///
/// let clock = ManualClock::new();
/// let mut game = Game::with_clock(GameConfig::new(2, 2).with_seed(1), clock).unwrap();
///
/// // Find the partner of card 0.
/// let partner = (1..4)
///     .find(|&i| game.card(i).unwrap().id() == game.card(0).unwrap().id())
///     .unwrap();
///
/// assert!(game.flip(0));
/// assert!(game.flip(partner));
/// assert_eq!(game.resolve(), Ok(MatchResult::Matched));
/// assert!(!game.is_game_over());
/// ```
#[derive(Clone, Debug)]
pub struct Game<K, C: Clock = MonotonicClock> {
    board: Board<K>,
    rng: GameRng,
    scoring: ScoringRules,
    stopwatch: Stopwatch<C>,
    score: u32,
    moves: u32,
    /// Face-up, unmatched cards awaiting resolution, in flip order.
    pending: SmallVec<[usize; 2]>,
    started: bool,
    game_over: bool,
    final_elapsed: Option<u64>,
    end_bonus: Option<EndBonus>,
}

impl Game<usize> {
    /// Start a numeric game timed by the system's monotonic clock.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> Game<usize, C> {
    /// Start a numeric game timed by `clock`.
    pub fn with_clock(config: GameConfig, clock: C) -> Result<Self> {
        let mut rng = rng_for(&config);
        let board = Board::new(config.rows, config.cols, &mut rng)?;
        Ok(Self::from_board(board, rng, config.scoring, clock))
    }
}

impl<C: Clock> Game<String, C> {
    /// Start a game whose cards are asset keys for `theme`.
    pub fn themed<R>(config: GameConfig, theme: &str, resolver: &R, clock: C) -> Result<Self>
    where
        R: AssetResolver + ?Sized,
    {
        let mut rng = rng_for(&config);
        let board = Board::themed(config.rows, config.cols, theme, resolver, &mut rng)?;
        Ok(Self::from_board(board, rng, config.scoring, clock))
    }
}

fn rng_for(config: &GameConfig) -> GameRng {
    config.seed.map_or_else(GameRng::from_entropy, GameRng::new)
}

impl<K, C: Clock> Game<K, C> {
    /// Start a game on an already dealt board.
    ///
    /// `rng` is kept for reshuffling on `reset`. The clock starts now.
    #[must_use]
    pub fn from_board(board: Board<K>, rng: GameRng, scoring: ScoringRules, clock: C) -> Self {
        Self {
            board,
            rng,
            scoring,
            stopwatch: Stopwatch::start(clock),
            score: 0,
            moves: 0,
            pending: SmallVec::new(),
            started: false,
            game_over: false,
            final_elapsed: None,
            end_bonus: None,
        }
    }

    /// Flip a card face-up. Returns `false` and changes nothing if the
    /// flip is not allowed.
    pub fn flip(&mut self, index: usize) -> bool {
        match self.try_flip(index) {
            Ok(()) => true,
            Err(err) => {
                trace!(index, %err, "Flip rejected");
                false
            }
        }
    }

    /// Flip a card face-up, reporting why a rejected flip was refused.
    ///
    /// The second flip of a pair counts a move immediately.
    pub fn try_flip(&mut self, index: usize) -> Result<()> {
        if self.game_over {
            return Err(Transition::GameOver.into());
        }

        let len = self.board.len();
        let card = self
            .board
            .card_mut(index)
            .ok_or(MemoryError::IndexOutOfRange { index, len })?;

        if !card.is_hidden() {
            return Err(Transition::AlreadyRevealed.into());
        }
        if self.pending.len() >= 2 {
            return Err(Transition::ResolutionPending.into());
        }

        card.reveal();
        self.pending.push(index);
        self.started = true;

        if self.pending.len() == 2 {
            self.moves = self.moves.saturating_add(1);
        }

        debug!(index, pending = self.pending.len(), moves = self.moves, "Card flipped");
        Ok(())
    }

    /// Compare the two pending cards.
    ///
    /// On a match both cards lock face-up, the match points are added and
    /// the pending set clears; the winning match also applies the end-of-game
    /// bonus. On a mismatch nothing changes until `flip_back`.
    pub fn resolve(&mut self) -> Result<MatchResult>
    where
        K: PartialEq,
    {
        let [first, second] = match self.pending.as_slice() {
            &[first, second] => [first, second],
            _ => return Err(Transition::NothingToResolve.into()),
        };

        let is_pair = match (self.board.card(first), self.board.card(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };

        if !is_pair {
            debug!(first, second, "No match");
            return Ok(MatchResult::NoMatch);
        }

        for index in [first, second] {
            if let Some(card) = self.board.card_mut(index) {
                card.set_matched();
            }
        }
        self.score = self.score.saturating_add(self.scoring.match_points);
        self.pending.clear();
        debug!(first, second, score = self.score, "Matched pair");

        if self.board.all_matched() {
            self.finish();
        }

        Ok(MatchResult::Matched)
    }

    fn finish(&mut self) {
        let elapsed = self.stopwatch.elapsed_seconds();
        let bonus = self.scoring.end_bonus(elapsed, self.moves);

        self.score = self.score.saturating_add(bonus.total());
        self.game_over = true;
        self.final_elapsed = Some(elapsed);
        self.end_bonus = Some(bonus);

        info!(
            score = self.score,
            moves = self.moves,
            elapsed,
            time_bonus = bonus.time,
            moves_bonus = bonus.moves,
            "Game over"
        );
    }

    /// Turn the pending cards face-down and clear the pending set.
    ///
    /// Matched cards are never turned back.
    pub fn flip_back(&mut self) {
        for index in self.pending.drain(..) {
            if let Some(card) = self.board.card_mut(index) {
                card.hide();
            }
        }
    }

    /// Redeal the same pairs and start over.
    pub fn reset(&mut self) {
        self.board.reset(&mut self.rng);
        self.stopwatch = Stopwatch::start(self.stopwatch.clock().clone());
        self.score = 0;
        self.moves = 0;
        self.pending.clear();
        self.started = false;
        self.game_over = false;
        self.final_elapsed = None;
        self.end_bonus = None;
        debug!("Game reset");
    }

    /// Build the record to submit once the game is won.
    pub fn score_record(&self, player_name: &str) -> Result<ScoreRecord> {
        let elapsed = self.final_elapsed.ok_or(MemoryError::GameNotOver)?;
        let name = player_name.trim();
        if name.is_empty() {
            return Err(MemoryError::EmptyPlayerName);
        }
        Ok(ScoreRecord::new(name, self.score, self.moves, elapsed))
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Seconds since the game started. Keeps counting after game over.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.stopwatch.elapsed_seconds()
    }

    /// Seconds on the clock when the last pair was matched.
    #[must_use]
    pub fn final_elapsed_seconds(&self) -> Option<u64> {
        self.final_elapsed
    }

    /// The bonus applied on the winning match.
    #[must_use]
    pub fn end_bonus(&self) -> Option<EndBonus> {
        self.end_bonus
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self.started {
            GamePhase::Playing
        } else {
            GamePhase::Idle
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board<K> {
        &self.board
    }

    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card<K>> {
        self.board.card(index)
    }

    #[must_use]
    pub fn scoring(&self) -> &ScoringRules {
        &self.scoring
    }

    /// Seed of the current deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Elapsed-time handle for a display ticker on another thread.
    #[must_use]
    pub fn stopwatch(&self) -> Stopwatch<C> {
        self.stopwatch.clone()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus {
            score: self.score,
            moves: self.moves,
            elapsed_seconds: self.elapsed_seconds(),
            game_over: self.game_over,
            matched_pairs: self.board.matched_pairs(),
            total_pairs: self.board.pair_count(),
        }
    }
}
