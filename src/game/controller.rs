//! Game controller: the surface a presentation layer talks to.
//!
//! ## State Machine
//!
//! ```text
//! Idle --new_game--> Ready --tap (selection full)--> AwaitingResolution
//!                      ^                                   |
//!                      +----------- resolved, not won -----+
//!                                                          |
//!                               Won <--- resolved, won ----+
//! ```
//!
//! `new_game`/`reset` are accepted in every phase and cancel a pending
//! resolution. Taps outside `Ready` are ignored.
//!
//! ## Driving Resolutions
//!
//! A full selection produces a [`ResolutionTicket`]. The driver then either
//! feeds frame time to [`GameController::advance`], redeems the ticket with
//! [`GameController::complete_resolution`] when its own timer fires, or calls
//! [`GameController::resolve_pending`] to resolve at once.

use std::time::Duration;

use tracing::{debug, info, instrument};

use super::events::{MatchEvent, Observers, Resolution, WinSummary};
use super::pending::{PendingResolution, ResolutionTicket};
use crate::board::BoardGenerator;
use crate::core::config::{BoardConfig, SymbolPool};
use crate::core::entity::DotId;
use crate::core::error::{GameError, Rejection};
use crate::core::rng::GameRng;
use crate::core::state::{GamePhase, GameState, Progress};

/// Delay between a full selection and its resolution, long enough for the
/// player to see every revealed symbol.
pub const DEFAULT_RESOLUTION_DELAY: Duration = Duration::from_millis(800);

/// Orchestrates board generation, selection, resolution and the win signal.
///
/// ## Example
///
/// ```
/// use memory_match::core::{BoardConfig, GamePhase, SymbolPool};
/// use memory_match::game::GameController;
///
/// let mut controller = GameController::new(SymbolPool::default()).with_seed(7);
/// controller.new_game(BoardConfig::default()).unwrap();
/// assert_eq!(controller.phase(), GamePhase::Ready);
///
/// // Pick two dots that share a symbol
/// let board = controller.state().unwrap().board();
/// let first = board.dots().next().unwrap().clone();
/// let twin = board.dots().find(|d| d.symbol == first.symbol && d.id != first.id).unwrap().id;
///
/// controller.tap_dot(first.id);
/// controller.tap_dot(twin);
/// assert_eq!(controller.phase(), GamePhase::AwaitingResolution);
///
/// controller.resolve_pending();
/// assert_eq!(controller.progress().matched_sets, 1);
/// ```
#[derive(Debug)]
pub struct GameController {
    symbols: SymbolPool,
    config: BoardConfig,
    resolution_delay: Duration,
    generator: BoardGenerator,
    rng: GameRng,
    state: Option<GameState>,
    pending: Option<PendingResolution>,
    epoch: u64,
    observers: Observers,
}

impl GameController {
    /// Create an idle controller drawing symbols from `symbols`.
    ///
    /// Layouts are random; use [`with_seed`](Self::with_seed) for
    /// reproducible games.
    #[must_use]
    pub fn new(symbols: SymbolPool) -> Self {
        Self {
            symbols,
            config: BoardConfig::default(),
            resolution_delay: DEFAULT_RESOLUTION_DELAY,
            generator: BoardGenerator::new(),
            rng: GameRng::from_entropy(),
            state: None,
            pending: None,
            epoch: 0,
            observers: Observers::new(),
        }
    }

    /// Seed the layout RNG.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = GameRng::new(seed);
        self
    }

    /// Set the delay carried by resolution tickets.
    #[must_use]
    pub fn with_resolution_delay(mut self, delay: Duration) -> Self {
        self.resolution_delay = delay;
        self
    }

    /// Set the configuration used by [`reset`](Self::reset) without
    /// starting a game.
    #[must_use]
    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    // === Lifecycle ===

    /// Start a new game.
    ///
    /// Refuses an invalid configuration with
    /// [`GameError::InvalidConfiguration`]; the configuration is not clamped
    /// and the current game, if any, is left untouched. On success any
    /// pending resolution is cancelled and the phase becomes `Ready`.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn new_game(&mut self, config: BoardConfig) -> Result<&GameState, GameError> {
        config.validate()?;

        if let Some(pending) = self.pending.take() {
            debug!(ticket = ?pending.ticket(), "Cancelled pending resolution");
        }
        self.epoch += 1;
        self.config = config;

        let mut game_rng = self.rng.fork();
        let board_seed = game_rng.seed();
        let board = self.generator.generate(&config, &self.symbols, &mut game_rng);

        info!(
            epoch = self.epoch,
            board_seed,
            match_count = config.match_count,
            dots_per_card = config.dots_per_card,
            cards = config.number_of_cards,
            "Started new game"
        );

        Ok(self.state.insert(GameState::new(config, board, board_seed)))
    }

    /// Start a fresh game with the current configuration.
    pub fn reset(&mut self) -> Result<&GameState, GameError> {
        self.new_game(self.config)
    }

    // === Play ===

    /// Tap a dot. Illegal taps are ignored.
    ///
    /// Returns the ticket if this tap filled the selection.
    pub fn tap_dot(&mut self, dot: DotId) -> Option<ResolutionTicket> {
        match self.try_tap_dot(dot) {
            Ok(ticket) => ticket,
            Err(err) => {
                debug!(%dot, %err, "Ignored tap");
                None
            }
        }
    }

    /// Tap a dot, reporting why it was refused.
    ///
    /// Only accepted in `Ready`. When the tap fills the selection the move
    /// counter increments, a resolution is scheduled and its ticket is
    /// returned.
    pub fn try_tap_dot(&mut self, dot: DotId) -> Result<Option<ResolutionTicket>, GameError> {
        let phase = self.phase();
        let state = match (&mut self.state, phase) {
            (None, _) => return Err(Rejection::NoGame.into()),
            (Some(state), GamePhase::Ready) => state,
            (Some(_), phase) => return Err(Rejection::NotReady(phase).into()),
        };

        let full = state.select(dot)?;
        debug!(%dot, selected = state.selection().len(), "Selected dot");
        if !full {
            return Ok(None);
        }

        let ticket = ResolutionTicket {
            epoch: self.epoch,
            move_number: state.moves(),
            delay: self.resolution_delay,
        };
        self.pending = Some(PendingResolution::new(ticket));
        debug!(?ticket, "Scheduled resolution");
        self.observers.emit(&MatchEvent::ResolutionScheduled(ticket));
        Ok(Some(ticket))
    }

    /// Feed elapsed driver time. Resolves the pending selection once its
    /// delay has passed.
    pub fn advance(&mut self, elapsed: Duration) -> Option<Resolution> {
        let due = self.pending.as_mut()?.advance(elapsed);
        if due {
            self.resolve_pending()
        } else {
            None
        }
    }

    /// Redeem a ticket. A ticket that is not the pending one (from an
    /// earlier game or an already resolved move) is dropped.
    pub fn complete_resolution(&mut self, ticket: ResolutionTicket) -> Option<Resolution> {
        if self.pending() == Some(ticket) {
            return self.resolve_pending();
        }
        debug!(?ticket, current_epoch = self.epoch, "Dropped stale resolution");
        None
    }

    /// Resolve the pending selection now, ignoring the delay.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn resolve_pending(&mut self) -> Option<Resolution> {
        let ticket = self.pending.take()?.ticket();
        let state = self.state.as_mut()?;

        let (outcome, dots) = state.resolve();
        let resolution = Resolution { ticket, outcome, dots };
        debug!(?outcome, moves = state.moves(), "Resolved selection");
        self.observers.emit(&MatchEvent::Resolved(resolution.clone()));

        if state.is_won() {
            let summary = WinSummary {
                epoch: self.epoch,
                moves: state.moves(),
                sets: state.progress().total_sets,
            };
            info!(moves = summary.moves, sets = summary.sets, "Game won");
            self.observers.emit(&MatchEvent::Won(summary));
        }

        Some(resolution)
    }

    // === Observation ===

    /// Called when a full selection schedules a resolution.
    pub fn on_resolution_scheduled(&mut self, hook: impl FnMut(&ResolutionTicket) + 'static) {
        self.observers.on_resolution_scheduled(hook);
    }

    /// Called after every resolution.
    pub fn on_resolved(&mut self, hook: impl FnMut(&Resolution) + 'static) {
        self.observers.on_resolved(hook);
    }

    /// Called when the last set is found.
    pub fn on_win(&mut self, hook: impl FnMut(&WinSummary) + 'static) {
        self.observers.on_win(hook);
    }

    /// Called for every event.
    pub fn on_event(&mut self, hook: impl FnMut(&MatchEvent) + 'static) {
        self.observers.on_event(hook);
    }

    /// Registered callbacks.
    pub fn observers_mut(&mut self) -> &mut Observers {
        &mut self.observers
    }

    // === Queries ===

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        match &self.state {
            None => GamePhase::Idle,
            Some(state) if state.is_won() => GamePhase::Won,
            Some(_) if self.pending.is_some() => GamePhase::AwaitingResolution,
            Some(_) => GamePhase::Ready,
        }
    }

    /// State of the current game.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Configuration of the current (or next) game.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Symbols boards are drawn from.
    #[must_use]
    pub fn symbols(&self) -> &SymbolPool {
        &self.symbols
    }

    /// Ticket of the pending resolution, if any.
    #[must_use]
    pub fn pending(&self) -> Option<ResolutionTicket> {
        self.pending.as_ref().map(PendingResolution::ticket)
    }

    /// Time left before the pending resolution is due.
    #[must_use]
    pub fn time_until_resolution(&self) -> Option<Duration> {
        self.pending.as_ref().map(PendingResolution::remaining)
    }

    /// Game generation; increments on every new game.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Moves in the current game (0 when idle).
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.state.as_ref().map_or(0, GameState::moves)
    }

    /// Whether the current game is won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.as_ref().is_some_and(GameState::is_won)
    }

    /// Matched sets against total sets (zeroes when idle).
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.state.as_ref().map(GameState::progress).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::SymbolId;
    use crate::rules::Outcome;

    fn controller() -> GameController {
        GameController::new(SymbolPool::default()).with_seed(42)
    }

    /// Dots grouped by symbol for the current board.
    fn pairs(controller: &GameController) -> Vec<(SymbolId, Vec<DotId>)> {
        let mut groups: Vec<(SymbolId, Vec<DotId>)> = Vec::new();
        for dot in controller.state().unwrap().board().dots() {
            match groups.iter_mut().find(|(s, _)| *s == dot.symbol) {
                Some((_, ids)) => ids.push(dot.id),
                None => groups.push((dot.symbol, vec![dot.id])),
            }
        }
        groups
    }

    #[test]
    fn test_idle_controller() {
        let mut controller = controller();
        assert_eq!(controller.phase(), GamePhase::Idle);
        assert_eq!(controller.moves(), 0);
        assert!(!controller.is_won());
        assert_eq!(
            controller.try_tap_dot(DotId::new(0)),
            Err(GameError::IllegalAction { rejection: Rejection::NoGame })
        );
        assert!(controller.resolve_pending().is_none());
    }

    #[test]
    fn test_new_game_invalid() {
        let mut controller = controller();
        let err = controller.new_game(BoardConfig::new(2, 2, 1)).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration { minimum_cards: 2, .. }));
        assert_eq!(controller.phase(), GamePhase::Idle);
        assert_eq!(controller.epoch(), 0);
    }

    #[test]
    fn test_tap_schedules_resolution() {
        let mut controller = controller();
        controller.new_game(BoardConfig::default()).unwrap();
        let (_, ids) = pairs(&controller).remove(0);

        assert_eq!(controller.try_tap_dot(ids[0]), Ok(None));
        assert_eq!(controller.phase(), GamePhase::Ready);

        let ticket = controller.try_tap_dot(ids[1]).unwrap().unwrap();
        assert_eq!(ticket.epoch, 1);
        assert_eq!(ticket.move_number, 1);
        assert_eq!(ticket.delay, DEFAULT_RESOLUTION_DELAY);
        assert_eq!(controller.phase(), GamePhase::AwaitingResolution);
        assert_eq!(controller.moves(), 1);
        assert_eq!(controller.pending(), Some(ticket));
    }

    #[test]
    fn test_tap_while_awaiting_is_ignored() {
        let mut controller = controller();
        controller.new_game(BoardConfig::default()).unwrap();
        let groups = pairs(&controller);
        controller.tap_dot(groups[0].1[0]);
        controller.tap_dot(groups[1].1[0]);

        let other = groups[2].1[0];
        assert_eq!(
            controller.try_tap_dot(other),
            Err(GameError::from(Rejection::NotReady(GamePhase::AwaitingResolution)))
        );
        assert!(controller.tap_dot(other).is_none());
        let dot = controller.state().unwrap().board().dot(other).unwrap();
        assert!(!dot.revealed);
    }

    #[test]
    fn test_advance_resolves_after_delay() {
        let mut controller = controller().with_resolution_delay(Duration::from_millis(100));
        controller.new_game(BoardConfig::default()).unwrap();
        let (_, ids) = pairs(&controller).remove(0);
        controller.tap_dot(ids[0]);
        controller.tap_dot(ids[1]);

        assert!(controller.advance(Duration::from_millis(60)).is_none());
        assert_eq!(controller.time_until_resolution(), Some(Duration::from_millis(40)));

        let resolution = controller.advance(Duration::from_millis(60)).unwrap();
        assert_eq!(resolution.outcome, Outcome::Matched);
        assert_eq!(controller.phase(), GamePhase::Ready);
        assert!(controller.advance(Duration::from_secs(1)).is_none());
    }

    #[test]
    fn test_mismatch_hides_dots() {
        let mut controller = controller();
        controller.new_game(BoardConfig::default()).unwrap();
        let groups = pairs(&controller);
        let a = groups[0].1[0];
        let b = groups[1].1[0];

        controller.tap_dot(a);
        let ticket = controller.tap_dot(b).unwrap();
        let resolution = controller.complete_resolution(ticket).unwrap();

        assert_eq!(resolution.outcome, Outcome::NotMatched);
        assert_eq!(resolution.dots, vec![a, b]);
        let board = controller.state().unwrap().board();
        assert!(board.dot(a).unwrap().is_hidden());
        assert!(board.dot(b).unwrap().is_hidden());
        assert_eq!(controller.moves(), 1);
    }

    #[test]
    fn test_stale_ticket_dropped_after_new_game() {
        let mut controller = controller();
        controller.new_game(BoardConfig::default()).unwrap();
        let (_, ids) = pairs(&controller).remove(0);
        controller.tap_dot(ids[0]);
        let stale = controller.tap_dot(ids[1]).unwrap();

        controller.new_game(BoardConfig::default()).unwrap();
        assert_eq!(controller.phase(), GamePhase::Ready);
        assert!(controller.pending().is_none());

        assert!(controller.complete_resolution(stale).is_none());
        let state = controller.state().unwrap();
        assert_eq!(state.moves(), 0);
        assert_eq!(state.board().matched_count(), 0);
    }

    #[test]
    fn test_full_game_to_win() {
        let mut controller = controller();
        controller.new_game(BoardConfig::default()).unwrap();

        for (_, ids) in pairs(&controller) {
            assert!(!controller.is_won());
            for id in ids {
                controller.tap_dot(id);
            }
            controller.resolve_pending();
        }

        assert!(controller.is_won());
        assert_eq!(controller.phase(), GamePhase::Won);
        assert_eq!(controller.moves(), 9);

        // Won is terminal until reset
        let any = controller.state().unwrap().board().dots().next().unwrap().id;
        assert!(controller.tap_dot(any).is_none());

        controller.reset().unwrap();
        assert_eq!(controller.phase(), GamePhase::Ready);
        assert_eq!(controller.moves(), 0);
        assert_eq!(controller.epoch(), 2);
    }

    #[test]
    fn test_seeded_controllers_agree() {
        let mut a = controller();
        let mut b = controller();
        a.new_game(BoardConfig::new(3, 9, 3)).unwrap();
        b.new_game(BoardConfig::new(3, 9, 3)).unwrap();

        let sa = a.state().unwrap();
        let sb = b.state().unwrap();
        assert_eq!(sa.board_seed(), sb.board_seed());
        assert!(sa.board().cards().eq(sb.board().cards()));
    }
}
