//! Game state module - manages the complete game state
//!
//! This module ties together the core pieces: deck, turn controller, timers,
//! and result evaluation. It is driven by two calls from the outside:
//! [`GameState::apply_action`] for user input and [`GameState::tick`] for the
//! fixed-timestep clock. Side effects (sound cues, result recording) are
//! never performed here; they are queued and drained by the caller through
//! [`GameState::take_effects`].
//!
//! All timed windows (match/mismatch reveal windows, countdown flash,
//! transient notices) are modelled as millisecond countdowns inside the
//! state struct rather than ambient callbacks, so a
//! wholesale reset (replay, next level, go home) implicitly cancels all of
//! them and no stale timer can mutate a future game.

use crate::deck::Deck;
use crate::results::GameOutcome;
use crate::rng::SimpleRng;
use crate::snapshot::{CardView, GameSnapshot};
use memory_types::{
    CardFace, GameAction, Level, PerformanceTier, SoundCue, COUNTDOWN_FLASH_FROM,
    COUNTDOWN_FLASH_MS, MATCH_LOCK_MS, MISMATCH_LOCK_MS, NOTICE_MS, SECOND_MS,
};

/// A selected card: board position plus its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRef {
    pub index: u16,
    pub value: u16,
}

/// Transient, non-blocking user notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A card was clicked before the game was started.
    PressPlayFirst,
    /// Start was requested with a blank username.
    EmptyUsername,
}

/// Side effects queued by the state machine for the caller to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Sound(SoundCue),
    /// The game ended; append this outcome to the persisted result list.
    RecordResult(GameOutcome),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    level: Level,
    deck: Deck,
    /// Permanently matched board positions; never cleared within a game.
    matched: Vec<bool>,
    /// The single pending selection (first card of a would-be pair).
    pending: Option<CardRef>,
    /// The failed pair kept face-up during a mismatch lock.
    mismatch: Option<(CardRef, CardRef)>,
    /// Board lock: while nonzero, every selection is a no-op.
    lock_timer_ms: u32,
    score: u16,
    remaining_secs: u32,
    elapsed_secs: u32,
    /// Millisecond accumulator toward the next whole-second boundary.
    second_timer_ms: u32,
    countdown_flash: Option<u32>,
    flash_timer_ms: u32,
    notice: Option<Notice>,
    notice_timer_ms: u32,
    username: String,
    started: bool,
    paused: bool,
    game_over: bool,
    outcome: Option<GameOutcome>,
    rng: SimpleRng,
    effects: Vec<Effect>,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let level = Level::One;
        let deck = Deck::shuffled(level, &mut rng);
        let card_count = deck.len();

        Self {
            level,
            deck,
            matched: vec![false; card_count],
            pending: None,
            mismatch: None,
            lock_timer_ms: 0,
            score: 0,
            remaining_secs: level.time_budget_secs(),
            elapsed_secs: 0,
            second_timer_ms: 0,
            countdown_flash: None,
            flash_timer_ms: 0,
            notice: None,
            notice_timer_ms: 0,
            username: String::new(),
            started: false,
            paused: false,
            game_over: false,
            outcome: None,
            rng,
            effects: Vec::new(),
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn score(&self) -> u16 {
        self.score
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn countdown_flash(&self) -> Option<u32> {
        self.countdown_flash
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn pending(&self) -> Option<CardRef> {
        self.pending
    }

    /// Whether the board currently rejects selections.
    pub fn is_locked(&self) -> bool {
        self.lock_timer_ms > 0
    }

    /// Drain the queued side effects.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Derived display state of the card at `index`.
    pub fn card_face(&self, index: u16) -> CardFace {
        if self.matched.get(index as usize).copied().unwrap_or(false) {
            return CardFace::Matched;
        }
        if self.pending.map(|c| c.index) == Some(index) {
            return CardFace::Revealed;
        }
        if let Some((a, b)) = self.mismatch {
            if a.index == index || b.index == index {
                return CardFace::Revealed;
            }
        }
        CardFace::Hidden
    }

    /// Apply a game action. Returns whether the action changed state.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::SelectCard(index) => self.select_card(index),
            GameAction::Start => self.start(),
            GameAction::NextLevel => self.next_level(),
            GameAction::PauseToggle => self.pause_toggle(),
            GameAction::GoHome => self.go_home(),
        }
    }

    /// Start (or restart) a game of the current level.
    ///
    /// A blank username is a recoverable user error: it raises a transient
    /// notice and leaves the state untouched.
    pub fn start(&mut self) -> bool {
        if self.username.trim().is_empty() {
            self.raise_notice(Notice::EmptyUsername);
            self.effects.push(Effect::Sound(SoundCue::Error));
            return false;
        }

        self.begin_level(self.level);
        self.started = true;
        self.effects.push(Effect::Sound(SoundCue::GameStart));
        true
    }

    /// Advance to the next level. Only valid from a won game-over screen.
    pub fn next_level(&mut self) -> bool {
        if !self.game_over || !self.outcome.map(|o| o.won).unwrap_or(false) {
            return false;
        }
        let Some(next) = self.level.next() else {
            return false;
        };

        self.level = next;
        self.begin_level(next);
        self.effects.push(Effect::Sound(SoundCue::LevelUp));
        true
    }

    /// Toggle the pause state (both clocks freeze identically).
    pub fn pause_toggle(&mut self) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Wholesale reset back to the home screen, level one.
    ///
    /// The username survives; everything else (including any in-flight
    /// resolution lock) is discarded.
    pub fn go_home(&mut self) -> bool {
        self.level = Level::One;
        self.begin_level(Level::One);
        self.started = false;
        true
    }

    /// Reset all per-game state and lay out a fresh shuffled board.
    fn begin_level(&mut self, level: Level) {
        self.deck = Deck::shuffled(level, &mut self.rng);
        self.matched.clear();
        self.matched.resize(self.deck.len(), false);
        self.pending = None;
        self.mismatch = None;
        self.lock_timer_ms = 0;
        self.score = 0;
        self.remaining_secs = level.time_budget_secs();
        self.elapsed_secs = 0;
        self.second_timer_ms = 0;
        self.countdown_flash = None;
        self.flash_timer_ms = 0;
        self.paused = false;
        self.game_over = false;
        self.outcome = None;
    }

    /// Flip the card at `index`.
    ///
    /// Turn controller: Idle -> OnePending -> Resolving (locked) -> Idle.
    pub fn select_card(&mut self, index: u16) -> bool {
        if !self.started {
            self.raise_notice(Notice::PressPlayFirst);
            return false;
        }
        if self.game_over || self.lock_timer_ms > 0 {
            return false;
        }
        let Some(value) = self.deck.value_at(index) else {
            return false;
        };
        if self.matched[index as usize] {
            return false;
        }
        // Re-clicking the pending card never counts as its own pair.
        if self.pending.map(|c| c.index) == Some(index) {
            return false;
        }

        self.effects.push(Effect::Sound(SoundCue::Click));

        if self.paused {
            // While paused a first click is held as the pending selection;
            // comparison waits for resume.
            if self.pending.is_none() {
                self.pending = Some(CardRef { index, value });
                return true;
            }
            return false;
        }

        let card = CardRef { index, value };
        match self.pending.take() {
            None => {
                self.pending = Some(card);
            }
            Some(prev) => {
                if prev.value == value {
                    self.resolve_match(prev, card);
                } else {
                    self.resolve_mismatch(prev, card);
                }
            }
        }
        true
    }

    fn resolve_match(&mut self, a: CardRef, b: CardRef) {
        self.matched[a.index as usize] = true;
        self.matched[b.index as usize] = true;
        self.score += 1;
        self.lock_timer_ms = MATCH_LOCK_MS;
        self.effects.push(Effect::Sound(SoundCue::Match));

        if self.score == self.level.pair_count() {
            self.finish();
        }
    }

    fn resolve_mismatch(&mut self, a: CardRef, b: CardRef) {
        // Both cards stay face-up but unselectable until the lock expires.
        self.mismatch = Some((a, b));
        self.lock_timer_ms = MISMATCH_LOCK_MS;
    }

    /// Game-over transition: evaluate the outcome once and queue recording.
    fn finish(&mut self) {
        self.game_over = true;
        let outcome = GameOutcome::evaluate(self.level, self.score, self.elapsed_secs);
        self.outcome = Some(outcome);

        let cue = match outcome.tier {
            PerformanceTier::Top | PerformanceTier::Middle => SoundCue::Win,
            PerformanceTier::Bottom => SoundCue::GameOver,
        };
        self.effects.push(Effect::Sound(cue));
        self.effects.push(Effect::RecordResult(outcome));
    }

    fn raise_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notice_timer_ms = NOTICE_MS;
    }

    /// Advance all clocks by `elapsed_ms`. Returns whether visible state changed.
    ///
    /// The transient windows (notice, countdown flash, resolution lock) decay
    /// unconditionally, even while paused. The two game clocks only advance
    /// while the game is running and unpaused.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let mut advanced = false;

        if self.notice_timer_ms > 0 {
            self.notice_timer_ms = self.notice_timer_ms.saturating_sub(elapsed_ms);
            if self.notice_timer_ms == 0 {
                self.notice = None;
                advanced = true;
            }
        }

        if self.flash_timer_ms > 0 {
            self.flash_timer_ms = self.flash_timer_ms.saturating_sub(elapsed_ms);
            if self.flash_timer_ms == 0 {
                self.countdown_flash = None;
                advanced = true;
            }
        }

        if self.lock_timer_ms > 0 {
            self.lock_timer_ms = self.lock_timer_ms.saturating_sub(elapsed_ms);
            if self.lock_timer_ms == 0 {
                // Mismatch resolution: hide both cards again.
                self.mismatch = None;
                advanced = true;
            }
        }

        if !self.started || self.game_over || self.paused {
            return advanced;
        }

        self.second_timer_ms += elapsed_ms;
        while self.second_timer_ms >= SECOND_MS {
            self.second_timer_ms -= SECOND_MS;
            advanced = true;

            self.elapsed_secs += 1;
            self.remaining_secs = self.remaining_secs.saturating_sub(1);

            if self.remaining_secs >= 1 && self.remaining_secs <= COUNTDOWN_FLASH_FROM {
                self.countdown_flash = Some(self.remaining_secs);
                self.flash_timer_ms = COUNTDOWN_FLASH_MS;
            }

            if self.remaining_secs == 0 {
                self.finish();
                break;
            }
        }

        advanced
    }

    /// Copy the current state into an existing snapshot (reusing its buffers).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cards.clear();
        for (i, &value) in self.deck.values().iter().enumerate() {
            out.cards.push(CardView {
                value,
                face: self.card_face(i as u16),
            });
        }

        out.level = self.level;
        out.pair_count = self.level.pair_count();
        out.score = self.score;
        out.remaining_secs = self.remaining_secs;
        out.elapsed_secs = self.elapsed_secs;
        out.countdown_flash = self.countdown_flash;
        out.started = self.started;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.outcome = self.outcome;
        out.notice = self.notice;
        out.username.clear();
        out.username.push_str(&self.username);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_state() -> GameState {
        let mut state = GameState::new(12345);
        state.set_username("tester");
        assert!(state.start());
        state
    }

    /// Board positions of the two cards sharing `value`.
    fn pair_positions(state: &GameState, value: u16) -> (u16, u16) {
        let positions: Vec<u16> = state
            .deck()
            .values()
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == value)
            .map(|(i, _)| i as u16)
            .collect();
        assert_eq!(positions.len(), 2);
        (positions[0], positions[1])
    }

    /// Two board positions with differing values.
    fn mismatched_positions(state: &GameState) -> (u16, u16) {
        let values = state.deck().values();
        let other = (1..values.len())
            .find(|&i| values[i] != values[0])
            .expect("deck has more than one value");
        (0, other as u16)
    }

    fn drain_lock(state: &mut GameState) {
        while state.is_locked() {
            state.tick(16);
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.started());
        assert!(!state.game_over());
        assert!(!state.paused());
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), Level::One);
        assert_eq!(state.remaining_secs(), 60);
        assert_eq!(state.elapsed_secs(), 0);
        assert_eq!(state.deck().len(), 20);
        assert!(state.pending().is_none());
    }

    #[test]
    fn test_start_requires_username() {
        let mut state = GameState::new(12345);
        assert!(!state.start());
        assert_eq!(state.notice(), Some(Notice::EmptyUsername));
        assert!(!state.started());

        let effects = state.take_effects();
        assert!(effects.contains(&Effect::Sound(SoundCue::Error)));

        state.set_username("   ");
        assert!(!state.start());

        state.set_username("alice");
        assert!(state.start());
        assert!(state.started());
    }

    #[test]
    fn test_click_before_start_raises_notice() {
        let mut state = GameState::new(12345);
        state.set_username("alice");

        assert!(!state.select_card(0));
        assert_eq!(state.notice(), Some(Notice::PressPlayFirst));
        assert!(state.pending().is_none());

        // The notice self-clears after its window.
        state.tick(NOTICE_MS);
        assert_eq!(state.notice(), None);
    }

    #[test]
    fn test_first_selection_becomes_pending() {
        let mut state = started_state();
        assert!(state.select_card(3));
        assert_eq!(state.pending().map(|c| c.index), Some(3));
        assert_eq!(state.card_face(3), CardFace::Revealed);
        assert!(!state.is_locked());
    }

    #[test]
    fn test_same_card_twice_never_matches() {
        let mut state = started_state();
        assert!(state.select_card(0));
        assert!(!state.select_card(0));
        assert_eq!(state.score(), 0);
        assert_eq!(state.pending().map(|c| c.index), Some(0));
        assert!(!state.is_locked());
    }

    #[test]
    fn test_match_scores_and_sticks() {
        let mut state = started_state();
        let (a, b) = pair_positions(&state, 0);

        assert!(state.select_card(a));
        assert!(state.select_card(b));

        assert_eq!(state.score(), 1);
        assert_eq!(state.card_face(a), CardFace::Matched);
        assert_eq!(state.card_face(b), CardFace::Matched);
        assert!(state.is_locked());

        let effects = state.take_effects();
        assert!(effects.contains(&Effect::Sound(SoundCue::Match)));

        // Matched positions survive the unlock.
        drain_lock(&mut state);
        assert_eq!(state.card_face(a), CardFace::Matched);
        assert_eq!(state.card_face(b), CardFace::Matched);
    }

    #[test]
    fn test_mismatch_reveals_then_hides() {
        let mut state = started_state();
        let (a, b) = mismatched_positions(&state);

        assert!(state.select_card(a));
        assert!(state.select_card(b));

        assert_eq!(state.score(), 0);
        assert!(state.is_locked());
        assert_eq!(state.card_face(a), CardFace::Revealed);
        assert_eq!(state.card_face(b), CardFace::Revealed);

        drain_lock(&mut state);
        assert_eq!(state.card_face(a), CardFace::Hidden);
        assert_eq!(state.card_face(b), CardFace::Hidden);
        assert!(state.pending().is_none());
    }

    #[test]
    fn test_board_lock_rejects_third_click() {
        let mut state = started_state();
        let (a, b) = mismatched_positions(&state);

        state.select_card(a);
        state.select_card(b);
        assert!(state.is_locked());

        // Any selection during resolution is a no-op.
        let third = (0..state.deck().len() as u16)
            .find(|&i| i != a && i != b)
            .unwrap();
        assert!(!state.select_card(third));
        assert_eq!(state.score(), 0);
        assert_eq!(state.card_face(third), CardFace::Hidden);
    }

    #[test]
    fn test_matched_card_is_never_selectable() {
        let mut state = started_state();
        let (a, b) = pair_positions(&state, 0);

        state.select_card(a);
        state.select_card(b);
        drain_lock(&mut state);

        assert!(!state.select_card(a));
        assert!(state.pending().is_none());
    }

    #[test]
    fn test_match_lock_durations() {
        let mut state = started_state();
        let (a, b) = pair_positions(&state, 0);
        state.select_card(a);
        state.select_card(b);

        // Still locked one tick before the match window ends.
        state.tick(MATCH_LOCK_MS - 1);
        assert!(state.is_locked());
        state.tick(1);
        assert!(!state.is_locked());
    }

    #[test]
    fn test_full_clear_wins_the_level() {
        let mut state = started_state();
        for value in 0..state.level().pair_count() {
            let (a, b) = pair_positions(&state, value);
            assert!(state.select_card(a));
            assert!(state.select_card(b));
            drain_lock(&mut state);
        }

        assert!(state.game_over());
        let outcome = state.outcome().unwrap();
        assert!(outcome.won);
        assert_eq!(outcome.score, 10);
        // Only a few seconds of lock-draining ticks elapsed, well inside
        // the top-tier window.
        assert!(outcome.elapsed_secs <= 10);
        assert_eq!(outcome.tier, PerformanceTier::Top);

        let effects = state.take_effects();
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::RecordResult(o) if o.won)));
        assert!(effects.contains(&Effect::Sound(SoundCue::Win)));
    }

    #[test]
    fn test_timeout_freezes_score_and_loses() {
        let mut state = started_state();

        // Match 4 of the 10 pairs.
        for value in 0..4 {
            let (a, b) = pair_positions(&state, value);
            state.select_card(a);
            state.select_card(b);
            drain_lock(&mut state);
        }
        assert_eq!(state.score(), 4);

        // Run the countdown to zero.
        for _ in 0..Level::One.time_budget_secs() {
            state.tick(SECOND_MS);
        }

        assert!(state.game_over());
        assert_eq!(state.remaining_secs(), 0);
        let outcome = state.outcome().unwrap();
        assert!(!outcome.won);
        assert_eq!(outcome.score, 4);
    }

    #[test]
    fn test_countdown_flash_fires_and_self_clears() {
        let mut state = started_state();

        // Advance until 5 seconds remain.
        for _ in 0..(Level::One.time_budget_secs() - COUNTDOWN_FLASH_FROM) {
            state.tick(SECOND_MS);
        }
        assert_eq!(state.remaining_secs(), 5);
        assert_eq!(state.countdown_flash(), Some(5));

        // Flash clears after 900ms of sub-second ticks.
        state.tick(COUNTDOWN_FLASH_MS);
        assert_eq!(state.countdown_flash(), None);
    }

    #[test]
    fn test_pause_freezes_both_clocks() {
        let mut state = started_state();
        state.tick(SECOND_MS * 3);
        assert_eq!(state.elapsed_secs(), 3);
        assert_eq!(state.remaining_secs(), 57);

        assert!(state.pause_toggle());
        for _ in 0..100 {
            state.tick(SECOND_MS);
        }
        assert_eq!(state.elapsed_secs(), 3);
        assert_eq!(state.remaining_secs(), 57);

        // Resume continues from the frozen values.
        assert!(state.pause_toggle());
        state.tick(SECOND_MS);
        assert_eq!(state.elapsed_secs(), 4);
        assert_eq!(state.remaining_secs(), 56);
    }

    #[test]
    fn test_paused_click_held_as_single_pending() {
        let mut state = started_state();
        let (a, b) = pair_positions(&state, 0);

        state.pause_toggle();
        assert!(state.select_card(a));
        assert_eq!(state.pending().map(|c| c.index), Some(a));

        // A second click while paused never triggers comparison.
        assert!(!state.select_card(b));
        assert_eq!(state.score(), 0);
        assert!(!state.is_locked());

        // The held card survives resume and completes the pair normally.
        state.pause_toggle();
        assert!(state.select_card(b));
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_restart_reshuffles_without_stale_lock() {
        let mut state = started_state();
        let (a, b) = mismatched_positions(&state);
        state.select_card(a);
        state.select_card(b);
        assert!(state.is_locked());

        let old_deck = state.deck().clone();
        assert!(state.start());

        assert!(!state.is_locked());
        assert!(state.pending().is_none());
        assert_eq!(state.score(), 0);
        assert_eq!(state.remaining_secs(), 60);
        assert_ne!(*state.deck(), old_deck);
    }

    #[test]
    fn test_next_level_requires_win() {
        let mut state = started_state();
        assert!(!state.next_level());

        for value in 0..state.level().pair_count() {
            let (a, b) = pair_positions(&state, value);
            state.select_card(a);
            state.select_card(b);
            drain_lock(&mut state);
        }
        assert!(state.game_over());

        assert!(state.next_level());
        assert_eq!(state.level(), Level::Two);
        assert_eq!(state.deck().len(), 40);
        assert_eq!(state.remaining_secs(), 120);
        assert_eq!(state.score(), 0);
        assert!(!state.game_over());
        assert!(state.started());

        let effects = state.take_effects();
        assert!(effects.contains(&Effect::Sound(SoundCue::LevelUp)));
    }

    #[test]
    fn test_no_level_past_three() {
        let mut state = started_state();
        // Walk up to level three by winning twice.
        for _ in 0..2 {
            for value in 0..state.level().pair_count() {
                let (a, b) = pair_positions(&state, value);
                state.select_card(a);
                state.select_card(b);
                drain_lock(&mut state);
            }
            assert!(state.next_level());
        }
        assert_eq!(state.level(), Level::Three);

        for value in 0..state.level().pair_count() {
            let (a, b) = pair_positions(&state, value);
            state.select_card(a);
            state.select_card(b);
            drain_lock(&mut state);
        }
        assert!(state.game_over());
        assert!(!state.next_level());
        assert_eq!(state.level(), Level::Three);
    }

    #[test]
    fn test_go_home_resets_wholesale() {
        let mut state = started_state();
        let (a, b) = mismatched_positions(&state);
        state.select_card(a);
        state.select_card(b);

        assert!(state.go_home());
        assert!(!state.started());
        assert!(!state.game_over());
        assert!(!state.is_locked());
        assert_eq!(state.level(), Level::One);
        assert_eq!(state.score(), 0);
        // Username survives the reset.
        assert_eq!(state.username(), "tester");
    }

    #[test]
    fn test_game_over_blocks_selection() {
        let mut state = started_state();
        for _ in 0..Level::One.time_budget_secs() {
            state.tick(SECOND_MS);
        }
        assert!(state.game_over());
        assert!(!state.select_card(0));
        assert!(!state.tick(SECOND_MS));
    }

    #[test]
    fn test_elapsed_accumulates_across_sub_second_ticks() {
        let mut state = started_state();
        // 63 ticks of 16ms cross one second boundary.
        for _ in 0..63 {
            state.tick(16);
        }
        assert_eq!(state.elapsed_secs(), 1);
        assert_eq!(state.remaining_secs(), 59);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = started_state();
        let (a, b) = pair_positions(&state, 0);
        state.select_card(a);
        state.select_card(b);

        let snap = state.snapshot();
        assert_eq!(snap.cards.len(), 20);
        assert_eq!(snap.score, 1);
        assert_eq!(snap.level, Level::One);
        assert_eq!(snap.cards[a as usize].face, CardFace::Matched);
        assert_eq!(snap.username, "tester");
        assert!(snap.started);
    }

    #[test]
    fn test_mismatch_lock_duration() {
        let mut state = started_state();
        let (a, b) = mismatched_positions(&state);
        state.select_card(a);
        state.select_card(b);

        state.tick(MISMATCH_LOCK_MS - 1);
        assert!(state.is_locked());
        assert_eq!(state.card_face(a), CardFace::Revealed);
        state.tick(1);
        assert!(!state.is_locked());
        assert_eq!(state.card_face(a), CardFace::Hidden);
    }
}
