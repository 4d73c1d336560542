//! Terminal memory game runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! The home screen doubles as a line editor for the player name, so raw
//! key presses are routed there before the gameplay key map.

use std::io::Write;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use tui_memory::core::{Effect, GameSnapshot, GameState};
use tui_memory::input::{handle_key_event, should_quit, Command, GridCursor};
use tui_memory::store::ResultStore;
use tui_memory::term::{FrameBuffer, GameView, LeaderboardRow, TerminalRenderer, Viewport};
use tui_memory::types::{GameAction, SoundCue, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    let mut game_state = GameState::new(seed);
    let mut cursor = GridCursor::for_level(game_state.level());
    let mut store = ResultStore::open_default();

    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut leaderboard: Vec<LeaderboardRow> = Vec::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game_state.snapshot_into(&mut snapshot);
        let grid_cursor = if snapshot.started && !snapshot.game_over {
            Some(cursor.index())
        } else {
            None
        };
        view.render_into(
            &snapshot,
            grid_cursor,
            &leaderboard,
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if game_state.started() {
                        if handle_play_key(key, &mut game_state, &mut cursor) {
                            return Ok(());
                        }
                    } else {
                        handle_home_key(key, &mut game_state, &mut cursor);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game_state.tick(TICK_MS);
        }

        drain_effects(&mut game_state, &mut store, &mut leaderboard);
    }
}

/// Gameplay key handling. Returns true when the player asked to quit.
fn handle_play_key(key: KeyEvent, game_state: &mut GameState, cursor: &mut GridCursor) -> bool {
    let Some(command) = handle_key_event(key) else {
        return false;
    };
    if command == Command::Quit {
        return true;
    }
    if let Some(action) = cursor.apply(command) {
        game_state.apply_action(action);
        // Replay and next-level can change the board shape.
        cursor.reshape(game_state.level());
    }
    false
}

/// Home-screen key handling: Enter starts, everything printable edits the name.
fn handle_home_key(key: KeyEvent, game_state: &mut GameState, cursor: &mut GridCursor) {
    match key.code {
        KeyCode::Enter => {
            if game_state.apply_action(GameAction::Start) {
                cursor.reshape(game_state.level());
            }
        }
        KeyCode::Backspace => {
            let mut name = game_state.username().to_string();
            name.pop();
            game_state.set_username(name);
        }
        KeyCode::Char(c) if !c.is_control() => {
            let mut name = game_state.username().to_string();
            if name.chars().count() < 20 {
                name.push(c);
            }
            game_state.set_username(name);
        }
        _ => {}
    }
}

/// Apply queued effects: persist finished games and ring the bell for the
/// noisier sound cues.
fn drain_effects(
    game_state: &mut GameState,
    store: &mut ResultStore,
    leaderboard: &mut Vec<LeaderboardRow>,
) {
    for effect in game_state.take_effects() {
        match effect {
            Effect::RecordResult(outcome) => {
                let username = game_state.username().to_string();
                let today = Local::now().date_naive();
                // Persistence failures must never end the game.
                let _ = store.record_outcome(&outcome, &username, today);
                let date = today.format("%Y-%m-%d").to_string();
                *leaderboard = store
                    .leaderboard(outcome.level, &date)
                    .into_iter()
                    .map(|r| LeaderboardRow {
                        username: r.username,
                        score: r.score,
                        time: r.time,
                        won: r.won,
                    })
                    .collect();
            }
            Effect::Sound(cue) => match cue {
                SoundCue::Match | SoundCue::Win | SoundCue::LevelUp => {
                    let mut out = std::io::stdout();
                    let _ = out.write_all(b"\x07");
                    let _ = out.flush();
                }
                SoundCue::Click | SoundCue::GameStart | SoundCue::GameOver | SoundCue::Error => {}
            },
        }
    }
}
