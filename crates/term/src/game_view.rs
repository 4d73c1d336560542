//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Three screens, chosen from the snapshot flags: the home screen (name
//! entry), the play screen (card grid plus side panel), and the game-over
//! screen (result summary plus the level's daily leaderboard).

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use memory_core::{GameSnapshot, Notice};
use memory_types::{CardFace, PerformanceTier};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// One leaderboard line, pre-queried by the caller (the view stays
/// independent of the store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub username: String,
    pub score: u16,
    pub time: u32,
    pub won: bool,
}

/// A lightweight terminal renderer for the memory game.
pub struct GameView {
    /// Card width in terminal columns.
    card_w: u16,
    /// Card height in terminal rows.
    card_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 5x2 cards read well at typical terminal glyph aspect ratios and
        // keep the level-three grid (10x6 cards) inside an 80x24 terminal.
        Self {
            card_w: 5,
            card_h: 2,
        }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self { card_w, card_h }
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// `cursor` is the board position under the keyboard cursor (play screen
    /// only); `leaderboard` is shown on the game-over screen.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<u16>,
        leaderboard: &[LeaderboardRow],
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        if !snap.started {
            self.draw_home(snap, viewport, fb);
        } else if snap.game_over {
            self.draw_game_over(snap, leaderboard, viewport, fb);
        } else {
            self.draw_play(snap, cursor, viewport, fb);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<u16>,
        leaderboard: &[LeaderboardRow],
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, leaderboard, viewport, &mut fb);
        fb
    }

    fn draw_home(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let title = CellStyle {
            fg: Rgb::new(255, 165, 0),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let label = CellStyle::default();
        let field = CellStyle {
            fg: Rgb::new(20, 20, 20),
            bg: Rgb::new(212, 208, 203),
            bold: false,
            dim: false,
        };
        let hint = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        let mid_y = viewport.height / 2;
        let w = viewport.width;

        fb.put_str_centered(0, mid_y.saturating_sub(4), w, "M E M O R Y  G A M E", title);
        fb.put_str_centered(0, mid_y.saturating_sub(2), w, "Enter your name:", label);

        // Name field with a trailing cursor underscore.
        let field_w: u16 = 24;
        let field_x = w.saturating_sub(field_w) / 2;
        fb.fill_rect(field_x, mid_y.saturating_sub(1), field_w, 1, ' ', field);
        let shown: String = snap.username.chars().take(field_w as usize - 2).collect();
        fb.put_str(field_x + 1, mid_y.saturating_sub(1), &shown, field);
        fb.put_char(
            field_x + 1 + shown.chars().count() as u16,
            mid_y.saturating_sub(1),
            '_',
            field,
        );

        fb.put_str_centered(0, mid_y + 1, w, "[Enter] play   [Ctrl-C] quit", hint);

        if let Some(notice) = snap.notice {
            let warn = CellStyle {
                fg: Rgb::new(220, 80, 80),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                dim: false,
            };
            let text = notice_text(notice);
            fb.put_str_centered(0, mid_y + 3, w, text, warn);
        }
    }

    fn draw_play(
        &self,
        snap: &GameSnapshot,
        cursor: Option<u16>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let cols = snap.level.grid_cols();
        let rows = snap.level.grid_rows();
        // One column/row of gap between cards.
        let grid_w = cols * (self.card_w + 1) - 1;
        let grid_h = rows * (self.card_h + 1) - 1;

        let panel_w: u16 = 14;
        let start_x = viewport
            .width
            .saturating_sub(grid_w + panel_w + 2)
            / 2;
        let start_y = viewport.height.saturating_sub(grid_h) / 2;

        for (i, card) in snap.cards.iter().enumerate() {
            let i = i as u16;
            let cx = start_x + (i % cols) * (self.card_w + 1);
            let cy = start_y + (i / cols) * (self.card_h + 1);
            self.draw_card(fb, cx, cy, card.value, card.face, cursor == Some(i));
        }

        self.draw_side_panel(snap, viewport, start_x + grid_w + 2, start_y, fb);

        // Final-countdown flash over the middle of the grid.
        if let Some(flash) = snap.countdown_flash {
            let style = CellStyle {
                fg: Rgb::new(255, 60, 60),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                dim: false,
            };
            let mut text = String::from(">> ");
            text.push_str(&flash.to_string());
            text.push_str(" <<");
            fb.put_str_centered(start_x, start_y + grid_h / 2, grid_w, &text, style);
        }

        if snap.paused {
            self.draw_overlay_text(fb, start_x, start_y, grid_w, grid_h, "PAUSED");
        }
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        value: u16,
        face: CardFace,
        highlight: bool,
    ) {
        match face {
            CardFace::Hidden => {
                let style = CellStyle {
                    fg: Rgb::new(255, 136, 1),
                    bg: if highlight {
                        Rgb::new(90, 60, 20)
                    } else {
                        Rgb::new(40, 30, 20)
                    },
                    bold: highlight,
                    dim: false,
                };
                fb.fill_rect(x, y, self.card_w, self.card_h, '░', style);
            }
            CardFace::Revealed => {
                let style = CellStyle {
                    fg: Rgb::new(250, 250, 250),
                    bg: Rgb::new(40, 70, 140),
                    bold: true,
                    dim: false,
                };
                fb.fill_rect(x, y, self.card_w, self.card_h, ' ', style);
                // Values are shown 1-based, matching a card face.
                let text = (value + 1).to_string();
                fb.put_str_centered(x, y + self.card_h / 2, self.card_w, &text, style);
            }
            CardFace::Matched => {
                // Solved cards leave the board.
                let style = CellStyle {
                    fg: Rgb::new(60, 60, 70),
                    bg: Rgb::new(0, 0, 0),
                    bold: false,
                    dim: true,
                };
                fb.fill_rect(x, y, self.card_w, self.card_h, ' ', style);
                if highlight {
                    fb.put_str_centered(x, y + self.card_h / 2, self.card_w, "·", style);
                }
            }
        }
    }

    fn draw_side_panel(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
        fb: &mut FrameBuffer,
    ) {
        if panel_x >= viewport.width {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let urgent = CellStyle {
            fg: Rgb::new(255, 60, 60),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.level.as_number() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score as u32, value);
        fb.put_char(panel_x + digits(snap.score as u32), y, '/', value);
        fb.put_u32(
            panel_x + digits(snap.score as u32) + 1,
            y,
            snap.pair_count as u32,
            value,
        );
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        let time_style = if snap.remaining_secs <= 5 { urgent } else { value };
        fb.put_str(panel_x, y, &format_secs(snap.remaining_secs), time_style);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ELAPSED", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format_secs(snap.elapsed_secs), value);
        y = y.saturating_add(2);

        let hint = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        fb.put_str(panel_x, y, "[p] pause", hint);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "[esc] home", hint);
    }

    fn draw_game_over(
        &self,
        snap: &GameSnapshot,
        leaderboard: &[LeaderboardRow],
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let Some(outcome) = snap.outcome else {
            return;
        };
        let w = viewport.width;
        let mut y = 1;

        let banner = if outcome.won {
            CellStyle {
                fg: Rgb::new(100, 220, 120),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                dim: false,
            }
        } else {
            CellStyle {
                fg: Rgb::new(220, 80, 80),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                dim: false,
            }
        };
        let text = CellStyle::default();

        let title = if outcome.won {
            "CONGRATULATIONS!"
        } else {
            "GAME OVER"
        };
        fb.put_str_centered(0, y, w, title, banner);
        y += 2;

        let mut line = String::from("Level ");
        line.push_str(&snap.level.as_number().to_string());
        line.push_str(if outcome.won {
            " Complete!"
        } else {
            " Not Complete!"
        });
        fb.put_str_centered(0, y, w, &line, text);
        y += 1;

        let mut score_line = String::from("Score: ");
        score_line.push_str(&outcome.score.to_string());
        score_line.push('/');
        score_line.push_str(&snap.pair_count.to_string());
        fb.put_str_centered(0, y, w, &score_line, text);
        y += 1;

        let mut time_line = String::from("Time: ");
        time_line.push_str(&format_secs(outcome.elapsed_secs));
        fb.put_str_centered(0, y, w, &time_line, text);
        y += 1;

        let tier_style = match outcome.tier {
            PerformanceTier::Top => CellStyle {
                fg: Rgb::new(100, 220, 120),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                dim: false,
            },
            PerformanceTier::Middle => CellStyle {
                fg: Rgb::new(240, 220, 80),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                dim: false,
            },
            PerformanceTier::Bottom => CellStyle {
                fg: Rgb::new(220, 80, 80),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                dim: false,
            },
        };
        let mut perf_line = String::from("Performance: ");
        perf_line.push_str(outcome.tier.label());
        fb.put_str_centered(0, y, w, &perf_line, tier_style);
        y += 2;

        let hint = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        let can_advance = outcome.won && snap.level.next().is_some();
        let hints = if can_advance {
            "[r] play again   [n] next level   [esc] home"
        } else {
            "[r] play again   [esc] home"
        };
        fb.put_str_centered(0, y, w, hints, hint);
        y += 2;

        self.draw_leaderboard(snap, leaderboard, viewport, y, fb);
    }

    fn draw_leaderboard(
        &self,
        snap: &GameSnapshot,
        rows: &[LeaderboardRow],
        viewport: Viewport,
        start_y: u16,
        fb: &mut FrameBuffer,
    ) {
        let table_w: u16 = 44;
        let x = viewport.width.saturating_sub(table_w) / 2;
        let mut y = start_y;

        let header = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(255, 136, 1),
            bold: true,
            dim: false,
        };
        let cell = CellStyle::default();

        let mut title = String::from("LEVEL ");
        title.push_str(&snap.level.as_number().to_string());
        title.push_str(" RESULTS (TODAY)");
        fb.put_str_centered(x, y, table_w, &title, cell);
        y += 1;

        fb.fill_rect(x, y, table_w, 1, ' ', header);
        fb.put_str(x + 1, y, "#", header);
        fb.put_str(x + 4, y, "NAME", header);
        fb.put_str(x + 20, y, "SCORE", header);
        fb.put_str(x + 28, y, "TIME", header);
        fb.put_str(x + 36, y, "RESULT", header);
        y += 1;

        let visible = viewport.height.saturating_sub(y) as usize;
        for (i, row) in rows.iter().take(visible).enumerate() {
            fb.put_u32(x + 1, y, i as u32 + 1, cell);
            let name: String = row.username.chars().take(14).collect();
            fb.put_str(x + 4, y, &name, cell);
            fb.put_u32(x + 20, y, row.score as u32, cell);
            fb.put_str(x + 28, y, &format_secs(row.time), cell);
            fb.put_str(x + 36, y, if row.won { "WIN" } else { "LOST" }, cell);
            y += 1;
        }

        if rows.is_empty() {
            let dim = CellStyle {
                dim: true,
                ..CellStyle::default()
            };
            fb.put_str_centered(x, y, table_w, "no results yet today", dim);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str_centered(start_x, mid_y, frame_w, text, style);
    }
}

/// User-facing text for a transient notice.
pub fn notice_text(notice: Notice) -> &'static str {
    match notice {
        Notice::PressPlayFirst => "Please press play first!",
        Notice::EmptyUsername => "Please enter your name!",
    }
}

/// Format seconds as `m:ss`.
pub fn format_secs(secs: u32) -> String {
    let mins = secs / 60;
    let rem = secs % 60;
    let mut out = mins.to_string();
    out.push(':');
    if rem < 10 {
        out.push('0');
    }
    out.push_str(&rem.to_string());
    out
}

fn digits(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
