//! GameView: maps a [`GameSnapshot`] into terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use brick_tetris_core::GameSnapshot;
use brick_tetris_types::{FIELD_HEIGHT, FIELD_WIDTH, PREVIEW_SIDE};

/// 2 columns per cell compensates for typical terminal glyph aspect ratio.
const CELL_W: usize = 2;

const FILLED: &str = "██";
const EMPTY: &str = " ·";

/// Renders snapshots into a rectangle of text lines: bordered field on the
/// left, score panel and next-piece preview on the right.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, snapshot: &GameSnapshot) -> Vec<String> {
        let grid = Self::compose_grid(snapshot);
        let panel = Self::side_panel(snapshot);
        let field_w = FIELD_WIDTH * CELL_W;

        let mut lines = Vec::with_capacity(FIELD_HEIGHT + 2);
        lines.push(format!("┌{}┐", "─".repeat(field_w)));
        for (row, cells) in grid.iter().enumerate() {
            let mut line = String::with_capacity(field_w + 16);
            line.push('│');
            for &cell in cells {
                line.push_str(if cell != 0 { FILLED } else { EMPTY });
            }
            line.push('│');
            if let Some(text) = panel.get(row) {
                line.push_str("  ");
                line.push_str(text);
            }
            lines.push(line);
        }
        lines.push(format!("└{}┘", "─".repeat(field_w)));

        if snapshot.paused {
            Self::overlay(&mut lines, "PAUSED");
        } else if snapshot.game_over {
            Self::overlay(&mut lines, "GAME OVER");
        }
        lines
    }

    /// Locked cells with the active piece painted on top.
    fn compose_grid(snapshot: &GameSnapshot) -> [[u8; FIELD_WIDTH]; FIELD_HEIGHT] {
        let mut grid = snapshot.field;
        if let Some(active) = snapshot.active {
            for (row, col) in active.occupied_cells() {
                if row >= 0
                    && (row as usize) < FIELD_HEIGHT
                    && col >= 0
                    && (col as usize) < FIELD_WIDTH
                {
                    grid[row as usize][col as usize] = active.kind.fill();
                }
            }
        }
        grid
    }

    fn side_panel(snapshot: &GameSnapshot) -> Vec<String> {
        let mut panel = vec![
            "SCORE".to_string(),
            format!("{}", snapshot.score),
            String::new(),
            "HIGH".to_string(),
            format!("{}", snapshot.high_score),
            String::new(),
            "LEVEL".to_string(),
            format!("{}", snapshot.level),
            String::new(),
            "NEXT".to_string(),
        ];
        for row in 0..PREVIEW_SIDE {
            let mut line = String::with_capacity(PREVIEW_SIDE * CELL_W);
            for col in 0..PREVIEW_SIDE {
                line.push_str(if snapshot.next[row][col] != 0 {
                    FILLED
                } else {
                    "  "
                });
            }
            panel.push(line);
        }
        panel
    }

    /// Centers a banner over the field, replacing that row's cells.
    fn overlay(lines: &mut [String], text: &str) {
        let row = lines.len() / 2;
        let field_w = FIELD_WIDTH * CELL_W;
        let pad = field_w.saturating_sub(text.len()) / 2;
        let Some(line) = lines.get_mut(row) else {
            return;
        };
        // Keep whatever follows the field's right border.
        let tail: String = line.chars().skip(1 + field_w + 1).collect();
        let mut banner = String::new();
        banner.push('│');
        banner.push_str(&" ".repeat(pad));
        banner.push_str(text);
        banner.push_str(&" ".repeat(field_w - pad - text.len()));
        banner.push('│');
        banner.push_str(&tail);
        *line = banner;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brick_tetris_core::Session;

    fn lines_for(snapshot: &GameSnapshot) -> Vec<String> {
        GameView::new().render(snapshot)
    }

    #[test]
    fn test_render_has_field_height_plus_border() {
        let snapshot = GameSnapshot::default();
        assert_eq!(lines_for(&snapshot).len(), FIELD_HEIGHT + 2);
    }

    #[test]
    fn test_active_piece_is_painted_over_the_field() {
        let mut session = Session::new(3, 0).unwrap();
        session.spawn();
        let lines = lines_for(&session.snapshot());
        // The spawn row (plus border offset) shows at least one filled cell.
        assert!(lines[1..3].iter().any(|line| line.contains('█')));
    }

    #[test]
    fn test_panel_shows_score_and_level() {
        let mut snapshot = GameSnapshot::default();
        snapshot.score = 1500;
        snapshot.level = 3;
        let text = lines_for(&snapshot).join("\n");
        assert!(text.contains("SCORE"));
        assert!(text.contains("1500"));
        assert!(text.contains("LEVEL"));
        assert!(text.contains("NEXT"));
    }

    #[test]
    fn test_preview_draws_the_next_piece() {
        let session = Session::new(11, 0).unwrap();
        let lines = lines_for(&session.snapshot());
        let preview_region = lines.join("\n");
        // The NEXT panel contains filled cells even before the first spawn.
        let next_at = preview_region.find("NEXT").unwrap();
        assert!(preview_region[next_at..].contains('█'));
    }

    #[test]
    fn test_pause_banner_overlays_the_field() {
        let mut snapshot = GameSnapshot::default();
        snapshot.paused = true;
        let text = lines_for(&snapshot).join("\n");
        assert!(text.contains("PAUSED"));
    }

    #[test]
    fn test_game_over_banner() {
        let mut snapshot = GameSnapshot::default();
        snapshot.game_over = true;
        let text = lines_for(&snapshot).join("\n");
        assert!(text.contains("GAME OVER"));
        assert!(!text.contains("PAUSED"));
    }
}
