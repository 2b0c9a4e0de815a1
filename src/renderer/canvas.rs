//! Character-cell frame buffer
//!
//! Arena pixels are mapped onto a grid of terminal cells, each cell covering
//! `CELL_WIDTH` x `CELL_HEIGHT` pixels. Shapes cover the cells whose centers
//! they contain. Drawing outside the grid is clipped.

use glam::Vec2;

use crate::color::Color;
use crate::sim::Rect;

/// Pixels per terminal column
pub const CELL_WIDTH: f32 = 10.0;
/// Pixels per terminal row (cells are about twice as tall as wide)
pub const CELL_HEIGHT: f32 = 20.0;

pub const FILL: char = '█';
pub const BALL: char = '●';
pub const VERTICAL_LINE: char = '│';
pub const LINE: char = '·';

/// One terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    fn blank(background: Color) -> Self {
        Self {
            ch: ' ',
            fg: background,
            bg: background,
        }
    }
}

/// A grid of cells covering the arena
#[derive(Debug, Clone)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    background: Color,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Grid large enough to cover `width` x `height` pixels
    pub fn new(width: f32, height: f32, background: Color) -> Self {
        let cols = (width / CELL_WIDTH).ceil().clamp(1.0, u16::MAX as f32) as u16;
        let rows = (height / CELL_HEIGHT).ceil().clamp(1.0, u16::MAX as f32) as u16;
        Self {
            cols,
            rows,
            background,
            cells: vec![Cell::blank(background); cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::blank(self.background));
    }

    #[cfg(test)]
    fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize)
    }

    /// One row of cells, top to bottom
    pub fn row(&self, row: u16) -> &[Cell] {
        let start = row as usize * self.cols as usize;
        self.cells
            .get(start..start + self.cols as usize)
            .unwrap_or(&[])
    }

    /// Cell containing a pixel position
    pub fn cell_at(pos: Vec2) -> (i32, i32) {
        (
            (pos.x / CELL_WIDTH).floor() as i32,
            (pos.y / CELL_HEIGHT).floor() as i32,
        )
    }

    /// Pixel position of a cell's center
    fn cell_center(col: i32, row: i32) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * CELL_WIDTH,
            (row as f32 + 0.5) * CELL_HEIGHT,
        )
    }

    fn put(&mut self, col: i32, row: i32, ch: char, fg: Color, bg: Option<Color>) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        let index = row as usize * self.cols as usize + col as usize;
        let cell = &mut self.cells[index];
        cell.ch = ch;
        cell.fg = fg;
        if let Some(bg) = bg {
            cell.bg = bg;
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (min_col, min_row) = Self::cell_at(rect.top_left);
        let (max_col, max_row) = Self::cell_at(Vec2::new(rect.right(), rect.bottom()));
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                let c = Self::cell_center(col, row);
                let inside = c.x >= rect.left()
                    && c.x < rect.right()
                    && c.y >= rect.top()
                    && c.y < rect.bottom();
                if inside {
                    self.put(col, row, FILL, color, None);
                }
            }
        }
    }

    /// Cells whose centers lie within the circle, plus the cell holding the
    /// center so a small ball never disappears
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let (min_col, min_row) = Self::cell_at(center - Vec2::splat(radius));
        let (max_col, max_row) = Self::cell_at(center + Vec2::splat(radius));
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                if Self::cell_center(col, row).distance(center) <= radius {
                    self.put(col, row, BALL, color, None);
                }
            }
        }
        let (col, row) = Self::cell_at(center);
        self.put(col, row, BALL, color, None);
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let (c0, r0) = Self::cell_at(from);
        let (c1, r1) = Self::cell_at(to);
        let ch = if c0 == c1 { VERTICAL_LINE } else { LINE };
        let steps = (c1 - c0).abs().max((r1 - r0).abs());
        for i in 0..=steps {
            let t = if steps == 0 { 0.0 } else { i as f32 / steps as f32 };
            let col = c0 as f32 + (c1 - c0) as f32 * t;
            let row = r0 as f32 + (r1 - r0) as f32 * t;
            self.put(col.round() as i32, row.round() as i32, ch, color, None);
        }
    }

    /// One character per column, starting at the cell holding `pos`
    pub fn text(&mut self, pos: Vec2, text: &str, fg: Color, bg: Option<Color>) {
        let (col, row) = Self::cell_at(pos);
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, ch, fg, bg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(500.0, 400.0, Color::BLACK)
    }

    fn chars(canvas: &Canvas, row: u16) -> String {
        canvas.row(row).iter().map(|c| c.ch).collect()
    }

    #[test]
    fn test_canvas_grid_size() {
        let c = canvas();
        assert_eq!((c.cols(), c.rows()), (50, 20));
        assert_eq!(c.cell(49, 19).map(|cell| cell.ch), Some(' '));
        assert!(c.cell(50, 0).is_none());
    }

    #[test]
    fn test_fill_rect_covers_paddle_cells() {
        let mut c = canvas();
        c.fill_rect(
            Rect::new(Vec2::new(30.0, 150.0), Vec2::new(20.0, 110.0)),
            Color::WHITE,
        );
        // Columns 3 and 4, rows 7 through 12
        for row in 7..=12 {
            assert_eq!(c.cell(3, row).unwrap().ch, FILL);
            assert_eq!(c.cell(4, row).unwrap().ch, FILL);
            assert_eq!(c.cell(5, row).unwrap().ch, ' ');
        }
        assert_eq!(c.cell(3, 6).unwrap().ch, ' ');
        assert_eq!(c.cell(3, 13).unwrap().ch, ' ');
    }

    #[test]
    fn test_small_circle_still_visible() {
        let mut c = canvas();
        c.fill_circle(Vec2::new(20.0, 20.0), 10.0, Color::WHITE);
        assert_eq!(c.cell(2, 1).unwrap().ch, BALL);
    }

    #[test]
    fn test_vertical_line() {
        let mut c = canvas();
        c.line(Vec2::new(245.0, 0.0), Vec2::new(245.0, 400.0), Color::WHITE);
        for row in 0..20 {
            assert_eq!(c.cell(24, row).unwrap().ch, VERTICAL_LINE);
        }
    }

    #[test]
    fn test_text_is_clipped() {
        let mut c = canvas();
        c.text(Vec2::new(480.0, 0.0), "GAME OVER", Color::WHITE, Some(Color::BLUE));
        assert_eq!(c.cell(48, 0).unwrap().ch, 'G');
        assert_eq!(c.cell(49, 0).unwrap().ch, 'A');
        assert_eq!(c.cell(49, 0).unwrap().bg, Color::BLUE);
        assert_eq!(chars(&c, 1).trim(), "");
    }

    #[test]
    fn test_off_grid_drawing_is_ignored() {
        let mut c = canvas();
        c.fill_rect(
            Rect::new(Vec2::new(30.0, -200.0), Vec2::new(20.0, 110.0)),
            Color::WHITE,
        );
        c.fill_circle(Vec2::new(-100.0, -100.0), 10.0, Color::WHITE);
        for row in 0..c.rows() {
            assert_eq!(chars(&c, row).trim(), "");
        }
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut c = canvas();
        c.text(Vec2::ZERO, "7", Color::WHITE, None);
        c.clear();
        assert_eq!(c.cell(0, 0).unwrap().ch, ' ');
    }
}
