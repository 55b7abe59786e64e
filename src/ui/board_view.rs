//! Board rendering for the m,n,k GUI

use egui::{CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Cell, Mark, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    rows: usize,
    cols: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
            rows: 0,
            cols: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        accepts_input: bool,
    ) -> Option<Pos> {
        self.rows = board.rows();
        self.cols = board.cols();

        // Fit square cells into the available space
        let available = ui.available_size();
        let per_col = (available.x - 2.0 * BOARD_MARGIN) / self.cols as f32;
        let per_row = (available.y - 2.0 * BOARD_MARGIN) / self.rows as f32;
        self.cell_size = per_col.min(per_row).clamp(24.0, MAX_CELL_SIZE);

        let size = Vec2::new(
            self.cell_size * self.cols as f32 + 2.0 * BOARD_MARGIN,
            self.cell_size * self.rows as f32 + 2.0 * BOARD_MARGIN,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        let hovered = response
            .hover_pos()
            .and_then(|p| self.screen_to_board(p))
            .filter(|&pos| accepts_input && board.cell(pos.row, pos.col).is_empty());

        for (pos, cell) in board.iter() {
            self.draw_cell(&painter, pos, cell, hovered == Some(pos));
        }

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw one cell background and its mark
    fn draw_cell(&self, painter: &Painter, pos: Pos, cell: Cell, hovered: bool) {
        let rect = self.cell_rect(pos);
        let fill = match cell {
            Cell::Empty if hovered => CELL_HOVER,
            Cell::Empty => CELL_BG,
            Cell::Marked(Mark::Computer) => COMPUTER_COLOR,
            Cell::Marked(Mark::Player) => PLAYER_COLOR,
        };
        painter.rect_filled(rect, CornerRadius::same(4), fill);

        if let Cell::Marked(mark) = cell {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                mark.symbol(),
                FontId::proportional(self.cell_size * MARK_FONT_RATIO),
                MARK_TEXT,
            );
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let corner = rect.right_top() + Vec2::new(-2.0 * LAST_MOVE_MARKER_RADIUS, 2.0 * LAST_MOVE_MARKER_RADIUS);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(WIN_STROKE_WIDTH, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for &pos in line {
            let radius = (self.cell_size - CELL_GAP) * 0.45;
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size + CELL_GAP * 0.5,
                BOARD_MARGIN + pos.row as f32 * self.cell_size + CELL_GAP * 0.5,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size - CELL_GAP))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;
        if x < 0.0 || y < 0.0 {
            return None;
        }

        let col = x.floor() as usize;
        let row = y.floor() as usize;
        (row < self.rows && col < self.cols).then(|| Pos::new(row, col))
    }

    /// Convert board position to screen coordinates (cell centre)
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
