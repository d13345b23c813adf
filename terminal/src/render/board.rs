use common::{BOARD_CELLS, GRID_SIZE, GameState, Position};

use super::traits::CellRenderer;
use super::types::CharGrid;

pub struct BoardRenderer<R: CellRenderer> {
    renderer: R,
}

impl<R: CellRenderer> BoardRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Paint the current state onto a fresh grid. The apple goes down
    /// first and body cells after it, so a body cell sharing the apple's
    /// cell is drawn over it.
    pub fn render(&self, state: &GameState) -> CharGrid {
        let mut grid = CharGrid::new(
            BOARD_CELLS as usize,
            BOARD_CELLS as usize,
            self.renderer.char_dimensions(),
        );

        if let Some((x, y)) = cell_of(state.apple) {
            grid.set_logical_point(x, y, &self.renderer.render_apple());
        }

        if state.started {
            for (i, pos) in state.snake.body.iter().enumerate() {
                if let Some((x, y)) = cell_of(*pos) {
                    grid.set_logical_point(x, y, &self.renderer.render_snake_segment(i == 0));
                }
            }
        } else if let Some((x, y)) = cell_of(state.snake.head) {
            // Only the head exists before the first key press.
            grid.set_logical_point(x, y, &self.renderer.render_snake_segment(true));
        }

        grid
    }
}

fn cell_of(pos: Position) -> Option<(usize, usize)> {
    if !pos.on_board() {
        return None;
    }
    Some(((pos.x / GRID_SIZE) as usize, (pos.y / GRID_SIZE) as usize))
}
