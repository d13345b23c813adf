use common::{Direction, GRID_SIZE, GameState, Position};
use terminal::render::{
    board::BoardRenderer, standard_renderer::StandardRenderer, types::CharDimensions,
};

fn renderer() -> BoardRenderer<StandardRenderer> {
    BoardRenderer::new(StandardRenderer::new(CharDimensions::new(2, 1)))
}

#[test]
fn pre_start_board_shows_head_and_apple() {
    let mut state = GameState::new(1);
    state.apple = Position::new(7 * GRID_SIZE, 7 * GRID_SIZE);

    let grid = renderer().render(&state);
    let rows = grid.char_rows();

    // 20x20 logical cells at 2x1 chars per cell
    assert_eq!(rows.len(), 20);
    assert_eq!(rows[0].len(), 40);

    // Head starts at cell (8, 8) -> chars 16..18 of row 8
    assert_eq!(rows[8][16], '█');
    assert_eq!(rows[8][17], '█');

    // Apple at cell (7, 7)
    assert_eq!(rows[7][14], '●');
    assert_eq!(rows[7][15], '●');
}

#[test]
fn running_board_shows_every_body_cell() {
    let mut state = GameState::new(1);
    state.apple = Position::new(0, 0);
    state.steer(Direction::Right);
    state.advance();
    state.advance();

    let grid = renderer().render(&state);
    let rows = grid.char_rows();

    // Head at cell (10, 8), one body cell behind it at (9, 8)
    assert_eq!(rows[8][20], '█');
    assert_eq!(rows[8][21], '█');
    assert_eq!(rows[8][18], '▓');
    assert_eq!(rows[8][19], '▓');

    // The start cell was never part of the body
    assert_eq!(rows[8][16], ' ');

    assert_eq!(rows[0][0], '●');
}

#[test]
fn body_cell_is_drawn_over_a_coincident_apple() {
    let mut state = GameState::new(1);
    state.apple = Position::new(0, 0);
    state.steer(Direction::Right);
    state.advance();

    // Apple landed under the snake's only body cell
    let cell = *state.snake.body.front().unwrap();
    state.apple = cell;

    let grid = renderer().render(&state);
    let rows = grid.char_rows();

    let x = (cell.x / GRID_SIZE) as usize * 2;
    let y = (cell.y / GRID_SIZE) as usize;
    assert_eq!(rows[y][x], '█');
}
