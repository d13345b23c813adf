/// Size of one grid cell in surface units.
pub const GRID_SIZE: i32 = 20;

/// Number of cells along each axis of the board.
pub const BOARD_CELLS: i32 = 20;

/// Width and height of the drawing surface in surface units.
pub const SURFACE_SIZE: i32 = GRID_SIZE * BOARD_CELLS;

/// Cell the snake head occupies when a game begins, in surface units.
pub const SNAKE_START_X: i32 = 160;
pub const SNAKE_START_Y: i32 = 160;

/// Body capacity of a freshly spawned snake.
pub const INITIAL_CAPACITY: usize = 4;

/// Maximum number of entries kept in the ranking.
pub const RANKING_CAPACITY: usize = 5;

/// Tick interval used when a speed level is out of range.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Default speed level for a new session.
pub const DEFAULT_SPEED_LEVEL: u8 = 3;

/// Interval between playtime counter updates in milliseconds.
pub const PLAYTIME_INTERVAL_MS: u64 = 1000;

/// Tick interval in milliseconds for a speed level, 1 (slowest) to 5
/// (fastest). Unknown levels fall back to the default interval.
pub fn tick_interval_ms(level: u8) -> u64 {
    match level {
        1 => 200,
        2 => 150,
        3 => 100,
        4 => 70,
        5 => 40,
        _ => DEFAULT_TICK_INTERVAL_MS,
    }
}
