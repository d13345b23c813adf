use crate::constants::{BOARD_CELLS, GRID_SIZE, SNAKE_START_X, SNAKE_START_Y};
use crate::snake::{Direction, Position, Snake};
use crate::util::PseudoRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    Wall,
    SelfHit,
}

/// What one tick of the engine produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    AteApple,
    GameOver(GameOverReason),
}

/// The single in-flight game: snake, apple, score, lifecycle flags and the
/// session RNG used for apple placement.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Position,
    pub score: u32,
    /// True once the first directional input has been accepted.
    pub started: bool,
    /// Terminal flag. Set by the tick engine, cleared only by replacing
    /// the whole state on restart.
    pub over: bool,
    /// Seconds elapsed while started and not over.
    pub playtime: u32,
    rng: PseudoRandom,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        let mut rng = PseudoRandom::new(seed);
        let apple = random_cell(&mut rng);
        GameState {
            snake: Snake::new(Position::new(SNAKE_START_X, SNAKE_START_Y)),
            apple,
            score: 0,
            started: false,
            over: false,
            playtime: 0,
            rng,
        }
    }

    /// Apply a directional input. The first accepted press starts the game;
    /// afterwards turns are only accepted onto the idle axis, so the snake
    /// can never reverse into its own neck. Returns whether the direction
    /// was taken. Last accepted press before a tick wins; there is no queue.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.over {
            return false;
        }
        if !self.started {
            self.started = true;
            self.snake.heading = Some(direction);
            return true;
        }
        if self.snake.can_turn(direction) {
            self.snake.heading = Some(direction);
            true
        } else {
            false
        }
    }

    /// Advance the game by one tick. Does nothing until the game has
    /// started, and nothing once it is over.
    pub fn advance(&mut self) -> TickOutcome {
        if !self.started || self.over {
            return TickOutcome::Continue;
        }
        let Some(heading) = self.snake.heading else {
            return TickOutcome::Continue;
        };

        let (dx, dy) = heading.delta();
        let next = self.snake.head.offset(dx, dy);

        if !next.on_board() {
            self.over = true;
            return TickOutcome::GameOver(GameOverReason::Wall);
        }

        self.snake.head = next;
        self.snake.body.push_front(next);
        // Trim before any capacity raise: a freshly raised capacity takes
        // effect one tick later, one cell of growth per tick.
        if self.snake.body.len() > self.snake.capacity {
            self.snake.body.pop_back();
        }

        let mut outcome = TickOutcome::Continue;
        if next == self.apple {
            self.snake.capacity += 1;
            self.score += 1;
            self.apple = random_cell(&mut self.rng);
            outcome = TickOutcome::AteApple;
        }

        // Pairwise scan of the whole body; bounded by the board size.
        let body = &self.snake.body;
        for i in 0..body.len() {
            for j in i + 1..body.len() {
                if body[i] == body[j] {
                    self.over = true;
                    return TickOutcome::GameOver(GameOverReason::SelfHit);
                }
            }
        }

        outcome
    }

    /// One playtime second. Counts only while a started game is running.
    pub fn count_second(&mut self) {
        if self.started && !self.over {
            self.playtime += 1;
        }
    }
}

/// Uniformly random grid cell. Cells occupied by the snake are not
/// excluded.
fn random_cell(rng: &mut PseudoRandom) -> Position {
    let x = (rng.next_u32() % BOARD_CELLS as u32) as i32 * GRID_SIZE;
    let y = (rng.next_u32() % BOARD_CELLS as u32) as i32 * GRID_SIZE;
    Position::new(x, y)
}
