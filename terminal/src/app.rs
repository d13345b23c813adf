use std::time::Duration;

use crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tracing::{info, warn};

use common::{
    DEFAULT_SPEED_LEVEL, GameOverReason, GameState, PLAYTIME_INTERVAL_MS, PseudoRandom,
    RankingEntry, RankingStore, TickOutcome, tick_interval_ms,
};

use crate::input::{InputHandler, KeyAction};
use crate::render::board::BoardRenderer;
use crate::render::standard_renderer::StandardRenderer;
use crate::render::types::CharDimensions;

const PLAYTIME_PERIOD: Duration = Duration::from_millis(PLAYTIME_INTERVAL_MS);

/// Characters per logical cell on screen.
const CELL_CHARS: CharDimensions = CharDimensions {
    horizontal: 2,
    vertical: 1,
};

#[derive(Debug)]
pub enum AppCommand {
    Quit,
}

/// The session controller. Owns the single in-flight game, the two
/// periodic schedules that drive it, and the ranking store.
pub struct App {
    pub state: GameState,
    /// Ranking as last stored, kept around for display.
    pub ranking_rows: Vec<RankingEntry>,
    ranking: RankingStore,
    input: InputHandler,
    speed: u8,
    seeder: PseudoRandom,
    tick_accumulator: Duration,
    clock_accumulator: Duration,
}

impl App {
    pub fn new(ranking: RankingStore, seed: u64) -> Self {
        let mut seeder = PseudoRandom::new(seed);
        let ranking_rows = ranking.load();
        App {
            state: GameState::new(seeder.next_u64()),
            ranking_rows,
            ranking,
            input: InputHandler::new(),
            speed: DEFAULT_SPEED_LEVEL,
            seeder,
            tick_accumulator: Duration::ZERO,
            clock_accumulator: Duration::ZERO,
        }
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(tick_interval_ms(self.speed))
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match self.input.handle_key_event(key) {
            KeyAction::Steer(direction) => {
                self.state.steer(direction);
                None
            }
            KeyAction::SetSpeed(level) => {
                self.set_speed(level);
                None
            }
            KeyAction::Restart => {
                self.restart();
                None
            }
            KeyAction::Quit => Some(AppCommand::Quit),
            KeyAction::None => None,
        }
    }

    /// Drive both periodic schedules from the frame loop's delta time.
    /// Once the game is over neither schedule runs until restart.
    pub fn update(&mut self, dt: Duration) {
        if self.state.over {
            return;
        }

        self.tick_accumulator += dt;
        self.clock_accumulator += dt;

        let period = self.tick_period();
        while self.tick_accumulator >= period && !self.state.over {
            self.tick_accumulator -= period;
            self.step();
        }

        while self.clock_accumulator >= PLAYTIME_PERIOD {
            self.clock_accumulator -= PLAYTIME_PERIOD;
            self.state.count_second();
        }
    }

    /// Change the tick period without touching game state. The pending
    /// tick schedule is dropped so the new period starts from a clean
    /// slate.
    pub fn set_speed(&mut self, level: u8) {
        self.speed = level;
        self.tick_accumulator = Duration::ZERO;
    }

    /// Reset the session for a fresh game. Both schedules are dropped
    /// before the new game starts, so rapid restarts cannot stack timers.
    /// The speed level and the ranking display carry over.
    pub fn restart(&mut self) {
        self.state = GameState::new(self.seeder.next_u64());
        self.tick_accumulator = Duration::ZERO;
        self.clock_accumulator = Duration::ZERO;
    }

    fn step(&mut self) {
        if let TickOutcome::GameOver(reason) = self.state.advance() {
            self.finish(reason);
        }
    }

    fn finish(&mut self, reason: GameOverReason) {
        info!(
            ?reason,
            score = self.state.score,
            playtime = self.state.playtime,
            "game over"
        );

        let entry = RankingEntry {
            score: self.state.score,
            time: self.state.playtime,
        };
        match self.ranking.record(entry) {
            Ok(rows) => self.ranking_rows = rows,
            Err(err) => warn!("Failed to persist ranking: {err:#}"),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let board_width = common::BOARD_CELLS as u16 * CELL_CHARS.horizontal as u16 + 2;

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Length(board_width), Constraint::Min(30)])
            .split(frame.area());

        self.render_board(frame, chunks[0]);

        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(common::RANKING_CAPACITY as u16 + 2),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(chunks[1]);

        frame.render_widget(self.render_status(), sidebar[0]);
        frame.render_widget(self.render_ranking(), sidebar[1]);
        frame.render_widget(self.render_controls(), sidebar[2]);
    }

    fn render_board(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" Snake ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let board = BoardRenderer::new(StandardRenderer::new(CELL_CHARS));
        let grid = board.render(&self.state);

        let mut paragraph = Paragraph::new(grid.into_lines());
        if self.state.over {
            paragraph = paragraph.style(Style::default().add_modifier(Modifier::DIM));
        }
        frame.render_widget(paragraph, inner);

        if !self.state.started {
            let prompt_area = Rect {
                x: inner.x,
                y: inner.y + inner.height / 2,
                width: inner.width,
                height: inner.height.min(1),
            };
            frame.render_widget(
                Paragraph::new("Press an arrow key to start!")
                    .alignment(Alignment::Center)
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                prompt_area,
            );
        }

        if self.state.over {
            let overlay = centered_rect(inner, 20, 3);
            frame.render_widget(Clear, overlay);
            frame.render_widget(
                Paragraph::new("GAME OVER")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .block(Block::default().borders(Borders::ALL)),
                overlay,
            );
        }
    }

    fn render_status(&self) -> Paragraph<'static> {
        let lines = vec![
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    self.state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Playtime: ", Style::default().fg(Color::Yellow)),
                Span::raw(format!("{} seconds", self.state.playtime)),
            ]),
            Line::from(vec![
                Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
                Span::raw(format!("level {}", self.speed)),
            ]),
        ];

        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Game "))
    }

    fn render_ranking(&self) -> Paragraph<'static> {
        let lines: Vec<Line<'static>> = self
            .ranking_rows
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                Line::from(format!(
                    "{}. {} points ({} seconds)",
                    idx + 1,
                    entry.score,
                    entry.time
                ))
            })
            .collect();

        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Top Scores "))
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let lines = vec![
            Line::from("Arrows: steer | 1-5: speed"),
            Line::from("r: restart | q: quit"),
        ];

        Paragraph::new(lines)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
