use ratatui::style::{Color, Modifier, Style};

use super::traits::CellRenderer;
use super::types::{CellPattern, CharDimensions};

pub struct StandardRenderer {
    char_dims: CharDimensions,
}

impl StandardRenderer {
    pub fn new(char_dims: CharDimensions) -> Self {
        Self { char_dims }
    }
}

impl CellRenderer for StandardRenderer {
    fn char_dimensions(&self) -> CharDimensions {
        self.char_dims
    }

    fn render_snake_segment(&self, is_head: bool) -> CellPattern {
        if is_head {
            CellPattern::fill(
                '█',
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                self.char_dims,
            )
        } else {
            CellPattern::fill('▓', Style::default().fg(Color::Green), self.char_dims)
        }
    }

    fn render_apple(&self) -> CellPattern {
        CellPattern::fill('●', Style::default().fg(Color::Red), self.char_dims)
    }
}
