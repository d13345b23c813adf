use ratatui::style::Style;
use ratatui::text::{Line, Span};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharDimensions {
    pub horizontal: usize,
    pub vertical: usize,
}

impl CharDimensions {
    pub fn new(horizontal: usize, vertical: usize) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Styled character block covering one logical board cell.
#[derive(Clone, Debug)]
pub struct CellPattern {
    pub chars: Vec<Vec<char>>,
    pub style: Style,
}

impl CellPattern {
    pub fn fill(ch: char, style: Style, dims: CharDimensions) -> Self {
        Self {
            chars: vec![vec![ch; dims.horizontal]; dims.vertical],
            style,
        }
    }
}

/// Character-resolution paint target addressed by logical cell.
pub struct CharGrid {
    cells: Vec<Vec<(char, Style)>>,
    char_dims: CharDimensions,
}

impl CharGrid {
    pub fn new(logical_width: usize, logical_height: usize, char_dims: CharDimensions) -> Self {
        let physical_width = logical_width * char_dims.horizontal;
        let physical_height = logical_height * char_dims.vertical;
        Self {
            cells: vec![vec![(' ', Style::default()); physical_width]; physical_height],
            char_dims,
        }
    }

    pub fn set_logical_point(&mut self, x: usize, y: usize, pattern: &CellPattern) {
        let start_x = x * self.char_dims.horizontal;
        let start_y = y * self.char_dims.vertical;

        for (dy, row) in pattern.chars.iter().enumerate() {
            for (dx, &ch) in row.iter().enumerate() {
                if let Some(cell) = self
                    .cells
                    .get_mut(start_y + dy)
                    .and_then(|r| r.get_mut(start_x + dx))
                {
                    *cell = (ch, pattern.style);
                }
            }
        }
    }

    pub fn char_rows(&self) -> Vec<Vec<char>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|(ch, _)| *ch).collect())
            .collect()
    }

    /// Collapse each row into spans, merging runs that share a style.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.cells
            .into_iter()
            .map(|row| {
                let mut spans: Vec<Span<'static>> = Vec::new();
                let mut run = String::new();
                let mut run_style = Style::default();

                for (ch, style) in row {
                    if run.is_empty() {
                        run_style = style;
                    } else if style != run_style {
                        spans.push(Span::styled(std::mem::take(&mut run), run_style));
                        run_style = style;
                    }
                    run.push(ch);
                }
                if !run.is_empty() {
                    spans.push(Span::styled(run, run_style));
                }

                Line::from(spans)
            })
            .collect()
    }
}
