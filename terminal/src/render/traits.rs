use super::types::{CellPattern, CharDimensions};

pub trait CellRenderer {
    fn char_dimensions(&self) -> CharDimensions;

    fn render_snake_segment(&self, is_head: bool) -> CellPattern;

    fn render_apple(&self) -> CellPattern;
}
