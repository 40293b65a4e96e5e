use crate::game::{Cell, GameState};

pub const BORDER_GLYPH: char = '#';
pub const SNAKE_GLYPH: char = 'O';
pub const HEAD_GLYPH: char = '0';
pub const FOOD_GLYPH: char = '@';
pub const EMPTY_GLYPH: char = ' ';
pub const FILLER_GLYPH: char = '.';

/// A flat character frame sized to the display area.
///
/// Compositing the playground into it is a pure projection of game state:
/// the grid's cells are copied in at a fixed centering offset, the rest of
/// the frame holds filler. The display sink draws whatever is here and feeds
/// nothing back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    cols: usize,
    rows: usize,
    glyphs: Vec<char>,
}

impl FrameBuffer {
    /// Project the playground into the centre of a `cols`×`rows` frame.
    ///
    /// The head cell is drawn distinctly from the body; the grid itself only
    /// knows `Snake`, the head index comes from the segment list.
    pub fn compose(state: &GameState, cols: usize, rows: usize) -> Self {
        let (width, height) = (state.playground.width(), state.playground.height());
        assert!(cols >= width && rows >= height, "display area smaller than the playground");

        let mut glyphs = vec![FILLER_GLYPH; cols * rows];
        let offset = cols / 2 - width / 2 + (rows / 2 - height / 2) * cols;
        let head = state.segments.head();

        for y in 0..height {
            for x in 0..width {
                let index = state.playground.index(x, y);
                let glyph = match state.playground.cell(index) {
                    Cell::Border => BORDER_GLYPH,
                    Cell::Snake if Some(index) == head => HEAD_GLYPH,
                    Cell::Snake => SNAKE_GLYPH,
                    Cell::Food => FOOD_GLYPH,
                    Cell::Empty => EMPTY_GLYPH,
                };
                glyphs[x + y * cols + offset] = glyph;
            }
        }

        Self { cols, rows, glyphs }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn glyph_at(&self, x: usize, y: usize) -> char {
        self.glyphs[x + y * self.cols]
    }

    /// One frame row, for the display sink.
    pub fn row(&self, y: usize) -> &[char] {
        &self.glyphs[y * self.cols..(y + 1) * self.cols]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameEngine};

    fn sample_state() -> crate::game::GameState {
        GameEngine::new(GameConfig::small()).reset()
    }

    #[test]
    fn compose_centres_the_playground() {
        let state = sample_state();
        let frame = FrameBuffer::compose(&state, 40, 20);

        // 10x10 playground in a 40x20 frame sits at (15, 5)
        assert_eq!(frame.glyph_at(15, 5), BORDER_GLYPH);
        assert_eq!(frame.glyph_at(24, 5), BORDER_GLYPH);
        assert_eq!(frame.glyph_at(15, 14), BORDER_GLYPH);
        assert_eq!(frame.glyph_at(24, 14), BORDER_GLYPH);

        // outside the playground it is all filler
        assert_eq!(frame.glyph_at(14, 5), FILLER_GLYPH);
        assert_eq!(frame.glyph_at(25, 5), FILLER_GLYPH);
        assert_eq!(frame.glyph_at(0, 0), FILLER_GLYPH);
    }

    #[test]
    fn head_body_and_food_use_distinct_glyphs() {
        let state = sample_state();
        let frame = FrameBuffer::compose(&state, 40, 20);

        // head at playground (5, 5), body trailing left
        assert_eq!(frame.glyph_at(15 + 5, 5 + 5), HEAD_GLYPH);
        assert_eq!(frame.glyph_at(15 + 4, 5 + 5), SNAKE_GLYPH);
        assert_eq!(frame.glyph_at(15 + 3, 5 + 5), SNAKE_GLYPH);

        let food_glyphs = (0..frame.rows())
            .flat_map(|y| frame.row(y).iter().copied().collect::<Vec<_>>())
            .filter(|&g| g == FOOD_GLYPH)
            .count();
        assert_eq!(food_glyphs, 1);
    }

    #[test]
    fn frame_the_exact_size_of_the_playground_has_no_filler() {
        let state = sample_state();
        let frame = FrameBuffer::compose(&state, 10, 10);

        assert_eq!(frame.glyph_at(0, 0), BORDER_GLYPH);
        assert_eq!(frame.glyph_at(9, 9), BORDER_GLYPH);
        let filler = (0..10).flat_map(|y| frame.row(y).to_vec()).filter(|&g| g == FILLER_GLYPH).count();
        assert_eq!(filler, 0);
    }
}
