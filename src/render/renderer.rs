use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::game::GameState;
use crate::metrics::SessionMetrics;

use super::frame::{self, FrameBuffer};

/// The display sink: draws the composed frame plus the score and control
/// panels. A pure view of the state; nothing here feeds back into the game.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &SessionMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // score line
                Constraint::Min(0),    // playground
                Constraint::Length(1), // control legend
            ])
            .split(frame.area());

        frame.render_widget(self.score_line(state, metrics), chunks[0]);

        if state.alive {
            frame.render_widget(self.playground(state, chunks[1]), chunks[1]);
        } else {
            frame.render_widget(self.game_over(state), chunks[1]);
        }

        frame.render_widget(self.controls(), chunks[2]);
    }

    fn playground(&self, state: &GameState, area: Rect) -> Paragraph<'static> {
        // the startup check guarantees this fits; a mid-run shrink does not
        if (area.width as usize) < state.playground.width() || (area.height as usize) < state.playground.height() {
            return Paragraph::new("Terminal too small").alignment(Alignment::Center);
        }

        let buffer = FrameBuffer::compose(state, area.width as usize, area.height as usize);

        let lines: Vec<Line> = (0..buffer.rows())
            .map(|y| Line::from(buffer.row(y).iter().map(|&glyph| style_glyph(glyph)).collect::<Vec<_>>()))
            .collect();

        Paragraph::new(lines)
    }

    fn score_line(&self, state: &GameState, metrics: &SessionMetrics) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.length().to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.clock(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn game_over(&self, state: &GameState) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled("R", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled("Q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Red)))
    }

    fn controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn style_glyph(glyph: char) -> Span<'static> {
    let style = match glyph {
        frame::HEAD_GLYPH => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        frame::SNAKE_GLYPH => Style::default().fg(Color::Green),
        frame::FOOD_GLYPH => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        frame::BORDER_GLYPH => Style::default().fg(Color::White),
        frame::FILLER_GLYPH => Style::default().fg(Color::DarkGray),
        _ => Style::default(),
    };

    Span::styled(glyph.to_string(), style)
}
