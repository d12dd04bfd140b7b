//! Status Bar View Component
//!
//! Renders the bottom status bar with the last action and key hints.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::ViewContext;
use super::components::StatusMessage;

pub struct StatusBarView {
    ctx: ViewContext,
    composing: bool,
    message: Option<StatusMessage>,
    post_count: usize,
}

impl StatusBarView {
    pub fn new(ctx: ViewContext, post_count: usize) -> Self {
        Self {
            ctx,
            composing: false,
            message: None,
            post_count,
        }
    }

    pub fn composing(mut self, composing: bool) -> Self {
        self.composing = composing;
        self
    }

    pub fn message(mut self, message: Option<StatusMessage>) -> Self {
        self.message = message;
        self
    }

    fn status_span(&self) -> Span<'static> {
        let labels = self.ctx.labels();
        match self.message {
            Some(StatusMessage::Published) => {
                Span::styled(labels.published, Style::default().fg(Color::Green))
            }
            Some(StatusMessage::Deleted) => {
                Span::styled(labels.deleted, Style::default().fg(Color::Cyan))
            }
            Some(StatusMessage::Rejected(error)) => {
                Span::styled(labels.validation(error), Style::default().fg(Color::Red))
            }
            None => Span::raw(format!("Posts: {}", self.post_count)),
        }
    }
}

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

impl Widget for StatusBarView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(inner);

        Paragraph::new(Line::from(self.status_span())).render(chunks[0], buf);

        let help = if self.composing {
            Line::from(vec![
                key("[Enter]"),
                Span::raw(" publish "),
                key("[Esc]"),
                Span::raw(" back"),
            ])
        } else {
            Line::from(vec![
                key("[q]"),
                Span::raw("uit "),
                key("[j/k]"),
                Span::raw("post "),
                key("[n/p]"),
                Span::raw("comment "),
                key("[c]"),
                Span::raw("ompose "),
                key("[l]"),
                Span::raw("ike "),
                key("[d]"),
                Span::raw("elete"),
            ])
        };
        Paragraph::new(help).render(chunks[1], buf);
    }
}
