use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::{ViewContext, avatar_badge};
use crate::presentation::view_models::AuthorViewModel;

/// Profile card of the local user
pub struct SidebarView<'a> {
    profile: &'a AuthorViewModel,
    ctx: ViewContext,
}

impl<'a> SidebarView<'a> {
    pub fn new(profile: &'a AuthorViewModel, ctx: ViewContext) -> Self {
        Self { profile, ctx }
    }
}

impl<'a> Widget for SidebarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(avatar_badge(&self.profile.initials, Color::Green)),
            Line::from(""),
            Line::from(Span::styled(
                self.profile.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.profile.role.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("[ {} ]", self.ctx.labels().edit_profile),
                Style::default().fg(Color::Green),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
