use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{ViewContext, avatar_badge};
use crate::presentation::formatters::text::wrap;
use crate::presentation::view_models::CommentViewModel;

const BODY_INDENT: &str = "       ";

/// One comment: author line, body, applause counter
pub struct CommentView<'a> {
    model: &'a CommentViewModel,
    ctx: ViewContext,
    selected: bool,
}

impl<'a> CommentView<'a> {
    pub fn new(model: &'a CommentViewModel, ctx: ViewContext) -> Self {
        Self {
            model,
            ctx,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let labels = self.ctx.labels();
        let marker = if self.selected {
            Span::styled("▌ ", Style::default().fg(Color::Yellow))
        } else {
            Span::raw("  ")
        };

        let mut name_style = Style::default().add_modifier(Modifier::BOLD);
        if self.selected {
            name_style = name_style.fg(Color::Yellow);
        }

        let mut lines = vec![Line::from(vec![
            marker,
            avatar_badge(&self.model.author.initials, Color::Gray),
            Span::raw(" "),
            Span::styled(self.model.author.name.clone(), name_style),
            Span::styled(
                format!(" · {}", self.model.created.relative),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("  [✕ {}]", labels.remove_comment),
                Style::default().fg(Color::DarkGray),
            ),
        ])];

        let body_width = width.saturating_sub(BODY_INDENT.len() as u16).max(1) as usize;
        for row in wrap(&self.model.text, body_width) {
            lines.push(Line::from(vec![Span::raw(BODY_INDENT), Span::raw(row)]));
        }

        lines.push(Line::from(vec![
            Span::raw(BODY_INDENT),
            Span::styled(
                format!("👍 {} · {}", labels.applaud, self.model.likes),
                Style::default().fg(Color::Green),
            ),
        ]));

        lines
    }

    pub fn height(&self, width: u16) -> u16 {
        self.lines(width).len() as u16
    }
}

impl<'a> Widget for CommentView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines(area.width)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{AuthorViewModel, TimestampViewModel};
    use crate::presentation::views::tui::test_support::buffer_text;
    use chrono::{TimeZone, Utc};
    use feedline_types::Locale;

    fn ctx() -> ViewContext {
        ViewContext {
            locale: Locale::PtBr,
        }
    }

    fn comment(text: &str) -> CommentViewModel {
        CommentViewModel {
            id: "c1".to_string(),
            author: AuthorViewModel {
                name: "Leslie Alexander".to_string(),
                role: "UI Designer".to_string(),
                avatar_url: String::new(),
                initials: "LA".to_string(),
            },
            text: text.to_string(),
            created_at: Utc.with_ymd_and_hms(2022, 6, 28, 0, 30, 0).unwrap(),
            created: TimestampViewModel {
                relative: "há 10 minutos".to_string(),
                exact: "27 de junho às 21:30h".to_string(),
                machine: "2022-06-28T00:30:00.000Z".to_string(),
            },
            likes: 3,
        }
    }

    #[test]
    fn test_comment_lines() {
        let model = comment("Nice post!!");
        let view = CommentView::new(&model, ctx());
        let lines: Vec<String> = view.lines(60).iter().map(|l| l.to_string()).collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("LA"));
        assert!(lines[0].contains("Leslie Alexander · há 10 minutos"));
        assert!(lines[0].contains("Remover comentário"));
        assert_eq!(lines[1], "       Nice post!!");
        assert!(lines[2].contains("Aplaudir · 3"));
    }

    #[test]
    fn test_long_body_wraps() {
        let model = comment("one two three four five six seven eight");
        let view = CommentView::new(&model, ctx());

        // "one two" / "three four" / "five six" / "seven" / "eight"
        assert_eq!(view.height(17), 7);
    }

    #[test]
    fn test_selected_marker_rendered() {
        let model = comment("Nice post!!");
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 3));
        CommentView::new(&model, ctx())
            .selected(true)
            .render(buf.area, &mut buf);

        assert!(buffer_text(&buf).starts_with("▌ "));
    }
}
