use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{CommentView, ViewContext, avatar_badge};
use crate::presentation::formatters::text::wrap;
use crate::presentation::view_models::{BlockKind, PostViewModel};

/// A post card: header, content blocks, comment form and comment list
pub struct PostView<'a> {
    model: &'a PostViewModel,
    ctx: ViewContext,
    selected: bool,
    selected_comment: Option<usize>,
    composing: bool,
}

impl<'a> PostView<'a> {
    pub fn new(model: &'a PostViewModel, ctx: ViewContext) -> Self {
        Self {
            model,
            ctx,
            selected: false,
            selected_comment: None,
            composing: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn selected_comment(mut self, index: Option<usize>) -> Self {
        self.selected_comment = index;
        self
    }

    pub fn composing(mut self, composing: bool) -> Self {
        self.composing = composing;
        self
    }

    /// Content lines for an inner width (borders excluded)
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let labels = self.ctx.labels();
        let text_width = width.max(1) as usize;
        let mut lines = Vec::new();

        let author = &self.model.author;
        lines.push(Line::from(vec![
            avatar_badge(&author.initials, Color::Cyan),
            Span::raw(" "),
            Span::styled(
                author.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" · {}", author.role),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(
                self.model.published.relative.clone(),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!(" ({})", self.model.published.exact),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(""));

        for block in &self.model.content {
            match block.kind {
                BlockKind::Paragraph => {
                    for row in wrap(&block.text, text_width) {
                        lines.push(Line::from(row));
                    }
                }
                BlockKind::Link => {
                    let mut spans = vec![
                        Span::styled("↗ ", Style::default().fg(Color::Green)),
                        Span::styled(
                            block.text.clone(),
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::UNDERLINED),
                        ),
                    ];
                    if let Some(href) = &block.href {
                        spans.push(Span::styled(
                            format!(" <{}>", href),
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                    lines.push(Line::from(spans));
                }
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            labels.comment_form_title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.extend(self.draft_lines(text_width));

        if let Some(error) = self.model.form.validation {
            lines.push(Line::from(Span::styled(
                labels.validation(error),
                Style::default().fg(Color::Red),
            )));
        }

        let publish_style = if self.model.form.can_submit {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", labels.publish),
            publish_style,
        )));

        for (index, comment) in self.model.comments.iter().enumerate() {
            lines.push(Line::from(""));
            let view = CommentView::new(comment, self.ctx)
                .selected(self.selected && self.selected_comment == Some(index));
            lines.extend(view.lines(width));
        }

        lines
    }

    fn draft_lines(&self, width: usize) -> Vec<Line<'static>> {
        let prompt_style = if self.composing {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let body_width = width.saturating_sub(2).max(1);

        if self.model.form.draft.is_empty() {
            let mut spans = vec![Span::styled("> ", prompt_style)];
            if self.composing {
                spans.push(Span::styled("▏", Style::default().fg(Color::Green)));
            }
            spans.push(Span::styled(
                self.ctx.labels().comment_placeholder,
                Style::default().fg(Color::DarkGray),
            ));
            return vec![Line::from(spans)];
        }

        let rows = wrap(&self.model.form.draft, body_width);
        let last = rows.len().saturating_sub(1);
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                let prompt = if i == 0 { "> " } else { "  " };
                let mut spans = vec![Span::styled(prompt, prompt_style), Span::raw(row)];
                if self.composing && i == last {
                    spans.push(Span::styled("▏", Style::default().fg(Color::Green)));
                }
                Line::from(spans)
            })
            .collect()
    }

    /// Total rows including borders
    pub fn height(&self, width: u16) -> u16 {
        self.lines(width.saturating_sub(2)).len() as u16 + 2
    }
}

impl<'a> Widget for PostView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" #{} ", self.model.id))
            .title_bottom(
                Line::from(format!(" {} ", self.model.published.machine))
                    .right_aligned(),
            );

        let inner = block.inner(area);
        let lines = self.lines(inner.width);
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
