//! Feed Component (Page-level)
//!
//! Owns post selection and one `PostComponent` per post, keyed by post id,
//! so per-post UI state survives reordering and disappears with its post.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use feedline_runtime::FeedState;
use feedline_types::PostId;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::StatusMessage;
use super::post::{PostAction, PostComponent};
use crate::presentation::view_models::FeedViewModel;
use crate::presentation::views::tui::{
    HeaderView, PostView, SidebarView, StatusBarView, ViewContext,
};

const SIDEBAR_WIDTH: u16 = 30;

/// Actions that the feed emits to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedAction {
    Quit,
}

#[derive(Debug, Default)]
pub struct FeedComponent {
    selected_post: usize,
    first_visible: usize,
    posts: HashMap<PostId, PostComponent>,
    status: Option<StatusMessage>,
}

impl FeedComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected post index, clamped to `len`
    pub fn selected_post(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.selected_post.min(len - 1))
        }
    }

    pub fn status(&self) -> Option<StatusMessage> {
        self.status
    }

    fn is_composing(&self, state: &FeedState) -> bool {
        self.selected_post(state.len())
            .map(|index| state.threads()[index].id())
            .and_then(|id| self.posts.get(&id))
            .is_some_and(PostComponent::is_composing)
    }

    /// Handle keyboard input for the feed page
    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &mut FeedState,
        now: DateTime<Utc>,
    ) -> Option<FeedAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(FeedAction::Quit);
        }

        let len = state.len();
        let composing = self.is_composing(state);

        if !composing {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Some(FeedAction::Quit),
                KeyCode::Char('j') | KeyCode::Down => {
                    if let Some(current) = self.selected_post(len) {
                        self.selected_post = (current + 1).min(len - 1);
                    }
                    return None;
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.selected_post = self
                        .selected_post(len)
                        .unwrap_or_default()
                        .saturating_sub(1);
                    return None;
                }
                _ => {}
            }
        }

        let index = self.selected_post(len)?;
        let author = state.profile().clone();
        let thread = state.thread_at_mut(index)?;
        let component = self.posts.entry(thread.id()).or_default();

        self.status = None;
        let action = component.handle_input(key, thread, &author, now)?;
        tracing::info!(post_id = %thread.id(), ?action, "feed action");

        self.status = Some(match action {
            PostAction::Published(_) => StatusMessage::Published,
            PostAction::Deleted(_) => StatusMessage::Deleted,
            PostAction::Rejected(error) => StatusMessage::Rejected(error),
        });
        None
    }

    /// Render the feed page
    ///
    /// Layout: [Header | Sidebar + Posts | Status Bar]
    pub fn render(&mut self, f: &mut Frame, area: Rect, screen: &FeedViewModel) {
        let ctx = ViewContext::from_feed(screen);

        // Drop UI state of posts that are gone
        let live: HashSet<PostId> = screen.posts.iter().map(|p| PostId::new(p.id)).collect();
        self.posts.retain(|id, _| live.contains(id));

        let main_chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

        f.render_widget(HeaderView::new(ctx.labels().app_title), main_chunks[0]);

        let body = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(main_chunks[1]);

        f.render_widget(SidebarView::new(&screen.profile, ctx), body[0]);
        self.render_posts(f, body[1], screen, ctx);

        let composing = self
            .selected_post(screen.posts.len())
            .and_then(|index| self.posts.get(&PostId::new(screen.posts[index].id)))
            .is_some_and(PostComponent::is_composing);
        let status_bar = StatusBarView::new(ctx, screen.posts.len())
            .composing(composing)
            .message(self.status);
        f.render_widget(status_bar, main_chunks[2]);
    }

    fn render_posts(&mut self, f: &mut Frame, area: Rect, screen: &FeedViewModel, ctx: ViewContext) {
        let Some(selected) = self.selected_post(screen.posts.len()) else {
            let empty = Paragraph::new(ctx.labels().no_posts)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(empty, area);
            return;
        };

        let views: Vec<PostView> = screen
            .posts
            .iter()
            .enumerate()
            .map(|(index, post)| {
                let state = self.posts.get(&PostId::new(post.id));
                let comments = post.comments.len();
                PostView::new(post, ctx)
                    .selected(index == selected)
                    .selected_comment(state.and_then(|s| s.selected_comment(comments)))
                    .composing(index == selected && state.is_some_and(PostComponent::is_composing))
            })
            .collect();
        let heights: Vec<u16> = views.iter().map(|v| v.height(area.width)).collect();

        // Scroll so the selected post is on screen, top-aligned when it does not fit
        self.first_visible = self.first_visible.min(selected);
        while self.first_visible < selected
            && heights[self.first_visible..=selected].iter().map(|&h| h as u32).sum::<u32>()
                > area.height as u32
        {
            self.first_visible += 1;
        }

        let mut y = area.y;
        let bottom = area.y + area.height;
        for (view, height) in views.into_iter().zip(heights).skip(self.first_visible) {
            if y >= bottom {
                break;
            }
            let rect = Rect::new(area.x, y, area.width, height.min(bottom - y));
            f.render_widget(view, rect);
            y += rect.height;
        }
    }
}
