use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::text::truncate;
use crate::presentation::formatters::{Labels, labels};
use crate::presentation::view_models::{
    BlockKind, CommentViewModel, FeedViewModel, PostViewModel, ViewMode,
};

/// Plain-text rendering of the whole page: header, sidebar, posts
pub struct FeedView<'a> {
    data: &'a FeedViewModel,
    mode: ViewMode,
    color: bool,
}

impl<'a> FeedView<'a> {
    pub fn new(data: &'a FeedViewModel, mode: ViewMode) -> Self {
        Self {
            data,
            mode,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn labels(&self) -> &'static Labels {
        labels(self.data.locale)
    }

    fn bold(&self, s: &str) -> String {
        if self.color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    fn dim(&self, s: &str) -> String {
        if self.color {
            s.dimmed().to_string()
        } else {
            s.to_string()
        }
    }

    fn link(&self, s: &str) -> String {
        if self.color {
            s.cyan().underline().to_string()
        } else {
            s.to_string()
        }
    }

    fn error(&self, s: &str) -> String {
        if self.color {
            s.red().to_string()
        } else {
            s.to_string()
        }
    }

    fn write_compact_post(&self, f: &mut fmt::Formatter<'_>, post: &PostViewModel) -> fmt::Result {
        let first_line = post
            .content
            .first()
            .map(|block| truncate(&block.text, 48))
            .unwrap_or_default();

        writeln!(
            f,
            "#{} {} · {} · {} ({} {})",
            post.id,
            self.bold(&post.author.name),
            post.published.relative,
            first_line,
            post.comments.len(),
            self.labels().comments
        )
    }

    fn write_post(&self, f: &mut fmt::Formatter<'_>, post: &PostViewModel) -> fmt::Result {
        let labels = self.labels();

        writeln!(f, "{}", self.dim(&format!("── #{} ──────────", post.id)))?;
        writeln!(
            f,
            "[{}] {} · {}",
            post.author.initials,
            self.bold(&post.author.name),
            post.author.role
        )?;
        writeln!(
            f,
            "     {} ({}) <{}>",
            post.published.relative, post.published.exact, post.published.machine
        )?;

        writeln!(f)?;
        for block in &post.content {
            match block.kind {
                BlockKind::Paragraph => writeln!(f, "  {}", block.text)?,
                BlockKind::Link => {
                    let href = block.href.as_deref().unwrap_or_default();
                    writeln!(f, "  ↗ {} <{}>", self.link(&block.text), href)?
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "  {}", self.bold(labels.comment_form_title))?;
        if post.form.draft.is_empty() {
            writeln!(f, "  > {}", self.dim(labels.comment_placeholder))?;
        } else {
            writeln!(f, "  > {}", post.form.draft)?;
        }
        if let Some(error) = post.form.validation {
            writeln!(f, "  ! {}", self.error(labels.validation(error)))?;
        }
        if post.form.can_submit {
            writeln!(f, "  [{}]", labels.publish)?;
        } else {
            writeln!(f, "  {}", self.dim(&format!("[{}] (disabled)", labels.publish)))?;
        }

        for comment in &post.comments {
            writeln!(f)?;
            self.write_comment(f, comment)?;
        }

        Ok(())
    }

    fn write_comment(&self, f: &mut fmt::Formatter<'_>, comment: &CommentViewModel) -> fmt::Result {
        writeln!(
            f,
            "  [{}] {} · {} ({})",
            comment.author.initials,
            self.bold(&comment.author.name),
            comment.created.relative,
            comment.created.exact
        )?;
        writeln!(f, "       {}", comment.text)?;
        writeln!(
            f,
            "       👍 {} {} · {}",
            self.labels().applaud,
            comment.likes,
            self.dim(&format!("[✕ {}]", self.labels().remove_comment))
        )
    }
}

impl<'a> fmt::Display for FeedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.labels();
        let profile = &self.data.profile;

        writeln!(f, "{}", self.bold(labels.app_title))?;
        writeln!(f)?;
        writeln!(
            f,
            "[{}] {} · {}",
            profile.initials,
            self.bold(&profile.name),
            profile.role
        )?;
        writeln!(f, "[{}]", labels.edit_profile)?;

        for post in &self.data.posts {
            writeln!(f)?;
            match self.mode {
                ViewMode::Compact => self.write_compact_post(f, post)?,
                ViewMode::Standard => self.write_post(f, post)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use feedline_types::Locale;

    use crate::presentation::view_models::{
        AuthorViewModel, BlockViewModel, CommentFormViewModel, TimestampViewModel,
    };

    fn author(name: &str, role: &str, initials: &str) -> AuthorViewModel {
        AuthorViewModel {
            name: name.to_string(),
            role: role.to_string(),
            avatar_url: String::new(),
            initials: initials.to_string(),
        }
    }

    fn sample(posts: Vec<PostViewModel>) -> FeedViewModel {
        FeedViewModel {
            rendered_at: Utc.with_ymd_and_hms(2022, 6, 28, 1, 30, 0).unwrap(),
            locale: Locale::PtBr,
            utc_offset_seconds: -3 * 3600,
            profile: author("Leslie Alexander", "UI Designer", "LA"),
            posts,
        }
    }

    fn post() -> PostViewModel {
        let published_at = Utc.with_ymd_and_hms(2022, 6, 28, 0, 30, 0).unwrap();
        PostViewModel {
            id: 1,
            author: author("Gus Prado", "Web developer", "GP"),
            published_at,
            published: TimestampViewModel {
                relative: "há cerca de 1 hora".to_string(),
                exact: "27 de junho às 21:30h".to_string(),
                machine: "2022-06-28T00:30:00.000Z".to_string(),
            },
            content: vec![
                BlockViewModel {
                    id: 0,
                    kind: BlockKind::Paragraph,
                    text: "Hello".to_string(),
                    href: None,
                },
                BlockViewModel {
                    id: 1,
                    kind: BlockKind::Link,
                    text: "example.com/x".to_string(),
                    href: Some("https://example.com/x".to_string()),
                },
            ],
            form: CommentFormViewModel {
                draft: String::new(),
                can_submit: false,
                validation: Some(feedline_runtime::ValidationError::Required),
            },
            comments: vec![CommentViewModel {
                id: "c1".to_string(),
                author: author("Leslie Alexander", "UI Designer", "LA"),
                text: "Nice post!!".to_string(),
                created_at: published_at,
                created: TimestampViewModel {
                    relative: "há cerca de 1 hora".to_string(),
                    exact: "27 de junho às 21:30h".to_string(),
                    machine: "2022-06-28T00:30:00.000Z".to_string(),
                },
                likes: 2,
            }],
        }
    }

    #[test]
    fn test_standard_post_rendering() {
        let vm = sample(vec![post()]);
        let out = FeedView::new(&vm, ViewMode::Standard).to_string();

        insta::assert_snapshot!(out, @r"
        Ignite Feed

        [LA] Leslie Alexander · UI Designer
        [Editar seu perfil]

        ── #1 ──────────
        [GP] Gus Prado · Web developer
             há cerca de 1 hora (27 de junho às 21:30h) <2022-06-28T00:30:00.000Z>

          Hello
          ↗ example.com/x <https://example.com/x>

          Deixe seu feedback
          > Deixe um comentário
          ! Campo obrigatório!
          [Publicar] (disabled)

          [LA] Leslie Alexander · há cerca de 1 hora (27 de junho às 21:30h)
               Nice post!!
               👍 Aplaudir 2 · [✕ Remover comentário]
        ");
    }

    #[test]
    fn test_every_comment_offers_removal() {
        let mut post = post();
        let mut second = post.comments[0].clone();
        second.id = "c2".to_string();
        post.comments.push(second);
        let vm = sample(vec![post]);
        let out = FeedView::new(&vm, ViewMode::Standard).to_string();

        assert_eq!(out.matches("[✕ Remover comentário]").count(), 2);
    }

    #[test]
    fn test_paragraph_precedes_link() {
        let vm = sample(vec![post()]);
        let out = FeedView::new(&vm, ViewMode::Standard).to_string();

        let hello = out.find("  Hello").unwrap();
        let link = out.find("↗ example.com/x").unwrap();
        assert!(hello < link);
    }

    #[test]
    fn test_compact_mode_is_one_line_per_post() {
        let vm = sample(vec![post()]);
        let out = FeedView::new(&vm, ViewMode::Compact).to_string();

        assert!(out.contains("#1 Gus Prado · há cerca de 1 hora · Hello (1 comentários)"));
        assert!(!out.contains("Deixe seu feedback"));
    }

    #[test]
    fn test_empty_feed_renders_only_shell() {
        let vm = sample(vec![]);
        let out = FeedView::new(&vm, ViewMode::Standard).to_string();

        assert!(out.starts_with("Ignite Feed\n"));
        assert!(!out.contains("──"));
        assert!(out.ends_with("[Editar seu perfil]\n"));
    }
}
