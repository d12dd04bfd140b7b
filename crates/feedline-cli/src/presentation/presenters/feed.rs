use chrono::{DateTime, FixedOffset, Utc};
use feedline_runtime::{CommentEntry, FeedState, PostThread};
use feedline_types::{Author, Block, ContentBlock, Locale};

use crate::presentation::formatters::time::{format_distance_to_now, format_exact, format_machine};
use crate::presentation::view_models::{
    AuthorViewModel, BlockKind, BlockViewModel, CommentFormViewModel, CommentViewModel,
    FeedViewModel, PostViewModel, TimestampViewModel,
};

/// Render-time inputs for timestamp labels
#[derive(Debug, Clone, Copy)]
struct Clock {
    now: DateTime<Utc>,
    locale: Locale,
    offset: FixedOffset,
}

impl Clock {
    fn timestamp(&self, instant: DateTime<Utc>) -> TimestampViewModel {
        TimestampViewModel {
            relative: format_distance_to_now(instant, self.now, self.locale),
            exact: format_exact(instant, self.offset, self.locale),
            machine: format_machine(instant),
        }
    }
}

/// Snapshot the whole feed for rendering at `now`
pub fn present_feed(
    state: &FeedState,
    now: DateTime<Utc>,
    locale: Locale,
    offset: FixedOffset,
) -> FeedViewModel {
    let clock = Clock {
        now,
        locale,
        offset,
    };

    FeedViewModel {
        rendered_at: now,
        locale,
        utc_offset_seconds: offset.local_minus_utc(),
        profile: present_author(state.profile()),
        posts: state
            .threads()
            .iter()
            .map(|thread| present_post(thread, &clock))
            .collect(),
    }
}

fn present_post(thread: &PostThread, clock: &Clock) -> PostViewModel {
    let post = thread.post();
    let draft = thread.draft();

    PostViewModel {
        id: post.id().get(),
        author: present_author(post.author()),
        published_at: post.published_at(),
        published: clock.timestamp(post.published_at()),
        content: post.content().iter().map(present_block).collect(),
        form: CommentFormViewModel {
            draft: draft.text().to_string(),
            can_submit: thread.can_submit(),
            validation: draft.validation(),
        },
        comments: thread
            .comments()
            .iter()
            .map(|entry| present_comment(entry, clock))
            .collect(),
    }
}

fn present_author(author: &Author) -> AuthorViewModel {
    AuthorViewModel {
        name: author.name.clone(),
        role: author.role.clone(),
        avatar_url: author.avatar_url.clone(),
        initials: author.initials(),
    }
}

fn present_block(block: &Block) -> BlockViewModel {
    let kind = match block.body {
        ContentBlock::Paragraph { .. } => BlockKind::Paragraph,
        ContentBlock::Link { .. } => BlockKind::Link,
    };

    BlockViewModel {
        id: block.id.get(),
        kind,
        text: block.body.text().to_string(),
        href: block.body.destination(),
    }
}

fn present_comment(entry: &CommentEntry, clock: &Clock) -> CommentViewModel {
    CommentViewModel {
        id: entry.id().to_string(),
        author: present_author(&entry.comment.author),
        text: entry.text().to_string(),
        created_at: entry.comment.created_at,
        created: clock.timestamp(entry.comment.created_at),
        likes: entry.likes(),
    }
}
