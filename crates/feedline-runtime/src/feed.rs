use chrono::{DateTime, Utc};
use feedline_types::{Author, Post, PostId};
use std::collections::HashSet;

use crate::config::Config;
use crate::source::PostSource;
use crate::thread::PostThread;
use crate::{Error, Result};

/// All interaction state of a running feed, one thread per post in feed order
#[derive(Debug, Clone)]
pub struct FeedState {
    threads: Vec<PostThread>,
    profile: Author,
}

impl FeedState {
    /// Mount `posts`, seeding each with one comment by `profile`.
    ///
    /// Post ids are the reconciliation keys and must be unique.
    pub fn new(
        posts: Vec<Post>,
        profile: Author,
        seed_comment: &str,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.id()) {
                return Err(Error::DuplicatePost(post.id()));
            }
        }

        let threads = posts
            .into_iter()
            .map(|post| PostThread::seeded(post, profile.clone(), seed_comment, now))
            .collect();

        Ok(Self { threads, profile })
    }

    pub fn load(source: &dyn PostSource, config: &Config, now: DateTime<Utc>) -> Result<Self> {
        let posts = source.load()?;
        tracing::info!(source = %source.describe(), count = posts.len(), "mounting feed");
        Self::new(posts, config.profile.clone(), &config.seed_comment, now)
    }

    pub fn threads(&self) -> &[PostThread] {
        &self.threads
    }

    pub fn thread(&self, id: PostId) -> Option<&PostThread> {
        self.threads.iter().find(|thread| thread.id() == id)
    }

    pub fn thread_mut(&mut self, id: PostId) -> Option<&mut PostThread> {
        self.threads.iter_mut().find(|thread| thread.id() == id)
    }

    pub fn thread_at_mut(&mut self, index: usize) -> Option<&mut PostThread> {
        self.threads.get_mut(index)
    }

    pub fn profile(&self) -> &Author {
        &self.profile
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{SamplePosts, VecPosts};
    use chrono::TimeZone;
    use feedline_types::ContentBlock;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn post(id: u64) -> Post {
        Post::new(
            id,
            Author::new(format!("Author {}", id), "Writer", ""),
            vec![ContentBlock::paragraph(format!("Post {}", id))],
            at(),
        )
    }

    #[test]
    fn test_mount_keeps_order_and_seeds_comments() -> Result<()> {
        let feed = FeedState::new(
            vec![post(3), post(1), post(2)],
            Author::new("Me", "", ""),
            "Nice post!!",
            at(),
        )?;

        let ids: Vec<u64> = feed.threads().iter().map(|t| t.id().get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        for thread in feed.threads() {
            assert_eq!(thread.comments().len(), 1);
            assert_eq!(thread.comments()[0].text(), "Nice post!!");
            assert_eq!(thread.comments()[0].comment.author.name, "Me");
        }
        Ok(())
    }

    #[test]
    fn test_lookup_by_key() -> Result<()> {
        let mut feed = FeedState::new(vec![post(5), post(9)], Author::new("Me", "", ""), "hi", at())?;

        assert_eq!(feed.thread(PostId::new(9)).map(|t| t.id().get()), Some(9));
        assert!(feed.thread(PostId::new(4)).is_none());

        let thread = feed.thread_mut(PostId::new(5)).unwrap();
        thread.set_draft("only here");
        thread.submit_draft(Author::new("Me", "", ""), at()).unwrap();

        assert_eq!(feed.thread(PostId::new(5)).unwrap().comments().len(), 2);
        assert_eq!(feed.thread(PostId::new(9)).unwrap().comments().len(), 1);
        Ok(())
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = FeedState::new(vec![post(1), post(1)], Author::new("Me", "", ""), "hi", at())
            .unwrap_err();
        assert!(matches!(err, Error::DuplicatePost(id) if id == PostId::new(1)));
    }

    #[test]
    fn test_empty_feed() -> Result<()> {
        let feed = FeedState::load(&VecPosts::default(), &Config::default(), at())?;
        assert!(feed.is_empty());
        assert_eq!(feed.len(), 0);
        Ok(())
    }

    #[test]
    fn test_load_sample_feed_uses_config() -> Result<()> {
        let config = Config {
            seed_comment: "Primeiro!".to_string(),
            ..Config::default()
        };
        let feed = FeedState::load(&SamplePosts, &config, at())?;

        assert_eq!(feed.len(), 2);
        assert_eq!(feed.profile(), &config.profile);
        assert_eq!(feed.threads()[0].comments()[0].text(), "Primeiro!");
        Ok(())
    }
}
