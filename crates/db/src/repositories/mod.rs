//! Typed repositories over the document store.

mod story_repo;

pub use story_repo::{StoryRepo, STORY_COLLECTION};
