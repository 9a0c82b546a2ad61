//! Card entity model.
//!
//! A `Card` is an immutable content record once admitted to the deck:
//! stable id, media reference, author metadata, interaction flags, and
//! counters. Cards are supplied by the feed collaborator and treated as
//! read-mostly; interaction flags are optimistically mutated locally and
//! reconciled asynchronously by the collaborator.
//!
//! ## Usage
//!
//! ```
//! use swipe_deck::core::{Card, CardId, AuthorInfo};
//!
//! let card = Card::new(
//!     CardId::new(1),
//!     "https://cdn.example.com/p/1.jpg",
//!     AuthorInfo::new(7, "mika"),
//! );
//!
//! assert!(!card.is_liked);
//! assert_eq!(card.likes_count, 0);
//! ```

use serde::{Deserialize, Serialize};

/// Unique, stable identifier for a card.
///
/// Ids are assumed unique and non-recycled within a session, except in
/// fixed-sample mode where one sample set deliberately cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u64);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Author metadata carried by a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInfo {
    /// Author's account id.
    pub id: u64,

    /// Display username.
    pub username: String,

    /// Avatar image URL, if the author has one.
    pub avatar_url: Option<String>,
}

impl AuthorInfo {
    /// Create author metadata without an avatar.
    pub fn new(id: u64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            avatar_url: None,
        }
    }

    /// Set the avatar URL (builder pattern).
    #[must_use]
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}

/// A content card in the deck.
///
/// The content fields (`media_url`, `author`, `comments_count`) never change
/// after admission. The interaction flags and `likes_count` are optimistic
/// local state, mutated by the resolution router and reconciled by the
/// external interaction recorder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique entity id.
    pub id: CardId,

    /// Media reference (image/video URL).
    pub media_url: String,

    /// Author metadata.
    pub author: AuthorInfo,

    /// Has the local user liked this card?
    pub is_liked: bool,

    /// Has the local user saved this card?
    pub is_saved: bool,

    /// Is the local user following the author?
    pub is_following: bool,

    /// Like counter, optimistically bumped on like.
    pub likes_count: u32,

    /// Comment counter (display only, never mutated here).
    pub comments_count: u32,
}

impl Card {
    /// Create a card with zeroed flags and counters.
    #[must_use]
    pub fn new(id: CardId, media_url: impl Into<String>, author: AuthorInfo) -> Self {
        Self {
            id,
            media_url: media_url.into(),
            author,
            is_liked: false,
            is_saved: false,
            is_following: false,
            likes_count: 0,
            comments_count: 0,
        }
    }

    /// Set the counters (builder pattern).
    #[must_use]
    pub fn with_counts(mut self, likes: u32, comments: u32) -> Self {
        self.likes_count = likes;
        self.comments_count = comments;
        self
    }

    /// Set the interaction flags (builder pattern).
    #[must_use]
    pub fn with_flags(mut self, liked: bool, saved: bool, following: bool) -> Self {
        self.is_liked = liked;
        self.is_saved = saved;
        self.is_following = following;
        self
    }

    /// Optimistically mark this card liked.
    ///
    /// Idempotent: the counter is bumped only on the first like.
    pub fn mark_liked(&mut self) {
        if !self.is_liked {
            self.is_liked = true;
            self.likes_count += 1;
        }
    }

    /// Optimistically mark this card saved.
    pub fn mark_saved(&mut self) {
        self.is_saved = true;
    }

    /// Optimistically set the follow flag for the card's author.
    pub fn set_following(&mut self, following: bool) {
        self.is_following = following;
    }
}
