use crate::page::PostCard;
use crate::tokenizer::normalize;
use serde::{Deserialize, Serialize};

/// Position of a card in its feed, in document order.
pub type CardId = usize;

/// Searchable form of one post card, derived once at activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedCard {
    pub card: CardId,
    pub search_text: String,
    pub tags: Vec<String>,
}

impl IndexedCard {
    pub fn from_card(card: CardId, post: &PostCard) -> Self {
        let tags: Vec<String> = post.tags.iter().map(|t| normalize(t)).collect();
        let tag_text = tags.join(" ");
        let joined = [
            post.title.as_deref().unwrap_or_default(),
            post.description.as_deref().unwrap_or_default(),
            post.meta.as_deref().unwrap_or_default(),
            tag_text.as_str(),
        ]
        .join(" ");
        Self {
            card,
            search_text: normalize(&joined),
            tags,
        }
    }

    /// Every term must occur somewhere in the search text.
    pub fn matches_terms(&self, terms: &[String]) -> bool {
        terms.iter().all(|term| self.search_text.contains(term.as_str()))
    }

    /// Exact comparison against an already-normalized tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Ordered, never-empty set of indexed cards for one feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardIndex {
    cards: Vec<IndexedCard>,
}

impl CardIndex {
    /// Index the non-placeholder cards of a feed. Returns `None` when there is
    /// nothing to index.
    pub fn build(cards: &[PostCard]) -> Option<Self> {
        let entries = cards
            .iter()
            .enumerate()
            .filter(|(_, card)| !card.is_placeholder())
            .map(|(id, card)| IndexedCard::from_card(id, card))
            .collect();
        Self::from_entries(entries)
    }

    pub fn from_entries(cards: Vec<IndexedCard>) -> Option<Self> {
        if cards.is_empty() {
            None
        } else {
            Some(Self { cards })
        }
    }

    pub fn cards(&self) -> &[IndexedCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
}
