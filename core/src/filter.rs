//! Filter state and the pure visibility computation over a [`CardIndex`].

use crate::index::{CardIndex, IndexedCard};
use crate::tokenizer::{normalize, query_terms};
use serde::Serialize;

/// Which tag filter, if any, is applied on top of the text query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TagSelection {
    #[default]
    NoTagActive,
    TagActive {
        /// Normalized tag text.
        tag: String,
        /// Position of the pill that selected it, when a pill did.
        pill: Option<usize>,
    },
}

impl TagSelection {
    /// Select `label` (normalized). A label that normalizes to nothing
    /// selects nothing.
    pub fn select(label: &str, pill: Option<usize>) -> Self {
        let tag = normalize(label);
        if tag.is_empty() {
            TagSelection::NoTagActive
        } else {
            TagSelection::TagActive { tag, pill }
        }
    }

    /// Apply a click on the pill at `pill` labeled `label`: clicking the
    /// active tag clears it, anything else replaces the selection.
    pub fn click(&mut self, pill: usize, label: &str) {
        let tag = normalize(label);
        let clears = matches!(self, TagSelection::TagActive { tag: current, .. } if *current == tag);
        *self = if clears {
            TagSelection::NoTagActive
        } else {
            TagSelection::select(&tag, Some(pill))
        };
    }

    pub fn active_tag(&self) -> Option<&str> {
        match self {
            TagSelection::NoTagActive => None,
            TagSelection::TagActive { tag, .. } => Some(tag),
        }
    }

    pub fn active_pill(&self) -> Option<usize> {
        match self {
            TagSelection::NoTagActive => None,
            TagSelection::TagActive { pill, .. } => *pill,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    /// Raw query as typed.
    pub query: String,
    pub selection: TagSelection,
}

impl FilterState {
    pub fn new(query: impl Into<String>, tag: Option<&str>) -> Self {
        Self {
            query: query.into(),
            selection: tag
                .map(|t| TagSelection::select(t, None))
                .unwrap_or_default(),
        }
    }
}

/// Visibility of every indexed card for one filter state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    /// Parallel to [`CardIndex::cards`].
    pub visible: Vec<bool>,
    pub visible_count: usize,
}

impl FilterOutcome {
    pub fn shows_empty_state(&self) -> bool {
        self.visible_count == 0
    }

    pub fn visible_cards<'a>(
        &'a self,
        index: &'a CardIndex,
    ) -> impl Iterator<Item = &'a IndexedCard> + 'a {
        index
            .cards()
            .iter()
            .zip(&self.visible)
            .filter(|(_, visible)| **visible)
            .map(|(card, _)| card)
    }
}

/// Compute which cards match the state. Conjunctive over query terms, exact
/// over the active tag.
pub fn apply_filters(state: &FilterState, index: &CardIndex) -> FilterOutcome {
    let terms = query_terms(&state.query);
    let active_tag = state.selection.active_tag();
    let visible: Vec<bool> = index
        .cards()
        .iter()
        .map(|card| card.matches_terms(&terms) && active_tag.map_or(true, |tag| card.has_tag(tag)))
        .collect();
    let visible_count = visible.iter().filter(|v| **v).count();
    FilterOutcome {
        visible,
        visible_count,
    }
}
