//! Search and tag filtering for the post feed.
//!
//! [`FilterController`] owns the card index and the filter state for one
//! activation. Every event updates the state, recomputes visibility with the
//! pure [`apply_filters`], then writes the result back to the page in
//! [`FilterController::refresh`].

use crate::filter::{apply_filters, FilterOutcome, FilterState, TagSelection};
use crate::index::{CardId, CardIndex};
use crate::locale::Locale;
use crate::page::{ClassList, Page, PostCard, PostFeed, HIDDEN, NO_RESULTS, PLACEHOLDER, POST_CARD};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FilterController {
    index: CardIndex,
    state: FilterState,
    empty_state: CardId,
}

impl FilterController {
    /// Wire the filter to a page. Returns `None`, leaving the page untouched,
    /// when the page has no search form, no feed, or no real cards.
    pub fn activate(page: &mut Page) -> Option<Self> {
        page.search_form.as_ref()?;
        let locale = Locale::from_lang(page.lang.as_deref());
        let feed = page.feed.as_mut()?;
        let Some(index) = CardIndex::build(&feed.cards) else {
            debug!("post feed has no cards; filtering disabled");
            return None;
        };
        let empty_state = ensure_empty_state(feed, locale);

        let mut controller = Self {
            index,
            state: FilterState {
                query: page.search_value().unwrap_or_default().to_string(),
                selection: TagSelection::NoTagActive,
            },
            empty_state,
        };

        if let Some((pos, pill)) = page.tag_pills.iter().enumerate().find(|(_, p)| p.is_active()) {
            controller.state.selection = TagSelection::select(&pill.label, Some(pos));
            controller.render_pills(page);
        }

        debug!(
            num_cards = controller.index.len(),
            ?locale,
            active_tag = controller.state.selection.active_tag(),
            "filter activated"
        );
        controller.refresh(page);
        Some(controller)
    }

    pub fn index(&self) -> &CardIndex {
        &self.index
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Feed position of the empty-state card.
    pub fn empty_state(&self) -> CardId {
        self.empty_state
    }

    /// Typed input in the search control.
    pub fn on_input(&mut self, page: &mut Page, value: &str) -> FilterOutcome {
        if let Some(input) = page.search_input_mut() {
            input.value = value.to_string();
        }
        self.state.query = value.to_string();
        self.refresh(page)
    }

    /// The control's own search signal (enter, clear button). Same handling
    /// as typed input.
    pub fn on_search(&mut self, page: &mut Page, value: &str) -> FilterOutcome {
        self.on_input(page, value)
    }

    /// Form submission only recomputes; it never navigates.
    pub fn on_submit(&mut self, page: &mut Page) -> FilterOutcome {
        self.refresh(page)
    }

    /// Click on the tag pill at `pill`. Returns `None` for an unknown pill.
    pub fn on_tag_click(&mut self, page: &mut Page, pill: usize) -> Option<FilterOutcome> {
        let label = page.tag_pills.get(pill)?.label.clone();
        self.state.selection.click(pill, &label);
        debug!(pill, active_tag = self.state.selection.active_tag(), "tag pill clicked");
        self.render_pills(page);
        Some(self.refresh(page))
    }

    /// Replace the tag selection without going through a pill.
    pub fn select_tag(&mut self, page: &mut Page, selection: TagSelection) -> FilterOutcome {
        self.state.selection = selection;
        self.render_pills(page);
        self.refresh(page)
    }

    /// Recompute visibility and apply it to the page. The query is re-read
    /// from the search control when the page has one.
    pub fn refresh(&mut self, page: &mut Page) -> FilterOutcome {
        if let Some(value) = page.search_value() {
            self.state.query = value.to_string();
        }
        let outcome = apply_filters(&self.state, &self.index);
        if let Some(feed) = page.feed.as_mut() {
            self.render_cards(feed, &outcome);
        }
        debug!(
            visible = outcome.visible_count,
            total = self.index.len(),
            "filters applied"
        );
        outcome
    }

    fn render_cards(&self, feed: &mut PostFeed, outcome: &FilterOutcome) {
        for (entry, visible) in self.index.cards().iter().zip(&outcome.visible) {
            if let Some(card) = feed.cards.get_mut(entry.card) {
                card.classes.toggle(HIDDEN, !visible);
            }
        }
        if let Some(card) = feed.cards.get_mut(self.empty_state) {
            card.classes.toggle(HIDDEN, !outcome.shows_empty_state());
        }
    }

    fn render_pills(&self, page: &mut Page) {
        let active = self.state.selection.active_pill();
        for (pos, pill) in page.tag_pills.iter_mut().enumerate() {
            pill.set_active(active == Some(pos));
        }
    }
}

/// Find the feed's empty-state card or append a localized one.
fn ensure_empty_state(feed: &mut PostFeed, locale: Locale) -> CardId {
    if let Some(pos) = feed.cards.iter().position(|c| c.classes.contains(NO_RESULTS)) {
        return pos;
    }
    let text = locale.empty_state();
    let mut classes = ClassList::default();
    for name in [POST_CARD, PLACEHOLDER, NO_RESULTS, HIDDEN] {
        classes.add(name);
    }
    feed.cards.push(PostCard {
        title: Some(text.title.to_string()),
        description: Some(text.body.to_string()),
        meta: Some(format!("{} {}", text.status_label, text.status_value)),
        tags: Vec::new(),
        classes,
    });
    feed.cards.len() - 1
}
