//! In-memory view of a rendered blog page: the parts of the document the page
//! script reads from and the classes and attributes it writes back.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const POST_CARD: &str = "post-card";
pub const PLACEHOLDER: &str = "placeholder";
pub const NO_RESULTS: &str = "no-results";
pub const HIDDEN: &str = "is-hidden";
pub const ACTIVE: &str = "is-active";
pub const OPEN: &str = "is-open";
pub const VISIBLE: &str = "is-visible";

/// Ordered set of class names on an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Parse a `class` attribute value.
    pub fn parse(attr: &str) -> Self {
        let mut list = Self::default();
        for name in attr.split_whitespace() {
            list.add(name);
        }
        list
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    pub fn add(&mut self, name: &str) {
        if !self.contains(name) {
            self.0.push(name.to_string());
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.0.retain(|c| c != name);
    }

    /// Add `name` when `force` is true, remove it otherwise.
    pub fn toggle(&mut self, name: &str, force: bool) {
        if force {
            self.add(name);
        } else {
            self.remove(name);
        }
    }

    /// Flip `name` and return whether it is now present.
    pub fn flip(&mut self, name: &str) -> bool {
        let present = !self.contains(name);
        self.toggle(name, present);
        present
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// One rendered post summary in the feed. Content is owned by the site
/// generator; the page script only toggles classes on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostCard {
    pub title: Option<String>,
    pub description: Option<String>,
    pub meta: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub classes: ClassList,
}

impl PostCard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            classes: ClassList::parse(POST_CARD),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Non-data cards (skeletons, the empty state) are never indexed.
    pub fn is_placeholder(&self) -> bool {
        self.classes.contains(PLACEHOLDER)
    }

    pub fn is_hidden(&self) -> bool {
        self.classes.contains(HIDDEN)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostFeed {
    pub cards: Vec<PostCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInput {
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    pub input: Option<SearchInput>,
}

/// A clickable tag filter in the tag stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPill {
    pub label: String,
    #[serde(default)]
    pub classes: ClassList,
    pub aria_pressed: Option<String>,
}

impl TagPill {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            classes: ClassList::parse("tag-pill"),
            aria_pressed: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.classes.contains(ACTIVE)
    }

    pub fn is_pressed(&self) -> bool {
        self.aria_pressed.as_deref() == Some("true")
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.classes.toggle(ACTIVE, active);
        self.aria_pressed = Some(active.to_string());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavToggle {
    pub aria_expanded: Option<String>,
}

impl NavToggle {
    pub fn is_expanded(&self) -> bool {
        self.aria_expanded.as_deref() == Some("true")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMenu {
    #[serde(default)]
    pub classes: ClassList,
    /// Number of links inside the menu.
    #[serde(default)]
    pub links: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollTopButton {
    #[serde(default)]
    pub classes: ClassList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// `lang` attribute of the document element.
    pub lang: Option<String>,
    pub nav_toggle: Option<NavToggle>,
    pub nav_menu: Option<NavMenu>,
    pub scroll_top: Option<ScrollTopButton>,
    /// Window vertical scroll offset in CSS pixels.
    #[serde(default)]
    pub scroll_y: f64,
    pub feed: Option<PostFeed>,
    pub search_form: Option<SearchForm>,
    #[serde(default)]
    pub tag_pills: Vec<TagPill>,
}

impl Page {
    /// Current value of the search control, if the page has one.
    pub fn search_value(&self) -> Option<&str> {
        self.search_form
            .as_ref()
            .and_then(|form| form.input.as_ref())
            .map(|input| input.value.as_str())
    }

    pub(crate) fn search_input_mut(&mut self) -> Option<&mut SearchInput> {
        self.search_form.as_mut().and_then(|form| form.input.as_mut())
    }

    /// Cards currently shown in the feed, placeholders included.
    pub fn visible_cards(&self) -> impl Iterator<Item = &PostCard> {
        self.feed
            .iter()
            .flat_map(|feed| feed.cards.iter())
            .filter(|card| !card.is_hidden())
    }
}
