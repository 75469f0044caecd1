//! The page script: every controller activated once against a page, and the
//! event dispatch that routes UI events to them.

use crate::controller::FilterController;
use crate::filter::FilterOutcome;
use crate::nav::NavController;
use crate::page::Page;
use crate::scroll::{ScrollRequest, ScrollTopController};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A discrete UI event on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    NavToggle,
    NavLinkClick,
    Scroll { y: f64 },
    ScrollTopClick,
    /// Typed input in the search control.
    SearchInput { value: String },
    /// The search control's own search/clear signal.
    Search { value: String },
    SearchSubmit,
    TagClick { pill: usize },
}

/// What handling an event produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dispatch {
    /// An activated controller handled the event.
    pub handled: bool,
    /// The browser's default action (form navigation) was suppressed.
    pub default_prevented: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_to: Option<ScrollRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterOutcome>,
}

impl Dispatch {
    fn filtered(outcome: FilterOutcome) -> Self {
        Self {
            handled: true,
            filter: Some(outcome),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageScript {
    nav: Option<NavController>,
    scroll: Option<ScrollTopController>,
    filter: Option<FilterController>,
}

impl PageScript {
    /// Activate each feature the page supports. Missing features stay off.
    pub fn activate(page: &mut Page) -> Self {
        let script = Self {
            nav: NavController::activate(page),
            scroll: ScrollTopController::activate(page),
            filter: FilterController::activate(page),
        };
        debug!(
            nav = script.nav.is_some(),
            scroll_top = script.scroll.is_some(),
            filter = script.filter.is_some(),
            "page script activated"
        );
        script
    }

    pub fn filter(&self) -> Option<&FilterController> {
        self.filter.as_ref()
    }

    pub fn filter_mut(&mut self) -> Option<&mut FilterController> {
        self.filter.as_mut()
    }

    /// Route one event. Events for features the page lacks are ignored.
    pub fn dispatch(&mut self, page: &mut Page, event: &PageEvent) -> Dispatch {
        match event {
            PageEvent::NavToggle => self.with_nav(|nav| nav.on_toggle(page)),
            PageEvent::NavLinkClick => self.with_nav(|nav| nav.on_link_click(page)),
            PageEvent::Scroll { y } => match &self.scroll {
                Some(scroll) => {
                    scroll.on_scroll(page, *y);
                    Dispatch {
                        handled: true,
                        ..Dispatch::default()
                    }
                }
                None => {
                    page.scroll_y = *y;
                    Dispatch::default()
                }
            },
            PageEvent::ScrollTopClick => match &self.scroll {
                Some(scroll) => Dispatch {
                    handled: true,
                    scroll_to: Some(scroll.on_click()),
                    ..Dispatch::default()
                },
                None => Dispatch::default(),
            },
            PageEvent::SearchInput { value } | PageEvent::Search { value } => match self.filter.as_mut() {
                Some(filter) if page.search_value().is_some() => Dispatch::filtered(filter.on_input(page, value)),
                _ => Dispatch::default(),
            },
            PageEvent::SearchSubmit => match self.filter.as_mut() {
                Some(filter) => Dispatch {
                    default_prevented: true,
                    ..Dispatch::filtered(filter.on_submit(page))
                },
                None => Dispatch::default(),
            },
            PageEvent::TagClick { pill } => self
                .filter
                .as_mut()
                .and_then(|filter| filter.on_tag_click(page, *pill))
                .map(Dispatch::filtered)
                .unwrap_or_default(),
        }
    }

    fn with_nav(&self, f: impl FnOnce(&NavController)) -> Dispatch {
        match &self.nav {
            Some(nav) => {
                f(nav);
                Dispatch {
                    handled: true,
                    ..Dispatch::default()
                }
            }
            None => Dispatch::default(),
        }
    }
}
