//! Build a [`Page`] from rendered HTML.

use crate::config::SelectorConfig;
use crate::page::{
    ClassList, NavMenu, NavToggle, Page, PostCard, PostFeed, ScrollTopButton, SearchForm,
    SearchInput, TagPill,
};
use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

lazy_static! {
    static ref DEFAULT_SELECTORS: PageSelectors =
        PageSelectors::compile(&SelectorConfig::default()).expect("valid default selectors");
}

/// Compiled form of a [`SelectorConfig`].
#[derive(Debug, Clone)]
pub struct PageSelectors {
    feed: Selector,
    card: Selector,
    card_title: Selector,
    card_description: Selector,
    card_meta: Selector,
    card_tag: Selector,
    search_form: Selector,
    search_input: Selector,
    tag_pill: Selector,
    nav_toggle: Selector,
    nav_menu: Selector,
    nav_link: Selector,
    scroll_top: Selector,
}

fn compile(name: &str, css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid {name} selector `{css}`: {e:?}"))
}

impl PageSelectors {
    pub fn compile(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            feed: compile("feed", &config.feed)?,
            card: compile("card", &config.card)?,
            card_title: compile("card_title", &config.card_title)?,
            card_description: compile("card_description", &config.card_description)?,
            card_meta: compile("card_meta", &config.card_meta)?,
            card_tag: compile("card_tag", &config.card_tag)?,
            search_form: compile("search_form", &config.search_form)?,
            search_input: compile("search_input", &config.search_input)?,
            tag_pill: compile("tag_pill", &config.tag_pill)?,
            nav_toggle: compile("nav_toggle", &config.nav_toggle)?,
            nav_menu: compile("nav_menu", &config.nav_menu)?,
            nav_link: compile("nav_link", &config.nav_link)?,
            scroll_top: compile("scroll_top", &config.scroll_top)?,
        })
    }

    /// Selectors for the blog theme's stock markup.
    pub fn standard() -> &'static PageSelectors {
        &DEFAULT_SELECTORS
    }
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope.select(sel).next().map(text_of)
}

fn classes_of(el: ElementRef<'_>) -> ClassList {
    ClassList::parse(el.value().attr("class").unwrap_or_default())
}

fn extract_card(el: ElementRef<'_>, sel: &PageSelectors) -> PostCard {
    PostCard {
        title: first_text(el, &sel.card_title),
        description: first_text(el, &sel.card_description),
        meta: first_text(el, &sel.card_meta),
        tags: el.select(&sel.card_tag).map(text_of).collect(),
        classes: classes_of(el),
    }
}

/// Extract the page script's view of a rendered document. Anything the
/// markup lacks is left absent.
pub fn parse_page(html: &str, sel: &PageSelectors) -> Page {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let feed = doc.select(&sel.feed).next().map(|feed| PostFeed {
        cards: feed.select(&sel.card).map(|card| extract_card(card, sel)).collect(),
    });

    let search_form = doc.select(&sel.search_form).next().map(|form| SearchForm {
        input: form.select(&sel.search_input).next().map(|input| SearchInput {
            value: input.value().attr("value").unwrap_or_default().to_string(),
        }),
    });

    let tag_pills = doc
        .select(&sel.tag_pill)
        .map(|pill| TagPill {
            label: text_of(pill),
            classes: classes_of(pill),
            aria_pressed: pill.value().attr("aria-pressed").map(str::to_string),
        })
        .collect();

    let nav_toggle = doc.select(&sel.nav_toggle).next().map(|toggle| NavToggle {
        aria_expanded: toggle.value().attr("aria-expanded").map(str::to_string),
    });

    let nav_menu = doc.select(&sel.nav_menu).next().map(|menu| NavMenu {
        classes: classes_of(menu),
        links: menu.select(&sel.nav_link).count(),
    });

    let scroll_top = doc
        .select(&sel.scroll_top)
        .next()
        .map(|button| ScrollTopButton {
            classes: classes_of(button),
        });

    Page {
        lang: root.value().attr("lang").map(str::to_string),
        nav_toggle,
        nav_menu,
        scroll_top,
        scroll_y: 0.0,
        feed,
        search_form,
        tag_pills,
    }
}
