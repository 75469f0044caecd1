use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// CSS selectors used to locate the page script's elements in rendered HTML.
/// Every field falls back to the blog theme's markup when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub feed: String,
    pub card: String,
    pub card_title: String,
    pub card_description: String,
    pub card_meta: String,
    pub card_tag: String,
    pub search_form: String,
    /// Matched inside the search form.
    pub search_input: String,
    pub tag_pill: String,
    pub nav_toggle: String,
    pub nav_menu: String,
    /// Matched inside the nav menu.
    pub nav_link: String,
    pub scroll_top: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            feed: ".post-feed".into(),
            card: ".post-card".into(),
            card_title: ".post-title".into(),
            card_description: ".post-description".into(),
            card_meta: ".post-meta".into(),
            card_tag: ".post-tags .tag-pill".into(),
            search_form: ".blog-search".into(),
            search_input: r#"input[type="search"]"#.into(),
            tag_pill: ".tag-stack .tag-pill".into(),
            nav_toggle: "[data-nav-toggle]".into(),
            nav_menu: "[data-nav-menu]".into(),
            nav_link: "a".into(),
            scroll_top: "#scrollTopBtn".into(),
        }
    }
}

impl SelectorConfig {
    /// Load overrides from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("opening selector config {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parsing selector config {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SelectorConfig = serde_json::from_str(r#"{"feed": "main .cards"}"#).unwrap();
        assert_eq!(config.feed, "main .cards");
        assert_eq!(config.card, ".post-card");
    }
}
