//! On-disk export of extracted card indexes: `cards.jsonl` holds one
//! [`PageRecord`] per line, `meta.json` describes the export.

use crate::filter::{apply_filters, FilterState};
use crate::index::{CardIndex, IndexedCard};
use crate::locale::Locale;
use crate::page::Page;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaFile {
    pub num_pages: usize,
    pub num_cards: usize,
    pub created_at: String,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedCard {
    /// Raw title, kept for display.
    pub title: String,
    #[serde(flatten)]
    pub entry: IndexedCard,
}

/// Indexed cards of one rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page path relative to the site root.
    pub source: String,
    pub locale: Locale,
    pub cards: Vec<ExportedCard>,
}

impl PageRecord {
    /// Index a page's feed. `None` when the page has no real cards.
    pub fn from_page(source: impl Into<String>, page: &Page) -> Option<Self> {
        let feed = page.feed.as_ref()?;
        let index = CardIndex::build(&feed.cards)?;
        let cards = index
            .cards()
            .iter()
            .map(|entry| ExportedCard {
                title: feed.cards[entry.card].title.clone().unwrap_or_default(),
                entry: entry.clone(),
            })
            .collect();
        Some(Self {
            source: source.into(),
            locale: Locale::from_lang(page.lang.as_deref()),
            cards,
        })
    }

    /// Cards matching `state`, in page order.
    pub fn matching(&self, state: &FilterState) -> Vec<&ExportedCard> {
        let entries = self.cards.iter().map(|c| c.entry.clone()).collect();
        let Some(index) = CardIndex::from_entries(entries) else {
            return Vec::new();
        };
        let outcome = apply_filters(state, &index);
        self.cards
            .iter()
            .zip(&outcome.visible)
            .filter(|(_, visible)| **visible)
            .map(|(card, _)| card)
            .collect()
    }
}

pub struct IndexPaths {
    pub root: PathBuf,
}

impl IndexPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    fn cards(&self) -> PathBuf { self.root.join("cards.jsonl") }
    fn meta(&self) -> PathBuf { self.root.join("meta.json") }
}

pub fn save_pages(paths: &IndexPaths, pages: &[PageRecord]) -> Result<()> {
    create_dir_all(&paths.root)?;
    let f = File::create(paths.cards()).with_context(|| format!("creating {}", paths.cards().display()))?;
    let mut out = BufWriter::new(f);
    for page in pages {
        serde_json::to_writer(&mut out, page)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

pub fn load_pages(paths: &IndexPaths) -> Result<Vec<PageRecord>> {
    let f = File::open(paths.cards()).with_context(|| format!("opening {}", paths.cards().display()))?;
    let mut pages = Vec::new();
    for (lineno, line) in BufReader::new(f).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let page = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}", paths.cards().display(), lineno + 1))?;
        pages.push(page);
    }
    Ok(pages)
}

pub fn save_meta(paths: &IndexPaths, meta: &MetaFile) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut f = File::create(paths.meta())?;
    let json = serde_json::to_string_pretty(meta)?;
    f.write_all(json.as_bytes())?;
    Ok(())
}

pub fn load_meta(paths: &IndexPaths) -> Result<MetaFile> {
    let mut f = File::open(paths.meta()).with_context(|| format!("opening {}", paths.meta().display()))?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    let meta: MetaFile = serde_json::from_str(&buf)?;
    Ok(meta)
}
