use anyhow::{Context, Result};
use postfilter_core::extract::{parse_page, PageSelectors};
use postfilter_core::persist::{load_pages, save_meta, save_pages, IndexPaths, MetaFile, PageRecord, FORMAT_VERSION};
use postfilter_core::tokenizer::normalize;
use postfilter_core::{Dispatch, FilterState, Page, PageEvent, PageScript, TagSelection};
use serde::Serialize;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Serialize)]
pub struct CardHit {
    /// Position in the page's feed.
    pub position: usize,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct FilterReport {
    pub source: String,
    pub query: String,
    pub tag: Option<String>,
    pub visible_count: usize,
    pub empty_state: bool,
    pub cards: Vec<CardHit>,
}

#[derive(Serialize)]
struct TraceLine<'a> {
    step: usize,
    event: &'a PageEvent,
    dispatch: &'a Dispatch,
}

pub fn load_page(path: &Path, selectors: &PageSelectors) -> Result<Page> {
    let html = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_page(&html, selectors))
}

fn html_files(input: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() {
                if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                    if matches!(ext, "html" | "htm") {
                        files.push(p.to_path_buf());
                    }
                }
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    }
    files
}

/// Extract the card index of every rendered page under `input` and write the
/// export to `output`.
pub fn build_index(input: &Path, output: &Path, selectors: &PageSelectors) -> Result<MetaFile> {
    let paths = IndexPaths::new(output);
    let mut records = Vec::new();
    for file in html_files(input) {
        let page = load_page(&file, selectors)?;
        let source = file.strip_prefix(input).ok().filter(|p| !p.as_os_str().is_empty()).unwrap_or(file.as_path());
        match PageRecord::from_page(source.to_string_lossy(), &page) {
            Some(record) => {
                tracing::debug!(source = %record.source, num_cards = record.cards.len(), "indexed page");
                records.push(record);
            }
            None => tracing::debug!(file = %file.display(), "no post cards; skipped"),
        }
    }

    let num_cards: usize = records.iter().map(|r| r.cards.len()).sum();
    tracing::info!(num_pages = records.len(), num_cards, "extracted card indexes");
    save_pages(&paths, &records)?;
    let meta = MetaFile {
        num_pages: records.len(),
        num_cards,
        created_at: time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339).unwrap_or_else(|_| "".into()),
        version: FORMAT_VERSION,
    };
    save_meta(&paths, &meta)?;
    tracing::info!(output = %output.display(), "index export complete");
    Ok(meta)
}

/// Run the page's own filter with `query` typed in and `tag` selected.
pub fn filter_page(path: &Path, query: &str, tag: Option<&str>, selectors: &PageSelectors) -> Result<FilterReport> {
    let mut page = load_page(path, selectors)?;
    let mut script = PageScript::activate(&mut page);
    let source = path.display().to_string();
    let Some(filter) = script.filter_mut() else {
        tracing::info!(%source, "page has no filterable feed");
        return Ok(FilterReport { source, query: query.to_string(), tag: None, visible_count: 0, empty_state: false, cards: Vec::new() });
    };

    let mut outcome = filter.on_input(&mut page, query);
    if let Some(tag) = tag {
        let wanted = normalize(tag);
        if filter.state().selection.active_tag() != Some(wanted.as_str()) {
            outcome = match page.tag_pills.iter().position(|p| normalize(&p.label) == wanted) {
                Some(pill) => filter.on_tag_click(&mut page, pill).unwrap_or(outcome),
                None => filter.select_tag(&mut page, TagSelection::select(&wanted, None)),
            };
        }
    }

    let cards = page.feed.as_ref().map(|feed| &feed.cards[..]).unwrap_or_default();
    let hits = outcome
        .visible_cards(filter.index())
        .map(|entry| CardHit {
            position: entry.card,
            title: cards.get(entry.card).and_then(|c| c.title.clone()).unwrap_or_default(),
        })
        .collect();
    Ok(FilterReport {
        source,
        query: query.to_string(),
        tag: filter.state().selection.active_tag().map(str::to_string),
        visible_count: outcome.visible_count,
        empty_state: outcome.shows_empty_state(),
        cards: hits,
    })
}

/// Filter every page of an exported index.
pub fn filter_index(dir: &Path, query: &str, tag: Option<&str>) -> Result<Vec<FilterReport>> {
    let state = FilterState::new(query, tag);
    let pages = load_pages(&IndexPaths::new(dir))?;
    let reports = pages
        .iter()
        .map(|record| {
            let hits: Vec<CardHit> = record
                .matching(&state)
                .into_iter()
                .map(|card| CardHit { position: card.entry.card, title: card.title.clone() })
                .collect();
            FilterReport {
                source: record.source.clone(),
                query: query.to_string(),
                tag: state.selection.active_tag().map(str::to_string),
                visible_count: hits.len(),
                empty_state: hits.is_empty(),
                cards: hits,
            }
        })
        .collect();
    Ok(reports)
}

/// Activate the page script, dispatch each JSON event line from `events`,
/// and write one trace line per event to `out`. Returns the final page.
pub fn replay<W: Write>(page_path: &Path, events: &Path, selectors: &PageSelectors, out: &mut W) -> Result<Page> {
    let mut page = load_page(page_path, selectors)?;
    let mut script = PageScript::activate(&mut page);
    let f = fs::File::open(events).with_context(|| format!("opening {}", events.display()))?;
    let mut step = 0;
    for (lineno, line) in BufReader::new(f).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let event: PageEvent = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid event", events.display(), lineno + 1))?;
        let dispatch = script.dispatch(&mut page, &event);
        serde_json::to_writer(&mut *out, &TraceLine { step, event: &event, dispatch: &dispatch })?;
        out.write_all(b"\n")?;
        step += 1;
    }
    tracing::info!(events = step, "replay complete");
    Ok(page)
}
