use postfilter_core::extract::{parse_page, PageSelectors};
use postfilter_core::page::{Page, HIDDEN};
use postfilter_core::{PageEvent, PageScript};

const BLOG: &str = r#"<!doctype html>
<html lang="en">
<body>
  <button data-nav-toggle aria-expanded="false">Menu</button>
  <nav data-nav-menu><a href="/en/">Home</a><a href="/en/blog/">Blog</a></nav>
  <form class="blog-search" action="/search">
    <input type="search" name="q" value="">
  </form>
  <div class="tag-stack">
    <button class="tag-pill" aria-pressed="false">Systems</button>
    <button class="tag-pill" aria-pressed="false">Life</button>
    <button class="tag-pill" aria-pressed="false">Storage</button>
  </div>
  <section class="post-feed">
    <article class="post-card">
      <a class="post-link" href="/en/blog/intro-to-caching/">
        <div class="post-meta"><span>Systems</span><span>2024-03-01</span></div>
        <h2 class="post-title">Intro to Caching</h2>
        <p class="post-description">Why memory is faster than disk.</p>
      </a>
      <ul class="post-tags"><li class="tag-pill">systems</li></ul>
    </article>
    <article class="post-card">
      <h2 class="post-title">Garden Notes</h2>
      <p class="post-description">Tomatoes and basil.</p>
      <ul class="post-tags"><li class="tag-pill">life</li></ul>
    </article>
    <article class="post-card">
      <h2 class="post-title">Cache Eviction Deep Dive</h2>
      <ul class="post-tags"><li class="tag-pill">systems</li><li class="tag-pill">storage</li></ul>
    </article>
  </section>
  <button id="scrollTopBtn" class="scroll-top">Top</button>
</body>
</html>"#;

fn load(html: &str) -> Page {
    parse_page(html, PageSelectors::standard())
}

fn visible_titles(page: &Page) -> Vec<String> {
    page.feed
        .as_ref()
        .unwrap()
        .cards
        .iter()
        .filter(|c| !c.is_placeholder() && !c.is_hidden())
        .map(|c| c.title.clone().unwrap_or_default())
        .collect()
}

fn empty_state_shown(page: &Page) -> bool {
    page.feed
        .as_ref()
        .unwrap()
        .cards
        .iter()
        .any(|c| c.is_placeholder() && !c.is_hidden())
}

fn input(value: &str) -> PageEvent {
    PageEvent::SearchInput { value: value.to_string() }
}

#[test]
fn activation_shows_all_cards() {
    let mut page = load(BLOG);
    let _script = PageScript::activate(&mut page);
    assert_eq!(visible_titles(&page).len(), 3);
    assert!(!empty_state_shown(&page));
}

#[test]
fn caching_walkthrough() {
    let mut page = load(BLOG);
    let mut script = PageScript::activate(&mut page);

    script.dispatch(&mut page, &input("cach"));
    assert_eq!(visible_titles(&page), vec!["Intro to Caching", "Cache Eviction Deep Dive"]);

    script.dispatch(&mut page, &PageEvent::TagClick { pill: 0 });
    assert_eq!(visible_titles(&page), vec!["Intro to Caching", "Cache Eviction Deep Dive"]);

    script.dispatch(&mut page, &PageEvent::TagClick { pill: 2 });
    assert_eq!(visible_titles(&page), vec!["Cache Eviction Deep Dive"]);
    assert!(page.tag_pills[2].is_active());
    assert!(!page.tag_pills[0].is_active());

    script.dispatch(&mut page, &PageEvent::Search { value: String::new() });
    assert_eq!(visible_titles(&page), vec!["Cache Eviction Deep Dive"]);
    assert!(!empty_state_shown(&page));
}

#[test]
fn double_click_restores_query_results() {
    let mut page = load(BLOG);
    let mut script = PageScript::activate(&mut page);
    script.dispatch(&mut page, &input("notes"));
    let before = visible_titles(&page);

    script.dispatch(&mut page, &PageEvent::TagClick { pill: 0 });
    assert!(visible_titles(&page).is_empty());
    script.dispatch(&mut page, &PageEvent::TagClick { pill: 0 });

    assert_eq!(visible_titles(&page), before);
    assert_eq!(script.filter().unwrap().state().selection.active_tag(), None);
    assert!(page.tag_pills.iter().all(|p| !p.is_pressed()));
}

#[test]
fn no_match_shows_empty_state() {
    let mut page = load(BLOG);
    let mut script = PageScript::activate(&mut page);
    let dispatch = script.dispatch(&mut page, &input("kubernetes"));
    assert_eq!(dispatch.filter.unwrap().visible_count, 0);
    assert!(visible_titles(&page).is_empty());
    assert!(empty_state_shown(&page));

    script.dispatch(&mut page, &input(""));
    assert!(!empty_state_shown(&page));
}

#[test]
fn query_matches_meta_and_tags() {
    let mut page = load(BLOG);
    let mut script = PageScript::activate(&mut page);
    script.dispatch(&mut page, &input("2024-03"));
    assert_eq!(visible_titles(&page), vec!["Intro to Caching"]);
    script.dispatch(&mut page, &input("STORAGE"));
    assert_eq!(visible_titles(&page), vec!["Cache Eviction Deep Dive"]);
}

#[test]
fn submit_is_prevented_and_refilters() {
    let mut page = load(BLOG);
    let mut script = PageScript::activate(&mut page);
    page.search_form.as_mut().unwrap().input.as_mut().unwrap().value = "garden".into();
    let dispatch = script.dispatch(&mut page, &PageEvent::SearchSubmit);
    assert!(dispatch.default_prevented);
    assert_eq!(visible_titles(&page), vec!["Garden Notes"]);
}

#[test]
fn tag_click_uses_value_set_without_input_event() {
    let mut page = load(BLOG);
    let mut script = PageScript::activate(&mut page);
    page.search_form.as_mut().unwrap().input.as_mut().unwrap().value = "eviction".into();
    let dispatch = script.dispatch(&mut page, &PageEvent::TagClick { pill: 0 });
    assert_eq!(dispatch.filter.unwrap().visible_count, 1);
    assert_eq!(visible_titles(&page), vec!["Cache Eviction Deep Dive"]);
}

#[test]
fn pre_active_pill_applies_at_activation() {
    let html = BLOG.replace(
        r#"<button class="tag-pill" aria-pressed="false">Life</button>"#,
        r#"<button class="tag-pill is-active">Life</button>"#,
    );
    let mut page = load(&html);
    let mut script = PageScript::activate(&mut page);
    assert_eq!(visible_titles(&page), vec!["Garden Notes"]);
    assert!(page.tag_pills[1].is_pressed());
    assert_eq!(page.tag_pills[0].aria_pressed.as_deref(), Some("false"));

    script.dispatch(&mut page, &PageEvent::TagClick { pill: 1 });
    assert_eq!(visible_titles(&page).len(), 3);
}

#[test]
fn prefilled_query_applies_at_activation() {
    let html = BLOG.replace(r#"name="q" value="""#, r#"name="q" value="garden""#);
    let mut page = load(&html);
    let _script = PageScript::activate(&mut page);
    assert_eq!(visible_titles(&page), vec!["Garden Notes"]);
}

#[test]
fn japanese_empty_state() {
    let html = BLOG.replace(r#"<html lang="en">"#, r#"<html lang="ja">"#);
    let mut page = load(&html);
    let mut script = PageScript::activate(&mut page);
    script.dispatch(&mut page, &input("zzz"));
    let feed = page.feed.as_ref().unwrap();
    let empty = feed.cards.iter().find(|c| c.is_placeholder()).unwrap();
    assert_eq!(empty.title.as_deref(), Some("該当する記事がありません"));
    assert_eq!(empty.meta.as_deref(), Some("状態 検索結果なし"));
    assert!(!empty.classes.contains(HIDDEN));
}

#[test]
fn feed_without_cards_is_untouched() {
    let html = r#"<html><body>
        <form class="blog-search"><input type="search"></form>
        <div class="tag-stack"><button class="tag-pill">Rust</button></div>
        <section class="post-feed"><article class="post-card placeholder">Coming soon</article></section>
    </body></html>"#;
    let mut page = load(html);
    let before = page.clone();
    let mut script = PageScript::activate(&mut page);
    assert!(script.filter().is_none());
    let dispatch = script.dispatch(&mut page, &PageEvent::TagClick { pill: 0 });
    assert!(!dispatch.handled);
    assert_eq!(page, before);
}

#[test]
fn nav_and_scroll_controls() {
    let mut page = load(BLOG);
    let mut script = PageScript::activate(&mut page);
    assert_eq!(page.nav_menu.as_ref().unwrap().links, 2);

    script.dispatch(&mut page, &PageEvent::NavToggle);
    assert!(page.nav_toggle.as_ref().unwrap().is_expanded());
    script.dispatch(&mut page, &PageEvent::NavLinkClick);
    assert!(!page.nav_toggle.as_ref().unwrap().is_expanded());

    script.dispatch(&mut page, &PageEvent::Scroll { y: 800.0 });
    assert!(page.scroll_top.as_ref().unwrap().classes.contains("is-visible"));
    let dispatch = script.dispatch(&mut page, &PageEvent::ScrollTopClick);
    assert_eq!(dispatch.scroll_to.map(|s| s.top), Some(0.0));
}
