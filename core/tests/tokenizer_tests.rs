use postfilter_core::tokenizer::{normalize, query_terms};

#[test]
fn it_folds_case_and_accents() {
    assert_eq!(normalize("Café"), normalize("cafe"));
    assert_eq!(normalize("CRÈME Brûlée"), "creme brulee");
    // Already-decomposed input folds the same way.
    assert_eq!(normalize("Cafe\u{0301}"), "cafe");
}

#[test]
fn it_is_idempotent() {
    for s in [
        "  Hello,\n\tWORLD  ",
        "Ｆｕｌｌ　Ｗｉｄｔｈ",
        "ℌilbert ﬁle",
        "日本語 の ブログ",
        "Ça va? Äpfel & Öl",
        "",
    ] {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "input {s:?}");
    }
}

#[test]
fn it_applies_compatibility_forms() {
    assert_eq!(normalize("Ｒｕｓｔ"), "rust");
    assert_eq!(normalize("ﬁle"), "file");
    assert_eq!(normalize("a\u{00a0}\u{3000}b"), "a b");
}

#[test]
fn it_keeps_japanese_text_searchable() {
    let text = normalize("キャッシュ 入門");
    assert!(text.contains(&normalize("キャッシュ")));
}

#[test]
fn it_splits_queries_into_terms() {
    assert_eq!(query_terms("  Alpha   GAMMA "), vec!["alpha", "gamma"]);
    assert!(query_terms(" \t ").is_empty());
}
