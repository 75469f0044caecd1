use serde::{Deserialize, Serialize};

/// The two page languages the blog is published in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

/// Copy shown inside the empty-state card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStateText {
    pub status_label: &'static str,
    pub status_value: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

const EN_EMPTY_STATE: EmptyStateText = EmptyStateText {
    status_label: "Status",
    status_value: "No matches",
    title: "No articles found",
    body: "No posts match your filters. Try a different keyword or tag.",
};

const JA_EMPTY_STATE: EmptyStateText = EmptyStateText {
    status_label: "状態",
    status_value: "検索結果なし",
    title: "該当する記事がありません",
    body: "条件に一致する記事が見つかりません。キーワードやタグを変えて再度お試しください。",
};

impl Locale {
    /// Resolve the document `lang` attribute. Anything but `ja` is English.
    pub fn from_lang(lang: Option<&str>) -> Self {
        match lang {
            Some("ja") => Locale::Ja,
            _ => Locale::En,
        }
    }

    pub fn empty_state(self) -> EmptyStateText {
        match self {
            Locale::En => EN_EMPTY_STATE,
            Locale::Ja => JA_EMPTY_STATE,
        }
    }
}
