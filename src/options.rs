use serde::{Deserialize, Serialize};

/// Target length of the generated summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    /// Accepts a canonical token or a legacy display label; anything else
    /// falls back to the default (medium).
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            s if s.eq_ignore_ascii_case("short") || s == "🚀短い" => Length::Short,
            s if s.eq_ignore_ascii_case("medium") || s == "🕒普通" => Length::Medium,
            s if s.eq_ignore_ascii_case("long") || s == "🔍詳細" => Length::Long,
            _ => Length::default(),
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Medium => "medium",
            Length::Long => "long",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Length::Short => "🚀短い",
            Length::Medium => "🕒普通",
            Length::Long => "🔍詳細",
        }
    }
}

/// Structural / tonal style of the summary. The two persona styles impose a
/// voice on the output beyond formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Bullet,
    Paragraph,
    Gal,
    Oneesan,
}

impl Style {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            s if s.eq_ignore_ascii_case("bullet") || s == "📝箇条書き" => Style::Bullet,
            s if s.eq_ignore_ascii_case("paragraph") || s == "📖説明文" => Style::Paragraph,
            s if s.eq_ignore_ascii_case("gal") || s == "🧒ギャル" => Style::Gal,
            s if s.eq_ignore_ascii_case("oneesan") || s == "👠おねーさん" => Style::Oneesan,
            _ => Style::default(),
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Style::Bullet => "bullet",
            Style::Paragraph => "paragraph",
            Style::Gal => "gal",
            Style::Oneesan => "oneesan",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Style::Bullet => "📝箇条書き",
            Style::Paragraph => "📖説明文",
            Style::Gal => "🧒ギャル",
            Style::Oneesan => "👠おねーさん",
        }
    }
}

/// Whether to gloss technical terms inline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Explanation {
    Include,
    #[default]
    Exclude,
}

impl Explanation {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            s if s.eq_ignore_ascii_case("include") || s == "✅いれる" => Explanation::Include,
            s if s.eq_ignore_ascii_case("exclude") || s == "❌いれない" => Explanation::Exclude,
            _ => Explanation::default(),
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Explanation::Include => "include",
            Explanation::Exclude => "exclude",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Explanation::Include => "✅いれる",
            Explanation::Exclude => "❌いれない",
        }
    }
}

/// Fully resolved summary options. Callers may hand in canonical tokens or
/// legacy display labels; by the time this struct exists, both have collapsed
/// to the same enum values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOptions {
    pub length: Length,
    pub style: Style,
    pub explanation: Explanation,
}

impl SummaryOptions {
    pub fn parse(length: &str, style: &str, explanation: &str) -> Self {
        SummaryOptions {
            length: Length::parse(length),
            style: Style::parse(style),
            explanation: Explanation::parse(explanation),
        }
    }

    /// Stable key fragment for caching results per option set.
    pub fn cache_key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.length.token(),
            self.style.token(),
            self.explanation.token()
        )
    }
}
