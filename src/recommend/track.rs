use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
}

impl Language {
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recommended song with its external references 🎵
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Track {
    pub title: &'static str,
    /// YouTube video id
    pub video_id: &'static str,
    /// Spotify track id
    pub spotify_id: &'static str,
    pub language: Language,
}

/// Language facet shown as the All / English / Hindi toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageFilter {
    #[default]
    All,
    English,
    Hindi,
}

impl LanguageFilter {
    pub const ALL: [LanguageFilter; 3] = [
        LanguageFilter::All,
        LanguageFilter::English,
        LanguageFilter::Hindi,
    ];

    pub fn matches(self, language: Language) -> bool {
        match self {
            LanguageFilter::All => true,
            LanguageFilter::English => language == Language::English,
            LanguageFilter::Hindi => language == Language::Hindi,
        }
    }

    /// Display name used on the toggle buttons
    pub fn title(self) -> &'static str {
        match self {
            LanguageFilter::All => "All",
            LanguageFilter::English => "English",
            LanguageFilter::Hindi => "Hindi",
        }
    }

    pub fn next(self) -> Self {
        match self {
            LanguageFilter::All => LanguageFilter::English,
            LanguageFilter::English => LanguageFilter::Hindi,
            LanguageFilter::Hindi => LanguageFilter::All,
        }
    }
}

impl FromStr for LanguageFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(LanguageFilter::All),
            "english" => Ok(LanguageFilter::English),
            "hindi" => Ok(LanguageFilter::Hindi),
            other => Err(format!("unknown language filter '{}' (expected all, english or hindi)", other)),
        }
    }
}

/// Subsequence of `tracks` matching `filter`, in table order.
pub fn filter_tracks(tracks: &[Track], filter: LanguageFilter) -> Vec<&Track> {
    tracks.iter().filter(|t| filter.matches(t.language)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [Track; 3] = [
        Track { title: "A", video_id: "a", spotify_id: "1", language: Language::Hindi },
        Track { title: "B", video_id: "b", spotify_id: "2", language: Language::English },
        Track { title: "C", video_id: "c", spotify_id: "3", language: Language::Hindi },
    ];

    #[test]
    fn test_all_keeps_everything_in_order() {
        let titles: Vec<_> = filter_tracks(&SAMPLE, LanguageFilter::All)
            .iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_language_filter_preserves_relative_order() {
        let hindi: Vec<_> = filter_tracks(&SAMPLE, LanguageFilter::Hindi)
            .iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(hindi, vec!["A", "C"]);

        let english: Vec<_> = filter_tracks(&SAMPLE, LanguageFilter::English)
            .iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(english, vec!["B"]);
    }

    #[test]
    fn test_filter_cycle_returns_to_start() {
        let f = LanguageFilter::All;
        assert_eq!(f.next().next().next(), LanguageFilter::All);
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!("Hindi".parse::<LanguageFilter>(), Ok(LanguageFilter::Hindi));
        assert!("tamil".parse::<LanguageFilter>().is_err());
    }
}
