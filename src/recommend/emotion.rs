use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Facial expression categories used as recommendation keys 🎭
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Neutral,
    Surprised,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Neutral,
        Emotion::Surprised,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Neutral => "neutral",
            Emotion::Surprised => "surprised",
        }
    }

    /// Map a detector label onto the closed set.
    /// Returns None for labels we have no playlist for (e.g. "fearful").
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.label().eq_ignore_ascii_case(label))
    }

    pub fn icon(self) -> &'static str {
        match self {
            Emotion::Happy => "😄",
            Emotion::Sad => "😢",
            Emotion::Angry => "😠",
            Emotion::Neutral => "😐",
            Emotion::Surprised => "😮",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown emotion label: {0}")]
pub struct UnknownEmotion(pub String);

impl FromStr for Emotion {
    type Err = UnknownEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownEmotion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(Emotion::from_label("happy"), Some(Emotion::Happy));
        assert_eq!(Emotion::from_label("Surprised"), Some(Emotion::Surprised));
        assert_eq!(Emotion::from_label(" ANGRY "), Some(Emotion::Angry));
    }

    #[test]
    fn test_unrecognized_labels() {
        assert_eq!(Emotion::from_label("fearful"), None);
        assert_eq!(Emotion::from_label("disgusted"), None);
        assert_eq!(Emotion::from_label(""), None);
        assert!("contempt".parse::<Emotion>().is_err());
    }

    #[test]
    fn test_label_round_trips_through_display() {
        for emotion in Emotion::ALL {
            assert_eq!(emotion.to_string().parse::<Emotion>(), Ok(emotion));
        }
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&Emotion::Neutral).unwrap();
        assert_eq!(json, "\"neutral\"");
    }
}
