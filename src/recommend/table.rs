use super::emotion::Emotion;
use super::track::{Language, Track};

const fn track(
    title: &'static str,
    video_id: &'static str,
    spotify_id: &'static str,
    language: Language,
) -> Track {
    Track {
        title,
        video_id,
        spotify_id,
        language,
    }
}

use Language::{English, Hindi};

static HAPPY: [Track; 4] = [
    track("Happy - Pharrell Williams", "ZbZSe6N_BXs", "60nZcImufyMA1MKQY3dcCH", English),
    track("I Gotta Feeling - The Black Eyed Peas", "uSD4vsh1zDA", "4vp2J1l5RD0FQAb5CtkY1c", English),
    track("Badtameez Dil - Yeh Jawaani Hai Deewani", "9mWdw-09dso", "0bqC0AenGl5JlQn0mhQKhK", Hindi),
    track("London Thumakda - Queen", "udra3Mfw2oo", "0QUtFxdQy0GJCzSXLUeOL7", Hindi),
];

static SAD: [Track; 4] = [
    track("Someone Like You - Adele", "hLQl3WQQoQ0", "1HNE2PX70ztbEl6MLxrpNL", English),
    track("Channa Mereya - Ae Dil Hai Mushkil", "284Ov7ysmfA", "2ZUkqvdT4kCPwpm8amF3ZE", Hindi),
    track("Tum Hi Ho - Aashiqui 2", "IJq0yyWug1k", "1DTMaEqXqnJgR7loF8lF1D", Hindi),
    track("Agar Tum Saath Ho - Tamasha", "sK7riqg2mr4", "4cEfZGJPJHyFtBm91bQZfU", Hindi),
];

static ANGRY: [Track; 3] = [
    track("Break Stuff - Limp Bizkit", "ZpUYjpKg9KY", "5cZqsjVs6MevCnAkasbEOX", English),
    track("Chikni Chameli - Agneepath", "MQM7CNoAsBI", "4z0H9aGEYpTFmKGYrY3HoR", Hindi),
    track("Malhari - Bajirao Mastani", "l_MyUGq7pgs", "0VHFqAKzDMDGrqjkAHbN9O", Hindi),
];

static NEUTRAL: [Track; 3] = [
    track("Perfect - Ed Sheeran", "2Vv-BfVoq4g", "0tgVpDi06FyKpA1z0VMD4v", English),
    track("Tum Se Hi - Jab We Met", "mt9xg0mmt28", "1DTMaEqXqnJgR7loF8lF1D", Hindi),
    track("Kal Ho Naa Ho - Title Track", "g0eO74UmRBs", "5nNmj1cLH3r4aA4XDJ2bgY", Hindi),
];

static SURPRISED: [Track; 3] = [
    track("Wow - Post Malone", "393C3pr2ioY", "7xQAfvXzm3AkraOtGPWIZg", English),
    track("Kar Gayi Chull - Kapoor & Sons", "NTHz9ephYTw", "5WmvFE8EE9SeYPUx7K3qnY", Hindi),
    track("Desi Girl - Dostana", "RlEgUkrJx1s", "4OUaRVM4JFPBgqTWgtH3Qo", Hindi),
];

/// Curated playlist for an emotion, in display order 🎧
pub fn recommendations(emotion: Emotion) -> &'static [Track] {
    match emotion {
        Emotion::Happy => &HAPPY,
        Emotion::Sad => &SAD,
        Emotion::Angry => &ANGRY,
        Emotion::Neutral => &NEUTRAL,
        Emotion::Surprised => &SURPRISED,
    }
}

/// Lookup by raw label. Unknown labels get an empty playlist.
pub fn recommendations_for_label(label: &str) -> &'static [Track] {
    Emotion::from_label(label)
        .map(recommendations)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::track::{filter_tracks, LanguageFilter};

    #[test]
    fn test_every_emotion_has_tracks() {
        for emotion in Emotion::ALL {
            let tracks = recommendations(emotion);
            assert!(!tracks.is_empty(), "{} has no tracks", emotion);
            assert!(tracks
                .iter()
                .all(|t| matches!(t.language, Language::English | Language::Hindi)));
        }
    }

    #[test]
    fn test_unknown_label_is_empty() {
        assert!(recommendations_for_label("fearful").is_empty());
        assert!(recommendations_for_label("").is_empty());
        assert_eq!(recommendations_for_label("sad").len(), 4);
    }

    #[test]
    fn test_happy_hindi_selection() {
        let titles: Vec<_> = filter_tracks(recommendations(Emotion::Happy), LanguageFilter::Hindi)
            .iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Badtameez Dil - Yeh Jawaani Hai Deewani",
                "London Thumakda - Queen"
            ]
        );
    }

    #[test]
    fn test_table_order_is_authoring_order() {
        let first = recommendations(Emotion::Neutral)[0];
        assert_eq!(first.title, "Perfect - Ed Sheeran");
        assert_eq!(first.video_id, "2Vv-BfVoq4g");
    }
}
