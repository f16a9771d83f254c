pub mod emotion;
pub mod table;
pub mod track;

pub use emotion::Emotion;
pub use table::{recommendations, recommendations_for_label};
pub use track::{filter_tracks, Language, LanguageFilter, Track};
