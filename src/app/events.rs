use crate::detector::{Detection, ModelSet};
use crossterm::event::Event;

pub enum AppEvent {
    Input(Event),
    /// Both model bundles are on disk and the detector session is up
    ModelsReady(ModelSet),
    ModelLoadFailed(String),
    /// Result of one detection tick; `None` when no face was found
    Detection(Option<Detection>),
    Tick,
}
