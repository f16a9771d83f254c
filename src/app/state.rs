use super::config::UserConfig;
use super::keys::KeyConfig;
use crate::detector::{dominant_emotion, Detection, FrameSize};
use crate::links::{track_url, LinkKind, LinkOpener};
use crate::overlay::Overlay;
use crate::recommend::{filter_tracks, recommendations, Emotion, LanguageFilter, Track};
use crate::ui::theme::Theme;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

const TOAST_DURATION: Duration = Duration::from_millis(2000);

/// Model lifecycle of the camera pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    ModelLoading,
    Ready,
}

/// Everything the recommendation panel is derived from
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub phase: Phase,
    pub emotion: Option<Emotion>,
    /// Always `recommendations(emotion)` once an emotion is set
    pub recommendations: &'static [Track],
    pub filter: LanguageFilter,
}

impl SessionState {
    pub fn new(filter: LanguageFilter) -> Self {
        Self {
            phase: Phase::ModelLoading,
            emotion: None,
            recommendations: &[],
            filter,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::ModelLoading
    }

    pub fn visible_tracks(&self) -> Vec<&'static Track> {
        filter_tracks(self.recommendations, self.filter)
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub start_time: Instant,
    pub deadline: Instant,
}

pub struct App {
    pub theme: Theme,
    pub keys: KeyConfig,

    pub is_running: bool,
    pub session: SessionState,

    /// Camera canvas contents 📷
    pub overlay: Overlay,
    pub detector_name: String,
    pub detections_seen: u64,
    pub last_detection: Option<Instant>,

    /// Index into the filtered track list
    pub selected: usize,

    /// UI State
    pub show_keyhints: bool,
    pub toast: Option<Toast>,
    pub spinner_frame: usize,
}

impl App {
    pub fn new(config: &UserConfig, theme: Theme, detector_name: &str) -> Self {
        let display = FrameSize::new(config.capture.width as f64, config.capture.height as f64);
        Self {
            theme,
            keys: config.keys.clone(),
            is_running: true,
            session: SessionState::new(config.default_filter),
            overlay: Overlay::new(display, config.capture.mirrored),
            detector_name: detector_name.to_string(),
            detections_seen: 0,
            last_detection: None,
            selected: 0,
            show_keyhints: false,
            toast: None,
            spinner_frame: 0,
        }
    }

    /// ModelLoading -> Ready. Returns false if we were already ready.
    pub fn on_models_loaded(&mut self) -> bool {
        if self.session.phase == Phase::Ready {
            return false;
        }
        self.session.phase = Phase::Ready;
        info!(detector = %self.detector_name, "Face models loaded, camera active");
        true
    }

    /// Logged only; the camera pane keeps showing the loading indicator.
    pub fn on_model_load_failed(&mut self, reason: &str) {
        error!(reason, "Error loading models");
    }

    /// Apply one detection tick. No face leaves everything as it was.
    pub fn apply_detection(&mut self, detection: Option<Detection>) -> Option<Emotion> {
        if self.session.is_loading() {
            warn!("Detection arrived before models were ready, ignoring");
            return None;
        }
        let detection = match detection {
            Some(d) => d,
            None => {
                debug!("No face this tick");
                return None;
            }
        };

        let emotion = dominant_emotion(&detection.expressions);
        if self.session.emotion != Some(emotion) {
            info!(%emotion, "Mood changed");
        }
        self.session.emotion = Some(emotion);
        self.session.recommendations = recommendations(emotion);
        self.overlay.paint(&detection, emotion);

        self.detections_seen += 1;
        self.last_detection = Some(Instant::now());
        self.clamp_selection();
        Some(emotion)
    }

    pub fn set_filter(&mut self, filter: LanguageFilter) {
        if self.session.filter != filter {
            self.session.filter = filter;
            self.selected = 0;
        }
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.session.filter.next());
    }

    pub fn visible_tracks(&self) -> Vec<&'static Track> {
        self.session.visible_tracks()
    }

    pub fn selected_track(&self) -> Option<&'static Track> {
        self.visible_tracks().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.visible_tracks().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_tracks().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Open the selected track's link. Returns the URL handed to the opener.
    pub fn open_selected(&mut self, kind: LinkKind, opener: &dyn LinkOpener) -> Option<String> {
        let track = self.selected_track()?;
        let url = track_url(track, kind);
        match opener.open(&url) {
            Ok(()) => {
                self.show_toast(&format!("↗ {} · {}", kind.service(), track.title));
                Some(url)
            }
            Err(e) => {
                warn!(error = %format!("{:#}", e), "Could not open link");
                self.show_toast(&format!("❌ Could not open {}", kind.service()));
                None
            }
        }
    }

    pub fn show_toast(&mut self, message: &str) {
        let now = Instant::now();
        self.toast = Some(Toast {
            message: message.to_string(),
            start_time: now,
            deadline: now + TOAST_DURATION,
        });
    }

    pub fn on_tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        if let Some(toast) = &self.toast {
            if Instant::now() >= toast.deadline {
                self.toast = None;
            }
        }
    }
}
