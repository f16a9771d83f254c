use crate::recommend::Track;
use anyhow::{Context, Result};
use std::process::{Command, Stdio};
use tracing::info;

/// Which external service a track button points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Video,
    Audio,
}

impl LinkKind {
    pub fn service(self) -> &'static str {
        match self {
            LinkKind::Video => "YouTube",
            LinkKind::Audio => "Spotify",
        }
    }
}

pub fn youtube_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

pub fn spotify_url(spotify_id: &str) -> String {
    format!("https://open.spotify.com/track/{}", spotify_id)
}

pub fn track_url(track: &Track, kind: LinkKind) -> String {
    match kind {
        LinkKind::Video => youtube_url(track.video_id),
        LinkKind::Audio => spotify_url(track.spotify_id),
    }
}

/// Opens a URL somewhere outside the terminal. Fire-and-forget.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Hands URLs to the desktop's default handler
pub struct SystemOpener {
    program: &'static str,
}

impl SystemOpener {
    pub fn new() -> Self {
        #[cfg(target_os = "macos")]
        let program = "open";
        #[cfg(not(target_os = "macos"))]
        let program = "xdg-open";

        Self { program }
    }
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        // Spawn only; the child is never waited on
        Command::new(self.program)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to launch {} for {}", self.program, url))?;
        info!(%url, "Opened link");
        Ok(())
    }
}

/// `--dry-run-links`: log instead of launching anything
pub struct LogOpener;

impl LinkOpener for LogOpener {
    fn open(&self, url: &str) -> Result<()> {
        info!(%url, "Dry run: link not opened");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::{recommendations, Emotion};

    #[test]
    fn test_url_templates() {
        let track = recommendations(Emotion::Happy)[0];
        assert_eq!(
            track_url(&track, LinkKind::Video),
            "https://www.youtube.com/watch?v=ZbZSe6N_BXs"
        );
        assert_eq!(
            track_url(&track, LinkKind::Audio),
            "https://open.spotify.com/track/60nZcImufyMA1MKQY3dcCH"
        );
    }

    #[test]
    fn test_log_opener_never_fails() {
        assert!(LogOpener.open("https://example.com").is_ok());
    }
}
