use super::error::DetectorError;
use super::traits::ExpressionDetector;
use super::types::Detection;
use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Plays back a recorded detection script, looping at the end.
///
/// One JSON value per line: a detection document, or `null` for a frame
/// without a face. Blank lines and `#` comments are skipped.
pub struct ReplayDetector {
    frames: Vec<Option<Detection>>,
    cursor: AtomicUsize,
}

impl ReplayDetector {
    pub fn new(frames: Vec<Option<Detection>>) -> Self {
        Self {
            frames,
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, DetectorError> {
        let label = path.display().to_string();
        let script = std::fs::read_to_string(path).map_err(|source| DetectorError::Replay {
            path: label.clone(),
            source,
        })?;
        Self::parse(&label, &script)
    }

    pub fn parse(label: &str, script: &str) -> Result<Self, DetectorError> {
        let mut frames = Vec::new();
        for (idx, line) in script.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let frame = serde_json::from_str::<Option<Detection>>(line).map_err(|source| {
                DetectorError::ReplayLine {
                    path: label.to_string(),
                    line: idx + 1,
                    source,
                }
            })?;
            frames.push(frame);
        }
        Ok(Self::new(frames))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[async_trait]
impl ExpressionDetector for ReplayDetector {
    fn name(&self) -> &'static str {
        "replay"
    }

    async fn detect(&self) -> Result<Option<Detection>, DetectorError> {
        if self.frames.is_empty() {
            return Ok(None);
        }
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % self.frames.len();
        Ok(self.frames[idx].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::reduce::dominant_emotion;
    use crate::recommend::Emotion;

    const SCRIPT: &str = r#"
# happy face, then nobody, then a sad face
{"frame":{"width":640,"height":480},"box":{"x":10,"y":10,"width":100,"height":100},"expressions":{"happy":0.9,"sad":0.1}}
null
{"frame":{"width":640,"height":480},"box":{"x":12,"y":11,"width":100,"height":100},"expressions":{"happy":0.2,"sad":0.8}}
"#;

    #[tokio::test]
    async fn test_replay_loops_through_frames() {
        let replay = ReplayDetector::parse("inline", SCRIPT).unwrap();
        assert_eq!(replay.len(), 3);

        let first = replay.detect().await.unwrap().unwrap();
        assert_eq!(dominant_emotion(&first.expressions), Emotion::Happy);
        assert!(replay.detect().await.unwrap().is_none());
        let third = replay.detect().await.unwrap().unwrap();
        assert_eq!(dominant_emotion(&third.expressions), Emotion::Sad);

        // Wraps around
        let again = replay.detect().await.unwrap().unwrap();
        assert_eq!(again, first);
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let err = ReplayDetector::parse("inline", "null\n{oops}\n").err().unwrap();
        match err {
            DetectorError::ReplayLine { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_script_never_finds_a_face() {
        let replay = ReplayDetector::new(Vec::new());
        assert!(replay.is_empty());
        assert!(replay.detect().await.unwrap().is_none());
    }
}
