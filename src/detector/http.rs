use super::error::DetectorError;
use super::models::ModelSet;
use super::traits::{CaptureConstraints, ExpressionDetector};
use super::types::Detection;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

pub const DEFAULT_DETECTOR_URL: &str = "http://127.0.0.1:7878";

#[derive(Debug, Serialize)]
struct SessionRequest<'a> {
    model_dir: String,
    models: [&'a str; 2],
    capture: &'a CaptureConstraints,
}

/// Companion inference service reachable over HTTP.
///
/// `POST /session` hands over the model directory and camera constraints,
/// `GET /detect` answers with `null` or one detection document.
pub struct HttpDetector {
    client: Client,
    endpoint: String,
    started: AtomicBool,
}

impl HttpDetector {
    pub fn new(client: Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            started: AtomicBool::new(false),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn check_status(resp: &reqwest::Response, url: &str) -> Result<(), DetectorError> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(DetectorError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            })
        }
    }
}

/// Body of a `/detect` response. `null` (or an empty body) means no face.
pub fn parse_detect_body(body: &[u8]) -> Result<Option<Detection>, DetectorError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(serde_json::from_slice::<Option<Detection>>(body)?)
}

#[async_trait]
impl ExpressionDetector for HttpDetector {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn start(
        &self,
        models: &ModelSet,
        capture: &CaptureConstraints,
    ) -> Result<(), DetectorError> {
        let url = format!("{}/session", self.endpoint);
        let body = SessionRequest {
            model_dir: models.dir.display().to_string(),
            models: [
                models.face_detector.name.as_str(),
                models.face_expression.name.as_str(),
            ],
            capture,
        };

        let resp = self.client.post(&url).json(&body).send().await?;
        Self::check_status(&resp, &url)?;

        self.started.store(true, Ordering::SeqCst);
        info!(endpoint = %self.endpoint, width = capture.width, height = capture.height, "Detector session started");
        Ok(())
    }

    async fn detect(&self) -> Result<Option<Detection>, DetectorError> {
        if !self.started.load(Ordering::SeqCst) {
            return Err(DetectorError::NotStarted);
        }

        let url = format!("{}/detect", self.endpoint);
        let resp = self.client.get(&url).send().await?;
        Self::check_status(&resp, &url)?;

        let body = resp.bytes().await?;
        let detection = parse_detect_body(&body)?;
        debug!(found = detection.is_some(), "Detection response");
        Ok(detection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_empty_bodies_mean_no_face() {
        assert!(parse_detect_body(b"null").unwrap().is_none());
        assert!(parse_detect_body(b"  \n").unwrap().is_none());
    }

    #[test]
    fn test_detection_body() {
        let body = br#"{"frame":{"width":640,"height":480},"box":{"x":1,"y":2,"width":3,"height":4},"expressions":{"sad":0.7}}"#;
        let det = parse_detect_body(body).unwrap().unwrap();
        assert_eq!(det.expressions.get("sad"), Some(0.7));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = parse_detect_body(b"{\"frame\":").unwrap_err();
        assert!(matches!(err, DetectorError::Decode(_)));
    }

    #[tokio::test]
    async fn test_detect_before_start_is_rejected() {
        let detector = HttpDetector::new(Client::new(), "http://127.0.0.1:9/");
        assert_eq!(detector.endpoint(), "http://127.0.0.1:9");
        let err = detector.detect().await.unwrap_err();
        assert!(matches!(err, DetectorError::NotStarted));
    }
}
