use super::events::AppEvent;
use crate::detector::{CaptureConstraints, ExpressionDetector, ModelSet, ModelStore};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Fetch both bundles, then open the detector session. Either step
/// failing fails the whole load.
pub async fn load_models(
    store: &ModelStore,
    detector: &dyn ExpressionDetector,
    capture: &CaptureConstraints,
) -> Result<ModelSet> {
    let models = store.load_all().await.context("loading face models")?;
    detector
        .start(&models, capture)
        .await
        .with_context(|| format!("starting {} detector session", detector.name()))?;
    Ok(models)
}

/// One-shot model load. Reports the outcome as an event; never retries.
pub fn spawn_model_load(
    store: ModelStore,
    detector: Arc<dyn ExpressionDetector>,
    capture: CaptureConstraints,
    tx: mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let event = match load_models(&store, detector.as_ref(), &capture).await {
            Ok(models) => AppEvent::ModelsReady(models),
            Err(e) => AppEvent::ModelLoadFailed(format!("{:#}", e)),
        };
        let _ = tx.send(event).await;
    })
}
