use super::events::AppEvent;
use crate::detector::ExpressionDetector;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Periodic detection task 🔁
///
/// One detection at a time: a tick waits for its detection before the
/// next interval is scheduled. Cancelling abandons any detection still in
/// flight, so nothing is delivered after teardown.
pub struct DetectionPoller {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl DetectionPoller {
    pub fn spawn(
        detector: Arc<dyn ExpressionDetector>,
        period: Duration,
        tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run(detector, period, tx, cancel.clone()));
        Self { cancel, handle }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancel and wait for the task to wind down
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Err(e) = self.handle.await {
            warn!(error = %e, "Detection poller ended abnormally");
        }
    }
}

async fn run(
    detector: Arc<dyn ExpressionDetector>,
    period: Duration,
    tx: mpsc::Sender<AppEvent>,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(detector = detector.name(), period_ms = period.as_millis() as u64, "Detection polling started");

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {}
        }

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Abandoning in-flight detection");
                break;
            }
            outcome = detector.detect() => outcome,
        };

        match outcome {
            Ok(detection) => {
                // A full channel must not hold up teardown
                let sent = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => break,
                    sent = tx.send(AppEvent::Detection(detection)) => sent,
                };
                if sent.is_err() {
                    break;
                }
            }
            // Errors are no-op ticks
            Err(e) => warn!(error = %e, "Detection failed"),
        }
    }

    info!("Detection polling stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::{Detection, DetectorError, Expressions, FaceBox, FrameSize};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn face() -> Detection {
        Detection {
            frame: FrameSize::new(640.0, 480.0),
            face_box: FaceBox { x: 0.0, y: 0.0, width: 10.0, height: 10.0 },
            score: 0.5,
            expressions: [("happy", 0.9)].into_iter().collect::<Expressions>(),
        }
    }

    /// Takes `delay` per call and records how many calls overlap
    struct SlowDetector {
        delay: Duration,
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl SlowDetector {
        fn new(delay: Duration) -> Self {
            Self {
                delay,
                calls: AtomicUsize::new(0),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ExpressionDetector for SlowDetector {
        fn name(&self) -> &'static str {
            "slow"
        }

        async fn detect(&self) -> Result<Option<Detection>, DetectorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(Some(face()))
        }
    }

    struct FailingDetector;

    #[async_trait]
    impl ExpressionDetector for FailingDetector {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn detect(&self) -> Result<Option<Detection>, DetectorError> {
            Err(DetectorError::NotStarted)
        }
    }

    #[tokio::test]
    async fn test_delivers_detections() {
        let (tx, mut rx) = mpsc::channel(16);
        let detector = Arc::new(SlowDetector::new(Duration::from_millis(1)));
        let poller = DetectionPoller::spawn(detector, Duration::from_millis(10), tx);

        let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("no detection within timeout")
            .expect("channel closed");
        assert!(matches!(event, AppEvent::Detection(Some(_))));

        poller.shutdown().await;
    }

    #[tokio::test]
    async fn test_ticks_never_overlap() {
        let (tx, mut rx) = mpsc::channel(64);
        let detector = Arc::new(SlowDetector::new(Duration::from_millis(30)));
        let poller = DetectionPoller::spawn(detector.clone(), Duration::from_millis(5), tx);

        for _ in 0..3 {
            tokio::time::timeout(Duration::from_secs(2), rx.recv())
                .await
                .unwrap()
                .unwrap();
        }
        poller.shutdown().await;

        assert!(detector.calls.load(Ordering::SeqCst) >= 3);
        assert_eq!(detector.max_in_flight.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancel_abandons_in_flight_detection() {
        let (tx, mut rx) = mpsc::channel(16);
        let detector = Arc::new(SlowDetector::new(Duration::from_millis(500)));
        let poller = DetectionPoller::spawn(detector.clone(), Duration::from_millis(10), tx);

        // First tick fires immediately; let the detection get under way
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(detector.calls.load(Ordering::SeqCst), 1);

        poller.shutdown().await;
        tokio::time::sleep(Duration::from_millis(600)).await;

        // Sender is gone and nothing was delivered
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_shutdown_with_full_channel() {
        let (tx, rx) = mpsc::channel(1);
        let detector = Arc::new(SlowDetector::new(Duration::from_millis(1)));
        let poller = DetectionPoller::spawn(detector.clone(), Duration::from_millis(5), tx);

        // Nobody drains rx: first detection fills the channel, the next send blocks
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(detector.calls.load(Ordering::SeqCst) >= 2);

        tokio::time::timeout(Duration::from_secs(1), poller.shutdown())
            .await
            .expect("shutdown hung on a full channel");
        drop(rx);
    }

    #[tokio::test]
    async fn test_errors_are_skipped() {
        let (tx, mut rx) = mpsc::channel(16);
        let poller = DetectionPoller::spawn(Arc::new(FailingDetector), Duration::from_millis(5), tx);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!poller.is_finished());
        assert!(rx.try_recv().is_err());

        poller.cancel();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(poller.is_finished());
    }
}
