use crate::detector::{Detection, FrameSize};
use crate::recommend::Emotion;

/// Detection box resized to the display frame, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
}

fn scale(to: f64, from: f64) -> f64 {
    if from > 0.0 {
        to / from
    } else {
        1.0
    }
}

/// Resize a detection from the frame it was found in to `display`.
/// With `mirrored` the box is flipped horizontally to match a mirrored feed.
pub fn match_dimensions(det: &Detection, display: FrameSize, mirrored: bool) -> OverlayBox {
    let sx = scale(display.width, det.frame.width);
    let sy = scale(display.height, det.frame.height);

    let width = det.face_box.width * sx;
    let height = det.face_box.height * sy;
    let mut x = det.face_box.x * sx;
    if mirrored {
        x = display.width - x - width;
    }

    OverlayBox {
        x,
        y: det.face_box.y * sy,
        width,
        height,
        label: String::new(),
    }
}

/// What the camera canvas currently shows. Holds at most one box.
#[derive(Debug, Clone)]
pub struct Overlay {
    pub display: FrameSize,
    pub mirrored: bool,
    current: Option<OverlayBox>,
}

impl Overlay {
    pub fn new(display: FrameSize, mirrored: bool) -> Self {
        Self {
            display,
            mirrored,
            current: None,
        }
    }

    /// Clear the previous drawing and paint this detection
    pub fn paint(&mut self, det: &Detection, emotion: Emotion) {
        let mut overlay_box = match_dimensions(det, self.display, self.mirrored);
        overlay_box.label = if det.score > 0.0 {
            format!("{} {:.2}", emotion, det.score)
        } else {
            emotion.to_string()
        };
        self.current = Some(overlay_box);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&OverlayBox> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::{Expressions, FaceBox};

    fn detection(frame: FrameSize, face_box: FaceBox) -> Detection {
        Detection {
            frame,
            face_box,
            score: 0.9,
            expressions: Expressions::new(),
        }
    }

    #[test]
    fn test_scales_to_display() {
        let det = detection(
            FrameSize::new(320.0, 240.0),
            FaceBox { x: 10.0, y: 20.0, width: 50.0, height: 60.0 },
        );
        let b = match_dimensions(&det, FrameSize::new(640.0, 480.0), false);
        assert_eq!((b.x, b.y, b.width, b.height), (20.0, 40.0, 100.0, 120.0));
    }

    #[test]
    fn test_mirroring_flips_x() {
        let det = detection(
            FrameSize::new(640.0, 480.0),
            FaceBox { x: 40.0, y: 0.0, width: 100.0, height: 100.0 },
        );
        let b = match_dimensions(&det, FrameSize::new(640.0, 480.0), true);
        assert_eq!(b.x, 500.0);
        assert_eq!(b.y, 0.0);
    }

    #[test]
    fn test_zero_sized_source_frame_is_not_scaled() {
        let det = detection(
            FrameSize::new(0.0, 0.0),
            FaceBox { x: 5.0, y: 5.0, width: 10.0, height: 10.0 },
        );
        let b = match_dimensions(&det, FrameSize::new(640.0, 480.0), false);
        assert_eq!(b.width, 10.0);
    }

    #[test]
    fn test_paint_overwrites_previous_box() {
        let mut overlay = Overlay::new(FrameSize::new(640.0, 480.0), false);
        let frame = FrameSize::new(640.0, 480.0);

        overlay.paint(
            &detection(frame, FaceBox { x: 1.0, y: 1.0, width: 10.0, height: 10.0 }),
            Emotion::Happy,
        );
        overlay.paint(
            &detection(frame, FaceBox { x: 200.0, y: 100.0, width: 80.0, height: 90.0 }),
            Emotion::Sad,
        );

        let current = overlay.current().unwrap();
        assert_eq!(current.x, 200.0);
        assert_eq!(current.label, "sad 0.90");

        overlay.clear();
        assert!(overlay.current().is_none());
    }
}
