use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: f64,
    pub height: f64,
}

impl FrameSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Face bounding box in pixels of the frame it was detected in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Expression distribution as reported by the detector.
///
/// Kept as an ordered list rather than a map: ties in the dominant label
/// are broken by the detector's own label order, so the order of the JSON
/// object must survive deserialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expressions(Vec<(String, f64)>);

impl Expressions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(label, p)| (label.as_str(), *p))
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.iter().find(|(l, _)| *l == label).map(|(_, p)| p)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Expressions {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(l, p)| (l.into(), p)).collect())
    }
}

impl Serialize for Expressions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, p) in &self.0 {
            map.serialize_entry(label, p)?;
        }
        map.end()
    }
}

struct ExpressionsVisitor;

impl<'de> Visitor<'de> for ExpressionsVisitor {
    type Value = Expressions;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of expression label to probability")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(7));
        while let Some((label, p)) = access.next_entry::<String, f64>()? {
            entries.push((label, p));
        }
        Ok(Expressions(entries))
    }
}

impl<'de> Deserialize<'de> for Expressions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ExpressionsVisitor)
    }
}

/// One face found in one frame 📸
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub frame: FrameSize,
    #[serde(rename = "box")]
    pub face_box: FaceBox,
    #[serde(default)]
    pub score: f64,
    pub expressions: Expressions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expressions_keep_document_order() {
        let json = r#"{"surprised":0.1,"neutral":0.5,"happy":0.4}"#;
        let expr: Expressions = serde_json::from_str(json).unwrap();
        let labels: Vec<_> = expr.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["surprised", "neutral", "happy"]);
        assert_eq!(expr.get("neutral"), Some(0.5));
    }

    #[test]
    fn test_parse_detection_document() {
        let json = r#"{
            "frame": {"width": 640, "height": 480},
            "box": {"x": 200.5, "y": 120, "width": 180, "height": 190},
            "score": 0.93,
            "expressions": {"neutral": 0.02, "happy": 0.97, "sad": 0.01}
        }"#;
        let det: Detection = serde_json::from_str(json).unwrap();
        assert_eq!(det.frame, FrameSize::new(640.0, 480.0));
        assert_eq!(det.face_box.x, 200.5);
        assert_eq!(det.expressions.len(), 3);
    }

    #[test]
    fn test_score_is_optional() {
        let json = r#"{"frame":{"width":1,"height":1},"box":{"x":0,"y":0,"width":1,"height":1},"expressions":{}}"#;
        let det: Detection = serde_json::from_str(json).unwrap();
        assert_eq!(det.score, 0.0);
        assert!(det.expressions.is_empty());
    }
}
