use super::types::Expressions;
use crate::recommend::Emotion;

/// Label with the strictly greatest probability.
///
/// The running maximum starts at zero, so ties keep the first label seen
/// and a distribution with no positive entry has no winner.
pub fn dominant_label(expressions: &Expressions) -> Option<&str> {
    let mut best: Option<&str> = None;
    let mut max = 0.0;
    for (label, p) in expressions.iter() {
        if p > max {
            max = p;
            best = Some(label);
        }
    }
    best
}

/// Reduce a distribution to one of our emotions, defaulting to neutral
pub fn dominant_emotion(expressions: &Expressions) -> Emotion {
    dominant_label(expressions)
        .and_then(Emotion::from_label)
        .unwrap_or(Emotion::Neutral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_probability_wins() {
        let expr: Expressions = [
            ("happy", 0.2),
            ("sad", 0.1),
            ("angry", 0.05),
            ("neutral", 0.3),
            ("surprised", 0.9),
        ]
        .into_iter()
        .collect();
        assert_eq!(dominant_label(&expr), Some("surprised"));
        assert_eq!(dominant_emotion(&expr), Emotion::Surprised);
    }

    #[test]
    fn test_tie_keeps_first_label() {
        let expr: Expressions = [("sad", 0.4), ("angry", 0.4), ("happy", 0.2)]
            .into_iter()
            .collect();
        assert_eq!(dominant_emotion(&expr), Emotion::Sad);
    }

    #[test]
    fn test_unknown_winner_falls_back_to_neutral() {
        let expr: Expressions = [("happy", 0.1), ("fearful", 0.8), ("sad", 0.1)]
            .into_iter()
            .collect();
        assert_eq!(dominant_label(&expr), Some("fearful"));
        assert_eq!(dominant_emotion(&expr), Emotion::Neutral);
    }

    #[test]
    fn test_empty_or_zero_distribution() {
        assert_eq!(dominant_label(&Expressions::new()), None);
        assert_eq!(dominant_emotion(&Expressions::new()), Emotion::Neutral);

        let zeros: Expressions = [("happy", 0.0), ("sad", 0.0)].into_iter().collect();
        assert_eq!(dominant_emotion(&zeros), Emotion::Neutral);
    }
}
