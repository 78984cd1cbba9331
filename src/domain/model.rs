use serde::{Deserialize, Serialize};
use std::fmt;

/// The five emotion labels reported by the classifier, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-label scores. A missing score stays `None`; it is never read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    #[serde(default)]
    pub anger: Option<f64>,
    #[serde(default)]
    pub disgust: Option<f64>,
    #[serde(default)]
    pub fear: Option<f64>,
    #[serde(default)]
    pub joy: Option<f64>,
    #[serde(default)]
    pub sadness: Option<f64>,
}

impl EmotionScores {
    pub fn get(&self, emotion: Emotion) -> Option<f64> {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// Scores paired with their labels in canonical order.
    pub fn entries(&self) -> [(Emotion, Option<f64>); 5] {
        Emotion::ALL.map(|emotion| (emotion, self.get(emotion)))
    }

    pub fn is_complete(&self) -> bool {
        self.entries().iter().all(|(_, score)| score.is_some())
    }

    /// Label with the highest score, or `None` unless all five are present.
    ///
    /// Ties go to the leftmost label in canonical order
    /// (anger, disgust, fear, joy, sadness).
    pub fn dominant(&self) -> Option<Emotion> {
        let mut best: Option<(Emotion, f64)> = None;
        for (emotion, score) in self.entries() {
            let score = score?;
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((emotion, score)),
            }
        }
        best.map(|(emotion, _)| emotion)
    }
}

/// Outcome of one detection call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    #[serde(flatten)]
    pub scores: EmotionScores,
    pub dominant_emotion: Option<Emotion>,
}

impl DetectionResult {
    /// Result used when the upstream rejected the text or answered with
    /// something unparseable.
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn from_scores(scores: EmotionScores) -> Self {
        Self {
            dominant_emotion: scores.dominant(),
            scores,
        }
    }

    pub fn is_success(&self) -> bool {
        self.dominant_emotion.is_some()
    }
}
