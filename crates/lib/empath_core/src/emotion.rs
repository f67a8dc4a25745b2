//! Keyword-based emotion classification.

use serde::{Deserialize, Serialize};

/// Emotion classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Sad,
    Happy,
    Angry,
    Anxious,
    Love,
    Surprised,
    Neutral,
}

impl EmotionLabel {
    /// All labels, in classification priority order (neutral last).
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Sad,
        EmotionLabel::Happy,
        EmotionLabel::Angry,
        EmotionLabel::Anxious,
        EmotionLabel::Love,
        EmotionLabel::Surprised,
        EmotionLabel::Neutral,
    ];

    /// Lowercase wire name of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Sad => "sad",
            EmotionLabel::Happy => "happy",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Anxious => "anxious",
            EmotionLabel::Love => "love",
            EmotionLabel::Surprised => "surprised",
            EmotionLabel::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const SAD_WORDS: &[&str] = &["sad", "unhappy", "depressed", "cry", "lonely"];
const HAPPY_WORDS: &[&str] = &["happy", "glad", "awesome", "great", "joy"];
const ANGRY_WORDS: &[&str] = &["angry", "mad", "furious", "annoyed", "hate"];
const ANXIOUS_WORDS: &[&str] = &["anxious", "scared", "nervous", "worried", "panic"];
const LOVE_WORDS: &[&str] = &["love", "luv"];
const SURPRISED_WORDS: &[&str] = &["surprise", "surprised", "shocked"];

/// Classify text by keyword substring containment.
///
/// Keyword sets are checked in a fixed priority order and the first match
/// wins, so text containing both a sad word and a happy word classifies as
/// sad. Matching is plain substring containment on the lowercased text:
/// no tokenization, no stemming, no negation handling ("not happy" still
/// classifies as happy).
pub fn classify(text: &str) -> EmotionLabel {
    let lowered = text.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|w| lowered.contains(w));

    if contains_any(SAD_WORDS) {
        EmotionLabel::Sad
    } else if contains_any(HAPPY_WORDS) {
        EmotionLabel::Happy
    } else if contains_any(ANGRY_WORDS) {
        EmotionLabel::Angry
    } else if contains_any(ANXIOUS_WORDS) {
        EmotionLabel::Anxious
    } else if contains_any(LOVE_WORDS) {
        EmotionLabel::Love
    } else if contains_any(SURPRISED_WORDS) {
        EmotionLabel::Surprised
    } else {
        EmotionLabel::Neutral
    }
}
