//! Static validation and suggestion phrase tables.

use std::collections::HashMap;

use crate::emotion::EmotionLabel;

const SAD_VALIDATIONS: &[&str] = &[
    "I'm really sorry you're going through this. That sounds really heavy.",
    "That must be so difficult—thank you for sharing that with me.",
];
const ANGRY_VALIDATIONS: &[&str] = &[
    "I can hear the anger in your words. It's valid to feel upset.",
    "Anger is a natural reaction. I'm here to listen without judgement.",
];
const ANXIOUS_VALIDATIONS: &[&str] = &[
    "Being anxious feels overwhelming—you're not alone in that.",
    "I hear that worry. Let's try something grounding together if you're open to it.",
];
const HAPPY_VALIDATIONS: &[&str] = &[
    "That's wonderful to hear—thank you for sharing your joy!",
    "I'm so glad you're feeling good. What made you feel this way?",
];
const LOVE_VALIDATIONS: &[&str] = &[
    "That's lovely — feeling connected is so meaningful.",
    "I'm happy you have something or someone bringing you warmth.",
];
const SURPRISED_VALIDATIONS: &[&str] = &[
    "Oh—that sounds surprising. Want to tell me more?",
    "That must have been unexpected. How are you processing it?",
];
const NEUTRAL_VALIDATIONS: &[&str] = &[
    "I'm here and listening—tell me more if you'd like.",
    "Thanks for sharing. What else is on your mind?",
];

const SAD_SUGGESTIONS: &[&str] = &[
    "Would you like a quick breathing exercise? Or would you like to tell me more about what happened?",
    "Sometimes writing one sentence about what you feel can help. Want to try?",
];
const ANGRY_SUGGESTIONS: &[&str] = &[
    "A slow 4-4-4 breathing can help calm: breathe in 4s, hold 4s, out 4s. Want to try?",
    "If it helps, you can name one thing you can change about the situation and one you can't.",
];
const ANXIOUS_SUGGESTIONS: &[&str] = &[
    "Try grounding: name 5 things you can see, 4 you can touch, 3 you can hear.",
    "Shallow breathing makes anxiety worse—slow deep breaths often help.",
];
const HAPPY_SUGGESTIONS: &[&str] = &[
    "Would you like me to save this as a happy memory in your journal?",
    "Want to celebrate? I can share a short compliment or a motivating quote.",
];
const LOVE_SUGGESTIONS: &[&str] = &[
    "That's heartwarming. Would you like to reflect on what made this connection strong?",
    "Would you like to note this as a positive memory?",
];
const SURPRISED_SUGGESTIONS: &[&str] = &[
    "Do you want to unpack what surprised you and how you feel about it?",
    "If it's good surprise—congratulations! If it's not, I'm here to listen.",
];
const NEUTRAL_SUGGESTIONS: &[&str] = &[
    "Would you like a prompt to help share more—like 'What happened today?'",
    "We can try a short check-in exercise if you'd like.",
];

type PhraseTable = HashMap<EmotionLabel, &'static [&'static str]>;

/// Immutable table of candidate reply phrases keyed by emotion.
///
/// Built once at startup and shared read-only across requests.
pub struct PhraseBank {
    validations: PhraseTable,
    suggestions: PhraseTable,
}

impl PhraseBank {
    pub fn new() -> Self {
        let validations = PhraseTable::from([
            (EmotionLabel::Sad, SAD_VALIDATIONS),
            (EmotionLabel::Angry, ANGRY_VALIDATIONS),
            (EmotionLabel::Anxious, ANXIOUS_VALIDATIONS),
            (EmotionLabel::Happy, HAPPY_VALIDATIONS),
            (EmotionLabel::Love, LOVE_VALIDATIONS),
            (EmotionLabel::Surprised, SURPRISED_VALIDATIONS),
            (EmotionLabel::Neutral, NEUTRAL_VALIDATIONS),
        ]);
        let suggestions = PhraseTable::from([
            (EmotionLabel::Sad, SAD_SUGGESTIONS),
            (EmotionLabel::Angry, ANGRY_SUGGESTIONS),
            (EmotionLabel::Anxious, ANXIOUS_SUGGESTIONS),
            (EmotionLabel::Happy, HAPPY_SUGGESTIONS),
            (EmotionLabel::Love, LOVE_SUGGESTIONS),
            (EmotionLabel::Surprised, SURPRISED_SUGGESTIONS),
            (EmotionLabel::Neutral, NEUTRAL_SUGGESTIONS),
        ]);
        Self {
            validations,
            suggestions,
        }
    }

    /// Candidate validation phrases for `emotion`, falling back to the
    /// neutral list when the label has no entry.
    pub fn validations(&self, emotion: EmotionLabel) -> &'static [&'static str] {
        lookup(&self.validations, emotion)
    }

    /// Candidate suggestion phrases for `emotion`, falling back to the
    /// neutral list when the label has no entry.
    pub fn suggestions(&self, emotion: EmotionLabel) -> &'static [&'static str] {
        lookup(&self.suggestions, emotion)
    }
}

impl Default for PhraseBank {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup(table: &PhraseTable, emotion: EmotionLabel) -> &'static [&'static str] {
    table
        .get(&emotion)
        .or_else(|| table.get(&EmotionLabel::Neutral))
        .copied()
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_has_candidates() {
        let bank = PhraseBank::new();
        for label in EmotionLabel::ALL {
            assert!(
                !bank.validations(label).is_empty(),
                "no validations for {label}"
            );
            assert!(
                !bank.suggestions(label).is_empty(),
                "no suggestions for {label}"
            );
        }
    }

    #[test]
    fn lookup_falls_back_to_neutral() {
        let table = PhraseTable::from([(EmotionLabel::Neutral, NEUTRAL_VALIDATIONS)]);
        assert_eq!(lookup(&table, EmotionLabel::Sad), NEUTRAL_VALIDATIONS);
    }

    #[test]
    fn lookup_on_empty_table_is_empty() {
        let table = PhraseTable::new();
        assert!(lookup(&table, EmotionLabel::Sad).is_empty());
    }
}
