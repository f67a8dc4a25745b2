//! Empathetic reply composition.

use rand::Rng;

use crate::emotion::EmotionLabel;
use crate::phrases::PhraseBank;

/// Maximum number of words echoed back in the reflection clause.
const REFLECTION_WORD_LIMIT: usize = 12;

/// Build the reflection clause echoing a truncation of the user's text.
///
/// Splits on whitespace runs and echoes the first 12 words; longer input
/// gets a `...` marker inside the closing quote. Returns `None` when the
/// text contains no words.
pub fn reflection(text: &str) -> Option<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }
    let echoed = words[..words.len().min(REFLECTION_WORD_LIMIT)].join(" ");
    let ellipsis = if words.len() > REFLECTION_WORD_LIMIT {
        "..."
    } else {
        ""
    };
    Some(format!("You said: \"{echoed}{ellipsis}\""))
}

/// Compose a reply: validation phrase, reflection clause, suggestion phrase,
/// joined by single spaces with empty pieces omitted.
///
/// Phrase candidates are picked uniformly at random; the caller supplies the
/// randomness source so tests can seed it.
pub fn compose<R: Rng + ?Sized>(
    bank: &PhraseBank,
    text: &str,
    emotion: EmotionLabel,
    rng: &mut R,
) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3);
    if let Some(validation) = pick(rng, bank.validations(emotion)) {
        parts.push(validation.to_string());
    }
    if let Some(reflection) = reflection(text) {
        parts.push(reflection);
    }
    if let Some(suggestion) = pick(rng, bank.suggestions(emotion)) {
        parts.push(suggestion.to_string());
    }
    parts.join(" ")
}

/// Uniform random pick from a candidate list; `None` when the list is empty.
fn pick<R: Rng + ?Sized>(rng: &mut R, candidates: &[&'static str]) -> Option<&'static str> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn reflection_keeps_short_text_whole() {
        let clause = reflection("one two three four five").unwrap();
        assert_eq!(clause, "You said: \"one two three four five\"");
    }

    #[test]
    fn reflection_truncates_to_twelve_words() {
        let text = "w1 w2 w3 w4 w5 w6 w7 w8 w9 w10 w11 w12 w13 w14 w15";
        let clause = reflection(text).unwrap();
        assert_eq!(
            clause,
            "You said: \"w1 w2 w3 w4 w5 w6 w7 w8 w9 w10 w11 w12...\""
        );
    }

    #[test]
    fn reflection_of_exactly_twelve_words_has_no_ellipsis() {
        let text = "w1 w2 w3 w4 w5 w6 w7 w8 w9 w10 w11 w12";
        let clause = reflection(text).unwrap();
        assert!(!clause.contains("..."), "unexpected ellipsis: {clause}");
    }

    #[test]
    fn reflection_collapses_whitespace_runs() {
        let clause = reflection("  hello \t world  ").unwrap();
        assert_eq!(clause, "You said: \"hello world\"");
    }

    #[test]
    fn reflection_of_blank_text_is_none() {
        assert!(reflection("").is_none());
        assert!(reflection("   \t ").is_none());
    }

    #[test]
    fn compose_joins_validation_reflection_suggestion() {
        let bank = PhraseBank::new();
        let mut rng = StdRng::seed_from_u64(7);
        let reply = compose(&bank, "I am so sad today", EmotionLabel::Sad, &mut rng);

        let validations = bank.validations(EmotionLabel::Sad);
        let suggestions = bank.suggestions(EmotionLabel::Sad);
        assert!(
            validations.iter().any(|v| reply.starts_with(v)),
            "reply does not start with a sad validation phrase: {reply}"
        );
        assert!(reply.contains("You said: \"I am so sad today\""));
        assert!(
            suggestions.iter().any(|s| reply.ends_with(s)),
            "reply does not end with a sad suggestion phrase: {reply}"
        );
    }

    #[test]
    fn compose_is_deterministic_for_a_fixed_seed() {
        let bank = PhraseBank::new();
        let a = compose(
            &bank,
            "the sky is blue",
            EmotionLabel::Neutral,
            &mut StdRng::seed_from_u64(42),
        );
        let b = compose(
            &bank,
            "the sky is blue",
            EmotionLabel::Neutral,
            &mut StdRng::seed_from_u64(42),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn compose_eventually_uses_every_candidate() {
        let bank = PhraseBank::new();
        let validations = bank.validations(EmotionLabel::Happy);
        let mut seen = vec![false; validations.len()];
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..64 {
            let reply = compose(&bank, "great", EmotionLabel::Happy, &mut rng);
            for (i, v) in validations.iter().enumerate() {
                if reply.starts_with(v) {
                    seen[i] = true;
                }
            }
        }
        assert!(seen.iter().all(|s| *s), "some candidates never selected");
    }

    #[test]
    fn pick_from_empty_list_is_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(pick(&mut rng, &[]).is_none());
    }
}
