//! Property tests for the greedy segmenter
//!
//! Inputs are drawn from a small alphabet so that vocabulary words, priority
//! names, punctuation and unknown characters all show up often.

use hanzitok_core::{
    CharacterClassifier, PrioritySet, PunctuationTable, Segmentation, Segmenter, Vocabulary,
};
use proptest::prelude::*;

const ALPHABET: &[char] = &[
    '我', '你', '好', '小', '明', '王', '走', '了', '吗', '，', '。', ' ', '\n', 'a',
];

fn vocabulary() -> Vocabulary {
    Vocabulary::from_entries([
        ("w1", "我"),
        ("w2", "你好"),
        ("w3", "小明"),
        ("w4", "王小明走"),
        ("w5", "好吗"),
    ])
}

fn priority() -> PrioritySet {
    PrioritySet::parse("王小,了,你好吗")
}

fn segmenter() -> Segmenter {
    Segmenter::new(vocabulary(), priority())
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..40)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Recompute unmatched runs from the token stream alone
fn runs_from_tokens(result: &Segmentation, priority: &PrioritySet) -> Vec<String> {
    let classifier = PunctuationTable::default();
    let mut runs = Vec::new();
    let mut current = String::new();

    for token in &result.tokens {
        let mut chars = token.text.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        };
        let unmatched = token.id.is_none()
            && !priority.contains(&token.text)
            && single.is_some_and(|ch| !classifier.is_separator(ch));

        if unmatched {
            current.push_str(&token.text);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

proptest! {
    #[test]
    fn tokens_cover_input_exactly(text in text_strategy()) {
        let result = segmenter().segment(&text);
        prop_assert_eq!(result.text(), text);
    }

    #[test]
    fn runs_partition_unmatched_characters(text in text_strategy()) {
        let result = segmenter().segment(&text);
        prop_assert_eq!(&result.unmatched_runs, &runs_from_tokens(&result, &priority()));
    }

    #[test]
    fn runs_never_contain_punctuation_or_are_empty(text in text_strategy()) {
        let classifier = PunctuationTable::default();
        let result = segmenter().segment(&text);
        for run in &result.unmatched_runs {
            prop_assert!(!run.is_empty());
            prop_assert!(!run.chars().any(|ch| classifier.is_separator(ch)));
        }
    }

    #[test]
    fn construction_is_idempotent(text in text_strategy()) {
        let first = Segmenter::new(vocabulary(), priority()).segment(&text);
        let second = Segmenter::new(vocabulary(), priority()).segment(&text);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn each_token_is_the_longest_available_match(text in text_strategy()) {
        let vocab = vocabulary();
        let names = priority();
        let chars: Vec<char> = text.chars().collect();
        let result = segmenter().segment(&text);

        let mut pos = 0;
        for token in &result.tokens {
            let len = token.text.chars().count();
            let widest = 4.min(chars.len() - pos);

            // No longer window at this position matches anything
            for longer in (len + 1)..=widest {
                let chunk: String = chars[pos..pos + longer].iter().collect();
                prop_assert!(!names.contains(&chunk));
                prop_assert!(!vocab.contains(&chunk));
            }

            // At equal length a priority name would have been preferred
            if token.id.is_some() {
                prop_assert!(!names.contains(&token.text));
                prop_assert_eq!(vocab.get(&token.text), token.id.as_deref());
            }

            pos += len;
        }
        prop_assert_eq!(pos, chars.len());
    }

    #[test]
    fn token_count_matches_stats(text in text_strategy()) {
        let result = segmenter().segment(&text);
        let stats = result.stats;
        prop_assert_eq!(
            result.tokens.len(),
            stats.vocabulary_matches + stats.priority_matches + stats.punctuation + stats.unknown
        );
        prop_assert_eq!(stats.chars, text.chars().count());
    }
}
