// Per-term grouping of word occurrences and the counts derived from it.
//
// A TermGroup keeps its keys in order of first appearance and each key's
// occurrences in document order. Grouping is a single pass: an index map
// from term to slot, then a push into that slot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::text::tokenizer::WordOccurrence;

/// How many times a term occurs in a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFrequency {
    pub term: String,
    pub count: usize,
}

/// Occurrences grouped by their normalized text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermGroup {
    slots: HashMap<String, usize>,
    groups: Vec<(String, Vec<WordOccurrence>)>,
}

impl TermGroup {
    fn push(&mut self, word: &WordOccurrence) {
        match self.slots.get(&word.text) {
            Some(&slot) => self.groups[slot].1.push(word.clone()),
            None => {
                self.slots.insert(word.text.clone(), self.groups.len());
                self.groups.push((word.text.clone(), vec![word.clone()]));
            }
        }
    }

    /// Occurrences of one term, or `None` if it never appeared.
    pub fn get(&self, term: &str) -> Option<&[WordOccurrence]> {
        self.slots
            .get(term)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Terms with their occurrences, in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[WordOccurrence])> {
        self.groups
            .iter()
            .map(|(term, words)| (term.as_str(), words.as_slice()))
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group occurrences by text, preserving first-appearance and document order.
pub fn group_terms(occurrences: &[WordOccurrence]) -> TermGroup {
    let mut group = TermGroup::default();
    for word in occurrences {
        group.push(word);
    }
    group
}

/// One frequency entry per distinct term, in first-appearance order.
pub fn term_frequencies(group: &TermGroup) -> Vec<TermFrequency> {
    group
        .iter()
        .map(|(term, words)| TermFrequency {
            term: term.to_string(),
            count: words.len(),
        })
        .collect()
}

/// Total occurrence count across all frequency entries.
pub fn total_count(frequencies: &[TermFrequency]) -> usize {
    frequencies.iter().map(|f| f.count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_preserves_order() {
        let words = vec![
            WordOccurrence::new("hello", 0),
            WordOccurrence::new("test", 24),
            WordOccurrence::new("hello", 5),
            WordOccurrence::new("test", 30),
            WordOccurrence::new("test", 35),
        ];
        let group = group_terms(&words);

        assert_eq!(group.len(), 2);
        assert_eq!(
            group.get("hello").unwrap(),
            &[WordOccurrence::new("hello", 0), WordOccurrence::new("hello", 5)]
        );
        assert_eq!(group.get("test").unwrap().len(), 3);
        let keys: Vec<&str> = group.iter().map(|(term, _)| term).collect();
        assert_eq!(keys, vec!["hello", "test"]);
    }

    #[test]
    fn test_group_never_mixes_terms() {
        let words = vec![
            WordOccurrence::new("war", 0),
            WordOccurrence::new("peace", 4),
            WordOccurrence::new("war", 10),
        ];
        let group = group_terms(&words);
        for (term, occurrences) in group.iter() {
            assert!(occurrences.iter().all(|w| w.text == term));
        }
    }

    #[test]
    fn test_frequencies() {
        let words = vec![
            WordOccurrence::new("hello", 0),
            WordOccurrence::new("world", 7),
            WordOccurrence::new("hello", 12),
        ];
        let freqs = term_frequencies(&group_terms(&words));
        assert_eq!(
            freqs,
            vec![
                TermFrequency {
                    term: "hello".to_string(),
                    count: 2
                },
                TermFrequency {
                    term: "world".to_string(),
                    count: 1
                },
            ]
        );
        assert_eq!(total_count(&freqs), 3);
    }

    #[test]
    fn test_empty_input() {
        let group = group_terms(&[]);
        assert!(group.is_empty());
        assert!(term_frequencies(&group).is_empty());
        assert!(group.get("war").is_none());
    }
}
