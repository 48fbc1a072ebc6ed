// Term filtering — keep only the occurrences that belong to a term list.

use crate::sources::TermList;
use crate::text::tokenizer::WordOccurrence;

/// Return the occurrences whose text is in `terms`, in their original order.
pub fn filter_terms(occurrences: &[WordOccurrence], terms: &TermList) -> Vec<WordOccurrence> {
    occurrences
        .iter()
        .filter(|word| terms.contains(&word.text))
        .cloned()
        .collect()
}
