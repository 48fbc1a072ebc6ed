// Chapter segmentation on "CHAPTER <number>" markers.

use std::sync::LazyLock;

use regex_lite::Regex;

static CHAPTER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CHAPTER [0-9]+").expect("chapter marker pattern is valid"));

/// Split a book into chapter texts, in document order.
///
/// The marker text itself is discarded, as is everything before the first
/// marker (front matter, table of contents). A book without any marker
/// therefore yields no chapters at all.
pub fn split_into_chapters(book: &str) -> Vec<&str> {
    CHAPTER_MARKER.split(book).skip(1).collect()
}

/// Number of chapter markers in the book.
pub fn count_markers(book: &str) -> usize {
    CHAPTER_MARKER.find_iter(book).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_chapters() {
        assert_eq!(
            split_into_chapters("CHAPTER 1 ABC CHAPTER 2 DEF"),
            vec![" ABC ", " DEF"]
        );
    }

    #[test]
    fn test_front_matter_is_dropped() {
        let book = "Contents\nCHAPTER 1\nIt was war.\nCHAPTER 2\nThen peace.";
        assert_eq!(
            split_into_chapters(book),
            vec!["\nIt was war.\n", "\nThen peace."]
        );
    }

    #[test]
    fn test_no_marker_yields_no_chapters() {
        assert!(split_into_chapters("Just some prose without markers.").is_empty());
        assert_eq!(count_markers("Just some prose without markers."), 0);
    }

    #[test]
    fn test_multi_digit_marker() {
        let chapters = split_into_chapters("CHAPTER 12 twelve CHAPTER 130 thirteen");
        assert_eq!(chapters, vec![" twelve ", " thirteen"]);
    }

    #[test]
    fn test_marker_requires_digits() {
        // "CHAPTER ONE" is not a marker, so it stays inside chapter 1
        let chapters = split_into_chapters("CHAPTER 1 a CHAPTER ONE b");
        assert_eq!(chapters, vec![" a CHAPTER ONE b"]);
    }

    #[test]
    fn test_adjacent_markers_give_empty_chapter() {
        let chapters = split_into_chapters("CHAPTER 1CHAPTER 2 text");
        assert_eq!(chapters, vec!["", " text"]);
        assert_eq!(count_markers("CHAPTER 1CHAPTER 2 text"), 2);
    }
}
