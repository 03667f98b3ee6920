//! Substring match highlighting.
//!
//! The core computes byte ranges of case-insensitive matches; the renderer
//! turns ranges into styled spans. Matching is purely literal; the scanner
//! compares characters, so terms containing `.`/`*`/`(` and friends match
//! only themselves, never act as patterns.

/// A slice of a cell's text, marked or plain, produced from match ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Byte ranges of every case-insensitive occurrence of `term` in `text`.
///
/// Occurrences are non-overlapping and scanned left to right, so every
/// matched region is covered exactly once. An empty term yields no ranges.
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() || text.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        match match_at(text, pos, term) {
            Some(end) => {
                ranges.push((pos, end));
                pos = end;
            }
            None => {
                // Advance one char, staying on a boundary
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    ranges
}

/// Split `text` into plain/marked segments according to `ranges`.
///
/// Ranges must be sorted, non-overlapping, and on char boundaries, exactly
/// what [`match_ranges`] produces. Concatenating the segments reproduces the
/// original text unchanged.
pub fn segments<'a>(text: &'a str, ranges: &[(usize, usize)]) -> Vec<Segment<'a>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for &(start, end) in ranges {
        if start > cursor {
            out.push(Segment {
                text: &text[cursor..start],
                matched: false,
            });
        }
        out.push(Segment {
            text: &text[start..end],
            matched: true,
        });
        cursor = end;
    }
    if cursor < text.len() {
        out.push(Segment {
            text: &text[cursor..],
            matched: false,
        });
    }
    out
}

/// Try to match `term` at byte position `pos`; returns the end byte on success.
fn match_at(text: &str, pos: usize, term: &str) -> Option<usize> {
    let mut hay = text[pos..].char_indices();
    let mut consumed = 0;
    for needle_ch in term.chars() {
        let (idx, hay_ch) = hay.next()?;
        if !chars_fold_eq(hay_ch, needle_ch) {
            return None;
        }
        consumed = idx + hay_ch.len_utf8();
    }
    Some(pos + consumed)
}

/// Case-insensitive comparison of two characters using full Unicode
/// lowercasing on both sides.
fn chars_fold_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_yields_no_ranges() {
        assert!(match_ranges("some text", "").is_empty());
        assert!(match_ranges("", "term").is_empty());
    }

    #[test]
    fn test_case_insensitive_occurrences() {
        let ranges = match_ranges("Tea TEA tea", "tea");
        assert_eq!(ranges, vec![(0, 3), (4, 7), (8, 11)]);
    }

    #[test]
    fn test_metacharacters_match_literally() {
        // "a.b" must match the literal text "a.b", not "axb"
        assert_eq!(match_ranges("a.b and axb", "a.b"), vec![(0, 3)]);
        assert_eq!(match_ranges("cost (net)", "(net)"), vec![(5, 10)]);
        assert!(match_ranges("aXb", "a.b").is_empty());
    }

    #[test]
    fn test_non_overlapping_left_to_right() {
        // "aaa" contains "aa" starting at 0 and 1; only the leftmost is
        // taken, then scanning resumes past it
        assert_eq!(match_ranges("aaa", "aa"), vec![(0, 2)]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn test_multibyte_text() {
        let text = "Trà xanh trà đen";
        let ranges = match_ranges(text, "trà");
        assert_eq!(ranges.len(), 2);
        for &(start, end) in &ranges {
            assert_eq!(text[start..end].to_lowercase(), "trà");
        }
    }

    #[test]
    fn test_segments_reconstruct_original() {
        let text = "Green Tea and tears";
        let ranges = match_ranges(text, "tea");
        let segs = segments(text, &ranges);

        let rebuilt: String = segs.iter().map(|s| s.text).collect();
        assert_eq!(rebuilt, text);

        let marked: Vec<&str> = segs.iter().filter(|s| s.matched).map(|s| s.text).collect();
        assert_eq!(marked, vec!["Tea", "tea"]);
    }

    #[test]
    fn test_segments_with_no_ranges_is_single_plain() {
        let segs = segments("plain", &[]);
        assert_eq!(
            segs,
            vec![Segment {
                text: "plain",
                matched: false
            }]
        );
    }
}
