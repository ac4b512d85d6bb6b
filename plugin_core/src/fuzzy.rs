/// A way of matching user input against an item's search text.
pub trait SearchMethod {
    /// Score and matched character indices when `needle` matches `haystack`.
    fn match_idxs(haystack: &str, needle: &str) -> Option<(i32, Vec<usize>)>;
}

/// Case-insensitive subsequence matching.
///
/// Every needle character has to appear in the haystack in order. Runs of
/// consecutive characters and characters at the start of a word score
/// higher, so "co" ranks "coconut" above "cinnamon".
pub struct FuzzySearch;

const MATCH_SCORE: i32 = 1;
const CONSECUTIVE_BONUS: i32 = 4;
const WORD_START_BONUS: i32 = 3;

impl SearchMethod for FuzzySearch {
    fn match_idxs(haystack: &str, needle: &str) -> Option<(i32, Vec<usize>)> {
        let mut needle_chars = needle.chars().filter(|c| !c.is_whitespace()).peekable();
        let mut score = 0;
        let mut idxs = Vec::new();
        let mut prev: Option<char> = None;
        let mut last_match: Option<usize> = None;

        for (idx, c) in haystack.chars().enumerate() {
            let Some(&wanted) = needle_chars.peek() else {
                break;
            };
            if chars_eq(c, wanted) {
                score += MATCH_SCORE;
                if last_match.is_some_and(|last| last + 1 == idx) {
                    score += CONSECUTIVE_BONUS;
                }
                if prev.map_or(true, |p| !p.is_alphanumeric()) {
                    score += WORD_START_BONUS;
                }
                idxs.push(idx);
                last_match = Some(idx);
                needle_chars.next();
            }
            prev = Some(c);
        }

        if needle_chars.peek().is_some() {
            return None;
        }
        Some((score, idxs))
    }
}

fn chars_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
