//! Column splitting
//!
//! The document prints two tables side by side separated only by
//! whitespace. The right table's start is learned once per document from
//! the header lines that contain `CODIGO` twice; every line is then split
//! at the whitespace run whose right edge sits closest to that position.
//! All offsets are character offsets, not byte offsets — the text carries
//! accented characters.

/// Learned horizontal layout of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapLayout {
    /// Character offset where the right table begins.
    pub end: usize,
    /// Whether any double-`CODIGO` header was seen at all. Without one the
    /// document is treated as single-column and right halves are ignored.
    pub two_tables: bool,
}

/// Default split position when no double header exists to learn from.
const DEFAULT_GAP_END: usize = 56;

/// Offsets more than this far from the learned position are not the
/// inter-table gap (they are gaps between fields inside one table).
const GAP_TOLERANCE: usize = 15;

/// Minimum run of spaces that can separate the two tables.
const MIN_GAP_RUN: usize = 4;

/// Learns the gap position by averaging the character offset of the second
/// `CODIGO` occurrence over every header line that has two of them.
pub fn detect_gap_layout<S: AsRef<str>>(lines: &[S]) -> GapLayout {
    let mut offsets = Vec::new();
    for line in lines {
        let upper: Vec<char> = line
            .as_ref()
            .chars()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .collect();
        if let Some(first) = find_chars(&upper, "CODIGO", 0) {
            if let Some(second) = find_chars(&upper, "CODIGO", first + 6) {
                offsets.push(second);
            }
        }
    }
    if offsets.is_empty() {
        GapLayout {
            end: DEFAULT_GAP_END,
            two_tables: false,
        }
    } else {
        GapLayout {
            end: offsets.iter().sum::<usize>() / offsets.len(),
            two_tables: true,
        }
    }
}

/// Splits a line into left and right halves at the learned gap.
///
/// Scans all space runs of length >= 4 and picks the one whose end offset
/// is nearest to `gap_end` (within the tolerance, first run wins ties).
/// When no run qualifies, falls back to walking backward from `gap_end` to
/// the start of the surrounding spaces. A line that does not reach
/// `gap_end` is entirely the left half.
///
/// Pure and deterministic: this is the seam that makes the two per-side
/// state machines independent.
pub fn split_line_halves(line: &str, gap_end: usize) -> (String, String) {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() <= gap_end {
        return (line.trim_end().to_string(), String::new());
    }

    let mut best: Option<(usize, usize)> = None;
    let mut best_dist = usize::MAX;
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == ' ' {
            let start = i;
            while i < chars.len() && chars[i] == ' ' {
                i += 1;
            }
            if i - start >= MIN_GAP_RUN {
                let dist = i.abs_diff(gap_end);
                if dist < best_dist && dist < GAP_TOLERANCE {
                    best_dist = dist;
                    best = Some((start, i));
                }
            }
        } else {
            i += 1;
        }
    }

    if let Some((start, end)) = best {
        let left: String = chars[..start].iter().collect();
        let right: String = chars[end..].iter().collect();
        return (left.trim_end().to_string(), right.trim().to_string());
    }

    // No qualifying run: back up from the learned position to the nearest
    // space and cut there.
    let mut gap_start = gap_end;
    while gap_start > 0 && chars[gap_start - 1] == ' ' {
        gap_start -= 1;
    }
    let left: String = chars[..gap_start].iter().collect();
    let right: String = chars[gap_end..].iter().collect();
    (left.trim_end().to_string(), right.trim().to_string())
}

/// Finds `needle` in a char slice starting at `from`, returning the char
/// offset of the match.
fn find_chars(haystack: &[char], needle: &str, from: usize) -> Option<usize> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (from..=haystack.len().saturating_sub(needle.len()))
        .find(|&i| haystack[i..i + needle.len()] == needle[..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_col(left: &str, right: &str) -> String {
        format!("{left:<56}{right}")
    }

    #[test]
    fn learns_gap_from_double_headers() {
        let lines = vec![
            two_col("CODIGO   NOMINAL  LARGO", "CODIGO   NOMINAL  LARGO"),
            "TORNILLO DRYWALL".to_string(),
        ];
        let layout = detect_gap_layout(&lines);
        assert!(layout.two_tables);
        assert_eq!(layout.end, 56);
    }

    #[test]
    fn falls_back_to_default_without_double_header() {
        let lines = vec!["CODIGO NOMINAL LARGO".to_string()];
        let layout = detect_gap_layout(&lines);
        assert!(!layout.two_tables);
        assert_eq!(layout.end, DEFAULT_GAP_END);
    }

    #[test]
    fn splits_at_run_near_gap() {
        let line = two_col("02RLHB   #10-16   5/8   500 U", "04RLHB   1\"   500 U");
        let (left, right) = split_line_halves(&line, 56);
        assert_eq!(left, "02RLHB   #10-16   5/8   500 U");
        assert_eq!(right, "04RLHB   1\"   500 U");
    }

    #[test]
    fn short_lines_fall_entirely_left() {
        let (left, right) = split_line_halves("Zincado Brillante", 56);
        assert_eq!(left, "Zincado Brillante");
        assert_eq!(right, "");
    }

    #[test]
    fn ignores_runs_far_from_gap() {
        // The run after the code is wide but nowhere near the learned gap.
        let line = format!("{:<56}{}", "ABC123      1/2   100 U", "DEF456   3/4   200 U");
        let (left, right) = split_line_halves(&line, 56);
        assert_eq!(left, "ABC123      1/2   100 U");
        assert_eq!(right, "DEF456   3/4   200 U");
    }

    #[test]
    fn fallback_walks_back_from_gap_position() {
        // 60 chars of text, no 4-space run at all: cut at the gap position.
        let line = "x".repeat(50) + " " + &"y".repeat(20);
        let (left, right) = split_line_halves(&line, 56);
        assert_eq!(left.chars().count(), 56);
        assert!(right.starts_with('y'));
    }

    #[test]
    fn split_is_deterministic() {
        let line = two_col("TORNILLO DRYWALL", "ROSCA METAL");
        assert_eq!(
            split_line_halves(&line, 56),
            split_line_halves(&line, 56),
        );
    }
}
