//! Line and token classifiers
//!
//! Pure predicates over a single trimmed line (or half-line). None of them
//! mutate state and none of them can fail; an ambiguous line may satisfy
//! more than one predicate, and the interpreter resolves that by trying
//! them in a fixed priority order (header > finish > title > continuation
//! > subtype > data row, first match wins).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::vocab::{
    FINISH_PREFIXES, INCOMPLETE_TITLE_ENDINGS, LEGACY_SKU_DENYLIST, LOGO_DENYLIST, SKU_DENYLIST,
    SUBTYPE_KEYWORDS, TITLE_CONTINUATIONS, TITLE_NOUNS,
};

/// Character shape of a catalog SKU: starts with a letter or digit, then
/// letters, digits, `-`, `.`, brackets or `/`.
static SKU_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9][A-Z0-9\-\.\[\]/]*$").unwrap());

/// The legacy shape is the same minus `/` (the older extraction split on it).
static LEGACY_SKU_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9][A-Z0-9\-\.\[\]]*$").unwrap());

/// Determines whether a token looks like a product code.
///
/// Length must be within [3, 20], the token must contain at least one digit
/// and one letter without being all digits, must match [`SKU_SHAPE`], and
/// must not be a known non-code word (units, colors, finish names, header
/// words, weld-rod designators, Torx bit sizes).
pub fn looks_like_sku(token: &str) -> bool {
    let t = token.trim().to_uppercase();
    let len = t.chars().count();
    if !(3..=20).contains(&len) {
        return false;
    }
    if SKU_DENYLIST.contains(&t.as_str()) {
        return false;
    }
    if !t.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    if t.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if !SKU_SHAPE.is_match(&t) {
        return false;
    }
    t.chars().any(|c| c.is_ascii_alphabetic())
}

/// The looser SKU rule used by older cached extractions: length [2, 25],
/// a short denylist, and at least one digit or SKU punctuation mark.
pub fn looks_like_sku_legacy(token: &str) -> bool {
    let len = token.chars().count();
    if !(2..=25).contains(&len) {
        return false;
    }
    let t = token.to_uppercase();
    if LEGACY_SKU_DENYLIST.contains(&t.as_str()) {
        return false;
    }
    if !t
        .chars()
        .any(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | '[' | ']'))
    {
        return false;
    }
    LEGACY_SKU_SHAPE.is_match(&t)
}

/// Whether the first whitespace-delimited token of a line is SKU-shaped.
/// The interpreter uses this as the gate that keeps data rows out of the
/// title and subtype classifiers.
pub fn first_token_is_sku(line: &str) -> bool {
    line.split_whitespace().next().is_some_and(looks_like_sku)
}

/// Repairs the one known scanning confusion in product codes: the letter
/// `O` read where a `0` was printed. Every `O` immediately followed by a
/// digit becomes `0` (`NO4RLBC` -> `N04RLBC`).
///
/// The scan runs right to left so that runs like `OO4` collapse in a
/// single pass, which makes the repair idempotent. Only apply this to
/// tokens already accepted by [`looks_like_sku`]; on free text it would
/// corrupt legitimate words.
pub fn fix_ocr_errors(sku: &str) -> String {
    let mut chars: Vec<char> = sku.chars().collect();
    for i in (0..chars.len()).rev() {
        if chars[i] == 'O' && chars.get(i + 1).is_some_and(|c| c.is_ascii_digit()) {
            chars[i] = '0';
        }
    }
    chars.into_iter().collect()
}

/// Removes brand watermark words from a title or subtype fragment.
pub fn clean_logo_text(text: &str) -> String {
    text.split_whitespace()
        .filter(|w| !LOGO_DENYLIST.contains(&w.to_uppercase().as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A table header line names the code column and at least one data column.
pub fn is_header_line(line: &str) -> bool {
    let upper = line.trim().to_uppercase();
    upper.contains("CODIGO") && (upper.contains("NOMINAL") || upper.contains("LARGO"))
}

/// A finish (acabado) line opens with one of the known finish names.
pub fn is_finish_line(line: &str) -> bool {
    let lower = line.trim().to_lowercase();
    FINISH_PREFIXES.iter().any(|f| lower.starts_with(f))
}

/// A product title line contains one of the product nouns and is neither a
/// header, a finish line, nor a bare logo.
pub fn is_title_line(line: &str) -> bool {
    let stripped = line.trim();
    if stripped.chars().count() < 5 {
        return false;
    }
    if is_header_line(line) || is_finish_line(line) {
        return false;
    }
    let upper = stripped.to_uppercase();
    if LOGO_DENYLIST.contains(&upper.as_str()) {
        return false;
    }
    TITLE_NOUNS.iter().any(|kw| upper.contains(kw))
}

/// Subtype detection over a full (unsplit) line: same keyword set as
/// [`is_subtype_text`] but with the looser 80-character cap.
pub fn is_subtype_line(line: &str) -> bool {
    let stripped = line.trim();
    if stripped.chars().count() < 3 {
        return false;
    }
    if is_header_line(line) || is_finish_line(line) {
        return false;
    }
    let upper = stripped.to_uppercase();
    SUBTYPE_KEYWORDS.iter().any(|kw| upper.contains(kw)) && stripped.chars().count() < 80
}

/// Subtype detection over an already-split half-line (length in [3, 40]).
pub fn is_subtype_text(text: &str) -> bool {
    let stripped = text.trim();
    let len = stripped.chars().count();
    if !(3..=40).contains(&len) {
        return false;
    }
    let upper = stripped.to_uppercase();
    SUBTYPE_KEYWORDS.iter().any(|kw| upper.contains(kw))
}

/// A title ending in one of the incomplete-ending function words needs a
/// continuation line (`TORNILLO PARA` + `TERRAZAS`).
pub fn is_incomplete_title(title: &str) -> bool {
    title
        .trim()
        .to_uppercase()
        .split_whitespace()
        .last()
        .is_some_and(|w| INCOMPLETE_TITLE_ENDINGS.contains(&w))
}

/// Whether a short, digit-free, all-caps fragment can complete a dangling
/// title.
pub fn is_title_continuation(text: &str) -> bool {
    let stripped = text.trim();
    let len = stripped.chars().count();
    if !(3..=30).contains(&len) {
        return false;
    }
    if is_header_line(text) || is_finish_line(text) {
        return false;
    }
    if stripped.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    let upper = stripped.to_uppercase();
    if LOGO_DENYLIST.contains(&upper.as_str()) {
        return false;
    }
    TITLE_CONTINUATIONS.contains(&upper.as_str()) || (len > 3 && is_all_uppercase(stripped))
}

/// True when the text has at least one cased character and no lowercase.
fn is_all_uppercase(s: &str) -> bool {
    let mut has_cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_real_codes() {
        assert!(looks_like_sku("B01TAD-BM"));
        assert!(looks_like_sku("04RLHB"));
        assert!(looks_like_sku("116RLHN"));
        assert!(looks_like_sku("ABC123"));
        assert!(looks_like_sku("01S6010"));
    }

    #[test]
    fn rejects_non_codes() {
        assert!(!looks_like_sku("#10-16")); // nominal size
        assert!(!looks_like_sku("500 U")); // package quantity
        assert!(!looks_like_sku("1\"")); // length
        assert!(!looks_like_sku(""));
        assert!(!looks_like_sku("A")); // too short
        assert!(!looks_like_sku("1234")); // all digits
        assert!(!looks_like_sku("ZINCADO")); // no digit
    }

    #[test]
    fn rejects_denylisted_designators() {
        assert!(!looks_like_sku("T10")); // Torx bit size
        assert!(!looks_like_sku("E6010")); // AWS weld rod
        assert!(!looks_like_sku("BALDE"));
    }

    #[test]
    fn legacy_rule_is_looser() {
        assert!(looks_like_sku_legacy("5G"));
        assert!(!looks_like_sku("5G"));
        assert!(looks_like_sku_legacy("65ATPF-G"));
        assert!(!looks_like_sku_legacy("CODIGO"));
        assert!(!looks_like_sku_legacy("XYZQ")); // no digit nor punctuation
    }

    #[test]
    fn ocr_repair_replaces_o_before_digit() {
        assert_eq!(fix_ocr_errors("NO4RLBC"), "N04RLBC");
        assert_eq!(fix_ocr_errors("TORNILLO"), "TORNILLO");
        assert_eq!(fix_ocr_errors("O1ABC"), "01ABC");
    }

    #[test]
    fn ocr_repair_collapses_runs_and_is_idempotent() {
        assert_eq!(fix_ocr_errors("AOO4"), "A004");
        assert_eq!(fix_ocr_errors("A004"), "A004");
        let once = fix_ocr_errors("NOO4RLOBC");
        assert_eq!(fix_ocr_errors(&once), once);
    }

    #[test]
    fn header_line_needs_codigo_plus_data_column() {
        assert!(is_header_line("CODIGO   NOMINAL  LARGO   ENVASE"));
        assert!(is_header_line("  codigo largo  "));
        assert!(!is_header_line("CODIGO"));
        assert!(!is_header_line("NOMINAL LARGO"));
    }

    #[test]
    fn finish_lines_match_by_prefix() {
        assert!(is_finish_line("Zincado Brillante"));
        assert!(is_finish_line("  Pavonado (continuación)"));
        assert!(is_finish_line("BALDE 1000 unidades"));
        assert!(!is_finish_line("TORNILLO ZINCADO")); // prefix, not contains
    }

    #[test]
    fn title_lines_carry_product_nouns() {
        assert!(is_title_line("TORNILLO DRYWALL"));
        assert!(is_title_line("PERNO COCHE UNC / BSW"));
        assert!(!is_title_line("ESSVE")); // bare logo
        assert!(!is_title_line("ROSCA METAL")); // subtype, not title
        assert!(!is_title_line("CODIGO NOMINAL LARGO")); // header wins
    }

    #[test]
    fn subtype_text_is_length_capped() {
        assert!(is_subtype_text("ROSCA METAL"));
        assert!(is_subtype_text("PUNTA FINA"));
        assert!(!is_subtype_text("XX"));
        let long = "ROSCA ".repeat(8);
        assert!(!is_subtype_text(&long));
        assert!(is_subtype_line(&long)); // the unsplit-line cap is 80
    }

    #[test]
    fn dangling_titles_and_continuations() {
        assert!(is_incomplete_title("TORNILLO PARA"));
        assert!(is_incomplete_title("TORNILLO CABEZA DE"));
        assert!(!is_incomplete_title("TORNILLO DRYWALL"));
        assert!(is_title_continuation("TERRAZAS"));
        assert!(is_title_continuation("FIBROCEMENTO")); // all caps, digit free
        assert!(!is_title_continuation("madera lisa")); // lowercase
        assert!(!is_title_continuation("T25 x4")); // digits mean data
        assert!(!is_title_continuation("Zincado Brillante"));
    }

    #[test]
    fn logo_words_are_stripped() {
        assert_eq!(clean_logo_text("TORNILLO PARA ESSVE"), "TORNILLO PARA");
        assert_eq!(clean_logo_text("KNAPP"), "");
        assert_eq!(clean_logo_text("PERNO COCHE"), "PERNO COCHE");
    }

    #[test]
    fn sku_gate_on_first_token() {
        assert!(first_token_is_sku("02RLHB   #10-16   5/8   500 U"));
        assert!(!first_token_is_sku("ROSCA METAL"));
        assert!(!first_token_is_sku(""));
    }
}
