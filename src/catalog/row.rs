//! Row tokenizer / field resolver
//!
//! A data row arrives as the tokens of one half-line, split on runs of two
//! or more spaces. OCR merges and splits fields unpredictably, so there is
//! no reliable column anchor; instead the tokens go through five ordered
//! stages, each of which consumes the tokens it claims so later stages
//! never re-examine them:
//!
//! 1. code extraction (handles `CODE NOMINAL` merged into one token),
//! 2. package quantity (ENVASE), in three sub-rules,
//! 3. across-flats (ENTRE CARAS) reclassification,
//! 4. trailing vendor cross-reference removal,
//! 5. NOMINAL/LARGO split over whatever is left.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::classify::looks_like_sku;

/// Fields run on 2+ spaces; one embedded space means OCR glued two fields.
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// A bare count token: digits with thousands separators (`5,000`, `1.000`).
static BARE_COUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d,\.]+$").unwrap());

/// Leading `count U` prefix of an ENVASE token with a glued vendor code
/// (`100 U AB0106180` -> `100 U`).
static ENVASE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([\d,\.]+\s*U)\b").unwrap());

/// A token that is exactly `count U`.
static ENVASE_EXACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d,\.]+\s*U$").unwrap());

/// Digits and slashes only: a fraction such as `5/16`.
static FRACTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d/]+$").unwrap());

/// `#`-style nominal followed by the length (`#10-24[3/16] 3/4`).
static NOMINAL_HASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#[\d\-\[\]A-Za-z().,/]+)\s+(.+)$").unwrap());

/// Metric nominal followed by the length (`M6 30`, `M8x1.25 40`).
static NOMINAL_METRIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(M\d+[xX]?\d*[\.\d]*)\s+(.+)$").unwrap());

/// Decimal-with-bracketed-fraction nominal (`6.3[1/4-14] 180`).
static NOMINAL_BRACKET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\d\.]+\[[\d/\-]+\])\s+(.+)$").unwrap());

/// The resolved fields of one data row. Absent fields either do not apply
/// to the row or must be inherited from the surrounding table state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFields {
    pub code: String,
    pub nominal: Option<String>,
    pub largo: Option<String>,
    pub envase: Option<String>,
    pub entre_caras: Option<String>,
    pub extra: Option<String>,
}

/// Splits a half-line on multi-space runs and resolves it as a data row.
/// Returns `None` for anything that is not a data row.
pub fn parse_table_row(line: &str) -> Option<RowFields> {
    let stripped = line.trim();
    if stripped.is_empty() {
        return None;
    }
    let parts: Vec<&str> = MULTI_SPACE
        .split(stripped)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        return None;
    }
    parse_row_parts(&parts)
}

/// Resolves an already-tokenized row. See the module docs for the stage
/// order; each stage removes the tokens it consumed.
pub fn parse_row_parts(parts: &[&str]) -> Option<RowFields> {
    let first = *parts.first()?;

    // Stage 1: the first token is the code, possibly with the nominal glued
    // on by OCR ("B01TAD-BM #6-18"). A row whose first token is not a valid
    // code is not a data row.
    let (code, mut remaining): (String, Vec<String>) = match first.split_once(' ') {
        Some((head, tail)) => {
            if !looks_like_sku(head) {
                return None;
            }
            let mut rest = vec![tail.to_string()];
            rest.extend(parts[1..].iter().map(|s| s.to_string()));
            (head.to_string(), rest)
        }
        None => {
            if !looks_like_sku(first) {
                return None;
            }
            (first.to_string(), parts[1..].iter().map(|s| s.to_string()).collect())
        }
    };

    let mut fields = RowFields {
        code,
        ..RowFields::default()
    };
    let original_len = remaining.len();

    // Stage 2a: ENVASE split across two tokens ("100", "U"). Whatever
    // follows the bare "U" is dropped as a vendor cross-reference, except a
    // pure digit/slash token, which is a trailing dimension and stays.
    let mut envase_found = false;
    for i in 0..remaining.len().saturating_sub(1) {
        if BARE_COUNT.is_match(&remaining[i]) && remaining[i + 1] == "U" {
            fields.envase = Some(format!("{} U", remaining[i]));
            let kept_tail = remaining
                .get(i + 2)
                .filter(|t| FRACTION.is_match(t))
                .cloned();
            remaining.truncate(i);
            remaining.extend(kept_tail);
            envase_found = true;
            break;
        }
    }

    // Stages 2b/2c + 3: ENVASE embedded in one token, then the across-flats
    // reclassification. ENTRE CARAS only exists when ENVASE sat at the
    // second-to-last original position; that guard keeps a trailing
    // fraction that is really a LARGO from being misread.
    if !envase_found {
        let mut envase_idx = None;
        for (i, part) in remaining.iter().enumerate() {
            if part.contains(" U") {
                fields.envase = Some(match ENVASE_PREFIX.captures(part) {
                    Some(caps) => caps[1].to_string(),
                    None => part.clone(),
                });
                envase_idx = Some(i);
                break;
            } else if part.ends_with('U') && ENVASE_EXACT.is_match(part) {
                fields.envase = Some(part.clone());
                envase_idx = Some(i);
                break;
            }
        }
        if let Some(idx) = envase_idx {
            if original_len >= 2 && idx == original_len - 2 {
                let is_across_flats = remaining.last().is_some_and(|last| {
                    FRACTION.is_match(last) && !last.contains('"') && last.chars().count() <= 5
                });
                if is_across_flats {
                    fields.entre_caras = remaining.pop();
                }
            }
            remaining.remove(idx);
        }
    }

    // Stage 4: a SKU-shaped trailing token among several leftovers is the
    // manufacturer's internal reference, not a catalog field.
    if remaining.len() > 2 && remaining.last().is_some_and(|t| looks_like_sku(t)) {
        remaining.pop();
    }

    // Stage 5: NOMINAL/LARGO over what remains.
    match remaining.len() {
        0 => {}
        1 => {
            let val = &remaining[0];
            let caps = NOMINAL_HASH
                .captures(val)
                .or_else(|| NOMINAL_METRIC.captures(val))
                .or_else(|| NOMINAL_BRACKET.captures(val));
            match caps {
                Some(caps) => {
                    fields.nominal = Some(caps[1].to_string());
                    fields.largo = Some(caps[2].to_string());
                }
                // A lone unmatched value is the length; the nominal is
                // inherited from the previous row.
                None => fields.largo = Some(val.clone()),
            }
        }
        2 => {
            fields.nominal = Some(remaining[0].clone());
            fields.largo = Some(remaining[1].clone());
        }
        _ => {
            fields.nominal = Some(remaining[0].clone());
            fields.largo = Some(remaining[1].clone());
            fields.extra = Some(remaining[2].clone());
        }
    }

    Some(fields)
}
