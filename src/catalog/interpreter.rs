//! Line-stream interpreter
//!
//! The top-level loop walks the document lines in order, keeps independent
//! left/right column state, and dispatches each half-line through the
//! classifier chain. A line that matches nothing is dropped silently: the
//! scans are full of running headers and decorative noise, and a skipped
//! false negative is always preferable to a fabricated record.

use crate::catalog::classify::{
    first_token_is_sku, fix_ocr_errors, is_finish_line, is_header_line, is_subtype_text,
    is_title_continuation, is_title_line,
};
use crate::catalog::columns::{detect_gap_layout, split_line_halves};
use crate::catalog::model::{AttrName, Attribute, Catalog, CatalogExtract};
use crate::catalog::row::{parse_table_row, RowFields};
use crate::catalog::state::ColumnState;
use crate::catalog::vocab::{KNOWN_MAIN_SECTIONS, SECTION_PREFIXES};
use crate::catalog::woocommerce::to_woocommerce_format;

/// Category context shared by both column sides.
const DEFAULT_CATEGORY: &str = "FIJACIONES";
const DEFAULT_SUBCATEGORY: &str = "Tornillos para Volcanita";

/// The role a half-line plays, decided by trying the classifiers in fixed
/// priority order (first match wins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HalfLineKind {
    /// Table header: commits the pending title, starts a new table.
    Header,
    /// Finish (acabado) banner.
    Finish,
    /// Product-title fragment, accumulated until a header commits it.
    Title,
    /// Completion of a dangling title (`TORNILLO PARA` + `TERRAZAS`).
    TitleContinuation,
    /// Subtype descriptor (`ROSCA METAL`).
    Subtype,
    /// A data row with its resolved fields.
    DataRow(RowFields),
    /// Unclassifiable; dropped with no state change.
    Noise,
}

/// Classifies one half-line against the current column state.
///
/// The order is the load-bearing part: header > finish > title >
/// continuation > subtype > data row. Title and subtype are gated on the
/// first token not being SKU-shaped, so a data row whose values happen to
/// contain a keyword never masquerades as structure.
pub fn classify_half(text: &str, state: &ColumnState) -> HalfLineKind {
    let stripped = text.trim();
    if stripped.is_empty() {
        return HalfLineKind::Noise;
    }
    if is_header_line(text) {
        return HalfLineKind::Header;
    }
    if is_finish_line(text) {
        return HalfLineKind::Finish;
    }
    let sku_first = first_token_is_sku(stripped);
    if is_title_line(text) && !sku_first {
        return HalfLineKind::Title;
    }
    if state.wants_continuation() && is_title_continuation(stripped) {
        return HalfLineKind::TitleContinuation;
    }
    if is_subtype_text(stripped) && !sku_first {
        return HalfLineKind::Subtype;
    }
    match parse_table_row(text) {
        Some(row) => HalfLineKind::DataRow(row),
        None => HalfLineKind::Noise,
    }
}

/// Parses a whole document into the category tree + product map.
///
/// Pure function of the input text: fresh state per call, no I/O, a single
/// pass over the lines. Malformed input never fails the parse; anything
/// unrecognizable is skipped.
pub fn parse_spatial_catalog(text: &str) -> Catalog {
    let lines: Vec<&str> = text.lines().collect();
    let gap = detect_gap_layout(&lines);

    let mut catalog = Catalog::default();
    let mut category = DEFAULT_CATEGORY.to_string();
    let mut subcategory = DEFAULT_SUBCATEGORY.to_string();
    let mut left = ColumnState::default();
    let mut right = ColumnState::default();
    let mut after_page_break = false;

    for line in &lines {
        // Page footers carry no content.
        if line.contains("Página") && line.contains(" de ") {
            continue;
        }
        let stripped = line.trim();
        if stripped.starts_with("<<<") {
            after_page_break = true;
            continue;
        }

        // Section change: "FIJACIONES - Tornillos para Volcanita". Lines
        // with "Continuación" are product-type carry-overs, not sections.
        let upper_line = line.to_uppercase();
        if line.contains(" - ")
            && !upper_line.contains("CODIGO")
            && !upper_line.contains("CONTINUACI")
        {
            let stripped_upper = stripped.to_uppercase();
            if SECTION_PREFIXES.iter().any(|p| stripped_upper.starts_with(p)) {
                if let Some((cat, subcat)) = stripped.split_once(" - ") {
                    category = cat.trim().to_string();
                    subcategory = subcat.trim().to_string();
                    left.reset_section();
                    right.reset_section();
                    after_page_break = false;
                    continue;
                }
            }
        }

        // Right after a page break, a short bare line is either a new main
        // section (from the catalog's index page) or a repeat of the
        // current subcategory printed as a page header.
        if !stripped.is_empty() && after_page_break {
            let normalized = normalize_spaces_upper(stripped);
            let mut is_known_section = false;
            for section in KNOWN_MAIN_SECTIONS {
                if normalized.contains(section) || section.contains(normalized.as_str()) {
                    is_known_section = true;
                    break;
                }
            }
            if is_known_section {
                subcategory = stripped.to_string();
                left.reset_section();
                right.reset_section();
                after_page_break = false;
                continue;
            }
            let subcat_norm = normalize_spaces_upper(&subcategory);
            if subcat_norm.contains(&normalized) || normalized.contains(&subcat_norm) {
                // Page-repeat header; drop it but also drop any half-built
                // title it would otherwise glue onto.
                left.pending_title.clear();
                right.pending_title.clear();
                after_page_break = false;
                continue;
            }
        }
        if !stripped.is_empty() {
            after_page_break = false;
        }

        // A line that is a header across its full width starts new tables
        // on both sides at once; nothing else on it needs processing.
        if is_header_line(line) {
            left.flush_pending_title();
            right.flush_pending_title();
            let (l, r) = split_line_halves(line, gap.end);
            if is_header_line(&l) && (r.trim().is_empty() || is_header_line(&r)) {
                left.on_header();
                right.on_header();
                continue;
            }
        }

        let (left_text, right_text) = split_line_halves(line, gap.end);
        process_half(&left_text, &mut left, &category, &subcategory, &mut catalog);
        if gap.two_tables {
            process_half(&right_text, &mut right, &category, &subcategory, &mut catalog);
        }
    }

    catalog
}

/// Runs the full pipeline and wraps the result in the JSON artifact
/// envelope, including the flattened WooCommerce attribute view.
pub fn extract_catalog_from_text(text: &str) -> CatalogExtract {
    let catalog = parse_spatial_catalog(text);
    let attributes_woocommerce = to_woocommerce_format(&catalog.products);
    CatalogExtract {
        catalog_name: "Catalogo Mamut 2025".to_string(),
        total_products: catalog.products.len(),
        structure: catalog.structure,
        products: catalog.products,
        attributes_woocommerce,
    }
}

/// Applies one half-line to one column side.
fn process_half(
    text: &str,
    state: &mut ColumnState,
    category: &str,
    subcategory: &str,
    catalog: &mut Catalog,
) {
    let stripped = text.trim();
    match classify_half(text, state) {
        HalfLineKind::Header => state.on_header(),
        HalfLineKind::Finish => state.on_finish(stripped),
        HalfLineKind::Title => state.on_title(stripped),
        HalfLineKind::TitleContinuation => state.on_continuation(stripped),
        HalfLineKind::Subtype => state.on_subtype(stripped),
        HalfLineKind::DataRow(row) => emit_row(row, state, category, subcategory, catalog),
        HalfLineKind::Noise => {}
    }
}

/// Emits one resolved data row into the catalog.
fn emit_row(
    row: RowFields,
    state: &mut ColumnState,
    category: &str,
    subcategory: &str,
    catalog: &mut Catalog,
) {
    let sku = fix_ocr_errors(&row.code.to_uppercase());
    let nominal = state.resolve_nominal(row.nominal);

    let mut attrs = Vec::new();
    if let Some(v) = nominal {
        attrs.push(Attribute::new(AttrName::Nominal, v));
    }
    if let Some(v) = row.largo {
        attrs.push(Attribute::new(AttrName::Largo, v));
    }
    if let Some(v) = row.envase {
        attrs.push(Attribute::new(AttrName::Envase, v));
    }
    if let Some(v) = row.entre_caras {
        attrs.push(Attribute::new(AttrName::EntreCaras, v));
    }
    if let Some(v) = row.extra {
        attrs.push(Attribute::new(AttrName::Custom("Atributo 1".to_string()), v));
    }
    if !state.finish.is_empty() {
        attrs.push(Attribute::new(AttrName::Acabado, state.finish.clone()));
    }

    let product_type = normalize_product_type(&state.product_type);
    let mut path = Vec::new();
    for segment in [category, subcategory, &product_type, &state.subtype] {
        if !segment.is_empty() {
            path.push(segment.to_string());
        }
    }

    catalog.record(&sku, path, attrs);
}

/// Normalizes the committed product type before it becomes a path segment:
/// collapsed whitespace, expanded abbreviations, and no carried-over
/// "- Continuación" marker (a continuation is the same category).
fn normalize_product_type(product_type: &str) -> String {
    let mut cleaned = product_type.split_whitespace().collect::<Vec<_>>().join(" ");
    cleaned = cleaned.replace("R. METAL", "ROSCA METAL");
    cleaned = cleaned.replace("R. MAD.", "ROSCA MADERA");
    cleaned = cleaned
        .replace(" - Continuación", "")
        .replace(" - Continuacion", "");
    cleaned.trim().to_string()
}

fn normalize_spaces_upper(text: &str) -> String {
    text.to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_priority_order() {
        let state = ColumnState::default();
        // A header that also contains a product noun is still a header.
        assert_eq!(
            classify_half("CODIGO  NOMINAL  LARGO TORNILLO", &state),
            HalfLineKind::Header
        );
        // A finish that also contains a subtype keyword is a finish.
        assert_eq!(
            classify_half("Inox PUNTA FINA", &state),
            HalfLineKind::Finish
        );
        assert_eq!(
            classify_half("TORNILLO DRYWALL", &state),
            HalfLineKind::Title
        );
        assert_eq!(
            classify_half("ROSCA METAL", &state),
            HalfLineKind::Subtype
        );
        assert!(matches!(
            classify_half("02RLHB   #10-16   5/8   500 U", &state),
            HalfLineKind::DataRow(_)
        ));
        assert_eq!(classify_half("* * *", &state), HalfLineKind::Noise);
    }

    #[test]
    fn continuation_requires_a_dangling_title() {
        let mut state = ColumnState::default();
        // Without a pending title, TERRAZAS is nothing.
        assert_eq!(classify_half("TERRAZAS", &state), HalfLineKind::Noise);
        state.on_title("TORNILLO PARA");
        assert_eq!(
            classify_half("TERRAZAS", &state),
            HalfLineKind::TitleContinuation
        );
    }

    #[test]
    fn sku_first_token_blocks_title_and_subtype() {
        let state = ColumnState::default();
        // TORNILLO in a value position must not turn a row into a title.
        let kind = classify_half("52TOR1   TORNILLO   100 U", &state);
        assert!(matches!(kind, HalfLineKind::DataRow(_)));
    }

    #[test]
    fn normalizes_product_type_segments() {
        assert_eq!(
            normalize_product_type("TORNILLO  R. METAL"),
            "TORNILLO ROSCA METAL"
        );
        assert_eq!(
            normalize_product_type("PERNO COCHE - Continuación"),
            "PERNO COCHE"
        );
        assert_eq!(normalize_product_type(""), "");
    }
}
