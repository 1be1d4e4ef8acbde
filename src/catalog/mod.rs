//! Catalog parsing pipeline
//!
//! The pipeline runs in a single pass over the input lines:
//!
//! 1. [`columns`] learns the document-wide gap position between the two
//!    side-by-side tables and splits every line into halves.
//! 2. [`classify`] provides the pure predicates that decide what role a
//!    half-line plays (header, finish, title, subtype, data row).
//! 3. [`row`] resolves the whitespace-delimited tokens of a data row into
//!    named fields through a layered set of tie-break rules.
//! 4. [`interpreter`] drives the whole thing, threading one [`state`]
//!    value per column side and emitting products into the [`model`].
//! 5. [`woocommerce`] derives the flattened attribute view.

pub mod classify;
pub mod columns;
pub mod interpreter;
pub mod loader;
pub mod model;
pub mod row;
pub mod state;
pub mod vocab;
pub mod woocommerce;

pub use classify::{fix_ocr_errors, looks_like_sku};
pub use interpreter::{extract_catalog_from_text, parse_spatial_catalog};
pub use model::{AttrName, Attribute, Catalog, CatalogExtract, CategoryNode, Product};
pub use row::{parse_table_row, RowFields};
