//! # catalogo
//!
//! A spatial parser for printed fastener-catalog text.
//!
//! The input is layout-preserving text extracted from a scanned catalog:
//! one physical line per source line, whitespace-padded so that the two
//! side-by-side tables of each page keep their column alignment. The parser
//! reconstructs that layout line by line, splits every line into an
//! independent left and right sub-stream, classifies each half (header,
//! finish, title, subtype, data row), and resolves the cross-line
//! inheritance the print layout relies on (a row may omit its NOMINAL,
//! which carries over from the previous row of the same table).
//!
//! The output is a category tree plus a flat per-SKU attribute map, with a
//! WooCommerce-style flattened view derived from the map as a pure
//! projection.
//!
//! For the per-module breakdown see [`catalog`].

pub mod catalog;
