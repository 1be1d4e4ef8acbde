//! Per-column parsing state
//!
//! Each column side carries its own state so the two side-by-side tables
//! never bleed into each other: a header in the right column must not
//! reset the nominal being inherited in the left one. The interpreter owns
//! two instances and applies these transitions per classified half-line.

use crate::catalog::classify::{clean_logo_text, is_incomplete_title};

/// Mutable parse state of one column side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnState {
    /// Committed product-type title (third path segment).
    pub product_type: String,
    /// Current subtype (fourth path segment).
    pub subtype: String,
    /// Current finish, attached to rows as the `Acabado` attribute.
    pub finish: String,
    /// Most recently resolved NOMINAL, inherited by rows that omit theirs.
    pub last_nominal: String,
    /// Title text accumulated across lines but not yet committed.
    pub pending_title: String,
}

impl ColumnState {
    /// A new top-level section or page-break subcategory invalidates all
    /// table context on this side.
    pub fn reset_section(&mut self) {
        self.product_type.clear();
        self.subtype.clear();
        self.pending_title.clear();
    }

    /// Commits the accumulated title, if any, as the product type.
    pub fn flush_pending_title(&mut self) {
        if !self.pending_title.is_empty() {
            self.product_type = std::mem::take(&mut self.pending_title);
        }
    }

    /// A header starts a new table: the pending title is committed and the
    /// per-table context (inherited nominal, subtype) is dropped. The
    /// category and product type carry over.
    pub fn on_header(&mut self) {
        self.flush_pending_title();
        self.last_nominal.clear();
        self.subtype.clear();
    }

    /// A finish line sets the finish; unless it continues the previous
    /// finish section, it also invalidates the subtype.
    pub fn on_finish(&mut self, text: &str) {
        self.finish = text.to_string();
        if !text.to_lowercase().contains("continuaci") {
            self.subtype.clear();
        }
    }

    /// Titles accumulate rather than commit, to support multi-line titles
    /// split by the layout. Logo watermarks are stripped on the way in.
    pub fn on_title(&mut self, text: &str) {
        let cleaned = clean_logo_text(text);
        if self.pending_title.is_empty() {
            self.pending_title = cleaned;
        } else {
            self.pending_title.push(' ');
            self.pending_title.push_str(&cleaned);
        }
    }

    /// Whether a dangling pending title is waiting for its continuation.
    pub fn wants_continuation(&self) -> bool {
        !self.pending_title.is_empty() && is_incomplete_title(&self.pending_title)
    }

    /// Appends the continuation of a dangling title.
    pub fn on_continuation(&mut self, text: &str) {
        self.pending_title.push(' ');
        self.pending_title.push_str(text);
    }

    /// A subtype fragment either completes a pending title (short
    /// subtype-looking lines are often title continuations) or becomes the
    /// current subtype.
    pub fn on_subtype(&mut self, text: &str) {
        let cleaned = clean_logo_text(text);
        if self.pending_title.is_empty() {
            self.subtype = cleaned;
        } else {
            self.pending_title.push(' ');
            self.pending_title.push_str(&cleaned);
        }
    }

    /// Updates the inherited nominal from a row's resolved NOMINAL, or
    /// inherits the previous one when the row omitted it.
    pub fn resolve_nominal(&mut self, nominal: Option<String>) -> Option<String> {
        match nominal.filter(|n| !n.trim().is_empty()) {
            Some(n) => {
                self.last_nominal = n.clone();
                Some(n)
            }
            None if !self.last_nominal.is_empty() => Some(self.last_nominal.clone()),
            None => None,
        }
    }
}
