//! Output data model
//!
//! A parse produces two structures: the flat per-SKU product map (the
//! source of truth) and the category tree (a derived index over it). The
//! merge rules live here: a code keeps the category path of its first
//! sighting, and later sightings only add attribute names the record does
//! not already have.

use serde::{Serialize, Serializer};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

/// The closed vocabulary of attribute names, plus `Custom` for the
/// numbered overflow fields and header-discovered columns whose names are
/// only known at parse time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum AttrName {
    Nominal,
    Largo,
    Envase,
    EntreCaras,
    PtaTorx,
    CodTecfi,
    Acabado,
    Custom(String),
}

impl AttrName {
    /// The label as printed in the catalog and in the JSON artifact.
    pub fn as_str(&self) -> &str {
        match self {
            AttrName::Nominal => "NOMINAL",
            AttrName::Largo => "LARGO",
            AttrName::Envase => "ENVASE",
            AttrName::EntreCaras => "ENTRE CARAS",
            AttrName::PtaTorx => "PTA TORX",
            AttrName::CodTecfi => "COD TECFI",
            AttrName::Acabado => "Acabado",
            AttrName::Custom(name) => name,
        }
    }

    /// Maps a document label back to a known name, falling back to
    /// `Custom` for anything outside the fixed vocabulary.
    pub fn from_label(label: &str) -> AttrName {
        match label {
            "NOMINAL" => AttrName::Nominal,
            "LARGO" => AttrName::Largo,
            "ENVASE" => AttrName::Envase,
            "ENTRE CARAS" => AttrName::EntreCaras,
            "PTA TORX" => AttrName::PtaTorx,
            "COD TECFI" => AttrName::CodTecfi,
            "Acabado" => AttrName::Acabado,
            other => AttrName::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for AttrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AttrName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One `{name, value}` pair of a product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: AttrName,
    pub value: String,
}

impl Attribute {
    pub fn new(name: AttrName, value: impl Into<String>) -> Self {
        Attribute {
            name,
            value: value.into(),
        }
    }
}

/// A product record: the category path active when the code was first
/// observed plus its attributes in column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Product {
    pub category_path: Vec<String>,
    pub attributes: Vec<Attribute>,
}

impl Product {
    /// Looks up an attribute value by name.
    pub fn attr(&self, name: &AttrName) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == *name)
            .map(|a| a.value.as_str())
    }

    /// Appends an attribute unless the name is already present; the first
    /// observed value of a name wins.
    fn push_first(&mut self, attr: Attribute) {
        if !self.attributes.iter().any(|a| a.name == attr.name) {
            self.attributes.push(attr);
        }
    }
}

/// One node of the category tree. `skus` holds the codes attributed
/// directly to this node, deduplicated in insertion order; `children` maps
/// path segments to subtrees and is flattened on serialization so the JSON
/// matches the nested-mapping artifact shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryNode {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skus: Vec<String>,
    #[serde(flatten)]
    pub children: BTreeMap<String, CategoryNode>,
}

impl CategoryNode {
    /// Walks a category path down from this node.
    pub fn descend<S: AsRef<str>>(&self, path: &[S]) -> Option<&CategoryNode> {
        let mut node = self;
        for segment in path {
            node = node.children.get(segment.as_ref())?;
        }
        Some(node)
    }

    /// All codes stored anywhere below (and at) this node.
    pub fn all_skus(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.skus.iter().map(String::as_str).collect();
        for child in self.children.values() {
            out.extend(child.all_skus());
        }
        out
    }
}

/// The parse output: the derived category tree plus the flat product map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    pub structure: CategoryNode,
    pub products: BTreeMap<String, Product>,
}

impl Catalog {
    /// Records one data-row sighting of `sku`.
    ///
    /// The first sighting creates the record and indexes the code into the
    /// tree under `path`; later sightings keep the stored path untouched
    /// and only contribute attribute names the record lacks. The tree is
    /// never indexed a second time, so every code appears in exactly the
    /// tree path its record stores.
    pub fn record(&mut self, sku: &str, path: Vec<String>, attrs: Vec<Attribute>) {
        match self.products.entry(sku.to_string()) {
            Entry::Vacant(slot) => {
                let mut node = &mut self.structure;
                for segment in &path {
                    node = node.children.entry(segment.clone()).or_default();
                }
                if !node.skus.iter().any(|s| s == sku) {
                    node.skus.push(sku.to_string());
                }
                let mut product = Product {
                    category_path: path,
                    attributes: Vec::new(),
                };
                for attr in attrs {
                    product.push_first(attr);
                }
                slot.insert(product);
            }
            Entry::Occupied(mut entry) => {
                for attr in attrs {
                    entry.get_mut().push_first(attr);
                }
            }
        }
    }
}

/// The full extraction artifact the driver serializes to JSON.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogExtract {
    pub catalog_name: String,
    pub total_products: usize,
    pub structure: CategoryNode,
    pub products: BTreeMap<String, Product>,
    pub attributes_woocommerce: BTreeMap<String, BTreeMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(name: AttrName, value: &str) -> Attribute {
        Attribute::new(name, value)
    }

    #[test]
    fn first_path_wins() {
        let mut catalog = Catalog::default();
        catalog.record(
            "90PCO",
            vec!["FIJACIONES".into(), "PERNO COCHE".into()],
            vec![attr(AttrName::Largo, "3/4")],
        );
        catalog.record(
            "90PCO",
            vec!["FIJACIONES".into(), "TUERCA".into()],
            vec![attr(AttrName::Largo, "1/2")],
        );
        let product = &catalog.products["90PCO"];
        assert_eq!(product.category_path, vec!["FIJACIONES", "PERNO COCHE"]);
        assert_eq!(product.attr(&AttrName::Largo), Some("3/4"));
        assert_eq!(product.attributes.len(), 1);
        // The second path never made it into the tree.
        assert!(catalog.structure.descend(&["FIJACIONES", "TUERCA"]).is_none());
    }

    #[test]
    fn later_sightings_extend_but_never_overwrite() {
        let mut catalog = Catalog::default();
        catalog.record(
            "ABC123",
            vec!["FIJACIONES".into()],
            vec![attr(AttrName::Nominal, "#10-16")],
        );
        catalog.record(
            "ABC123",
            vec!["FIJACIONES".into()],
            vec![
                attr(AttrName::Nominal, "#8"),
                attr(AttrName::EntreCaras, "5/16"),
            ],
        );
        let product = &catalog.products["ABC123"];
        assert_eq!(product.attr(&AttrName::Nominal), Some("#10-16"));
        assert_eq!(product.attr(&AttrName::EntreCaras), Some("5/16"));
        assert_eq!(product.attributes.len(), 2);
    }

    #[test]
    fn tree_indexes_every_recorded_code_once() {
        let mut catalog = Catalog::default();
        let path = vec!["FIJACIONES".to_string(), "TORNILLO DRYWALL".to_string()];
        catalog.record("ABC123", path.clone(), vec![]);
        catalog.record("DEF456", path.clone(), vec![]);
        catalog.record("ABC123", path.clone(), vec![]);
        let node = catalog.structure.descend(&path).unwrap();
        assert_eq!(node.skus, vec!["ABC123", "DEF456"]);
    }

    #[test]
    fn attr_labels_round_trip() {
        for name in [
            AttrName::Nominal,
            AttrName::Largo,
            AttrName::Envase,
            AttrName::EntreCaras,
            AttrName::PtaTorx,
            AttrName::CodTecfi,
            AttrName::Acabado,
            AttrName::Custom("Atributo 1".into()),
        ] {
            assert_eq!(AttrName::from_label(name.as_str()), name);
        }
    }

    #[test]
    fn tree_serializes_as_nested_mapping() {
        let mut catalog = Catalog::default();
        catalog.record(
            "ABC123",
            vec!["FIJACIONES".into(), "TORNILLO DRYWALL".into()],
            vec![attr(AttrName::Largo, "5/8")],
        );
        let json = serde_json::to_value(&catalog.structure).unwrap();
        assert_eq!(
            json["FIJACIONES"]["TORNILLO DRYWALL"]["skus"][0],
            "ABC123"
        );
    }
}
