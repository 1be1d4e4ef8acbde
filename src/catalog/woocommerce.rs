//! WooCommerce attribute projection
//!
//! A pure projection of the product map into the flat column layout the
//! store import expects: up to six attribute name/value pairs per SKU,
//! anything beyond the sixth truncated.

use std::collections::BTreeMap;

use crate::catalog::model::Product;

/// Maximum attribute pairs the import template carries per product.
const MAX_ATTRIBUTES: usize = 6;

/// Derives the per-SKU `Nombre del atributo i` / `Valor(es) del atributo i`
/// columns from the product map.
pub fn to_woocommerce_format(
    products: &BTreeMap<String, Product>,
) -> BTreeMap<String, BTreeMap<String, String>> {
    let mut woo = BTreeMap::new();
    for (sku, product) in products {
        let mut row = BTreeMap::new();
        for (i, attr) in product.attributes.iter().take(MAX_ATTRIBUTES).enumerate() {
            let slot = i + 1;
            row.insert(
                format!("Nombre del atributo {slot}"),
                attr.name.as_str().to_string(),
            );
            row.insert(format!("Valor(es) del atributo {slot}"), attr.value.clone());
        }
        woo.insert(sku.clone(), row);
    }
    woo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::{AttrName, Attribute};

    #[test]
    fn lays_out_numbered_pairs() {
        let mut products = BTreeMap::new();
        products.insert(
            "02RLHB".to_string(),
            Product {
                category_path: vec!["FIJACIONES".into()],
                attributes: vec![
                    Attribute::new(AttrName::Nominal, "#10-16"),
                    Attribute::new(AttrName::Largo, "5/8"),
                ],
            },
        );
        let woo = to_woocommerce_format(&products);
        let row = &woo["02RLHB"];
        assert_eq!(row["Nombre del atributo 1"], "NOMINAL");
        assert_eq!(row["Valor(es) del atributo 1"], "#10-16");
        assert_eq!(row["Nombre del atributo 2"], "LARGO");
        assert_eq!(row["Valor(es) del atributo 2"], "5/8");
        assert_eq!(row.len(), 4);
    }

    #[test]
    fn truncates_past_the_sixth_attribute() {
        let attributes = (1..=8)
            .map(|i| Attribute::new(AttrName::Custom(format!("Atributo {i}")), i.to_string()))
            .collect();
        let mut products = BTreeMap::new();
        products.insert(
            "ZZZ19".to_string(),
            Product {
                category_path: vec![],
                attributes,
            },
        );
        let woo = to_woocommerce_format(&products);
        let row = &woo["ZZZ19"];
        assert_eq!(row.len(), 12); // six name/value pairs
        assert_eq!(row["Nombre del atributo 6"], "Atributo 6");
        assert!(!row.contains_key("Nombre del atributo 7"));
    }
}
