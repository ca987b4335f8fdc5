//! Product record model.
//!
//! Serialized as one element of the JSON array stored under the products key:
//! `{id, name, price, description, imageUrl}`.

use serde::{Deserialize, Serialize};

use super::{NewProduct, ProductPatch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    /// Data URL (`data:image/png;base64,...`) or external URL.
    #[serde(default)]
    pub image_url: String,
}

impl Product {
    /// Builds a product from creation data and an already generated id.
    pub fn from_new(id: String, data: NewProduct) -> Self {
        Self {
            id,
            name: data.name,
            price: data.price,
            description: data.description,
            image_url: data.image_url,
        }
    }

    /// Overwrites the fields present in `patch`. The id never changes.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
    }

    pub fn name_contains(&self, lowercased_keyword: &str) -> bool {
        self.name.to_lowercase().contains(lowercased_keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: "p1".to_string(),
            name: "A".to_string(),
            price: 10.0,
            description: "d".to_string(),
            image_url: "u".to_string(),
        }
    }

    #[test]
    fn test_apply_price_only_preserves_other_fields() {
        let mut product = sample();
        product.apply(ProductPatch {
            price: Some(20.0),
            ..ProductPatch::default()
        });

        assert_eq!(
            product,
            Product {
                id: "p1".to_string(),
                name: "A".to_string(),
                price: 20.0,
                description: "d".to_string(),
                image_url: "u".to_string(),
            }
        );
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut product = sample();
        product.apply(ProductPatch::default());
        assert_eq!(product, sample());
    }

    #[test]
    fn test_serializes_image_url_as_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["imageUrl"], "u");
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn test_missing_optional_fields_default_to_empty() {
        let product: Product =
            serde_json::from_str(r#"{"id":"p9","name":"Mug","price":4.5}"#).unwrap();
        assert_eq!(product.description, "");
        assert_eq!(product.image_url, "");
        assert_eq!(product.price, 4.5);
    }
}
