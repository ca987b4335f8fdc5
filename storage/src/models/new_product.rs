use serde::{Deserialize, Serialize};

/// Creation data for a product. Carries no id: the repository always assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
            image_url: image_url.into(),
        }
    }
}
