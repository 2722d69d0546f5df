use serde::{Deserialize, Serialize};

/// Stored catalog record.
///
/// `id` is owned by the store: whatever the caller puts there is replaced on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    #[serde(rename = "descricao", alias = "description", default)]
    pub description: String,
    #[serde(rename = "urlImagem", alias = "image_url", default)]
    pub image_url: Option<String>,
    #[serde(rename = "categoria", alias = "category", default)]
    pub category: String,
    #[serde(rename = "marca", alias = "brand", default)]
    pub brand: String,
    #[serde(rename = "preco", alias = "price", default)]
    pub price: f64,
}
