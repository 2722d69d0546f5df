use crate::model::product::Product as ProductModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ProductResponse {
    #[schema(example = "5dcf3ef3314bbb238e4e84aa")]
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "urlImagem")]
    pub image_url: Option<String>,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "preco")]
    pub price: f64,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            description: value.description,
            image_url: value.image_url,
            category: value.category,
            brand: value.brand,
            price: value.price,
        }
    }
}
