use crate::model::product::Product as ProductModel;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Query string of `GET /api/produtos`.
///
/// Filters are exact matches; a non-positive `preco` means no price filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllProducts {
    #[serde(rename = "limite", alias = "limit", default = "default_limit")]
    #[param(example = 10)]
    pub limit: i32,

    #[serde(rename = "pagina", alias = "page", default = "default_page")]
    #[param(example = 1)]
    pub page: i32,

    #[serde(rename = "nome", alias = "name", default)]
    pub name: Option<String>,

    #[serde(rename = "categoria", alias = "category", default)]
    pub category: Option<String>,

    #[serde(rename = "marca", alias = "brand", default)]
    pub brand: Option<String>,

    #[serde(rename = "preco", alias = "price", default)]
    pub price: Option<f64>,
}

fn default_page() -> i32 {
    1
}

fn default_limit() -> i32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[serde(rename = "nome", alias = "name", default)]
    #[validate(length(min = 1, message = "Nome is required"))]
    #[schema(example = "TV")]
    pub name: String,

    #[serde(rename = "descricao", alias = "description", default)]
    #[schema(example = "Smart TV 55 polegadas")]
    pub description: String,

    #[serde(rename = "urlImagem", alias = "image_url", default)]
    pub image_url: Option<String>,

    #[serde(rename = "categoria", alias = "category", default)]
    #[schema(example = "Televisão")]
    pub category: String,

    #[serde(rename = "marca", alias = "brand", default)]
    #[schema(example = "Sony")]
    pub brand: String,

    #[serde(rename = "preco", alias = "price", default)]
    #[validate(range(min = 0.0, message = "Preco cannot be negative"))]
    #[schema(example = 3500.0)]
    pub price: f64,
}

/// Body of `PUT /api/produtos/{id}`. A present `id` must equal the path id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(rename = "nome", alias = "name", default)]
    #[validate(length(min = 1, message = "Nome is required"))]
    #[schema(example = "TV")]
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
    #[validate(range(min = 0.0, message = "Preco cannot be negative"))]
    pub price: f64,
}

// the store assigns the id on create
impl From<&CreateProductRequest> for ProductModel {
    fn from(req: &CreateProductRequest) -> Self {
        ProductModel {
            id: String::new(),
            name: req.name.clone(),
            description: req.description.clone(),
            image_url: req.image_url.clone(),
            category: req.category.clone(),
            brand: req.brand.clone(),
            price: req.price,
        }
    }
}

impl UpdateProductRequest {
    pub fn into_model(&self, id: &str) -> ProductModel {
        ProductModel {
            id: id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            category: self.category.clone(),
            brand: self.brand.clone(),
            price: self.price,
        }
    }
}
