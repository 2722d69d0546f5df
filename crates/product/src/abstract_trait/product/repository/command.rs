use crate::model::product::Product as ProductModel;
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    /// Stores the product under a freshly generated id and returns the stored record.
    async fn create_product(&self, product: &ProductModel)
    -> Result<ProductModel, RepositoryError>;
    /// Replaces the record whose id equals `product.id`; the record moves to the end.
    async fn update_product(
        &self,
        id: &str,
        product: &ProductModel,
    ) -> Result<ProductModel, RepositoryError>;
    async fn delete_product(&self, product: &ProductModel) -> Result<(), RepositoryError>;
    async fn delete_product_by_id(&self, id: &str) -> Result<(), RepositoryError>;
}
