use crate::model::product::Product as ProductModel;
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// Every live product in insertion order.
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<ProductModel>, RepositoryError>;
}
