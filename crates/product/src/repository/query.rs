use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    model::product::Product as ProductModel, repository::store::ProductStore,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    store: ProductStore,
}

impl ProductQueryRepository {
    pub fn new(store: ProductStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Fetching all products from store");

        self.store.all().map_err(|e| {
            error!("❌ Failed to read products: {e:?}");
            e
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by ID: {id}");

        self.store.find_by_id(id).map_err(|e| {
            error!("❌ Failed to fetch product {id}: {e:?}");
            e
        })
    }
}
