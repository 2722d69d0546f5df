use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    model::product::Product as ProductModel, repository::store::ProductStore,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    store: ProductStore,
}

impl ProductCommandRepository {
    pub fn new(store: ProductStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        product: &ProductModel,
    ) -> Result<ProductModel, RepositoryError> {
        info!("🆕 Inserting product: {}", product.name);

        let stored = self.store.add(product.clone()).map_err(|e| {
            error!("❌ Failed to insert product {}: {e:?}", product.name);
            e
        })?;

        info!("✅ Product stored with ID: {}", stored.id);
        Ok(stored)
    }

    async fn update_product(
        &self,
        id: &str,
        product: &ProductModel,
    ) -> Result<ProductModel, RepositoryError> {
        info!("🔄 Replacing product ID: {id}");

        self.store.replace_by_id(id, product.clone()).map_err(|e| {
            error!("❌ Failed to replace product {id}: {e:?}");
            e
        })
    }

    async fn delete_product(&self, product: &ProductModel) -> Result<(), RepositoryError> {
        info!("🗑️ Removing product ID: {}", product.id);

        self.store.remove(product).map_err(|e| {
            error!("❌ Failed to remove product {}: {e:?}", product.id);
            e
        })
    }

    async fn delete_product_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        info!("🗑️ Removing product by ID: {id}");

        self.store.remove_by_id(id).map_err(|e| {
            error!("❌ Failed to remove product {id}: {e:?}");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::product::repository::ProductQueryRepositoryTrait,
        repository::ProductQueryRepository,
    };

    fn sample(name: &str) -> ProductModel {
        ProductModel {
            id: String::new(),
            name: name.into(),
            description: String::new(),
            image_url: None,
            category: "Televisão".into(),
            brand: "Sony".into(),
            price: 3500.0,
        }
    }

    #[tokio::test]
    async fn command_writes_are_visible_to_query_side() {
        let store = ProductStore::new();
        let command = ProductCommandRepository::new(store.clone());
        let query = ProductQueryRepository::new(store);

        let created = command.create_product(&sample("TV")).await.unwrap();
        assert_eq!(query.find_by_id(&created.id).await.unwrap(), Some(created.clone()));

        command.delete_product_by_id(&created.id).await.unwrap();
        assert!(query.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_by_record_reports_missing_product() {
        let command = ProductCommandRepository::new(ProductStore::new());
        let mut ghost = sample("TV");
        ghost.id = "000000000000000000000000".into();

        let err = command.delete_product(&ghost).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
