use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::{api::ApiResponse, product::ProductResponse},
    },
    model::product::Product as ProductModel,
    service::OperationTracer,
};
use anyhow::Result;
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::Method,
};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
    tracer: OperationTracer,
}

impl ProductCommandService {
    pub fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        Self {
            query,
            command,
            tracer: OperationTracer::new("product-command-service", registry),
        }
    }

    async fn require_existing(&self, id: &str) -> Result<ProductModel, ServiceError> {
        match self.query.find_by_id(id).await? {
            Some(product) => Ok(product),
            None => Err(ServiceError::Repo(RepositoryError::NotFound)),
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🏗️ Creating new product: {}", req.name);

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "product_create",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "create"),
                KeyValue::new("product.name", req.name.clone()),
            ],
        );

        let product = match self.command.create_product(&ProductModel::from(req)).await {
            Ok(product) => product,
            Err(e) => {
                let msg = format!("Failed to create product: {e:?}");
                error!("❌ {msg}");
                self.tracer.error(&tracing_ctx, method, &msg);
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Product created with ID: {}", product.id);
        self.tracer
            .success(&tracing_ctx, method, "Product created successfully");

        Ok(ApiResponse::success(
            "Product created successfully",
            ProductResponse::from(product),
        ))
    }

    async fn update_product(
        &self,
        id: &str,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🔄 Updating product ID: {id}");

        let method = Method::Put;
        let tracing_ctx = self.tracer.start(
            "product_update",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "update"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        if let Err(e) = self.require_existing(id).await {
            let msg = format!("Product {id} not available for update: {e}");
            self.tracer.error(&tracing_ctx, method, &msg);
            return Err(e);
        }

        let product = match self.command.update_product(id, &req.into_model(id)).await {
            Ok(product) => product,
            Err(e) => {
                let msg = format!("Failed to update product {id}: {e:?}");
                error!("❌ {msg}");
                self.tracer.error(&tracing_ctx, method, &msg);
                return Err(ServiceError::Repo(e));
            }
        };

        self.tracer
            .success(&tracing_ctx, method, "Product updated successfully");

        Ok(ApiResponse::success(
            "Product updated successfully",
            ProductResponse::from(product),
        ))
    }

    async fn delete_product(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        info!("🧨 Deleting product ID: {id}");

        let method = Method::Delete;
        let tracing_ctx = self.tracer.start(
            "product_delete",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        let product = match self.require_existing(id).await {
            Ok(product) => product,
            Err(e) => {
                let msg = format!("Product {id} not available for delete: {e}");
                self.tracer.error(&tracing_ctx, method, &msg);
                return Err(e);
            }
        };

        if let Err(e) = self.command.delete_product(&product).await {
            let msg = format!("Failed to delete product {id}: {e:?}");
            error!("❌ {msg}");
            self.tracer.error(&tracing_ctx, method, &msg);
            return Err(ServiceError::Repo(e));
        }

        self.tracer
            .success(&tracing_ctx, method, "Product deleted permanently");

        Ok(ApiResponse::success("Product deleted permanently", ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::product::service::ProductQueryServiceTrait,
        domain::requests::product::FindAllProducts,
        repository::{ProductCommandRepository, ProductQueryRepository, ProductStore},
        service::{
            ProductQueryService,
            filter::{FilterMode, PaginationMode},
            test_support::seeded_store,
        },
    };
    use std::sync::Arc;

    struct Fixture {
        store: ProductStore,
        command: ProductCommandService,
        query: ProductQueryService,
    }

    fn fixture() -> Fixture {
        let store = seeded_store();
        let mut registry = Registry::default();
        let query_repo = Arc::new(ProductQueryRepository::new(store.clone()));

        let command = ProductCommandService::new(
            query_repo.clone(),
            Arc::new(ProductCommandRepository::new(store.clone())),
            &mut registry,
        );
        let query = ProductQueryService::new(
            query_repo,
            &mut registry,
            FilterMode::default(),
            PaginationMode::default(),
        );

        Fixture {
            store,
            command,
            query,
        }
    }

    fn create_request() -> CreateProductRequest {
        CreateProductRequest {
            name: "Soundbar".into(),
            description: "Soundbar 2.1".into(),
            image_url: Some("https://example.com/soundbar.png".into()),
            category: "Áudio".into(),
            brand: "LG".into(),
            price: 1299.0,
        }
    }

    fn update_request(id: Option<&str>) -> UpdateProductRequest {
        UpdateProductRequest {
            id: id.map(String::from),
            name: "TV 4K".into(),
            description: "TV 55 polegadas".into(),
            image_url: Some("https://example.com/tv.png".into()),
            category: "Eletrônicos".into(),
            brand: "LG".into(),
            price: 4100.5,
        }
    }

    #[tokio::test]
    async fn create_then_find_returns_equal_record_with_store_id() {
        let f = fixture();

        let created = f.command.create_product(&create_request()).await.unwrap().data;
        assert_eq!(created.id.len(), 24);

        let found = f.query.find_by_id(&created.id).await.unwrap().data;
        assert_eq!(found, created);
        assert_eq!(f.store.len().unwrap(), 4);
    }

    #[tokio::test]
    async fn create_accepts_any_price_and_name() {
        let f = fixture();
        let mut req = create_request();
        req.name.clear();
        req.price = -1.0;

        let created = f.command.create_product(&req).await.unwrap().data;
        assert_eq!(created.price, -1.0);
        assert!(created.name.is_empty());
        assert_eq!(f.store.len().unwrap(), 4);
    }

    #[tokio::test]
    async fn update_accepts_negative_price() {
        let f = fixture();
        let id = "5dcf3ef3314bbb238e4e84ab";
        let mut req = update_request(Some(id));
        req.price = -50.0;

        let updated = f.command.update_product(id, &req).await.unwrap().data;
        assert_eq!(updated.price, -50.0);
    }

    #[tokio::test]
    async fn update_replaces_every_mutable_attribute() {
        let f = fixture();
        let id = "5dcf3ef3314bbb238e4e84aa";

        let updated = f
            .command
            .update_product(id, &update_request(Some(id)))
            .await
            .unwrap()
            .data;

        let found = f.query.find_by_id(id).await.unwrap().data;
        assert_eq!(found, updated);
        assert_eq!(found.name, "TV 4K");
        assert_eq!(found.description, "TV 55 polegadas");
        assert_eq!(found.image_url.as_deref(), Some("https://example.com/tv.png"));
        assert_eq!(found.category, "Eletrônicos");
        assert_eq!(found.brand, "LG");
        assert_eq!(found.price, 4100.5);

        // the replaced record moves to the end
        let all = f.query.find_all(&FindAllProducts::default()).await.unwrap();
        assert_eq!(all.data.last().map(|p| p.id.as_str()), Some(id));
    }

    #[tokio::test]
    async fn update_missing_product_leaves_collection_unchanged() {
        let f = fixture();
        let before = f.store.all().unwrap();

        let err = f
            .command
            .update_product("ffffffffffffffffffffffff", &update_request(None))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(f.store.all().unwrap(), before);
    }

    #[tokio::test]
    async fn delete_removes_product_once() {
        let f = fixture();
        let id = "5dcf3ef3314bbb238e4e84ab";

        let res = f.command.delete_product(id).await.unwrap();
        assert_eq!(res.status, "success");
        assert_eq!(f.store.len().unwrap(), 2);
        assert!(f.query.find_by_id(id).await.unwrap_err().is_not_found());

        let again = f.command.delete_product(id).await.unwrap_err();
        assert!(again.is_not_found());
        assert_eq!(f.store.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn delete_missing_product_leaves_collection_unchanged() {
        let f = fixture();

        let err = f
            .command
            .delete_product("ffffffffffffffffffffffff")
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(f.store.len().unwrap(), 3);
    }
}
