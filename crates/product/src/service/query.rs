use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::product::FindAllProducts,
        response::{
            api::{ApiResponse, ApiResponsePagination},
            pagination::Pagination,
            product::ProductResponse,
        },
    },
    service::{
        OperationTracer,
        filter::{FilterMode, PaginationMode, ProductFilter, paginate},
    },
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
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    tracer: OperationTracer,
    filter_mode: FilterMode,
    pagination_mode: PaginationMode,
}

impl ProductQueryService {
    pub fn new(
        query: DynProductQueryRepository,
        registry: &mut Registry,
        filter_mode: FilterMode,
        pagination_mode: PaginationMode,
    ) -> Self {
        Self {
            query,
            tracer: OperationTracer::new("product-query-service", registry),
            filter_mode,
            pagination_mode,
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        info!(
            "🔍 Finding all products | Page: {}, Limit: {}, Nome: {:?}, Categoria: {:?}, Marca: {:?}, Preco: {:?}",
            req.page, req.limit, req.name, req.category, req.brand, req.price
        );

        let filter = ProductFilter::from(req);
        let method = Method::Get;

        let tracing_ctx = self.tracer.start(
            "product_find_all",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_all"),
                KeyValue::new("page", i64::from(req.page)),
                KeyValue::new("limit", i64::from(req.limit)),
                KeyValue::new("filter_mode", format!("{:?}", self.filter_mode)),
                KeyValue::new("name", filter.name.clone().unwrap_or_default()),
                KeyValue::new("category", filter.category.clone().unwrap_or_default()),
                KeyValue::new("brand", filter.brand.clone().unwrap_or_default()),
                KeyValue::new("price", filter.price.unwrap_or_default()),
            ],
        );

        let products = match self.query.find_all().await {
            Ok(products) => products,
            Err(e) => {
                let msg = format!("Failed to fetch products: {e:?}");
                error!("❌ {msg}");
                self.tracer.error(&tracing_ctx, method, &msg);
                return Err(ServiceError::Repo(e));
            }
        };

        let matched = filter.apply(self.filter_mode, products);
        let page = paginate(self.pagination_mode, matched, req.page, req.limit);

        let data: Vec<ProductResponse> = page.items.into_iter().map(ProductResponse::from).collect();

        let response = ApiResponsePagination {
            status: "success".to_string(),
            message: "Products retrieved successfully".to_string(),
            data,
            pagination: Pagination {
                page: page.page,
                page_size: page.page_size,
                total_items: page.total_items,
                total_pages: page.total_pages,
            },
        };

        info!(
            "✅ Found {} products (total: {})",
            response.data.len(),
            response.pagination.total_items
        );
        self.tracer
            .success(&tracing_ctx, method, "Products retrieved successfully");

        Ok(response)
    }

    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "product_find_by_id",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                self.tracer
                    .success(&tracing_ctx, method, "Product retrieved successfully");
                Ok(ApiResponse::success(
                    "Product retrieved successfully",
                    ProductResponse::from(product),
                ))
            }
            Ok(None) => {
                let msg = format!("Product {id} not found");
                self.tracer.error(&tracing_ctx, method, &msg);
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(e) => {
                let msg = format!("Failed to fetch product {id}: {e:?}");
                self.tracer.error(&tracing_ctx, method, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }
}
