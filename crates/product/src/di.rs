use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    repository::{ProductCommandRepository, ProductQueryRepository, ProductStore},
    service::{
        ProductCommandService, ProductQueryService,
        filter::{FilterMode, PaginationMode},
    },
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct DependenciesInjectDeps {
    pub store: ProductStore,
    pub filter_mode: FilterMode,
    pub pagination_mode: PaginationMode,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            store,
            filter_mode,
            pagination_mode,
        } = deps;

        let product_query_repo = Arc::new(ProductQueryRepository::new(store.clone()));
        let product_command_repo = Arc::new(ProductCommandRepository::new(store));

        let product_query = Arc::new(ProductQueryService::new(
            product_query_repo.clone(),
            registry,
            filter_mode,
            pagination_mode,
        )) as DynProductQueryService;

        let product_command = Arc::new(ProductCommandService::new(
            product_query_repo,
            product_command_repo,
            registry,
        )) as DynProductCommandService;

        Self {
            product_query,
            product_command,
        }
    }
}
