use crate::model::product::Product;
use shared::{errors::RepositoryError, utils::generate_object_id};
use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, error};

#[derive(Debug, Default)]
struct Collection {
    products: Vec<Product>,
    // every id handed out in this process, live or deleted
    issued: HashSet<String>,
}

impl Collection {
    fn fresh_id(&mut self) -> Result<String, RepositoryError> {
        loop {
            let id = generate_object_id()
                .map_err(|e| RepositoryError::Custom(format!("Failed to generate id: {e}")))?;

            if self.issued.insert(id.clone()) {
                return Ok(id);
            }
        }
    }

    fn remove_by_id(&mut self, id: &str) -> Result<Product, RepositoryError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        Ok(self.products.remove(index))
    }
}

/// In-memory product collection.
///
/// Cloning yields another handle to the same collection. A single lock guards
/// every operation, and insertion order is kept.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    inner: Arc<RwLock<Collection>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing records, keeping their ids.
    /// Records without an id get a fresh one; a repeated id is rejected.
    pub fn with_products(products: Vec<Product>) -> Result<Self, RepositoryError> {
        let mut collection = Collection::default();

        for mut product in products {
            if product.id.is_empty() {
                product.id = collection.fresh_id()?;
            } else if !collection.issued.insert(product.id.clone()) {
                return Err(RepositoryError::Custom(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            collection.products.push(product);
        }

        Ok(Self {
            inner: Arc::new(RwLock::new(collection)),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collection>, RepositoryError> {
        self.inner.read().map_err(|e| {
            error!("❌ Product store lock poisoned: {e}");
            RepositoryError::Unavailable("product store lock poisoned".into())
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collection>, RepositoryError> {
        self.inner.write().map_err(|e| {
            error!("❌ Product store lock poisoned: {e}");
            RepositoryError::Unavailable("product store lock poisoned".into())
        })
    }

    /// Stores `product` under a fresh id, overwriting any id it carried.
    pub fn add(&self, mut product: Product) -> Result<Product, RepositoryError> {
        let mut collection = self.write()?;

        product.id = collection.fresh_id()?;
        collection.products.push(product.clone());

        debug!(id = %product.id, total = collection.products.len(), "product added");
        Ok(product)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError> {
        let collection = self.read()?;
        Ok(collection.products.iter().find(|p| p.id == id).cloned())
    }

    pub fn remove(&self, product: &Product) -> Result<(), RepositoryError> {
        self.remove_by_id(&product.id)
    }

    pub fn remove_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        let mut collection = self.write()?;
        collection.remove_by_id(id)?;

        debug!(id, total = collection.products.len(), "product removed");
        Ok(())
    }

    /// Removes the record matching `replacement.id` and appends `replacement`.
    ///
    /// `id` is not checked against `replacement.id`; callers must make sure they agree.
    pub fn replace_by_id(&self, id: &str, replacement: Product) -> Result<Product, RepositoryError> {
        let mut collection = self.write()?;
        collection.remove_by_id(&replacement.id)?;
        collection.products.push(replacement.clone());

        debug!(requested = id, replaced = %replacement.id, "product replaced");
        Ok(replacement)
    }

    /// Snapshot of every live record in insertion order.
    pub fn all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.read()?.products.clone())
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.products.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}
