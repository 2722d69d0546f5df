use crate::{domain::requests::product::FindAllProducts, model::product::Product as ProductModel};
use std::str::FromStr;

pub const DEFAULT_PAGE: i32 = 1;
pub const DEFAULT_LIMIT: i32 = 10;

/// How the filter fields of a query combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Only the highest-priority present filter applies: name, then category,
    /// then brand, then price.
    #[default]
    Exclusive,
    /// Every present filter must match.
    Narrowing,
}

impl FromStr for FilterMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exclusive" | "legacy" => Ok(Self::Exclusive),
            "narrowing" | "and" => Ok(Self::Narrowing),
            other => Err(anyhow::anyhow!(
                "Unknown filter mode '{other}', expected 'exclusive' or 'narrowing'"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaginationMode {
    #[default]
    Paged,
    /// `limite` and `pagina` are accepted but ignored.
    Legacy,
}

impl FromStr for PaginationMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paged" => Ok(Self::Paged),
            "legacy" | "none" => Ok(Self::Legacy),
            other => Err(anyhow::anyhow!(
                "Unknown pagination mode '{other}', expected 'paged' or 'legacy'"
            )),
        }
    }
}

/// The constraints of a query with blank text and non-positive price dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
}

fn present(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

impl From<&FindAllProducts> for ProductFilter {
    fn from(req: &FindAllProducts) -> Self {
        Self {
            name: present(&req.name),
            category: present(&req.category),
            brand: present(&req.brand),
            price: req.price.filter(|p| *p > 0.0),
        }
    }
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.brand.is_none() && self.price.is_none()
    }

    fn name_matches(&self, p: &ProductModel) -> bool {
        self.name.as_deref().is_none_or(|v| p.name == v)
    }

    fn category_matches(&self, p: &ProductModel) -> bool {
        self.category.as_deref().is_none_or(|v| p.category == v)
    }

    fn brand_matches(&self, p: &ProductModel) -> bool {
        self.brand.as_deref().is_none_or(|v| p.brand == v)
    }

    #[allow(clippy::float_cmp)]
    fn price_matches(&self, p: &ProductModel) -> bool {
        self.price.is_none_or(|v| p.price == v)
    }

    fn matches(&self, mode: FilterMode, p: &ProductModel) -> bool {
        match mode {
            FilterMode::Narrowing => {
                self.name_matches(p)
                    && self.category_matches(p)
                    && self.brand_matches(p)
                    && self.price_matches(p)
            }
            FilterMode::Exclusive => {
                if self.name.is_some() {
                    self.name_matches(p)
                } else if self.category.is_some() {
                    self.category_matches(p)
                } else if self.brand.is_some() {
                    self.brand_matches(p)
                } else {
                    self.price_matches(p)
                }
            }
        }
    }

    /// Keeps matching products in insertion order.
    pub fn apply(&self, mode: FilterMode, products: Vec<ProductModel>) -> Vec<ProductModel> {
        if self.is_empty() {
            return products;
        }

        products
            .into_iter()
            .filter(|p| self.matches(mode, p))
            .collect()
    }
}

/// A page cut from a filtered result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i32,
    pub page_size: i32,
    pub total_items: i32,
    pub total_pages: i32,
}

pub fn paginate<T>(mode: PaginationMode, items: Vec<T>, page: i32, limit: i32) -> Page<T> {
    let total = items.len();
    let total_items = i32::try_from(total).unwrap_or(i32::MAX);

    match mode {
        PaginationMode::Legacy => Page {
            items,
            page: DEFAULT_PAGE,
            page_size: total_items,
            total_items,
            total_pages: if total == 0 { 0 } else { 1 },
        },
        PaginationMode::Paged => {
            let page = if page > 0 { page } else { DEFAULT_PAGE };
            let limit = if limit > 0 { limit } else { DEFAULT_LIMIT };

            let take = limit as usize;
            let skip = (page as usize - 1).saturating_mul(take);

            let items = items.into_iter().skip(skip).take(take).collect();
            let total_pages = total.div_ceil(take);

            Page {
                items,
                page,
                page_size: limit,
                total_items,
                total_pages: i32::try_from(total_pages).unwrap_or(i32::MAX),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: &str, brand: &str, price: f64) -> ProductModel {
        ProductModel {
            id: format!("{name}-{brand}"),
            name: name.into(),
            description: String::new(),
            image_url: None,
            category: category.into(),
            brand: brand.into(),
            price,
        }
    }

    fn catalog() -> Vec<ProductModel> {
        vec![
            product("TV", "Televisão", "Sony", 3500.00),
            product("Controle", "Controle", "Samsung", 199.90),
            product("TV", "Televisão", "Samsung", 9299.90),
        ]
    }

    fn filter(name: Option<&str>, brand: Option<&str>, price: Option<f64>) -> ProductFilter {
        ProductFilter::from(&FindAllProducts {
            name: name.map(String::from),
            brand: brand.map(String::from),
            price,
            ..Default::default()
        })
    }

    #[test]
    fn modes_parse_from_config_values() {
        assert_eq!("legacy".parse::<FilterMode>().unwrap(), FilterMode::Exclusive);
        assert_eq!(" AND ".parse::<FilterMode>().unwrap(), FilterMode::Narrowing);
        assert_eq!("none".parse::<PaginationMode>().unwrap(), PaginationMode::Legacy);
        assert!("sometimes".parse::<FilterMode>().is_err());
        assert!("".parse::<PaginationMode>().is_err());
    }

    #[test]
    fn blank_text_and_non_positive_price_are_not_constraints() {
        let f = ProductFilter::from(&FindAllProducts {
            name: Some(String::new()),
            price: Some(0.0),
            ..Default::default()
        });
        assert!(f.is_empty());
        assert_eq!(f.apply(FilterMode::Exclusive, catalog()).len(), 3);
        assert!(filter(None, None, Some(-5.0)).is_empty());
    }

    #[test]
    fn exclusive_mode_lets_the_highest_tier_win() {
        let result = filter(Some("TV"), Some("Sony"), None).apply(FilterMode::Exclusive, catalog());
        assert_eq!(result.len(), 2);

        let result = filter(None, Some("Samsung"), Some(3500.0)).apply(FilterMode::Exclusive, catalog());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.brand == "Samsung"));
    }

    #[test]
    fn exclusive_mode_does_not_fall_back_when_a_tier_matches_nothing() {
        let result = filter(Some("Radio"), Some("Sony"), None).apply(FilterMode::Exclusive, catalog());
        assert!(result.is_empty());
    }

    #[test]
    fn narrowing_mode_requires_every_filter() {
        let result = filter(Some("TV"), Some("Sony"), None).apply(FilterMode::Narrowing, catalog());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].price, 3500.00);

        let result =
            filter(Some("TV"), Some("Samsung"), Some(3500.0)).apply(FilterMode::Narrowing, catalog());
        assert!(result.is_empty());
    }

    #[test]
    fn price_filter_is_exact() {
        let result = filter(None, None, Some(199.90)).apply(FilterMode::Exclusive, catalog());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Controle");
    }

    #[test]
    fn paged_mode_slices_and_counts_before_slicing() {
        let page = paginate(PaginationMode::Paged, catalog(), 2, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].price, 9299.90);
        assert_eq!(page.total_items, 3);
        assert_eq!(page.total_pages, 2);

        let beyond = paginate(PaginationMode::Paged, catalog(), 5, 2);
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total_items, 3);
    }

    #[test]
    fn paged_mode_normalises_non_positive_page_and_limit() {
        let page = paginate(PaginationMode::Paged, catalog(), 0, -1);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn legacy_mode_ignores_limit_and_page() {
        let page = paginate(PaginationMode::Legacy, catalog(), 3, 1);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total_pages, 1);

        let empty = paginate::<ProductModel>(PaginationMode::Legacy, Vec::new(), 1, 10);
        assert_eq!(empty.total_pages, 0);
    }
}
