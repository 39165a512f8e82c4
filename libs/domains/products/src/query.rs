//! Listing, search and statistics over a snapshot of the store.
//!
//! Everything here is pure: callers take a snapshot from the repository and
//! hand it in.

use std::collections::BTreeMap;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    ListQuery, Pagination, PriceRange, Product, ProductPage, ProductStats, SearchResults,
};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Parse a positive integer, falling back to `default` on absent, malformed,
/// zero or negative input.
pub fn parse_positive(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

/// Filter by category and stock, then cut out the requested page.
pub fn paginate(products: Vec<Product>, query: &ListQuery) -> ProductPage {
    let category = non_empty(query.category.as_deref()).map(str::to_lowercase);
    let in_stock = non_empty(query.in_stock.as_deref()).map(|value| value == "true");
    let page = parse_positive(query.page.as_deref(), DEFAULT_PAGE);
    let limit = parse_positive(query.limit.as_deref(), DEFAULT_LIMIT);

    let filtered: Vec<Product> = products
        .into_iter()
        .filter(|p| {
            category
                .as_deref()
                .is_none_or(|category| p.category.to_lowercase() == category)
        })
        .filter(|p| in_stock.is_none_or(|in_stock| p.in_stock == in_stock))
        .collect();

    let total_products = filtered.len();
    let start = page.saturating_sub(1).saturating_mul(limit);

    ProductPage {
        products: filtered.into_iter().skip(start).take(limit).collect(),
        pagination: Pagination {
            current_page: page,
            total_pages: total_products.div_ceil(limit),
            total_products,
            products_per_page: limit,
        },
    }
}

/// Case-insensitive substring match on name or description.
///
/// # Errors
/// `Validation` when `q` is absent or empty.
pub fn search(products: Vec<Product>, q: Option<&str>) -> ProductResult<SearchResults> {
    let query = match q {
        Some(q) if !q.is_empty() => q,
        _ => {
            return Err(ProductError::Validation(
                "Search query 'q' is required".to_string(),
            ))
        }
    };

    let needle = query.to_lowercase();
    let results: Vec<Product> = products
        .into_iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .collect();

    Ok(SearchResults {
        query: query.to_string(),
        count: results.len(),
        results,
    })
}

/// Round half away from zero to 2 decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn stats(products: &[Product]) -> ProductStats {
    let total_products = products.len();
    let in_stock_count = products.iter().filter(|p| p.in_stock).count();

    let mut categories = BTreeMap::new();
    for product in products {
        *categories.entry(product.category.clone()).or_insert(0) += 1;
    }

    let (average_price, price_range) = if products.is_empty() {
        (0.0, PriceRange { min: 0.0, max: 0.0 })
    } else {
        let sum: f64 = products.iter().map(|p| p.price).sum();
        let min = products.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
        let max = products
            .iter()
            .map(|p| p.price)
            .fold(f64::NEG_INFINITY, f64::max);
        (round2(sum / total_products as f64), PriceRange { min, max })
    };

    ProductStats {
        total_products,
        in_stock_count,
        out_of_stock_count: total_products - in_stock_count,
        categories,
        average_price,
        price_range,
    }
}
