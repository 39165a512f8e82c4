use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::{ProductError, ProductResult};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier, assigned by the server
    pub id: String,
    /// Product name (trimmed)
    pub name: String,
    /// Product description (trimmed)
    pub description: String,
    /// Price, never negative
    pub price: f64,
    /// Category (trimmed, lower-cased)
    pub category: String,
    /// Availability flag
    pub in_stock: bool,
}

/// Sanitized product fields, without an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl NewProduct {
    /// Trim text fields and lower-case the category.
    pub fn sanitized(
        name: &str,
        description: &str,
        price: f64,
        category: &str,
        in_stock: bool,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            price,
            category: category.trim().to_lowercase(),
            in_stock,
        }
    }
}

impl Product {
    /// Create a new product with a freshly generated id
    pub fn new(input: NewProduct) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), input)
    }

    pub fn with_id(id: impl Into<String>, input: NewProduct) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
        }
    }

    /// Overwrite every field except `id`
    pub fn replace(&mut self, input: NewProduct) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.category = input.category;
        self.in_stock = input.in_stock;
    }
}

fn validate_text(value: &Value) -> Result<(), ValidationError> {
    match value.as_str() {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::new("non_empty_string")),
    }
}

fn validate_price(value: &Value) -> Result<(), ValidationError> {
    match value.as_f64() {
        Some(price) if price >= 0.0 => Ok(()),
        _ => Err(ValidationError::new("non_negative_number")),
    }
}

fn validate_boolean(value: &Value) -> Result<(), ValidationError> {
    if value.is_boolean() {
        Ok(())
    } else {
        Err(ValidationError::new("boolean"))
    }
}

/// Rule message per field, in reporting order.
///
/// Each entry lists the Rust field name and the JSON name, since validator
/// keys its errors by one of the two depending on serde attributes.
const FIELD_RULES: [(&str, &str, &str); 5] = [
    ("name", "name", "Name is required and must be a non-empty string"),
    (
        "description",
        "description",
        "Description is required and must be a non-empty string",
    ),
    (
        "price",
        "price",
        "Price is required and must be a non-negative number",
    ),
    (
        "category",
        "category",
        "Category is required and must be a non-empty string",
    ),
    ("in_stock", "inStock", "inStock is required and must be a boolean"),
];

/// Candidate product as received in a create or update body.
///
/// Fields are raw JSON values so that missing and wrongly typed fields
/// surface as validation messages instead of decoding failures. Unknown
/// fields, `id` included, are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[validate(required, custom(function = "validate_text"))]
    #[schema(value_type = String, example = "Laptop")]
    pub name: Option<Value>,

    #[validate(required, custom(function = "validate_text"))]
    #[schema(value_type = String, example = "High-performance laptop with 16GB RAM")]
    pub description: Option<Value>,

    #[validate(required, custom(function = "validate_price"))]
    #[schema(value_type = f64, example = 1200)]
    pub price: Option<Value>,

    #[validate(required, custom(function = "validate_text"))]
    #[schema(value_type = String, example = "electronics")]
    pub category: Option<Value>,

    #[validate(required, custom(function = "validate_boolean"))]
    #[schema(value_type = bool, example = true)]
    pub in_stock: Option<Value>,
}

impl ProductInput {
    /// Every violated rule, in field order. Empty when the input is valid.
    pub fn violations(&self) -> Vec<&'static str> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };
        let fields = errors.field_errors();

        FIELD_RULES
            .iter()
            .filter(|(rust_name, json_name, _)| {
                fields.contains_key(*rust_name) || fields.contains_key(*json_name)
            })
            .map(|(_, _, message)| *message)
            .collect()
    }

    /// Validate, then sanitize into a [`NewProduct`].
    ///
    /// All violations are reported at once, joined by `", "`.
    pub fn into_new_product(self) -> ProductResult<NewProduct> {
        let violations = self.violations();
        if !violations.is_empty() {
            return Err(ProductError::Validation(violations.join(", ")));
        }

        match (
            &self.name,
            &self.description,
            self.price.as_ref().and_then(Value::as_f64),
            &self.category,
            &self.in_stock,
        ) {
            (
                Some(Value::String(name)),
                Some(Value::String(description)),
                Some(price),
                Some(Value::String(category)),
                Some(Value::Bool(in_stock)),
            ) => Ok(NewProduct::sanitized(
                name,
                description,
                price,
                category,
                *in_stock,
            )),
            _ => Err(ProductError::Internal(
                "validated product input has unexpected shape".to_string(),
            )),
        }
    }
}

/// Query parameters for listing products.
///
/// Kept as raw strings: invalid `page`/`limit` fall back to defaults rather
/// than rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive exact category match
    pub category: Option<String>,
    /// "true" for in-stock products, any other value for out-of-stock
    pub in_stock: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10)
    pub limit: Option<String>,
}

/// Search query parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring matched against name and description
    pub q: Option<String>,
}

/// Pagination metadata for a product listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_products: usize,
    pub products_per_page: usize,
}

/// One page of a filtered product listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

/// Search response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResults {
    /// The query as received
    pub query: String,
    pub count: usize,
    pub results: Vec<Product>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Aggregate statistics over the whole store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_products: usize,
    pub in_stock_count: usize,
    pub out_of_stock_count: usize,
    /// Product count per category
    pub categories: BTreeMap<String, usize>,
    /// Mean price rounded to 2 decimals, 0 when the store is empty
    pub average_price: f64,
    pub price_range: PriceRange,
}
