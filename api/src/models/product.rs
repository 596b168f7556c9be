//! Marketplace products (workflows, tools, integration packs).
//!
//! Reads accept the backend's camelCase DTOs (and snake_case fallbacks);
//! writes are sent in snake_case, which is what the product routes expect.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::null_as_default;

/// Field name to message, ready to render next to form inputs.
pub type FieldErrors = BTreeMap<String, String>;

pub const MAX_TAGS: usize = 10;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://[^\s/$.?#].[^\s]*$").expect("URL pattern is valid"));

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    #[default]
    Workflow,
    Tool,
    Integration,
    #[serde(other)]
    Unknown,
}

impl ProductType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Workflow => "workflow",
            Self::Tool => "tool",
            Self::Integration => "integration",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    Published,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, alias = "long_description")]
    pub long_description: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub product_type: ProductType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default = "default_true", alias = "is_free")]
    pub is_free: bool,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    #[serde(default, alias = "install_guide")]
    pub install_guide: Option<String>,
    #[serde(default, alias = "workflow_file_url")]
    pub workflow_file_url: Option<String>,
    #[serde(default, alias = "thumbnail_url")]
    pub thumbnail_url: Option<String>,
    #[serde(default, alias = "preview_image_url")]
    pub preview_image_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub downloads: Option<u64>,
    #[serde(default)]
    pub status: Option<ProductStatus>,
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Catalog query. Unset, empty, and zero values are left off the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilters {
    pub product_type: Option<ProductType>,
    pub search: Option<String>,
    pub tags: Vec<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl ProductFilters {
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        let mut push = |k: &str, v: String| out.push((k.to_owned(), v));
        if let Some(t) = self.product_type {
            push("type", t.as_str().to_owned());
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            push("search", search.to_owned());
        }
        if !self.tags.is_empty() {
            push("tags", self.tags.join(","));
        }
        if let Some(limit) = self.limit.filter(|n| *n > 0) {
            push("limit", limit.to_string());
        }
        if let Some(offset) = self.offset.filter(|n| *n > 0) {
            push("offset", offset.to_string());
        }
        if let Some(sort_by) = self.sort_by.as_deref().filter(|s| !s.is_empty()) {
            push("sort_by", sort_by.to_owned());
        }
        if let Some(order) = self.sort_order {
            push("sort_order", order.as_str().to_owned());
        }
        out
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
}

/// New product as submitted by a seller. Drafts may be incomplete.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub tags: Vec<String>,
    pub is_free: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub requirements: Vec<String>,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_guide: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            long_description: None,
            product_type: ProductType::Workflow,
            tags: Vec::new(),
            is_free: true,
            price: None,
            version: None,
            requirements: Vec::new(),
            features: Vec::new(),
            install_guide: None,
            workflow_file_url: None,
            thumbnail_url: None,
            preview_image_url: None,
            metadata: None,
        }
    }
}

impl ProductDraft {
    /// Trim optional text fields; blanks become absent.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.long_description,
            &mut self.version,
            &mut self.install_guide,
            &mut self.workflow_file_url,
            &mut self.thumbnail_url,
            &mut self.preview_image_url,
        ] {
            *field = blank_to_none(field.take());
        }
        self
    }

    /// Check the draft before sending it.
    ///
    /// URL formats and the tag limit are always checked; `strict` adds the
    /// requirements for publishing (title, description, price of paid items).
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message.
    pub fn validate(&self, strict: bool) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if strict {
            if let Some(msg) = min_length_error(&self.title, 3, "Title") {
                errors.insert("title".to_owned(), msg);
            }
            if let Some(msg) = min_length_error(&self.description, 10, "Description") {
                errors.insert("description".to_owned(), msg);
            }
            if !self.is_free && !has_positive_price(self.price) {
                errors.insert("price".to_owned(), "Price must be greater than 0 for paid products".to_owned());
            }
        }

        for (name, value) in [
            ("workflow_file_url", &self.workflow_file_url),
            ("thumbnail_url", &self.thumbnail_url),
            ("preview_image_url", &self.preview_image_url),
        ] {
            if let Some(url) = value.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
                if !is_valid_url(url) {
                    errors.insert(name.to_owned(), "Must be a full URL starting with http:// or https://".to_owned());
                }
            }
        }

        if self.tags.len() > MAX_TAGS {
            errors.insert("tags".to_owned(), format!("At most {MAX_TAGS} tags"));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Labels of what still blocks publishing; empty when the draft is complete.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if min_length_error(&self.title, 3, "Title").is_some() {
            missing.push("Title");
        }
        if min_length_error(&self.description, 10, "Description").is_some() {
            missing.push("Description");
        }
        if self.product_type == ProductType::Workflow && is_blank(self.workflow_file_url.as_deref()) {
            missing.push("Workflow file URL");
        }
        if is_blank(self.thumbnail_url.as_deref()) {
            missing.push("Thumbnail URL");
        }
        if !self.is_free && !has_positive_price(self.price) {
            missing.push("Price");
        }
        missing
    }
}

/// Partial update; only fields that are set are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_guide: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

#[must_use]
pub fn is_valid_url(raw: &str) -> bool {
    URL_PATTERN.is_match(raw)
}

fn min_length_error(value: &str, min: usize, label: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{label} is required"))
    } else if value.chars().count() < min {
        Some(format!("{label} must be at least {min} characters"))
    } else {
        None
    }
}

fn has_positive_price(price: Option<f64>) -> bool {
    price.is_some_and(|p| p > 0.0)
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
