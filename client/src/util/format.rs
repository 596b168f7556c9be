//! Display helpers for identity and catalog values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use api::Role;
use api::models::article::ArticleStatus;
use api::models::product::Product;

pub fn role_label(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => "Admin",
        Some(Role::Seller) => "Seller",
        Some(Role::User) => "Member",
        Some(Role::Unknown) | None => "Guest",
    }
}

pub fn price_label(product: &Product) -> String {
    match product.price {
        Some(price) if !product.is_free && price > 0.0 => format!("${price:.2}"),
        _ => "Free".to_owned(),
    }
}

pub fn article_status_label(status: ArticleStatus) -> &'static str {
    match status {
        ArticleStatus::Pending => "Queued",
        ArticleStatus::Processing => "Summarizing",
        ArticleStatus::Done => "Ready",
        ArticleStatus::Failed => "Failed",
        ArticleStatus::Unknown => "Unknown",
    }
}
