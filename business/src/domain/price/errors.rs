use chrono::NaiveDateTime;

use super::value_objects::{BrandId, ProductId};

/// Construction-time invariant violations of `Price` and `PriceQuery`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceValidationError {
    #[error("price.product_id_not_positive")]
    ProductIdNotPositive,
    #[error("price.brand_id_not_positive")]
    BrandIdNotPositive,
    #[error("price.date_range_inverted")]
    DateRangeInverted,
    #[error("price.amount_negative")]
    AmountNegative,
    #[error("price.currency_blank")]
    CurrencyBlank,
    #[error("price.currency_invalid")]
    CurrencyInvalid,
}

/// No stored price for the product/brand is in force at the requested instant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No price found for product {product_id}, brand {brand_id} at date {}", .application_date.format("%Y-%m-%dT%H:%M:%S"))]
pub struct PriceNotFoundError {
    pub product_id: ProductId,
    pub brand_id: BrandId,
    pub application_date: NaiveDateTime,
}

#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    #[error(transparent)]
    Validation(#[from] PriceValidationError),
    #[error("price.not_found")]
    NotFound(#[from] PriceNotFoundError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
