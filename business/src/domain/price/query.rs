use chrono::NaiveDateTime;

use super::errors::PriceValidationError;
use super::value_objects::{BrandId, ProductId};

/// Criteria for looking up the price in force for a product of a brand at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuery {
    application_date: NaiveDateTime,
    product_id: ProductId,
    brand_id: BrandId,
}

impl PriceQuery {
    pub fn new(
        application_date: NaiveDateTime,
        product_id: i32,
        brand_id: i32,
    ) -> Result<Self, PriceValidationError> {
        Ok(Self {
            application_date,
            product_id: ProductId::new(product_id)?,
            brand_id: BrandId::new(brand_id)?,
        })
    }

    pub fn application_date(&self) -> NaiveDateTime {
        self.application_date
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn brand_id(&self) -> BrandId {
        self.brand_id
    }
}

impl std::fmt::Display for PriceQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "productId={}, brandId={}, date={}",
            self.product_id,
            self.brand_id,
            self.application_date.format("%Y-%m-%dT%H:%M:%S")
        )
    }
}
