use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use num_traits::Signed;

use super::errors::PriceValidationError;
use super::value_objects::{BrandId, Currency, PriceListId, ProductId};

/// A tariff entry for one product of one brand, in force during the closed
/// window `[start_date, end_date]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    product_id: ProductId,
    brand_id: BrandId,
    price_list_id: PriceListId,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    amount: BigDecimal,
    currency: Currency,
    priority: i32,
}

pub struct NewPriceProps {
    pub product_id: i32,
    pub brand_id: i32,
    pub price_list_id: i32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub amount: BigDecimal,
    pub currency: String,
    pub priority: i32,
}

impl Price {
    pub fn new(props: NewPriceProps) -> Result<Self, PriceValidationError> {
        let product_id = ProductId::new(props.product_id)?;
        let brand_id = BrandId::new(props.brand_id)?;

        if props.start_date > props.end_date {
            return Err(PriceValidationError::DateRangeInverted);
        }

        if props.amount.is_negative() {
            return Err(PriceValidationError::AmountNegative);
        }

        let currency = Currency::new(props.currency)?;

        Ok(Self {
            product_id,
            brand_id,
            price_list_id: PriceListId::new(props.price_list_id),
            start_date: props.start_date,
            end_date: props.end_date,
            amount: props.amount,
            currency,
            priority: props.priority,
        })
    }

    /// True when `instant` falls inside the validity window, both ends included.
    pub fn is_applicable_at(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start_date && instant <= self.end_date
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn brand_id(&self) -> BrandId {
        self.brand_id
    }

    pub fn price_list_id(&self) -> PriceListId {
        self.price_list_id
    }

    pub fn start_date(&self) -> NaiveDateTime {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDateTime {
        self.end_date
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }
}
