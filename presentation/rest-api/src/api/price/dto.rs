use chrono::NaiveDateTime;
use poem_openapi::Object;

use business::domain::price::model::Price;
use business::domain::price::use_cases::get_applicable::GetApplicablePriceParams;

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_TIME_MINUTES_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub const APPLICATION_DATE: &str = "applicationDate";
pub const PRODUCT_ID: &str = "productId";
pub const BRAND_ID: &str = "brandId";

/// Query parameters failed before reaching the domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceRequestError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value '{value}' for parameter '{name}'")]
    InvalidParameter { name: &'static str, value: String },
}

/// Typed form of the `GET /api/v1/prices` query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRequest {
    pub application_date: NaiveDateTime,
    pub product_id: i32,
    pub brand_id: i32,
}

impl PriceRequest {
    pub fn parse(
        application_date: Option<String>,
        product_id: Option<String>,
        brand_id: Option<String>,
    ) -> Result<Self, PriceRequestError> {
        Ok(Self {
            application_date: parse_date_time(required(APPLICATION_DATE, application_date)?)?,
            product_id: parse_id(PRODUCT_ID, required(PRODUCT_ID, product_id)?)?,
            brand_id: parse_id(BRAND_ID, required(BRAND_ID, brand_id)?)?,
        })
    }
}

impl From<PriceRequest> for GetApplicablePriceParams {
    fn from(request: PriceRequest) -> Self {
        Self {
            application_date: request.application_date,
            product_id: request.product_id,
            brand_id: request.brand_id,
        }
    }
}

fn required(name: &'static str, value: Option<String>) -> Result<String, PriceRequestError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PriceRequestError::MissingParameter(name)),
    }
}

/// ISO-8601 local date-time, seconds and fraction optional.
fn parse_date_time(value: String) -> Result<NaiveDateTime, PriceRequestError> {
    let trimmed = value.trim();
    trimmed
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, DATE_TIME_MINUTES_FORMAT))
        .map_err(|_| PriceRequestError::InvalidParameter {
            name: APPLICATION_DATE,
            value,
        })
}

fn parse_id(name: &'static str, value: String) -> Result<i32, PriceRequestError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| PriceRequestError::InvalidParameter { name, value })
}

/// Applicable price for the requested product, brand and date.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PriceResponse {
    /// Product identifier
    pub product_id: i32,
    /// Brand identifier (1 = ZARA)
    pub brand_id: i32,
    /// Price list (tariff) identifier
    pub price_list: i32,
    /// Start of the validity window (yyyy-MM-ddTHH:mm:ss)
    pub start_date: String,
    /// End of the validity window (yyyy-MM-ddTHH:mm:ss)
    pub end_date: String,
    /// Final sale price as an exact decimal, e.g. "35.50"
    pub price: String,
    /// Currency code (ISO 4217)
    pub currency: String,
}

impl From<Price> for PriceResponse {
    fn from(price: Price) -> Self {
        Self {
            product_id: price.product_id().value(),
            brand_id: price.brand_id().value(),
            price_list: price.price_list_id().value(),
            start_date: price.start_date().format(DATE_TIME_FORMAT).to_string(),
            end_date: price.end_date().format(DATE_TIME_FORMAT).to_string(),
            price: price.amount().to_string(),
            currency: price.currency().to_string(),
        }
    }
}
