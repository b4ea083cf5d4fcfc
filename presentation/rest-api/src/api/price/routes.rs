use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::price::use_cases::get_applicable::GetApplicablePriceUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::price::dto::{PriceRequest, PriceResponse};
use crate::api::tags::ApiTags;

pub struct PriceApi {
    get_applicable_use_case: Arc<dyn GetApplicablePriceUseCase>,
}

impl PriceApi {
    pub fn new(get_applicable_use_case: Arc<dyn GetApplicablePriceUseCase>) -> Self {
        Self {
            get_applicable_use_case,
        }
    }
}

/// Price query API
#[OpenApi]
impl PriceApi {
    /// Get applicable price
    ///
    /// Returns the price in force for a product of a brand at the given date.
    /// When several prices overlap, the one with the highest priority wins.
    #[oai(path = "/api/v1/prices", method = "get", tag = "ApiTags::Prices")]
    async fn get_price(
        &self,
        #[oai(name = "applicationDate")]
        application_date: Query<Option<String>>,
        #[oai(name = "productId")]
        product_id: Query<Option<String>>,
        #[oai(name = "brandId")]
        brand_id: Query<Option<String>>,
    ) -> GetPriceResponse {
        tracing::info!(
            "GET /api/v1/prices - applicationDate={:?}, productId={:?}, brandId={:?}",
            application_date.0,
            product_id.0,
            brand_id.0
        );

        let request = match PriceRequest::parse(application_date.0, product_id.0, brand_id.0) {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!("Rejected price request: {}", err);
                let (_status, json) = err.into_error_response();
                return GetPriceResponse::BadRequest(json);
            }
        };

        match self.get_applicable_use_case.execute(request.into()).await {
            Ok(price) => {
                let response = PriceResponse::from(price);
                tracing::info!(
                    "Returning price: priceList={}, price={}",
                    response.price_list,
                    response.price
                );
                GetPriceResponse::Ok(Json(response))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetPriceResponse::BadRequest(json),
                    404 => GetPriceResponse::NotFound(json),
                    _ => GetPriceResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetPriceResponse {
    #[oai(status = 200)]
    Ok(Json<PriceResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
