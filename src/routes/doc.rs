use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::flows::{ContactRequest, CreateFlowRequest, DateRangeRequest, FlowView},
    models::{ContactInfo, FlowStatus, Product, RentalPeriod},
    response::ApiResponse,
    routes::{flows, health, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::get_product,
        flows::create_flow,
        flows::get_flow,
        flows::update_dates,
        flows::toggle_confirmation,
        flows::update_contact,
        flows::submit_order,
        flows::retry_payment_intent,
    ),
    components(
        schemas(
            Product,
            RentalPeriod,
            ContactInfo,
            FlowStatus,
            CreateFlowRequest,
            DateRangeRequest,
            ContactRequest,
            FlowView,
            health::HealthData,
            ApiResponse<Product>,
            ApiResponse<FlowView>,
            ApiResponse<health::HealthData>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product display fields from the content source"),
        (name = "Flows", description = "Rental order flow endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
