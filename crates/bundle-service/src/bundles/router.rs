use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::{BundleTemplate, Product};
use super::customization::CustomizationOutcome;
use super::domain::{AgeBand, ApplicantProfile, CustomerBundleState, CustomerId, StudentStatus, Violation};
use super::repository::BundleStateStore;
use super::service::{BundleService, BundleServiceError, SuggestOutcome};

/// Router builder exposing the suggestion and customization endpoints.
pub fn bundle_router<S>(service: Arc<BundleService<S>>) -> Router
where
    S: BundleStateStore + 'static,
{
    Router::new()
        .route("/api/v1/bundles/suggest", post(suggest_handler::<S>))
        .route("/api/v1/bundles/customize", put(customize_handler::<S>))
        .route("/api/v1/bundles/:customer", get(current_handler::<S>))
        .with_state(service)
}

/// Applicant answers as submitted over the wire. Age arrives in years and
/// is collapsed into a band before the rules see it.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestRequest {
    pub customer_name: String,
    pub age: u32,
    pub student: StudentStatus,
    pub income: u32,
}

impl SuggestRequest {
    fn profile(&self) -> ApplicantProfile {
        ApplicantProfile {
            customer_id: CustomerId(self.customer_name.clone()),
            age: AgeBand::from_years(self.age),
            student: self.student,
            income: self.income,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomizeRequest {
    #[serde(flatten)]
    pub applicant: SuggestRequest,
    pub bundle: BundleTemplate,
    #[serde(default)]
    pub add_products: Vec<Product>,
    #[serde(default)]
    pub remove_products: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct BundleView {
    pub bundle: BundleTemplate,
    pub name: &'static str,
    pub products: Vec<Product>,
}

impl BundleView {
    fn from_state(state: &CustomerBundleState) -> Self {
        Self {
            bundle: state.bundle,
            name: state.bundle.name(),
            products: state.products.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ViolationView {
    pub rule: Violation,
    pub description: &'static str,
}

pub(crate) async fn suggest_handler<S>(
    State(service): State<Arc<BundleService<S>>>,
    axum::Json(request): axum::Json<SuggestRequest>,
) -> Response
where
    S: BundleStateStore + 'static,
{
    match service.suggest(&request.profile()) {
        Ok(SuggestOutcome::Suggested(state)) => {
            (StatusCode::CREATED, axum::Json(BundleView::from_state(&state))).into_response()
        }
        Ok(SuggestOutcome::NoEligibleBundle) => {
            let payload = json!({
                "reason": "no bundle is available for a customer without income",
                "products": [],
            });
            (StatusCode::UNAVAILABLE_FOR_LEGAL_REASONS, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn customize_handler<S>(
    State(service): State<Arc<BundleService<S>>>,
    axum::Json(request): axum::Json<CustomizeRequest>,
) -> Response
where
    S: BundleStateStore + 'static,
{
    let profile = request.applicant.profile();
    let outcome = match service.customize(
        &profile,
        request.bundle,
        &request.add_products,
        &request.remove_products,
    ) {
        Ok(outcome) => outcome,
        Err(error) => return error_response(error),
    };

    let message = outcome.message();
    match outcome {
        CustomizationOutcome::Accepted { products } => {
            let payload = json!({
                "bundle": request.bundle,
                "name": request.bundle.name(),
                "products": products,
                "message": message,
            });
            (StatusCode::ACCEPTED, axum::Json(payload)).into_response()
        }
        CustomizationOutcome::Rejected {
            products,
            forbidden,
            violations,
        } => {
            let violations: Vec<ViolationView> = violations
                .into_iter()
                .map(|rule| ViolationView {
                    rule,
                    description: rule.description(),
                })
                .collect();
            let payload = json!({
                "bundle": request.bundle,
                "name": request.bundle.name(),
                "products": products,
                "forbidden_products": forbidden,
                "violations": violations,
                "message": message,
            });
            (StatusCode::UNAVAILABLE_FOR_LEGAL_REASONS, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn current_handler<S>(
    State(service): State<Arc<BundleService<S>>>,
    Path(customer): Path<String>,
) -> Response
where
    S: BundleStateStore + 'static,
{
    match service.current(&CustomerId(customer)) {
        Ok(state) => (StatusCode::OK, axum::Json(BundleView::from_state(&state))).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: BundleServiceError) -> Response {
    let status = match &error {
        BundleServiceError::Profile(_) => StatusCode::BAD_REQUEST,
        BundleServiceError::NoSuggestion(_) => StatusCode::NOT_FOUND,
        BundleServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
