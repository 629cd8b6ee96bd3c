//! Planned production submodel endpoint.
//!
//! ```text
//! GET /planned-production/request/{materialnumbercx}/{representation}
//! edc-bpn: BPNL...
//! ```
//!
//! The handler passes the raw header and path segments to the
//! [`PlannedProductionRequests`](crate::domain::ports::PlannedProductionRequests)
//! port untouched and only maps the returned class onto a status code.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, get, web};

use crate::domain::{PlannedProductionOutput, ResponseClass};
use crate::inbound::http::state::HttpState;

/// Header carrying the requesting partner's BPNL, set by the connector.
pub const PARTNER_HEADER: &str = "edc-bpn";

/// Map a classified outcome to its HTTP status.
pub fn status_for(outcome: &ResponseClass) -> StatusCode {
    match outcome {
        ResponseClass::Ok(_) => StatusCode::OK,
        ResponseClass::BadRequest => StatusCode::BAD_REQUEST,
        ResponseClass::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        ResponseClass::NotImplemented => StatusCode::NOT_IMPLEMENTED,
    }
}

fn into_response(outcome: ResponseClass) -> HttpResponse {
    let status = status_for(&outcome);
    match outcome {
        ResponseClass::Ok(output) => HttpResponse::build(status).json(output),
        _ => HttpResponse::build(status).finish(),
    }
}

/// Serve the planned production submodel for a material.
///
/// A missing or non-ASCII `edc-bpn` header is treated as an empty partner
/// identifier and therefore rejected with 400.
#[utoipa::path(
    get,
    path = "/planned-production/request/{materialnumbercx}/{representation}",
    description = "Return the planned production submodel of a material for the requesting partner.",
    params(
        ("materialnumbercx" = String, Path, description = "Catena-X material number (URN or UUID)"),
        ("representation" = String, Path, description = "Submodel representation; only `$value` is supported"),
        ("edc-bpn" = String, Header, description = "BPNL of the requesting partner")
    ),
    responses(
        (status = 200, description = "Planned production submodel", body = PlannedProductionOutput),
        (status = 400, description = "Malformed partner or material identifier"),
        (status = 500, description = "No planned production could be produced"),
        (status = 501, description = "Unsupported representation")
    ),
    tags = ["planned-production"],
    operation_id = "getPlannedProduction"
)]
#[get("/planned-production/request/{materialnumbercx}/{representation}")]
pub async fn get_planned_production(
    state: web::Data<HttpState>,
    request: HttpRequest,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (material, representation) = path.into_inner();
    let partner = request
        .headers()
        .get(PARTNER_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let outcome = state
        .planned_production
        .handle_request(partner, &material, &representation)
        .await;
    into_response(outcome)
}

#[cfg(test)]
#[path = "planned_production_tests.rs"]
mod tests;
