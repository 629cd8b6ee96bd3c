//! End-to-end coverage of the planned production endpoint through the public
//! library surface: trace middleware, handler, gateway, in-memory snapshot,
//! and diagnostics.

use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use planned_production::Trace;
use planned_production::domain::ports::RequestDiagnostics;
use planned_production::domain::{
    GrammarValidator, MaterialIdentifier, PartnerIdentifier, PlannedProductionGateway,
    PlannedProductionOutput, REPLACED_REPRESENTATION, RejectionReason, RequestRejection,
};
use planned_production::inbound::http::planned_production::{
    PARTNER_HEADER, get_planned_production,
};
use planned_production::inbound::http::state::HttpState;
use planned_production::middleware::TRACE_ID_HEADER;
use planned_production::outbound::lookup::InMemoryPlannedProductionLookup;
use rstest::{fixture, rstest};
use serde_json::Value;

const PARTNER: &str = "BPNL1234567890AB";
const UNKNOWN_PARTNER: &str = "BPNL9999999999ZZ";
const MATERIAL: &str = "urn:uuid:123e4567-e89b-12d3-a456-426614174000";

#[derive(Default)]
struct RecordingDiagnostics {
    rejections: Mutex<Vec<RequestRejection>>,
}

impl RecordingDiagnostics {
    fn recorded(&self) -> Vec<RequestRejection> {
        self.rejections.lock().expect("diagnostics lock").clone()
    }
}

impl RequestDiagnostics for RecordingDiagnostics {
    fn record_rejection(&self, rejection: &RequestRejection) {
        self.rejections
            .lock()
            .expect("diagnostics lock")
            .push(rejection.clone());
    }
}

#[fixture]
fn snapshot() -> InMemoryPlannedProductionLookup {
    let seed = serde_json::json!([{
        "partner": PARTNER,
        "material": MATERIAL,
        "output": {
            "materialGlobalAssetId": MATERIAL,
            "positions": [{
                "allocatedPlannedProductionOutputs": [{
                    "plannedProductionQuantity": { "value": 20.0, "unit": "unit:piece" },
                    "estimatedTimeOfCompletion": "2026-11-02T12:00:00Z",
                    "lastUpdatedOnDateTime": "2026-10-19T08:00:00Z"
                }]
            }]
        }
    }]);
    InMemoryPlannedProductionLookup::from_json(
        std::path::Path::new("inline-seed.json"),
        &seed.to_string(),
    )
    .expect("seed parses")
}

fn test_app(
    lookup: InMemoryPlannedProductionLookup,
    diagnostics: Arc<RecordingDiagnostics>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let gateway =
        PlannedProductionGateway::new(Arc::new(GrammarValidator), Arc::new(lookup), diagnostics);
    App::new()
        .app_data(web::Data::new(HttpState::new(Arc::new(gateway))))
        .wrap(Trace)
        .service(get_planned_production)
}

fn get(partner: Option<&str>, material: &str, representation: &str) -> test::TestRequest {
    let request = test::TestRequest::get().uri(&format!(
        "/planned-production/request/{material}/{representation}"
    ));
    match partner {
        Some(partner) => request.insert_header((PARTNER_HEADER, partner)),
        None => request,
    }
}

#[rstest]
#[actix_web::test]
async fn serves_seeded_document(snapshot: InMemoryPlannedProductionLookup) {
    let diagnostics = Arc::new(RecordingDiagnostics::default());
    let app = test::init_service(test_app(snapshot, Arc::clone(&diagnostics))).await;

    let res = test::call_service(&app, get(Some(PARTNER), MATERIAL, "$value").to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["materialGlobalAssetId"], MATERIAL);
    assert_eq!(
        body["positions"][0]["allocatedPlannedProductionOutputs"][0]["plannedProductionQuantity"]
            ["value"],
        20.0
    );
    let served: PlannedProductionOutput =
        serde_json::from_value(body).expect("body is a planned production document");
    assert_eq!(served.positions.len(), 1);
    assert!(diagnostics.recorded().is_empty());
}

#[rstest]
#[case::missing_header(None, MATERIAL, "$value", StatusCode::BAD_REQUEST, RejectionReason::MalformedIdentifier)]
#[case::site_bpn(Some("BPNS1234567890AB"), MATERIAL, "$value", StatusCode::BAD_REQUEST, RejectionReason::MalformedIdentifier)]
#[case::plain_material(Some(PARTNER), "MNR-7307-AU340474.001", "$value", StatusCode::BAD_REQUEST, RejectionReason::MalformedIdentifier)]
#[case::json(Some(PARTNER), MATERIAL, "json", StatusCode::NOT_IMPLEMENTED, RejectionReason::UnsupportedRepresentation)]
#[case::capitalised(Some(PARTNER), MATERIAL, "$Value", StatusCode::NOT_IMPLEMENTED, RejectionReason::UnsupportedRepresentation)]
#[case::unknown_partner(Some(UNKNOWN_PARTNER), MATERIAL, "$value", StatusCode::INTERNAL_SERVER_ERROR, RejectionReason::LookupUnavailable)]
#[actix_web::test]
async fn rejections_carry_status_and_reason(
    snapshot: InMemoryPlannedProductionLookup,
    #[case] partner: Option<&str>,
    #[case] material: &str,
    #[case] representation: &str,
    #[case] status: StatusCode,
    #[case] reason: RejectionReason,
) {
    let diagnostics = Arc::new(RecordingDiagnostics::default());
    let app = test::init_service(test_app(snapshot, Arc::clone(&diagnostics))).await;

    let res =
        test::call_service(&app, get(partner, material, representation).to_request()).await;

    assert_eq!(res.status(), status);
    assert!(test::read_body(res).await.is_empty());
    let reasons: Vec<_> = diagnostics
        .recorded()
        .iter()
        .map(RequestRejection::reason)
        .collect();
    assert_eq!(reasons, vec![reason]);
}

#[rstest]
#[actix_web::test]
async fn injected_representation_never_reaches_diagnostics(
    snapshot: InMemoryPlannedProductionLookup,
) {
    let diagnostics = Arc::new(RecordingDiagnostics::default());
    let app = test::init_service(test_app(snapshot, Arc::clone(&diagnostics))).await;

    let res = test::call_service(
        &app,
        get(Some(PARTNER), MATERIAL, "%24value%0D%0AX-Forged:%20true").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);
    let recorded = diagnostics.recorded();
    let reported = recorded
        .first()
        .and_then(RequestRejection::representation)
        .expect("representation recorded");
    assert_eq!(reported.as_str(), REPLACED_REPRESENTATION);
    assert!(reported.was_replaced());
}

#[rstest]
#[actix_web::test]
async fn programmatic_snapshot_matches_seeded_one() {
    let output = PlannedProductionOutput::new(MATERIAL, Vec::new());
    let lookup = InMemoryPlannedProductionLookup::default()
        .with_document(
            PartnerIdentifier::new(PARTNER).expect("valid partner"),
            MaterialIdentifier::new(MATERIAL).expect("valid material"),
            output.clone(),
        )
        .expect("unique entry");
    let app = test::init_service(test_app(lookup, Arc::default())).await;

    let res = test::call_service(&app, get(Some(PARTNER), MATERIAL, "$value").to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    let served: PlannedProductionOutput = test::read_body_json(res).await;
    assert_eq!(served, output);
}
