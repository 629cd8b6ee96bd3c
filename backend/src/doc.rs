//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the planned production submodel endpoint, the health
//! checks, and the submodel document schemas. The generated document backs
//! Swagger UI in debug builds and is exported by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::domain::{
    AllocatedPlannedProductionOutput, ItemQuantity, OrderPositionReference, PlannedProductionOutput,
    Position,
};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Planned production submodel API",
        description = "Serves PlannedProduction submodels to partners authenticated by their BPNL.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::planned_production::get_planned_production,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PlannedProductionOutput,
        Position,
        OrderPositionReference,
        AllocatedPlannedProductionOutput,
        ItemQuantity
    )),
    tags(
        (name = "planned-production", description = "Planned production submodel"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    const SUBMODEL_PATH: &str = "/planned-production/request/{materialnumbercx}/{representation}";

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn documents_submodel_and_health_paths() {
        let doc = ApiDoc::openapi();
        for path in [SUBMODEL_PATH, "/health/ready", "/health/live"] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn output_schema_uses_wire_field_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let output = schemas
            .get("PlannedProductionOutput")
            .expect("PlannedProductionOutput schema");

        assert_object_schema_has_field(output, "materialGlobalAssetId");
        assert_object_schema_has_field(output, "positions");
    }

    #[test]
    fn submodel_operation_lists_every_status() {
        let doc = ApiDoc::openapi();
        let operation = doc
            .paths
            .paths
            .get(SUBMODEL_PATH)
            .and_then(|item| item.get.as_ref())
            .expect("GET operation");

        for status in ["200", "400", "500", "501"] {
            assert!(
                operation.responses.responses.contains_key(status),
                "missing response {status}"
            );
        }
    }
}
