//! PlannedProduction 2.0.0 submodel document.
//!
//! The endpoint treats this document as opaque: lookup adapters produce it
//! and the HTTP adapter serialises it unchanged. Field names follow the
//! published aspect model (camelCase on the wire).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Planned production output of one material for one customer.
///
/// # Examples
/// ```
/// use planned_production::domain::PlannedProductionOutput;
///
/// let output = PlannedProductionOutput::new("urn:uuid:123e4567-e89b-12d3-a456-426614174000", Vec::new());
/// let json = serde_json::to_value(&output).expect("serialisable");
/// assert_eq!(json["materialGlobalAssetId"], "urn:uuid:123e4567-e89b-12d3-a456-426614174000");
/// assert_eq!(json["positions"], serde_json::json!([]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlannedProductionOutput {
    /// Catena-X identifier of the material twin.
    #[schema(example = "urn:uuid:123e4567-e89b-12d3-a456-426614174000")]
    pub material_global_asset_id: String,
    /// Planned production grouped by order position.
    pub positions: Vec<Position>,
}

impl PlannedProductionOutput {
    /// Construct a document for `material_global_asset_id`.
    pub fn new(material_global_asset_id: impl Into<String>, positions: Vec<Position>) -> Self {
        Self {
            material_global_asset_id: material_global_asset_id.into(),
            positions,
        }
    }
}

/// Production planned against one order position, or unallocated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Order the production is allocated to; absent for forecast production.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_position_reference: Option<OrderPositionReference>,
    /// Planned quantities with their completion estimates.
    pub allocated_planned_production_outputs: Vec<AllocatedPlannedProductionOutput>,
}

/// Reference to an order position shared by customer and supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderPositionReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_order_position_id: Option<String>,
}

/// A planned quantity and when it is expected to be produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllocatedPlannedProductionOutput {
    pub planned_production_quantity: ItemQuantity,
    /// Estimated completion time (RFC 3339).
    #[schema(value_type = String, example = "2026-03-02T06:00:00Z")]
    pub estimated_time_of_completion: DateTime<Utc>,
    /// Last time the plan changed (RFC 3339).
    #[schema(value_type = String, example = "2026-02-27T14:30:00Z")]
    pub last_updated_on_date_time: DateTime<Utc>,
}

/// Quantity with its unit of measure, e.g. `unit:piece`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemQuantity {
    #[schema(example = 250.0)]
    pub value: f64,
    #[schema(example = "unit:piece")]
    pub unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn sample_output() -> PlannedProductionOutput {
        let completion = DateTime::parse_from_rfc3339("2026-03-02T06:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc);
        let updated = DateTime::parse_from_rfc3339("2026-02-27T14:30:00Z")
            .expect("valid timestamp")
            .with_timezone(&Utc);
        PlannedProductionOutput::new(
            "urn:uuid:123e4567-e89b-12d3-a456-426614174000",
            vec![Position {
                order_position_reference: Some(OrderPositionReference {
                    supplier_order_id: Some("S-4711".to_owned()),
                    customer_order_id: Some("C-0815".to_owned()),
                    customer_order_position_id: None,
                }),
                allocated_planned_production_outputs: vec![AllocatedPlannedProductionOutput {
                    planned_production_quantity: ItemQuantity {
                        value: 250.0,
                        unit: "unit:piece".to_owned(),
                    },
                    estimated_time_of_completion: completion,
                    last_updated_on_date_time: updated,
                }],
            }],
        )
    }

    #[test]
    fn serialises_with_aspect_model_field_names() {
        let value = serde_json::to_value(sample_output()).expect("serialise");
        let position = &value["positions"][0];
        assert_eq!(
            position["orderPositionReference"],
            json!({ "supplierOrderId": "S-4711", "customerOrderId": "C-0815" })
        );
        let allocated = &position["allocatedPlannedProductionOutputs"][0];
        assert_eq!(
            allocated["plannedProductionQuantity"],
            json!({ "value": 250.0, "unit": "unit:piece" })
        );
        assert_eq!(
            allocated["estimatedTimeOfCompletion"].as_str(),
            Some("2026-03-02T06:00:00Z")
        );
        assert!(allocated.get("lastUpdatedOnDateTime").is_some());
    }

    #[test]
    fn unallocated_positions_omit_the_order_reference() {
        let mut output = sample_output();
        for position in &mut output.positions {
            position.order_position_reference = None;
        }
        let value = serde_json::to_value(output).expect("serialise");
        assert_eq!(value["positions"][0].get("orderPositionReference"), None::<&Value>);
    }
}
