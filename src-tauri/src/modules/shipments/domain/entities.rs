/// Domain entities for shipments
///
/// A shipment moves `preparing → in_transit → delivered`, or fails in
/// transit with a mandatory reason. Both end states are terminal.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use specta::Type;
use uuid::Uuid;

use crate::shared::infrastructure::HasId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Preparing,
    InTransit,
    Delivered,
    Failed,
}

impl ShipmentStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ShipmentStatus::Delivered | ShipmentStatus::Failed)
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShipmentStatus::Preparing => write!(f, "preparing"),
            ShipmentStatus::InTransit => write!(f, "in_transit"),
            ShipmentStatus::Delivered => write!(f, "delivered"),
            ShipmentStatus::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for ShipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "preparing" => Ok(ShipmentStatus::Preparing),
            "in_transit" => Ok(ShipmentStatus::InTransit),
            "delivered" => Ok(ShipmentStatus::Delivered),
            "failed" => Ok(ShipmentStatus::Failed),
            _ => Err(format!("Invalid shipment status: {}", s)),
        }
    }
}

/// A pallet as carried by a shipment, in loading order.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct PalletRef {
    pub pallet_id: Uuid,
    pub code: String,
    pub koli_count: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct Shipment {
    pub id: Uuid,
    pub vehicle_plate: String,
    pub driver_id: Option<Uuid>,
    pub driver_name: Option<String>,
    #[serde(default)]
    pub pallets: Vec<PalletRef>,
    pub total_koli: i32,
    pub address: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub status: ShipmentStatus,
    pub failure_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
}

impl HasId for Shipment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Shipment {
    pub fn pallet_ids(&self) -> Vec<Uuid> {
        self.pallets.iter().map(|pallet| pallet.pallet_id).collect()
    }

    /// Predicted state when the driver takes off.
    pub fn in_transit(&self) -> Self {
        Self {
            status: ShipmentStatus::InTransit,
            ..self.clone()
        }
    }

    pub fn delivered(&self) -> Self {
        Self {
            status: ShipmentStatus::Delivered,
            delivered_at: Some(Utc::now()),
            ..self.clone()
        }
    }

    pub fn failed(&self, reason: &str) -> Self {
        Self {
            status: ShipmentStatus::Failed,
            failure_reason: Some(reason.to_string()),
            ..self.clone()
        }
    }
}

/// Payload for composing a shipment from the planning panel.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct NewShipment {
    pub vehicle_plate: String,
    pub driver_id: Option<Uuid>,
    pub driver_name: Option<String>,
    pub pallet_ids: Vec<Uuid>,
    /// Manual override; defaults to the sum of the selected pallets.
    pub total_koli: Option<i32>,
    pub address: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            ShipmentStatus::Preparing,
            ShipmentStatus::InTransit,
            ShipmentStatus::Delivered,
            ShipmentStatus::Failed,
        ] {
            assert_eq!(status.to_string().parse::<ShipmentStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(!ShipmentStatus::Preparing.is_terminal());
        assert!(!ShipmentStatus::InTransit.is_terminal());
        assert!(ShipmentStatus::Delivered.is_terminal());
        assert!(ShipmentStatus::Failed.is_terminal());
    }

    #[test]
    fn test_failed_records_reason() {
        let shipment = Shipment {
            id: Uuid::new_v4(),
            vehicle_plate: "34 ABC 123".to_string(),
            driver_id: None,
            driver_name: None,
            pallets: vec![],
            total_koli: 35,
            address: "Sanayi Mah. 5. Cad.".to_string(),
            phone: None,
            notes: None,
            status: ShipmentStatus::InTransit,
            failure_reason: None,
            created_at: Utc::now(),
            delivered_at: None,
        };

        let failed = shipment.failed("adres bulunamadı");
        assert_eq!(failed.status, ShipmentStatus::Failed);
        assert_eq!(failed.failure_reason.as_deref(), Some("adres bulunamadı"));
    }
}
