/// Domain entities for warehouse requests and the pallet pool.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use specta::Type;
use uuid::Uuid;

use crate::shared::infrastructure::HasId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
pub enum WarehouseRequestStatus {
    Pending,
    Completed,
}

/// Material request raised from a machine ("Depodan İstek").
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct WarehouseRequest {
    pub id: Uuid,
    pub operator_name: String,
    pub machine_name: String,
    pub item_type: String,
    pub quantity: i32,
    pub status: WarehouseRequestStatus,
    pub created_at: DateTime<Utc>,
}

impl HasId for WarehouseRequest {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct NewWarehouseRequest {
    pub operator_name: String,
    pub machine_name: String,
    pub item_type: String,
    pub quantity: i32,
}

/// A pallet registered from the production floor via QR scan.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct PalletScan {
    pub id: Uuid,
    pub pallet_code: String,
    pub job_id: Uuid,
    pub job_name: String,
    pub operator_name: String,
    pub scanned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct NewPalletScan {
    pub pallet_code: String,
    pub job_id: Uuid,
    pub job_name: String,
    pub operator_name: String,
}

/// A pallet sitting in a warehouse, selectable for a shipment.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct Pallet {
    pub id: Uuid,
    pub code: String,
    pub job_name: String,
    pub koli_count: i32,
    pub warehouse: String,
}

impl HasId for Pallet {
    fn id(&self) -> Uuid {
        self.id
    }
}
