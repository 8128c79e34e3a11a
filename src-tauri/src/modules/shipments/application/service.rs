use std::sync::Arc;
use uuid::Uuid;

use crate::modules::shipments::domain::entities::{NewShipment, Shipment, ShipmentStatus};
use crate::modules::shipments::domain::repository::{ShipmentQuery, ShipmentRepository};
use crate::modules::warehouse::WarehouseService;
use crate::shared::application::{speculate, speculate_removal};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::EntityStore;
use crate::shared::utils::Validator;
use crate::log_info;

/// Client-side shipment lifecycle controller.
///
/// Pallets referenced by a shipment leave the searchable pool the moment
/// the shipment is created and only return when it is deleted while still
/// preparing. A failed delivery keeps its pallets out of the pool; they go
/// through manual inspection before anyone re-pools them.
pub struct ShipmentService {
    repo: Arc<dyn ShipmentRepository>,
    warehouse: Arc<WarehouseService>,
    shipments: Arc<EntityStore<Shipment>>,
}

impl ShipmentService {
    pub fn new(repo: Arc<dyn ShipmentRepository>, warehouse: Arc<WarehouseService>) -> Self {
        Self {
            repo,
            warehouse,
            shipments: Arc::new(EntityStore::new()),
        }
    }

    // ---- snapshots --------------------------------------------------------

    pub async fn refresh(&self) -> AppResult<()> {
        let token = self.shipments.begin_fetch();
        let shipments = self.repo.list(&ShipmentQuery::default()).await?;

        if self.shipments.apply_snapshot(token, shipments) {
            // Re-derive pool holds from the authoritative list: every listed
            // shipment keeps its pallets out, failed ones included
            for shipment in self.shipments.all() {
                self.warehouse.hold_pallets(&shipment.pallet_ids());
            }
        }
        Ok(())
    }

    pub fn all(&self) -> Vec<Shipment> {
        let mut shipments = self.shipments.all();
        shipments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        shipments
    }

    /// The driver's open work: terminal shipments are filtered out.
    pub fn for_driver(&self, driver_id: Uuid) -> Vec<Shipment> {
        let mut shipments = self.shipments.filter(|shipment| {
            shipment.driver_id == Some(driver_id) && !shipment.status.is_terminal()
        });
        shipments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        shipments
    }

    fn shipment(&self, id: Uuid) -> AppResult<Shipment> {
        self.shipments
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Shipment {} is no longer listed", id)))
    }

    // ---- lifecycle --------------------------------------------------------

    /// Compose a shipment from pool pallets. The total koli count defaults
    /// to the sum of the selected pallets unless overridden; the pallets
    /// are claimed from the pool immediately.
    pub async fn create(&self, mut new_shipment: NewShipment) -> AppResult<Shipment> {
        Validator::validate_vehicle_plate(&new_shipment.vehicle_plate)?;
        Validator::validate_required_text("Address", &new_shipment.address)?;
        if new_shipment.pallet_ids.is_empty() {
            return Err(AppError::Validation(
                "Select at least one pallet".to_string(),
            ));
        }

        let mut pallet_sum = 0;
        for pallet_id in &new_shipment.pallet_ids {
            let pallet = self.warehouse.pallet(*pallet_id).ok_or_else(|| {
                AppError::Validation("A selected pallet is no longer in the warehouse".to_string())
            })?;
            if self.warehouse.is_held(*pallet_id) {
                return Err(AppError::Validation(format!(
                    "Pallet {} is already on a shipment",
                    pallet.code
                )));
            }
            pallet_sum += pallet.koli_count;
        }

        if let Some(total) = new_shipment.total_koli {
            Validator::validate_positive_count("Total koli", total)?;
        }
        new_shipment.total_koli = Some(new_shipment.total_koli.unwrap_or(pallet_sum));

        let created = self.repo.create(&new_shipment).await?;
        self.shipments.upsert(created.clone());
        self.warehouse.hold_pallets(&created.pallet_ids());
        log_info!(
            "Shipment {} created for {} ({} koli)",
            created.id,
            created.vehicle_plate,
            created.total_koli
        );
        Ok(created)
    }

    pub async fn start_delivery(&self, id: Uuid) -> AppResult<Shipment> {
        let shipment = self.shipment(id)?;
        if shipment.status != ShipmentStatus::Preparing {
            return Err(AppError::Validation(format!(
                "Shipment is {} and cannot start delivery",
                shipment.status
            )));
        }

        let predicted = shipment.in_transit();
        speculate(
            &self.shipments,
            predicted.clone(),
            self.repo.set_status(id, ShipmentStatus::InTransit, None),
        )
        .await?;
        log_info!("Shipment {} is on the road", id);
        Ok(predicted)
    }

    pub async fn mark_delivered(&self, id: Uuid) -> AppResult<()> {
        let shipment = self.shipment(id)?;
        if shipment.status != ShipmentStatus::InTransit {
            return Err(AppError::Validation(format!(
                "Shipment is {} and cannot be delivered",
                shipment.status
            )));
        }

        speculate(
            &self.shipments,
            shipment.delivered(),
            self.repo.set_status(id, ShipmentStatus::Delivered, None),
        )
        .await?;
        log_info!("Shipment {} delivered", id);
        Ok(())
    }

    /// Terminal failure; a non-empty reason is required before any request
    /// goes out. The pallets stay excluded from the pool.
    pub async fn mark_failed(&self, id: Uuid, reason: &str) -> AppResult<()> {
        Validator::validate_reason(reason)?;
        let shipment = self.shipment(id)?;
        if shipment.status != ShipmentStatus::InTransit {
            return Err(AppError::Validation(format!(
                "Shipment is {} and cannot be marked failed",
                shipment.status
            )));
        }

        speculate(
            &self.shipments,
            shipment.failed(reason.trim()),
            self.repo
                .set_status(id, ShipmentStatus::Failed, Some(reason.trim().to_string())),
        )
        .await?;
        log_info!("Shipment {} failed: {}", id, reason.trim());
        Ok(())
    }

    /// Delete a shipment that never left; its pallets return to the pool.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let shipment = self.shipment(id)?;
        if shipment.status != ShipmentStatus::Preparing {
            return Err(AppError::Validation(
                "Only a preparing shipment can be deleted".to_string(),
            ));
        }

        speculate_removal(&self.shipments, id, self.repo.delete(id)).await?;
        self.warehouse.release_pallets(&shipment.pallet_ids());
        Ok(())
    }
}
