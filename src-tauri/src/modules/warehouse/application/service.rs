use dashmap::DashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::warehouse::domain::entities::{
    NewPalletScan, NewWarehouseRequest, Pallet, PalletScan, WarehouseRequest, WarehouseRequestStatus,
};
use crate::modules::warehouse::domain::repository::WarehouseRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::EntityStore;
use crate::shared::utils::Validator;
use crate::log_info;

/// Minimum similarity for a fuzzy pallet-search hit.
const SEARCH_THRESHOLD: f64 = 0.55;

pub struct WarehouseService {
    repo: Arc<dyn WarehouseRepository>,
    requests: Arc<EntityStore<WarehouseRequest>>,
    pool: Arc<EntityStore<Pallet>>,
    /// Pallets held by a shipment between the optimistic claim and the
    /// next pool refetch.
    held: DashSet<Uuid>,
}

impl WarehouseService {
    pub fn new(repo: Arc<dyn WarehouseRepository>) -> Self {
        Self {
            repo,
            requests: Arc::new(EntityStore::new()),
            pool: Arc::new(EntityStore::new()),
            held: DashSet::new(),
        }
    }

    // ---- snapshots --------------------------------------------------------

    pub async fn refresh(&self) -> AppResult<()> {
        let token = self.requests.begin_fetch();
        let requests = self.repo.list_requests(None).await?;
        self.requests.apply_snapshot(token, requests);

        let token = self.pool.begin_fetch();
        let pallets = self.repo.available_pallets(None).await?;
        self.pool.apply_snapshot(token, pallets);
        Ok(())
    }

    pub fn pending_requests(&self) -> Vec<WarehouseRequest> {
        let mut requests = self
            .requests
            .filter(|request| request.status == WarehouseRequestStatus::Pending);
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        requests
    }

    // ---- material requests ------------------------------------------------

    pub async fn create_request(&self, request: NewWarehouseRequest) -> AppResult<WarehouseRequest> {
        Validator::validate_required_text("Operator name", &request.operator_name)?;
        Validator::validate_required_text("Item type", &request.item_type)?;
        Validator::validate_positive_count("Quantity", request.quantity)?;

        let created = self.repo.create_request(&request).await?;
        self.requests.upsert(created.clone());
        log_info!(
            "Warehouse request: {} x{} for {}",
            created.item_type,
            created.quantity,
            created.machine_name
        );
        Ok(created)
    }

    pub async fn complete_request(&self, id: Uuid) -> AppResult<()> {
        let request = self
            .requests
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Request {} is no longer listed", id)))?;

        let mut predicted = request;
        predicted.status = WarehouseRequestStatus::Completed;
        crate::shared::application::speculate(
            &self.requests,
            predicted,
            self.repo.complete_request(id),
        )
        .await
    }

    // ---- pallets -----------------------------------------------------------

    pub async fn scan_pallet(&self, scan: NewPalletScan) -> AppResult<PalletScan> {
        Validator::validate_pallet_code(&scan.pallet_code)?;
        Validator::validate_required_text("Operator name", &scan.operator_name)?;
        self.repo.scan_pallet(&scan).await
    }

    pub async fn pallet_scans(&self) -> AppResult<Vec<PalletScan>> {
        self.repo.list_pallet_scans().await
    }

    /// Warehouse-scoped pool search for shipment composition. With a query
    /// string, candidates are ranked by fuzzy similarity against the pallet
    /// code and the job name; pallets held by a live shipment never appear.
    pub fn search_pallets(&self, query: &str, warehouse: Option<&str>) -> Vec<Pallet> {
        let candidates = self.pool.filter(|pallet| {
            !self.held.contains(&pallet.id)
                && warehouse.map_or(true, |scope| pallet.warehouse == scope)
        });

        let query = query.trim().to_lowercase();
        if query.is_empty() {
            let mut all = candidates;
            all.sort_by(|a, b| a.code.cmp(&b.code));
            return all;
        }

        let mut ranked: Vec<(f64, Pallet)> = candidates
            .into_iter()
            .filter_map(|pallet| {
                let by_code = strsim::jaro_winkler(&query, &pallet.code.to_lowercase());
                let by_job = strsim::jaro_winkler(&query, &pallet.job_name.to_lowercase());
                let score = by_code.max(by_job);
                (score >= SEARCH_THRESHOLD).then_some((score, pallet))
            })
            .collect();

        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        ranked.into_iter().map(|(_, pallet)| pallet).collect()
    }

    pub fn pallet(&self, id: Uuid) -> Option<Pallet> {
        self.pool.get(id)
    }

    /// Take pallets out of the searchable pool while a shipment holds them.
    pub fn hold_pallets(&self, ids: &[Uuid]) {
        for id in ids {
            self.held.insert(*id);
        }
    }

    /// Return pallets to the pool (shipment deleted while preparing).
    pub fn release_pallets(&self, ids: &[Uuid]) {
        for id in ids {
            self.held.remove(id);
        }
    }

    pub fn is_held(&self, id: Uuid) -> bool {
        self.held.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct EmptyRepo;

    #[async_trait]
    impl WarehouseRepository for EmptyRepo {
        async fn list_requests(
            &self,
            _status: Option<WarehouseRequestStatus>,
        ) -> AppResult<Vec<WarehouseRequest>> {
            Ok(vec![])
        }
        async fn create_request(&self, _request: &NewWarehouseRequest) -> AppResult<WarehouseRequest> {
            Err(AppError::Internal("not used".to_string()))
        }
        async fn complete_request(&self, _id: Uuid) -> AppResult<()> {
            Ok(())
        }
        async fn list_pallet_scans(&self) -> AppResult<Vec<PalletScan>> {
            Ok(vec![])
        }
        async fn scan_pallet(&self, _scan: &NewPalletScan) -> AppResult<PalletScan> {
            Err(AppError::Internal("not used".to_string()))
        }
        async fn available_pallets(&self, _warehouse: Option<String>) -> AppResult<Vec<Pallet>> {
            Ok(vec![])
        }
    }

    fn pallet(code: &str, job: &str, warehouse: &str) -> Pallet {
        Pallet {
            id: Uuid::new_v4(),
            code: code.to_string(),
            job_name: job.to_string(),
            koli_count: 20,
            warehouse: warehouse.to_string(),
        }
    }

    fn service_with_pool(pallets: Vec<Pallet>) -> WarehouseService {
        let service = WarehouseService::new(Arc::new(EmptyRepo));
        let token = service.pool.begin_fetch();
        service.pool.apply_snapshot(token, pallets);
        service
    }

    #[test]
    fn test_search_is_warehouse_scoped() {
        let service = service_with_pool(vec![
            pallet("PLT-001", "Baskı A", "Merkez"),
            pallet("PLT-002", "Baskı B", "Ek Depo"),
        ]);

        let hits = service.search_pallets("", Some("Merkez"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "PLT-001");
    }

    #[test]
    fn test_fuzzy_search_ranks_close_codes_first() {
        let service = service_with_pool(vec![
            pallet("PLT-2024-00123", "Baskı A", "Merkez"),
            pallet("XK-99", "Etiket", "Merkez"),
        ]);

        let hits = service.search_pallets("plt-2024", None);
        assert!(!hits.is_empty());
        assert_eq!(hits[0].code, "PLT-2024-00123");
    }

    #[test]
    fn test_held_pallets_leave_the_pool() {
        let first = pallet("PLT-001", "Baskı A", "Merkez");
        let service = service_with_pool(vec![first.clone(), pallet("PLT-002", "Baskı B", "Merkez")]);

        service.hold_pallets(&[first.id]);
        let hits = service.search_pallets("", None);
        assert_eq!(hits.len(), 1);
        assert_ne!(hits[0].id, first.id);

        service.release_pallets(&[first.id]);
        assert_eq!(service.search_pallets("", None).len(), 2);
    }
}
