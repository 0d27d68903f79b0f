use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::bundles::domain::{
    AgeBand, ApplicantProfile, CustomerBundleState, CustomerId, StudentStatus,
};
use crate::bundles::repository::{BundleStateStore, StoreError};
use crate::bundles::router::bundle_router;
use crate::bundles::service::BundleService;

pub(super) fn adult(name: &str, income: u32) -> ApplicantProfile {
    ApplicantProfile {
        customer_id: CustomerId(name.to_string()),
        age: AgeBand::Adult,
        student: StudentStatus::No,
        income,
    }
}

pub(super) fn student(name: &str, income: u32) -> ApplicantProfile {
    ApplicantProfile {
        customer_id: CustomerId(name.to_string()),
        age: AgeBand::Adult,
        student: StudentStatus::Yes,
        income,
    }
}

pub(super) fn junior(name: &str) -> ApplicantProfile {
    ApplicantProfile {
        customer_id: CustomerId(name.to_string()),
        age: AgeBand::UnderAge,
        student: StudentStatus::No,
        income: 0,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) states: Arc<Mutex<HashMap<CustomerId, CustomerBundleState>>>,
}

impl MemoryStore {
    pub(super) fn len(&self) -> usize {
        self.states.lock().expect("store mutex poisoned").len()
    }
}

impl BundleStateStore for MemoryStore {
    fn get(&self, customer: &CustomerId) -> Result<Option<CustomerBundleState>, StoreError> {
        let guard = self.states.lock().expect("store mutex poisoned");
        Ok(guard.get(customer).cloned())
    }

    fn save(&self, state: CustomerBundleState) -> Result<CustomerBundleState, StoreError> {
        let mut guard = self.states.lock().expect("store mutex poisoned");
        guard.insert(state.customer_id.clone(), state.clone());
        Ok(state)
    }

    fn remove(&self, customer: &CustomerId) -> Result<(), StoreError> {
        let mut guard = self.states.lock().expect("store mutex poisoned");
        guard.remove(customer);
        Ok(())
    }
}

pub(super) struct UnavailableStore;

impl BundleStateStore for UnavailableStore {
    fn get(&self, _customer: &CustomerId) -> Result<Option<CustomerBundleState>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn save(&self, _state: CustomerBundleState) -> Result<CustomerBundleState, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn remove(&self, _customer: &CustomerId) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn build_service() -> (BundleService<MemoryStore>, MemoryStore) {
    let store = MemoryStore::default();
    let service = BundleService::new(Arc::new(store.clone()));
    (service, store)
}

pub(super) fn router_with_service(service: BundleService<MemoryStore>) -> axum::Router {
    bundle_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
