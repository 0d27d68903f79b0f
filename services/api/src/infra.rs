use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use bundle_service::bundles::{BundleStateStore, CustomerBundleState, CustomerId, StoreError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Mutex-guarded map keyed by customer. Single-key atomicity is all the
/// engine requires; concurrent requests for different customers never
/// contend on anything but the lock itself.
#[derive(Default, Clone)]
pub(crate) struct InMemoryBundleStore {
    states: Arc<Mutex<HashMap<CustomerId, CustomerBundleState>>>,
}

impl BundleStateStore for InMemoryBundleStore {
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
