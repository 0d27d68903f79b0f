use super::domain::{CustomerBundleState, CustomerId};

/// Storage abstraction for per-customer bundle state.
///
/// Implementations only need single-key atomicity; the service treats a
/// missing entry as a domain condition, not a storage failure.
pub trait BundleStateStore: Send + Sync {
    fn get(&self, customer: &CustomerId) -> Result<Option<CustomerBundleState>, StoreError>;
    /// Upsert, replacing any prior state for the same customer.
    fn save(&self, state: CustomerBundleState) -> Result<CustomerBundleState, StoreError>;
    /// Discard any stored state for the customer; absent entries are a no-op.
    fn remove(&self, customer: &CustomerId) -> Result<(), StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("state store unavailable: {0}")]
    Unavailable(String),
}
