use std::sync::Arc;

use tracing::{info, warn};

use super::catalog::{BundleTemplate, Product};
use super::customization::{customize, CustomizationOutcome};
use super::domain::{ApplicantProfile, CustomerBundleState, CustomerId, ProfileError, Suggestion};
use super::eligibility::suggest_bundle;
use super::repository::{BundleStateStore, StoreError};

/// Service facade tying the rule engine to the per-customer state store.
pub struct BundleService<S> {
    store: Arc<S>,
}

/// Outcome of a suggestion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestOutcome {
    Suggested(CustomerBundleState),
    /// Income-zero sentinel: no bundle, no products, not an error.
    NoEligibleBundle,
}

impl<S> BundleService<S>
where
    S: BundleStateStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Suggest a bundle for an applicant and persist it as their state.
    ///
    /// Idempotent: a customer who already holds a stored bundle gets it
    /// back unchanged, without a second entry being created.
    pub fn suggest(&self, profile: &ApplicantProfile) -> Result<SuggestOutcome, BundleServiceError> {
        profile.validate()?;

        if let Some(existing) = self.store.get(&profile.customer_id)? {
            return Ok(SuggestOutcome::Suggested(existing));
        }

        match suggest_bundle(profile) {
            Suggestion::NoEligibleBundle => Ok(SuggestOutcome::NoEligibleBundle),
            Suggestion::Bundle(bundle) => {
                let state = CustomerBundleState {
                    customer_id: profile.customer_id.clone(),
                    bundle,
                    products: bundle.products().to_vec(),
                };
                let stored = self.store.save(state)?;
                info!(customer = %stored.customer_id, bundle = stored.bundle.name(), "suggested bundle");
                Ok(SuggestOutcome::Suggested(stored))
            }
        }
    }

    /// Customize a previously suggested bundle.
    ///
    /// A rejection leaves the stored state untouched; only an accepted
    /// outcome replaces it.
    pub fn customize(
        &self,
        profile: &ApplicantProfile,
        bundle: BundleTemplate,
        add: &[Product],
        remove: &[Product],
    ) -> Result<CustomizationOutcome, BundleServiceError> {
        profile.validate()?;

        let Some(_prior) = self.store.get(&profile.customer_id)? else {
            return Err(BundleServiceError::NoSuggestion(profile.customer_id.clone()));
        };

        let outcome = customize(bundle, profile, add, remove);
        match &outcome {
            CustomizationOutcome::Accepted { products } => {
                self.store.save(CustomerBundleState {
                    customer_id: profile.customer_id.clone(),
                    bundle,
                    products: products.clone(),
                })?;
                info!(customer = %profile.customer_id, bundle = bundle.name(), "customized bundle");
            }
            CustomizationOutcome::Rejected { violations, .. } => {
                warn!(
                    customer = %profile.customer_id,
                    bundle = bundle.name(),
                    ?violations,
                    "customization rejected"
                );
            }
        }
        Ok(outcome)
    }

    /// Current stored state for a customer.
    pub fn current(&self, customer: &CustomerId) -> Result<CustomerBundleState, BundleServiceError> {
        self.store
            .get(customer)?
            .ok_or_else(|| BundleServiceError::NoSuggestion(customer.clone()))
    }
}

/// Error raised by the bundle service. Business rejections are not errors;
/// they travel inside `SuggestOutcome` and `CustomizationOutcome`.
#[derive(Debug, thiserror::Error)]
pub enum BundleServiceError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("customer {0} does not have any suggestion to modify")]
    NoSuggestion(CustomerId),
    #[error(transparent)]
    Store(#[from] StoreError),
}
