//! Bundle suggestion and customization.
//!
//! The rule set lives entirely in this module tree: `catalog` holds the
//! closed product and bundle definitions, `eligibility` maps applicant
//! attributes to bundles and candidate product sets to violations,
//! `customization` applies add/remove deltas and re-validates, and
//! `service` ties both to the per-customer state store.

pub mod catalog;
pub mod customization;
pub mod domain;
pub mod eligibility;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{BundleTemplate, Product};
pub use customization::{apply_delta, customize, CustomizationOutcome};
pub use domain::{
    AgeBand, ApplicantProfile, CustomerBundleState, CustomerId, ProfileError, StudentStatus,
    Suggestion, Violation,
};
pub use eligibility::{evaluate_products, suggest_bundle, RuleReport};
pub use repository::{BundleStateStore, StoreError};
pub use router::bundle_router;
pub use service::{BundleService, BundleServiceError, SuggestOutcome};
