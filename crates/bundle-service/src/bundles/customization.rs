//! Applies add/remove deltas to a bundle's product set and re-validates the
//! result against the eligibility rules.

use super::catalog::{BundleTemplate, Product};
use super::domain::{ApplicantProfile, Violation};
use super::eligibility::evaluate_products;

/// Result of one customization attempt.
///
/// `Rejected` is an expected business outcome, not an error. It reports the
/// candidate (post-delta) product list so callers can see exactly what was
/// evaluated, together with the forbidden subset and the triggered rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomizationOutcome {
    Accepted {
        products: Vec<Product>,
    },
    Rejected {
        products: Vec<Product>,
        forbidden: Vec<Product>,
        violations: Vec<Violation>,
    },
}

impl CustomizationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, CustomizationOutcome::Accepted { .. })
    }

    /// Human-readable summary for API responses.
    pub fn message(&self) -> String {
        match self {
            CustomizationOutcome::Accepted { .. } => {
                "Products have been modified successfully.".to_string()
            }
            CustomizationOutcome::Rejected { violations, .. } => {
                let reasons: Vec<&str> =
                    violations.iter().map(|v| v.description()).collect();
                format!(
                    "Due to your given answers, these products cannot be chosen: {}",
                    reasons.join("; ")
                )
            }
        }
    }
}

/// Apply removals, then append additions, deduplicating while preserving
/// first occurrence. Removing an absent product and re-adding a held one
/// are both no-ops; a product in both lists is removed and re-appended,
/// so it ends up at the tail.
pub fn apply_delta(current: &[Product], add: &[Product], remove: &[Product]) -> Vec<Product> {
    let mut result: Vec<Product> = current
        .iter()
        .filter(|p| !remove.contains(p))
        .copied()
        .collect();
    for product in add {
        if !result.contains(product) {
            result.push(*product);
        }
    }
    result
}

/// Customize a bundle's product set and validate the outcome.
///
/// Pure: persistence of accepted outcomes is the service's job, and a
/// rejection never has side effects.
pub fn customize(
    bundle: BundleTemplate,
    profile: &ApplicantProfile,
    add: &[Product],
    remove: &[Product],
) -> CustomizationOutcome {
    // Junior Saver admits no modification at all, whatever the deltas.
    if bundle == BundleTemplate::JuniorSaver {
        return CustomizationOutcome::Rejected {
            products: bundle.products().to_vec(),
            forbidden: Vec::new(),
            violations: vec![Violation::AgeRestricted],
        };
    }

    // Junior and student accounts are never addable to adult-tier bundles.
    if bundle.tier() > 0 {
        let offending: Vec<Product> = add
            .iter()
            .copied()
            .filter(|p| {
                matches!(p, Product::JuniorSaverAccount | Product::StudentAccount)
            })
            .collect();
        if !offending.is_empty() {
            return CustomizationOutcome::Rejected {
                products: apply_delta(bundle.products(), add, remove),
                forbidden: dedup(offending),
                violations: vec![adult_tier_violation(bundle)],
            };
        }
    }

    let candidate = apply_delta(bundle.products(), add, remove);
    let report = evaluate_products(&candidate, profile);
    if report.is_valid() {
        CustomizationOutcome::Accepted {
            products: candidate,
        }
    } else {
        CustomizationOutcome::Rejected {
            products: candidate,
            forbidden: report.forbidden,
            violations: report.violations,
        }
    }
}

/// The income-tier rule whose restricted set covers the junior and student
/// accounts for a given adult bundle.
fn adult_tier_violation(bundle: BundleTemplate) -> Violation {
    match bundle {
        BundleTemplate::Classic => Violation::IncomeTier12K,
        BundleTemplate::ClassicPlus => Violation::IncomeTier40K,
        _ => Violation::IncomeTierAbove40K,
    }
}

fn dedup(products: Vec<Product>) -> Vec<Product> {
    let mut out = Vec::with_capacity(products.len());
    for product in products {
        if !out.contains(&product) {
            out.push(product);
        }
    }
    out
}
