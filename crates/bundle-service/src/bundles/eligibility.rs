//! Pure eligibility rules: applicant attributes to a suggested bundle, and
//! candidate product sets to forbidden products and violations.

use super::catalog::{BundleTemplate, Product};
use super::domain::{AgeBand, ApplicantProfile, StudentStatus, Suggestion, Violation};

/// Upper bound of the Classic income tier, inclusive.
pub const CLASSIC_INCOME_CAP: u32 = 12_000;
/// Upper bound of the Classic Plus income tier, inclusive.
pub const CLASSIC_PLUS_INCOME_CAP: u32 = 40_000;

/// Select the initial bundle for an applicant.
///
/// Total over valid input: age trumps everything, then the student flag,
/// then the income brackets. Income zero yields the no-eligible-bundle
/// sentinel rather than an error.
pub fn suggest_bundle(profile: &ApplicantProfile) -> Suggestion {
    if profile.age == AgeBand::UnderAge {
        return Suggestion::Bundle(BundleTemplate::JuniorSaver);
    }
    if profile.student == StudentStatus::Yes {
        return Suggestion::Bundle(BundleTemplate::Student);
    }
    match profile.income {
        0 => Suggestion::NoEligibleBundle,
        income if income <= CLASSIC_INCOME_CAP => Suggestion::Bundle(BundleTemplate::Classic),
        income if income <= CLASSIC_PLUS_INCOME_CAP => {
            Suggestion::Bundle(BundleTemplate::ClassicPlus)
        }
        _ => Suggestion::Bundle(BundleTemplate::Gold),
    }
}

/// Forbidden products and triggered violations for one candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReport {
    pub forbidden: Vec<Product>,
    pub violations: Vec<Violation>,
}

impl RuleReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validate a candidate product set against the applicant's profile.
///
/// Exactly one tier branch applies per profile; the account-count rule then
/// runs independently for every branch except the under-age one, whose
/// bundle admits no modification at all. Violations are ordered tier rule
/// first, account rule second.
pub fn evaluate_products(candidate: &[Product], profile: &ApplicantProfile) -> RuleReport {
    if profile.age == AgeBand::UnderAge {
        return RuleReport {
            forbidden: intersect(candidate, Violation::AgeRestricted.restricted_products()),
            violations: vec![Violation::AgeRestricted],
        };
    }

    let mut violations = Vec::new();
    let mut forbidden = Vec::new();

    if let Some(rule) = tier_violation(profile, candidate) {
        // For income zero the restricted set is the whole catalog, so the
        // intersection is the entire candidate set.
        let hits = intersect(candidate, rule.restricted_products());
        if !hits.is_empty() {
            violations.push(rule);
            forbidden = hits;
        }
    }

    let accounts_held = candidate.iter().filter(|p| p.is_account()).count();
    if accounts_held != 1 {
        violations.push(Violation::AccountCountInvalid);
        for product in candidate.iter().filter(|p| p.is_account()) {
            if !forbidden.contains(product) {
                forbidden.push(*product);
            }
        }
    }

    RuleReport {
        forbidden,
        violations,
    }
}

/// The single tier rule matching this profile, if any.
fn tier_violation(profile: &ApplicantProfile, candidate: &[Product]) -> Option<Violation> {
    if profile.student == StudentStatus::Yes {
        return Some(Violation::StudentRestricted);
    }
    match profile.income {
        0 if !candidate.is_empty() => Some(Violation::IncomeZero),
        0 => None,
        income if income <= CLASSIC_INCOME_CAP => Some(Violation::IncomeTier12K),
        income if income <= CLASSIC_PLUS_INCOME_CAP => Some(Violation::IncomeTier40K),
        _ => Some(Violation::IncomeTierAbove40K),
    }
}

/// Members of `source` present in `restricted`, preserving source order.
fn intersect(source: &[Product], restricted: &[Product]) -> Vec<Product> {
    let mut hits = Vec::new();
    for product in source {
        if restricted.contains(product) && !hits.contains(product) {
            hits.push(*product);
        }
    }
    hits
}
