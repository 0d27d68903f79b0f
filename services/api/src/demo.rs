use crate::infra::InMemoryBundleStore;
use std::sync::Arc;

use bundle_service::bundles::{
    AgeBand, ApplicantProfile, BundleService, BundleTemplate, CustomerId, CustomizationOutcome,
    Product, StudentStatus, SuggestOutcome,
};
use bundle_service::error::AppError;

/// Walk a small cast of applicants through suggestion and customization,
/// printing what a client of the HTTP API would see.
pub(crate) fn run_demo() -> Result<(), AppError> {
    let store = Arc::new(InMemoryBundleStore::default());
    let service = BundleService::new(store);

    println!("Bundle suggestion demo\n");

    let applicants = [
        profile("Robin", AgeBand::UnderAge, StudentStatus::No, 0),
        profile("Sara", AgeBand::Adult, StudentStatus::Yes, 9_000),
        profile("Jason", AgeBand::Adult, StudentStatus::No, 0),
        profile("Elin", AgeBand::Adult, StudentStatus::No, 11_000),
        profile("Amir", AgeBand::Adult, StudentStatus::No, 35_000),
        profile("Greta", AgeBand::Pension, StudentStatus::No, 52_000),
    ];

    for applicant in &applicants {
        match service.suggest(applicant) {
            Ok(SuggestOutcome::Suggested(state)) => {
                println!(
                    "  {:<8} -> {:<12} [{}]",
                    applicant.customer_id,
                    state.bundle.name(),
                    labels(&state.products)
                );
            }
            Ok(SuggestOutcome::NoEligibleBundle) => {
                println!(
                    "  {:<8} -> no eligible bundle (no income)",
                    applicant.customer_id
                );
            }
            Err(err) => println!("  {:<8} -> error: {err}", applicant.customer_id),
        }
    }

    println!("\nCustomization walkthrough\n");

    let swaps: [(&str, BundleTemplate, &[Product], &[Product]); 3] = [
        (
            "Greta",
            BundleTemplate::Gold,
            &[Product::CreditCard],
            &[Product::GoldCreditCard],
        ),
        (
            "Amir",
            BundleTemplate::ClassicPlus,
            &[Product::GoldCreditCard],
            &[],
        ),
        (
            "Robin",
            BundleTemplate::JuniorSaver,
            &[Product::DebitCard],
            &[],
        ),
    ];

    for (name, bundle, add, remove) in swaps {
        let applicant = applicants
            .iter()
            .find(|p| p.customer_id.0 == name)
            .expect("applicant in cast");
        match service.customize(applicant, bundle, add, remove) {
            Ok(CustomizationOutcome::Accepted { products }) => {
                println!("  {name:<8} {:<12} accepted  [{}]", bundle.name(), labels(&products));
            }
            Ok(outcome @ CustomizationOutcome::Rejected { .. }) => {
                println!("  {name:<8} {:<12} rejected  {}", bundle.name(), outcome.message());
            }
            Err(err) => println!("  {name:<8} {:<12} error: {err}", bundle.name()),
        }
    }

    Ok(())
}

fn profile(name: &str, age: AgeBand, student: StudentStatus, income: u32) -> ApplicantProfile {
    ApplicantProfile {
        customer_id: CustomerId(name.to_string()),
        age,
        student,
        income,
    }
}

fn labels(products: &[Product]) -> String {
    products
        .iter()
        .map(|p| p.label())
        .collect::<Vec<_>>()
        .join(", ")
}
