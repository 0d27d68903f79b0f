use serde::{Deserialize, Serialize};

use super::catalog::{BundleTemplate, Product};

/// Identifier wrapper for customers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub String);

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Coarse age classification used by the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeBand {
    UnderAge,
    Adult,
    Pension,
}

impl AgeBand {
    pub const fn from_years(years: u32) -> Self {
        match years {
            0..=17 => AgeBand::UnderAge,
            18..=64 => AgeBand::Adult,
            _ => AgeBand::Pension,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudentStatus {
    Yes,
    No,
}

/// Demographic and financial attributes driving suggestion and validation.
///
/// Income is monthly and non-negative by construction; malformed input
/// (negative income, missing fields) never reaches the rule engine because
/// JSON deserialization rejects it first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub customer_id: CustomerId,
    pub age: AgeBand,
    pub student: StudentStatus,
    pub income: u32,
}

impl ApplicantProfile {
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.customer_id.0.trim().is_empty() {
            return Err(ProfileError::EmptyCustomerName);
        }
        Ok(())
    }
}

/// Ingress validation failures, distinct from business-rule rejections.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("customer name must not be empty")]
    EmptyCustomerName,
}

/// The product set a customer currently holds.
///
/// Always produced fresh by the engine and replaced wholesale on a
/// successful customization; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerBundleState {
    pub customer_id: CustomerId,
    pub bundle: BundleTemplate,
    pub products: Vec<Product>,
}

/// Outcome of the suggestion rules for one applicant.
///
/// `NoEligibleBundle` is the income-zero sentinel: a normal business
/// outcome with an empty product set, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suggestion {
    Bundle(BundleTemplate),
    NoEligibleBundle,
}

/// A named rule category explaining why a candidate product set fails.
///
/// Each variant carries a closed set of products that trigger it when
/// present in a candidate set, mirroring the published eligibility rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Violation {
    AgeRestricted,
    StudentRestricted,
    IncomeZero,
    IncomeTier12K,
    IncomeTier40K,
    IncomeTierAbove40K,
    AccountCountInvalid,
}

impl Violation {
    pub const fn description(self) -> &'static str {
        match self {
            Violation::AgeRestricted => "Junior Saver customers cannot change their bundle",
            Violation::StudentRestricted => "Students cannot choose these products",
            Violation::IncomeZero => "Customers without income cannot hold any product",
            Violation::IncomeTier12K => {
                "An income up to 12000 is not enough to choose these products"
            }
            Violation::IncomeTier40K => {
                "An income up to 40000 is not enough to choose these products"
            }
            Violation::IncomeTierAbove40K => {
                "These products are not available above the 40000 income tier"
            }
            Violation::AccountCountInvalid => {
                "Holding no account or more than one account is not allowed"
            }
        }
    }

    /// Products that trigger this violation when present in a candidate set.
    pub const fn restricted_products(self) -> &'static [Product] {
        match self {
            Violation::AgeRestricted => &[
                Product::StudentAccount,
                Product::CurrentAccount,
                Product::CurrentAccountPlus,
                Product::DebitCard,
                Product::CreditCard,
                Product::GoldCreditCard,
            ],
            Violation::StudentRestricted => &[
                Product::CurrentAccountPlus,
                Product::CurrentAccount,
                Product::GoldCreditCard,
                Product::JuniorSaverAccount,
            ],
            Violation::IncomeZero => &Product::ALL,
            Violation::IncomeTier12K => &[
                Product::CurrentAccountPlus,
                Product::CreditCard,
                Product::GoldCreditCard,
                Product::StudentAccount,
                Product::JuniorSaverAccount,
            ],
            Violation::IncomeTier40K => &[
                Product::CurrentAccountPlus,
                Product::GoldCreditCard,
                Product::StudentAccount,
                Product::JuniorSaverAccount,
            ],
            Violation::IncomeTierAbove40K => {
                &[Product::JuniorSaverAccount, Product::StudentAccount]
            }
            Violation::AccountCountInvalid => &[
                Product::JuniorSaverAccount,
                Product::StudentAccount,
                Product::CurrentAccount,
                Product::CurrentAccountPlus,
            ],
        }
    }
}
