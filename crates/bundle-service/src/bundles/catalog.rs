use serde::{Deserialize, Serialize};

/// A single financial instrument offered within a bundle.
///
/// The set is closed; wire names match the upstream API contract
/// (`CURRENT_ACCOUNT`, `DEBIT_CARD`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Product {
    CurrentAccount,
    CurrentAccountPlus,
    JuniorSaverAccount,
    StudentAccount,
    DebitCard,
    CreditCard,
    GoldCreditCard,
}

impl Product {
    pub const ALL: [Product; 7] = [
        Product::CurrentAccount,
        Product::CurrentAccountPlus,
        Product::JuniorSaverAccount,
        Product::StudentAccount,
        Product::DebitCard,
        Product::CreditCard,
        Product::GoldCreditCard,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Product::CurrentAccount => "Current Account",
            Product::CurrentAccountPlus => "Current Account Plus",
            Product::JuniorSaverAccount => "Junior Saver Account",
            Product::StudentAccount => "Student Account",
            Product::DebitCard => "Debit Card",
            Product::CreditCard => "Credit Card",
            Product::GoldCreditCard => "Gold Credit Card",
        }
    }

    /// Accounts are mutually exclusive: a valid product set holds exactly one.
    pub const fn is_account(self) -> bool {
        matches!(
            self,
            Product::CurrentAccount
                | Product::CurrentAccountPlus
                | Product::JuniorSaverAccount
                | Product::StudentAccount
        )
    }
}

/// A named, fixed product set with an eligibility tier.
///
/// Member lists are ordered; responses preserve this order so the same
/// request always renders the same payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BundleTemplate {
    JuniorSaver,
    Student,
    Classic,
    ClassicPlus,
    Gold,
}

impl BundleTemplate {
    pub const ALL: [BundleTemplate; 5] = [
        BundleTemplate::JuniorSaver,
        BundleTemplate::Student,
        BundleTemplate::Classic,
        BundleTemplate::ClassicPlus,
        BundleTemplate::Gold,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            BundleTemplate::JuniorSaver => "Junior Saver",
            BundleTemplate::Student => "Student",
            BundleTemplate::Classic => "Classic",
            BundleTemplate::ClassicPlus => "Classic Plus",
            BundleTemplate::Gold => "Gold",
        }
    }

    pub const fn products(self) -> &'static [Product] {
        match self {
            BundleTemplate::JuniorSaver => &[Product::JuniorSaverAccount],
            BundleTemplate::Student => {
                &[Product::StudentAccount, Product::DebitCard, Product::CreditCard]
            }
            BundleTemplate::Classic => &[Product::CurrentAccount, Product::DebitCard],
            BundleTemplate::ClassicPlus => {
                &[Product::CurrentAccount, Product::DebitCard, Product::CreditCard]
            }
            BundleTemplate::Gold => {
                &[Product::CurrentAccountPlus, Product::DebitCard, Product::GoldCreditCard]
            }
        }
    }

    /// Eligibility tier, 0..=3. Higher tiers admit more products.
    pub const fn tier(self) -> u8 {
        match self {
            BundleTemplate::JuniorSaver | BundleTemplate::Student => 0,
            BundleTemplate::Classic => 1,
            BundleTemplate::ClassicPlus => 2,
            BundleTemplate::Gold => 3,
        }
    }
}
