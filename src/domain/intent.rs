use super::card::CreditCard;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount in the currency's minor unit (cents, sen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const fn from_minor(units: u64) -> Self {
        Self(units)
    }

    /// Returns the raw amount in minor units.
    pub fn minor_units(&self) -> u64 {
        self.0
    }

    /// Major-unit value with two decimal places, `150` becomes `1.50`.
    pub fn to_major(&self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), 2)
    }
}

impl From<u64> for Money {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

#[derive(Debug, Default, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct Address {
    pub company: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct ShippingAddress {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
}

/// Everything about a payment besides the amount and the card.
///
/// `address` is the generic address; it is only used for billing when no
/// `billing_address` is given.
#[derive(Debug, Default, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct PaymentOptions {
    pub currency: Option<String>,
    pub external_id: Option<String>,
    pub description: Option<String>,
    pub callback_virtual_account_id: Option<String>,
    /// Merchant site URL.
    pub merchant: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub billing_address: Option<Address>,
    pub address: Option<Address>,
    pub shipping_address: Option<ShippingAddress>,
}

impl PaymentOptions {
    pub fn billing_address(&self) -> Option<&Address> {
        self.billing_address.as_ref().or(self.address.as_ref())
    }
}

/// A complete charge request as read from an intent document.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentIntent {
    pub amount: Money,
    pub card: CreditCard,
    #[serde(flatten)]
    pub options: PaymentOptions,
}
