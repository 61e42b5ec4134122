#![allow(dead_code)]

use xendit_gateway::config::{Credentials, GatewayConfig};
use xendit_gateway::domain::card::CreditCard;
use xendit_gateway::domain::intent::{Address, PaymentOptions, ShippingAddress};
use xendit_gateway::infrastructure::in_memory::ScriptedTransport;
use xendit_gateway::XenditGateway;

pub fn credentials() -> Credentials {
    Credentials::new("xnd_public_test", "xnd_secret_test", "validation_token").unwrap()
}

pub fn test_config() -> GatewayConfig {
    GatewayConfig::new(credentials()).with_test(true)
}

pub fn scripted_gateway(transport: &ScriptedTransport) -> XenditGateway<ScriptedTransport> {
    XenditGateway::new(test_config(), transport.clone())
}

pub fn card() -> CreditCard {
    CreditCard::new("4000000000000002", 9, 2030).with_verification_value("123")
}

pub fn card_without_cvv() -> CreditCard {
    CreditCard::new("4000000000000002", 9, 2030)
}

pub fn billing_address() -> Address {
    Address {
        company: Some("Widgets Inc".to_string()),
        address1: Some("Jl. Sudirman 1".to_string()),
        address2: None,
        city: Some("Jakarta".to_string()),
        state: Some("DKI".to_string()),
        zip: Some("10220".to_string()),
        country: Some("ID".to_string()),
        phone: Some("+62215551234".to_string()),
    }
}

pub fn shipping_address() -> ShippingAddress {
    ShippingAddress {
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        company: None,
        address1: Some("Jl. Thamrin 9".to_string()),
        address2: None,
        city: Some("Jakarta".to_string()),
        state: Some("DKI".to_string()),
        zip: Some("10350".to_string()),
        country: Some("ID".to_string()),
        email: Some("jane@example.com".to_string()),
    }
}

pub fn full_options() -> PaymentOptions {
    PaymentOptions {
        external_id: Some("order-42".to_string()),
        description: Some("Two widgets".to_string()),
        merchant: Some("https://shop.example.com".to_string()),
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        email: Some("jane@example.com".to_string()),
        billing_address: Some(billing_address()),
        shipping_address: Some(shipping_address()),
        ..Default::default()
    }
}

pub const ADDRESS_KEYS: [&str; 18] = [
    "company",
    "address1",
    "address2",
    "city",
    "state",
    "zip",
    "country",
    "phone",
    "shipping_firstname",
    "shipping_lastname",
    "shipping_company",
    "shipping_address1",
    "shipping_address2",
    "shipping_city",
    "shipping_state",
    "shipping_zip",
    "shipping_country",
    "shipping_email",
];
