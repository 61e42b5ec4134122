//! Request construction.
//!
//! Each function appends one group of fields to a [`RequestPayload`]. None of
//! them can fail: missing optional data simply leaves its fields out.

use crate::domain::card::CreditCard;
use crate::domain::intent::{Money, PaymentOptions};
use crate::domain::payload::RequestPayload;

/// Invoice fields: merchant metadata, amount and currency.
pub fn add_invoice(
    post: &mut RequestPayload,
    money: Money,
    options: &PaymentOptions,
    default_currency: &str,
) {
    post.insert_opt("external_id", options.external_id.as_deref());
    post.insert_opt("payer_email", options.email.as_deref());
    post.insert_opt("description", options.description.as_deref());
    post.insert("should_send_email", false);
    post.insert_opt(
        "callback_virtual_account_id",
        options.callback_virtual_account_id.as_deref(),
    );
    post.insert_opt("merchant_site_url", options.merchant.as_deref());
    post.insert("amount", money.to_major().to_string());
    post.insert(
        "currency",
        options.currency.as_deref().unwrap_or(default_currency),
    );
}

/// Card fields: number, `cvv` when the card has one, and the `MM/YY` expiry.
pub fn add_payment(post: &mut RequestPayload, card: &CreditCard) {
    post.insert("cc", card.number.as_str());
    post.insert_opt("cvv", card.verification_value());
    post.insert("expire", card.expiry());
}

/// Billing (or generic) and shipping address fields.
pub fn add_address(post: &mut RequestPayload, options: &PaymentOptions) {
    if let Some(billing) = options.billing_address() {
        post.insert_opt("company", billing.company.as_deref());
        post.insert_opt("address1", billing.address1.as_deref());
        post.insert_opt("address2", billing.address2.as_deref());
        post.insert_opt("city", billing.city.as_deref());
        post.insert_opt("state", billing.state.as_deref());
        post.insert_opt("zip", billing.zip.as_deref());
        post.insert_opt("country", billing.country.as_deref());
        post.insert_opt("phone", billing.phone.as_deref());
    }

    if let Some(shipping) = &options.shipping_address {
        post.insert_opt("shipping_firstname", shipping.first_name.as_deref());
        post.insert_opt("shipping_lastname", shipping.last_name.as_deref());
        post.insert_opt("shipping_company", shipping.company.as_deref());
        post.insert_opt("shipping_address1", shipping.address1.as_deref());
        post.insert_opt("shipping_address2", shipping.address2.as_deref());
        post.insert_opt("shipping_city", shipping.city.as_deref());
        post.insert_opt("shipping_state", shipping.state.as_deref());
        post.insert_opt("shipping_zip", shipping.zip.as_deref());
        post.insert_opt("shipping_country", shipping.country.as_deref());
        post.insert_opt("shipping_email", shipping.email.as_deref());
    }
}

/// Customer identity fields, copied as given.
pub fn add_customer_data(post: &mut RequestPayload, options: &PaymentOptions) {
    post.insert_opt("first_name", options.first_name.as_deref());
    post.insert_opt("last_name", options.last_name.as_deref());
    post.insert_opt("email", options.email.as_deref());
}

/// Full payload for a purchase or an authorization.
pub fn build_charge(
    money: Money,
    card: &CreditCard,
    options: &PaymentOptions,
    default_currency: &str,
) -> RequestPayload {
    let mut post = RequestPayload::new();
    add_invoice(&mut post, money, options, default_currency);
    add_payment(&mut post, card);
    add_address(&mut post, options);
    add_customer_data(&mut post, options);
    post
}

/// Payload for capture, refund and void: the authorization being referenced.
pub fn build_reference(authorization: &str) -> RequestPayload {
    let mut post = RequestPayload::new();
    post.insert("authorization", authorization);
    post
}
