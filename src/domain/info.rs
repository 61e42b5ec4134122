/// Card brands the processor accepts.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardBrand {
    Visa,
    Master,
    AmericanExpress,
    Discover,
}

/// Static facts about the processor.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct GatewayInfo {
    pub display_name: &'static str,
    pub homepage_url: &'static str,
    pub supported_countries: &'static [&'static str],
    pub supported_card_brands: &'static [CardBrand],
    pub default_currency: &'static str,
}

pub const XENDIT: GatewayInfo = GatewayInfo {
    display_name: "Xendit",
    homepage_url: "https://api.xendit.co/",
    supported_countries: &["US", "ID"],
    supported_card_brands: &[
        CardBrand::Visa,
        CardBrand::Master,
        CardBrand::AmericanExpress,
        CardBrand::Discover,
    ],
    default_currency: crate::config::DEFAULT_CURRENCY,
};

impl GatewayInfo {
    pub fn supports_country(&self, code: &str) -> bool {
        self.supported_countries
            .iter()
            .any(|c| c.eq_ignore_ascii_case(code))
    }

    pub fn supports_brand(&self, brand: CardBrand) -> bool {
        self.supported_card_brands.contains(&brand)
    }
}
