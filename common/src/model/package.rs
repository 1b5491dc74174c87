//! Subscription packages offered on the landing page.

use num_format::{Locale, ToFormattedString};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    pub key: &'static str,
    pub name: &'static str,
    pub price_cents: u32,
    pub features: &'static [&'static str],
}

pub static PACKAGES: [Package; 3] = [
    Package {
        key: "basic",
        name: "Basic",
        price_cents: 999,
        features: &["Feature 1", "Feature 2", "Email Support"],
    },
    Package {
        key: "standard",
        name: "Standard",
        price_cents: 1999,
        features: &["All Basic Features", "Feature 3", "Feature 4", "Priority Support"],
    },
    Package {
        key: "premium",
        name: "Premium",
        price_cents: 2999,
        features: &["All Standard Features", "Feature 5", "Feature 6", "24/7 Support"],
    },
];

impl Package {
    /// Looks a package up by key; unknown or missing keys fall back to `basic`,
    /// matching what the server does with the `package` query parameter.
    pub fn lookup(key: Option<&str>) -> &'static Package {
        key.and_then(|key| PACKAGES.iter().find(|p| p.key == key))
            .unwrap_or(&PACKAGES[0])
    }

    pub fn price(&self) -> String {
        format_price(self.price_cents)
    }
}

/// Formats an amount in cents as US dollars, e.g. `123456` → `$1,234.56`.
pub fn format_price(cents: u32) -> String {
    let dollars = (cents / 100).to_formatted_string(&Locale::en);
    format!("${}.{:02}", dollars, cents % 100)
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
