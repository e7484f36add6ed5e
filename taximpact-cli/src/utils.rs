use rust_decimal::Decimal;
use taximpact_core::calculations::common::round_half_up;
use thiserror::Error;

/// Error returned when an answer cannot be read as an amount.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("no amount entered")]
    Empty,

    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a typed amount or rate into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"80,000"`) and scientific
/// notation (e.g. `"8e4"`). Empty or whitespace-only input is
/// [`ParseAmountError::Empty`] so the caller can decide whether a default applies.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let parsed = if normalized.contains(['e', 'E']) {
        Decimal::from_scientific(&normalized)
    } else {
        normalized.parse()
    };

    parsed.map_err(|e| {
        tracing::warn!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid {
            input: s.trim().to_string(),
            source: e,
        }
    })
}

/// Formats an amount as dollars and cents with thousands separators, e.g. `$80,000.00`.
pub fn money(amount: Decimal) -> String {
    let cents = format!("{:.2}", round_half_up(amount));
    let separated = separated_float!(cents);

    match separated.strip_prefix('-') {
        Some(magnitude) => format!("-${magnitude}"),
        None => format!("${separated}"),
    }
}
