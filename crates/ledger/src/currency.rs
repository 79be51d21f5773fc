use serde::Deserialize;

use crate::LedgerError;

/// Currency used to label the amounts shown in the ledger table.
///
/// Every supported currency has two minor units, so the value of a
/// [`MoneyCents`](crate::MoneyCents) never depends on the currency; only the
/// symbol printed in front of it does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Brl,
    Eur,
    Usd,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Brl => "BRL",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    /// Symbol printed before the amount (`R$14539.58`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Brl => "R$",
            Currency::Eur => "€",
            Currency::Usd => "$",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "BRL" => Ok(Currency::Brl),
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            other => Err(LedgerError::UnsupportedCurrency(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Currency::try_from("brl").unwrap(), Currency::Brl);
        assert_eq!(Currency::try_from(" Usd ").unwrap(), Currency::Usd);
        assert_eq!(
            Currency::try_from("jpy"),
            Err(LedgerError::UnsupportedCurrency("JPY".to_string()))
        );
    }
}
