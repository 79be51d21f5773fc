use ledger::{Currency, MoneyCents};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Formats an optional amount for a table cell. Absent and zero amounts
/// render as an empty string.
#[must_use]
pub fn amount_text(amount: Option<MoneyCents>, currency: Currency) -> String {
    amount
        .filter(|amount| *amount != MoneyCents::ZERO)
        .map(|amount| amount.format(currency))
        .unwrap_or_default()
}

/// Creates a styled span with bold modifier for emphasis (e.g., totals).
#[must_use]
pub fn styled_total(amount: MoneyCents, currency: Currency, color: Color) -> Span<'static> {
    Span::styled(
        amount.format(currency),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_amount_is_empty() {
        assert_eq!(amount_text(None, Currency::Brl), "");
        assert_eq!(
            amount_text(Some(MoneyCents::new(1_453_958)), Currency::Brl),
            "R$14539.58"
        );
    }

    #[test]
    fn zero_amount_cell_is_empty() {
        assert_eq!(amount_text(Some(MoneyCents::ZERO), Currency::Brl), "");
        assert_eq!(amount_text(Some(MoneyCents::new(1)), Currency::Brl), "R$0.01");
    }
}
