// Locale-aware currency formatting for card targets
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: String,
    pub grouping_separator: String,
    pub fraction_digits: usize,
    /// Inserted between the symbol and the amount
    pub symbol_spacing: String,
}

impl Default for CurrencyFormat {
    /// pt-BR / BRL
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ",".to_string(),
            grouping_separator: ".".to_string(),
            fraction_digits: 2,
            symbol_spacing: " ".to_string(),
        }
    }
}

impl CurrencyFormat {
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return format!("{}{}NaN", self.symbol, self.symbol_spacing);
        }

        // Negative values keep their sign even when they round to zero
        let sign = if value.is_sign_negative() { "-" } else { "" };
        if value.is_infinite() {
            return format!("{}{}{}∞", sign, self.symbol, self.symbol_spacing);
        }

        // Round first so carries propagate into the integer part
        let fixed = self.round_amount(value.abs());
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut amount = self.group_digits(integer);
        if let Some(fraction) = fraction {
            amount.push_str(&self.decimal_separator);
            amount.push_str(fraction);
        }

        format!("{}{}{}{}", sign, self.symbol, self.symbol_spacing, amount)
    }

    /// Rounds half away from zero on the shortest decimal form of `amount`,
    /// so 1.005 becomes 1.01 rather than following its binary expansion.
    fn round_amount(&self, amount: f64) -> String {
        let decimal = amount
            .to_string()
            .parse::<Decimal>()
            .ok()
            .or_else(|| Decimal::from_f64_retain(amount));

        match decimal {
            Some(decimal) => {
                let rounded = decimal.round_dp_with_strategy(
                    self.fraction_digits as u32,
                    RoundingStrategy::MidpointAwayFromZero,
                );
                format!("{:.*}", self.fraction_digits, rounded)
            }
            // Beyond Decimal's range
            None => format!("{:.*}", self.fraction_digits, amount),
        }
    }

    fn group_digits(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push_str(&self.grouping_separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(1234.5), "R$ 1.234,50");
        assert_eq!(fmt.format(67.8), "R$ 67,80");
        assert_eq!(fmt.format(0.0), "R$ 0,00");
        assert_eq!(fmt.format(999.999), "R$ 1.000,00");
        assert_eq!(fmt.format(1234567.891), "R$ 1.234.567,89");
        assert_eq!(fmt.format(100.0), "R$ 100,00");
    }

    #[test]
    fn test_format_rounds_ties_away_from_zero() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(0.125), "R$ 0,13");
        assert_eq!(fmt.format(2.625), "R$ 2,63");
        assert_eq!(fmt.format(2.375), "R$ 2,38");
        assert_eq!(fmt.format(1.005), "R$ 1,01");
        assert_eq!(fmt.format(-0.125), "-R$ 0,13");
    }

    #[test]
    fn test_format_negative_and_non_finite() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(-1.0), "-R$ 1,00");
        assert_eq!(fmt.format(-0.001), "-R$ 0,00");
        assert_eq!(fmt.format(f64::NAN), "R$ NaN");
        assert_eq!(fmt.format(f64::NEG_INFINITY), "-R$ ∞");
    }

    #[test]
    fn test_format_custom_locale() {
        let fmt = CurrencyFormat {
            symbol: "$".to_string(),
            decimal_separator: ".".to_string(),
            grouping_separator: ",".to_string(),
            fraction_digits: 0,
            symbol_spacing: String::new(),
        };
        assert_eq!(fmt.format(1234.4), "$1,234");
        assert_eq!(fmt.format(12.0), "$12");
    }
}
