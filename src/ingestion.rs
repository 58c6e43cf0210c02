use crate::schema::{clamp_non_negative, Assumptions};
use log::debug;
use serde::{Deserialize, Serialize};

/// Assumptions exactly as typed into an input form, before any parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAssumptions {
    pub average_order_value: String,
    pub ecommerce_subscription_revenue: String,
    pub wholesale_subscription_revenue: String,
    pub end_user_monthly_sales_orders: String,
    pub annual_churn_rate: String,
}

impl RawAssumptions {
    /// Converts every field with [`coerce_amount`]. Never fails.
    pub fn coerce(&self) -> Assumptions {
        let assumptions = Assumptions {
            average_order_value: coerce_amount(&self.average_order_value),
            ecommerce_subscription_revenue: coerce_amount(&self.ecommerce_subscription_revenue),
            wholesale_subscription_revenue: coerce_amount(&self.wholesale_subscription_revenue),
            end_user_monthly_sales_orders: coerce_amount(&self.end_user_monthly_sales_orders),
            annual_churn_rate: coerce_amount(&self.annual_churn_rate),
        };

        debug!("Coerced raw assumptions {:?} into {:?}", self, assumptions);

        assumptions
    }
}

/// Parses user input into a non-negative amount.
///
/// Reads the longest leading decimal number (sign, digits, fraction,
/// exponent) after trimming whitespace, so `"12abc"` reads as 12 and
/// `".5"` as 0.5. Anything that yields no number, a non-finite number, or
/// a negative number becomes 0.
pub fn coerce_amount(input: &str) -> f64 {
    let prefix = leading_number(input.trim());
    prefix
        .parse::<f64>()
        .map(clamp_non_negative)
        .unwrap_or(0.0)
}

fn leading_number(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}
