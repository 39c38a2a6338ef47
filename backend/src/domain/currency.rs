//! Display rule for money: rupee sign, Indian digit grouping, two decimals.

pub const CURRENCY_SYMBOL: &str = "₹";

/// Format an amount as `₹1,23,456.78`
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, group_indian(whole), fraction)
}

/// Discount lines are always shown as a deduction
pub fn format_deduction(amount: f64) -> String {
    format!("-{}", format_currency(amount))
}

/// Last three digits form one group, everything before is grouped in pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(5.5), "₹5.50");
        assert_eq!(format_currency(999.999), "₹1,000.00");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_currency(1800.0), "₹1,800.00");
        assert_eq!(format_currency(250000.0), "₹2,50,000.00");
        assert_eq!(format_currency(12345678.9), "₹1,23,45,678.90");
    }

    #[test]
    fn test_negative_and_deduction() {
        assert_eq!(format_currency(-200.0), "-₹200.00");
        assert_eq!(format_currency(-0.001), "₹0.00");
        assert_eq!(format_deduction(200.0), "-₹200.00");
        assert_eq!(format_deduction(0.0), "-₹0.00");
    }
}
