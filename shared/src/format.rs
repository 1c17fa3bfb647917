use crate::challenge::TokenInfo;
use crate::session::{OddsFormat, OddsPreference};

const STABLECOINS: [&str; 3] = ["USDC", "USDT", "DAI"];
const MAX_TOKEN_DECIMALS: usize = 4;
const STABLECOIN_DECIMALS: usize = 2;

/// Display formatting the challenge views depend on. Views only print what
/// this returns; swapping the implementation changes presentation app-wide.
pub trait ChallengeFormatter {
    fn crypto_amount(&self, amount: f64, token_name: &str) -> String;

    fn usd_amount(&self, amount: f64, token: &TokenInfo) -> String;

    fn odds(&self, odds: f64, is_group_challenge: bool, preference: &OddsPreference) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DefaultFormatter;

impl ChallengeFormatter for DefaultFormatter {
    fn crypto_amount(&self, amount: f64, token_name: &str) -> String {
        if !amount.is_finite() {
            return "0".to_string();
        }
        let decimals = if STABLECOINS.contains(&token_name.to_ascii_uppercase().as_str()) {
            STABLECOIN_DECIMALS
        } else {
            MAX_TOKEN_DECIMALS
        };
        format_number(amount, decimals, true)
    }

    fn usd_amount(&self, amount: f64, token: &TokenInfo) -> String {
        match token.usd_price {
            Some(price) if amount.is_finite() && price.is_finite() => {
                format!("${}", format_number(amount * price, 2, false))
            }
            _ => "N/A".to_string(),
        }
    }

    fn odds(&self, odds: f64, is_group_challenge: bool, preference: &OddsPreference) -> String {
        if odds == 0.0 || !odds.is_finite() {
            return "-".to_string();
        }
        // Group pools pay out a multiple of the stake, which only reads
        // naturally in decimal form.
        let format = if is_group_challenge {
            OddsFormat::Decimal
        } else {
            preference.effective_format()
        };

        match format {
            OddsFormat::American => {
                let body = format_number(odds, 2, true);
                if odds > 0.0 {
                    format!("+{}", body)
                } else {
                    body
                }
            }
            OddsFormat::Decimal => format!("{:.2}", american_to_decimal(odds)),
            OddsFormat::Fractional => american_to_fractional(odds),
        }
    }
}

fn american_to_decimal(odds: f64) -> f64 {
    if odds > 0.0 {
        1.0 + odds / 100.0
    } else {
        1.0 + 100.0 / -odds
    }
}

fn american_to_fractional(odds: f64) -> String {
    let (numerator, denominator) = if odds > 0.0 {
        (odds.round() as u64, 100)
    } else {
        (100, (-odds).round() as u64)
    };
    let divisor = gcd(numerator, denominator).max(1);
    format!("{}/{}", numerator / divisor, denominator / divisor)
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Fixed-point rendering with `,` thousands separators. With `trim` set,
/// trailing fractional zeros (and a bare `.`) are dropped.
pub fn format_number(value: f64, decimals: usize, trim: bool) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), ""),
    };
    let frac_part = if trim { frac_part.trim_end_matches('0') } else { frac_part };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.chars().all(|c| c == '0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pref(format: OddsFormat) -> OddsPreference {
        OddsPreference { odd_format: format, odds_format_available: true }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.5, 4, true), "1,234,567.5");
        assert_eq!(format_number(0.000049, 4, true), "0");
        assert_eq!(format_number(-0.00001, 4, true), "0");
        assert_eq!(format_number(-1500.0, 2, false), "-1,500.00");
        assert_eq!(format_number(999.0, 0, true), "999");
    }

    #[test]
    fn test_crypto_amount_decimals_by_token() {
        let f = DefaultFormatter;
        assert_eq!(f.crypto_amount(12.345678, "STMX"), "12.3457");
        assert_eq!(f.crypto_amount(12.345678, "usdc"), "12.35");
        assert_eq!(f.crypto_amount(f64::NAN, "STMX"), "0");
    }

    #[test]
    fn test_usd_amount() {
        let f = DefaultFormatter;
        let token = TokenInfo { usd_price: Some(2.0), ..Default::default() };
        assert_eq!(f.usd_amount(1000.25, &token), "$2,000.50");
        assert_eq!(f.usd_amount(10.0, &TokenInfo::default()), "N/A");
    }

    #[test]
    fn test_odds_formats() {
        let f = DefaultFormatter;
        assert_eq!(f.odds(150.0, false, &pref(OddsFormat::American)), "+150");
        assert_eq!(f.odds(-120.0, false, &pref(OddsFormat::American)), "-120");
        assert_eq!(f.odds(150.0, false, &pref(OddsFormat::Decimal)), "2.50");
        assert_eq!(f.odds(-200.0, false, &pref(OddsFormat::Decimal)), "1.50");
        assert_eq!(f.odds(150.0, false, &pref(OddsFormat::Fractional)), "3/2");
        assert_eq!(f.odds(-200.0, false, &pref(OddsFormat::Fractional)), "1/2");
    }

    #[test]
    fn test_group_odds_are_decimal() {
        let f = DefaultFormatter;
        assert_eq!(f.odds(150.0, true, &pref(OddsFormat::American)), "2.50");
    }

    #[test]
    fn test_zero_odds_placeholder() {
        assert_eq!(DefaultFormatter.odds(0.0, false, &OddsPreference::default()), "-");
    }
}
