use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use std::sync::OnceLock;

fn price_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // 可選負號、可選貨幣符號（任何非數字非符號字元）、數值
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?P<minus>-)?\s*(?P<symbol>[^\d\s.+\-]+)?\s*(?P<sign>[+\-])?(?P<digits>\d+(?:\.\d*)?|\.\d+)$",
        )
        .expect("price pattern is valid")
    })
}

/// 解析 "$3.99"、"3.99"、".99"、"-$1.00"、"€ 2" 之類的價格字串
///
/// 只容許前置貨幣符號；無法解析時回傳 None，由呼叫端決定錯誤內容。
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let caps = price_pattern().captures(raw.trim())?;

    // ".99" 與 "3." 補成完整小數再交給 Decimal
    let digits = &caps["digits"];
    let mut normalized = String::with_capacity(digits.len() + 2);
    if digits.starts_with('.') {
        normalized.push('0');
    }
    normalized.push_str(digits);
    if normalized.ends_with('.') {
        normalized.push('0');
    }
    let amount = Decimal::from_str(&normalized).ok()?;

    let negative = match (caps.name("minus"), caps.name("sign").map(|m| m.as_str())) {
        (None, None | Some("+")) => false,
        (None, Some(_)) | (Some(_), None) => true,
        // "--1"、"-$+1" 之類的重複符號不接受
        (Some(_), Some(_)) => return None,
    };

    Some(if negative { -amount } else { amount })
}

pub fn format_money(symbol: &str, amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", symbol, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_price_with_and_without_symbol() {
        assert_eq!(parse_price("$3.99"), Some(dec("3.99")));
        assert_eq!(parse_price("  3.99 "), Some(dec("3.99")));
        assert_eq!(parse_price("$ 5.5"), Some(dec("5.5")));
        assert_eq!(parse_price("€2"), Some(dec("2")));
        assert_eq!(parse_price(".99"), Some(dec("0.99")));
        assert_eq!(parse_price("$.99"), Some(dec("0.99")));
        assert_eq!(parse_price("+1.50"), Some(dec("1.50")));
        assert_eq!(parse_price("$+1.50"), Some(dec("1.50")));
        assert_eq!(parse_price("3."), Some(dec("3")));
    }

    #[test]
    fn test_parse_negative_price() {
        assert_eq!(parse_price("-$1.00"), Some(dec("-1.00")));
        assert_eq!(parse_price("$-1.00"), Some(dec("-1.00")));
        assert_eq!(parse_price("-.5"), Some(dec("-0.5")));
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert_eq!(parse_price("free"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("$"), None);
        assert_eq!(parse_price("3.99$"), None);
        assert_eq!(parse_price("1.2.3"), None);
        assert_eq!(parse_price("--1"), None);
        assert_eq!(parse_price("-$+1"), None);
        assert_eq!(parse_price("."), None);
    }

    #[test]
    fn test_format_money_two_places() {
        assert_eq!(format_money("$", dec("5.5")), "$5.50");
        assert_eq!(format_money("$", dec("4.95")), "$4.95");
        assert_eq!(format_money("$", dec("0.125")), "$0.13");
        assert_eq!(format_money("$", Decimal::ZERO), "$0.00");
    }
}
