//! Decoders for the compact field notations used by the army builder feed.

use anyhow::{ensure, Context, Result};

/// Separator used by multi-valued fields (id lists, range tables)
const LIST_DELIMITER: char = '|';

/// Separator used by the order-count field
const ORDER_DELIMITER: char = '%';

/// Parse a delimiter-separated list of numeric ids.
///
/// A value with no digits at all (`""`, `"-"`) is an empty list, not an
/// error; a value that contains digits but fails integer parsing is a
/// structural error.
pub fn parse_id_list(raw: &str) -> Result<Vec<i64>> {
    if !raw.chars().any(|c| c.is_ascii_digit()) {
        return Ok(Vec::new());
    }

    raw.split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .with_context(|| format!("invalid id {:?} in list {:?}", part, raw))
        })
        .collect()
}

/// Parse the display-name list that runs parallel to an id list
pub fn parse_name_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    raw.split(LIST_DELIMITER)
        .map(|part| part.trim().to_string())
        .collect()
}

/// Decode the compact burst notation into `(ranged, melee)` counts.
///
/// Three shapes exist in the feed:
/// - a pure number (`"3"`) is a single-mode burst, assigned to the melee
///   slot when the weapon is melee and to the ranged slot otherwise;
/// - a parenthesized two-digit form (`"1(2)"`, `"(1)(2)"`) carries both
///   bursts, ranged first in encounter order;
/// - anything else (`"-"`) means neither burst applies.
pub fn decode_burst(raw: &str, is_melee: bool) -> (Option<i64>, Option<i64>) {
    let trimmed = raw.trim();

    if let Ok(n) = trimmed.parse::<i64>() {
        return if is_melee { (None, Some(n)) } else { (Some(n), None) };
    }

    if trimmed.contains('(') {
        let digits: Vec<i64> = trimmed
            .chars()
            .filter(char::is_ascii_digit)
            .map(|c| i64::from(c as u8 - b'0'))
            .collect();
        if let [ranged, melee] = digits[..] {
            return (Some(ranged), Some(melee));
        }
    }

    (None, None)
}

/// Normalize a range-band field.
///
/// A band is only meaningful when it carries the multi-silhouette delimiter;
/// valid bands are stored comma-separated, everything else is absent.
pub fn normalize_range(raw: &str) -> Option<String> {
    if raw.contains(LIST_DELIMITER) {
        Some(raw.replace(LIST_DELIMITER, ","))
    } else {
        None
    }
}

/// Order counts per activation category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orders {
    pub regular: Option<i64>,
    pub irregular: Option<i64>,
    pub impetuous: Option<i64>,
}

/// Parse the `%`-delimited order-count field.
///
/// The feed cannot distinguish "zero orders" from "not applicable", so a
/// zero in any slot normalizes to absent. A value with no digits decodes to
/// all-absent; a digit-bearing value must have exactly three slots.
pub fn parse_orders(raw: &str) -> Result<Orders> {
    if !raw.chars().any(|c| c.is_ascii_digit()) {
        return Ok(Orders {
            regular: None,
            irregular: None,
            impetuous: None,
        });
    }

    let parts: Vec<&str> = raw.split(ORDER_DELIMITER).collect();
    ensure!(
        parts.len() == 3,
        "expected three order counts in {:?}, got {}",
        raw,
        parts.len()
    );

    let mut slots = [None; 3];
    for (slot, part) in slots.iter_mut().zip(&parts) {
        let count: i64 = part
            .trim()
            .parse()
            .with_context(|| format!("invalid order count {:?} in {:?}", part, raw))?;
        if count != 0 {
            *slot = Some(count);
        }
    }

    Ok(Orders {
        regular: slots[0],
        irregular: slots[1],
        impetuous: slots[2],
    })
}

/// Parse the capacity (CAP) field; punctuation-only values default to zero.
pub fn parse_capacity(raw: &str) -> Result<f64> {
    if !raw.chars().any(|c| c.is_ascii_digit()) {
        return Ok(0.0);
    }

    raw.trim()
        .parse::<f64>()
        .with_context(|| format!("invalid capacity value {:?}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_list() {
        assert_eq!(parse_id_list("12|45|67").unwrap(), vec![12, 45, 67]);
        assert_eq!(parse_id_list("3").unwrap(), vec![3]);
        assert_eq!(parse_id_list("").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_id_list("-").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_parse_id_list_malformed() {
        assert!(parse_id_list("12|abc").is_err());
    }

    #[test]
    fn test_parse_name_list() {
        assert_eq!(
            parse_name_list("Suppressive Fire|Anti-materiel"),
            vec!["Suppressive Fire".to_string(), "Anti-materiel".to_string()]
        );
        assert!(parse_name_list("").is_empty());
    }

    #[test]
    fn test_decode_burst_pure_numeric() {
        assert_eq!(decode_burst("3", false), (Some(3), None));
        assert_eq!(decode_burst("3", true), (None, Some(3)));
    }

    #[test]
    fn test_decode_burst_dual_mode() {
        assert_eq!(decode_burst("(1)(2)", false), (Some(1), Some(2)));
        assert_eq!(decode_burst("1(2)", true), (Some(1), Some(2)));
    }

    #[test]
    fn test_decode_burst_absent() {
        assert_eq!(decode_burst("-", false), (None, None));
        assert_eq!(decode_burst("-", true), (None, None));
        assert_eq!(decode_burst("", false), (None, None));
    }

    #[test]
    fn test_normalize_range() {
        assert_eq!(
            normalize_range("0|20|+3").as_deref(),
            Some("0,20,+3")
        );
        assert_eq!(normalize_range("-"), None);
        assert_eq!(normalize_range("20"), None);
    }

    #[test]
    fn test_parse_orders() {
        let orders = parse_orders("2%1%0").unwrap();
        assert_eq!(orders.regular, Some(2));
        assert_eq!(orders.irregular, Some(1));
        assert_eq!(orders.impetuous, None);
    }

    #[test]
    fn test_parse_orders_all_zero() {
        let orders = parse_orders("0%0%0").unwrap();
        assert_eq!(orders.regular, None);
        assert_eq!(orders.irregular, None);
        assert_eq!(orders.impetuous, None);
    }

    #[test]
    fn test_parse_orders_no_digits() {
        let orders = parse_orders("-").unwrap();
        assert_eq!(orders.regular, None);
        assert_eq!(orders.irregular, None);
        assert_eq!(orders.impetuous, None);
    }

    #[test]
    fn test_parse_orders_malformed() {
        assert!(parse_orders("2%1").is_err());
        assert!(parse_orders("2%x%0").is_err());
    }

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity("-").unwrap(), 0.0);
        assert_eq!(parse_capacity("2.5").unwrap(), 2.5);
        assert_eq!(parse_capacity("1").unwrap(), 1.0);
    }
}
