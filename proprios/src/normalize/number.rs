//! Parsing et formatage des nombres (pt-BR)

/// Parse le préfixe numérique d'une valeur (`"12.5 m2"` → 12.5).
///
/// Retourne `None` si aucun préfixe numérique fini n'est trouvé.
#[inline]
pub fn parse_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    // fast-float ne gère pas le '+' initial
    let s = s.strip_prefix('+').unwrap_or(s);
    let (value, consumed) = fast_float::parse_partial::<f64, _>(s).ok()?;
    if consumed == 0 || !value.is_finite() {
        return None;
    }
    Some(value)
}

/// Parse une valeur strictement positive
#[inline]
pub fn parse_positive(s: &str) -> Option<f64> {
    parse_prefix(s).filter(|v| *v > 0.0)
}

/// Formate un nombre à la brésilienne : `.` pour les milliers, `,` pour
/// les décimales, 3 décimales au plus sans zéros finaux.
pub fn format_pt_br(value: f64) -> String {
    let formatted = format!("{:.3}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = sign(value, &formatted);
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// Formate un montant avec exactement 2 décimales (`2.500.000,00`)
pub fn format_currency_pt_br(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut out = sign(value, &formatted);
    out.push_str(&group_thousands(int_part));
    out.push(',');
    out.push_str(frac_part);
    out
}

/// `-` seulement si la valeur arrondie n'est pas nulle
fn sign(value: f64, rounded: &str) -> String {
    if value < 0.0 && rounded.chars().any(|c| matches!(c, '1'..='9')) {
        "-".to_string()
    } else {
        String::new()
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefix() {
        assert_eq!(parse_prefix("12.5"), Some(12.5));
        assert_eq!(parse_prefix("12.5 m2"), Some(12.5));
        assert_eq!(parse_prefix("-8.06"), Some(-8.06));
        assert_eq!(parse_prefix("+3"), Some(3.0));
        assert_eq!(parse_prefix("abc"), None);
        assert_eq!(parse_prefix(""), None);
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-1"), None);
        assert_eq!(parse_positive("150"), Some(150.0));
    }

    #[test]
    fn test_format_pt_br() {
        assert_eq!(format_pt_br(1234567.5), "1.234.567,5");
        assert_eq!(format_pt_br(500.0), "500");
        assert_eq!(format_pt_br(1000.0), "1.000");
        assert_eq!(format_pt_br(0.1234), "0,123");
        assert_eq!(format_pt_br(-2500.25), "-2.500,25");
    }

    #[test]
    fn test_format_currency_pt_br() {
        assert_eq!(format_currency_pt_br(2500000.0), "2.500.000,00");
        assert_eq!(format_currency_pt_br(99.9), "99,90");
    }
}
