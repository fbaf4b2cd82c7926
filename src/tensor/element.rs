use super::DType;

/// One logical element read out of a flat buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    Real(f64),
    Complex(f64, f64),
}

impl Element {
    /// Reads the element starting at buffer slot `offset`.
    ///
    /// Complex dtypes consume `data[offset]` and `data[offset + 1]`.
    pub(crate) fn read(data: &[f64], offset: usize, dtype: DType) -> Self {
        if dtype.is_complex() {
            Element::Complex(data[offset], data[offset + 1])
        } else {
            Element::Real(data[offset])
        }
    }

    /// Renders the element without padding.
    pub fn render(&self, precision: usize) -> String {
        match *self {
            Element::Real(value) => format_scalar(value, precision),
            Element::Complex(re, im) => format!(
                "{} + {}j",
                format_scalar(re, precision),
                format_scalar(im, precision)
            ),
        }
    }

    /// Renders the element and right-pads it with spaces to `width` chars.
    pub fn render_padded(&self, precision: usize, width: usize) -> String {
        pad(self.render(precision), width)
    }
}

/// Right-pads `s` with spaces up to `width` chars. Never truncates.
pub(crate) fn pad(s: String, width: usize) -> String {
    if s.chars().count() >= width {
        s
    } else {
        format!("{s:<width$}")
    }
}

/// Rounds `value` to `precision` significant digits and prints it as a plain
/// decimal with no redundant trailing zeros.
///
/// `1.0` prints as `1`, `0.1` as `0.1`, `123456789.0` as `123456800`.
/// Output is always positional, never exponent notation, so very large or
/// very small magnitudes print as long digit runs (`1e20` is 21 digits).
pub fn format_scalar(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Scientific formatting does the significant-digit rounding for us.
    let precision = precision.max(1);
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    let negative = mantissa.starts_with('-');
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let point = exponent + 1;

    let mut out = if point <= 0 {
        format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
    } else if point as usize >= digits.len() {
        format!("{}{}", digits, "0".repeat(point as usize - digits.len()))
    } else {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{int_part}.{frac_part}")
    };

    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }

    if negative {
        out.insert(0, '-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: usize = 7;

    #[test]
    fn test_integral_values_drop_the_fraction() {
        assert_eq!(format_scalar(1.0, P), "1");
        assert_eq!(format_scalar(-4.0, P), "-4");
        assert_eq!(format_scalar(0.0, P), "0");
        assert_eq!(format_scalar(1000.0, P), "1000");
        assert_eq!(format_scalar(24.0, P), "24");
    }

    #[test]
    fn test_rounds_to_significant_digits() {
        assert_eq!(format_scalar(std::f64::consts::PI, P), "3.141593");
        assert_eq!(format_scalar(123456789.0, P), "123456800");
        assert_eq!(format_scalar(0.000123456789, P), "0.0001234568");
        assert_eq!(format_scalar(9.99999999, P), "10");
        assert_eq!(format_scalar(-2.5, P), "-2.5");
        assert_eq!(format_scalar(0.1, P), "0.1");
    }

    #[test]
    fn test_precision_one() {
        assert_eq!(format_scalar(1.0, 1), "1");
        assert_eq!(format_scalar(1.6, 1), "2");
        assert_eq!(format_scalar(0.24, 1), "0.2");
    }

    #[test]
    fn test_extreme_magnitudes_stay_positional() {
        assert_eq!(format_scalar(1e20, P), "100000000000000000000");
        assert_eq!(format_scalar(-1.5e10, P), "-15000000000");

        let tiny = format_scalar(1e-300, P);
        assert_eq!(tiny.len(), 302);
        assert!(tiny.starts_with("0.000"));
        assert!(tiny.ends_with('1'));
        assert!(!tiny.contains('e'));
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_scalar(f64::NAN, P), "nan");
        assert_eq!(format_scalar(f64::INFINITY, P), "inf");
        assert_eq!(format_scalar(f64::NEG_INFINITY, P), "-inf");
    }

    #[test]
    fn test_complex_keeps_imaginary_sign() {
        assert_eq!(Element::Complex(3.0, -4.0).render(P), "3 + -4j");
        assert_eq!(Element::Complex(1.5, 2.0).render(P), "1.5 + 2j");
    }

    #[test]
    fn test_padding() {
        assert_eq!(Element::Real(1.0).render_padded(P, 4), "1   ");
        assert_eq!(Element::Real(-12.5).render_padded(P, 2), "-12.5");
        assert_eq!(Element::Real(7.0).render_padded(P, 0), "7");
    }

    #[test]
    fn test_read_pairs_for_complex() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(Element::read(&data, 2, DType::Complex64), Element::Complex(3.0, 4.0));
        assert_eq!(Element::read(&data, 2, DType::Float32), Element::Real(3.0));
    }
}
