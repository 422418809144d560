//! Numeric to CSS string conversions.

use std::f64::consts::PI;

use figo_parser::schema::Color;

/// Distance from a whole degree under which a converted angle is snapped to it.
const DEGREE_NOISE: f64 = 1e-4;

/// Format a colour as `rgba(r,g,b,a)`, channels scaled to 0..=255 and truncated.
pub fn rgba(color: &Color) -> String {
    format!(
        "rgba({},{},{},{})",
        (color.r * 255.0) as i64,
        (color.g * 255.0) as i64,
        (color.b * 255.0) as i64,
        color.a
    )
}

/// Format a colour as `hsl(h,s%,l%)`, each component rounded to an integer.
pub fn hsl(color: &Color) -> String {
    let (r, g, b) = (color.r, color.g, color.b);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;
    let mut hue = 0.0;
    let mut saturation = 0.0;

    if max != min {
        let delta = max - min;
        saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        hue = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        hue /= 6.0;
    }

    format!(
        "hsl({},{}%,{}%)",
        format_number((hue * 360.0).round()),
        format_number((saturation * 100.0).round()),
        format_number((lightness * 100.0).round())
    )
}

/// Convert radians to whole degrees by truncation.
///
/// Results within floating point noise of a whole degree snap to it, so a
/// rotation like `-5.5e-17` yields `0` and `1.5707963` yields `90`.
pub fn to_degrees(angle: f64) -> i64 {
    let degrees = angle / (PI / 180.0);
    let nearest = degrees.round();
    if (degrees - nearest).abs() < DEGREE_NOISE {
        nearest as i64
    } else {
        degrees as i64
    }
}

pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let pow = 10f64.powi(decimals);
    (value * pow).round() / pow
}

/// Truncate to a whole pixel length: `12.7` → `12px`.
pub fn px(value: f64) -> String {
    format!("{}px", value as i64)
}

/// Format a number, removing `.0` for integers.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Colours
    // =========================================================================

    #[test]
    fn test_rgba_black() {
        assert_eq!(rgba(&Color::new(0.0, 0.0, 0.0, 1.0)), "rgba(0,0,0,1)");
    }

    #[test]
    fn test_rgba_truncates_channels() {
        assert_eq!(rgba(&Color::new(0.1, 0.2, 0.3, 0.5)), "rgba(25,51,76,0.5)");
    }

    #[test]
    fn test_rgba_white() {
        assert_eq!(rgba(&Color::new(1.0, 1.0, 1.0, 1.0)), "rgba(255,255,255,1)");
    }

    #[test]
    fn test_hsl_black() {
        assert_eq!(hsl(&Color::new(0.0, 0.0, 0.0, 1.0)), "hsl(0,0%,0%)");
    }

    #[test]
    fn test_hsl_blue_grey() {
        assert_eq!(hsl(&Color::new(0.1, 0.2, 0.3, 0.5)), "hsl(210,50%,20%)");
    }

    #[test]
    fn test_hsl_pure_red() {
        assert_eq!(hsl(&Color::new(1.0, 0.0, 0.0, 1.0)), "hsl(0,100%,50%)");
    }

    #[test]
    fn test_hsl_light_green() {
        assert_eq!(hsl(&Color::new(0.5, 1.0, 0.5, 1.0)), "hsl(120,100%,75%)");
    }

    #[test]
    fn test_transparency() {
        assert!(Color::new(0.0, 0.0, 0.0, 0.0).is_transparent());
        assert!(!Color::new(0.0, 0.0, 0.0, 0.1).is_transparent());
    }

    // =========================================================================
    // Degrees
    // =========================================================================

    #[test]
    fn test_degrees_quarter_turns() {
        assert_eq!(to_degrees(1.5707964), 90);
        assert_eq!(to_degrees(-1.5707964), -90);
        assert_eq!(to_degrees(1.5707963), 90);
    }

    #[test]
    fn test_degrees_eighth_turns() {
        assert_eq!(to_degrees(0.7853982), 45);
        assert_eq!(to_degrees(-0.7853982), -45);
    }

    #[test]
    fn test_degrees_noise_is_zero() {
        assert_eq!(to_degrees(-5.551115e-17), 0);
        assert_eq!(to_degrees(5.551115e-17), 0);
    }

    #[test]
    fn test_degrees_truncates_fractions() {
        // 0.5 rad ≈ 28.65°
        assert_eq!(to_degrees(0.5), 28);
        assert_eq!(to_degrees(-0.5), -28);
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    #[test]
    fn test_round_to_decimals() {
        assert_eq!(round_to_decimals(1.23456, 2), 1.23);
        assert_eq!(round_to_decimals(1.235, 1), 1.2);
        assert_eq!(round_to_decimals(16.0, 2), 16.0);
    }

    #[test]
    fn test_px_truncates() {
        assert_eq!(px(12.7), "12px");
        assert_eq!(px(0.0), "0px");
        assert_eq!(px(-3.9), "-3px");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(0.5), "0.5");
    }
}
