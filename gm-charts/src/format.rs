//! Number formatting for bar labels, mirroring d3-format's `.2s` and `.2f`.

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Two significant digits with an SI prefix: `556263527` → `560M`.
pub fn si_2(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0.0".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    // Round to two significant digits first so 999 becomes 1.0k, not 1000.
    let exp = abs.log10().floor() as i32;
    let step = 10f64.powi(exp - 1);
    let rounded = (abs / step).round() * step;
    let exp = if rounded >= 10f64.powi(exp + 1) { exp + 1 } else { exp };

    let group = exp.div_euclid(3).clamp(-8, 8);
    let scaled = rounded / 10f64.powi(group * 3);
    let decimals = (1 - (exp - group * 3)).max(0) as usize;
    let prefix = SI_PREFIXES[(group + 8) as usize];
    format!("{sign}{scaled:.decimals$}{prefix}")
}

/// Fixed two decimals: `779.4453145` → `779.45`.
pub fn fixed_2(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn si_2_formats_populations() {
        assert_eq!(si_2(556_263_527.0), "560M");
        assert_eq!(si_2(372_000_000.0), "370M");
        assert_eq!(si_2(86_459_025.0), "86M");
        assert_eq!(si_2(8_425_333.0), "8.4M");
        assert_eq!(si_2(1_318_683_096.0), "1.3G");
    }

    #[test]
    fn si_2_rounds_across_prefix_boundaries() {
        assert_eq!(si_2(999.0), "1.0k");
        assert_eq!(si_2(42.0), "42");
        assert_eq!(si_2(5.0), "5.0");
    }

    #[test]
    fn si_2_handles_zero_and_negatives() {
        assert_eq!(si_2(0.0), "0.0");
        assert_eq!(si_2(-2500.0), "-2.5k");
    }

    #[test]
    fn fixed_2_rounds_to_cents() {
        assert_eq!(fixed_2(779.4453145), "779.45");
        assert_eq!(fixed_2(28.801), "28.80");
    }
}
