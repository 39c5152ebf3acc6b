// src/utils/format.rs

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
// 365.25 days
const YEAR: f64 = 31_557_600.0;

const YEAR_UNITS: [&str; 5] = ["", "Thousand", "Million", "Billion", "Trillion"];

/// Format a crack time in seconds as the largest fitting unit, two decimals.
///
/// Past a year the value is scaled by thousands up to "Trillion". The empty
/// unit keeps its separator, so a plain year count reads `"1.00  Years"`.
pub fn format_crack_time(seconds: f64) -> String {
    let seconds = if seconds.is_nan() || seconds < 0.0 { 0.0 } else { seconds };

    if seconds < MINUTE {
        format!("{:.2} Seconds", seconds)
    } else if seconds < HOUR {
        format!("{:.2} Minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.2} Hours", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.2} Days", seconds / DAY)
    } else {
        let mut years = seconds / YEAR;
        let mut unit = 0;
        while years >= 1000.0 && unit < YEAR_UNITS.len() - 1 {
            years /= 1000.0;
            unit += 1;
        }
        format!("{:.2} {} Years", years, YEAR_UNITS[unit])
    }
}

// Entropy as shown next to the password, rounded to whole bits
pub fn format_entropy(entropy_bits: f64) -> String {
    format!("~ {:.0} Bits", entropy_bits.round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_year_units() {
        assert_eq!(format_crack_time(0.0), "0.00 Seconds");
        assert_eq!(format_crack_time(30.0), "30.00 Seconds");
        assert_eq!(format_crack_time(59.999), "60.00 Seconds");
        assert_eq!(format_crack_time(60.0), "1.00 Minutes");
        assert_eq!(format_crack_time(90.0), "1.50 Minutes");
        assert_eq!(format_crack_time(7_200.0), "2.00 Hours");
        assert_eq!(format_crack_time(172_800.0), "2.00 Days");
    }

    #[test]
    fn plain_years_keep_double_space() {
        assert_eq!(format_crack_time(31_557_600.0), "1.00  Years");
        assert_eq!(format_crack_time(31_557_600.0 * 999.0), "999.00  Years");
    }

    #[test]
    fn years_scale_by_thousands() {
        assert_eq!(format_crack_time(31_557_600_000.0), "1.00 Thousand Years");
        assert_eq!(format_crack_time(YEAR * 2.5e6), "2.50 Million Years");
        assert_eq!(format_crack_time(YEAR * 1e9), "1.00 Billion Years");
        assert_eq!(format_crack_time(YEAR * 1e12), "1.00 Trillion Years");
    }

    #[test]
    fn trillion_is_the_last_unit() {
        assert_eq!(format_crack_time(YEAR * 5e15), "5000.00 Trillion Years");
        assert_eq!(format_crack_time(f64::INFINITY), "inf Trillion Years");
    }

    #[test]
    fn invalid_seconds_render_as_zero() {
        assert_eq!(format_crack_time(-1.0), "0.00 Seconds");
        assert_eq!(format_crack_time(f64::NAN), "0.00 Seconds");
    }

    #[test]
    fn entropy_is_rounded_to_whole_bits() {
        assert_eq!(format_entropy(0.0), "~ 0 Bits");
        assert_eq!(format_entropy(26.22), "~ 26 Bits");
        assert_eq!(format_entropy(104.87), "~ 105 Bits");
    }
}
