//! Entropy, brute-force crack-time estimate and its human-readable form.

/// Offline brute-force capacity assumed for every estimate, in guesses per second.
pub const CRACKING_SPEED_PER_SECOND: f64 = 1e12;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_YEAR: f64 = 365.25;

/// `length * log2(pool_size)`, or 0 when the pool has at most one symbol.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size <= 1 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

/// Seconds needed to exhaust `pool_size^length` candidates.
///
/// Overflows to infinity for very long passwords, which formats as "eons".
pub fn crack_time_seconds(length: usize, pool_size: usize) -> f64 {
    (pool_size as f64).powf(length as f64) / CRACKING_SPEED_PER_SECOND
}

/// Formats a crack time into the coarsest tier it falls in.
///
/// Each tier covers `[lower, upper)`.
pub fn format_crack_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "eons".to_string();
    }
    if seconds < 1e-9 {
        return "instantly".to_string();
    }
    if seconds < 1.0 {
        return format!("~{:.0} milliseconds", seconds * 1e3);
    }
    if seconds < SECONDS_PER_MINUTE {
        return format!("~{:.1} seconds", seconds);
    }

    let minutes = seconds / SECONDS_PER_MINUTE;
    let hours = seconds / SECONDS_PER_HOUR;
    let days = seconds / SECONDS_PER_DAY;

    if minutes < 60.0 {
        return format!("~{:.1} minutes", minutes);
    }
    if hours < 24.0 {
        return format!("~{:.1} hours", hours);
    }
    if days < DAYS_PER_YEAR {
        return format!("~{:.0} days", days);
    }

    let years = days / DAYS_PER_YEAR;
    if years < 1e3 {
        return format!("~{} years", group_thousands(years));
    }
    if years < 1e6 {
        return format!("~{} thousand years", group_thousands(years / 1e3));
    }
    if years < 1e9 {
        return format!("~{} million years", group_thousands(years / 1e6));
    }
    "eons".to_string()
}

/// Rounds to an integer and inserts `,` every three digits.
pub(crate) fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value);
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_guards_small_pool() {
        assert_eq!(entropy_bits(0, 0), 0.0);
        assert_eq!(entropy_bits(10, 0), 0.0);
        assert_eq!(entropy_bits(10, 1), 0.0);
    }

    #[test]
    fn test_entropy_lowercase() {
        let bits = entropy_bits(8, 26);
        assert!((bits - 37.6035).abs() < 1e-3, "got {}", bits);
    }

    #[test]
    fn test_crack_time_values() {
        assert!((crack_time_seconds(3, 10) - 1e-9).abs() < 1e-18);
        assert!((crack_time_seconds(8, 26) - 0.208_827_064_576).abs() < 1e-9);
        assert_eq!(crack_time_seconds(4, 0), 0.0);
        assert!(crack_time_seconds(10_000, 94).is_infinite());
    }

    #[test]
    fn test_format_instantly() {
        assert_eq!(format_crack_time(0.0), "instantly");
        assert_eq!(format_crack_time(1e-10), "instantly");
    }

    #[test]
    fn test_format_lower_bounds_are_inclusive() {
        assert_eq!(format_crack_time(1e-9), "~0 milliseconds");
        assert_eq!(format_crack_time(1.0), "~1.0 seconds");
        assert_eq!(format_crack_time(60.0), "~1.0 minutes");
        assert_eq!(format_crack_time(3_600.0), "~1.0 hours");
        assert_eq!(format_crack_time(86_400.0), "~1 days");
        assert_eq!(format_crack_time(86_400.0 * 365.25), "~1 years");
    }

    #[test]
    fn test_format_tiers() {
        assert_eq!(format_crack_time(0.25), "~250 milliseconds");
        assert_eq!(format_crack_time(45.0), "~45.0 seconds");
        assert_eq!(format_crack_time(90.0), "~1.5 minutes");
        assert_eq!(format_crack_time(7_200.0), "~2.0 hours");
        assert_eq!(format_crack_time(86_400.0 * 3.0), "~3 days");
        assert_eq!(format_crack_time(86_400.0 * 400.0), "~1 years");
    }

    #[test]
    fn test_format_year_tiers() {
        let year = 86_400.0 * 365.25;
        assert_eq!(format_crack_time(year * 120.0), "~120 years");
        assert_eq!(format_crack_time(year * 5_000.0), "~5 thousand years");
        assert_eq!(format_crack_time(year * 3e6), "~3 million years");
        assert_eq!(format_crack_time(year * 1e9), "eons");
        assert_eq!(format_crack_time(f64::INFINITY), "eons");
    }

    #[test]
    fn test_format_groups_thousands_at_tier_edge() {
        let year = 86_400.0 * 365.25;
        assert_eq!(format_crack_time(year * 999.7), "~1,000 years");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(7.0), "7");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1_000.0), "1,000");
        assert_eq!(group_thousands(1_234_567.0), "1,234,567");
    }
}
