use anyhow::bail;
use serde::Serialize;

/// Inclusive monthly rent range in whole euros.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RentRange {
    min: u32,
    max: u32,
}

impl RentRange {
    /// The lowest rent bound a user can pick.
    pub const LOWER_LIMIT: u32 = 0;
    /// The highest rent bound a user can pick.
    pub const UPPER_LIMIT: u32 = 5000;
    /// Granularity of the rent bounds.
    pub const STEP: u32 = 50;

    /// Creates a rent range, fails if bounds aren't on the step grid, are out of limits, or
    /// inverted.
    pub fn new(min: u32, max: u32) -> anyhow::Result<Self> {
        if !Self::is_valid_bound(min) || !Self::is_valid_bound(max) {
            bail!(
                "Rent bounds must be multiples of {} within {}..={}.",
                Self::STEP,
                Self::LOWER_LIMIT,
                Self::UPPER_LIMIT
            );
        }

        if min > max {
            bail!("Minimum rent ({min}) cannot be greater than maximum rent ({max}).");
        }

        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Moves the lower bound, snapping it to the step grid and never past the upper bound.
    pub fn with_min(self, min: i64) -> Self {
        Self {
            min: Self::snap(min).min(self.max),
            ..self
        }
    }

    /// Moves the upper bound, snapping it to the step grid and never below the lower bound.
    pub fn with_max(self, max: i64) -> Self {
        Self {
            max: Self::snap(max).max(self.min),
            ..self
        }
    }

    /// Creates a range from arbitrary bounds, snapping them to the step grid and limits. Inverted
    /// bounds are swapped.
    pub fn from_bounds(min: i64, max: i64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min: Self::LOWER_LIMIT,
            max: Self::UPPER_LIMIT,
        }
        .with_min(min)
        .with_max(max)
    }

    /// Reads rent bounds from their raw query values. Each bound that is missing or malformed
    /// falls back to its default, and an inverted result falls back to the default range.
    pub fn parse_lossy(min: Option<&str>, max: Option<&str>) -> Self {
        let default = Self::default();
        let parse_bound = |value: Option<&str>, default_bound: u32| {
            value
                .and_then(parse_int)
                .and_then(|bound| u32::try_from(bound).ok())
                .filter(|bound| Self::is_valid_bound(*bound))
                .unwrap_or(default_bound)
        };

        Self::new(parse_bound(min, default.min), parse_bound(max, default.max)).unwrap_or(default)
    }

    fn is_valid_bound(bound: u32) -> bool {
        bound <= Self::UPPER_LIMIT && bound % Self::STEP == 0
    }

    fn snap(bound: i64) -> u32 {
        let step = i64::from(Self::STEP);
        let bound = bound.clamp(i64::from(Self::LOWER_LIMIT), i64::from(Self::UPPER_LIMIT));
        // Clamped above, so always fits.
        ((bound + step / 2) / step * step) as u32
    }
}

impl Default for RentRange {
    fn default() -> Self {
        Self { min: 600, max: 2500 }
    }
}

/// Parses the leading integer of the string the way browsers' `parseInt` does: leading whitespace
/// and a single sign are allowed, parsing stops at the first non-digit character.
fn parse_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let digits_len = digits
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    let number = digits[..digits_len].parse::<i64>().ok()?;
    Some(if negative { -number } else { number })
}

#[cfg(test)]
mod tests {
    use super::{RentRange, parse_int};

    #[test]
    fn default() {
        let range = RentRange::default();
        assert_eq!(range.min(), 600);
        assert_eq!(range.max(), 2500);
    }

    #[test]
    fn validates_bounds() {
        assert!(RentRange::new(0, 5000).is_ok());
        assert!(RentRange::new(700, 700).is_ok());

        assert!(RentRange::new(700, 650).is_err());
        assert!(RentRange::new(0, 5050).is_err());
        assert!(RentRange::new(620, 1000).is_err());
    }

    #[test]
    fn parses_int_like_browsers() {
        assert_eq!(parse_int("1800"), Some(1800));
        assert_eq!(parse_int("  1800"), Some(1800));
        assert_eq!(parse_int("1800abc"), Some(1800));
        assert_eq!(parse_int("+50"), Some(50));
        assert_eq!(parse_int("-50"), Some(-50));
        assert_eq!(parse_int("12.5"), Some(12));

        for value in ["", "abc", "-", "+", " ", "e10", "--5"] {
            assert_eq!(parse_int(value), None, "{value}");
        }
    }

    #[test]
    fn parses_lossy() {
        assert_eq!(RentRange::parse_lossy(None, None), RentRange::default());
        assert_eq!(
            RentRange::parse_lossy(Some("700"), Some("1800")),
            RentRange::new(700, 1800).unwrap()
        );
        assert_eq!(
            RentRange::parse_lossy(Some("abc"), Some("1800")),
            RentRange::new(600, 1800).unwrap()
        );
        assert_eq!(
            RentRange::parse_lossy(Some("700"), Some("")),
            RentRange::new(700, 2500).unwrap()
        );
        // Off the step grid, negative or out of limits.
        assert_eq!(
            RentRange::parse_lossy(Some("725"), Some("-50")),
            RentRange::default()
        );
        assert_eq!(
            RentRange::parse_lossy(Some("0"), Some("9000")),
            RentRange::new(0, 2500).unwrap()
        );
        // Inverted.
        assert_eq!(
            RentRange::parse_lossy(Some("3000"), None),
            RentRange::default()
        );
    }

    #[test]
    fn moves_bounds_within_invariants() {
        let range = RentRange::default();
        assert_eq!(range.with_min(720), RentRange::new(700, 2500).unwrap());
        assert_eq!(range.with_min(730), RentRange::new(750, 2500).unwrap());
        assert_eq!(range.with_min(-100), RentRange::new(0, 2500).unwrap());
        assert_eq!(range.with_min(4000), RentRange::new(2500, 2500).unwrap());

        assert_eq!(range.with_max(1800), RentRange::new(600, 1800).unwrap());
        assert_eq!(range.with_max(100_000), RentRange::new(600, 5000).unwrap());
        assert_eq!(range.with_max(10), RentRange::new(600, 600).unwrap());
    }

    #[test]
    fn creates_from_arbitrary_bounds() {
        assert_eq!(
            RentRange::from_bounds(700, 1800),
            RentRange::new(700, 1800).unwrap()
        );
        assert_eq!(
            RentRange::from_bounds(1810, 690),
            RentRange::new(700, 1800).unwrap()
        );
        assert_eq!(
            RentRange::from_bounds(-10, 7000),
            RentRange::new(0, 5000).unwrap()
        );
    }
}
