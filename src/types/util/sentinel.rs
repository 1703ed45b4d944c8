//! Conversions for values where zero stands for "no limit".

use super::datetime;
use std::time::Duration;

/// Invite `max_uses`: `0` means unlimited.
pub const fn max_uses(value: u64) -> Option<u64> {
    if value == 0 {
        None
    } else {
        Some(value)
    }
}

/// Invite `max_age` in seconds: `0` means the invite never expires.
pub const fn max_age(value: u64) -> Option<Duration> {
    if value == 0 {
        None
    } else {
        Some(datetime::seconds(value))
    }
}

#[cfg(test)]
mod tests {
    use super::{max_age, max_uses};
    use std::time::Duration;

    #[test]
    fn zero_means_unlimited() {
        assert_eq!(max_uses(0), None);
        assert_eq!(max_uses(5), Some(5));
        assert_eq!(max_age(0), None);
        assert_eq!(max_age(1), Some(Duration::from_secs(1)));
    }
}
