//! Display formatting shared by the pages.

use chrono::{DateTime, Utc};

const DATE: &str = "%b %-d, %Y";
const TIME: &str = "%H:%M";

pub fn date(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(|| "TBA".to_string(), |v| v.format(DATE).to_string())
}

pub fn date_time(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(|| "TBA".to_string(), |v| v.format(&format!("{DATE} {TIME}")).to_string())
}

/// Prize money in rupees, without decimals when the amount is whole.
pub fn prize(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("₹{amount:.0}")
    } else {
        format!("₹{amount:.2}")
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn formats_dates() {
        let when = Utc.with_ymd_and_hms(2026, 3, 4, 9, 5, 0).single();
        assert_eq!(date(when), "Mar 4, 2026");
        assert_eq!(date_time(when), "Mar 4, 2026 09:05");
        assert_eq!(date(None), "TBA");
    }

    #[test]
    fn formats_prizes() {
        assert_eq!(prize(5000.0), "₹5000");
        assert_eq!(prize(12.5), "₹12.50");
    }
}
