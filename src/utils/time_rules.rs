use chrono::NaiveTime;

/// Cutoff for the lateness classification: strictly after 09:01:00 is Late.
const LATE_CUTOFF: (u32, u32, u32) = (9, 1, 0);

pub const ON_TIME: &str = "On Time";
pub const LATE: &str = "Late";

/// Renders a stored attendance status for a present employee,
/// e.g. `Present at 09:05:00 AM`.
pub fn present_status(time_in: NaiveTime) -> String {
    format!("Present at {}", format_time(time_in))
}

/// 12-hour clock with AM/PM marker, the wire format for time-in values.
pub fn format_time(t: NaiveTime) -> String {
    t.format("%I:%M:%S %p").to_string()
}

/// Classifies a working-hours row. Timeliness is only meaningful when a
/// time-in exists; an absent employee gets no classification at all.
pub fn classify_timeliness(time_in: Option<NaiveTime>) -> Option<&'static str> {
    let (h, m, s) = LATE_CUTOFF;
    let cutoff = NaiveTime::from_hms_opt(h, m, s).unwrap();
    time_in.map(|t| if t > cutoff { LATE } else { ON_TIME })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn present_status_uses_twelve_hour_clock() {
        assert_eq!(present_status(at(9, 5, 0)), "Present at 09:05:00 AM");
        assert_eq!(present_status(at(13, 30, 9)), "Present at 01:30:09 PM");
        assert_eq!(present_status(at(0, 0, 0)), "Present at 12:00:00 AM");
    }

    #[test]
    fn after_cutoff_is_late() {
        assert_eq!(classify_timeliness(Some(at(9, 5, 0))), Some(LATE));
        assert_eq!(classify_timeliness(Some(at(9, 1, 1))), Some(LATE));
        assert_eq!(classify_timeliness(Some(at(17, 0, 0))), Some(LATE));
    }

    #[test]
    fn cutoff_and_earlier_is_on_time() {
        assert_eq!(classify_timeliness(Some(at(8, 55, 0))), Some(ON_TIME));
        assert_eq!(classify_timeliness(Some(at(9, 1, 0))), Some(ON_TIME));
        assert_eq!(classify_timeliness(Some(at(0, 0, 0))), Some(ON_TIME));
    }

    #[test]
    fn absent_has_no_classification() {
        assert_eq!(classify_timeliness(None), None);
    }
}
