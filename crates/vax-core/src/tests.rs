//! Unit tests for vax-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CenterId, PersonId, VaccineId};

    #[test]
    fn index_roundtrip() {
        let id = PersonId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PersonId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(VaccineId(0) < VaccineId(1));
        assert!(CenterId(100) > CenterId(99));
    }

    #[test]
    fn display() {
        assert_eq!(VaccineId(7).to_string(), "VaccineId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::SlotTime;

    fn slot(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> SlotTime {
        SlotTime::from_ymd_hm(y, m, d, hh, mm).unwrap()
    }

    #[test]
    fn ordering_date_before_time() {
        // An earlier date wins regardless of time-of-day.
        assert!(slot(2022, 1, 1, 23, 59) < slot(2022, 1, 2, 0, 0));
        // Same date: time-of-day breaks the tie.
        assert!(slot(2022, 1, 1, 8, 0) < slot(2022, 1, 1, 8, 1));
        assert_eq!(slot(2022, 1, 1, 8, 0), slot(2022, 1, 1, 8, 0));
    }

    #[test]
    fn add_days_within_month() {
        let s = slot(2022, 3, 10, 10, 30).add_days(5);
        assert_eq!(s, slot(2022, 3, 15, 10, 30));
    }

    #[test]
    fn add_days_month_rollover() {
        let s = slot(2022, 1, 25, 9, 0).add_days(21);
        assert_eq!(s, slot(2022, 2, 15, 9, 0));
    }

    #[test]
    fn add_days_year_rollover() {
        let s = slot(2021, 12, 20, 16, 15).add_days(14);
        assert_eq!(s, slot(2022, 1, 3, 16, 15));
    }

    #[test]
    fn add_days_leap_february() {
        // 2024 is a leap year: 28/02 + 1 lands on the 29th.
        assert_eq!(slot(2024, 2, 28, 12, 0).add_days(1), slot(2024, 2, 29, 12, 0));
        // 2022 is not: same offset lands on 01/03.
        assert_eq!(slot(2022, 2, 28, 12, 0).add_days(1), slot(2022, 3, 1, 12, 0));
    }

    #[test]
    fn add_days_zero_is_identity() {
        let s = slot(2022, 6, 1, 11, 45);
        assert_eq!(s.add_days(0), s);
    }

    #[test]
    fn parse_wire_fields() {
        let s = SlotTime::parse("01/02/2022", "18:45").unwrap();
        assert_eq!(s, slot(2022, 2, 1, 18, 45));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(SlotTime::parse("2022-02-01", "18:45").is_err());
        assert!(SlotTime::parse("30/02/2022", "18:45").is_err());
        assert!(SlotTime::parse("01/02/2022", "25:00").is_err());
    }

    #[test]
    fn from_ymd_hm_rejects_out_of_range() {
        assert!(SlotTime::from_ymd_hm(2022, 13, 1, 0, 0).is_none());
        assert!(SlotTime::from_ymd_hm(2022, 1, 1, 24, 0).is_none());
    }

    #[test]
    fn display() {
        assert_eq!(slot(2022, 2, 1, 18, 45).to_string(), "01/02/2022 18:45");
    }
}
