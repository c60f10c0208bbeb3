//! Unit tests for qs-arrivals.

use std::io::Cursor;

use qs_core::SimTime;

use crate::{load_arrivals_reader, parse_clock_minutes, ArrivalError, SyntheticSchedule};

const TIMETABLE: &str = "\
Route,Scheduled_Arrival,Actual_Arrival,Passenger_Count\n\
1,07:00,07:10,34\n\
2,07:05,07:02,12\n\
1,07:15,07:10,40\n\
3,07:20,08:00,5\n\
";

#[cfg(test)]
mod clock_tests {
    use super::*;

    #[test]
    fn parses_hh_mm() {
        assert_eq!(parse_clock_minutes("07:45"), Ok(465.0));
        assert_eq!(parse_clock_minutes("00:00"), Ok(0.0));
        assert_eq!(parse_clock_minutes("23:59"), Ok(1439.0));
    }

    #[test]
    fn accepts_single_digits_and_whitespace() {
        assert_eq!(parse_clock_minutes(" 7:05 "), Ok(425.0));
        assert_eq!(parse_clock_minutes("7:5"), Ok(425.0));
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "0745", "24:00", "12:60", "ab:cd", "1:2:3", "-1:00", "123:00"] {
            assert!(parse_clock_minutes(bad).is_err(), "{bad:?} should fail");
        }
    }
}

#[cfg(test)]
mod loader_tests {
    use super::*;

    #[test]
    fn sorts_and_normalises() {
        let s = load_arrivals_reader(Cursor::new(TIMETABLE)).unwrap();
        assert_eq!(s.origin_minutes, 422.0); // 07:02
        let times: Vec<f64> = s.arrivals.iter().map(|a| a.timestamp.minutes()).collect();
        assert_eq!(times, [0.0, 8.0, 8.0, 58.0]);
        let demand: Vec<f64> = s.arrivals.iter().map(|a| a.demand).collect();
        // Ties at 07:10 keep file order (34 before 40).
        assert_eq!(demand, [12.0, 34.0, 40.0, 5.0]);
    }

    #[test]
    fn horizon_and_labels() {
        let s = load_arrivals_reader(Cursor::new(TIMETABLE)).unwrap();
        assert_eq!(s.horizon(60.0), SimTime::new(118.0));
        assert_eq!(s.clock_label(SimTime::ZERO), "07:02");
        assert_eq!(s.clock_label(SimTime::new(58.0)), "08:00");
        assert_eq!(s.total_demand(), 91.0);
    }

    #[test]
    fn empty_file_gives_empty_schedule() {
        let s = load_arrivals_reader(Cursor::new("Actual_Arrival,Passenger_Count\n")).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.horizon(60.0), SimTime::new(60.0));
    }

    #[test]
    fn bad_clock_is_parse_error() {
        let csv = "Actual_Arrival,Passenger_Count\n07:00,3\nlate,4\n";
        let err = load_arrivals_reader(Cursor::new(csv)).unwrap_err();
        match err {
            ArrivalError::Parse(msg) => assert!(msg.starts_with("row 2"), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn negative_demand_rejected() {
        let csv = "Actual_Arrival,Passenger_Count\n07:00,-3\n";
        assert!(matches!(
            load_arrivals_reader(Cursor::new(csv)),
            Err(ArrivalError::Parse(_))
        ));
    }

    #[test]
    fn missing_column_is_csv_error() {
        let csv = "Actual_Arrival\n07:00\n";
        assert!(matches!(load_arrivals_reader(Cursor::new(csv)), Err(ArrivalError::Csv(_))));
    }
}

#[cfg(test)]
mod synthetic_tests {
    use super::*;

    fn params(seed: u64) -> SyntheticSchedule {
        SyntheticSchedule { count: 50, mean_interarrival: 4.0, max_demand: 30, seed }
    }

    #[test]
    fn same_seed_same_schedule() {
        assert_eq!(params(7).generate().unwrap(), params(7).generate().unwrap());
        assert_ne!(params(7).generate().unwrap(), params(8).generate().unwrap());
    }

    #[test]
    fn sorted_from_zero_with_bounded_demand() {
        let arrivals = params(1).generate().unwrap();
        assert_eq!(arrivals.len(), 50);
        assert_eq!(arrivals[0].timestamp, SimTime::ZERO);
        assert!(arrivals.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        assert!(arrivals.iter().all(|a| (0.0..=30.0).contains(&a.demand)));
    }

    #[test]
    fn zero_gap_stacks_arrivals() {
        let s = SyntheticSchedule { count: 5, mean_interarrival: 0.0, max_demand: 1, seed: 0 };
        assert!(s.generate().unwrap().iter().all(|a| a.timestamp == SimTime::ZERO));
    }

    #[test]
    fn negative_gap_rejected() {
        let s = SyntheticSchedule { count: 5, mean_interarrival: -1.0, max_demand: 1, seed: 0 };
        assert!(s.generate().is_err());
    }
}
