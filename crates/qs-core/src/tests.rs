//! Unit tests for qs-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EventId, ProcessId, ResourceId};

    #[test]
    fn index_is_inner_value() {
        let id = ProcessId(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn next_is_successor() {
        assert_eq!(EventId(0).next(), EventId(1));
        assert_eq!(ResourceId(7).next(), ResourceId(8));
    }

    #[test]
    fn display() {
        assert_eq!(ProcessId(7).to_string(), "ProcessId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::SimTime;

    #[test]
    fn arithmetic() {
        let t = SimTime::new(10.0);
        assert_eq!(t + 5.0, SimTime::new(15.0));
        assert_eq!(t.offset(2.5), SimTime::new(12.5));
        assert_eq!(SimTime::new(15.0) - t, 5.0);
    }

    #[test]
    fn negative_zero_equals_zero() {
        let t = SimTime::new(-0.0);
        assert_eq!(t, SimTime::ZERO);
        assert!(t >= SimTime::ZERO);
    }

    #[test]
    fn total_order() {
        let mut v = vec![SimTime::new(3.0), SimTime::new(0.3), SimTime::new(1.0)];
        v.sort();
        assert_eq!(v, [SimTime::new(0.3), SimTime::new(1.0), SimTime::new(3.0)]);
        assert!(SimTime::new(f64::NAN) > SimTime::new(f64::INFINITY));
    }

    #[test]
    fn finiteness() {
        assert!(SimTime::new(1.0).is_finite());
        assert!(!SimTime::new(f64::NAN).is_finite());
        assert!(!SimTime::new(f64::INFINITY).is_finite());
    }

    #[test]
    fn display() {
        assert_eq!(SimTime::new(1.5).to_string(), "t=1.500");
    }
}

#[cfg(test)]
mod config {
    use crate::{HorizonPolicy, SimConfig};

    #[test]
    fn defaults_match_reference_domain() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.capacity, 1);
        assert_eq!(cfg.service_rate_per_unit, 0.3);
        assert_eq!(cfg.drain_margin, 60.0);
        assert_eq!(cfg.horizon_policy, HorizonPolicy::Truncate);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn service_duration_scales_with_demand() {
        let cfg = SimConfig::with_capacity(2);
        assert_eq!(cfg.service_duration(1.0), 0.3);
        assert_eq!(cfg.service_duration(0.0), 0.0);
    }

    #[test]
    fn zero_capacity_rejected() {
        assert!(SimConfig::with_capacity(0).validate().is_err());
    }

    #[test]
    fn bad_rates_rejected() {
        let cfg = SimConfig { service_rate_per_unit: 0.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { service_rate_per_unit: f64::NAN, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { drain_margin: -1.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod arrival {
    use crate::{horizon_for, ArrivalRecord, SimTime};

    #[test]
    fn horizon_is_latest_plus_margin() {
        let arrivals = [
            ArrivalRecord::new(0.0, 3.0),
            ArrivalRecord::new(45.0, 1.0),
            ArrivalRecord::new(30.0, 2.0),
        ];
        assert_eq!(horizon_for(&arrivals, 60.0), SimTime::new(105.0));
    }

    #[test]
    fn empty_schedule_horizon_is_margin() {
        assert_eq!(horizon_for(&[], 60.0), SimTime::new(60.0));
    }
}

#[cfg(all(test, feature = "serde"))]
mod config_toml {
    use crate::{HorizonPolicy, SimConfig, DEFAULT_SERVICE_RATE_PER_UNIT};

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: SimConfig = toml::from_str("capacity = 3\nhorizon_policy = \"fail\"\n").unwrap();
        assert_eq!(
            cfg,
            SimConfig {
                capacity:       3,
                horizon_policy: HorizonPolicy::Fail,
                ..SimConfig::default()
            }
        );
        assert_eq!(cfg.service_rate_per_unit, DEFAULT_SERVICE_RATE_PER_UNIT);
    }

    #[test]
    fn empty_file_is_default() {
        let cfg: SimConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, SimConfig::default());
    }

    #[test]
    fn policy_names_are_snake_case() {
        let cfg: SimConfig = toml::from_str("horizon_policy = \"truncate\"").unwrap();
        assert_eq!(cfg.horizon_policy, HorizonPolicy::Truncate);
        assert!(toml::from_str::<SimConfig>("horizon_policy = \"Fail\"").is_err());
        assert!(toml::from_str::<SimConfig>("capacity = \"two\"").is_err());
    }
}
