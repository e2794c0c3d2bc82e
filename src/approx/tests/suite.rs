mod suite {
    use crate::approx::exp::{EXP_MAX_ARG, EXP_MIN_ARG};
    use crate::approx::suite::Suite;
    use crate::error::Error;

    #[test]
    fn parse_and_display() {
        for suite in Suite::ALL {
            assert_eq!(suite.to_string().parse::<Suite>().unwrap(), suite);
        }
        assert_eq!("LOG1P".parse::<Suite>().unwrap(), Suite::Log1p);
        assert_eq!("Exp".parse::<Suite>().unwrap(), Suite::Exp);

        let err = "sin".parse::<Suite>().unwrap_err();
        assert!(matches!(&err, Error::UnknownSuite(s) if s == "sin"));
        assert!(err.to_string().starts_with("unknown suite `sin`"));
    }

    #[test]
    fn pairs() {
        let pairs: Vec<_> = Suite::ALL
            .iter()
            .map(|s| (s.reference().to_string(), s.candidate().to_string()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("std::exp".to_string(), "exp_c".to_string()),
                ("std::log".to_string(), "log_c".to_string()),
                ("std::expm1".to_string(), "exp_c(x)-1".to_string()),
                ("std::log1p".to_string(), "log_c(1+x)".to_string()),
            ]
        );
    }

    #[test]
    fn intervals() {
        let bounds = |s: Suite| -> Vec<(f64, f64)> {
            s.intervals().unwrap().iter().map(|i| (i.lb, i.ub)).collect()
        };
        assert_eq!(bounds(Suite::Exp), [(-0.1, 0.1), (EXP_MIN_ARG, EXP_MAX_ARG)]);
        assert_eq!(bounds(Suite::Log), [(0.003, 2300.0)]);
        assert_eq!(bounds(Suite::Expm1), [(-0.01, 0.01)]);
        assert_eq!(bounds(Suite::Log1p), [(-0.01, 0.01)]);
    }

    #[test]
    fn default_intervals_lie_in_the_domains() {
        for suite in Suite::ALL {
            for interval in suite.intervals().unwrap() {
                for f in [suite.reference(), suite.candidate()] {
                    assert!(f.try_call(interval.lb).is_ok(), "{f} at {}", interval.lb);
                    assert!(f.try_call(interval.ub).is_ok(), "{f} at {}", interval.ub);
                }
            }
        }
    }
}
