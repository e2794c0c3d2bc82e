use ulpx::{harness, Error, Interval, Options, RenderOptions, Suite, UnaryFn};

fn run(options: &Options, suite: Suite, lb: f64, ub: f64) -> Result<String, Error> {
    let mut out = Vec::new();
    let interval = Interval::new(lb, ub)?;
    harness(&mut out, options, &suite.reference(), &suite.candidate(), interval)?;
    Ok(String::from_utf8(out).unwrap())
}

fn with_count(count: usize) -> Options {
    Options {
        count,
        ..Options::default()
    }
}

#[test]
fn summary_has_header_histogram_and_worst_case() {
    let text = run(&with_count(1000), Suite::Exp, -0.1, 0.1).unwrap();
    println!("{text}");

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("std::exp vs exp_c on [-0.1, 0.1]"));
    assert!(lines.next().unwrap().starts_with("0|"));
    assert!(text.contains("\nworst case:\nx:       "));
    assert!(text.ends_with("\n\n"));
}

#[test]
fn identical_functions_fill_one_bar() {
    let id = UnaryFn::new("id", |x: f64| x);
    let mut out = Vec::new();
    harness(&mut out, &with_count(50), &id, &id, Interval::new(-1.0, 1.0).unwrap()).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "id vs id on [-1, 1]");
    assert_eq!(lines[1], format!("0|100%  {}", "*".repeat(80)));
    assert_eq!(lines[2], "worst case:");
    assert_eq!(lines[7], "ulperr:  0.0");
}

#[test]
fn raw_mode_writes_one_row_per_sample() {
    let options = Options {
        count: 3,
        raw: true,
        ..Options::default()
    };
    let text = run(&options, Suite::Exp, -0.1, 0.1).unwrap();
    println!("{text}");

    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "# lb=-0.1; ub=0.1");
    assert_eq!(lines[1], "# x std::exp exp_c");

    for row in &lines[2..] {
        assert_eq!(row.len(), 75);
        let values: Vec<f64> = row.split_whitespace().map(|v| v.parse().unwrap()).collect();
        assert_eq!(values.len(), 3);
        assert!((-0.1..0.1).contains(&values[0]));
        assert!((values[1] - values[0].exp()).abs() < 1.0e-15);
    }
}

#[test]
fn same_seed_same_output() {
    let options = with_count(2000);
    let a = run(&options, Suite::Log, 0.003, 2300.0).unwrap();
    let b = run(&options, Suite::Log, 0.003, 2300.0).unwrap();
    assert_eq!(a, b);

    let reseeded = Options { seed: 1, ..options };
    let c = run(&reseeded, Suite::Log, 0.003, 2300.0).unwrap();
    assert_ne!(a, c);
}

#[test]
fn domain_error_aborts_the_interval() {
    let err = run(&with_count(1000), Suite::Log, -1.0, 1.0).unwrap_err();
    println!("{err}");
    assert!(matches!(&err, Error::Domain { function, .. } if function == "std::log"));
}

#[test]
fn invalid_intervals_are_rejected() {
    for (lb, ub) in [(1.0, 1.0), (2.0, -2.0), (0.0, f64::INFINITY), (f64::NAN, 1.0)] {
        let err = Interval::new(lb, ub).unwrap_err();
        assert!(matches!(err, Error::Interval { .. }), "[{lb}, {ub}]");
    }
    assert_eq!(
        Interval::new(1.0, 1.0).unwrap_err().to_string(),
        "invalid sampling interval [1, 1]"
    );
}

#[test]
fn small_line_budget_truncates_or_thresholds() {
    let options = Options {
        count: 5000,
        render: RenderOptions { max_lines: 3, bar_width: 20 },
        ..Options::default()
    };
    let text = run(&options, Suite::Expm1, -0.01, 0.01).unwrap();
    println!("{text}");

    // header, at most three chart rows plus a marker, then the worst case
    let chart = text.lines().skip(1).take_while(|l| *l != "worst case:").count();
    assert!((1..=4).contains(&chart));
}

#[cfg(feature = "serde")]
#[test]
fn json_mode_writes_one_object() {
    let options = Options {
        count: 100,
        json: true,
        ..Options::default()
    };
    let text = run(&options, Suite::Exp, -0.1, 0.1).unwrap();
    assert_eq!(text.lines().count(), 1);

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["reference"], "std::exp");
    assert_eq!(value["candidate"], "exp_c");
    assert_eq!(value["count"], 100);
    assert_eq!(value["interval"]["lb"], -0.1);
    assert_eq!(value["report"]["lines"][0]["kind"], "bucket");
}
