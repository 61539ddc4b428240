//! Catalogue tests: each scenario observes exactly the values it should

use pretty_assertions::assert_eq;
use refcheck::*;

fn run(name: &str) -> (ScenarioReport, MemoryReporter) {
    let def = scenarios::find(name).unwrap();
    let mut runner = Runner::new(MemoryReporter::new());
    let report = runner.run_one(&def);
    (report, runner.into_reporter())
}

/// `(label, expected, actual)` for every assertion.
fn observed(report: &ScenarioReport) -> Vec<(&str, &str, &str)> {
    report
        .assertions
        .iter()
        .map(|a| (a.label.as_str(), a.expected.as_str(), a.actual.as_str()))
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Declarations
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_value_nil() {
    let (report, _) = run("valueNil");
    assert!(report.passed());
    assert_eq!(
        report.assertions.iter().map(|a| a.label.as_str()).collect::<Vec<_>>(),
        vec!["declaration", "assignment", "write"]
    );
}

#[test]
fn test_declaration() {
    let (report, reporter) = run("declaration");
    assert!(report.passed());
    assert!(reporter.infos().iter().any(|l| l.starts_with("p:  0x")));
}

#[test]
fn test_show_address_has_no_assertions() {
    let (report, reporter) = run("showAddress");
    assert!(report.passed());
    assert!(report.assertions.is_empty());

    let addresses: Vec<_> = reporter
        .infos()
        .into_iter()
        .filter(|l| l.starts_with("Hexadecimal address of"))
        .collect();
    assert_eq!(addresses.len(), 4);
    assert!(addresses.iter().all(|l| l.contains("0x")));
}

#[test]
fn test_init_prelude() {
    let (report, _) = run("init");
    assert!(report.passed());
    assert_eq!(report.assertions.len(), 3);
}

// ═══════════════════════════════════════════════════════════════════════
// Access
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_access_1() {
    let (report, _) = run("access_1");
    assert!(report.passed());
    assert_eq!(
        observed(&report)[1..].to_vec(),
        vec![
            ("the string \"hello\"", "\"Hello, mina-san!\"", "\"Hello, mina-san!\""),
            (
                "the string pointed to by \"helloPtr\"",
                "\"Hello, mina-san!\"",
                "\"Hello, mina-san!\""
            ),
            ("the value of \"i\"", "6", "6"),
            ("the value pointed to by \"iPtr\"", "6", "6"),
            ("write through \"iPtr\" reaches \"i\"", "7", "7"),
            ("plain copy of \"i\"", "6", "6"),
        ]
    );
}

#[test]
fn test_access_2_advances_three_four_five() {
    let (report, _) = run("access_2");
    assert!(report.passed());
    assert_eq!(
        observed(&report),
        vec![
            ("x after first increment", "4", "4"),
            ("x after second increment", "5", "5"),
        ]
    );
}

#[test]
fn test_allocation() {
    let (report, _) = run("allocation");
    assert!(report.passed());
    assert_eq!(
        observed(&report),
        vec![
            ("the sum of numbers from 0 to 10", "45", "45"),
            ("the double of this sum", "90", "90"),
        ]
    );
}

#[test]
fn test_allocation_isolated_from_order() {
    let catalogue = scenarios::catalogue();
    let mut reversed: Vec<ScenarioDef> = catalogue.values().copied().collect();
    reversed.reverse();

    let mut runner = Runner::new(MemoryReporter::new());
    let forward: Vec<ScenarioDef> = catalogue.values().copied().collect();
    let first = runner.run(&forward);
    let second = runner.run(&reversed);
    let alone = runner.run(&[scenarios::find("allocation").unwrap()]);

    let allocation = |report: &SuiteReport| {
        report
            .get("allocation")
            .unwrap()
            .assertions
            .iter()
            .map(|a| a.actual.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(allocation(&first), vec!["45", "90"]);
    assert_eq!(allocation(&second), vec!["45", "90"]);
    assert_eq!(allocation(&alone), vec!["45", "90"]);
}

// ═══════════════════════════════════════════════════════════════════════
// Calls
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_parameter_by_value() {
    let (report, _) = run("parameterByValue");
    assert!(report.passed());
    assert_eq!(
        observed(&report),
        vec![
            ("x+1", "4", "4"),
            ("x", "3", "3"),
            ("copy of cell + 1", "4", "4"),
            ("cell after call", "3", "3"),
        ]
    );
}

#[test]
fn test_by_reference_1() {
    let (report, _) = run("byReference_1");
    assert!(report.passed());
    assert_eq!(
        observed(&report),
        vec![("x+1", "4", "4"), ("x", "4", "4"), ("x+1", "5", "5"), ("x", "5", "5")]
    );
}

#[test]
fn test_by_reference_2_accumulates() {
    let (report, _) = run("byReference_2");
    assert!(report.passed());
    assert_eq!(
        observed(&report),
        vec![("value", "7", "7"), ("value", "8", "8")]
    );
}

#[test]
fn test_by_reference_3_closure_capture() {
    let (report, _) = run("byReference_3");
    assert!(report.passed());
    assert_eq!(
        observed(&report),
        vec![("y", "4", "4"), ("x", "4", "4"), ("y aliases x", "true", "true")]
    );
}

#[test]
fn test_every_scenario_reports_header() {
    for def in scenarios::SCENARIOS.iter() {
        let (report, reporter) = run(def.name);
        assert!(report.state.is_terminal());
        assert_eq!(reporter.infos()[0], format!("== {}", def.name));
    }
}
