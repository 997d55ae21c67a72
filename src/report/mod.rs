//! Run reporting
//!
//! Outcomes live only for the duration of one run and are printed to the
//! console; there is no machine-readable output.

/// Result of one best-effort sub-check inside a scenario. A `Failed` or
/// `Skipped` sub-check never fails its enclosing scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubCheckStatus {
    Passed,
    Failed,
    Skipped,
}

impl SubCheckStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            SubCheckStatus::Passed => "✅",
            SubCheckStatus::Failed => "⚠️",
            SubCheckStatus::Skipped => "⚠️",
        }
    }
}

/// One named sub-check outcome
#[derive(Debug, Clone)]
pub struct SubCheck {
    pub name: String,
    pub status: SubCheckStatus,
    pub note: Option<String>,
}

impl SubCheck {
    pub fn new(name: &str, status: SubCheckStatus, note: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            status,
            note,
        }
    }
}

/// Per-scenario result
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub passed: bool,
    /// Generated value (registration email) or failure message
    pub detail: Option<String>,
    pub sub_checks: Vec<SubCheck>,
}

impl ScenarioReport {
    pub fn passed(name: &'static str) -> Self {
        Self {
            name,
            passed: true,
            detail: None,
            sub_checks: Vec::new(),
        }
    }

    pub fn passed_with_detail(name: &'static str, detail: String) -> Self {
        Self {
            name,
            passed: true,
            detail: Some(detail),
            sub_checks: Vec::new(),
        }
    }

    pub fn failed(name: &'static str, detail: String) -> Self {
        Self {
            name,
            passed: false,
            detail: Some(detail),
            sub_checks: Vec::new(),
        }
    }

    pub fn with_sub_checks(mut self, sub_checks: Vec<SubCheck>) -> Self {
        self.sub_checks = sub_checks;
        self
    }
}

/// Aggregate result of one full run
#[derive(Debug, Default)]
pub struct RunReport {
    pub scenarios: Vec<ScenarioReport>,
}

impl RunReport {
    pub fn push(&mut self, scenario: ScenarioReport) {
        self.scenarios.push(scenario);
    }

    /// True iff every scenario passed. Sub-check statuses do not count.
    pub fn all_passed(&self) -> bool {
        self.scenarios.iter().all(|s| s.passed)
    }

    /// Print the per-scenario table and the aggregate line.
    pub fn print_summary(&self) {
        println!("\n📊 Test Results Summary:");
        for scenario in &self.scenarios {
            let status = if scenario.passed {
                "✅ PASS"
            } else {
                "❌ FAIL"
            };
            match &scenario.detail {
                Some(detail) if !scenario.passed => {
                    println!("{}: {} ({})", scenario.name, status, detail)
                }
                _ => println!("{}: {}", scenario.name, status),
            }
            for check in &scenario.sub_checks {
                if check.status != SubCheckStatus::Passed {
                    match &check.note {
                        Some(note) => {
                            println!("  {} {}: {}", check.status.symbol(), check.name, note)
                        }
                        None => println!("  {} {}", check.status.symbol(), check.name),
                    }
                }
            }
        }

        let overall = if self.all_passed() {
            "✅ ALL TESTS PASSED"
        } else {
            "❌ SOME TESTS FAILED"
        };
        println!("\n🎯 Overall Result: {}", overall);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_passed_requires_every_scenario() {
        let mut report = RunReport::default();
        report.push(ScenarioReport::passed("Registration"));
        report.push(ScenarioReport::passed_with_detail(
            "Login Success",
            "redirected to /hospitals".into(),
        ));
        assert!(report.all_passed());

        report.push(ScenarioReport::failed(
            "Invalid Login",
            "Timeout: page text showed none of the keywords".into(),
        ));
        assert!(!report.all_passed());
    }

    #[test]
    fn test_sub_checks_never_fail_the_run() {
        let mut report = RunReport::default();
        let scenario = ScenarioReport::passed("Hospital Workflow").with_sub_checks(vec![
            SubCheck::new("hospital display", SubCheckStatus::Passed, None),
            SubCheck::new("view switching", SubCheckStatus::Skipped, Some("buttons missing".into())),
            SubCheck::new("hospital count", SubCheckStatus::Failed, None),
        ]);
        report.push(scenario);

        assert!(report.all_passed());
    }

    #[test]
    fn test_empty_run_counts_as_passed() {
        // Vacuously true; the orchestrator always pushes five scenarios.
        assert!(RunReport::default().all_passed());
    }
}
