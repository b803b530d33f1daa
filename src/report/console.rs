//! Human-readable comprehensive report. Presentation only; not a machine
//! contract.

use crate::insight::InsightReport;
use crate::runner::outcome::{SuiteReport, TestStatus};
use colored::Colorize;

/// Print the full suite report followed by the derived insights.
pub fn render(report: &SuiteReport, insights: &InsightReport) {
    let line = "=".repeat(70);

    println!("\n{}", line);
    println!("{}", "TEST EXECUTION REPORT".white().bold());
    println!("{}", line);

    println!("\n{}", "Summary".white().bold());
    println!("  Total scenarios:  {}", report.total);
    println!("  Passed:           {}", report.passed.to_string().green());
    println!("  Failed:           {}", report.failed().to_string().red());
    println!("  Success rate:     {:.1}%", report.success_rate);
    println!("  Total duration:   {:.2}s", report.total_duration_seconds);

    println!("\n{}", "Results".white().bold());
    for (i, outcome) in report.outcomes.iter().enumerate() {
        let (icon, status) = match outcome.status {
            TestStatus::Passed => ("✓".green(), "PASSED".green()),
            TestStatus::Failed => ("✗".red(), "FAILED".red()),
        };
        println!(
            "  {:2}. {} {} [{}] ({:.2}s)",
            i + 1,
            icon,
            outcome.scenario_name,
            status,
            outcome.duration_seconds
        );
        if let Some(ref error) = outcome.error {
            println!("      Error: {}", error.red());
        }
    }

    println!("\n{}", "Insights".white().bold());
    println!("  Coverage: {}", insights.coverage_verdict);
    println!("  Risk:     {}", insights.risk_verdict);
    println!(
        "  Average scenario duration: {:.2}s",
        insights.average_duration_seconds
    );

    println!("\n{}", "Recommendations".white().bold());
    for (i, rec) in insights.recommendations.iter().enumerate() {
        println!("  {}. {}", i + 1, rec);
    }

    println!("\n{}", "Next steps".white().bold());
    for (i, step) in insights.next_steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!();
}
