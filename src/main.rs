use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;

use loginprobe::driver::{LiveBackend, PlaywrightDriver, WebDriverConfig};
use loginprobe::insight::InsightEngine;
use loginprobe::report::{self, ResultsDocument};
use loginprobe::runner::{
    ConsoleEventListener, EventEmitter, RandomPolicy, ScenarioBackend, ScenarioRunner,
    SimulatedBackend, TestSuiteOrchestrator,
};
use loginprobe::scenario::{self, login_suite};
use loginprobe::utils::records::{sort_records_by_key, Record};

#[derive(Parser)]
#[command(name = "loginprobe")]
#[command(version = "0.1.0")]
#[command(about = "Login page test-suite orchestrator with rule-based insights", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the login test suite (simulated unless a URL is given)
    Run {
        /// Login page URL; enables the live browser backend
        #[arg(short, long)]
        url: Option<String>,

        /// YAML suite definition (builtin login suite if not provided)
        #[arg(long)]
        suite: Option<PathBuf>,

        /// Output directory for the results document
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// RNG seed for the simulated backend (reproducible runs)
        #[arg(long)]
        seed: Option<u64>,

        /// Pass probability for the simulated backend
        #[arg(long, default_value = "0.9")]
        success_probability: f64,

        /// Simulated per-scenario latency in milliseconds
        #[arg(long, default_value = "100")]
        latency_ms: u64,

        /// Live-backend wait timeout in seconds
        #[arg(long, default_value = "10")]
        timeout: u64,

        /// Run the browser with a visible window
        #[arg(long, default_value = "false")]
        headed: bool,

        /// Also write a JUnit XML report
        #[arg(long, default_value = "false")]
        junit: bool,
    },

    /// Regenerate a report from a saved results document
    Report {
        /// Path to a test_results.json produced by `run`
        results: PathBuf,

        /// Output format (console, json, junit)
        #[arg(short, long, default_value = "console")]
        format: String,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Sort a JSON array of records by a key
    Sort {
        /// Path to a JSON file containing an array of objects
        input: PathBuf,

        /// Key to sort by
        #[arg(short, long)]
        key: String,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            url,
            suite,
            output,
            seed,
            success_probability,
            latency_ms,
            timeout,
            headed,
            junit,
        } => {
            run_suite_command(
                url,
                suite,
                output,
                seed,
                success_probability,
                latency_ms,
                timeout,
                headed,
                junit,
            )
            .await?;
        }

        Commands::Report {
            results,
            format,
            output,
        } => {
            println!(
                "{} Generating {} report from: {}",
                "▶".blue(),
                format.cyan(),
                results.display()
            );
            report::generate_report(&results, &format, output.as_deref())?;
        }

        Commands::Sort { input, key, output } => {
            let content = std::fs::read_to_string(&input)?;
            let records: Vec<Record> = serde_json::from_str(&content)?;
            let sorted = sort_records_by_key(records, &key);
            let json = serde_json::to_string_pretty(&sorted)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("Sorted records saved to: {}", path.display());
                }
                None => println!("{}", json),
            }
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn run_suite_command(
    url: Option<String>,
    suite: Option<PathBuf>,
    output: PathBuf,
    seed: Option<u64>,
    success_probability: f64,
    latency_ms: u64,
    timeout: u64,
    headed: bool,
    junit: bool,
) -> anyhow::Result<()> {
    let (scenarios, suite_url) = match suite {
        Some(ref path) => {
            let file = scenario::load_suite_file(path)?;
            (file.scenarios, file.url)
        }
        None => (login_suite(), None),
    };

    // CLI --url wins over the suite file's url
    let target_url = url.or(suite_url);

    let backend: Box<dyn ScenarioBackend> = match target_url {
        Some(ref target) => {
            println!("{} Live run against: {}", "▶".green().bold(), target.cyan());
            let config = WebDriverConfig {
                headless: !headed,
                ..WebDriverConfig::default()
            };
            let driver = PlaywrightDriver::launch(config).await?;
            let viewport = driver.viewport();
            Box::new(
                LiveBackend::new(Box::new(driver), target.clone(), viewport)
                    .with_timeout(Duration::from_secs(timeout)),
            )
        }
        None => {
            println!(
                "{} Simulated run ({} scenarios, p={:.2}{})",
                "▶".green().bold(),
                scenarios.len(),
                success_probability,
                seed.map(|s| format!(", seed={}", s)).unwrap_or_default()
            );
            let policy = RandomPolicy::new(success_probability, seed);
            Box::new(
                SimulatedBackend::new(Box::new(policy))
                    .with_latency(Duration::from_millis(latency_ms)),
            )
        }
    };

    let (emitter, receiver) = EventEmitter::new();
    tokio::spawn(ConsoleEventListener::listen(receiver));

    let orchestrator = TestSuiteOrchestrator::with_emitter(ScenarioRunner::new(backend), emitter);
    let suite_report = orchestrator.run_suite(&scenarios).await?;
    let insights = InsightEngine::analyze(&suite_report);

    // Let the event listener flush its final lines before the full report
    tokio::time::sleep(Duration::from_millis(200)).await;

    report::console::render(&suite_report, &insights);

    std::fs::create_dir_all(&output)?;
    let document = ResultsDocument::new(&suite_report, &insights);
    let results_path = output.join("test_results.json");
    report::json::save(&document, &results_path)?;
    println!("Results saved to: {}", results_path.display());

    if junit {
        let junit_path = output.join("junit.xml");
        report::junit::generate(&document, Some(&junit_path))?;
    }

    Ok(())
}
