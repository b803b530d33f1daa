use super::outcome::TestStatus;
use tokio::sync::broadcast;

/// Suite execution events for real-time console updates.
#[derive(Debug, Clone)]
pub enum TestEvent {
    SuiteStarted {
        session_id: String,
        scenario_count: usize,
    },
    ScenarioStarted {
        index: usize,
        name: String,
        description: String,
        expected_result: String,
    },
    ScenarioFinished {
        index: usize,
        name: String,
        status: TestStatus,
        error: Option<String>,
        duration_seconds: f64,
    },
    SuiteFinished {
        total: usize,
        passed: usize,
        failed: usize,
        success_rate: f64,
        total_duration_seconds: f64,
    },
    Log {
        message: String,
    },
}

/// Broadcasts test events to any number of listeners. Emitting with no
/// subscribers is fine; the send error is ignored.
pub struct EventEmitter {
    sender: broadcast::Sender<TestEvent>,
}

impl EventEmitter {
    pub fn new() -> (Self, broadcast::Receiver<TestEvent>) {
        let (sender, receiver) = broadcast::channel(100);
        (Self { sender }, receiver)
    }

    pub fn emit(&self, event: TestEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TestEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventEmitter {
    fn default() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }
}

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration as StdDuration;

/// Console event listener printing real-time scenario progress.
pub struct ConsoleEventListener;

impl ConsoleEventListener {
    pub async fn listen(mut receiver: broadcast::Receiver<TestEvent>) {
        use colored::Colorize;
        use std::io::IsTerminal;

        // Hidden draw target when piped, to avoid escape codes in captured output
        let multi = if std::io::stdout().is_terminal() {
            MultiProgress::new()
        } else {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        };

        let mut spinner: Option<ProgressBar> = None;
        let mut spinner_text = String::new();

        while let Ok(event) = receiver.recv().await {
            match event {
                TestEvent::SuiteStarted {
                    session_id,
                    scenario_count,
                } => {
                    multi
                        .println(format!(
                            "\n{} Test session started: {} ({} scenarios)",
                            "▶".green().bold(),
                            session_id.cyan(),
                            scenario_count
                        ))
                        .ok();
                }

                TestEvent::ScenarioStarted {
                    index,
                    name,
                    description,
                    expected_result,
                } => {
                    multi
                        .println(format!(
                            "\n  {} {}\n      {}\n      Expected: {}",
                            "→".blue(),
                            name.white().bold(),
                            description.dimmed(),
                            expected_result.dimmed()
                        ))
                        .ok();

                    let pb = multi.add(ProgressBar::new_spinner());
                    if let Ok(style) = ProgressStyle::default_spinner()
                        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
                        .template("      {spinner} {msg}")
                    {
                        pb.set_style(style);
                    }
                    spinner_text = format!("[{}] running... ", index);
                    pb.set_message(spinner_text.clone());
                    pb.enable_steady_tick(StdDuration::from_millis(100));
                    spinner = Some(pb);
                }

                TestEvent::ScenarioFinished {
                    status,
                    error,
                    duration_seconds,
                    ..
                } => {
                    if let Some(pb) = spinner.take() {
                        pb.finish_and_clear();
                    }
                    let line = match status {
                        TestStatus::Passed => format!(
                            "      {} {}PASSED ({:.2}s)",
                            "✓".green(),
                            spinner_text,
                            duration_seconds
                        ),
                        TestStatus::Failed => format!(
                            "      {} {}FAILED ({:.2}s)",
                            "✗".red(),
                            spinner_text,
                            duration_seconds
                        ),
                    };
                    multi.println(line).ok();
                    if let Some(cause) = error {
                        multi
                            .println(format!("        Error: {}", cause.red()))
                            .ok();
                    }
                }

                TestEvent::SuiteFinished {
                    total,
                    passed,
                    failed,
                    success_rate,
                    total_duration_seconds,
                } => {
                    println!("\n{} Test session finished", "■".blue().bold());
                    println!("  Total scenarios: {}", total);
                    println!(
                        "  {} passed, {} failed",
                        passed.to_string().green(),
                        failed.to_string().red()
                    );
                    println!("  Success rate: {:.1}%", success_rate);
                    println!("  Duration: {:.2}s", total_duration_seconds);
                }

                TestEvent::Log { message } => {
                    multi.println(format!("      {}", message)).ok();
                }
            }
        }
    }
}
