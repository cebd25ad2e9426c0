//! api-tester - XiaoPrompt Optimizer API test run
//!
//! Runs the full check sequence against a local optimizer service.

use clap::Parser;
use std::process::ExitCode;
use xiaoprompt_harness::client::ConfigBuilder;
use xiaoprompt_harness::client::config::DEFAULT_BASE_URL;
use xiaoprompt_harness::runner::{TestRunner, default_prompts};
use xiaoprompt_harness::utils::{LogLevel, init_logger, verify_working_directory};
use xiaoprompt_harness::Result;

#[derive(Debug, Parser)]
#[command(name = "api-tester", version, about = "Run the XiaoPrompt Optimizer API checks")]
struct Args {
    /// Optimizer service root
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Do not send results to the save endpoint
    #[arg(long)]
    no_save: bool,

    /// debug, info, warn or error
    #[arg(long, default_value = "warn")]
    log_level: LogLevel,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level);

    println!("🚀 Starting XiaoPrompt API Tests...");
    println!("{}", "=".repeat(50));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_environment() => {
            eprintln!("❌ Error: {}", e);
            eprintln!("   Please run api-tester from the harness checkout");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("❌ Error running tests: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let cwd = std::env::current_dir()?;
    verify_working_directory(&cwd)?;

    println!();
    println!("🧪 Running API tests...");
    println!("{}", "-".repeat(50));

    let config = ConfigBuilder::new().base_url(args.base_url).build();
    let mut runner = TestRunner::new(config)?.persist_results(!args.no_save);

    // A panic inside the run surfaces as a JoinError -> HarnessError::Unexpected
    tokio::spawn(async move {
        let prompts = default_prompts();
        runner.run_all(&prompts).await;
    })
    .await?;

    Ok(())
}
