use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use report_analyzer::render::OutputFormat;
use report_analyzer::utils::logging;
use report_analyzer::{App, Config, RunOptions};

#[derive(Debug, Parser)]
#[command(name = "report-analyzer", about = "AI-powered test automation report analyzer")]
struct Cli {
    /// HTML test report to analyze
    report: PathBuf,

    /// Send the failure logs to the LLM for a triage summary
    #[arg(long)]
    analyze: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// TOML config file (environment variables take precedence)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = match &cli.config {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::from_env()?,
    };

    // 初始化日志
    logging::init(config.verbose_logging);

    let options = RunOptions {
        report_path: cli.report,
        analyze: cli.analyze,
        format: cli.format,
    };

    // 初始化并运行应用
    let output = App::initialize(config)?.run(&options).await?;
    println!("{}", output);

    Ok(())
}
