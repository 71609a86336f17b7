use anyhow::Context;
use clap::Parser;
use gcd_check::config::{LogFormat, Mode, SummaryFormat};
use gcd_check::utils::{logger, validation::Validate};
use gcd_check::{CheckEngine, CheckError, CliConfig, FileSource, RunSummary, StdinSource};
use std::io::Write;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    match run(&config) {
        Ok(summary) => {
            if config.strict && !summary.all_passed() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            let exit_code = match e.downcast_ref::<CheckError>() {
                // 下游關閉管道時視為正常結束
                Some(err) if err.is_broken_pipe() => 0,
                Some(err) => {
                    tracing::error!("Run failed: {} ({:?})", err, err.severity());
                    eprintln!("❌ {}", err.user_friendly_message());
                    eprintln!("💡 {}", err.recovery_suggestion());
                    err.exit_code()
                }
                None => {
                    eprintln!("❌ {:#}", e);
                    3
                }
            };
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> anyhow::Result<RunSummary> {
    let engine = CheckEngine::new(config.clone());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let summary = match &config.mode {
        Mode::Batch { path, .. } => {
            let source = FileSource::open(path)?;
            engine.run(source, &mut out)?
        }
        Mode::Interactive { .. } => engine.run(StdinSource::stdin(), &mut out)?,
    };

    report_summary(config.summary, &summary)?;
    Ok(summary)
}

fn report_summary(format: SummaryFormat, summary: &RunSummary) -> anyhow::Result<()> {
    let mut err = std::io::stderr().lock();
    match format {
        SummaryFormat::None => {}
        SummaryFormat::Text => writeln!(err, "{}", summary)?,
        SummaryFormat::Json => {
            let json = serde_json::to_string(summary).map_err(CheckError::from)?;
            writeln!(err, "{}", json).context("writing summary")?;
        }
    }
    Ok(())
}
