use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use connector_timekit::domain::ports::SystemClock;
use connector_timekit::utils::error::ErrorCategory;
use connector_timekit::utils::logger;
use connector_timekit::utils::validation::{validate_range, Validate};
use connector_timekit::{
    dt_to_string, parse_date, parse_duration, uuid, CliConfig, Command, TimekitError,
    WindowConfig,
};

const MAX_UUID_COUNT: usize = 10_000;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config.command) {
        // 根據錯誤類別決定退出碼
        let exit_code = match e.downcast_ref::<TimekitError>() {
            Some(err) => {
                tracing::error!("❌ {} (Category: {:?})", err, err.category());
                tracing::error!("💡 Recovery suggestion: {}", err.recovery_suggestion());
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 {}", err.recovery_suggestion());

                match err.category() {
                    ErrorCategory::Configuration => 1,
                    ErrorCategory::Input => 2,
                    ErrorCategory::System => 3,
                }
            }
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
                1
            }
        };
        std::process::exit(exit_code);
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Duration { text } => {
            let span = parse_duration(&text)?;
            println!("{}", span.num_seconds());
        }
        Command::Format { epoch } => {
            let instant = match epoch {
                Some(secs) => DateTime::<Utc>::from_timestamp(secs, 0).with_context(|| {
                    format!("epoch {} is outside the supported calendar range", secs)
                })?,
                None => Utc::now(),
            };
            println!("{}", dt_to_string(&instant));
        }
        Command::Parse { text } => {
            let instant = parse_date(&text)?;
            println!("{}", instant.timestamp());
        }
        Command::Uuid { count } => {
            validate_range("count", count, 1, MAX_UUID_COUNT)?;
            for _ in 0..count {
                println!("{}", uuid());
            }
        }
        Command::Window {
            lookback,
            stop,
            config,
            json,
        } => {
            let mut window_config = match config {
                Some(path) => {
                    tracing::info!("📁 Loading window configuration from: {}", path);
                    WindowConfig::from_file(&path)?
                }
                None => WindowConfig::default(),
            };

            // 命令列參數覆蓋配置檔
            if let Some(lookback) = lookback {
                window_config.window.lookback = lookback;
            }
            if stop.is_some() {
                window_config.window.stop = stop;
            }

            // 驗證配置
            window_config.validate()?;
            let window = window_config.to_query_window(&SystemClock)?;

            if json {
                let output = serde_json::to_string_pretty(&window)
                    .context("failed to serialize query window")?;
                println!("{}", output);
            } else {
                println!("{}", window.to_flux_range());
            }
        }
    }

    Ok(())
}
