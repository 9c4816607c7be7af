use clap::Parser;
use tracing::{debug, info};

use scissors::cli::Cli;
use scissors::config::{get_config, init_config_from};
use scissors::runtime::lifetime::prepare_startup;
use scissors::runtime::modes::{Mode, detect_mode};
use scissors::system::{LogTarget, RunMode, init_logging, install_panic_hook};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_config_from(cli.config.as_deref());
    let config = get_config();

    let mode = detect_mode(cli.command.as_ref());
    let (run_mode, log_target) = match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => (RunMode::Tui, LogTarget::Silent),
        _ => (RunMode::Cli, LogTarget::Stderr),
    };
    install_panic_hook(run_mode);

    // guard 需要活到 main 结束，否则缓冲的日志会丢失
    let _log_guard = init_logging(&config.logging, log_target)?;
    info!("Scissors v{} starting", env!("CARGO_PKG_VERSION"));
    debug!("Mode: {:?}", mode);

    let context = prepare_startup(&config);

    match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            scissors::runtime::modes::run_tui(context)
                .await
                .map_err(|e| anyhow::anyhow!("TUI error: {}", e))?;
        }
        #[cfg(feature = "cli")]
        Mode::Cli => {
            let Some(command) = cli.command else {
                anyhow::bail!("No command given");
            };
            if let Err(e) = scissors::runtime::modes::run_cli(context, command).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        Mode::Unknown => {
            anyhow::bail!("No interface compiled in; enable the `cli` or `tui` feature");
        }
    }

    Ok(())
}
