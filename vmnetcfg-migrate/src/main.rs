use anyhow::Context;
use clap::{CommandFactory, Parser};
use cli::{GlobalArgs, LogLevel};
use env_logger::Target;
use log::LevelFilter;
use vmnetcfg_migrate_core::kubernetes::operations::create_client;

use crate::{cli::Cli, commands::migrate::migrate};

mod cli;
mod commands;

pub const CLI_FIELD_MANAGER: &str = "vmnetcfg-migrate";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    configure_logging(&cli.global_args);

    let subnet = match cli.subnet {
        Some(subnet) => subnet,
        None => {
            Cli::command().print_help().ok();
            std::process::exit(1);
        }
    };

    let client = create_client(&cli.global_args.kube_config, &cli.global_args.kube_context)
        .await
        .context("Couldn't initialize k8s API client!")?;

    migrate(&cli.global_args, &subnet, client).await?;

    Ok(())
}

fn configure_logging(global_args: &GlobalArgs) {
    let log_level = global_args.get_log_level();
    let mut logger = env_logger::builder();

    logger
        .format_timestamp(None)
        .format_module_path(matches!(log_level, LogLevel::Trace))
        .format_target(false)
        .format_level(false)
        .target(Target::Stdout);

    if let LogLevel::Normal = log_level {
        logger
            .filter(Some("vmnetcfg_migrate"), LevelFilter::Info)
            .filter(Some("vmnetcfg_migrate_core"), LevelFilter::Info);
    }

    if let LogLevel::Verbose = log_level {
        logger
            .filter(Some("vmnetcfg_migrate"), LevelFilter::Debug)
            .filter(Some("vmnetcfg_migrate_core"), LevelFilter::Debug);
    }

    if let LogLevel::Trace = log_level {
        logger.filter(None, LevelFilter::Debug);
    }

    logger.init();
}
