use clap::{Args, Parser};

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// target subnet in CIDR notation; only interfaces inside it are migrated
    pub subnet: Option<String>,
    #[command(flatten)]
    pub global_args: GlobalArgs,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// override default kubeconfig
    #[arg(long = "kubeconfig")]
    pub kube_config: Option<String>,
    /// override default kubeconfig context
    #[arg(long)]
    pub kube_context: Option<String>,
    /// if set, objects are validated by the server but not persisted
    #[arg(long)]
    pub dry_run: bool,
    /// enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose_logging: bool,
    /// enable trace output (more detailed than verbose, overrides it if present)
    #[arg(long = "trace")]
    pub trace_logging: bool,
}

impl GlobalArgs {
    pub fn get_log_level(&self) -> LogLevel {
        if self.trace_logging {
            return LogLevel::Trace;
        }

        if self.verbose_logging {
            return LogLevel::Verbose;
        }

        LogLevel::Normal
    }
}

pub enum LogLevel {
    Normal,
    Verbose,
    Trace,
}
