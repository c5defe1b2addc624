use crate::cli::Args;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod consts;

pub fn init(args: &Args) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(&args.log_filter).unwrap_or_else(|err| {
            eprintln!(
                "Invalid log filter `{}` ({err}), falling back to `{}`.",
                args.log_filter,
                consts::DEFAULT_LOG_FILTER
            );
            EnvFilter::new(consts::DEFAULT_LOG_FILTER)
        })
    });
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
