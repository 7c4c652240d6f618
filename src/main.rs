/*!
# Care - A Weekly CARE Journal

Care walks you through a weekly reflection in four steps (Compliment,
Achievement, Reflection, Emotion), saves each completed entry locally, and
lets you browse past entries by category.

This file wires configuration, logging and storage together and hands control
to the interactive session.

## Usage

```
care [OPTIONS]

Options:
  -d, --data-dir <DIR>       Directory holding the journal storage
      --log-format <FORMAT>  Log output format: text or json
  -v, --verbose              Enable verbose output
  -h, --help                 Print help information
  -V, --version              Print version information
```

## Configuration

- `CARE_DIR`: The directory holding the journal storage (defaults to "~/Documents/care-journal")
- `CARE_LOG_FORMAT`: `text` (default) or `json`; logs go to stderr
- `RUST_LOG`: Standard tracing filter directives
*/

use care::cli::CliArgs;
use care::config::{Config, LogFormat};
use care::constants::{
    DEFAULT_LOG_LEVEL, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME, VERBOSE_LOG_LEVEL,
};
use care::errors::AppResult;
use care::journal_io::EntryStore;
use care::ops::{ConsoleNotifier, Navigator};
use care::session::run_session;
use care::storage::FileStore;
use chrono::{Local, Utc};
use std::io;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat, verbose: bool) {
    let default_level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().with_current_span(true).init(),
        LogFormat::Text => builder.init(),
    }
}

fn run(args: CliArgs, mut config: Config) -> AppResult<()> {
    if let Some(dir) = args.data_dir {
        config.data_dir = Config::expand_path(&dir.to_string_lossy())?;
    }
    config.validate()?;
    debug!(?config, "Configuration loaded");

    let backend = FileStore::open(&config.data_dir)?;
    let store = EntryStore::open(Box::new(backend), Utc::now())?;
    let mut navigator = Navigator::new(store, Box::new(ConsoleNotifier));

    let today = Local::now().date_naive();
    let stdin = io::stdin();
    run_session(&mut navigator, stdin.lock(), io::stdout(), today)?;

    info!(entries = navigator.entries().len(), "Session ended");
    Ok(())
}

fn main() -> AppResult<()> {
    let args = CliArgs::parse();

    let mut config = Config::load()?;
    if let Some(format) = args.log_format.as_deref() {
        config.log_format = LogFormat::parse(format)?;
    }

    init_tracing(config.log_format, args.verbose);

    let correlation_id = uuid::Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    info!("Starting care");

    if let Err(err) = run(args, config) {
        error!(error = %err, "Application error");
        return Err(err);
    }
    Ok(())
}
