//! Command-line front end: analyzes `.html`/`.htm` files and prints one JSON
//! report view per file to stdout. Logs go to stderr at `warn` by default.
//! Per-category debug events need a target-qualified filter such as
//! `RUST_LOG=rs_mailscore=debug`; a bare level does not lower the default.

use rs_mailscore::{Options, ReportView, Session};
use std::env;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("Usage: analyze_email <email.html> [more.html ...]");
        return ExitCode::FAILURE;
    }

    let options = Options::default();
    let mut session = Session::with_options(options.clone());
    let mut failed = false;

    for path in &paths {
        if let Err(err) = session.load_path(path) {
            error!(path = %path, "{err}");
            failed = true;
            continue;
        }
        match session.analyze() {
            Ok(report) => {
                let view = ReportView::from_report(report, &options);
                println!("{}", view.to_json());
            }
            Err(err) => {
                error!(path = %path, "{err}");
                failed = true;
            }
        }
        session.reset();
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
