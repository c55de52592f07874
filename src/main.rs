use std::process::ExitCode;

use pathfind::cmd::{self, Parsed, USAGE};
use pathfind::error::EX_USAGE;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match cmd::parse_args(std::env::args_os()) {
        Parsed::Run(cli) => cli,
        Parsed::Info(info) => {
            let _ = info.print();
            return ExitCode::SUCCESS;
        }
        Parsed::Usage => {
            eprintln!("{}", USAGE);
            return ExitCode::from(EX_USAGE);
        }
    };

    match cmd::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cmd::report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}
