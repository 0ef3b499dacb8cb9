mod cli;
mod commands;
mod logging;
mod registry;

use std::io::Write;
use std::process::ExitCode;

use tracing::debug;

use crate::registry::Registry;

fn main() -> ExitCode {
    let registry = Registry::builtin();
    let matches = cli::build_cli(&registry).get_matches();

    logging::setup_logging(matches.get_count("verbose"));

    let Some((verb, sub)) = matches.subcommand() else {
        // subcommand_required makes this unreachable; keep the usage
        // exit code clap would have produced.
        return ExitCode::from(2);
    };

    match verb {
        "list" => {
            let mut stdout = std::io::stdout().lock();
            match commands::print_listing(&registry, &mut stdout) {
                Ok(()) => {
                    let _ = stdout.flush();
                    ExitCode::SUCCESS
                }
                Err(err) if commands::is_broken_pipe(&err) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("Error: {err:#}");
                    ExitCode::FAILURE
                }
            }
        }
        "check" => {
            let mut stdout = std::io::stdout().lock();
            // check is informational, never a gate.
            match commands::print_check(&registry, &mut stdout) {
                Ok(()) => {
                    let _ = stdout.flush();
                    ExitCode::SUCCESS
                }
                Err(err) if commands::is_broken_pipe(&err) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("Error: {err:#}");
                    ExitCode::FAILURE
                }
            }
        }
        name => {
            let Some(entry) = registry.lookup(name) else {
                eprintln!("Error: unknown tool '{name}'");
                return ExitCode::FAILURE;
            };
            let args = commands::forwarded_args(sub);
            debug!(tool = name, forwarded = args.len(), "running tool verb");
            match commands::dispatch_tool(entry, &args) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("Error running {name}: {err}");
                    ExitCode::from(commands::failure_exit_code(&err))
                }
            }
        }
    }
}
