use clap::{Arg, ArgAction, Command};

use crate::registry::{is_memory_plugin, Registry};

/// Build the full clap command tree from the tool table. Pure function
/// of the registry; no ambient registration state.
pub fn build_cli(registry: &Registry) -> Command {
    let mut root = Command::new("coldcase")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Integrated Digital Forensics Tool")
        .long_about("A comprehensive CLI tool integrating various digital forensics utilities")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Enable verbose logging (use multiple times for more verbosity)"),
        )
        .subcommand(Command::new("list").about("List all available forensics tools"))
        .subcommand(Command::new("check").about("Check which tools are installed"));

    for entry in registry.all() {
        let mut cmd = Command::new(entry.descriptor.name)
            .about(entry.descriptor.description)
            .arg(
                Arg::new("args")
                    .value_name("ARGS")
                    .num_args(0..)
                    .trailing_var_arg(true)
                    .allow_hyphen_values(true)
                    .value_parser(clap::value_parser!(std::ffi::OsString))
                    .help("Arguments forwarded verbatim to the underlying tool"),
            );
        if is_memory_plugin(entry.descriptor.name) {
            cmd = cmd.arg(
                Arg::new("file")
                    .short('f')
                    .long("file")
                    .value_name("FILE")
                    .help("Memory image file to analyze"),
            );
        }
        root = root.subcommand(cmd);
    }

    root
}
