use std::ffi::OsString;
use std::io::Write;

use anyhow::{Context, Result};
use clap::ArgMatches;
use dispatch::{ensure_available, is_available, resolves_on_path, run, DispatchError};

use crate::registry::{
    didier_suite_present, volatility_present, Family, Registry, ToolEntry, DIDIER_SUITE_DIR,
    VOLATILITY_DIR,
};

/// Availability-check a descriptor, then hand it to the process relay.
/// The precheck is what turns "absent tool" into a typed error instead
/// of a raw launch failure.
pub fn dispatch_tool(entry: &ToolEntry, args: &[OsString]) -> Result<(), DispatchError> {
    ensure_available(&entry.descriptor)?;
    run(&entry.descriptor, args)
}

/// Collect the argument list to forward: the parsed `-f/--file` value
/// (memory-plugin verbs only) re-emitted first, then the trailing args
/// verbatim.
pub fn forwarded_args(matches: &ArgMatches) -> Vec<OsString> {
    let mut args = Vec::new();
    if let Ok(Some(file)) = matches.try_get_one::<String>("file") {
        args.push(OsString::from("-f"));
        args.push(OsString::from(file));
    }
    if let Some(rest) = matches.get_many::<OsString>("args") {
        args.extend(rest.cloned());
    }
    args
}

/// Map a dispatch failure onto the process exit code: the child's own
/// code where it fits, 1 for everything else.
pub fn failure_exit_code(err: &DispatchError) -> u8 {
    match err {
        DispatchError::NonZeroExit { code, .. } => match u8::try_from(*code) {
            Ok(0) | Err(_) => 1,
            Ok(code) => code,
        },
        _ => 1,
    }
}

/// True when a report failed only because the reader went away
/// (`coldcase list | head`). Callers exit quietly on this instead of
/// diagnosing it.
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::BrokenPipe)
}

pub fn print_listing(registry: &Registry, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Available Forensics Tools:")?;
    for family in Family::ALL {
        writeln!(out)?;
        writeln!(out, "{}:", family.title())?;
        for entry in registry.family(family) {
            writeln!(
                out,
                "  {:<17} - {}",
                entry.descriptor.name, entry.descriptor.description
            )?;
        }
    }
    writeln!(out)?;
    writeln!(out, "Utility Commands:")?;
    writeln!(out, "  {:<17} - Show this list of available tools", "list")?;
    writeln!(out, "  {:<17} - Check which tools are installed", "check")?;
    Ok(())
}

/// Availability of every registry entry, in registry order.
pub fn probe_registry(registry: &Registry) -> Vec<(&'static str, bool)> {
    registry
        .all()
        .iter()
        .map(|e| (e.descriptor.name, is_available(&e.descriptor)))
        .collect()
}

/// Informational report; never fails the process regardless of what it
/// finds. Built from the `probe_registry` snapshot, with a family
/// header wherever the (family-contiguous) registry order moves on.
pub fn print_check(registry: &Registry, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Checking installed tools...").context("writing check report")?;
    let probed = probe_registry(registry);
    let mut current: Option<Family> = None;
    for (entry, (name, available)) in registry.all().iter().zip(probed) {
        if current != Some(entry.family) {
            current = Some(entry.family);
            writeln!(out)?;
            writeln!(out, "{}:", entry.family.title())?;
        }
        write_check_line(out, name, available, "installed", "not found")?;
    }

    // These directories gate whole tool families, so they get their own
    // lines in addition to the per-tool ones.
    writeln!(out)?;
    writeln!(out, "Support files:")?;
    write_check_line(
        out,
        DIDIER_SUITE_DIR,
        didier_suite_present(),
        "found",
        "not found",
    )?;
    write_check_line(out, VOLATILITY_DIR, volatility_present(), "found", "not found")?;

    writeln!(out)?;
    writeln!(out, "Package managers:")?;
    write_check_line(out, "uv", resolves_on_path("uv"), "installed", "not found")?;

    Ok(())
}

fn write_check_line(
    out: &mut dyn Write,
    name: &str,
    present: bool,
    yes: &str,
    no: &str,
) -> Result<()> {
    if present {
        writeln!(out, "  ✓ {name} - {yes}")?;
    } else {
        writeln!(out, "  ✗ {name} - {no}")?;
    }
    Ok(())
}
