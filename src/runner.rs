//! Runs the demonstration sequence: eleven scenarios, fixed order, one
//! report line each.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::ScenarioError;
use crate::pause::InterruptGate;
use crate::scenarios;

/// Execute all eleven scenarios in order, reporting each outcome through the
/// console.
///
/// Classified failures never leave the scenario that produced them, so one
/// failing demonstration cannot abort the rest. The only errors that return
/// from here are unclassified ones, in practice a console that stopped
/// reading or writing.
pub fn run_all<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    gate: &InterruptGate,
) -> Result<(), ScenarioError> {
    let report = scenarios::read_named_file(console)?;
    console.report(&report)?;

    let report = scenarios::open_byte_stream(console)?;
    console.report(&report)?;

    let report = scenarios::decode_empty_buffer()?;
    console.report(&report)?;

    let report = scenarios::connect_database()?;
    console.report(&report)?;

    let report = scenarios::resolve_type_name(console)?;
    console.report(&report)?;

    let report = scenarios::divide_integers(console)?;
    console.report(&report)?;

    let report = scenarios::access_absent_reference()?;
    console.report(&report)?;

    let report = scenarios::index_fixed_buffer(console)?;
    console.report(&report)?;

    let report = scenarios::cast_incompatible_value()?;
    console.report(&report)?;

    let report = scenarios::pause_for_duration(console, gate)?;
    console.report(&report)?;

    let report = scenarios::parse_integer_token(console)?;
    console.report(&report)?;

    Ok(())
}
