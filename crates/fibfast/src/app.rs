//! Application entry point and dispatch.

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::CommandFactory;
use tracing::{debug, info};

use fibfast_cli::completion::generate_completion;
use fibfast_cli::output::open_output;
use fibfast_cli::{presenter_for, ResultPresenter};
use fibfast_core::input::{parse_count, parse_index, parse_required_index, parse_value};

use crate::config::{AppConfig, Command};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let presenter = presenter_for(config.format, config.verbose, config.quiet, config.details);
    let mut out = open_output(config.output.as_deref()).with_context(|| {
        format!(
            "cannot open output file {}",
            config.output.as_deref().unwrap_or("-")
        )
    })?;

    dispatch(&config.command, presenter.as_ref(), &mut *out)?;
    out.flush()?;
    Ok(())
}

/// Execute one command, writing its results to `out`.
pub fn dispatch(
    command: &Command,
    presenter: &dyn ResultPresenter,
    out: &mut dyn Write,
) -> Result<()> {
    debug!(?command, "dispatching");

    match command {
        Command::Get { k } => {
            let k = parse_required_index("k", k.as_deref())?;
            let start = Instant::now();
            let state = fibfast_core::get(k);
            let elapsed = start.elapsed();
            info!(k, bits = state.number.bits(), ?elapsed, "get");
            presenter.present_state(out, &state, elapsed)?;
        }
        Command::Find { value } => {
            let value = parse_value(value.as_deref())?;
            let start = Instant::now();
            let state = fibfast_core::find(&value)?;
            let elapsed = start.elapsed();
            info!(index = state.index, ?elapsed, "find");
            presenter.present_state(out, &state, elapsed)?;
        }
        Command::Is { value } => {
            let value = parse_value(value.as_deref())?;
            let start = Instant::now();
            let member = fibfast_core::is(&value)?;
            let elapsed = start.elapsed();
            info!(member, ?elapsed, "is");
            presenter.present_membership(out, &value, member, elapsed)?;
        }
        Command::Iter { start, count } => {
            let start = start.as_deref().map(|k| parse_index("k", k)).transpose()?;
            let count = count.as_deref().map(parse_count).transpose()?;
            for state in fibfast_core::iterator(start, count) {
                presenter.present_item(out, &state)?;
            }
        }
        Command::Array { k0, k1 } => {
            let k0 = parse_required_index("k0", k0.as_deref())?;
            let k1 = parse_required_index("k1", k1.as_deref())?;
            for state in fibfast_core::array(k0, k1)? {
                presenter.present_item(out, &state)?;
            }
        }
        Command::Completion { shell } => {
            let mut cmd = AppConfig::command();
            generate_completion(&mut cmd, *shell, out);
        }
    }
    Ok(())
}
