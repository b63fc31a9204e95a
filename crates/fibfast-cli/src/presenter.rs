//! Result presenters: human-readable text and JSON lines.

use std::io::{self, Write};
use std::time::Duration;

use console::style;
use num_bigint::BigInt;
use serde::Serialize;

use fibfast_core::FibState;

use crate::output::{format_duration, format_number, format_result};
use crate::ui::is_color_disabled;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Trait for presenting lookup results to the user.
pub trait ResultPresenter {
    /// Present the single state returned by `get` or `find`.
    fn present_state(
        &self,
        out: &mut dyn Write,
        state: &FibState,
        elapsed: Duration,
    ) -> io::Result<()>;

    /// Present the answer of a membership test.
    fn present_membership(
        &self,
        out: &mut dyn Write,
        value: &BigInt,
        member: bool,
        elapsed: Duration,
    ) -> io::Result<()>;

    /// Present one element of a streamed sequence.
    fn present_item(&self, out: &mut dyn Write, state: &FibState) -> io::Result<()>;
}

/// Build the presenter for `format`.
#[must_use]
pub fn presenter_for(
    format: OutputFormat,
    verbose: bool,
    quiet: bool,
    details: bool,
) -> Box<dyn ResultPresenter> {
    match format {
        OutputFormat::Text => Box::new(TextPresenter::new(verbose, quiet, details)),
        OutputFormat::Json => Box::new(JsonPresenter::new(details)),
    }
}

/// Human-readable presenter.
pub struct TextPresenter {
    verbose: bool,
    quiet: bool,
    details: bool,
}

impl TextPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, details: bool) -> Self {
        Self {
            verbose,
            quiet,
            details,
        }
    }

    fn label(&self, index: u64) -> String {
        let text = format!("F({})", format_number(index));
        if is_color_disabled() {
            text
        } else {
            style(text).cyan().bold().to_string()
        }
    }
}

impl ResultPresenter for TextPresenter {
    fn present_state(
        &self,
        out: &mut dyn Write,
        state: &FibState,
        elapsed: Duration,
    ) -> io::Result<()> {
        if self.quiet {
            return writeln!(out, "{}", state.number);
        }

        writeln!(
            out,
            "{} = {}",
            self.label(state.index),
            format_result(&state.number, self.verbose)
        )?;

        if self.details {
            writeln!(
                out,
                "{} = {}",
                self.label(state.index + 1),
                format_result(&state.next, self.verbose)
            )?;
            writeln!(out, "Result bits: {}", state.number.bits())?;
            writeln!(out, "Result digits: {}", state.number.to_string().len())?;
            writeln!(out, "Duration: {}", format_duration(elapsed))?;
        }
        Ok(())
    }

    fn present_membership(
        &self,
        out: &mut dyn Write,
        _value: &BigInt,
        member: bool,
        elapsed: Duration,
    ) -> io::Result<()> {
        writeln!(out, "{member}")?;
        if self.details && !self.quiet {
            writeln!(out, "Duration: {}", format_duration(elapsed))?;
        }
        Ok(())
    }

    fn present_item(&self, out: &mut dyn Write, state: &FibState) -> io::Result<()> {
        if self.quiet {
            writeln!(out, "{}", state.number)
        } else {
            writeln!(
                out,
                "{} = {}",
                self.label(state.index),
                format_result(&state.number, self.verbose)
            )
        }
    }
}

/// JSON-lines presenter. Big integers are emitted as decimal strings.
pub struct JsonPresenter {
    details: bool,
}

#[derive(Serialize)]
struct TimedState<'a> {
    #[serde(flatten)]
    state: &'a FibState,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_ms: Option<f64>,
}

#[derive(Serialize)]
struct Membership {
    value: String,
    is_fibonacci: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_ms: Option<f64>,
}

impl JsonPresenter {
    #[must_use]
    pub fn new(details: bool) -> Self {
        Self { details }
    }

    fn elapsed_ms(&self, elapsed: Duration) -> Option<f64> {
        self.details.then(|| elapsed.as_secs_f64() * 1000.0)
    }

    fn write_line<T: Serialize>(out: &mut dyn Write, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut *out, value)?;
        writeln!(out)
    }
}

impl ResultPresenter for JsonPresenter {
    fn present_state(
        &self,
        out: &mut dyn Write,
        state: &FibState,
        elapsed: Duration,
    ) -> io::Result<()> {
        Self::write_line(
            out,
            &TimedState {
                state,
                elapsed_ms: self.elapsed_ms(elapsed),
            },
        )
    }

    fn present_membership(
        &self,
        out: &mut dyn Write,
        value: &BigInt,
        member: bool,
        elapsed: Duration,
    ) -> io::Result<()> {
        Self::write_line(
            out,
            &Membership {
                value: value.to_string(),
                is_fibonacci: member,
                elapsed_ms: self.elapsed_ms(elapsed),
            },
        )
    }

    fn present_item(&self, out: &mut dyn Write, state: &FibState) -> io::Result<()> {
        Self::write_line(
            out,
            &TimedState {
                state,
                elapsed_ms: None,
            },
        )
    }
}
