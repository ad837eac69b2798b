//! # Bodymass CLI Application
//!
//! Terminal front-end for the BMI calculator. Weight and height come from
//! positional arguments; any that are missing are prompted for on stdin.
//!
//! ```text
//! $ bmi 70 175
//! Your BMI is: 22.9
//! $ bmi --category 45 160
//! Your BMI is: 17.6
//! Category: Underweight (below 18.5)
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use bmi_core::{calculate, BmiInput, BmiResult, CalcResult, CalculatorSettings, RoundingMode};
use clap::{ArgAction, Parser};
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "bmi", version, about = "Compute body mass index", allow_negative_numbers = true)]
struct Cli {
    /// Weight in kilograms (prompted for when omitted)
    weight_kg: Option<String>,

    /// Height in centimeters (prompted for when omitted)
    height_cm: Option<String>,

    /// Rounding mode for the reported value: half-away-from-zero or half-even
    #[arg(short, long, default_value_t = RoundingMode::HalfAwayFromZero)]
    rounding: RoundingMode,

    /// Also print the WHO weight category
    #[arg(long)]
    category: bool,

    /// Print the full result (or error) as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn settings(&self) -> CalculatorSettings {
        CalculatorSettings::default()
            .with_rounding(self.rounding)
            .with_category(self.category)
    }

    fn run(self) -> ExitCode {
        setup_logging(self.verbose);

        let settings = self.settings();
        let stdin = io::stdin();
        let stdout = io::stdout();
        let stderr = io::stderr();

        let (weight, height) = match resolve_inputs(
            self.weight_kg,
            self.height_cm,
            &mut stdin.lock(),
            &mut stdout.lock(),
        ) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                return ExitCode::FAILURE;
            }
        };

        let outcome =
            BmiInput::parse(&weight, &height).and_then(|input| calculate(&input, &settings));

        match report(&outcome, &settings, self.json, &mut stdout.lock(), &mut stderr.lock()) {
            Ok(()) if outcome.is_ok() => ExitCode::SUCCESS,
            Ok(()) => ExitCode::FAILURE,
            Err(e) => {
                eprintln!("Error writing output: {}", e);
                ExitCode::FAILURE
            }
        }
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn prompt_line<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Fill in whichever of weight/height was not given on the command line.
fn resolve_inputs<R: BufRead, W: Write>(
    weight: Option<String>,
    height: Option<String>,
    input: &mut R,
    out: &mut W,
) -> io::Result<(String, String)> {
    let weight = match weight {
        Some(w) => w,
        None => prompt_line("Enter weight (kg): ", input, out)?,
    };
    let height = match height {
        Some(h) => h,
        None => prompt_line("Enter height (cm): ", input, out)?,
    };
    debug!(%weight, %height, "resolved inputs");
    Ok((weight, height))
}

/// Write the outcome of a calculation for a person (or, with `json`, a program).
fn report<O: Write, E: Write>(
    outcome: &CalcResult<BmiResult>,
    settings: &CalculatorSettings,
    json: bool,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    match outcome {
        Ok(result) => {
            info!(bmi = result.bmi, category = %result.category, "calculation succeeded");
            if json {
                writeln!(out, "{}", to_json(result)?)?;
                return Ok(());
            }
            writeln!(out, "{}", result.message())?;
            if settings.include_category {
                writeln!(
                    out,
                    "Category: {} ({})",
                    result.category,
                    result.category.range_label()
                )?;
            }
        }
        Err(e) => {
            if json {
                writeln!(err, "{}", to_json(e)?)?;
                return Ok(());
            }
            writeln!(err, "{}", e.user_message())?;
            for problem in e.problems() {
                writeln!(err, "  {}: {}", problem.field, problem.reason)?;
            }
        }
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

fn main() -> ExitCode {
    Cli::parse().run()
}
