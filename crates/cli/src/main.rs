#![deny(unsafe_code)]
//! CLI binary for the cielch colour engine.
//!
//! Subcommands:
//! - `inspect <colour>` — decompose a hex colour into LCH
//! - `make` — compose a colour from LCH components
//! - `adjust <colour>` — apply one perceptual adjustment
//! - `gradient <start> <end>` — print an LCH-interpolated ramp

mod error;

use cielch_core::{adjust, colour_from_lch, gradient, lch_from_colour, Clipped, Colour, Lch};
use clap::{Parser, Subcommand};
use error::CliError;
use std::process;

#[derive(Parser)]
#[command(name = "cielch", about = "CIE LCH colour engine CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decompose a colour into its LCH components.
    Inspect {
        /// Colour as a hex string ("#rrggbb" or "#rrggbbaa").
        colour: String,
    },
    /// Compose a colour from normalized LCH components.
    Make {
        /// Normalized lightness in [0, 1]; out-of-range values clamp.
        #[arg(short, long)]
        lightness: f64,

        /// Normalized chroma in [0, 1]; out-of-range values clamp.
        #[arg(short, long)]
        chroma: f64,

        /// Normalized hue in turns; values outside [0, 1] wrap.
        #[arg(long)]
        hue: f64,

        /// Alpha in [0, 1].
        #[arg(short, long, default_value_t = 1.0)]
        alpha: f64,
    },
    /// Apply one perceptual adjustment to a colour.
    Adjust {
        /// Colour as a hex string ("#rrggbb" or "#rrggbbaa").
        colour: String,

        /// Replace the normalized lightness.
        #[arg(long)]
        lightness: Option<f64>,

        /// Replace the normalized chroma.
        #[arg(long)]
        chroma: Option<f64>,

        /// Replace the normalized hue.
        #[arg(long)]
        hue: Option<f64>,

        /// Scale lightness by a factor.
        #[arg(long)]
        scale_lightness: Option<f64>,

        /// Scale chroma by a factor (0 gives the grey of equal lightness).
        #[arg(long)]
        scale_chroma: Option<f64>,

        /// Rotate the hue by this many turns.
        #[arg(long)]
        rotate: Option<f64>,

        /// Move lightness towards white by this amount.
        #[arg(long)]
        lighten: Option<f64>,

        /// Move lightness towards black by this amount.
        #[arg(long)]
        darken: Option<f64>,
    },
    /// Print a perceptually even ramp between two colours.
    Gradient {
        /// Start colour as a hex string.
        start: String,

        /// End colour as a hex string.
        end: String,

        /// Number of colours in the ramp, endpoints included.
        #[arg(short, long, default_value_t = 8)]
        steps: usize,
    },
}

type AdjustFn = fn(Colour, f64) -> Clipped;

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Inspect { colour } => {
            let colour = Colour::from_hex(&colour)?;
            let lch = lch_from_colour(colour);
            let native = lch.to_native();
            if cli.json {
                let info = serde_json::json!({
                    "colour": colour,
                    "lch": lch,
                    "native": { "l": native.l, "c": native.c, "h": native.h },
                    "alpha": colour.alpha(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", colour.to_hex());
                println!("  lch     l {:.4}  c {:.4}  h {:.4}", lch.l, lch.c, lch.h);
                println!("  native  L {:.2}  C {:.2}  H {:.1}", native.l, native.c, native.h);
                println!("  alpha   {:.3}", colour.alpha());
            }
        }
        Command::Make {
            lightness,
            chroma,
            hue,
            alpha,
        } => {
            for (name, value) in [
                ("--lightness", lightness),
                ("--chroma", chroma),
                ("--hue", hue),
                ("--alpha", alpha),
            ] {
                if !value.is_finite() {
                    return Err(CliError::Input(format!("{name} must be a finite number")));
                }
            }
            let clipped = colour_from_lch(Lch::new(lightness, chroma, hue), alpha);
            print_result(clipped, cli.json)?;
        }
        Command::Adjust {
            colour,
            lightness,
            chroma,
            hue,
            scale_lightness,
            scale_chroma,
            rotate,
            lighten,
            darken,
        } => {
            let colour = Colour::from_hex(&colour)?;
            let flags: [(&str, Option<f64>, AdjustFn); 8] = [
                ("--lightness", lightness, adjust::with_lightness),
                ("--chroma", chroma, adjust::with_chroma),
                ("--hue", hue, adjust::with_hue),
                ("--scale-lightness", scale_lightness, adjust::multiply_lightness),
                ("--scale-chroma", scale_chroma, adjust::multiply_chroma),
                ("--rotate", rotate, adjust::rotate_hue),
                ("--lighten", lighten, adjust::lighten),
                ("--darken", darken, adjust::darken),
            ];
            let requested: Vec<(&str, f64, AdjustFn)> = flags
                .into_iter()
                .filter_map(|(name, value, apply)| value.map(|v| (name, v, apply)))
                .collect();
            match requested.as_slice() {
                [(_, value, apply)] => {
                    if !value.is_finite() {
                        return Err(CliError::Input(
                            "adjustment values must be finite numbers".into(),
                        ));
                    }
                    print_result(apply(colour, *value), cli.json)?;
                }
                [] => {
                    return Err(CliError::Input(
                        "pass exactly one adjustment flag (--lightness, --chroma, --hue, \
                         --scale-lightness, --scale-chroma, --rotate, --lighten or --darken)"
                            .into(),
                    ));
                }
                several => {
                    let names: Vec<&str> = several.iter().map(|&(name, ..)| name).collect();
                    return Err(CliError::Input(format!(
                        "adjustment flags are mutually exclusive, got {}",
                        names.join(", ")
                    )));
                }
            }
        }
        Command::Gradient { start, end, steps } => {
            let start = Colour::from_hex(&start)?;
            let end = Colour::from_hex(&end)?;
            let ramp = gradient::steps(start, end, steps);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&ramp)?);
            } else {
                let mut clipped_count = 0;
                for entry in &ramp {
                    println!("{}", entry.colour.to_hex());
                    if entry.imaginary {
                        clipped_count += 1;
                    }
                }
                if clipped_count > 0 {
                    eprintln!(
                        "note: {clipped_count} of {} ramp colours fell outside the sRGB gamut and were clipped",
                        ramp.len()
                    );
                }
            }
        }
    }

    Ok(())
}

/// Prints a clipped conversion result; in human mode an out-of-gamut
/// request earns a note on stderr but still succeeds.
fn print_result(clipped: Clipped, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&clipped)?);
    } else {
        println!("{}", clipped.colour.to_hex());
        if clipped.imaginary {
            eprintln!("note: the requested colour sits outside the sRGB gamut; channels were clipped");
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
