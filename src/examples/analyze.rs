/*
Copyright 2021 BlackRock, Inc.

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Command-line front end for the quadratics library.
//!
//! Usage:
//!     quadratics analyze 1 -3 2
//!     quadratics from-peak --peak 1.5,-0.25 --point 2,0
//!     quadratics from-roots --roots 2,1 --point 0,2 --zero-terms explicit

use clap::{Parser, Subcommand};
use quadratics::quadratics::render;
use quadratics::{
    crossing_x_axis, crossing_y_axis, discriminant, find_function_from_crossing_x_with,
    find_function_from_peak_point_with, find_roots, optimum, peak_point, symmetry, Point,
    Quadratic, Settings, ZeroTerms,
};
use std::fmt::Display;
use std::process;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CYAN: &str = "\u{1b}[36m";
const RESET: &str = "\u{1b}[39m";

/// Properties of quadratic functions f(x) = ax² + bx + c
#[derive(Parser)]
#[command(name = "quadratics")]
#[command(version)]
#[command(about = "Roots, intercepts, and peak points of quadratic functions", long_about = None)]
struct Cli {
    /// Print plain text without terminal colors
    #[arg(long, global = true)]
    no_color: bool,

    /// How zero coefficients are rendered in function text (omit or explicit)
    #[arg(long, global = true, default_value_t = ZeroTerms::Omit)]
    zero_terms: ZeroTerms,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every property of ax² + bx + c
    Analyze {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },

    /// Find the function with a given peak point through an arbitrary point
    FromPeak {
        /// Peak point as x,y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        peak: Point,

        /// Arbitrary point on the curve as x,y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Point,
    },

    /// Find the function with given roots through an arbitrary point
    FromRoots {
        /// Roots as r1,r2
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        roots: (f64, f64),

        /// Arbitrary point on the curve as x,y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Point,
    },
}

fn parse_point(s: &str) -> Result<Point, String> {
    let mut parts = s.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => {
            let x = x.trim().parse::<f64>().map_err(|e| format!("bad x '{}': {}", x, e))?;
            let y = y.trim().parse::<f64>().map_err(|e| format!("bad y '{}': {}", y, e))?;
            Ok((x, y))
        }
        _ => Err(format!("expected a pair 'x,y', got '{}'", s)),
    }
}

/// Writes computed renderings to the terminal, optionally highlighted.
struct Printer {
    color: bool,
}

impl Printer {
    fn line(&self, label: &str, readable: impl Display) {
        if self.color {
            println!("{:<14} {}{}{}", label, CYAN, readable, RESET);
        } else {
            println!("{:<14} {}", label, readable);
        }
    }
}

type Report = Vec<(&'static str, String)>;

fn function_line(quad: &Quadratic, settings: &Settings) -> (&'static str, String) {
    debug!(a = quad.a, b = quad.b, c = quad.c, "rendering quadratic");
    (
        "function:",
        format!("f(x) = {}", render::function_text(quad, settings)),
    )
}

fn analyze(settings: &Settings, a: f64, b: f64, c: f64) -> quadratics::Result<Report> {
    debug!(a, b, c, "analyzing quadratic");
    Ok(vec![
        function_line(&Quadratic::new(a, b, c), settings),
        (
            "discriminant:",
            render::number(discriminant(a, b, c), settings),
        ),
        ("roots:", find_roots(a, b, c)?.to_string()),
        ("x-crossings:", crossing_x_axis(a, b, c)?.to_string()),
        ("y-crossing:", crossing_y_axis(a, b, c).to_string()),
        ("symmetry:", symmetry(a, b, c)?.to_string()),
        ("optimum:", optimum(a, b, c)?.to_string()),
        ("peak point:", peak_point(a, b, c)?.to_string()),
    ])
}

/// Computes the labelled lines printed for `command`.
fn report(command: &Commands, settings: &Settings) -> quadratics::Result<Report> {
    match *command {
        Commands::Analyze { a, b, c } => analyze(settings, a, b, c),
        Commands::FromPeak { peak, point } => {
            let calc = find_function_from_peak_point_with(peak, point, settings)?;
            Ok(vec![("function:", calc.readable().to_string())])
        }
        Commands::FromRoots { roots, point } => {
            let calc = find_function_from_crossing_x_with(roots, point, settings)?;
            Ok(vec![("function:", calc.readable().to_string())])
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quadratics=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let printer = Printer {
        color: !cli.no_color,
    };
    let settings = Settings::defaults().with_zero_terms(cli.zero_terms);

    match report(&cli.command, &settings) {
        Ok(lines) => {
            for (label, readable) in lines {
                printer.line(label, readable);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
