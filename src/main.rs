// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end for hypersphere patterns.
//!
//! ```text
//! hypersphere points -d 3 --canonical 6 4
//! hypersphere points --format json 5 3
//! hypersphere render 12 8 3
//! hypersphere summary -d 4 5 2
//! ```
//!
//! Logging goes to stderr; `RUST_LOG` overrides `--log-level`.

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use hypersphere_pattern::{build_hypersphere, Coord, LayerIndex, PatternError, PatternSet, Point};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hypersphere")]
#[command(about = "Exact integer-lattice hyperspheres, optionally layered")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Command {
    /// List every point with its layer
    Points {
        #[command(flatten)]
        pattern: PatternArgs,

        /// Only list canonical orbit representatives
        #[arg(long)]
        canonical: bool,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Draw the pattern (or its slice through the center) as a 2-D grid
    Render {
        #[command(flatten)]
        pattern: PatternArgs,
    },
    /// Print point counts per layer and build statistics
    Summary {
        #[command(flatten)]
        pattern: PatternArgs,
    },
}

#[derive(Args)]
struct PatternArgs {
    /// Space dimension
    #[arg(short, long, default_value_t = 2)]
    dimension: usize,

    /// Shell radii, outermost first
    #[arg(default_values_t = [12], allow_negative_numbers = true)]
    radii: Vec<Coord>,
}

impl PatternArgs {
    fn build(&self) -> Result<PatternSet, PatternError> {
        info!(dimension = self.dimension, radii = ?self.radii, "building pattern");
        build_hypersphere(self.dimension, &self.radii)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct Entry<'a> {
    point: &'a Point,
    layer: LayerIndex,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            if err.downcast_ref::<PatternError>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Command) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match command {
        Command::Points {
            pattern,
            canonical,
            format,
        } => {
            let set = pattern.build()?;
            let entries: Vec<Entry<'_>> = if canonical {
                set.canonical_points()
                    .map(|(point, layer)| Entry { point, layer })
                    .collect()
            } else {
                set.iter().map(|(point, layer)| Entry { point, layer }).collect()
            };
            match format {
                Format::Text => {
                    for entry in &entries {
                        writeln!(out, "{} {}", entry.point, entry.layer)?;
                    }
                }
                Format::Json => {
                    serde_json::to_writer_pretty(&mut out, &entries)
                        .context("writing JSON output")?;
                    writeln!(out)?;
                }
            }
        }
        Command::Render { pattern } => {
            let set = pattern.build()?;
            write!(out, "{}", render(&set))?;
        }
        Command::Summary { pattern } => {
            let set = pattern.build()?;
            writeln!(out, "dimension: {}", set.dimension())?;
            writeln!(out, "points:    {}", set.len())?;
            let sizes = set.layer_sizes();
            for (layer, (size, radius)) in sizes.iter().zip(set.radii().iter()).enumerate() {
                writeln!(out, "layer {:>2} (radius {:>3}): {}", layer, radius, size)?;
            }
            writeln!(out, "canonical: {}", set.canonical_points().count())?;
            writeln!(out, "{}", set.statistics())?;
        }
    }

    out.flush().context("flushing output")?;
    Ok(())
}

/// Point of the rendered plane at grid position `(x, y)`.
///
/// Higher axes are pinned to 0; a 1-D pattern only has the row `y = 0`.
fn plane_point(dimension: usize, x: Coord, y: Coord) -> Option<Point> {
    if dimension == 1 {
        return (y == 0).then(|| Point::from([x]));
    }
    let mut coords = vec![0; dimension];
    coords[0] = x;
    coords[1] = y;
    Some(Point::new(coords))
}

/// Grid picture of the plane through the center, one cell per point.
///
/// Members show their two-digit layer; empty cells show the axes (`|`, `--`),
/// the diagonals (`/`, `\`) or a dot.
fn render(set: &PatternSet) -> String {
    let radius = set.radii().outer();
    let span = -radius - 1..=radius + 1;
    let mut grid = String::new();

    let ruler = |grid: &mut String| {
        grid.push_str("# ");
        for x in span.clone() {
            let _ = write!(grid, " {}", x.abs() % 10);
        }
        grid.push('\n');
    };

    ruler(&mut grid);
    for y in span.clone().rev() {
        let _ = write!(grid, "#{}", y.abs() % 10);
        for x in span.clone() {
            let layer = plane_point(set.dimension(), x, y).and_then(|p| set.layer_of(&p).ok());
            match layer {
                Some(layer) => {
                    let _ = write!(grid, "{:02}", layer.value());
                }
                None if x % 10 == 0 => grid.push_str(" |"),
                None if y % 10 == 0 => grid.push_str("--"),
                None if x == y => grid.push_str(" /"),
                None if x == -y => grid.push_str(" \\"),
                None => grid.push_str(" ."),
            }
        }
        let _ = writeln!(grid, " {}", y.abs() % 10);
    }
    ruler(&mut grid);
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_unit_circle() {
        let set = build_hypersphere(2, &[1]).unwrap();
        let expected = "\
#  2 1 0 1 2
#2 \\ . | . / 2
#1 .000000 . 1
#0--000000-- 0
#1 .000000 . 1
#2 / . | . \\ 2
#  2 1 0 1 2
";
        assert_eq!(render(&set), expected);
    }

    #[test]
    fn test_render_one_dimension() {
        let set = build_hypersphere(1, &[1]).unwrap();
        let picture = render(&set);
        let rows: Vec<&str> = picture.lines().collect();
        assert_eq!(rows[3], "#0--000000-- 0");
        // Only the row y = 0 exists; the rest is background
        assert_eq!(rows[2], "#1 . \\ | / . 1");
    }

    #[test]
    fn test_plane_point_pins_higher_axes() {
        assert_eq!(plane_point(4, 2, -1), Some(Point::from([2, -1, 0, 0])));
        assert_eq!(plane_point(1, 3, 1), None);
    }

    #[test]
    fn test_cli_parses_negative_radii() {
        let cli = Cli::try_parse_from(["hypersphere", "summary", "-d", "3", "--", "4", "-1"]).unwrap();
        match cli.command {
            Command::Summary { pattern } => {
                assert_eq!(pattern.dimension, 3);
                assert_eq!(pattern.radii, vec![4, -1]);
                assert!(matches!(
                    pattern.build(),
                    Err(PatternError::InvalidInput(_))
                ));
            }
            _ => panic!("expected summary"),
        }
    }

    #[test]
    fn test_cli_default_radius() {
        let cli = Cli::try_parse_from(["hypersphere", "render"]).unwrap();
        match cli.command {
            Command::Render { pattern } => assert_eq!(pattern.radii, vec![12]),
            _ => panic!("expected render"),
        }
    }
}
