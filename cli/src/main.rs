use std::io::{Read, Write};

use anyhow::{Context, Result};
use log::info;

use bspline::{evaluate_curve_with, EvalConfig, DEFAULT_DEGREE, DEFAULT_SAMPLES};

mod input;

fn config_from_args(matches: &clap::ArgMatches) -> Result<EvalConfig> {
    let mut config = EvalConfig::default();
    if let Some(d) = matches.value_of("degree") {
        config.degree = d.parse().with_context(|| format!("bad degree {d:?}"))?;
    }
    if let Some(n) = matches.value_of("samples") {
        config.samples = n.parse().with_context(|| format!("bad sample count {n:?}"))?;
    }
    config.validate()?;
    Ok(config)
}

fn read_input(path: Option<&str>) -> Result<String> {
    let mut text = String::new();
    match path {
        None | Some("-") => {
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Could not read stdin")?;
        }
        Some(path) => {
            text = std::fs::read_to_string(path)
                .with_context(|| format!("Could not open {path:?}"))?;
        }
    }
    Ok(text)
}

fn command<'a>(degree_help: &'a str, samples_help: &'a str) -> clap::Command<'a> {
    clap::Command::new("cli")
        .author("Matt Keeter <matt.j.keeter@gmail.com>")
        .about("Samples a clamped B-spline through a list of control points")
        .arg(
            clap::Arg::new("input")
                .takes_value(true)
                .help("File with one `x y` point per line (stdin if omitted or `-`)"),
        )
        .arg(
            clap::Arg::new("degree")
                .short('d')
                .long("degree")
                .takes_value(true)
                .help(degree_help),
        )
        .arg(
            clap::Arg::new("samples")
                .short('n')
                .long("samples")
                .takes_value(true)
                .help(samples_help),
        )
}

fn main() -> Result<()> {
    env_logger::init();

    let degree_help = format!("Polynomial degree of each segment [default: {DEFAULT_DEGREE}]");
    let samples_help = format!("Number of curve points to emit [default: {DEFAULT_SAMPLES}]");
    let matches = command(&degree_help, &samples_help).get_matches();

    let config = config_from_args(&matches)?;
    let text = read_input(matches.value_of("input"))?;
    let points = input::parse_points(&text)?;
    info!("Read {} control points", points.len());

    let curve = evaluate_curve_with(&points, &config).context("Could not evaluate curve")?;
    info!(
        "Evaluated {} curve points at degree {}",
        curve.len(),
        config.degree
    );

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(input::format_points(&curve).as_bytes())
        .context("Could not write output")?;
    Ok(())
}
