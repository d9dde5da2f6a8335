//! Command-line driver for the blend-crossover GA
//!
//! Runs the sine-wave benchmark, prints progress and the final answer, and
//! optionally draws the fitness history as a text chart.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use blend_ga::prelude::*;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Maximize x·sin(10πx) + 1 on a bounded interval with a genetic algorithm
#[derive(Parser, Debug)]
#[command(name = "blend-ga", version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON file with configuration fields, used instead of the seeded
    /// demonstration settings; flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Population size
    #[arg(long)]
    pop_size: Option<usize>,

    /// Number of generations
    #[arg(long)]
    generations: Option<usize>,

    /// Crossover probability
    #[arg(long)]
    crossover_rate: Option<f64>,

    /// Mutation probability
    #[arg(long)]
    mutation_rate: Option<f64>,

    /// Mutation standard deviation
    #[arg(long)]
    mutation_scale: Option<f64>,

    /// Number of elites copied into each new generation
    #[arg(long)]
    elitism_count: Option<usize>,

    /// Tournament size
    #[arg(long)]
    tournament_k: Option<usize>,

    /// Blend factor
    #[arg(long)]
    alpha: Option<f64>,

    /// Lower end of the search domain
    #[arg(long, allow_hyphen_values = true)]
    lower: Option<f64>,

    /// Upper end of the search domain
    #[arg(long, allow_hyphen_values = true)]
    upper: Option<f64>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Draw the fitness history after the run
    #[arg(long)]
    plot: bool,
}

impl Cli {
    fn to_config(&self) -> Result<GaConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                GaConfig::from_json(&text)?
            }
            None => GaConfig::reference(),
        };

        if let Some(v) = self.pop_size {
            config.pop_size = v;
        }
        if let Some(v) = self.generations {
            config.generations = v;
        }
        if let Some(v) = self.crossover_rate {
            config.crossover_rate = v;
        }
        if let Some(v) = self.mutation_rate {
            config.mutation_rate = v;
        }
        if let Some(v) = self.mutation_scale {
            config.mutation_scale = v;
        }
        if let Some(v) = self.elitism_count {
            config.elitism_count = v;
        }
        if let Some(v) = self.tournament_k {
            config.tournament_k = v;
        }
        if let Some(v) = self.alpha {
            config.alpha = v;
        }
        if self.lower.is_some() || self.upper.is_some() {
            config.bounds = Bounds::try_new(
                self.lower.unwrap_or(config.bounds.min),
                self.upper.unwrap_or(config.bounds.max),
            )?;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = cli.to_config()?;
    let ga = BlendGA::new(config, SineWave::new())?;
    let mut rng = ga.rng();

    let result = if cli.json {
        ga.run_with_observer(&mut rng, TracingProgress)?
    } else {
        ga.run_with_observer(&mut rng, WriterProgress::new(io::stdout()))?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("\nFinal best solution:");
        println!(
            "x = {:.6}, fitness = {:.6}",
            result.best_candidate, result.best_fitness
        );
        tracing::info!("{}", result.summary());
    }

    if cli.plot {
        let mut chart = AsciiPlot::new(io::stdout());
        render_best_effort(Some(&mut chart), &result);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(args: &[&str]) -> GaConfig {
        let cli = Cli::parse_from(std::iter::once("blend-ga").chain(args.iter().copied()));
        cli.to_config().unwrap()
    }

    #[test]
    fn test_bare_invocation_runs_reference_settings() {
        assert_eq!(config_from(&[]), GaConfig::reference());
    }

    #[test]
    fn test_flags_override_reference_settings() {
        let config = config_from(&["--pop-size", "30", "--seed", "7", "--lower", "-2"]);

        assert_eq!(config.pop_size, 30);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.bounds, Bounds::new(-2.0, 2.0));
        assert_eq!(config.generations, GaConfig::reference().generations);
    }

    #[test]
    fn test_invalid_flags_are_rejected() {
        let cli = Cli::parse_from(["blend-ga", "--tournament-k", "0"]);
        assert!(cli.to_config().is_err());
    }
}
