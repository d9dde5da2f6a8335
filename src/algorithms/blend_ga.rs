//! Blend-crossover Genetic Algorithm
//!
//! A generational GA over a bounded scalar domain: tournament selection,
//! blend crossover, Gaussian mutation and elitism, run for a fixed number of
//! generations.
//!
//! Under a fixed seed the random stream is consumed in this order, and results
//! are reproducible only as long as it is preserved:
//!
//! 1. one uniform draw per individual to initialise the population;
//! 2. per offspring pair: `k` index draws for each of the two tournaments,
//!    one crossover gate draw, then for each child appended one mutation gate
//!    draw and, if the gate fires, one Gaussian draw.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GaConfig;
use crate::diagnostics::{EvolutionStats, GenerationStats, RunResult};
use crate::error::{EvoResult, EvolutionError};
use crate::fitness::benchmarks::SineWave;
use crate::fitness::traits::Fitness;
use crate::genome::bounds::Bounds;
use crate::genome::candidate::Candidate;
use crate::observer::{NoProgress, ProgressObserver};
use crate::operators::crossover::BlendCrossover;
use crate::operators::mutation::GaussianMutation;
use crate::operators::selection::TournamentSelection;
use crate::operators::traits::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Builder for BlendGA
pub struct BlendGABuilder<Fit> {
    config: GaConfig,
    fitness: Option<Fit>,
    parallel_evaluation: bool,
}

impl BlendGABuilder<()> {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: GaConfig::default(),
            fitness: None,
            parallel_evaluation: false,
        }
    }
}

impl Default for BlendGABuilder<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Fit> BlendGABuilder<Fit> {
    /// Replace the whole configuration
    pub fn config(mut self, config: GaConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.pop_size = size;
        self
    }

    /// Set the number of generations
    pub fn generations(mut self, generations: usize) -> Self {
        self.config.generations = generations;
        self
    }

    /// Set the crossover probability
    pub fn crossover_rate(mut self, rate: f64) -> Self {
        self.config.crossover_rate = rate;
        self
    }

    /// Set the mutation probability
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.config.mutation_rate = rate;
        self
    }

    /// Set the mutation standard deviation
    pub fn mutation_scale(mut self, scale: f64) -> Self {
        self.config.mutation_scale = scale;
        self
    }

    /// Set the number of elite individuals to preserve
    pub fn elitism_count(mut self, count: usize) -> Self {
        self.config.elitism_count = count;
        self
    }

    /// Set the tournament size
    pub fn tournament_size(mut self, k: usize) -> Self {
        self.config.tournament_k = k;
        self
    }

    /// Set the blend factor
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    /// Set the search domain
    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.config.bounds = bounds;
        self
    }

    /// Set the random seed used by [`BlendGA::run_seeded`]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Enable or disable parallel evaluation
    pub fn parallel_evaluation(mut self, enabled: bool) -> Self {
        self.parallel_evaluation = enabled;
        self
    }

    /// Set the fitness function
    pub fn fitness<NewFit>(self, fitness: NewFit) -> BlendGABuilder<NewFit>
    where
        NewFit: Fitness,
    {
        BlendGABuilder {
            config: self.config,
            fitness: Some(fitness),
            parallel_evaluation: self.parallel_evaluation,
        }
    }
}

impl<Fit: Fitness> BlendGABuilder<Fit> {
    /// Validate the configuration and build the BlendGA instance
    pub fn build(self) -> EvoResult<BlendGA<Fit>> {
        let fitness = self.fitness.ok_or_else(|| {
            EvolutionError::Configuration("Fitness function must be specified".to_string())
        })?;
        let mut ga = BlendGA::new(self.config, fitness)?;
        ga.parallel_evaluation = self.parallel_evaluation;
        Ok(ga)
    }
}

/// Blend-crossover Genetic Algorithm
///
/// Holds a validated configuration and the operators derived from it. Holds
/// no state between runs.
#[derive(Clone, Debug)]
pub struct BlendGA<Fit> {
    config: GaConfig,
    selection: TournamentSelection,
    crossover: BlendCrossover,
    mutation: GaussianMutation,
    fitness: Fit,
    parallel_evaluation: bool,
}

impl BlendGA<()> {
    /// Create a builder for BlendGA
    pub fn builder() -> BlendGABuilder<()> {
        BlendGABuilder::new()
    }
}

impl<Fit: Fitness> BlendGA<Fit> {
    /// Validate `config` and derive the operators from it
    pub fn new(config: GaConfig, fitness: Fit) -> EvoResult<Self> {
        config.validate()?;
        let selection = TournamentSelection::try_new(config.tournament_k)?;
        let crossover = BlendCrossover::try_new(config.alpha)?;
        let mutation = GaussianMutation::try_new(config.mutation_rate, config.mutation_scale)?;

        Ok(Self {
            config,
            selection,
            crossover,
            mutation,
            fitness,
            parallel_evaluation: false,
        })
    }

    /// The configuration this instance runs with
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The fitness function being maximized
    pub fn fitness(&self) -> &Fit {
        &self.fitness
    }

    /// Random stream for this configuration: seeded if `seed` is set,
    /// otherwise from operating-system entropy
    pub fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Run with the stream from [`rng`](Self::rng)
    pub fn run_seeded(&self) -> EvoResult<RunResult> {
        self.run(&mut self.rng())
    }

    /// Run the genetic algorithm
    pub fn run<R: Rng>(&self, rng: &mut R) -> EvoResult<RunResult> {
        self.run_with_observer(rng, NoProgress)
    }

    /// Run the genetic algorithm, reporting each generation to `observer`
    pub fn run_with_observer<R, O>(&self, rng: &mut R, mut observer: O) -> EvoResult<RunResult>
    where
        R: Rng,
        O: ProgressObserver,
    {
        let start_time = Instant::now();
        let total = self.config.generations;

        tracing::debug!(
            fitness = self.fitness.name(),
            pop_size = self.config.pop_size,
            generations = total,
            seed = ?self.config.seed,
            "starting run"
        );

        let mut population = Population::random(self.config.pop_size, &self.config.bounds, rng);
        let mut stats = EvolutionStats::new();
        let mut evaluations = 0;

        for generation in 0..total {
            population.set_generation(generation);
            evaluations += self.evaluate(&mut population)?;

            let gen_stats = GenerationStats::from_population(&population, generation, evaluations)
                .ok_or(EvolutionError::EmptyPopulation)?;
            tracing::trace!(
                generation,
                best = gen_stats.best_fitness,
                mean = gen_stats.mean_fitness,
                "evaluated generation"
            );
            if let Err(e) = observer.on_generation(&gen_stats, total) {
                tracing::warn!(generation, error = %e, "progress observer failed");
            }
            stats.record(gen_stats);

            population = self.next_generation(&population, rng)?;
        }

        // The loop leaves an unscored population behind; score it once more
        // to pick the final answer.
        evaluations += self.evaluate(&mut population)?;
        let best = population.best().ok_or(EvolutionError::EmptyPopulation)?;
        stats.set_runtime(start_time.elapsed());

        let result = RunResult::new(best.candidate, best.fitness_or_worst(), evaluations, stats);
        tracing::debug!(
            best_candidate = result.best_candidate,
            best_fitness = result.best_fitness,
            evaluations,
            runtime_ms = result.stats.total_runtime_ms,
            "run finished"
        );
        Ok(result)
    }

    /// Build the population that follows an evaluated `population`.
    ///
    /// Elites are copied through first, then offspring are appended until the
    /// next population has exactly `pop_size` members.
    pub fn next_generation<R: Rng>(
        &self,
        population: &Population,
        rng: &mut R,
    ) -> EvoResult<Population> {
        let size = self.config.pop_size;
        let bounds = &self.config.bounds;
        let next_gen = population.generation() + 1;
        let mut next = Population::with_capacity(size);

        for i in population.elite_indices(self.config.elitism_count) {
            next.push(Individual::new(population[i].candidate));
        }

        let pool = population.as_fitness_pairs();
        while next.len() < size {
            let (child1, child2) = self.offspring(&pool, rng)?;

            let child1 = self.mutation.mutate(child1, bounds, rng);
            next.push(Individual::new(child1));

            if next.len() < size {
                let child2 = self.mutation.mutate(child2, bounds, rng);
                next.push(Individual::new(child2));
            }
        }

        next.set_generation(next_gen);
        Ok(next)
    }

    /// Select two parents and, with probability `crossover_rate`, blend them.
    ///
    /// Returns the unmutated children; without crossover they are the
    /// parents themselves.
    pub fn offspring<R: Rng>(
        &self,
        pool: &[(Candidate, f64)],
        rng: &mut R,
    ) -> EvoResult<(Candidate, Candidate)> {
        let parent1 = pool[self.selection.select(pool, rng)?].0;
        let parent2 = pool[self.selection.select(pool, rng)?].0;

        if rng.gen::<f64>() < self.config.crossover_rate {
            Ok(self
                .crossover
                .crossover(parent1, parent2, &self.config.bounds, rng))
        } else {
            Ok((parent1, parent2))
        }
    }

    fn evaluate(&self, population: &mut Population) -> EvoResult<usize> {
        if self.parallel_evaluation {
            population.evaluate_parallel(&self.fitness)
        } else {
            population.evaluate(&self.fitness)
        }
    }
}

/// Run the sine-wave benchmark with `config`, seeding from `config.seed`
pub fn run_ga(config: &GaConfig) -> EvoResult<RunResult> {
    run_ga_with_observer(config, NoProgress)
}

/// [`run_ga`] with a progress observer
pub fn run_ga_with_observer<O: ProgressObserver>(
    config: &GaConfig,
    observer: O,
) -> EvoResult<RunResult> {
    let ga = BlendGA::new(config.clone(), SineWave::new())?;
    ga.run_with_observer(&mut ga.rng(), observer)
}
