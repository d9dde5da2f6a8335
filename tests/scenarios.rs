//! End-to-end runs of the blend-crossover GA

use blend_ga::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn reference_run_is_reproducible() {
    let config = GaConfig::reference();

    let first = run_ga(&config).unwrap();
    let second = run_ga(&config).unwrap();

    assert_eq!(first.best_candidate.to_bits(), second.best_candidate.to_bits());
    assert_eq!(first.best_fitness.to_bits(), second.best_fitness.to_bits());
    assert_eq!(first.history_best, second.history_best);
    assert_eq!(first.history_mean, second.history_mean);
    assert_eq!(first.history_best.len(), 120);
    assert!(first.best_fitness > 2.4, "got {}", first.best_fitness);
}

#[test]
fn different_seeds_diverge() {
    let a = run_ga(&GaConfig {
        seed: Some(1),
        ..GaConfig::default()
    })
    .unwrap();
    let b = run_ga(&GaConfig {
        seed: Some(2),
        ..GaConfig::default()
    })
    .unwrap();

    assert_ne!(a.history_mean, b.history_mean);
}

#[test]
fn parallel_evaluation_does_not_change_results() {
    let sequential = BlendGA::builder()
        .config(GaConfig::reference())
        .fitness(SineWave::new())
        .build()
        .unwrap()
        .run_seeded()
        .unwrap();
    let parallel = BlendGA::builder()
        .config(GaConfig::reference())
        .parallel_evaluation(true)
        .fitness(SineWave::new())
        .build()
        .unwrap()
        .run_seeded()
        .unwrap();

    assert_eq!(sequential.history_best, parallel.history_best);
    assert_eq!(sequential.best_candidate, parallel.best_candidate);
}

#[test]
fn single_individual_population() {
    let config = GaConfig {
        pop_size: 1,
        generations: 10,
        elitism_count: 1,
        tournament_k: 1,
        seed: Some(5),
        ..GaConfig::default()
    };
    let result = run_ga(&config).unwrap();

    assert_eq!(result.history_best.len(), 10);
    assert!(result.history_best.iter().all(|&b| b == result.best_fitness));
    assert_eq!(result.history_best, result.history_mean);
    assert_eq!(result.evaluations, 11);
}

#[test]
fn odd_population_with_even_remainder() {
    let ga = BlendGA::builder()
        .population_size(9)
        .generations(25)
        .elitism_count(2)
        .fitness(SineWave::new())
        .build()
        .unwrap();
    let mut recorder = HistoryRecorder::new();
    let mut rng = StdRng::seed_from_u64(21);

    let result = ga.run_with_observer(&mut rng, &mut recorder).unwrap();

    // 9 evaluations per generation means every generation had exactly 9 members
    for (g, stats) in recorder.stats.iter().enumerate() {
        assert_eq!(stats.evaluations, 9 * (g + 1));
    }
    assert_eq!(result.evaluations, 9 * 26);
}

#[test]
fn no_crossover_no_mutation_only_resamples_initial_values() {
    let ga = BlendGA::builder()
        .population_size(15)
        .generations(30)
        .crossover_rate(0.0)
        .mutation_rate(0.0)
        .elitism_count(0)
        .fitness(SineWave::new())
        .build()
        .unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    let initial = Population::random(15, &Bounds::default_domain(), &mut rng.clone());

    let result = ga.run(&mut rng).unwrap();

    assert!(initial.candidates().contains(&result.best_candidate));
}

#[test]
fn custom_fitness_closure_and_bounds() {
    // concave parabola peaking at x = 3
    let ga = BlendGA::builder()
        .population_size(40)
        .generations(60)
        .bounds(Bounds::new(0.0, 10.0))
        .mutation_scale(0.2)
        .seed(3)
        .fitness(|x: f64| -(x - 3.0).powi(2))
        .build()
        .unwrap();

    let result = ga.run_seeded().unwrap();

    assert!((result.best_candidate - 3.0).abs() < 0.1);
    assert!(result.best_fitness <= 0.0);
}

#[test]
fn optimum_on_the_boundary_is_reachable() {
    let ga = BlendGA::builder()
        .population_size(20)
        .generations(40)
        .mutation_rate(0.5)
        .mutation_scale(0.5)
        .seed(4)
        .fitness(|x: f64| x)
        .build()
        .unwrap();

    let result = ga.run_seeded().unwrap();

    assert_eq!(result.best_candidate, 2.0);
}

#[test]
fn invalid_configurations_fail_before_running() {
    let bad = [
        GaConfig {
            pop_size: 0,
            ..GaConfig::default()
        },
        GaConfig {
            generations: 0,
            ..GaConfig::default()
        },
        GaConfig {
            crossover_rate: 2.0,
            ..GaConfig::default()
        },
        GaConfig {
            mutation_rate: -1.0,
            ..GaConfig::default()
        },
        GaConfig {
            elitism_count: 51,
            ..GaConfig::default()
        },
        GaConfig {
            tournament_k: 51,
            ..GaConfig::default()
        },
    ];

    for config in bad {
        let result = BlendGA::new(config, SineWave::new());
        assert!(matches!(result, Err(EvolutionError::Configuration(_))));
    }
}

#[test]
fn failing_observer_does_not_abort_run() {
    struct Exploding;
    impl ProgressObserver for Exploding {
        fn on_generation(
            &mut self,
            _: &GenerationStats,
            _: usize,
        ) -> Result<(), ObserverError> {
            Err(ObserverError::Render("boom".to_string()))
        }
    }

    let ga = BlendGA::builder()
        .generations(10)
        .fitness(SineWave::new())
        .build()
        .unwrap();
    let mut rng = StdRng::seed_from_u64(10);
    let mut replay = rng.clone();

    let with_failures = ga.run_with_observer(&mut rng, Exploding).unwrap();
    let quiet = ga.run(&mut replay).unwrap();

    assert_eq!(with_failures.history_best, quiet.history_best);
    assert_eq!(with_failures.best_candidate, quiet.best_candidate);
}

#[test]
fn progress_lines_and_plot() {
    let config = GaConfig {
        generations: 30,
        seed: Some(6),
        ..GaConfig::default()
    };
    let mut progress = WriterProgress::new(Vec::new());
    let result = run_ga_with_observer(&config, &mut progress).unwrap();

    let out = String::from_utf8(progress.into_inner()).unwrap();
    // generations 0, 3, ..., 27 plus the last one (29)
    assert_eq!(out.lines().count(), 11);
    assert!(out.lines().last().unwrap().starts_with("Gen  29 : best = "));

    let mut chart = AsciiPlot::new(Vec::new());
    assert!(render_best_effort(Some(&mut chart), &result));
    assert!(!chart.into_inner().is_empty());
}

#[test]
fn result_serializes_to_json() {
    let result = run_ga(&GaConfig {
        generations: 3,
        pop_size: 5,
        seed: Some(0),
        ..GaConfig::default()
    })
    .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["history_best"].as_array().unwrap().len(), 3);
    assert_eq!(json["generations"], 3);

    let back: RunResult = serde_json::from_value(json).unwrap();
    assert_eq!(back.history_mean, result.history_mean);
}

#[test]
fn unseeded_runs_still_complete() {
    let result = run_ga(&GaConfig {
        generations: 5,
        ..GaConfig::default()
    })
    .unwrap();
    assert_eq!(result.history_best.len(), 5);
}
