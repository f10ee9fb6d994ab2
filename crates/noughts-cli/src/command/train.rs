use std::path::PathBuf;

use noughts_engine::Side;
use noughts_network::{MutationParams, Network, NetworkConfig};
use noughts_training::{GenerationReport, Trainer};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::model::network_model::NetworkModel;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Number of generations to run
    #[arg(long, default_value_t = 100)]
    pub(super) generations: usize,
    /// Seeded games per opponent for every candidate
    #[arg(long, default_value_t = 1000)]
    pub(super) games: usize,
    /// Mutants scored against the current network each generation
    #[arg(long, default_value_t = 100)]
    pub(super) mutants: usize,
    /// Comma separated layer sizes; the first and last must be 9
    #[arg(long, value_delimiter = ',', default_value = "9,9,9")]
    pub(super) layers: Vec<usize>,
    /// Bound on every weight and bias
    #[arg(long, default_value_t = 1.0)]
    pub(super) weight_bound: f64,
    /// Bound on the network's mutability
    #[arg(long, default_value_t = 2.0)]
    pub(super) mutability_bound: f64,
    /// Scale of the per-generation mutability drift
    #[arg(long, default_value_t = 0.1)]
    pub(super) mutability_step: f64,
    /// Side the network plays (x moves first)
    #[arg(long, default_value = "x")]
    pub(super) side: Side,
    /// Seed making the whole run reproducible
    #[arg(long)]
    pub(super) seed: Option<u64>,
    /// Name stored in the saved model
    #[arg(long, default_value = "noughts")]
    pub(super) name: String,
    /// Output file path
    #[arg(long)]
    pub(super) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let TrainArg {
        generations,
        games,
        mutants,
        layers,
        weight_bound,
        mutability_bound,
        mutability_step,
        side,
        seed,
        name,
        output,
    } = arg;
    anyhow::ensure!(*games > 0, "--games must be at least 1");

    let config = NetworkConfig {
        layers: layers.clone(),
        mutation: MutationParams {
            weight_bound: *weight_bound,
            mutability_bound: *mutability_bound,
            mutability_step: *mutability_step,
        },
    };
    let mut trainer = match seed {
        Some(seed) => {
            let mut rng = Pcg32::seed_from_u64(*seed);
            let network = Network::new(&config, &mut rng)?;
            Trainer::with_seed(network, rng.random())
        }
        None => Trainer::new(Network::random(&config)?),
    };
    trainer.set_side(*side);

    eprintln!("Training {:?} network as {side}:", config.layers);
    eprintln!("  {generations} generations, {games} games per opponent, {mutants} mutants");
    for _ in 0..*generations {
        let report = trainer.run_generation(*games, *mutants);
        print_report(&report);
    }
    eprintln!("Training completed.");

    let model = NetworkModel::from_trainer(name.clone(), &trainer);
    model.save(output.as_deref())?;

    eprintln!();
    eprintln!("Model saved successfully");
    if let Some(path) = &output {
        eprintln!("  Path: {}", path.display());
    }
    eprintln!("  Name: {}", model.name);
    eprintln!("  Trained at: {}", model.trained_at);
    eprintln!("  Generations: {}", model.generations);
    if let Some(fitness) = model.final_fitness {
        eprintln!("  Final fitness: {fitness:.3}");
    }
    eprintln!("  Final mutability: {:.3}", model.final_mutability);

    Ok(())
}

fn print_report(report: &GenerationReport) {
    let GenerationReport {
        generation,
        pool_size,
        selected_index,
        entry,
        fitness_stats,
        ..
    } = report;
    eprintln!("Generation #{generation}:");
    if *selected_index == 0 {
        eprintln!("  Selected:   parent (of {pool_size})");
    } else {
        eprintln!("  Selected:   mutant #{selected_index} (of {pool_size})");
    }
    eprintln!("  Fitness:    {:.3}", entry.fitness);
    eprintln!("  Mutability: {:.3}", entry.mutability);
    eprintln!("  Pool Fitness Stats:");
    eprintln!("    Min:    {:.3}", fitness_stats.min);
    eprintln!("    Max:    {:.3}", fitness_stats.max);
    eprintln!("    Mean:   {:.3}", fitness_stats.mean);
    eprintln!("    Stddev: {:.3}", fitness_stats.std_dev);
}
