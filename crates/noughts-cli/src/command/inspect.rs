use std::path::PathBuf;

use noughts_engine::{Board, Position};
use noughts_network::{Network, NetworkConfig, preference_order};

use crate::model::network_model::NetworkModel;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct InspectArg {
    /// Path to the model file (JSON format); a random network if omitted
    pub(super) model_path: Option<PathBuf>,
}

pub(crate) fn run(arg: &InspectArg) -> anyhow::Result<()> {
    let InspectArg { model_path } = arg;

    let mut network = match model_path {
        Some(path) => {
            let model = NetworkModel::open(path)?;
            println!("Name: {}", model.name);
            println!("Trained at: {}", model.trained_at);
            println!("Generations: {}", model.generations);
            println!("Side: {}", model.side);
            if let Some(fitness) = model.final_fitness {
                println!("Final fitness: {fitness:.3}");
            }
            model.network
        }
        None => Network::random(&NetworkConfig::default())?,
    };

    let params = network.mutation_params();
    println!("Layers: {:?}", network.layer_sizes());
    println!("Mutability: {:.3}", network.mutability());
    println!(
        "Bounds: weight ±{}, mutability ±{}, step {}",
        params.weight_bound, params.mutability_bound, params.mutability_step
    );

    let outputs = network.activate(&Board::new().input_vector());
    let last = network.layers().len() - 1;
    for (i, layer) in network.layers().iter().enumerate() {
        let kind = match i {
            0 => " (input)",
            _ if i == last => " (output)",
            _ => "",
        };
        println!();
        println!("Layer {i}{kind}:");
        for (j, node) in layer.iter().enumerate() {
            if i == 0 {
                println!("  {j:2}: value {:+.3}", node.value());
            } else {
                println!(
                    "  {j:2}: value {:+.3} bias {:+.3} weights {:+.3?}",
                    node.value(),
                    node.bias(),
                    node.weights()
                );
            }
        }
    }

    println!();
    println!("Preferred opening moves:");
    for index in preference_order(&outputs) {
        println!("  {} => {:+.3}", Position::from_input_index(index), outputs[index]);
    }
    Ok(())
}
