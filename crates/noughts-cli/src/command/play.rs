use std::path::PathBuf;

use noughts_engine::{GameSeed, Opponent, SeededGame, Side};
use noughts_network::{Network, NetworkConfig};

use crate::model::network_model::NetworkModel;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Path to the model file (JSON format); a random network if omitted
    #[arg(long)]
    pub(super) model: Option<PathBuf>,
    /// Opponent policy (random or smart)
    #[arg(long, default_value = "smart")]
    pub(super) opponent: Opponent,
    /// Side the network plays (x moves first)
    #[arg(long, default_value = "x")]
    pub(super) side: Side,
    /// Seed for the opponent's random moves
    #[arg(long)]
    pub(super) seed: Option<GameSeed>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        model,
        opponent,
        side,
        seed,
    } = arg;

    let network = match model {
        Some(path) => NetworkModel::open(path)?.network,
        None => Network::random(&NetworkConfig::default())?,
    };
    let seed = seed.unwrap_or_else(rand::random);
    let mut game = SeededGame::with_seed(seed);

    println!("Network ({side}) vs {opponent} opponent, seed {seed}");
    println!();
    println!("{}", game.board());

    if *side == Side::O {
        play_opponent_turn(&mut game, *opponent);
    }
    while !game.board().is_terminal() {
        let Some(pos) = network.choose_move(game.board()) else {
            break;
        };
        game.play_at(pos);
        println!("network plays {pos}");
        println!("{}", game.board());
        play_opponent_turn(&mut game, *opponent);
    }

    let outcome = game.board().outcome();
    match outcome.winner() {
        Some(winner) if winner == *side => println!("Network wins."),
        Some(_) => println!("Network loses."),
        None => println!("Draw."),
    }
    Ok(())
}

fn play_opponent_turn(game: &mut SeededGame, opponent: Opponent) {
    if let Some(pos) = game.play_opponent(opponent) {
        println!("{opponent} plays {pos}");
        println!("{}", game.board());
    }
}
