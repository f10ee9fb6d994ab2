use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use noughts_engine::Side;
use noughts_network::Network;
use noughts_training::Trainer;
use serde::{Deserialize, Serialize};

/// A trained network plus a summary of how it was trained.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkModel {
    pub name: String,
    pub trained_at: DateTime<Utc>,
    pub generations: usize,
    /// Side the network was trained to play.
    pub side: Side,
    /// Winning fitness of the last generation; absent if none ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_fitness: Option<f64>,
    pub final_mutability: f64,
    pub network: Network,
}

impl NetworkModel {
    pub fn from_trainer(name: String, trainer: &Trainer) -> Self {
        Self {
            name,
            trained_at: Utc::now(),
            generations: trainer.generation(),
            side: trainer.side(),
            final_fitness: trainer.record().last().map(|entry| entry.fitness),
            final_mutability: trainer.current().mutability(),
            network: trainer.current().clone(),
        }
    }

    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open network model file: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to read network model file: {}", path.display()))
    }

    /// Writes the model as pretty JSON to `path`, or to stdout if `None`.
    pub fn save(&self, path: Option<&Path>) -> anyhow::Result<()> {
        match path {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create network model file: {}", path.display())
                })?;
                self.write_json(BufWriter::new(file)).with_context(|| {
                    format!("Failed to write network model file: {}", path.display())
                })
            }
            None => self
                .write_json(io::stdout().lock())
                .context("Failed to write network model to stdout"),
        }
    }

    fn write_json<W>(&self, mut writer: W) -> anyhow::Result<()>
    where
        W: Write,
    {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
