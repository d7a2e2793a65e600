use std::{env, io};

use anyhow::Context;
use config::Config;
use env_logger::Env;
use libgame::{Game, seed::RandomSeeder};
use log::{debug, info};

mod cli;
mod config;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = match env::args().nth(1) {
        Some(config_path) if config_path != "-" => Config::load(config_path)?,
        _ => Config::default(),
    };
    info!("starting with {config:?}");

    let mut game = Game::new(config.world_size);

    let alive_cells = match config.rng_seed {
        Some(rng_seed) => game.seed(config.seed_zone_size, RandomSeeder::from_seed(rng_seed)),
        None => game.seed(config.seed_zone_size, RandomSeeder::new(rand::rng())),
    }
    .context("Couldn't seed world")?;

    let outcome = cli::run(&mut game, alive_cells, io::stdin().lock(), &mut io::stdout().lock())?;
    debug!("run ended: {outcome:?}");

    Ok(())
}
