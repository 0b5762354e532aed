use arcade_core::config::load_or_default;
use arcade_term::{init_logging, run, GameArgs};
use dino::{DinoConfig, DinoGame};
use std::error::Error;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    let args = GameArgs::parse_for(
        "dino",
        "Jump over the cacti. Space jumps, R restarts, P pauses, Q quits.",
    );
    init_logging(args.verbosity(), args.log_file.as_deref())?;

    let config: DinoConfig = load_or_default(args.config.as_ref())?;
    config.validate()?;

    let rng = args.rng();
    info!(seed = rng.state(), "dino starting");
    let mut game = DinoGame::new(config, rng);

    let summary = run(&mut game, &args.run_options())?;
    println!(
        "Cleared {} cacti (best {}, {} rounds)",
        summary.score, summary.best_score, summary.rounds
    );
    Ok(())
}
