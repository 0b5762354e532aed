use arcade_core::config::load_or_default;
use arcade_term::{init_logging, run, GameArgs};
use snake::{SnakeConfig, SnakeGame};
use std::error::Error;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    let args = GameArgs::parse_for(
        "snake",
        "Eat the apples without hitting a wall or yourself. Arrows steer, R restarts, P pauses, Q quits.",
    );
    init_logging(args.verbosity(), args.log_file.as_deref())?;

    let config: SnakeConfig = load_or_default(args.config.as_ref())?;
    config.validate()?;

    let rng = args.rng();
    info!(seed = rng.state(), "snake starting");
    let mut game = SnakeGame::new(config, rng);

    let summary = run(&mut game, &args.run_options())?;
    println!(
        "Ate {} apples (best {}, {} rounds)",
        summary.score, summary.best_score, summary.rounds
    );
    Ok(())
}
