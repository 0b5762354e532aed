use arcade_core::config::load_or_default;
use arcade_term::{init_logging, run, GameArgs};
use mars_attacks::{MarsConfig, MarsGame};
use std::error::Error;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    let args = GameArgs::parse_for(
        "mars_attacks",
        "Shoot the falling aliens. Arrows move, Space fires, R restarts, P pauses, Q quits.",
    );
    init_logging(args.verbosity(), args.log_file.as_deref())?;

    let config: MarsConfig = load_or_default(args.config.as_ref())?;
    config.validate()?;

    let rng = args.rng();
    info!(seed = rng.state(), "mars_attacks starting");
    let mut game = MarsGame::new(config, rng);

    let summary = run(&mut game, &args.run_options())?;
    println!(
        "Score {} (best {}, {} rounds)",
        summary.score, summary.best_score, summary.rounds
    );
    Ok(())
}
