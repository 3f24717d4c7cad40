use ant_mania::prelude::*;
use clap::Parser;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    // Load world and seed ants
    let world = load_map(&args.map)?;
    let ants = world.seed_ants(args.ants, &mut rng);

    // Run simulation
    let mut controller = SimulationController::new(world, ants, args.to_config(), &mut rng);
    let simulation_time = controller.run();

    // Print results
    controller.print_summary(simulation_time);

    Ok(())
}
