use crate::population::AntPopulation;
use crate::simulation::collision::{CollisionResolver, DestructionEvent};
use crate::simulation::counters::SimulationCounters;
use crate::simulation::movement::{move_range, MoveDelta};
use crate::utils::DEFAULT_MOVE_LIMIT;
use crate::world::WorldGraph;
use colored::Colorize;
use std::thread;
use std::time::{Duration, Instant};

/// How the movement phase executes; picked once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// One thread moves the whole population each tick
    Sequential,
    /// The population is split into disjoint contiguous ranges, one scoped
    /// worker per range, joined before resolution
    Concurrent { workers: usize },
}

impl Strategy {
    /// Independent random streams this strategy needs
    fn contexts(self) -> usize {
        match self {
            Strategy::Sequential => 1,
            Strategy::Concurrent { workers } => workers.max(1),
        }
    }
}

/// Worker-pool size matching the hardware
pub fn available_workers() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    pub move_limit: u32,
    /// Tick safety cap; None runs until the termination predicate holds
    pub max_ticks: Option<u64>,
    pub strategy: Strategy,
    pub log_events: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            move_limit: DEFAULT_MOVE_LIMIT,
            max_ticks: None,
            strategy: Strategy::Sequential,
            log_events: false,
        }
    }
}

/// Owns the world and the population for the duration of one run and drives
/// the tick loop: movement, then collision resolution, then the termination
/// check.
///
/// Movement reads only the destroyed flags the previous resolution left
/// behind, and all shared counters change either here (folding worker deltas
/// after the join) or inside the resolver; the two strategies therefore share
/// one per-tick contract and differ only in how the movement pass is
/// scheduled.
pub struct SimulationController {
    world: WorldGraph,
    ants: AntPopulation,
    counters: SimulationCounters,
    events: Vec<DestructionEvent>,
    resolver: CollisionResolver,
    /// One generator per execution context, never shared across workers
    rngs: Vec<fastrand::Rng>,
    config: SimConfig,
}

impl SimulationController {
    pub fn new(
        world: WorldGraph,
        ants: AntPopulation,
        config: SimConfig,
        rng: &mut fastrand::Rng,
    ) -> Self {
        let rngs = (0..config.strategy.contexts()).map(|_| rng.fork()).collect();
        let counters = SimulationCounters::for_population(ants.len() as u32);
        let resolver = CollisionResolver::new(world.len(), config.log_events);
        Self {
            world,
            ants,
            counters,
            events: Vec::new(),
            resolver,
            rngs,
            config,
        }
    }

    /// Run to completion, returning the wall-clock time spent simulating
    pub fn run(&mut self) -> Duration {
        let start = Instant::now();

        loop {
            if self.counters.is_terminal() {
                break;
            }
            if let Some(cap) = self.config.max_ticks {
                if self.counters.ticks >= cap {
                    break;
                }
            }

            let delta = match self.config.strategy {
                Strategy::Sequential => self.move_sequential(),
                Strategy::Concurrent { workers } => self.move_concurrent(workers),
            };

            // Workers are joined; status deltas fold in single-threaded
            self.counters.alive -= delta.stranded;
            self.counters.stranded_deaths += delta.stranded;
            self.counters.settled += delta.settled;

            self.resolver.resolve(
                &mut self.world,
                &mut self.ants,
                &mut self.counters,
                &mut self.events,
            );

            self.counters.ticks += 1;
        }

        start.elapsed()
    }

    fn move_sequential(&mut self) -> MoveDelta {
        let (colony, moves, state) = self.ants.columns_mut();
        move_range(
            &self.world,
            colony,
            moves,
            state,
            &mut self.rngs[0],
            self.config.move_limit,
        )
    }

    /// Movement over disjoint column chunks, one scoped thread per chunk.
    ///
    /// Workers read the shared destroyed flags (frozen for this phase) and
    /// write only their own ants, so the phase needs no locks; everything is
    /// joined before the resolver runs.
    fn move_concurrent(&mut self, workers: usize) -> MoveDelta {
        let chunk = self.ants.len().div_ceil(workers.max(1)).max(1);
        let world = &self.world;
        let limit = self.config.move_limit;
        let rngs = &mut self.rngs;
        let (colony, moves, state) = self.ants.columns_mut();

        thread::scope(|s| {
            let mut handles = Vec::with_capacity(workers);
            let ranges = colony
                .chunks_mut(chunk)
                .zip(moves.chunks_mut(chunk))
                .zip(state.chunks_mut(chunk))
                .zip(rngs.iter_mut());
            for (((c, m), st), rng) in ranges {
                handles.push(s.spawn(move || move_range(world, c, m, st, rng, limit)));
            }
            handles
                .into_iter()
                .map(|h| h.join().expect("movement worker panicked"))
                .fold(MoveDelta::default(), MoveDelta::merge)
        })
    }

    pub fn counters(&self) -> SimulationCounters {
        self.counters
    }

    pub fn events(&self) -> &[DestructionEvent] {
        &self.events
    }

    pub fn world(&self) -> &WorldGraph {
        &self.world
    }

    /// Print the surviving world and the run statistics
    pub fn print_summary(&self, elapsed: Duration) {
        for record in self.world.remaining_records() {
            println!("{}", record);
        }

        println!("\n{}", "=== Simulation Summary ===".bright_blue().bold());
        println!("{} {}", "Total ants:".green(), self.counters.total_ants);
        println!(
            "{} {}",
            "Colonies destroyed:".green(),
            self.counters.colonies_destroyed
        );
        println!(
            "{} {}",
            "Total fight pairs:".green(),
            self.counters.fight_pairs
        );
        println!("{} {}", "Ants remaining:".green(), self.counters.alive);
        println!(
            "{} {}",
            "Colonies remaining:".green(),
            self.world.count_survivors()
        );
        println!(
            "{} {:.3} ms {}",
            "⏱️  Simulation Latency:".green().bold(),
            elapsed.as_secs_f64() * 1000.0,
            format!("ticks={}", self.counters.ticks).cyan(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::parse_map;

    fn controller(map: &str, positions: Vec<u32>, config: SimConfig) -> SimulationController {
        let world = parse_map(map);
        let ants = AntPopulation::from_positions(positions);
        let mut rng = fastrand::Rng::with_seed(99);
        SimulationController::new(world, ants, config, &mut rng)
    }

    #[test]
    fn empty_population_terminates_at_tick_zero() {
        let mut sim = controller("A east=B\nB west=A\n", vec![], SimConfig::default());
        sim.run();

        let counters = sim.counters();
        assert_eq!(counters.ticks, 0);
        assert_eq!(counters.alive, 0);
        assert_eq!(counters.colonies_destroyed, 0);
        assert_eq!(counters.fight_pairs, 0);
    }

    #[test]
    fn lone_settler_ends_the_run() {
        let config = SimConfig {
            move_limit: 5,
            ..SimConfig::default()
        };
        let mut sim = controller("A east=B\nB west=A\n", vec![0], config);
        sim.run();

        let counters = sim.counters();
        assert_eq!(counters.alive, 1);
        assert_eq!(counters.settled, 1);
        assert_eq!(counters.ticks, 5);
        assert!(counters.is_terminal());
    }

    #[test]
    fn tick_cap_stops_a_run_early() {
        let config = SimConfig {
            max_ticks: Some(3),
            ..SimConfig::default()
        };
        let mut sim = controller("A east=B\nB west=A\n", vec![0], config);
        sim.run();

        assert_eq!(sim.counters().ticks, 3);
    }

    #[test]
    fn concurrent_strategy_forks_one_rng_per_worker() {
        let config = SimConfig {
            strategy: Strategy::Concurrent { workers: 3 },
            ..SimConfig::default()
        };
        let sim = controller("A east=B\nB west=A\n", vec![0, 0, 1], config);
        assert_eq!(sim.rngs.len(), 3);
    }

    #[test]
    fn concurrent_run_keeps_counters_consistent() {
        let map = "A north=B south=C\nB south=A east=C\nC north=A west=B\nD north=A\n";
        let config = SimConfig {
            strategy: Strategy::Concurrent { workers: 2 },
            move_limit: 50,
            ..SimConfig::default()
        };
        let mut sim = controller(map, vec![0, 0, 1, 2, 3, 3, 1, 0], config);
        sim.run();

        let c = sim.counters();
        assert!(c.is_terminal());
        assert_eq!(
            c.alive + c.stranded_deaths + c.collision_deaths,
            c.total_ants
        );
        assert!(c.colonies_destroyed as usize <= sim.world().len());
        assert_eq!(sim.events().len(), c.colonies_destroyed as usize);
    }

    #[test]
    fn more_workers_than_ants_is_fine() {
        let config = SimConfig {
            strategy: Strategy::Concurrent { workers: 8 },
            move_limit: 10,
            ..SimConfig::default()
        };
        let mut sim = controller("A east=B\nB west=A\n", vec![0, 1], config);
        sim.run();

        assert!(sim.counters().is_terminal());
    }
}
