use crate::population::AntPopulation;
use crate::simulation::counters::SimulationCounters;
use crate::world::WorldGraph;
use colored::Colorize;

const NO_ANT: u32 = u32::MAX;

/// One colony destruction, with a representative pair of the ants involved.
///
/// When more than two ants collide the event still names only the two lowest
/// ant ids; every pair is counted in the fight totals regardless.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DestructionEvent {
    pub colony: u32,
    pub first_ant: u32,
    pub second_ant: u32,
}

/// Detects colonies holding two or more live ants and destroys them.
///
/// Runs once per tick after the movement writes are visible, always
/// single-threaded; this is the only place the shared counters and the
/// destroyed flags change.
pub struct CollisionResolver {
    /// Live ants currently in each colony
    counts: Vec<u32>,
    /// Two lowest live ant ids per colony, for event reporting
    first: Vec<u32>,
    second: Vec<u32>,
    log_events: bool,
}

impl CollisionResolver {
    pub fn new(colony_count: usize, log_events: bool) -> Self {
        Self {
            counts: vec![0; colony_count],
            first: vec![NO_ANT; colony_count],
            second: vec![NO_ANT; colony_count],
            log_events,
        }
    }

    /// Group live ants by colony, destroy every colony with n >= 2 of them,
    /// and kill the ants involved.
    ///
    /// Each destruction adds n·(n−1)/2 fight pairs. Ants killed here
    /// decrement the alive count once each; settled ants also leave the
    /// settled count.
    pub fn resolve(
        &mut self,
        world: &mut WorldGraph,
        ants: &mut AntPopulation,
        counters: &mut SimulationCounters,
        events: &mut Vec<DestructionEvent>,
    ) {
        self.counts.fill(0);
        self.first.fill(NO_ANT);
        self.second.fill(NO_ANT);

        // Ant ids are the population order, so the first two seen per colony
        // are the two lowest.
        for ant in 0..ants.len() {
            if !ants.is_alive(ant) {
                continue;
            }
            let colony = ants.colony[ant] as usize;
            self.counts[colony] += 1;
            if self.first[colony] == NO_ANT {
                self.first[colony] = ant as u32;
            } else if self.second[colony] == NO_ANT {
                self.second[colony] = ant as u32;
            }
        }

        for colony in 0..world.len() {
            let n = self.counts[colony];
            if n >= 2 && !world.colonies[colony].is_destroyed() {
                world.colonies[colony].destroy();
                counters.colonies_destroyed += 1;
                counters.fight_pairs += u64::from(n) * u64::from(n - 1) / 2;

                let event = DestructionEvent {
                    colony: colony as u32,
                    first_ant: self.first[colony],
                    second_ant: self.second[colony],
                };
                self.log_destruction(world, &event);
                events.push(event);
            }
        }

        // A live ant can only stand on a colony destroyed this tick; earlier
        // destructions already killed or stranded everyone there.
        for ant in 0..ants.len() {
            if ants.is_alive(ant) && world.is_destroyed(ants.colony[ant]) {
                if ants.is_settled(ant) {
                    counters.settled -= 1;
                }
                ants.kill(ant);
                counters.alive -= 1;
                counters.collision_deaths += 1;
            }
        }
    }

    fn log_destruction(&self, world: &WorldGraph, event: &DestructionEvent) {
        if !self.log_events {
            return;
        }
        println!(
            "{} {} {} {}",
            "💥".red(),
            world.colony_name(event.colony).bright_red(),
            "has been destroyed by".red(),
            format!("ant {} and ant {}", event.first_ant, event.second_ant).yellow()
        );
    }
}
