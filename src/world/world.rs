use crate::direction::Direction;
use crate::population::AntPopulation;
use crate::utils::NO_COLONY;

use crate::world::node::Colony;

/// Final world: names + colonies (no hashmaps kept at runtime)
///
/// Topology is frozen after the loader returns; only the per-colony destroyed
/// flag mutates afterwards, and only forward.
#[derive(Clone, Debug)]
pub struct WorldGraph {
    pub names: Vec<String>,
    pub colonies: Vec<Colony>,
}

impl WorldGraph {
    pub fn new(names: Vec<String>, colonies: Vec<Colony>) -> Self {
        debug_assert_eq!(names.len(), colonies.len());
        Self { names, colonies }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colonies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colonies.is_empty()
    }

    #[inline]
    pub fn colony(&self, id: u32) -> Option<&Colony> {
        self.colonies.get(id as usize)
    }

    #[inline]
    pub fn is_destroyed(&self, id: u32) -> bool {
        self.colonies[id as usize].is_destroyed()
    }

    /// Place ants uniformly at random over the non-destroyed colonies.
    ///
    /// With no colony available the population comes back empty, which is a
    /// valid degenerate run, not an error.
    pub fn seed_ants(&self, count: u32, rng: &mut fastrand::Rng) -> AntPopulation {
        let available: Vec<u32> = self
            .colonies
            .iter()
            .enumerate()
            .filter_map(|(i, c)| (!c.is_destroyed()).then_some(i as u32))
            .collect();

        if available.is_empty() {
            return AntPopulation::from_positions(Vec::new());
        }

        let positions = (0..count)
            .map(|_| available[rng.usize(..available.len())])
            .collect();
        AntPopulation::from_positions(positions)
    }

    /// Count colonies that were never destroyed
    pub fn count_survivors(&self) -> usize {
        self.colonies.iter().filter(|c| !c.is_destroyed()).count()
    }

    /// Get the name of a colony by id
    pub fn colony_name(&self, id: u32) -> &str {
        &self.names[id as usize]
    }

    /// Remaining world in the input record format: every surviving colony
    /// with the connections whose target also survives.
    pub fn remaining_records(&self) -> Vec<String> {
        let mut records = Vec::with_capacity(self.count_survivors());
        for (id, colony) in self.colonies.iter().enumerate() {
            if colony.is_destroyed() {
                continue;
            }
            let mut line = String::with_capacity(64);
            line.push_str(&self.names[id]);

            for &direction in &Direction::ALL {
                let target = colony.neighbors[direction.index()];
                if target != NO_COLONY && !self.colonies[target as usize].is_destroyed() {
                    line.push(' ');
                    line.push_str(direction.as_str());
                    line.push('=');
                    line.push_str(&self.names[target as usize]);
                }
            }
            records.push(line);
        }
        records
    }
}
