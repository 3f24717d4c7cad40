use crate::population::{STATE_ALIVE, STATE_SETTLED};
use crate::utils::NO_COLONY;
use crate::world::WorldGraph;

/// Status changes a movement pass produced for its range of ants.
///
/// Workers hand these back to the controller instead of touching the shared
/// counters from the movement phase.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveDelta {
    pub stranded: u32,
    pub settled: u32,
}

impl MoveDelta {
    #[inline]
    pub fn merge(self, other: MoveDelta) -> MoveDelta {
        MoveDelta {
            stranded: self.stranded + other.stranded,
            settled: self.settled + other.settled,
        }
    }
}

/// Advance every live, unsettled ant in one contiguous population range by
/// one move.
///
/// The columns are the range's slices of the population; `world` is read-only
/// here, so its destroyed flags are exactly the state the previous tick's
/// resolution left behind. An ant with no surviving exit strands: it dies on
/// the spot without destroying anything or counting a fight. An ant whose
/// move count reaches `move_limit` settles and keeps its colony.
pub fn move_range(
    world: &WorldGraph,
    colony: &mut [u32],
    moves: &mut [u32],
    state: &mut [u8],
    rng: &mut fastrand::Rng,
    move_limit: u32,
) -> MoveDelta {
    let mut delta = MoveDelta::default();

    for i in 0..colony.len() {
        if state[i] & STATE_ALIVE == 0 || state[i] & STATE_SETTLED != 0 {
            continue;
        }

        let here = &world.colonies[colony[i] as usize];

        // Resolution already killed everyone on a destroyed colony, so this
        // only trips if the phase ordering is broken upstream.
        if here.is_destroyed() {
            state[i] &= !STATE_ALIVE;
            delta.stranded += 1;
            continue;
        }

        let mut exits = [NO_COLONY; 4];
        let mut k = 0usize;
        for &target in &here.neighbors {
            if target != NO_COLONY && !world.colonies[target as usize].is_destroyed() {
                exits[k] = target;
                k += 1;
            }
        }

        if k == 0 {
            state[i] &= !STATE_ALIVE;
            delta.stranded += 1;
            continue;
        }

        // One draw scoped to exactly k outcomes keeps the choice uniform
        colony[i] = exits[rng.usize(..k)];
        moves[i] += 1;
        if moves[i] == move_limit {
            state[i] |= STATE_SETTLED;
            delta.settled += 1;
        }
    }

    delta
}
