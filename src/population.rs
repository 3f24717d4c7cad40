/// Alive bit of the per-ant state byte
pub const STATE_ALIVE: u8 = 0b01;
/// Settled bit: the ant hit the move limit and no longer moves
pub const STATE_SETTLED: u8 = 0b10;

/// Column-oriented ant store.
///
/// One entry per ant, indexed by ant id; the population is fixed at seeding
/// and ants are only ever flagged, never removed, so ids stay stable for
/// reporting after death. Separate columns keep the movement phase walking
/// dense arrays and let the concurrent strategy hand disjoint chunks of each
/// column to its workers.
#[derive(Clone, Debug)]
pub struct AntPopulation {
    pub colony: Vec<u32>,
    pub moves: Vec<u32>,
    pub state: Vec<u8>,
}

impl AntPopulation {
    /// Build a population with one ant per starting position, all alive with
    /// zero moves. Ant ids are the creation order.
    pub fn from_positions(positions: Vec<u32>) -> Self {
        let count = positions.len();
        Self {
            colony: positions,
            moves: vec![0; count],
            state: vec![STATE_ALIVE; count],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colony.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colony.is_empty()
    }

    #[inline]
    pub fn is_alive(&self, ant: usize) -> bool {
        self.state[ant] & STATE_ALIVE != 0
    }

    #[inline]
    pub fn is_settled(&self, ant: usize) -> bool {
        self.state[ant] & STATE_SETTLED != 0
    }

    /// Clear the alive bit; the settled bit is left as-is so reporting can
    /// still tell how the ant ended up
    #[inline]
    pub fn kill(&mut self, ant: usize) {
        self.state[ant] &= !STATE_ALIVE;
    }

    /// Split the columns into parallel borrows for partitioned movement
    #[inline]
    pub fn columns_mut(&mut self) -> (&mut [u32], &mut [u32], &mut [u8]) {
        (&mut self.colony, &mut self.moves, &mut self.state)
    }
}
