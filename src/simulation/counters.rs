/// Running totals for one simulation.
///
/// Every field is maintained incrementally by the phase that causes the
/// transition; nothing here is recomputed by scanning the population.
/// Movement workers report stranded/settled deltas back to the controller,
/// which folds them in after the join; everything else mutates inside the
/// single-threaded resolution step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimulationCounters {
    pub total_ants: u32,
    pub colonies_destroyed: u32,
    pub fight_pairs: u64,
    pub alive: u32,
    pub settled: u32,
    pub stranded_deaths: u32,
    pub collision_deaths: u32,
    pub ticks: u64,
}

impl SimulationCounters {
    pub fn for_population(total_ants: u32) -> Self {
        Self {
            total_ants,
            alive: total_ants,
            ..Self::default()
        }
    }

    /// Every surviving ant is settled and can never move again, or nobody
    /// survives: either way no further state change is possible.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.alive == 0 || self.alive == self.settled
    }
}
