//! # Ant Mania
//!
//! A simulation of giant space ants invading the planet Hiveum.
//!
//! This library provides the core functionality for simulating ant movement,
//! collisions, and colony destruction on a graph-based map, with a sequential
//! and a concurrent execution strategy over the same per-tick contract.

pub mod cli;
pub mod direction;
pub mod error;
pub mod population;
pub mod simulation;
pub mod utils;
pub mod world;

pub use cli::Args;
pub use direction::Direction;
pub use error::{LoadError, Result};
pub use population::AntPopulation;
pub use simulation::{SimConfig, SimulationController, SimulationCounters, Strategy};
pub use world::WorldGraph;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::simulation::DestructionEvent;
    pub use crate::world::{load_map, parse_map};
    pub use crate::{
        AntPopulation, Args, Direction, LoadError, Result, SimConfig, SimulationController,
        SimulationCounters, Strategy, WorldGraph,
    };
}
