pub mod collision;
pub mod counters;
pub mod engine;
pub mod movement;

pub use collision::{CollisionResolver, DestructionEvent};
pub use counters::SimulationCounters;
pub use engine::{available_workers, SimConfig, SimulationController, Strategy};
pub use movement::{move_range, MoveDelta};
