pub mod node;
pub mod parser;
pub mod world;

pub use node::Colony;
pub use parser::{load_map, parse_map};
pub use world::WorldGraph;
