use crate::direction::Direction;
use crate::error::Result;
use crate::world::node::Colony;
use crate::world::world::WorldGraph;
use std::collections::HashMap;
use std::fs;

/// Load a world from a map file.
///
/// The only fatal failure is an unreadable source; a readable empty file is a
/// valid zero-colony world.
pub fn load_map(path: &str) -> Result<WorldGraph> {
    let src = fs::read_to_string(path)?;
    Ok(parse_map(&src))
}

/// Build a world from map records, one `<name> [<direction>=<name>]*` per
/// line, blank lines skipped.
///
/// Two passes over the records: the first interns every line's leading token
/// so connections may name colonies declared later, the second resolves the
/// `direction=target` pairs against that table. Unrecognized direction tokens
/// and targets that never appear as a record of their own drop the single
/// connection and nothing else. A later record with an already-seen name
/// takes over the name mapping.
pub fn parse_map(src: &str) -> WorldGraph {
    let records: Vec<&str> = src
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut names: Vec<String> = Vec::with_capacity(records.len());
    let mut name_to_id: HashMap<&str, u32> = HashMap::with_capacity(records.len());

    for (id, record) in records.iter().enumerate() {
        let name = record.split_whitespace().next().unwrap_or(record);
        names.push(name.to_string());
        name_to_id.insert(name, id as u32);
    }

    let mut colonies: Vec<Colony> = vec![Colony::new(); records.len()];

    for (id, record) in records.iter().enumerate() {
        for kv in record.split_whitespace().skip(1) {
            let Some(eq) = kv.find('=') else { continue };
            let Ok(dir) = kv[..eq].parse::<Direction>() else {
                continue;
            };
            if let Some(&target) = name_to_id.get(&kv[eq + 1..]) {
                colonies[id].set_neighbor(dir.index(), target);
            }
        }
    }

    WorldGraph::new(names, colonies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::NO_COLONY;

    #[test]
    fn parses_basic_map() {
        let world = parse_map("A north=B\nB south=A\n");

        assert_eq!(world.len(), 2);
        assert_eq!(world.names, vec!["A", "B"]);
        assert_eq!(world.colonies[0].neighbor(Direction::North.index()), Some(1));
        assert_eq!(world.colonies[1].neighbor(Direction::South.index()), Some(0));
    }

    #[test]
    fn colony_count_equals_non_blank_lines() {
        let world = parse_map("A north=B\n\n  \nB south=A\nC\n");
        assert_eq!(world.len(), 3);
    }

    #[test]
    fn empty_input_yields_empty_world() {
        let world = parse_map("");
        assert_eq!(world.len(), 0);

        let world = parse_map("\n\n");
        assert_eq!(world.len(), 0);
    }

    #[test]
    fn forward_references_resolve() {
        // A names B before B's own record appears
        let world = parse_map("A east=B\nB west=A\n");
        assert_eq!(world.colonies[0].neighbor(Direction::East.index()), Some(1));
    }

    #[test]
    fn unknown_direction_drops_only_that_connection() {
        let world = parse_map("A north=B up=B\nB\n");

        assert_eq!(world.len(), 2);
        assert_eq!(world.colonies[0].neighbor(Direction::North.index()), Some(1));
        assert_eq!(world.colonies[0].neighbor(Direction::South.index()), None);
    }

    #[test]
    fn uppercase_direction_is_dropped() {
        let world = parse_map("A North=B\nB\n");
        assert_eq!(world.colonies[0].neighbors, [NO_COLONY; 4]);
    }

    #[test]
    fn undeclared_target_drops_only_that_connection() {
        // Nowhere is its own record, so A keeps only the B link
        let world = parse_map("A north=Nowhere south=B\nB\n");

        assert_eq!(world.len(), 2);
        assert_eq!(world.colonies[0].neighbor(Direction::North.index()), None);
        assert_eq!(world.colonies[0].neighbor(Direction::South.index()), Some(1));
    }

    #[test]
    fn all_connections_point_inside_the_world() {
        let world = parse_map("A north=B south=C east=Ghost\nB south=A\nC north=A west=B\n");

        for colony in &world.colonies {
            for i in 0..4 {
                if let Some(target) = colony.neighbor(i) {
                    assert!((target as usize) < world.len());
                }
            }
        }
    }

    #[test]
    fn duplicate_name_later_record_wins_mapping() {
        // Both records exist as colonies; links to the name reach the second
        let world = parse_map("Twin\nTwin\nA north=Twin\n");

        assert_eq!(world.len(), 3);
        assert_eq!(world.colonies[2].neighbor(Direction::North.index()), Some(1));
    }
}
