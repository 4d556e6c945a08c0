use std::collections::HashSet;

use crate::model::{HexCoord, Terrain, World};

/// A maximal connected region of one terrain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub terrain: Terrain,
    /// Members in discovery order; the first is the scan-order seed cell.
    pub members: Vec<HexCoord>,
    pub name: Option<String>,
}

impl Cluster {
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Partition the world into same-terrain connected components.
///
/// Cells are scanned column-major; each unvisited cell seeds a depth-first
/// fill over hex adjacency (wrap-aware) restricted to equal terrain. Every
/// cell ends up in exactly one cluster.
pub fn find_clusters(world: &World) -> Vec<Cluster> {
    let grid = world.grid();
    let mut visited: HashSet<HexCoord> = HashSet::with_capacity(world.cells.len());
    let mut clusters = Vec::new();
    let mut stack: Vec<HexCoord> = Vec::new();

    for start in grid.coords() {
        if visited.contains(&start) {
            continue;
        }
        let Some(cell) = world.cell(start) else {
            continue;
        };
        let terrain = cell.terrain;
        let mut members = Vec::new();

        visited.insert(start);
        stack.push(start);
        while let Some(current) = stack.pop() {
            members.push(current);
            for next in grid.adjacent(current) {
                if visited.contains(&next) {
                    continue;
                }
                if world.cell(next).is_some_and(|c| c.terrain == terrain) {
                    visited.insert(next);
                    stack.push(next);
                }
            }
        }

        clusters.push(Cluster {
            terrain,
            members,
            name: None,
        });
    }

    tracing::debug!(clusters = clusters.len(), "terrain clusters found");
    clusters
}
