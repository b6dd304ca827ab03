// blueprint-core/src/domain/graph/dag.rs

use crate::domain::config::Document;
use crate::domain::error::ConfigError;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

pub struct GraphSolver;

struct Sorted<'a> {
    layers: Vec<Vec<String>>,
    unresolved: BTreeSet<&'a str>,
}

impl GraphSolver {
    /// Materialization order of the assets (Topological Sort with Layers).
    /// Layer N depends only on layers 0..N-1; names are sorted inside a layer.
    pub fn plan_execution(document: &Document) -> Result<Vec<Vec<String>>, ConfigError> {
        let sorted = Self::layered_sort(document);

        // Cycle Detection
        if !sorted.unresolved.is_empty() {
            let assets = Self::find_cycles(document)
                .into_iter()
                .next()
                .unwrap_or_else(|| sorted.unresolved.iter().map(|s| s.to_string()).collect());
            return Err(ConfigError::CircularDependency { assets });
        }

        Ok(sorted.layers)
    }

    /// Every `depends_on` loop, each listed from its smallest asset name and closed
    /// by repeating it (`a -> b -> a`). Assets that merely lead into a loop are not part of it.
    pub fn find_cycles(document: &Document) -> Vec<Vec<String>> {
        let sorted = Self::layered_sort(document);
        let upstream: BTreeMap<&str, &str> = document
            .assets()
            .iter()
            .filter_map(|a| a.depends_on().map(|dep| (a.name(), dep)))
            .collect();

        let mut cycles = Vec::new();
        let mut visited: BTreeSet<&str> = BTreeSet::new();

        for &start in &sorted.unresolved {
            if visited.contains(start) {
                continue;
            }
            // Walk upstream until a node repeats; the repeat closes the loop.
            let mut path: Vec<&str> = Vec::new();
            let mut current = Some(start);
            while let Some(node) = current {
                if let Some(pos) = path.iter().position(|n| *n == node) {
                    let mut cycle: Vec<&str> = path[pos..].to_vec();
                    if let Some(min_pos) = cycle
                        .iter()
                        .enumerate()
                        .min_by_key(|(_, name)| **name)
                        .map(|(i, _)| i)
                    {
                        cycle.rotate_left(min_pos);
                    }
                    let first = cycle[0];
                    cycle.push(first);
                    cycles.push(cycle.into_iter().map(str::to_string).collect());
                    break;
                }
                if !visited.insert(node) {
                    break;
                }
                path.push(node);
                current = upstream.get(node).copied();
            }
        }

        cycles
    }

    fn layered_sort(document: &Document) -> Sorted<'_> {
        let mut in_degree: BTreeMap<&str, usize> = BTreeMap::new();
        let mut downstream: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

        // 1. Initialization: every asset is a node
        for asset in document.assets() {
            in_degree.insert(asset.name(), 0);
            downstream.insert(asset.name(), Vec::new());
        }

        // 2. Edges point from the dependency to the dependent
        for asset in document.assets() {
            if let Some(dep) = asset.depends_on()
                && in_degree.contains_key(dep)
            {
                downstream.entry(dep).or_default().push(asset.name());
                *in_degree.entry(asset.name()).or_insert(0) += 1;
            }
        }

        // 3. Kahn's Algorithm (Layered)
        let mut layers: Vec<Vec<String>> = Vec::new();
        let mut queue: VecDeque<&str> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(name, _)| *name)
            .collect();

        while !queue.is_empty() {
            let layer_size = queue.len();
            let mut current_layer = Vec::with_capacity(layer_size);

            for _ in 0..layer_size {
                let Some(current) = queue.pop_front() else {
                    break;
                };
                in_degree.remove(current);
                current_layer.push(current.to_string());

                for next in downstream.get(current).into_iter().flatten() {
                    if let Some(degree) = in_degree.get_mut(next) {
                        *degree -= 1;
                        if *degree == 0 {
                            queue.push_back(*next);
                        }
                    }
                }
            }
            current_layer.sort();
            layers.push(current_layer);
        }

        // 4. Whatever keeps a positive in-degree sits on or behind a cycle
        Sorted {
            layers,
            unresolved: in_degree.into_keys().collect(),
        }
    }
}
