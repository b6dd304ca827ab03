// blueprint/src/commands/plan.rs
//
// USE CASE: Materialization order (layered topological sort).

use blueprint_core::domain::graph::GraphSolver;

use super::load_or_exit;
use crate::cli::DocumentArgs;

pub fn execute(args: &DocumentArgs) -> anyhow::Result<()> {
    let (path, document) = load_or_exit(args);

    // A validated document is acyclic; the error path only guards library misuse.
    let layers = GraphSolver::plan_execution(&document)?;

    println!("🗺️  Execution plan for {}", path.display());
    for (index, layer) in layers.iter().enumerate() {
        println!("   Layer {}: {}", index, layer.join(", "));
    }
    Ok(())
}
