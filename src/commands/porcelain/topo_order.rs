use crate::areas::repository::Repository;
use crate::artifacts::graph::commit_graph::CommitGraph;
use crate::artifacts::graph::sticky::StickyFormatter;
use crate::artifacts::graph::topo_sort::TopoSort;
use crate::errors::TopoError;
use std::io::Write;

impl Repository {
    /// Print every commit reachable from a local branch, descendants first,
    /// in sticky grouped form
    pub fn topo_order_commits(&self) -> anyhow::Result<()> {
        let branches = self.refs().branch_heads()?;
        if branches.is_empty() {
            return Err(TopoError::NoBranches {
                heads_path: self.refs().heads_path(),
            }
            .into());
        }

        let records = self.database().load_commits()?;
        if records.is_empty() {
            return Err(TopoError::NoCommits {
                objects_path: self.database().objects_path().to_path_buf(),
            }
            .into());
        }

        let graph = CommitGraph::build(branches.keys(), records)?;

        let mut order = TopoSort::new(&graph).sort()?;
        order.reverse();

        let lines = StickyFormatter::new(&graph, &branches).format(&order);

        let mut writer = self.writer();
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;

        Ok(())
    }
}
