//! Sticky rendering of a topological order
//!
//! Consecutive commits that form a parent chain are printed as a block, one
//! hash per line. When the next commit is not a parent of the current one
//! the block is closed with a `<parents>=` line and a blank line, and the
//! next block opens with a `=<children>` line:
//!
//! ```text
//! c3 main
//! c2
//! c1=
//!
//! =c3
//! b2 topic
//! ```

use crate::artifacts::branch::BranchMap;
use crate::artifacts::graph::commit_graph::CommitGraph;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

#[derive(Debug, new)]
pub struct StickyFormatter<'g> {
    graph: &'g CommitGraph,
    branches: &'g BranchMap,
}

impl StickyFormatter<'_> {
    /// Render `order` (descendants first) into output lines
    pub fn format(&self, order: &[ObjectId]) -> Vec<String> {
        let mut lines = Vec::with_capacity(order.len());
        let mut chain_broken = false;

        for (index, oid) in order.iter().enumerate() {
            let node = self.graph.node(oid);
            let parents = node.map(|node| node.parents()).unwrap_or_default();

            if chain_broken {
                let children = node.map(|node| node.children()).unwrap_or_default();
                lines.push(format!("={}", join(children)));
                chain_broken = false;
            }

            lines.push(self.commit_line(oid));

            if let Some(next) = order.get(index + 1)
                && !parents.contains(next)
            {
                lines.push(format!("{}=", join(parents)));
                lines.push(String::new());
                chain_broken = true;
            }
        }

        lines
    }

    fn commit_line(&self, oid: &ObjectId) -> String {
        match self.branches.get(oid) {
            Some(names) if !names.is_empty() => {
                let names = names.iter().map(|name| name.as_ref()).collect::<Vec<&str>>();
                format!("{} {}", oid, names.join(" "))
            }
            _ => oid.to_string(),
        }
    }
}

fn join(oids: &[ObjectId]) -> String {
    oids.iter()
        .map(|oid| oid.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
}
