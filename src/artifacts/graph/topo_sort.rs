//! Deterministic topological sort of a [`CommitGraph`]
//!
//! Kahn's algorithm with a FIFO ready queue seeded by the graph's roots.
//! When several children become ready in one step they are queued in the
//! order of the parent's child list, so the result depends only on the
//! graph, never on hashing.

use crate::artifacts::graph::commit_graph::CommitGraph;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::TopoError;
use derive_new::new;
use std::collections::{BTreeMap, VecDeque};

#[derive(Debug, new)]
pub struct TopoSort<'g> {
    graph: &'g CommitGraph,
}

impl TopoSort<'_> {
    /// Order every commit so each parent precedes all of its children
    ///
    /// # Errors
    ///
    /// - [`TopoError::CycleDetected`] if some commits never become ready
    /// - [`TopoError::SortIntegrity`] if the ordering misses commits
    pub fn sort(&self) -> Result<Vec<ObjectId>, TopoError> {
        // scratch copy; duplicate parent declarations count once, matching
        // the single child edge the graph keeps for them
        let mut remaining_parents: BTreeMap<&ObjectId, Vec<&ObjectId>> = self
            .graph
            .nodes()
            .map(|node| {
                let mut parents: Vec<&ObjectId> = Vec::with_capacity(node.parents().len());
                for parent in node.parents() {
                    if !parents.contains(&parent) {
                        parents.push(parent);
                    }
                }
                (node.oid(), parents)
            })
            .collect();

        let mut ready: VecDeque<&ObjectId> = self.graph.roots().iter().collect();
        let mut sorted = Vec::with_capacity(self.graph.len());

        while let Some(oid) = ready.pop_front() {
            sorted.push(oid.clone());

            let Some(node) = self.graph.node(oid) else {
                continue;
            };

            for child in node.children() {
                let Some(parents) = remaining_parents.get_mut(child) else {
                    tracing::warn!(%child, parent = %oid, "child missing from commit graph");
                    continue;
                };

                match parents.iter().position(|parent| *parent == oid) {
                    Some(index) => {
                        parents.remove(index);
                    }
                    None => {
                        tracing::warn!(
                            %child,
                            parent = %oid,
                            "attempting to remove nonexisting parent"
                        );
                    }
                }

                if parents.is_empty() {
                    ready.push_back(child);
                }
            }
        }

        let blocked = remaining_parents
            .into_iter()
            .filter(|(_, parents)| !parents.is_empty())
            .map(|(oid, _)| oid.clone())
            .collect::<Vec<_>>();
        if !blocked.is_empty() {
            return Err(TopoError::CycleDetected { oids: blocked });
        }

        if sorted.len() != self.graph.len() {
            return Err(TopoError::SortIntegrity {
                sorted: sorted.len(),
                expected: self.graph.len(),
            });
        }

        tracing::debug!(commits = sorted.len(), "sorted commit graph");

        Ok(sorted)
    }
}
