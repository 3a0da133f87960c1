//! Commit graph reachable from branch heads
//!
//! Nodes live in a single table keyed by hash. Parent and child links are
//! hashes into that table, so the graph owns every node exactly once.

use crate::artifacts::objects::commit::CommitRecord;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::TopoError;
use std::collections::{BTreeMap, HashSet, VecDeque};

/// A commit together with the children discovered while building the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitNode {
    oid: ObjectId,
    parents: Vec<ObjectId>,
    children: Vec<ObjectId>,
}

impl CommitNode {
    fn from_record(record: &CommitRecord) -> Self {
        Self {
            oid: record.oid().clone(),
            parents: record.parents().to_vec(),
            children: Vec::new(),
        }
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    /// Parents in declaration order
    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// Children in the order they were discovered
    pub fn children(&self) -> &[ObjectId] {
        &self.children
    }

    fn add_child(&mut self, child: &ObjectId) {
        if !self.children.contains(child) {
            self.children.push(child.clone());
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommitGraph {
    nodes: BTreeMap<ObjectId, CommitNode>,
    roots: Vec<ObjectId>,
}

impl CommitGraph {
    /// Build the subgraph reachable from `heads` by walking parent links
    ///
    /// Heads are visited in the order the iterator yields them; callers pass
    /// them sorted so child discovery order, and with it the topological
    /// order, is reproducible. Records that are never reached are dropped.
    ///
    /// # Errors
    ///
    /// [`TopoError::MissingCommit`] if a head or a parent has no record.
    pub fn build<'h>(
        heads: impl IntoIterator<Item = &'h ObjectId>,
        mut records: BTreeMap<ObjectId, CommitRecord>,
    ) -> Result<Self, TopoError> {
        let mut nodes: BTreeMap<ObjectId, CommitNode> = BTreeMap::new();
        let mut roots = Vec::new();
        let mut visited: HashSet<ObjectId> = HashSet::new();
        let mut queued: HashSet<ObjectId> = HashSet::new();
        let mut worklist: VecDeque<ObjectId> = VecDeque::new();

        for head in heads {
            if queued.insert(head.clone()) {
                worklist.push_back(head.clone());
            }
        }

        while let Some(oid) = worklist.pop_front() {
            if !visited.insert(oid.clone()) {
                continue;
            }

            let record = records.get(&oid).ok_or_else(|| TopoError::MissingCommit {
                oid: oid.clone(),
                referenced_by: None,
            })?;
            nodes
                .entry(oid.clone())
                .or_insert_with(|| CommitNode::from_record(record));

            if record.is_root() {
                roots.push(oid.clone());
            }

            for parent in record.parents() {
                if !visited.contains(parent) && queued.insert(parent.clone()) {
                    worklist.push_back(parent.clone());
                }

                let parent_record =
                    records
                        .get(parent)
                        .ok_or_else(|| TopoError::MissingCommit {
                            oid: parent.clone(),
                            referenced_by: Some(oid.clone()),
                        })?;
                nodes
                    .entry(parent.clone())
                    .or_insert_with(|| CommitNode::from_record(parent_record))
                    .add_child(&oid);
            }
        }

        let total = records.len();
        records.retain(|oid, _| visited.contains(oid));
        tracing::debug!(
            reachable = nodes.len(),
            unreachable = total - records.len(),
            roots = roots.len(),
            "built commit graph"
        );

        Ok(Self { nodes, roots })
    }

    pub fn node(&self, oid: &ObjectId) -> Option<&CommitNode> {
        self.nodes.get(oid)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &CommitNode> {
        self.nodes.values()
    }

    /// Root commits in discovery order
    pub fn roots(&self) -> &[ObjectId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
