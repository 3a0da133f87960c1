pub mod branch_name;

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;

/// Branch heads keyed by the commit they point at
///
/// Keys iterate in lexicographic hash order, which is the order branch heads
/// seed the graph traversal. Each name list is kept sorted.
pub type BranchMap = BTreeMap<ObjectId, Vec<BranchName>>;

pub const SYMREF_REGEX: &str = r"^ref: (.+)$";
