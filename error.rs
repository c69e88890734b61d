//! 红黑树的错误类型

/// 红黑树操作错误
///
/// 所有错误都是可恢复的：返回错误时树保持不变，仍然满足全部红黑性质。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// `add` 的键已经存在于树中
    #[error("Key already exists in tree")]
    DuplicateKey,
    /// `remove` 的键不在（非空的）树中
    #[error("Key is not in the tree")]
    KeyNotFound,
    /// 在空树上调用 `remove` / `get_min` / `get_max`
    #[error("Tree is empty")]
    EmptyStructure,
    /// 开启了 `check_invariants` 且变更后校验失败
    #[error("Tree is corrupted: {0}")]
    Corrupted(#[from] InvariantViolation),
}

/// 结构校验发现的红黑性质破坏
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("Keys are out of order at node #{node}")]
    OutOfOrder { node: usize },
    #[error("Root is not black")]
    RedRoot,
    #[error("Root has a parent link")]
    RootHasParent,
    #[error("Red node #{node} has a red child")]
    RedRedEdge { node: usize },
    #[error("Black height mismatch at node #{node}: left {left}, right {right}")]
    BlackHeightMismatch { node: usize, left: usize, right: usize },
    #[error("Child of node #{node} does not point back to it")]
    BrokenParentLink { node: usize },
    #[error("Stored count {stored} does not match {actual} reachable nodes")]
    CountMismatch { stored: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, TreeError>;
