pub mod algorithms;
pub mod node;
#[allow(clippy::module_inception)]
pub mod rbtree;

// 重新导出主要类型
pub use algorithms::traversal::{InOrder, PostOrder, PreOrder};
pub use node::{Color, Node, NodeId, Side};
pub use rbtree::{NaturalOrder, NodeVisualization, RbTree, TreeVisualization};
