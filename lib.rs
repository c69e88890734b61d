//! # 红黑树
//!
//! 基于下标存储区（arena）的红黑树实现，存放一组互不相等的键，
//! 键的顺序由调用者提供的比较器决定（默认使用 `Ord`）。
//!
//! ## 主要特性
//!
//! - 插入、删除在 O(log n) 内完成，修复过程是有界的迭代循环
//! - 重复插入、删除不存在的键、空树上取最值都返回明确的错误，且不修改树
//! - 惰性的中序/前序/后序遍历迭代器
//! - `validate` 直接检查颜色、黑高和链接，可配置为每次变更后自动校验
//! - JSON 导出和彩色文本渲染，便于调试
//!
//! ## 使用示例
//!
//! ```rust
//! use rbtree::{RbTree, TreeError};
//!
//! let mut tree = RbTree::new();
//! tree.add_range(1..=10).unwrap();
//!
//! assert_eq!(tree.len(), 10);
//! assert_eq!(
//!     tree.pre_order().copied().collect::<Vec<_>>(),
//!     vec![4, 2, 1, 3, 6, 5, 8, 7, 9, 10]
//! );
//!
//! tree.remove(&7).unwrap();
//! assert!(!tree.contains(&7));
//! assert_eq!(tree.add(1), Err(TreeError::DuplicateKey));
//! assert!(tree.validate().is_ok());
//! ```
//!
//! ## 并发
//!
//! 树本身不做任何同步。`&self` 上的查询和遍历可以并发进行，
//! `add` / `remove` 需要 `&mut self`，由借用检查保证写操作独占。

pub mod config;
pub mod error;
pub mod rbtree;

// 重新导出主要的公共接口
pub use crate::config::{init_logging, LoggingConfig, RbTreeConfig, SettingsError, TreeSettings};
pub use error::{InvariantViolation, Result, TreeError};
pub use rbtree::{Color, InOrder, PostOrder, PreOrder, RbTree};
