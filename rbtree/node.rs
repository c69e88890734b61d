use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 节点在树内部存储区（arena）中的下标
pub type NodeId = usize;

/// 红黑树节点颜色
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// 子节点所在的一侧
///
/// 旋转和修复算法对左右两侧是镜像对称的，用 `Side` 统一描述方向，
/// 避免每个分支都写一遍左右两套代码。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// 返回相反的一侧
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// 红黑树节点
///
/// 节点之间的链接都是 arena 下标：
/// - `left` / `right` 表示所有权（每个节点只属于一个父节点，根节点属于树本身）
/// - `parent` 只是反向引用，仅用于修复过程中向上回溯
#[derive(Debug, Clone)]
pub struct Node<K> {
    pub key: K,
    pub color: Color,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl<K> Node<K> {
    /// 创建新插入的叶子节点
    ///
    /// 新节点总是红色，并且没有子节点
    pub fn new_leaf(key: K, parent: Option<NodeId>) -> Self {
        Node {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    /// 获取指定一侧的子节点
    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// 设置指定一侧的子节点
    pub fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// 检查是否为叶子节点（两个子节点都不存在）
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_leaf_is_red() {
        let node = Node::new_leaf(7, Some(3));
        assert!(node.is_red());
        assert!(!node.is_black());
        assert!(node.is_leaf());
        assert_eq!(node.parent, Some(3));
    }

    #[test]
    fn test_child_by_side() {
        let mut node = Node::new_leaf("k", None);
        node.set_child(Side::Left, Some(1));
        node.set_child(Side::Right, Some(2));

        assert_eq!(node.child(Side::Left), Some(1));
        assert_eq!(node.child(Side::Right), Some(2));
        assert!(!node.is_leaf());
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::Red.to_string(), "Red");
        assert_eq!(Color::Black.to_string(), "Black");
    }
}
