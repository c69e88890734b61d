use super::node::{Color, Node, NodeId, Side};
use crate::config::TreeSettings;
use crate::error::Result;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use tracing::error;

/// 默认比较器类型：键类型的自然顺序
pub type NaturalOrder<K> = fn(&K, &K) -> Ordering;

/// 用于JSON序列化的简化树结构
#[derive(Debug, Serialize)]
pub struct TreeVisualization<'a, K> {
    /// 键的数量
    pub len: usize,
    /// 树高（根到最深叶子的节点数）
    pub height: usize,
    /// 根节点的黑高
    pub black_height: usize,
    /// 根节点（如果存在）
    pub root: Option<NodeVisualization<'a, K>>,
}

/// 用于JSON序列化的节点结构
#[derive(Debug, Serialize)]
pub struct NodeVisualization<'a, K> {
    pub key: &'a K,
    pub color: Color,
    pub left: Option<Box<NodeVisualization<'a, K>>>,
    pub right: Option<Box<NodeVisualization<'a, K>>>,
}

/// 红黑树主结构
///
/// 所有节点存放在一个连续的 `Vec` 中，父子链接都是下标，
/// 因此不存在父子互相持有所有权的循环。删除节点时把最后一个槽位
/// 移动到被释放的位置，保持存储区紧凑。
#[derive(Clone)]
pub struct RbTree<K, C = NaturalOrder<K>> {
    /// 节点存储区
    nodes: Vec<Node<K>>,
    /// 根节点
    root: Option<NodeId>,
    /// 键的数量
    len: usize,
    /// 比较器，定义键的严格全序
    comparator: C,
    /// 每次变更后是否运行结构校验
    check_invariants: bool,
}

impl<K: Ord> RbTree<K> {
    /// 使用键的自然顺序创建空树
    pub fn new() -> Self {
        Self::with_comparator(<K as Ord>::cmp as NaturalOrder<K>)
    }

    /// 使用自然顺序和给定设置创建空树
    pub fn with_settings(settings: &TreeSettings) -> Self {
        Self::with_comparator_and_settings(<K as Ord>::cmp as NaturalOrder<K>, settings)
    }
}

impl<K: Ord> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// 使用自定义比较器创建空树
    ///
    /// # 示例
    /// ```
    /// use rbtree::RbTree;
    ///
    /// let mut tree = RbTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.add_range([1, 2, 3]).unwrap();
    /// assert_eq!(tree.get_min(), Ok(&3));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        RbTree {
            nodes: Vec::new(),
            root: None,
            len: 0,
            comparator,
            check_invariants: false,
        }
    }

    /// 使用自定义比较器和给定设置创建空树
    pub fn with_comparator_and_settings(comparator: C, settings: &TreeSettings) -> Self {
        let mut tree = Self::with_comparator(comparator);
        tree.check_invariants = settings.check_invariants;
        tree
    }

    /// 按比较器比较两个键
    pub(crate) fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.comparator)(a, b)
    }

    /// 变更完成后的结构校验（仅在开启 `check_invariants` 时执行）
    pub(crate) fn after_mutation(&self, operation: &str) -> Result<()> {
        if !self.check_invariants {
            return Ok(());
        }
        if let Err(violation) = self.validate() {
            error!("Invariant check failed after {}: {}", operation, violation);
            return Err(violation.into());
        }
        Ok(())
    }
}

impl<K, C> RbTree<K, C> {
    /// 获取键的数量
    pub fn len(&self) -> usize {
        self.len
    }

    /// 检查树是否为空
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// 是否在每次变更后校验结构
    pub fn checks_invariants(&self) -> bool {
        self.check_invariants
    }

    /// 删除所有节点
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// 树高：从根到最深叶子路径上的节点数，空树为0
    pub fn height(&self) -> usize {
        fn height_of<K>(nodes: &[Node<K>], id: Option<NodeId>) -> usize {
            match id {
                Some(id) => {
                    let node = &nodes[id];
                    1 + height_of(nodes, node.left).max(height_of(nodes, node.right))
                }
                None => 0,
            }
        }
        height_of(&self.nodes, self.root)
    }

    /// 根节点的黑高：沿最左路径统计黑色节点数（不含根本身），空树为0
    ///
    /// 只在树满足红黑性质时有意义，任意路径结果都相同
    pub fn black_height(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };
        let mut count = 0;
        let mut current = self.nodes[root].left;
        while let Some(id) = current {
            if self.nodes[id].is_black() {
                count += 1;
            }
            current = self.nodes[id].left;
        }
        count
    }

    /// 导出树结构为JSON格式
    ///
    /// 返回包含完整树结构（键和颜色）的JSON字符串，用于调试和可视化
    pub fn export_to_json(&self) -> std::result::Result<String, serde_json::Error>
    where
        K: Serialize,
    {
        let visualization = TreeVisualization {
            len: self.len,
            height: self.height(),
            black_height: self.black_height(),
            root: self.root.map(|root| self.create_node_visualization(root)),
        };
        serde_json::to_string_pretty(&visualization)
    }

    /// 递归创建节点的可视化结构
    fn create_node_visualization(&self, id: NodeId) -> NodeVisualization<'_, K> {
        let node = &self.nodes[id];
        NodeVisualization {
            key: &node.key,
            color: node.color,
            left: node
                .left
                .map(|left| Box::new(self.create_node_visualization(left))),
            right: node
                .right
                .map(|right| Box::new(self.create_node_visualization(right))),
        }
    }

    // ------------------------------------------------------------------
    // 内部方法：存储区和链接操作
    // ------------------------------------------------------------------

    pub(crate) fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        &mut self.nodes[id]
    }

    pub(crate) fn nodes(&self) -> &[Node<K>] {
        &self.nodes
    }

    pub(crate) fn stored_len(&self) -> usize {
        self.len
    }

    /// 把新节点放入存储区并返回其下标（不修改计数）
    pub(crate) fn allocate(&mut self, node: Node<K>) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub(crate) fn increment_len(&mut self) {
        self.len += 1;
    }

    pub(crate) fn decrement_len(&mut self) {
        self.len -= 1;
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub(crate) fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.nodes[id].child(side)
    }

    /// 不存在的节点视为黑色
    pub(crate) fn color_of(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.nodes[id].color)
    }

    pub(crate) fn is_red(&self, id: Option<NodeId>) -> bool {
        self.color_of(id) == Color::Red
    }

    pub(crate) fn is_black(&self, id: Option<NodeId>) -> bool {
        self.color_of(id) == Color::Black
    }

    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        self.nodes[id].color = color;
    }

    /// 节点位于其父节点的哪一侧；根节点返回 `Side::Left`
    pub(crate) fn side_of(&self, id: NodeId) -> Side {
        match self.nodes[id].parent {
            Some(parent) if self.nodes[parent].right == Some(id) => Side::Right,
            _ => Side::Left,
        }
    }

    /// 把 `parent` 中指向 `old` 的链接改为 `new`；`parent` 为 `None` 时替换根
    ///
    /// 只修改父节点一侧的链接，`new` 的 `parent` 字段由调用者负责
    pub(crate) fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            Some(parent) => {
                let node = &mut self.nodes[parent];
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            }
            None => self.root = new,
        }
    }

    /// 交换两个节点中存放的键
    pub(crate) fn swap_keys(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(high);
        std::mem::swap(&mut head[low].key, &mut tail[0].key);
    }

    /// 释放已经从树中摘除的节点，返回它的键
    ///
    /// 存储区最后一个节点会被移动到 `id` 的位置，这里同步修正
    /// 它的父节点和子节点中的链接。调用前 `id` 不能再被任何链接引用。
    pub(crate) fn release(&mut self, id: NodeId) -> K {
        let last = self.nodes.len() - 1;
        let removed = self.nodes.swap_remove(id);
        if id != last {
            let (parent, left, right) = {
                let moved = &self.nodes[id];
                (moved.parent, moved.left, moved.right)
            };
            self.replace_child(parent, last, Some(id));
            if let Some(left) = left {
                self.nodes[left].parent = Some(id);
            }
            if let Some(right) = right {
                self.nodes[right].parent = Some(id);
            }
        }
        removed.key
    }
}

impl<K: fmt::Debug, C> fmt::Debug for RbTree<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RbTree")
            .field("len", &self.len)
            .field("keys", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rbtree_creation() {
        let tree: RbTree<i32> = RbTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.black_height(), 0);
        assert!(!tree.checks_invariants());
    }

    #[test]
    fn test_rbtree_with_settings() {
        let settings = TreeSettings {
            check_invariants: true,
        };
        let tree: RbTree<i32> = RbTree::with_settings(&settings);
        assert!(tree.checks_invariants());
    }

    #[test]
    fn test_clear() {
        let mut tree = RbTree::new();
        tree.add_range(1..=10).unwrap();
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(!tree.contains(&5));

        // 清空后可以继续使用
        tree.add(5).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_height_and_black_height() {
        let mut tree = RbTree::new();
        tree.add_range(1..=10).unwrap();

        // 前序遍历为 [4, 2, 1, 3, 6, 5, 8, 7, 9, 10]，最深路径 4-6-8-9-10
        assert_eq!(tree.height(), 5);
        assert_eq!(tree.black_height(), 2);
    }

    #[test]
    fn test_release_keeps_links_consistent() {
        let mut tree = RbTree::new();
        tree.add_range([5, 4, 6, 3, 7]).unwrap();

        // 删除最早插入的节点会触发存储区尾部节点的搬移
        tree.remove(&5).unwrap();
        assert!(tree.validate().is_ok());
        assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![3, 4, 6, 7]);
    }

    #[test]
    fn test_json_export() {
        let mut tree = RbTree::new();
        tree.add_range([2, 1, 3]).unwrap();

        let json = tree.export_to_json().expect("Failed to export JSON");

        assert!(json.contains("\"len\": 3"));
        assert!(json.contains("\"key\": 2"));
        assert!(json.contains("\"color\": \"Black\""));
        assert!(json.contains("\"color\": \"Red\""));
    }

    #[test]
    fn test_json_export_empty_tree() {
        let tree: RbTree<String> = RbTree::new();
        let json = tree.export_to_json().expect("Failed to export JSON");
        assert!(json.contains("\"root\": null"));
    }

    #[test]
    fn test_debug_format_lists_keys() {
        let mut tree = RbTree::new();
        tree.add_range([3, 1, 2]).unwrap();
        assert_eq!(format!("{:?}", tree), "RbTree { len: 3, keys: [1, 2, 3] }");
    }
}
