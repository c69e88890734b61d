use super::super::node::{Color, Node, NodeId, Side};
use super::super::rbtree::RbTree;
use crate::error::{Result, TreeError};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// 插入操作相关算法
impl<K, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// 插入一个键
    ///
    /// 键已存在时返回 `TreeError::DuplicateKey`，树保持不变
    ///
    /// # 示例
    /// ```
    /// use rbtree::{RbTree, TreeError};
    ///
    /// let mut tree = RbTree::new();
    /// tree.add(1).unwrap();
    /// assert_eq!(tree.add(1), Err(TreeError::DuplicateKey));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn add(&mut self, key: K) -> Result<()> {
        // 1. 沿比较器下降找到空的孩子槽位，遇到相等的键立即失败
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root_id();
        while let Some(id) = current {
            side = match self.compare(&key, &self.node(id).key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    debug!("Rejected duplicate key");
                    return Err(TreeError::DuplicateKey);
                }
            };
            parent = Some(id);
            current = self.child(id, side);
        }

        // 2. 作为红色叶子挂到槽位上
        let id = self.allocate(Node::new_leaf(key, parent));
        match parent {
            Some(parent) => self.node_mut(parent).set_child(side, Some(id)),
            None => self.set_root(Some(id)),
        }

        // 3. 自底向上修复
        self.insert_fixup(id);

        // 4. 更新计数
        self.increment_len();
        debug!("Added key, len = {}", self.len());
        self.after_mutation("add")
    }

    /// 依次插入多个键
    ///
    /// 遇到第一个重复键时停止并返回错误，之前插入的键保留在树中
    pub fn add_range<I>(&mut self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.add(key)?;
        }
        Ok(())
    }

    /// 插入修复：恢复“红节点没有红孩子”，同时保持根为黑、黑高不变
    ///
    /// 循环每一步要么结束，要么把当前位置上移两层，要么旋转后结束
    fn insert_fixup(&mut self, mut node: NodeId) {
        loop {
            let Some(parent) = self.parent(node) else {
                trace!("insert case 3: node is root");
                self.set_color(node, Color::Black);
                return;
            };

            if self.is_black(Some(parent)) {
                trace!("insert case 1: parent is black");
                return;
            }

            let Some(grandparent) = self.parent(parent) else {
                trace!("insert case 4: parent is red root");
                self.set_color(parent, Color::Black);
                return;
            };

            let parent_side = self.side_of(parent);
            let uncle = self.child(grandparent, parent_side.opposite());

            if self.is_red(uncle) {
                trace!("insert case 2: parent and uncle are red");
                self.set_color(parent, Color::Black);
                if let Some(uncle) = uncle {
                    self.set_color(uncle, Color::Black);
                }
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            // 叔节点为黑：旋转后终止
            let mut top = parent;
            if self.side_of(node) != parent_side {
                trace!("insert case 5: zig-zag, rotating node over parent");
                self.rotate_up(node);
                top = node;
            }

            trace!("insert case 6: rotating parent over grandparent");
            self.rotate_up(top);
            self.set_color(top, Color::Black);
            self.set_color(grandparent, Color::Red);
            return;
        }
    }
}
