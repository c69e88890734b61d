use super::super::node::{Color, NodeId, Side};
use super::super::rbtree::RbTree;
use crate::error::{Result, TreeError};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// 红黑树删除算法实现
impl<K, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// 删除指定的键并返回树中存放的那个键
    ///
    /// - 空树返回 `TreeError::EmptyStructure`
    /// - 键不存在返回 `TreeError::KeyNotFound`
    ///
    /// 两种失败都不会修改树
    pub fn remove(&mut self, key: &K) -> Result<K> {
        // 1. 找到目标节点
        if self.is_empty() {
            debug!("Remove called on empty tree");
            return Err(TreeError::EmptyStructure);
        }
        let Some(target) = self.find_node(key) else {
            debug!("Remove called with missing key");
            return Err(TreeError::KeyNotFound);
        };

        // 2. 有两个孩子时与中序后继交换键，改为删除后继节点（最多一个孩子）
        let victim = match (self.node(target).left, self.node(target).right) {
            (Some(_), Some(right)) => {
                let successor = self.min_node_from(right);
                self.swap_keys(target, successor);
                successor
            }
            _ => target,
        };

        // 3. 摘除节点，孩子（可能不存在）接替它的位置
        let (parent, child, color) = {
            let node = self.node(victim);
            (node.parent, node.left.or(node.right), node.color)
        };
        let side = self.side_of(victim);
        self.replace_child(parent, victim, child);
        if let Some(child) = child {
            self.node_mut(child).parent = parent;
        }

        // 4. 只有删除黑色节点才会破坏黑高
        if color == Color::Black {
            match child {
                Some(child) if self.is_red(Some(child)) => {
                    trace!("remove: red replacement absorbs the missing black");
                    self.set_color(child, Color::Black);
                }
                _ => {
                    if let Some(parent) = parent {
                        self.remove_fixup(child, parent, side);
                    }
                }
            }
        }

        // 5. 释放节点并更新计数
        let removed = self.release(victim);
        self.decrement_len();
        debug!("Removed key, len = {}", self.len());
        self.after_mutation("remove")?;
        Ok(removed)
    }

    /// 删除修复：`node` 所在位置（可能是空位）每条路径都少一个黑节点
    ///
    /// `parent` 是该位置的父节点，`side` 是该位置在父节点中的一侧。
    /// 循环每一步要么结束，要么把双黑位置上移一层，要么旋转后结束。
    fn remove_fixup(&mut self, mut node: Option<NodeId>, mut parent: NodeId, mut side: Side) {
        loop {
            let Some(mut sibling) = self.child(parent, side.opposite()) else {
                // 黑高性质保证双黑位置的兄弟存在，这里只是防止结构损坏时越界
                break;
            };

            if self.is_red(Some(sibling)) {
                trace!("remove case 3: sibling is red");
                self.rotate_up(sibling);
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                match self.child(parent, side.opposite()) {
                    Some(next) => sibling = next,
                    None => break,
                }
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, side.opposite());

            if self.is_black(near) && self.is_black(far) {
                self.set_color(sibling, Color::Red);
                if self.is_red(Some(parent)) {
                    trace!("remove case 4: red parent absorbs the missing black");
                    self.set_color(parent, Color::Black);
                    return;
                }

                trace!("remove case 1: moving double black up");
                node = Some(parent);
                match self.parent(parent) {
                    Some(grandparent) => {
                        side = self.side_of(parent);
                        parent = grandparent;
                        continue;
                    }
                    None => {
                        trace!("remove case 2: reached root");
                        break;
                    }
                }
            }

            let mut far = far;
            if self.is_black(far) {
                // 近侧侄子为红，转成远侧侄子为红的情况
                if let Some(near) = near {
                    trace!("remove case 5: near nephew is red");
                    self.rotate_up(near);
                    self.set_color(near, Color::Black);
                    self.set_color(sibling, Color::Red);
                    far = Some(sibling);
                    sibling = near;
                }
            }

            trace!("remove case 6: far nephew is red");
            let parent_color = self.color_of(Some(parent));
            self.rotate_up(sibling);
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            if let Some(far) = far {
                self.set_color(far, Color::Black);
            }
            return;
        }

        if let Some(node) = node {
            self.set_color(node, Color::Black);
        }
    }
}
