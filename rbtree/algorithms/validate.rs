use super::super::node::NodeId;
use super::super::rbtree::RbTree;
use crate::error::InvariantViolation;
use std::cmp::Ordering;

/// 结构校验
///
/// 直接检查颜色和链接，而不是只看公开接口的行为：
/// 违反黑高性质的树在查询结果上可能暂时看不出任何问题。
impl<K, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// 校验全部红黑性质，成功时返回根节点的黑高
    ///
    /// 检查项：
    /// 1. 中序遍历严格递增（二叉搜索树顺序）
    /// 2. 根为黑色且没有父链接
    /// 3. 红节点没有红孩子
    /// 4. 每个节点左右子树黑高相等
    /// 5. 子节点的父链接指回自己
    /// 6. 存储的计数等于可达节点数
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let Some(root) = self.root_id() else {
            if self.stored_len() != 0 {
                return Err(InvariantViolation::CountMismatch {
                    stored: self.stored_len(),
                    actual: 0,
                });
            }
            return Ok(0);
        };

        if self.node(root).parent.is_some() {
            return Err(InvariantViolation::RootHasParent);
        }
        if self.node(root).is_red() {
            return Err(InvariantViolation::RedRoot);
        }

        let mut count = 0;
        let height = self.validate_subtree(root, &mut count)?;
        if count != self.stored_len() {
            return Err(InvariantViolation::CountMismatch {
                stored: self.stored_len(),
                actual: count,
            });
        }

        self.validate_order()?;

        // 黑高不含根节点自身
        Ok(height - 1)
    }

    /// 自底向上计算黑高（包含 `id` 自身），同时检查颜色和父链接
    fn validate_subtree(&self, id: NodeId, count: &mut usize) -> Result<usize, InvariantViolation> {
        *count += 1;
        let node = self.node(id);

        for child in [node.left, node.right].into_iter().flatten() {
            if self.node(child).parent != Some(id) {
                return Err(InvariantViolation::BrokenParentLink { node: id });
            }
            if node.is_red() && self.node(child).is_red() {
                return Err(InvariantViolation::RedRedEdge { node: id });
            }
        }

        let left = match node.left {
            Some(left) => self.validate_subtree(left, count)?,
            None => 0,
        };
        let right = match node.right {
            Some(right) => self.validate_subtree(right, count)?,
            None => 0,
        };
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch {
                node: id,
                left,
                right,
            });
        }

        Ok(left + usize::from(node.is_black()))
    }

    /// 中序遍历中相邻的键必须严格递增
    fn validate_order(&self) -> Result<(), InvariantViolation> {
        let mut previous: Option<&K> = None;
        for (position, key) in self.in_order().enumerate() {
            if let Some(previous) = previous {
                if self.compare(previous, key) != Ordering::Less {
                    return Err(InvariantViolation::OutOfOrder { node: position });
                }
            }
            previous = Some(key);
        }
        Ok(())
    }
}
