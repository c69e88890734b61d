use super::super::node::{NodeId, Side};
use super::super::rbtree::RbTree;
use crate::error::{Result, TreeError};
use std::cmp::Ordering;

/// 搜索操作相关算法
impl<K, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// 检查键是否在树中
    pub fn contains(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    /// 查找与 `key` 相等的已存储键
    pub fn get(&self, key: &K) -> Option<&K> {
        self.find_node(key).map(|id| &self.node(id).key)
    }

    /// 二叉搜索下降，返回持有该键的节点
    pub(crate) fn find_node(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root_id();
        while let Some(id) = current {
            current = match self.compare(key, &self.node(id).key) {
                Ordering::Less => self.child(id, Side::Left),
                Ordering::Greater => self.child(id, Side::Right),
                Ordering::Equal => return Some(id),
            };
        }
        None
    }
}

impl<K, C> RbTree<K, C> {
    /// 获取最小的键，空树返回 `TreeError::EmptyStructure`
    pub fn get_min(&self) -> Result<&K> {
        let root = self.root_id().ok_or(TreeError::EmptyStructure)?;
        Ok(&self.node(self.min_node_from(root)).key)
    }

    /// 获取最大的键，空树返回 `TreeError::EmptyStructure`
    pub fn get_max(&self) -> Result<&K> {
        let root = self.root_id().ok_or(TreeError::EmptyStructure)?;
        Ok(&self.node(self.max_node_from(root)).key)
    }
}
