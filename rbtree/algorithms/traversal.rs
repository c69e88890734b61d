use super::super::node::{Node, NodeId};
use super::super::rbtree::RbTree;

/// 中序遍历迭代器：按比较器升序产出键
///
/// 使用显式栈，栈深度不超过树高
#[derive(Debug)]
pub struct InOrder<'a, K> {
    nodes: &'a [Node<K>],
    stack: Vec<NodeId>,
}

impl<'a, K> InOrder<'a, K> {
    fn new(nodes: &'a [Node<K>], root: Option<NodeId>) -> Self {
        let mut iter = InOrder {
            nodes,
            stack: Vec::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.nodes[id].left;
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.nodes[id];
        self.push_left_spine(node.right);
        Some(&node.key)
    }
}

/// 前序遍历迭代器：节点、左子树、右子树
#[derive(Debug)]
pub struct PreOrder<'a, K> {
    nodes: &'a [Node<K>],
    stack: Vec<NodeId>,
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.nodes[id];
        // 右孩子先入栈，保证左子树先被访问
        if let Some(right) = node.right {
            self.stack.push(right);
        }
        if let Some(left) = node.left {
            self.stack.push(left);
        }
        Some(&node.key)
    }
}

/// 后序遍历迭代器：左子树、右子树、节点
///
/// 栈中每项记录节点以及其子树是否已经展开
#[derive(Debug)]
pub struct PostOrder<'a, K> {
    nodes: &'a [Node<K>],
    stack: Vec<(NodeId, bool)>,
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, expanded)) = self.stack.pop() {
            let node = &self.nodes[id];
            if expanded {
                return Some(&node.key);
            }
            self.stack.push((id, true));
            if let Some(right) = node.right {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left {
                self.stack.push((left, false));
            }
        }
        None
    }
}

// 手写 Clone 以免要求 K: Clone
impl<K> Clone for InOrder<'_, K> {
    fn clone(&self) -> Self {
        InOrder {
            nodes: self.nodes,
            stack: self.stack.clone(),
        }
    }
}

impl<K> Clone for PreOrder<'_, K> {
    fn clone(&self) -> Self {
        PreOrder {
            nodes: self.nodes,
            stack: self.stack.clone(),
        }
    }
}

impl<K> Clone for PostOrder<'_, K> {
    fn clone(&self) -> Self {
        PostOrder {
            nodes: self.nodes,
            stack: self.stack.clone(),
        }
    }
}

/// 遍历操作
///
/// 每次调用都会返回一个从头开始的新迭代器，遍历期间树不能被修改
impl<K, C> RbTree<K, C> {
    /// 中序遍历（升序）
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.nodes(), self.root_id())
    }

    /// 前序遍历
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder {
            nodes: self.nodes(),
            stack: self.root_id().into_iter().collect(),
        }
    }

    /// 后序遍历
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder {
            nodes: self.nodes(),
            stack: self.root_id().map(|root| (root, false)).into_iter().collect(),
        }
    }

    /// 等同于 `in_order`
    pub fn iter(&self) -> InOrder<'_, K> {
        self.in_order()
    }
}

impl<'a, K, C> IntoIterator for &'a RbTree<K, C> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

#[cfg(test)]
mod tests {
    use crate::RbTree;

    #[test]
    fn test_traversals_of_sequential_tree() {
        let mut tree = RbTree::new();
        tree.add_range(1..=10).unwrap();

        assert_eq!(
            tree.in_order().copied().collect::<Vec<_>>(),
            (1..=10).collect::<Vec<_>>()
        );
        assert_eq!(
            tree.pre_order().copied().collect::<Vec<_>>(),
            vec![4, 2, 1, 3, 6, 5, 8, 7, 9, 10]
        );
        assert_eq!(
            tree.post_order().copied().collect::<Vec<_>>(),
            vec![1, 3, 2, 5, 7, 10, 9, 8, 6, 4]
        );
    }

    #[test]
    fn test_traversals_of_empty_tree() {
        let tree: RbTree<i32> = RbTree::new();
        assert_eq!(tree.in_order().next(), None);
        assert_eq!(tree.pre_order().next(), None);
        assert_eq!(tree.post_order().next(), None);
    }

    #[test]
    fn test_traversal_is_restartable() {
        let mut tree = RbTree::new();
        tree.add_range([3, 1, 2]).unwrap();

        let mut first = tree.in_order();
        assert_eq!(first.next(), Some(&1));

        // 克隆的迭代器从当前位置继续，新迭代器从头开始
        let resumed = first.clone();
        assert_eq!(resumed.copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_into_iterator_for_reference() {
        let mut tree = RbTree::new();
        tree.add_range(['c', 'a', 'b']).unwrap();

        let mut keys = Vec::new();
        for key in &tree {
            keys.push(*key);
        }
        assert_eq!(keys, vec!['a', 'b', 'c']);
        assert_eq!(tree.iter().count(), 3);
    }
}
