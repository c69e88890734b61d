use super::super::node::NodeId;
use super::super::rbtree::RbTree;

/// 旋转等插入/删除共用的结构操作
impl<K, C> RbTree<K, C> {
    /// 把 `pivot` 旋转到其父节点的位置
    ///
    /// `pivot` 是左孩子时即右旋，是右孩子时即左旋。`pivot` 靠内侧的子树
    /// 转交给原父节点，中序顺序保持不变。`pivot` 为根时不做任何事。
    pub(crate) fn rotate_up(&mut self, pivot: NodeId) {
        let Some(node) = self.parent(pivot) else {
            return;
        };
        let side = self.side_of(pivot);
        let inner = self.child(pivot, side.opposite());
        let grandparent = self.parent(node);

        // 原父节点的链接先改为指向 pivot
        self.replace_child(grandparent, node, Some(pivot));
        self.node_mut(pivot).parent = grandparent;

        // 内侧子树挂到 node 原来放 pivot 的一侧
        self.node_mut(node).set_child(side, inner);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(node);
        }

        // node 下沉为 pivot 的另一侧孩子
        self.node_mut(pivot).set_child(side.opposite(), Some(node));
        self.node_mut(node).parent = Some(pivot);
    }

    /// 子树中键最小的节点
    pub(crate) fn min_node_from(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    /// 子树中键最大的节点
    pub(crate) fn max_node_from(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.node(id).right {
            id = right;
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use crate::RbTree;

    #[test]
    fn test_rotate_up_right_child_is_left_rotation() {
        // 1 -> 2 -> 3 直线插入后树为 2(1, 3)
        let mut tree = RbTree::new();
        tree.add_range([1, 2, 3]).unwrap();
        let root = tree.root_id().unwrap();
        let right = tree.node(root).right.unwrap();

        tree.rotate_up(right);

        let new_root = tree.root_id().unwrap();
        assert_eq!(tree.node(new_root).key, 3);
        assert_eq!(tree.node(new_root).parent, None);
        assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_rotate_up_moves_inner_subtree() {
        let mut tree = RbTree::new();
        tree.add_range([4, 2, 6, 1, 3]).unwrap();
        let root = tree.root_id().unwrap();
        let left = tree.node(root).left.unwrap();

        tree.rotate_up(left);

        // 2 上升为根，3 转交给 4 作为左孩子
        assert_eq!(
            tree.pre_order().copied().collect::<Vec<_>>(),
            vec![2, 1, 4, 3, 6]
        );
        let new_root = tree.root_id().unwrap();
        let four = tree.node(new_root).right.unwrap();
        let three = tree.node(four).left.unwrap();
        assert_eq!(tree.node(three).key, 3);
        assert_eq!(tree.node(three).parent, Some(four));
        assert_eq!(tree.node(four).parent, Some(new_root));
    }

    #[test]
    fn test_rotate_up_on_root_is_noop() {
        let mut tree = RbTree::new();
        tree.add_range([2, 1, 3]).unwrap();
        let root = tree.root_id().unwrap();

        tree.rotate_up(root);

        assert_eq!(tree.root_id(), Some(root));
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_min_max_node_from() {
        let mut tree = RbTree::new();
        tree.add_range(1..=10).unwrap();
        let root = tree.root_id().unwrap();
        assert_eq!(tree.node(tree.min_node_from(root)).key, 1);
        assert_eq!(tree.node(tree.max_node_from(root)).key, 10);
    }
}
