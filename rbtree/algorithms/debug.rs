use super::super::node::{Color, NodeId};
use super::super::rbtree::RbTree;
use colored::Colorize;
use std::fmt::{Display, Write};

/// 红黑树调试功能实现
impl<K: Display, C> RbTree<K, C> {
    /// 把树结构渲染为缩进文本
    ///
    /// 每行一个节点，红节点用红色显示，空孩子显示为 `·`。
    /// 需要纯文本时可以用 `colored::control::set_override(false)` 关闭着色。
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        match self.root_id() {
            Some(root) => self.render_node(&mut out, Some(root), 0, "root"),
            None => out.push_str("Empty tree (no root)\n"),
        }
        out
    }

    fn render_node(&self, out: &mut String, id: Option<NodeId>, depth: usize, label: &str) {
        let indent = "  ".repeat(depth);
        let Some(id) = id else {
            let _ = writeln!(out, "{}{}: ·", indent, label);
            return;
        };

        let node = self.node(id);
        let text = format!("{} ({})", node.key, node.color);
        let text = match node.color {
            Color::Red => text.red().to_string(),
            Color::Black => text.bold().to_string(),
        };
        let _ = writeln!(out, "{}{}: {}", indent, label, text);

        if !node.is_leaf() {
            self.render_node(out, node.left, depth + 1, "L");
            self.render_node(out, node.right, depth + 1, "R");
        }
    }

    /// 打印完整的树结构用于调试
    pub fn print_tree_structure_debug(&self) {
        println!("=== Red-black tree structure ===");
        print!("{}", self.render_tree());
        println!("=== End Debug ===");
    }
}
