// 红黑树算法模块
//
// 这个模块包含红黑树的所有核心算法实现，按功能分解为不同的子模块：
// - insert: 插入和插入修复
// - delete: 删除和删除修复（双黑处理）
// - search: 查找、最小值、最大值
// - traversal: 中序/前序/后序遍历迭代器
// - utils: 旋转等共用的结构操作
// - validate: 红黑性质的结构校验
// - debug: 调试和可视化工具

pub mod debug;
pub mod delete;
pub mod insert;
pub mod search;
pub mod traversal;
pub mod utils;
pub mod validate;
