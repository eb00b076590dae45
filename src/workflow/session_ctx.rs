//! 会话上下文
//!
//! 封装"正在评价第几位教师"这一信息，仅用于日志显示

use std::fmt::Display;

/// 会话上下文
#[derive(Debug, Clone)]
pub struct SessionCtx {
    /// 当前教师序号（从 1 开始）
    pub teacher_index: usize,

    /// 教师总数
    pub teacher_total: usize,

    /// 当前教师姓名
    pub teacher_name: String,
}

impl SessionCtx {
    /// 创建新的会话上下文
    pub fn new(teacher_index: usize, teacher_total: usize, teacher_name: String) -> Self {
        Self {
            teacher_index,
            teacher_total,
            teacher_name,
        }
    }
}

impl Display for SessionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[教师 {}/{} {}]",
            self.teacher_index, self.teacher_total, self.teacher_name
        )
    }
}
