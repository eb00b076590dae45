use serde::{Deserialize, Serialize};

/// 一条反馈记录
///
/// 学生前进到下一位教师（下一位 / 跳过 / 提交）时创建，
/// 追加进会话的记录列表，创建后不再修改。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub teacher_name: String,
    /// 0 表示未评分
    pub rating: u8,
    pub comment: String,
    pub skipped: bool,
    pub student_name: String,
    pub student_class: String,
    pub subject: String,
}

/// 学生信息
///
/// 每个会话录入一次，重新开始时清空
#[derive(Debug, Clone, Default)]
pub struct StudentInfo {
    pub name: String,
    pub class: String,
    pub subject: String,
}
