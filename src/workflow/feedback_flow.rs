//! 反馈流程 - 流程层
//!
//! 核心职责：推进"一次评价会话"的状态机
//!
//! 阶段顺序：Welcome → Active(0..N-1) → Submitting → Done
//!
//! 不变式：任何一次前进之后 responses.len() == current_index
//! （每次前进恰好落一条记录、游标加一）

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{RatingWidget, ResponseRecord, Roster, StudentInfo, Teacher};
use tracing::debug;

/// 会话阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// 欢迎页
    Welcome,
    /// 逐位教师收集反馈
    Active,
    /// 正在向表单端转发记录
    Submitting,
    /// 致谢页
    Done,
}

/// 反馈流程控制器
///
/// - 编排 欢迎 → 评价 → 提交 → 致谢 的阶段推进
/// - 持有名单游标、评分控件与已收集的记录
/// - 不持有任何 I/O 资源
/// - 事件处理方法与渲染层完全解耦
pub struct FeedbackFlow {
    roster: Roster,
    phase: SessionPhase,
    current_index: usize,
    widget: RatingWidget,
    comment: String,
    student: StudentInfo,
    responses: Vec<ResponseRecord>,
}

impl FeedbackFlow {
    /// 创建新的反馈流程，初始停在欢迎页
    pub fn new(roster: Roster, config: &Config) -> Self {
        Self {
            roster,
            phase: SessionPhase::Welcome,
            current_index: 0,
            widget: RatingWidget::new(config.max_stars),
            comment: String::new(),
            student: StudentInfo::default(),
            responses: Vec::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn widget(&self) -> &RatingWidget {
        &self.widget
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn student(&self) -> &StudentInfo {
        &self.student
    }

    pub fn responses(&self) -> &[ResponseRecord] {
        &self.responses
    }

    /// 当前待评价的教师（提交开始后为 None）
    pub fn current_teacher(&self) -> Option<&Teacher> {
        self.roster.get(self.current_index)
    }

    /// 当前教师是否为最后一位（决定展示"下一位"还是"提交"）
    pub fn is_last_teacher(&self) -> bool {
        self.roster.is_last(self.current_index)
    }

    /// 开始新会话
    ///
    /// 游标归零、清空记录和学生信息，加载第一位教师
    pub fn start(&mut self) {
        self.current_index = 0;
        self.responses.clear();
        self.student = StudentInfo::default();
        self.phase = SessionPhase::Active;
        self.load_teacher(0);
    }

    /// 录入学生信息
    ///
    /// 科目为空时保留加载教师时预填的值
    pub fn set_student_info(&mut self, name: String, class: String, subject: Option<String>) {
        self.student.name = name;
        self.student.class = class;
        if let Some(subject) = subject.filter(|s| !s.is_empty()) {
            self.student.subject = subject;
        }
    }

    // ========== 事件处理方法 ==========

    /// 处理点星事件
    pub fn on_star_selected(&mut self, n: u8) -> AppResult<()> {
        self.widget.select(n)
    }

    /// 处理评语输入事件
    pub fn on_comment_changed(&mut self, text: String) {
        self.comment = text;
    }

    /// 处理"下一位"事件
    pub fn on_next(&mut self) {
        self.advance(false);
    }

    /// 处理"跳过（未任教）"事件
    pub fn on_skip(&mut self) {
        self.advance(true);
    }

    /// 处理"提交"事件
    ///
    /// 最后一位教师的反馈同样要先落一条记录，再进入提交阶段
    pub fn on_submit(&mut self) {
        self.advance(false);
    }

    /// 提交完成后进入致谢阶段
    ///
    /// 无条件转移：提交没有失败态
    pub fn finish_submission(&mut self) {
        if self.phase == SessionPhase::Submitting {
            self.phase = SessionPhase::Done;
        }
    }

    /// 重新开始：清空记录，回到欢迎页
    pub fn restart(&mut self) {
        self.responses.clear();
        self.current_index = 0;
        self.student = StudentInfo::default();
        self.comment.clear();
        self.widget.reset();
        self.phase = SessionPhase::Welcome;
    }

    /// 保存当前教师的反馈并前进
    ///
    /// 只在 Active 阶段生效，游标到头后再触发也不会越界
    fn advance(&mut self, skipped: bool) {
        if self.phase != SessionPhase::Active {
            return;
        }
        let Some(teacher) = self.roster.get(self.current_index) else {
            self.phase = SessionPhase::Submitting;
            return;
        };

        let record = ResponseRecord {
            teacher_name: teacher.name.clone(),
            rating: if skipped { 0 } else { self.widget.rating() },
            comment: if skipped {
                String::new()
            } else {
                self.comment.clone()
            },
            skipped,
            student_name: self.student.name.clone(),
            student_class: self.student.class.clone(),
            subject: self.student.subject.clone(),
        };

        debug!(
            "落记录: {} (评分 {}, 跳过 {})",
            record.teacher_name, record.rating, record.skipped
        );

        self.responses.push(record);
        self.current_index += 1;

        if self.current_index < self.roster.len() {
            self.load_teacher(self.current_index);
        } else {
            self.phase = SessionPhase::Submitting;
        }
    }

    /// 加载第 index 位教师
    ///
    /// 清空评分和评语，并用教师附加信息预填科目
    fn load_teacher(&mut self, index: usize) {
        self.widget.reset();
        self.comment.clear();

        if let Some(hint) = self.roster.get(index).and_then(|t| t.subject_hint()) {
            self.student.subject = hint;
        }
    }
}
