//! # Teacher Feedback Submit
//!
//! 一个引导学生逐位评价教师并把结果转发到第三方表单的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（终端输入），只暴露能力
//! - `Console` - 唯一的终端 owner，提供 prompt() 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理反馈记录
//! - `SubmissionRelay` - 表单字段映射 + 盲发 POST 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次会话"的状态推进
//! - `SessionCtx` - 上下文封装（第几位教师）
//! - `FeedbackFlow` - 阶段编排（欢迎 → 评价 → 提交 → 致谢）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 应用生命周期，管理资源和会话循环
//! - `orchestrator/session_runner` - 单次会话执行器，翻译输入事件
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::Console;
pub use models::{RatingWidget, ResponseRecord, Roster, StudentInfo, Teacher};
pub use orchestrator::App;
pub use services::{SubmissionRelay, SubmissionStats};
pub use workflow::{FeedbackFlow, SessionCtx, SessionPhase};
