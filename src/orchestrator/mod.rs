//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责会话调度和资源管理，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `app` - 应用
//! - 管理应用生命周期（初始化、运行、收尾）
//! - 校验配置、加载名单
//! - 持有 Console / FeedbackFlow / SubmissionRelay
//! - 输出全局统计信息
//!
//! ### `session_runner` - 会话执行器
//! - 驱动一次完整的评价会话
//! - 把控制台输入翻译成流程层事件
//! - 调用 SubmissionRelay 转发整组记录
//!
//! ## 层次关系
//!
//! ```text
//! app (会话循环)
//!     ↓
//! session_runner (一次会话)
//!     ↓
//! workflow::FeedbackFlow (状态推进)
//!     ↓
//! services (能力层：relay)
//!     ↓
//! infrastructure (基础设施：Console)
//! ```

pub mod app;
pub mod session_runner;

pub use app::App;
pub use session_runner::{run_session, SessionOutcome};
