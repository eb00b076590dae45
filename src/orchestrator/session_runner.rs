//! 会话执行器 - 编排层
//!
//! ## 职责
//!
//! 本模块驱动一次完整的评价会话，是会话级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **欢迎页**：展示名单规模，等待学生开始
//! 2. **逐位收集**：循环展示教师、读取输入、转交流程层
//! 3. **转发提交**：把整组记录交给 SubmissionRelay
//! 4. **致谢页**：无条件到达，提交失败不会展示给学生
//! 5. **重新开始**：按学生选择清空会话

use crate::infrastructure::Console;
use crate::services::{SubmissionRelay, SubmissionStats};
use crate::workflow::{FeedbackFlow, SessionCtx, SessionPhase};
use anyhow::Result;
use tracing::info;

/// 一次会话的结果
#[derive(Debug)]
pub struct SessionOutcome {
    pub stats: SubmissionStats,
    pub restart_requested: bool,
}

/// 执行一次完整的评价会话
///
/// # 参数
/// - `console`: 控制台（持有终端输入）
/// - `flow`: 反馈流程控制器
/// - `relay`: 提交转发服务
///
/// # 返回
/// 返回本次会话的提交统计和是否要求重新开始
pub async fn run_session(
    console: &mut Console,
    flow: &mut FeedbackFlow,
    relay: &SubmissionRelay,
) -> Result<SessionOutcome> {
    show_welcome(console, flow);
    console.pause("按回车开始评价: ")?;

    flow.start();
    collect_student_info(console, flow)?;

    // ========== 逐位教师收集 ==========
    while flow.phase() == SessionPhase::Active {
        let ctx = current_ctx(flow);
        present_teacher(console, flow, &ctx);
        collect_feedback(console, flow, &ctx)?;
    }

    // ========== 提交阶段 ==========
    // 提交一旦开始不可中断，输入在此期间不再被读取
    info!("📤 正在提交 {} 条反馈记录...", flow.responses().len());
    console.println("\n正在提交，请稍候...");

    let stats = relay.submit_all(flow.responses()).await;
    flow.finish_submission();

    show_thank_you(console, &stats);

    let restart_requested = prompt_restart(console)?;
    if restart_requested {
        flow.restart();
    }

    Ok(SessionOutcome {
        stats,
        restart_requested,
    })
}

/// 构建当前教师的会话上下文（用于日志）
fn current_ctx(flow: &FeedbackFlow) -> SessionCtx {
    let name = flow
        .current_teacher()
        .map(|t| t.name.clone())
        .unwrap_or_default();
    SessionCtx::new(flow.current_index() + 1, flow.roster().len(), name)
}

/// 录入学生信息
fn collect_student_info(console: &mut Console, flow: &mut FeedbackFlow) -> Result<()> {
    console.println(&format!("\n{}", "─".repeat(40)));
    console.println("学生信息（可留空）");

    let name = console.prompt("学生姓名: ")?;
    let class = console.prompt("班级: ")?;

    let hint = flow.student().subject.clone();
    let subject = if hint.is_empty() {
        console.prompt("科目: ")?
    } else {
        console.prompt(&format!("科目（回车使用 {}）: ", hint))?
    };

    let subject = if subject.is_empty() {
        None
    } else {
        Some(subject)
    };
    flow.set_student_info(name, class, subject);

    Ok(())
}

/// 展示当前教师
fn present_teacher(console: &Console, flow: &FeedbackFlow, ctx: &SessionCtx) {
    let Some(teacher) = flow.current_teacher() else {
        return;
    };

    info!("{} 开始收集反馈", ctx);

    console.println(&format!("\n{}", "─".repeat(40)));
    console.println(&format!(
        "教师 {} / {}",
        ctx.teacher_index, ctx.teacher_total
    ));
    console.println(&format!("姓名: {}", teacher.name));
    if let Some(meta) = &teacher.meta {
        console.println(&format!("信息: {}", meta));
    }
    console.println(&format!("照片: {}", teacher.photo));
}

/// 收集当前教师的反馈，直到学生选择前进
fn collect_feedback(
    console: &mut Console,
    flow: &mut FeedbackFlow,
    ctx: &SessionCtx,
) -> Result<()> {
    loop {
        let input = console.prompt(&feedback_hint(flow))?;

        match input.as_str() {
            "" => continue,
            "c" => {
                let text = console.prompt("评语: ")?;
                flow.on_comment_changed(text);
            }
            "s" => {
                flow.on_skip();
                info!("{} ⏭ 已跳过（未任教）", ctx);
                return Ok(());
            }
            "n" if !flow.is_last_teacher() => {
                info!("{} ✓ 已记录评分 {}", ctx, flow.widget().rating());
                flow.on_next();
                return Ok(());
            }
            "t" if flow.is_last_teacher() => {
                info!("{} ✓ 已记录评分 {}，准备提交", ctx, flow.widget().rating());
                flow.on_submit();
                return Ok(());
            }
            other => match other.parse::<u8>() {
                Ok(n) => match flow.on_star_selected(n) {
                    Ok(()) => console.println(&flow.widget().render_line()),
                    Err(e) => console.println(&e.to_string()),
                },
                Err(_) => console.println("无效输入"),
            },
        }
    }
}

/// 按当前教师位置生成输入提示
fn feedback_hint(flow: &FeedbackFlow) -> String {
    let advance = if flow.is_last_teacher() {
        "t 提交全部"
    } else {
        "n 下一位"
    };
    format!(
        "输入 1-{} 打分 | c 评语 | s 跳过（未任教） | {}: ",
        flow.widget().max_stars(),
        advance
    )
}

// ========== 页面辅助函数 ==========

fn show_welcome(console: &Console, flow: &FeedbackFlow) {
    console.println(&format!("\n{}", "=".repeat(60)));
    console.println("欢迎参加教师评价");
    console.println(&format!(
        "本次共需评价 {} 位教师，未任教的教师可以跳过",
        flow.roster().len()
    ));
    console.println(&"=".repeat(60));
}

fn show_thank_you(console: &Console, stats: &SubmissionStats) {
    console.println(&format!("\n{}", "=".repeat(60)));
    console.println("感谢你的反馈！");
    console.println(&"=".repeat(60));

    info!(
        "✅ 会话结束: 尝试提交 {} 条, 失败 {} 条",
        stats.attempted, stats.failed
    );
}

fn prompt_restart(console: &mut Console) -> Result<bool> {
    let answer = console.prompt("\n重新开始？(y/N): ")?;
    Ok(answer.eq_ignore_ascii_case("y"))
}
