//! 应用 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责生命周期和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头、校验配置、加载名单
//! 2. **资源管理**：持有 Console / FeedbackFlow / SubmissionRelay
//! 3. **会话循环**：学生选择重新开始时再跑一轮会话
//! 4. **全局统计**：汇总所有会话的提交结果

use crate::config::Config;
use crate::infrastructure::Console;
use crate::models::{self, Roster};
use crate::orchestrator::session_runner;
use crate::services::SubmissionRelay;
use crate::workflow::FeedbackFlow;
use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    console: Console,
    flow: FeedbackFlow,
    relay: SubmissionRelay,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        // 校验表单配置
        config.validate()?;
        if config.has_placeholder_entries() {
            warn!("⚠️ 表单配置仍是占位值，提交不会到达真实表单");
        }

        // 加载教师名单
        let roster = load_roster(&config).await?;
        info!("✓ 名单就绪，共 {} 位教师", roster.len());

        let flow = FeedbackFlow::new(roster, &config);
        let relay = SubmissionRelay::new(&config);

        Ok(Self {
            config,
            console: Console::new(),
            flow,
            relay,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(self) -> Result<()> {
        let App {
            config,
            mut console,
            mut flow,
            relay,
        } = self;

        let mut stats = RunStats::default();

        // 会话循环：学生在致谢页选择重新开始时再跑一轮
        loop {
            let outcome = session_runner::run_session(&mut console, &mut flow, &relay).await?;

            stats.sessions += 1;
            stats.attempted += outcome.stats.attempted;
            stats.failed += outcome.stats.failed;

            if !outcome.restart_requested {
                break;
            }
        }

        // 输出最终统计
        print_final_stats(&stats, &config);

        Ok(())
    }
}

/// 运行统计
#[derive(Debug, Default)]
struct RunStats {
    sessions: usize,
    attempted: usize,
    failed: usize,
}

/// 加载教师名单
async fn load_roster(config: &Config) -> Result<Roster> {
    match &config.roster_file {
        Some(path) => {
            info!("\n📁 正在加载教师名单: {}", path);
            models::load_roster_from_toml(Path::new(path)).await
        }
        None => {
            info!("使用内置教师名单");
            Ok(Roster::builtin())
        }
    }
}

// ========== 日志辅助函数 ==========

fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n教师评价提交日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 教师评价收集模式");
    info!("📤 表单端点: {}", config.form_action_url);
    info!("{}", "=".repeat(60));
}

fn print_final_stats(stats: &RunStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部会话完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 会话: {}", stats.sessions);
    info!("📤 提交: {} 条 (失败 {} 条)", stats.attempted, stats.failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}
