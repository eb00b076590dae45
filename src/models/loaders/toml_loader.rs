use crate::error::AppError;
use crate::models::teacher::Roster;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载教师名单
///
/// 文件格式为若干 [[teachers]] 表，空名单视为错误
pub async fn load_roster_from_toml(roster_path: &Path) -> Result<Roster> {
    let content = fs::read_to_string(roster_path)
        .await
        .with_context(|| format!("无法读取名单文件: {}", roster_path.display()))?;

    let roster: Roster = toml::from_str(&content)
        .with_context(|| format!("无法解析名单文件: {}", roster_path.display()))?;

    if roster.is_empty() {
        return Err(AppError::empty_roster())
            .with_context(|| format!("名单文件没有任何教师: {}", roster_path.display()));
    }

    tracing::info!("成功加载 {} 位教师", roster.len());

    Ok(roster)
}
