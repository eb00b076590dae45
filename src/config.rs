use crate::error::{AppResult, ConfigError};
use regex::Regex;

/// 程序配置文件
///
/// 表单地址与 entry 字段 ID 由第三方表单决定，属于外部配置，
/// 默认值是占位符，部署前必须替换。
#[derive(Clone, Debug)]
pub struct Config {
    /// 表单提交地址（formResponse）
    pub form_action_url: String,
    /// 教师姓名字段 ID
    pub entry_teacher: String,
    /// 评分字段 ID
    pub entry_rating: String,
    /// 评语字段 ID
    pub entry_comment: String,
    /// 学生姓名字段 ID
    pub entry_student: String,
    /// 班级字段 ID
    pub entry_class: String,
    /// 科目字段 ID
    pub entry_subject: String,
    /// 星级数量
    pub max_stars: u8,
    /// 相邻两次提交之间的间隔（毫秒）
    pub post_delay_ms: u64,
    /// 教师名单 TOML 文件（不设置则使用内置名单）
    pub roster_file: Option<String>,
    /// 跳过的教师评语是否填 "Not Taught"（否则留空）
    pub skipped_comment_not_taught: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            form_action_url: "https://docs.google.com/forms/d/e/FORM_ID/formResponse".to_string(),
            entry_teacher: "entry.1111111111".to_string(),
            entry_rating: "entry.2222222222".to_string(),
            entry_comment: "entry.3333333333".to_string(),
            entry_student: "entry.4444444444".to_string(),
            entry_class: "entry.5555555555".to_string(),
            entry_subject: "entry.6666666666".to_string(),
            max_stars: 5,
            post_delay_ms: 200,
            roster_file: None,
            skipped_comment_not_taught: true,
            verbose_logging: false,
            output_log_file: "feedback_log.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            form_action_url: std::env::var("FORM_ACTION_URL").unwrap_or(default.form_action_url),
            entry_teacher: std::env::var("ENTRY_TEACHER").unwrap_or(default.entry_teacher),
            entry_rating: std::env::var("ENTRY_RATING").unwrap_or(default.entry_rating),
            entry_comment: std::env::var("ENTRY_COMMENT").unwrap_or(default.entry_comment),
            entry_student: std::env::var("ENTRY_STUDENT").unwrap_or(default.entry_student),
            entry_class: std::env::var("ENTRY_CLASS").unwrap_or(default.entry_class),
            entry_subject: std::env::var("ENTRY_SUBJECT").unwrap_or(default.entry_subject),
            max_stars: std::env::var("MAX_STARS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_stars),
            post_delay_ms: std::env::var("POST_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.post_delay_ms),
            roster_file: std::env::var("ROSTER_FILE").ok(),
            skipped_comment_not_taught: std::env::var("SKIPPED_COMMENT_NOT_TAUGHT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.skipped_comment_not_taught),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }

    /// 按语义列出全部 entry 字段（字段名, ID）
    pub fn entry_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("teacher", &self.entry_teacher),
            ("rating", &self.entry_rating),
            ("comment", &self.entry_comment),
            ("student", &self.entry_student),
            ("class", &self.entry_class),
            ("subject", &self.entry_subject),
        ]
    }

    /// 校验所有 entry 字段 ID 的格式
    ///
    /// Google 表单的字段 ID 形如 entry.1595149144，
    /// 格式不对的提交会被表单端直接丢弃，所以在启动时就拦下来。
    pub fn validate(&self) -> AppResult<()> {
        let re = Regex::new(r"^entry\.\d+$").map_err(|e| crate::error::AppError::Other(e.to_string()))?;

        for (field, value) in self.entry_fields() {
            if !re.is_match(value) {
                return Err(crate::error::AppError::Config(ConfigError::InvalidEntryId {
                    field: field.to_string(),
                    value: value.to_string(),
                }));
            }
        }

        Ok(())
    }

    /// 是否仍在使用占位配置（未替换成真实表单的 ID）
    ///
    /// 占位 ID 形如 entry.1111111111（同一数字重复），真实表单不会生成这种 ID。
    pub fn has_placeholder_entries(&self) -> bool {
        if self.form_action_url.contains("FORM_ID") {
            return true;
        }
        self.entry_fields()
            .iter()
            .any(|(_, value)| is_repeated_digit_id(value))
    }
}

fn is_repeated_digit_id(value: &str) -> bool {
    let digits: Vec<char> = value.trim_start_matches("entry.").chars().collect();
    match digits.first() {
        Some(first) => digits.len() > 1 && digits.iter().all(|c| c == first),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_entry_ids_are_well_formed() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_entry_id() {
        let config = Config {
            entry_rating: "rating".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_config_is_placeholder() {
        let config = Config::default();
        assert!(config.has_placeholder_entries());
    }

    #[test]
    fn test_real_entry_ids_are_not_placeholder() {
        let config = Config {
            form_action_url:
                "https://docs.google.com/forms/d/e/1FAIpQLSf5nwZnYLhpkd3euTwvkPRFKh144iv3m8QuScpCc00Nzh9paA/formResponse"
                    .to_string(),
            entry_teacher: "entry.1611097108".to_string(),
            entry_rating: "entry.1604027573".to_string(),
            entry_comment: "entry.1476556732".to_string(),
            entry_student: "entry.1595149144".to_string(),
            entry_class: "entry.444093797".to_string(),
            entry_subject: "entry.253041247".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
        assert!(!config.has_placeholder_entries());
    }
}
