//! 提交转发服务 - 业务能力层
//!
//! 只负责"把反馈记录发送到第三方表单"能力，不关心流程
//!
//! 表单端是盲端点：不读响应状态，发送失败只记日志，不重试

use crate::config::Config;
use crate::error::AppResult;
use crate::models::ResponseRecord;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// 提交统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionStats {
    /// 尝试提交的记录数（无论成败）
    pub attempted: usize,
    /// 发送失败的记录数
    pub failed: usize,
}

/// 提交转发服务
///
/// 职责：
/// - 把单条 ResponseRecord 映射成表单字段并 POST
/// - 按顺序提交整个记录列表，相邻两次之间固定间隔
/// - 吞掉传输失败（只记日志），学生永远能到达致谢页
/// - 不关心记录从哪里来
pub struct SubmissionRelay {
    client: reqwest::Client,
    form_action_url: String,
    entry_teacher: String,
    entry_rating: String,
    entry_comment: String,
    entry_student: String,
    entry_class: String,
    entry_subject: String,
    post_delay: Duration,
    skipped_comment_not_taught: bool,
    verbose_logging: bool,
}

impl SubmissionRelay {
    /// 创建新的提交转发服务
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            form_action_url: config.form_action_url.clone(),
            entry_teacher: config.entry_teacher.clone(),
            entry_rating: config.entry_rating.clone(),
            entry_comment: config.entry_comment.clone(),
            entry_student: config.entry_student.clone(),
            entry_class: config.entry_class.clone(),
            entry_subject: config.entry_subject.clone(),
            post_delay: Duration::from_millis(config.post_delay_ms),
            skipped_comment_not_taught: config.skipped_comment_not_taught,
            verbose_logging: config.verbose_logging,
        }
    }

    /// 构建单条记录的表单字段
    ///
    /// 替换规则：
    /// - 跳过的记录评分填 "Not Taught"，评语按配置填 "Not Taught" 或留空
    /// - 未评分（0）且未跳过的记录评分填 "0"
    fn build_payload(&self, record: &ResponseRecord) -> Vec<(String, String)> {
        let rating_value = if record.skipped {
            "Not Taught".to_string()
        } else {
            record.rating.to_string()
        };

        let comment_value = if record.skipped {
            if self.skipped_comment_not_taught {
                "Not Taught".to_string()
            } else {
                String::new()
            }
        } else {
            record.comment.clone()
        };

        vec![
            (self.entry_teacher.clone(), record.teacher_name.clone()),
            (self.entry_rating.clone(), rating_value),
            (self.entry_comment.clone(), comment_value),
            (self.entry_student.clone(), record.student_name.clone()),
            (self.entry_class.clone(), record.student_class.clone()),
            (self.entry_subject.clone(), record.subject.clone()),
        ]
    }

    /// 提交单条记录
    ///
    /// 响应盲发：只确认请求发出，不读状态码和响应体
    pub async fn submit_one(&self, record: &ResponseRecord) -> AppResult<()> {
        let payload = self.build_payload(record);

        debug!("提交 Payload: {:?}", payload);

        self.client
            .post(&self.form_action_url)
            .form(&payload)
            .send()
            .await?;

        Ok(())
    }

    /// 按顺序提交所有记录
    ///
    /// 每条记录都会尝试一次，失败不中断后续提交；
    /// 相邻两次提交之间固定间隔，避免请求过快
    pub async fn submit_all(&self, responses: &[ResponseRecord]) -> SubmissionStats {
        let total = responses.len();
        let mut stats = SubmissionStats::default();

        for (idx, record) in responses.iter().enumerate() {
            info!(
                "[记录 {}/{}] 📤 正在提交: {}",
                idx + 1,
                total,
                record.teacher_name
            );

            if self.verbose_logging {
                match serde_json::to_string(record) {
                    Ok(json) => info!("[记录 {}/{}] 内容: {}", idx + 1, total, json),
                    Err(e) => warn!("[记录 {}/{}] 序列化失败: {}", idx + 1, total, e),
                }
            }

            stats.attempted += 1;

            match self.submit_one(record).await {
                Ok(()) => {
                    info!("[记录 {}/{}] ✓ 已发出", idx + 1, total);
                }
                Err(e) => {
                    stats.failed += 1;
                    warn!("[记录 {}/{}] ⚠️ 传输失败（已忽略）: {}", idx + 1, total, e);
                }
            }

            if idx + 1 < total {
                sleep(self.post_delay).await; // 避免请求过快
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 创建测试用的 SubmissionRelay（指向本机未监听端口）
    fn create_test_relay(skipped_comment_not_taught: bool) -> SubmissionRelay {
        let config = Config {
            form_action_url: "http://127.0.0.1:9/formResponse".to_string(),
            post_delay_ms: 10,
            skipped_comment_not_taught,
            ..Config::default()
        };
        SubmissionRelay::new(&config)
    }

    /// 创建测试用的反馈记录
    fn create_test_record(rating: u8, comment: &str, skipped: bool) -> ResponseRecord {
        ResponseRecord {
            teacher_name: "Mrs. Anjali Sharma".to_string(),
            rating,
            comment: comment.to_string(),
            skipped,
            student_name: "Ravi".to_string(),
            student_class: "8A".to_string(),
            subject: "Mathematics".to_string(),
        }
    }

    #[test]
    fn test_payload_field_order_and_values() {
        let relay = create_test_relay(true);
        let record = create_test_record(4, "Good", false);

        let payload = relay.build_payload(&record);

        assert_eq!(payload.len(), 6);
        assert_eq!(payload[0].0, relay.entry_teacher);
        assert_eq!(payload[0].1, "Mrs. Anjali Sharma");
        assert_eq!(payload[1].1, "4");
        assert_eq!(payload[2].1, "Good");
        assert_eq!(payload[3].1, "Ravi");
        assert_eq!(payload[4].1, "8A");
        assert_eq!(payload[5].1, "Mathematics");
    }

    #[test]
    fn test_payload_skipped_substitution() {
        let relay = create_test_relay(true);
        let record = create_test_record(0, "", true);

        let payload = relay.build_payload(&record);

        assert_eq!(payload[1].1, "Not Taught");
        assert_eq!(payload[2].1, "Not Taught");
    }

    #[test]
    fn test_payload_skipped_comment_left_empty() {
        let relay = create_test_relay(false);
        let record = create_test_record(0, "", true);

        let payload = relay.build_payload(&record);

        assert_eq!(payload[1].1, "Not Taught");
        assert_eq!(payload[2].1, "");
    }

    #[test]
    fn test_payload_unrated_substitutes_zero() {
        let relay = create_test_relay(true);
        let record = create_test_record(0, "", false);

        let payload = relay.build_payload(&record);

        assert_eq!(payload[1].1, "0");
        assert_eq!(payload[2].1, "");
    }

    #[test]
    fn test_submit_all_attempts_every_record() {
        let relay = create_test_relay(true);
        let records = vec![
            create_test_record(4, "Good", false),
            create_test_record(0, "", true),
            create_test_record(0, "", false),
        ];

        // 端点不可达也必须把每条记录都尝试一遍
        let stats = tokio_test::block_on(relay.submit_all(&records));

        assert_eq!(stats.attempted, 3);
        assert!(stats.failed <= stats.attempted);
    }

    #[test]
    fn test_submit_all_empty_list() {
        let relay = create_test_relay(true);

        let stats = tokio_test::block_on(relay.submit_all(&[]));

        assert_eq!(stats, SubmissionStats::default());
    }

    /// 对真实表单提交一条记录
    ///
    /// 运行方式：
    /// ```bash
    /// FORM_ACTION_URL=... ENTRY_TEACHER=... cargo test test_submit_live -- --ignored
    /// ```
    #[tokio::test]
    #[ignore] // 默认忽略，需要配置真实表单后手动运行
    async fn test_submit_live() {
        let _ = tracing_subscriber::fmt::try_init();

        let config = Config::from_env();
        let relay = SubmissionRelay::new(&config);
        let record = create_test_record(5, "集成测试", false);

        let stats = relay.submit_all(std::slice::from_ref(&record)).await;

        println!("提交统计: {:?}", stats);
        assert_eq!(stats.attempted, 1);
    }
}
