use teacher_feedback_submit::config::Config;
use teacher_feedback_submit::models::{load_roster_from_toml, Roster, Teacher};
use teacher_feedback_submit::services::SubmissionRelay;
use teacher_feedback_submit::workflow::{FeedbackFlow, SessionPhase};

/// 创建测试用的两人名单
fn create_test_roster() -> Roster {
    Roster {
        teachers: vec![
            Teacher {
                name: "Mrs. Anjali Sharma".to_string(),
                meta: Some("Mathematics • Class 8A".to_string()),
                photo: "images/teacher1.jpg".to_string(),
            },
            Teacher {
                name: "Mr. Rahul Verma".to_string(),
                meta: Some("Science • Class 8A".to_string()),
                photo: "images/teacher2.jpg".to_string(),
            },
        ],
    }
}

#[test]
fn test_full_feedback_session() {
    let config = Config::default();
    let mut flow = FeedbackFlow::new(create_test_roster(), &config);

    // 欢迎页 → 开始
    assert_eq!(flow.phase(), SessionPhase::Welcome);
    flow.start();
    flow.set_student_info("Ravi".to_string(), "8A".to_string(), None);

    // 第一位：打 4 分，评语 "Good"，下一位
    flow.on_star_selected(4).expect("打分应该成功");
    flow.on_comment_changed("Good".to_string());
    flow.on_next();
    assert_eq!(flow.responses().len(), flow.current_index());

    // 第二位：不评分，直接提交
    assert!(flow.is_last_teacher());
    flow.on_submit();
    assert_eq!(flow.phase(), SessionPhase::Submitting);

    let responses = flow.responses();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0].rating, 4);
    assert_eq!(responses[0].comment, "Good");
    assert_eq!(responses[0].subject, "Mathematics");
    assert_eq!(responses[1].rating, 0);
    assert_eq!(responses[1].comment, "");
    assert_eq!(responses[1].subject, "Science");

    // 提交完成 → 致谢 → 重新开始
    flow.finish_submission();
    assert_eq!(flow.phase(), SessionPhase::Done);

    flow.restart();
    assert_eq!(flow.phase(), SessionPhase::Welcome);
    assert!(flow.responses().is_empty());
    assert_eq!(flow.current_index(), 0);
}

#[tokio::test]
async fn test_load_roster_file() {
    let content = r#"
        [[teachers]]
        name = "Mrs. Anjali Sharma"
        meta = "Mathematics • Class 8A"
        photo = "images/teacher1.jpg"

        [[teachers]]
        name = "Ms. Pooja Verma"
        meta = "Science • Class 8A"
        photo = "images/teacher2.jpg"
    "#;

    let path = std::env::temp_dir().join("teacher_feedback_submit_roster_test.toml");
    tokio::fs::write(&path, content).await.expect("写入测试名单失败");

    let roster = load_roster_from_toml(&path).await.expect("加载名单失败");
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.get(0).unwrap().name, "Mrs. Anjali Sharma");

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn test_load_roster_file_missing() {
    let path = std::env::temp_dir().join("teacher_feedback_submit_no_such_roster.toml");
    let result = load_roster_from_toml(&path).await;
    assert!(result.is_err(), "不存在的名单文件应该报错");
}

/// 对真实表单跑一遍完整会话的提交
#[tokio::test]
#[ignore] // 默认忽略，需要配置真实表单后手动运行：cargo test -- --ignored
async fn test_submit_session_live() {
    let _ = tracing_subscriber::fmt::try_init();

    // 加载配置
    let config = Config::from_env();

    let mut flow = FeedbackFlow::new(create_test_roster(), &config);
    flow.start();
    flow.set_student_info("集成测试".to_string(), "8A".to_string(), None);
    flow.on_star_selected(5).expect("打分应该成功");
    flow.on_comment_changed("集成测试评语".to_string());
    flow.on_next();
    flow.on_skip();
    assert_eq!(flow.phase(), SessionPhase::Submitting);

    let relay = SubmissionRelay::new(&config);
    let stats = relay.submit_all(flow.responses()).await;

    println!("提交统计: {:?}", stats);
    assert_eq!(stats.attempted, 2);
}
