use serde::{Deserialize, Serialize};

/// 教师记录
///
/// 进程启动时确定，会话期间不可变
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub name: String,
    /// 附加信息，例如 "Mathematics • Class 8A"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    pub photo: String,
}

impl Teacher {
    /// 从附加信息中提取科目（"•" 之前的部分）
    ///
    /// 用于在加载教师时预填科目输入框
    pub fn subject_hint(&self) -> Option<String> {
        let meta = self.meta.as_deref()?;
        let subject = meta.split('•').next()?.trim();
        if subject.is_empty() {
            None
        } else {
            Some(subject.to_string())
        }
    }
}

/// 教师名单
///
/// 固定顺序的教师列表，索引是教师与反馈记录之间唯一的关联
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub teachers: Vec<Teacher>,
}

impl Roster {
    /// 内置名单（未配置 ROSTER_FILE 时使用）
    pub fn builtin() -> Self {
        Self {
            teachers: vec![
                Teacher {
                    name: "Mrs. Anjali Sharma".to_string(),
                    meta: Some("Mathematics • Class 8A".to_string()),
                    photo: "images/teacher1.jpg".to_string(),
                },
                Teacher {
                    name: "Ms. Pooja Verma".to_string(),
                    meta: Some("Science • Class 8A".to_string()),
                    photo: "images/teacher2.jpg".to_string(),
                },
                Teacher {
                    name: "Mrs. Neha Singh".to_string(),
                    meta: Some("English • Class 8A".to_string()),
                    photo: "images/teacher3.jpg".to_string(),
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.teachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Teacher> {
        self.teachers.get(index)
    }

    /// 第 index 位教师是否为最后一位
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.teachers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_hint_from_meta() {
        let teacher = Teacher {
            name: "Mrs. Anjali Sharma".to_string(),
            meta: Some("Mathematics • Class 8A".to_string()),
            photo: "images/teacher1.jpg".to_string(),
        };
        assert_eq!(teacher.subject_hint().as_deref(), Some("Mathematics"));
    }

    #[test]
    fn test_subject_hint_without_meta() {
        let teacher = Teacher {
            name: "Mr. Rahul Verma".to_string(),
            meta: None,
            photo: "images/teacher2.jpg".to_string(),
        };
        assert_eq!(teacher.subject_hint(), None);
    }

    #[test]
    fn test_roster_from_toml() {
        let content = r#"
            [[teachers]]
            name = "Mrs. Anjali Sharma"
            meta = "Mathematics • Class 8A"
            photo = "images/teacher1.jpg"

            [[teachers]]
            name = "Ms. Pooja Verma"
            photo = "images/teacher2.jpg"
        "#;

        let roster: Roster = toml::from_str(content).expect("名单解析失败");
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(0).unwrap().name, "Mrs. Anjali Sharma");
        assert_eq!(roster.get(1).unwrap().meta, None);
        assert!(roster.is_last(1));
        assert!(!roster.is_last(0));
    }
}
