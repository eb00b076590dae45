//! 控制台 - 基础设施层
//!
//! 持有唯一的终端输入资源，只暴露"读写一行"的能力

use anyhow::Result;
use std::io::{self, BufRead, Write};

/// 控制台
///
/// 职责：
/// - 持有唯一的标准输入资源
/// - 暴露 println() / prompt() 能力
/// - 不认识 Teacher / ResponseRecord
/// - 不处理业务流程
pub struct Console {
    stdin: io::Stdin,
}

impl Console {
    /// 创建新的控制台
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }

    /// 输出一行文本
    pub fn println(&self, text: &str) {
        println!("{}", text);
    }

    /// 输出提示并读取一行输入（去掉首尾空白）
    pub fn prompt(&mut self, hint: &str) -> Result<String> {
        print!("{}", hint);
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = self.stdin.lock().read_line(&mut line)?;
        if bytes == 0 {
            anyhow::bail!("标准输入已关闭");
        }

        Ok(line.trim().to_string())
    }

    /// 输出提示并等待回车
    pub fn pause(&mut self, hint: &str) -> Result<()> {
        self.prompt(hint)?;
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
