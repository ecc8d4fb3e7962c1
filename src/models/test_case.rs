/// 未能提取到名称时使用的占位名
pub const UNKNOWN_TEST_NAME: &str = "Unknown Test Name";

/// 测试用例状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
}

/// 从报告中解析出的单个测试用例
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// 只有前若干个失败用例会提取名称
    pub name: Option<String>,
    pub status: TestStatus,
    /// 失败用例的全部文本节点，以换行拼接；通过的用例为空
    pub raw_text: String,
}

impl TestCase {
    pub fn passed() -> Self {
        Self {
            name: None,
            status: TestStatus::Passed,
            raw_text: String::new(),
        }
    }

    pub fn failed(name: Option<String>, raw_text: String) -> Self {
        Self {
            name,
            status: TestStatus::Failed,
            raw_text,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == TestStatus::Failed
    }

    /// 展示用名称，缺失时返回占位名
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_TEST_NAME)
    }
}
