use super::test_case::TestCase;

/// 一次解析的结果
///
/// 每次加载报告都会重新生成，不做持久化。
#[derive(Debug, Clone, Default)]
pub struct ParsedReport {
    pub test_cases: Vec<TestCase>,
    pub total_count: usize,
    pub failed_count: usize,
    pub passed_count: usize,
}

impl ParsedReport {
    /// 由用例列表统计出各项计数
    pub fn from_cases(test_cases: Vec<TestCase>) -> Self {
        let total_count = test_cases.len();
        let failed_count = test_cases.iter().filter(|case| case.is_failed()).count();

        Self {
            test_cases,
            total_count,
            failed_count,
            passed_count: total_count - failed_count,
        }
    }

    pub fn failed_cases(&self) -> impl Iterator<Item = &TestCase> {
        self.test_cases.iter().filter(|case| case.is_failed())
    }

    /// 用于展示的失败用例名称，最多 `limit` 条
    ///
    /// 这是展示上限，`failed_count` 仍然统计全部失败用例。
    pub fn failed_names(&self, limit: usize) -> Vec<&str> {
        self.failed_cases()
            .take(limit)
            .map(|case| case.display_name())
            .collect()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_from_cases() {
        let report = ParsedReport::from_cases(vec![
            TestCase::passed(),
            TestCase::failed(Some("login".to_string()), "boom".to_string()),
            TestCase::passed(),
        ]);

        assert_eq!(report.total_count, 3);
        assert_eq!(report.failed_count, 1);
        assert_eq!(report.passed_count, 2);
        assert_eq!(report.failed_names(10), vec!["login"]);
    }

    #[test]
    fn test_failed_names_fall_back_to_placeholder() {
        let report = ParsedReport::from_cases(vec![TestCase::failed(None, String::new())]);
        assert_eq!(report.failed_names(10), vec!["Unknown Test Name"]);
    }

    #[test]
    fn test_empty_report() {
        let report = ParsedReport::default();
        assert_eq!(report.total_count, 0);
        assert!(!report.has_failures());
        assert!(report.failed_names(10).is_empty());
    }
}
