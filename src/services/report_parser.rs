//! 报告解析服务 - 业务能力层
//!
//! 只负责"从 HTML 中提取测试用例"能力
//!
//! - 使用 `scraper` 构建容错 DOM 树，残缺的标记只会导致匹配变少，不会报错
//! - 选择器在构造时编译一次，解析本身是纯函数

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::ParserConfig;
use crate::error::{AppError, AppResult};
use crate::models::{ParsedReport, TestCase, UNKNOWN_TEST_NAME};

/// 不属于可见文本的元素，其内部文本不参与提取
const NON_TEXT_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// HTML 报告解析器
pub struct ReportParser {
    test_selector: Selector,
    failed_class: String,
    name_selectors: Vec<Selector>,
    max_named_failures: usize,
}

impl ReportParser {
    /// 创建解析器，选择器无效时返回配置错误
    pub fn new(config: &ParserConfig, max_named_failures: usize) -> AppResult<Self> {
        let test_selector = compile(&config.test_selector)?;
        let name_selectors = config
            .name_selectors
            .iter()
            .map(|css| compile(css))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            test_selector,
            failed_class: config.failed_class.clone(),
            name_selectors,
            max_named_failures,
        })
    }

    /// 解析 HTML 文本
    pub fn parse(&self, html: &str) -> ParsedReport {
        let document = Html::parse_document(html);
        let mut named_failures = 0;

        let test_cases: Vec<TestCase> = document
            .select(&self.test_selector)
            .map(|element| {
                if !self.is_failed(element) {
                    return TestCase::passed();
                }

                let name = if named_failures < self.max_named_failures {
                    named_failures += 1;
                    Some(self.extract_name(element))
                } else {
                    None
                };

                TestCase::failed(name, extract_text(element))
            })
            .collect();

        let report = ParsedReport::from_cases(test_cases);
        debug!(
            "解析完成: 共 {} 个用例，失败 {} 个",
            report.total_count, report.failed_count
        );
        report
    }

    fn is_failed(&self, element: ElementRef<'_>) -> bool {
        element
            .value()
            .classes()
            .any(|class| class == self.failed_class)
    }

    /// 依次尝试标题、行内标签；元素存在即采用其文本（即使为空）
    fn extract_name(&self, element: ElementRef<'_>) -> String {
        self.name_selectors
            .iter()
            .find_map(|selector| element.select(selector).next())
            .map(|node| visible_text(node).collect::<String>().trim().to_string())
            .unwrap_or_else(|| UNKNOWN_TEST_NAME.to_string())
    }
}

fn compile(css: &str) -> AppResult<Selector> {
    Selector::parse(css).map_err(|e| AppError::invalid_selector(css, e))
}

/// 深度优先拼接全部可见文本节点，以换行分隔
fn extract_text(element: ElementRef<'_>) -> String {
    visible_text(element).collect::<Vec<_>>().join("\n")
}

/// 按文档顺序遍历后代文本节点，跳过 script / style / template 内部的文本
fn visible_text<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> + 'a {
    element.descendants().filter_map(move |node| {
        let text = node.value().as_text()?;
        let hidden = node
            .ancestors()
            .take_while(|ancestor| ancestor.id() != element.id())
            .filter_map(ElementRef::wrap)
            .any(|ancestor| NON_TEXT_ELEMENTS.contains(&ancestor.value().name()));

        (!hidden).then_some(&**text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_DISPLAYED_FAILURES;

    fn parse(html: &str) -> ParsedReport {
        ReportParser::new(&ParserConfig::default(), MAX_DISPLAYED_FAILURES)
            .unwrap()
            .parse(html)
    }

    fn failed_div(inner: &str) -> String {
        format!(r#"<div class="test failed">{inner}</div>"#)
    }

    #[test]
    fn test_counts_passed_and_failed() {
        let html = r#"
            <html><body>
              <div class="test passed"><h2>a</h2></div>
              <div class="test failed"><h2>b</h2></div>
              <div class="test"><h2>c</h2></div>
              <div class="test failed"><h2>d</h2></div>
              <div class="suite failed"><h2>not a test</h2></div>
            </body></html>"#;

        let report = parse(html);
        assert_eq!(report.total_count, 4);
        assert_eq!(report.failed_count, 2);
        assert_eq!(report.passed_count, 2);
    }

    #[test]
    fn test_only_div_containers_count() {
        let html = r#"<section class="test failed"></section><div class="test"></div>"#;
        let report = parse(html);
        assert_eq!(report.total_count, 1);
        assert_eq!(report.failed_count, 0);
    }

    #[test]
    fn test_name_prefers_heading() {
        let report = parse(&failed_div("<span>label</span><h2>  Login works  </h2>"));
        assert_eq!(report.failed_names(10), vec!["Login works"]);
    }

    #[test]
    fn test_name_falls_back_to_label() {
        let report = parse(&failed_div("<p>x</p><span>\n checkout flow \n</span>"));
        assert_eq!(report.failed_names(10), vec!["checkout flow"]);
    }

    #[test]
    fn test_name_placeholder_when_missing() {
        let report = parse(&failed_div("<p>AssertionError</p>"));
        assert_eq!(report.failed_names(10), vec![UNKNOWN_TEST_NAME]);
    }

    #[test]
    fn test_empty_heading_still_wins() {
        let report = parse(&failed_div("<h2>   </h2><span>label</span>"));
        assert_eq!(report.failed_names(10), vec![""]);
    }

    #[test]
    fn test_names_extracted_for_first_ten_failures_only() {
        let body: String = (1..=25)
            .map(|i| failed_div(&format!("<h2>case {i}</h2>")))
            .collect();
        let report = parse(&body);

        assert_eq!(report.failed_count, 25);
        let names = report.failed_names(10);
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "case 1");
        assert_eq!(names[9], "case 10");
        assert!(report.test_cases[10].name.is_none());
        assert!(!report.test_cases[24].raw_text.is_empty());
    }

    #[test]
    fn test_raw_text_joins_text_nodes_with_newlines() {
        let report = parse(&failed_div("<h2>Search</h2><pre>Expected 3</pre><p>got <b>2</b></p>"));
        assert_eq!(report.test_cases[0].raw_text, "Search\nExpected 3\ngot \n2");
    }

    #[test]
    fn test_raw_text_skips_script_style_and_template() {
        let report = parse(&failed_div(
            "<h2>a</h2><script>var x=1;</script><style>.c{}</style><template><p>t</p></template><p>b</p>",
        ));
        assert_eq!(report.test_cases[0].raw_text, "a\nb");
    }

    #[test]
    fn test_name_ignores_embedded_script() {
        let report = parse(&failed_div("<h2>Login<script>track()</script> works</h2>"));
        assert_eq!(report.failed_names(10), vec!["Login works"]);
    }

    #[test]
    fn test_passed_cases_carry_no_text() {
        let report = parse(r#"<div class="test"><h2>ok</h2></div>"#);
        assert_eq!(report.test_cases[0], TestCase::passed());
    }

    #[test]
    fn test_malformed_markup_degrades() {
        let report = parse("<div class=\"test failed\"><h2>broken <span>");
        assert_eq!(report.total_count, 1);
        assert_eq!(report.failed_count, 1);

        let report = parse("not html at all");
        assert_eq!(report.total_count, 0);
    }

    #[test]
    fn test_custom_selectors() {
        let config = ParserConfig {
            test_selector: "li.case".to_string(),
            failed_class: "fail".to_string(),
            name_selectors: vec!["strong".to_string()],
        };
        let parser = ReportParser::new(&config, 10).unwrap();

        let report = parser.parse(r#"<ul><li class="case fail"><strong>x</strong></li><li class="case"></li></ul>"#);
        assert_eq!(report.total_count, 2);
        assert_eq!(report.failed_names(10), vec!["x"]);
    }

    #[test]
    fn test_invalid_selector_is_config_error() {
        let config = ParserConfig {
            test_selector: "div[".to_string(),
            ..ParserConfig::default()
        };
        assert!(ReportParser::new(&config, 10).is_err());
    }
}
