//! 失败日志拼接
//!
//! 先拼接再截断，截断是硬切（按字符），可能切断单词。

use crate::models::TestCase;

/// 发送给 LLM 的失败日志
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureDigest {
    text: String,
    /// 截断前的字符数
    original_len: usize,
}

impl FailureDigest {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// 字符数（非字节数）
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn original_len(&self) -> usize {
        self.original_len
    }

    pub fn is_truncated(&self) -> bool {
        self.original_len > self.len()
    }
}

/// 拼接所有失败用例的文本并截断到 `max_len` 个字符
pub fn build_digest(test_cases: &[TestCase], max_len: usize) -> FailureDigest {
    let joined = test_cases
        .iter()
        .filter(|case| case.is_failed())
        .map(|case| case.raw_text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let original_len = joined.chars().count();
    let text = match joined.char_indices().nth(max_len) {
        Some((cut, _)) => joined[..cut].to_string(),
        None => joined,
    };

    FailureDigest { text, original_len }
}
