use crate::error::{AppError, AppResult, FileError};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// 接受的报告扩展名
const ACCEPTED_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// 读取 HTML 报告文件内容
///
/// 非 UTF-8 字节按替换字符处理，保证解析阶段总能拿到文本。
pub async fn load_report_html(report_path: &Path) -> AppResult<String> {
    let path_display = report_path.display().to_string();

    let extension_ok = report_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false);

    if !extension_ok {
        return Err(AppError::File(FileError::UnsupportedExtension {
            path: path_display,
        }));
    }

    let bytes = fs::read(report_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_display, e))?;

    debug!("已读取报告 {}，大小 {} 字节", path_display, bytes.len());

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_rejects_non_html_extension() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let err = load_report_html(file.path()).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::File(FileError::UnsupportedExtension { .. })
        ));
    }

    #[tokio::test]
    async fn test_reads_uppercase_extension() {
        let mut file = tempfile::Builder::new().suffix(".HTML").tempfile().unwrap();
        write!(file, "<div class=\"test\"></div>").unwrap();

        let html = load_report_html(file.path()).await.unwrap();
        assert!(html.contains("class=\"test\""));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let err = load_report_html(Path::new("/definitely/not/here/report.html"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::File(FileError::NotFound { .. })));
    }
}
