pub mod html_loader;

pub use html_loader::load_report_html;
