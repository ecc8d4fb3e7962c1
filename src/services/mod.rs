pub mod digest_builder;
pub mod report_parser;
pub mod summarizer;

pub use digest_builder::{build_digest, FailureDigest};
pub use report_parser::ReportParser;
pub use summarizer::Summarizer;
