use crate::analyzer::Analyzer;
use crate::rule::core::META_CONTENT_PREFIX;
use crate::rule::{MetaDescriptor, SignatureRule};

// Meta 分析器（站点验证类键名）
pub struct MetaAnalyzer;

impl Analyzer<MetaDescriptor> for MetaAnalyzer {
    const TYPE_NAME: &'static str = "Meta";

    fn match_logic(rule: &SignatureRule, meta: &MetaDescriptor) -> Option<String> {
        if meta.name.is_empty() || !rule.matches_meta_key(&meta.name) {
            return None;
        }
        Some(format!("{}{}", META_CONTENT_PREFIX, meta.content))
    }
}
