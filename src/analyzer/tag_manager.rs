//! 标签管理器记录提取
//! 仅取第一个命中加载器规则的脚本，容器 ID 解析失败降级为 None

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::rule::catalog::GTM_LOADER_PATTERN;
use crate::rule::core::INLINE_TAG_MANAGER;
use crate::rule::{ScriptDescriptor, TagManagerRecord};

/// 容器 ID 所在的查询参数
pub const CONTAINER_ID_PARAM: &str = "id";

static GTM_LOADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(GTM_LOADER_PATTERN).unwrap_or_else(|e| panic!("加载器正则编译失败：{}", e))
});

pub struct TagManagerAnalyzer;

impl TagManagerAnalyzer {
    /// 按输入顺序查找第一个加载器脚本
    pub fn analyze(scripts: &[ScriptDescriptor]) -> TagManagerRecord {
        let Some((script, source)) = scripts.iter().find_map(|s| {
            s.source
                .as_deref()
                .filter(|src| GTM_LOADER_REGEX.is_match(src))
                .map(|src| (s, src))
        }) else {
            return TagManagerRecord::not_found();
        };

        let container_id = Self::extract_container_id(source);
        let snippet = script.raw_markup.trim();
        debug!(
            "[TagManager]匹配成功 | 地址: {} | 容器ID: {:?}",
            source, container_id
        );

        TagManagerRecord {
            found: true,
            source: Some(if source.is_empty() {
                INLINE_TAG_MANAGER.to_string()
            } else {
                source.to_string()
            }),
            container_id,
            snippet: (!snippet.is_empty()).then(|| snippet.to_string()),
        }
    }

    /// 解析加载器地址中的容器 ID，地址非法或无该参数时返回 None
    pub fn extract_container_id(source: &str) -> Option<String> {
        match Url::parse(source) {
            Ok(url) => url
                .query_pairs()
                .find(|(key, _)| key == CONTAINER_ID_PARAM)
                .map(|(_, value)| value.into_owned()),
            Err(e) => {
                debug!("[TagManager]加载器地址解析失败 | 地址: {} | 错误: {}", source, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_container_id() {
        assert_eq!(
            TagManagerAnalyzer::extract_container_id("https://www.googletagmanager.com/gtm.js?id=GTM-ABC123"),
            Some("GTM-ABC123".to_string())
        );
        assert_eq!(
            TagManagerAnalyzer::extract_container_id("https://www.googletagmanager.com/gtm.js?l=dataLayer&id=GTM-Q1&gtm_auth=x"),
            Some("GTM-Q1".to_string())
        );
        assert_eq!(
            TagManagerAnalyzer::extract_container_id("https://www.googletagmanager.com/gtm.js"),
            None
        );
        assert_eq!(TagManagerAnalyzer::extract_container_id("not-a-url"), None);
    }

    #[test]
    fn test_first_loader_wins() {
        let scripts = vec![
            ScriptDescriptor::inline("var GTM = 'GTM-INLINE1';"),
            ScriptDescriptor::external("https://www.googletagmanager.com/gtm.js?id=GTM-FIRST")
                .with_raw_markup("  <script src=\"https://www.googletagmanager.com/gtm.js?id=GTM-FIRST\"></script>\n"),
            ScriptDescriptor::external("https://www.googletagmanager.com/gtm.js?id=GTM-SECOND"),
        ];
        let record = TagManagerAnalyzer::analyze(&scripts);
        assert!(record.found);
        assert_eq!(record.container_id.as_deref(), Some("GTM-FIRST"));
        assert_eq!(
            record.snippet.as_deref(),
            Some("<script src=\"https://www.googletagmanager.com/gtm.js?id=GTM-FIRST\"></script>")
        );
    }

    #[test]
    fn test_scheme_less_source_degrades() {
        let scripts = vec![ScriptDescriptor::external("//www.googletagmanager.com/gtm.js?id=GTM-NOSCHEME")];
        let record = TagManagerAnalyzer::analyze(&scripts);
        assert!(record.found);
        assert_eq!(record.container_id, None);
        assert_eq!(record.snippet, None);
    }

    #[test]
    fn test_inline_only_is_not_found() {
        let scripts = vec![ScriptDescriptor::inline("(function(w,d,s,l,i){})(window,document,'script','dataLayer','GTM-ABC123');")];
        assert_eq!(TagManagerAnalyzer::analyze(&scripts), TagManagerRecord::not_found());
    }
}
