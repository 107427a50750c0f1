//! 分类结果结构

use serde::{Deserialize, Serialize};
use std::fmt;

/// 内联脚本命中时的 detail 标记
pub const INLINE_SNIPPET: &str = "inline snippet";
/// Meta 命中时 detail 的固定前缀
pub const META_CONTENT_PREFIX: &str = "content: ";
/// 标签管理器脚本无外链地址时的占位
pub const INLINE_TAG_MANAGER: &str = "inline GTM loader";

/// 单条追踪器检测结果，label + detail 完全相同视为同一条
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Detection {
    pub label: String,
    pub detail: String,
}

impl Detection {
    pub fn new(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.is_empty() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{} ({})", self.label, self.detail)
        }
    }
}

/// 标签管理器记录，取第一个命中加载器规则的脚本
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagManagerRecord {
    pub found: bool,
    pub source: Option<String>,
    pub container_id: Option<String>,
    pub snippet: Option<String>,
}

impl TagManagerRecord {
    /// 未检测到
    pub fn not_found() -> Self {
        Self::default()
    }
}

/// 未检测到标签管理器
pub const GTM_NOT_FOUND: &str = "No GTM container detected";
/// 加载器 URL 中没有容器 ID
pub const CONTAINER_ID_MISSING: &str = "Container id not in URL";

impl fmt::Display for TagManagerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.found {
            return write!(f, "{}", GTM_NOT_FOUND);
        }
        write!(
            f,
            "{} ({})",
            self.container_id.as_deref().unwrap_or(CONTAINER_ID_MISSING),
            self.source.as_deref().unwrap_or(INLINE_TAG_MANAGER)
        )
    }
}

/// 单次分类输出
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub detections: Vec<Detection>,
    pub tag_manager: TagManagerRecord,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty() && !self.tag_manager.found
    }

    /// 按标签筛选
    pub fn by_label<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Detection> + 'a {
        self.detections.iter().filter(move |d| d.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_serializes_nulls() {
        let json = serde_json::to_value(TagManagerRecord::not_found()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"found": false, "source": null, "containerId": null, "snippet": null})
        );
    }

    #[test]
    fn test_display() {
        let detection = Detection::new("Hotjar", INLINE_SNIPPET);
        assert_eq!(detection.to_string(), "Hotjar (inline snippet)");

        let record = TagManagerRecord {
            found: true,
            source: Some("https://www.googletagmanager.com/gtm.js".into()),
            container_id: None,
            snippet: None,
        };
        assert_eq!(record.to_string(), "Container id not in URL (https://www.googletagmanager.com/gtm.js)");
        assert_eq!(TagManagerRecord::not_found().to_string(), "No GTM container detected");
    }
}
