//! 页面报告：页面扫描数据 + 分类结果

use serde::{Deserialize, Serialize};

use crate::rule::{Classification, Detection, TagManagerRecord};
use crate::utils::extractor::{LinkTag, MetaTag, NoScriptBlock, ScannedPage, ScriptSummary};

/// 展示层消费的完整页面数据
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    pub title: Option<String>,
    pub canonical: Option<String>,
    pub meta_tags: Vec<MetaTag>,
    pub link_tags: Vec<LinkTag>,
    /// 仅 <head> 内脚本
    pub scripts: Vec<ScriptSummary>,
    pub json_ld: Vec<String>,
    pub no_scripts: Vec<NoScriptBlock>,
    pub trackers: Vec<Detection>,
    pub gtm: TagManagerRecord,
}

impl PageReport {
    pub fn build(page: ScannedPage, classification: Classification) -> Self {
        Self {
            title: page.title,
            canonical: page.canonical,
            meta_tags: page.meta_tags,
            link_tags: page.link_tags,
            scripts: page.head_scripts,
            json_ld: page.json_ld,
            no_scripts: page.no_scripts,
            trackers: classification.detections,
            gtm: classification.tag_manager,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
