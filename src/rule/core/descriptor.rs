//! 扫描输入描述符
//! 页面扫描器与分类器之间的纯数据边界，可序列化跨上下文传递

use serde::{Deserialize, Serialize};

/// 单个 <script> 元素的描述
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptDescriptor {
    /// 外链地址，内联脚本为 None
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub inline_text: String,
    #[serde(default)]
    pub raw_markup: String,
}

impl ScriptDescriptor {
    /// 外链脚本
    pub fn external(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    /// 内联脚本
    pub fn inline(text: impl Into<String>) -> Self {
        Self {
            inline_text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_raw_markup(mut self, raw: impl Into<String>) -> Self {
        self.raw_markup = raw.into();
        self
    }

    /// 非空外链地址
    #[inline(always)]
    pub fn usable_source(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.is_empty())
    }
}

/// 单个 <meta> 元素的描述（name 来自 name 或 property 属性，已转小写）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

impl MetaDescriptor {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}
