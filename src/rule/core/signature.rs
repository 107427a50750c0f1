//! 签名规则模型
//! RawRule 为可序列化的原始规则，SignatureRule 为编译后的可执行规则

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::error::{TrackscopeError, TsResult};

/// 匹配作用域，每条规则只属于其中一种
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchScope {
    ScriptSource,
    InlineContent,
    Meta,
}

impl Display for MatchScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchScope::ScriptSource => write!(f, "script_src"),
            MatchScope::InlineContent => write!(f, "inline"),
            MatchScope::Meta => write!(f, "meta"),
        }
    }
}

/// 原始规则（JSON 规则文件 / 内置规则表）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawRule {
    ScriptSource { label: String, pattern: String },
    InlineContent { label: String, pattern: String },
    Meta { label: String, keys: Vec<String> },
}

impl RawRule {
    pub fn script_source(label: &str, pattern: &str) -> Self {
        RawRule::ScriptSource {
            label: label.to_string(),
            pattern: pattern.to_string(),
        }
    }

    pub fn inline_content(label: &str, pattern: &str) -> Self {
        RawRule::InlineContent {
            label: label.to_string(),
            pattern: pattern.to_string(),
        }
    }

    pub fn meta(label: &str, keys: &[&str]) -> Self {
        RawRule::Meta {
            label: label.to_string(),
            keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RawRule::ScriptSource { label, .. }
            | RawRule::InlineContent { label, .. }
            | RawRule::Meta { label, .. } => label,
        }
    }

    /// 编译为可执行规则
    pub fn compile(&self) -> TsResult<SignatureRule> {
        if self.label().trim().is_empty() {
            return Err(TrackscopeError::RuleParseError("规则标签为空".to_string()));
        }
        let matcher = match self {
            RawRule::ScriptSource { pattern, .. } => RuleMatcher::ScriptSource(Regex::new(pattern)?),
            RawRule::InlineContent { pattern, .. } => RuleMatcher::InlineContent(Regex::new(pattern)?),
            RawRule::Meta { label, keys } => {
                let keys: Vec<String> = keys
                    .iter()
                    .map(|k| k.trim().to_ascii_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                if keys.is_empty() {
                    return Err(TrackscopeError::RuleParseError(format!(
                        "Meta规则缺少键名：{}",
                        label
                    )));
                }
                RuleMatcher::MetaKey(keys)
            }
        };
        Ok(SignatureRule {
            label: self.label().to_string(),
            matcher,
        })
    }
}

/// 编译后的匹配器
#[derive(Debug, Clone)]
pub enum RuleMatcher {
    ScriptSource(Regex),
    InlineContent(Regex),
    /// 已转小写的键名（含历史别名）
    MetaKey(Vec<String>),
}

impl RuleMatcher {
    pub fn scope(&self) -> MatchScope {
        match self {
            RuleMatcher::ScriptSource(_) => MatchScope::ScriptSource,
            RuleMatcher::InlineContent(_) => MatchScope::InlineContent,
            RuleMatcher::MetaKey(_) => MatchScope::Meta,
        }
    }

    /// 规则描述（日志用）
    pub fn describe(&self) -> String {
        match self {
            RuleMatcher::ScriptSource(r) | RuleMatcher::InlineContent(r) => r.as_str().to_string(),
            RuleMatcher::MetaKey(keys) => keys.join("|"),
        }
    }
}

/// 可执行签名规则
#[derive(Debug, Clone)]
pub struct SignatureRule {
    pub label: String,
    pub matcher: RuleMatcher,
}

impl SignatureRule {
    #[inline(always)]
    pub fn scope(&self) -> MatchScope {
        self.matcher.scope()
    }

    /// 外链地址匹配
    #[inline(always)]
    pub fn matches_source(&self, source: &str) -> bool {
        matches!(&self.matcher, RuleMatcher::ScriptSource(r) if r.is_match(source))
    }

    /// 内联内容匹配
    #[inline(always)]
    pub fn matches_inline(&self, text: &str) -> bool {
        matches!(&self.matcher, RuleMatcher::InlineContent(r) if r.is_match(text))
    }

    /// Meta 键名匹配（ASCII 忽略大小写）
    #[inline(always)]
    pub fn matches_meta_key(&self, name: &str) -> bool {
        match &self.matcher {
            RuleMatcher::MetaKey(keys) => keys.iter().any(|k| k.eq_ignore_ascii_case(name.trim())),
            _ => false,
        }
    }
}
