//! 签名规则库
//! 内置规则表为静态数据，首次访问时编译，运行期不可变

use once_cell::sync::Lazy;
use std::sync::Arc;

use super::core::{MatchScope, RawRule, SignatureRule};
use crate::error::TsResult;

/// 标签管理器加载器路径
pub const GTM_LOADER_PATTERN: &str = r"googletagmanager\.com/gtm\.js";

pub const LABEL_GTM: &str = "Google Tag Manager";
pub const LABEL_GA4: &str = "Google Analytics 4 (gtag)";
pub const LABEL_UA: &str = "Google Analytics (UA)";
pub const LABEL_FB_PIXEL: &str = "Facebook Pixel";
pub const LABEL_LINKEDIN: &str = "LinkedIn Insight";
pub const LABEL_HOTJAR: &str = "Hotjar";
pub const LABEL_CLARITY: &str = "Microsoft Clarity";
pub const LABEL_FB_VERIFY: &str = "Facebook Domain Verification";
pub const LABEL_GOOGLE_VERIFY: &str = "Google Site Verification";
pub const LABEL_PINTEREST_VERIFY: &str = "Pinterest Verification";

/// 内置规则表（顺序即遍历顺序）
pub fn builtin_raw_rules() -> Vec<RawRule> {
    vec![
        RawRule::script_source(LABEL_GTM, GTM_LOADER_PATTERN),
        RawRule::inline_content(LABEL_GTM, r"GTM-[A-Z0-9]+"),
        RawRule::script_source(LABEL_GA4, r"googletagmanager\.com/gtag/js"),
        RawRule::inline_content(LABEL_GA4, r"\bgtag\("),
        RawRule::script_source(LABEL_UA, r"google-analytics\.com/(analytics|ga)\.js"),
        RawRule::inline_content(LABEL_UA, r"\bga\("),
        RawRule::script_source(LABEL_FB_PIXEL, r"connect\.facebook\.net/.*(fbevents\.js|signals/config)"),
        RawRule::inline_content(LABEL_FB_PIXEL, r"\bfbq\("),
        RawRule::script_source(LABEL_LINKEDIN, r"snap\.licdn\.com/li\.lms-analytics"),
        RawRule::script_source(LABEL_HOTJAR, r"static\.hotjar\.com"),
        RawRule::inline_content(LABEL_HOTJAR, r"(?i)hotjar\.com"),
        RawRule::script_source(LABEL_CLARITY, r"clarity\.ms/tag"),
        RawRule::inline_content(LABEL_CLARITY, r"\bclarity\("),
        RawRule::meta(LABEL_FB_VERIFY, &["facebook-domain-verification"]),
        RawRule::meta(LABEL_GOOGLE_VERIFY, &["google-site-verification"]),
        RawRule::meta(LABEL_PINTEREST_VERIFY, &["p:domain_verify", "pinterest-domain-verification"]),
    ]
}

/// 全局内置规则库单例
static BUILTIN_CATALOG: Lazy<Arc<SignatureCatalog>> = Lazy::new(|| {
    // 内置规则为编译期常量，编译失败属于程序缺陷
    let catalog = SignatureCatalog::from_raw_rules(&builtin_raw_rules())
        .unwrap_or_else(|e| panic!("内置签名规则编译失败：{}", e));
    log::debug!("内置签名规则库加载完成 | 规则数: {}", catalog.len());
    Arc::new(catalog)
});

/// 有序签名规则库
#[derive(Debug, Clone, Default)]
pub struct SignatureCatalog {
    rules: Vec<SignatureRule>,
}

impl SignatureCatalog {
    /// 使用已编译规则构建
    pub fn new(rules: Vec<SignatureRule>) -> Self {
        Self { rules }
    }

    /// 内置规则库（共享实例）
    pub fn builtin() -> Arc<SignatureCatalog> {
        BUILTIN_CATALOG.clone()
    }

    /// 编译原始规则，任一规则失败即整体失败
    pub fn from_raw_rules(raw_rules: &[RawRule]) -> TsResult<Self> {
        let rules = raw_rules
            .iter()
            .map(RawRule::compile)
            .collect::<TsResult<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// 从 JSON 规则数组构建
    pub fn from_json(json: &str) -> TsResult<Self> {
        let raw_rules: Vec<RawRule> = serde_json::from_str(json)?;
        Self::from_raw_rules(&raw_rules)
    }

    /// 在内置规则之后追加自定义规则
    pub fn builtin_with(extra: &[RawRule]) -> TsResult<Self> {
        let mut catalog = Self::new(BUILTIN_CATALOG.rules.clone());
        for raw in extra {
            catalog.rules.push(raw.compile()?);
        }
        Ok(catalog)
    }

    #[inline(always)]
    pub fn rules(&self) -> &[SignatureRule] {
        &self.rules
    }

    /// 指定作用域的规则（保持原有顺序）
    pub fn rules_in(&self, scope: MatchScope) -> impl Iterator<Item = &SignatureRule> {
        self.rules.iter().filter(move |r| r.scope() == scope)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
