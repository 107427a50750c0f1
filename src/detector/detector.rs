//! Tracker classifier core module
//! 追踪器分类器核心
//! 核心职责：
//! 1. 按规则库顺序对脚本 / meta 输入执行全部规则
//! 2. 检测结果有序去重
//! 3. 标签管理器记录提取（容器 ID 解析）
//! 4. 提供 HTML 直接分析的便捷接口

use std::sync::Arc;
use std::time::Instant;

use crate::analyzer::{
    meta::MetaAnalyzer, script::ScriptAnalyzer, tag_manager::TagManagerAnalyzer, Analyzer,
};
use crate::config::ScanConfig;
use crate::report::PageReport;
use crate::rule::{Classification, MetaDescriptor, ScriptDescriptor, SignatureCatalog};
use crate::utils::extractor::HtmlExtractor;
use crate::utils::DetectionUpdater;

/// 追踪器分类器
/// 持有规则库的共享引用，单次分类不持有任何可变状态，可跨线程复用
#[derive(Debug, Clone)]
pub struct Classifier {
    catalog: Arc<SignatureCatalog>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// 使用内置规则库
    pub fn new() -> Self {
        Self {
            catalog: SignatureCatalog::builtin(),
        }
    }

    /// 使用自定义规则库
    pub fn with_catalog(catalog: SignatureCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &SignatureCatalog {
        &self.catalog
    }

    /// 核心分类接口
    /// 输入为空列表时返回空结果，任何输入都不会失败
    pub fn classify(&self, scripts: &[ScriptDescriptor], metas: &[MetaDescriptor]) -> Classification {
        let start = Instant::now();
        let mut detected = DetectionUpdater::new();

        ScriptAnalyzer::analyze(&self.catalog, scripts, &mut detected);
        MetaAnalyzer::analyze(&self.catalog, metas, &mut detected);
        let tag_manager = TagManagerAnalyzer::analyze(scripts);

        log::debug!(
            "分类完成 | 脚本: {} | meta: {} | 检测结果: {} | GTM: {} | 耗时: {:?}",
            scripts.len(),
            metas.len(),
            detected.len(),
            tag_manager.found,
            start.elapsed()
        );

        Classification {
            detections: detected.into_detections(),
            tag_manager,
        }
    }

    /// 扫描 HTML 并生成完整页面报告
    pub fn analyze_html(&self, html: &str, config: ScanConfig) -> PageReport {
        let page = HtmlExtractor::with_config(config).extract(html);
        let classification = self.classify(&page.scripts, &page.meta_descriptors());
        PageReport::build(page, classification)
    }
}

/// 使用内置规则库分类
pub fn classify(scripts: &[ScriptDescriptor], metas: &[MetaDescriptor]) -> Classification {
    Classifier::new().classify(scripts, metas)
}

/// 使用内置规则库分析 HTML
pub fn analyze_html(html: &str, config: ScanConfig) -> PageReport {
    Classifier::new().analyze_html(html, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::catalog::{LABEL_FB_PIXEL, LABEL_GA4, LABEL_GTM, LABEL_HOTJAR, LABEL_UA};
    use crate::rule::{Detection, RawRule, TagManagerRecord};

    #[test]
    fn test_empty_input() {
        let result = classify(&[], &[]);
        assert!(result.detections.is_empty());
        assert_eq!(result.tag_manager, TagManagerRecord::not_found());
        assert!(result.is_empty());
    }

    #[test]
    fn test_duplicate_loaders_collapse() {
        let src = "https://www.google-analytics.com/analytics.js";
        let scripts: Vec<_> = (0..5).map(|_| ScriptDescriptor::external(src)).collect();
        let result = classify(&scripts, &[]);
        assert_eq!(result.detections, vec![Detection::new(LABEL_UA, src)]);
    }

    #[test]
    fn test_same_label_different_detail_kept() {
        let scripts = vec![
            ScriptDescriptor::external("https://www.googletagmanager.com/gtag/js?id=G-ONE"),
            ScriptDescriptor::external("https://www.googletagmanager.com/gtag/js?id=G-TWO"),
        ];
        let result = classify(&scripts, &[]);
        assert_eq!(result.by_label(LABEL_GA4).count(), 2);
    }

    #[test]
    fn test_first_seen_order() {
        let scripts = vec![
            ScriptDescriptor::inline("fbq('init', '123');"),
            ScriptDescriptor::external("https://static.hotjar.com/c/hotjar-99.js?sv=6"),
            ScriptDescriptor::inline("gtag('config', 'G-1'); fbq('track', 'PageView');"),
        ];
        let labels: Vec<String> = classify(&scripts, &[])
            .detections
            .into_iter()
            .map(|d| d.label)
            .collect();
        assert_eq!(labels, vec![LABEL_FB_PIXEL, LABEL_HOTJAR, LABEL_GA4]);
    }

    #[test]
    fn test_deterministic() {
        let scripts = vec![
            ScriptDescriptor::external("https://www.googletagmanager.com/gtm.js?id=GTM-ABC123"),
            ScriptDescriptor::inline("(window,document,'script','dataLayer','GTM-ABC123'); ga('send')"),
        ];
        let metas = vec![MetaDescriptor::new("google-site-verification", "tok")];
        let first = classify(&scripts, &metas);
        for _ in 0..10 {
            assert_eq!(classify(&scripts, &metas), first);
        }
        assert_eq!(first.detections[0], Detection::new(LABEL_GTM, scripts[0].source.clone().unwrap()));
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = SignatureCatalog::from_raw_rules(&[RawRule::inline_content("Plausible", r"\bplausible\(")]).unwrap();
        let classifier = Classifier::with_catalog(catalog);
        let result = classifier.classify(&[ScriptDescriptor::inline("plausible('signup')")], &[]);
        assert_eq!(result.detections, vec![Detection::new("Plausible", "inline snippet")]);
        // 标签管理器提取与规则库无关
        assert!(!result.tag_manager.found);
    }
}
