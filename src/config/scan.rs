//! 页面扫描配置管理

use url::Url;

use crate::error::{TrackscopeError, TsResult};

/// 页面扫描选项
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// 相对 script src 的解析基准（页面地址），None 时保留原值
    pub base_url: Option<Url>,
    /// 最大 HTML 长度（超出部分按字符边界截断）
    pub max_html_len: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            max_html_len: 2 * 1024 * 1024,
        }
    }
}

impl ScanConfig {
    /// 以页面地址为基准的配置
    pub fn with_base(base: &str) -> TsResult<Self> {
        let base_url = Url::parse(base)?;
        if base_url.cannot_be_a_base() {
            return Err(TrackscopeError::InvalidInput(format!("页面地址不能作为基准：{}", base)));
        }
        Ok(Self {
            base_url: Some(base_url),
            ..Self::default()
        })
    }
}

/// 自定义构建器（链式 API）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: ScanConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, base: Url) -> Self {
        self.config.base_url = Some(base);
        self
    }

    pub fn max_html_len(mut self, len: usize) -> Self {
        self.config.max_html_len = len;
        self
    }

    pub fn build(self) -> ScanConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let base = Url::parse("https://example.com/shop/").unwrap();
        let config = CustomConfigBuilder::new()
            .base_url(base.clone())
            .max_html_len(1024)
            .build();
        assert_eq!(config.base_url, Some(base));
        assert_eq!(config.max_html_len, 1024);
    }

    #[test]
    fn test_with_base_rejects_relative() {
        assert!(ScanConfig::with_base("/relative/path").is_err());
        assert!(matches!(
            ScanConfig::with_base("mailto:team@example.com"),
            Err(TrackscopeError::InvalidInput(_))
        ));
        assert!(ScanConfig::with_base("https://example.com").is_ok());
    }
}
