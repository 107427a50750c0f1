//! 全局错误类型定义
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum TrackscopeError {
    // 规则相关错误
    #[error("规则解析失败：{0}")]
    RuleParseError(String),
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type TsResult<T> = Result<T, TrackscopeError>;
