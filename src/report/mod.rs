//! 报告模块：页面报告组装与展示
pub mod page_report;
pub mod presenter;

pub use self::page_report::PageReport;
pub use self::presenter::Presenter;
