//! 工具模块 - 通用工具函数
//!
//! - [`logger`] - 日志初始化
//! - [`image`] - 附件编码 (data URL)

pub mod image;
pub mod logger;

pub use image::attachment_data_url;
pub use logger::{init_logger, init_logger_with_file};
