//! # Reporting Module / 报告模块
//!
//! This module turns a projected page into output: a styled static HTML site
//! and a colorful console summary.
//!
//! 此模块将投影后的页面转换为输出：样式化的静态 HTML 站点和彩色控制台摘要。

pub mod console;
pub mod html;

// Re-export common reporting functions
pub use console::print_page;
pub use html::{render_page, write_site};
