//! # Infrastructure Module / 基础设施模块
//!
//! This module provides the services the core consumes: loading the
//! configuration documents, the file-backed preference store, system hint
//! detection, the site configuration file and logging setup.
//!
//! 此模块提供核心所依赖的服务：加载配置文档、基于文件的偏好存储、
//! 系统提示检测、站点配置文件以及日志初始化。

pub mod config;
pub mod documents;
pub mod logging;
pub mod store;
pub mod system;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
