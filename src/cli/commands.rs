//! # Commands Module / 命令模块
//!
//! One module per subcommand.

pub mod init;
pub mod prefs;
pub mod render;
pub mod show;
