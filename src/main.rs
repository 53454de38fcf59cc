//! # vaspsol-correct - VASPsol 恒电势计算能量修正
//!
//! 读取单个计算目录中的 VASP/VASPsol 输出，计算电荷与电势修正后的总能量。
//!
//! ## 输入文件
//! - `OSZICAR` - 原始能量
//! - `name.id.out` - 末态电子数与费米偏移
//! - `POTCAR` + `CONTCAR` - 初始电子数
//! - `*.sl` - utarget / phiref → μₑ
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── config.rs   (输入文件路径)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (格式解析器)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;
use std::error::Error;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        let mut msg = e.to_string();
        let mut source = e.source();
        while let Some(cause) = source {
            msg.push_str(&format!("\nCaused by: {}", cause));
            source = cause.source();
        }
        utils::output::print_error(&msg);
        std::process::exit(1);
    }
}
