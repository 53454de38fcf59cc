//! # 统一错误处理模块
//!
//! 定义 vaspsol-correct 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 修正计算统一错误类型
#[derive(Error, Debug)]
pub enum CorrectionError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 查找错误
    // ─────────────────────────────────────────────────────────────
    /// 期望的文件或记录不存在
    #[error("{what} not found (expected {pattern})")]
    NotFound { what: String, pattern: String },

    /// 文件中缺少 `key=value` 标记
    #[error("Marker '{key}=' not found in {path}")]
    MissingKey { key: String, path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    /// 文件存在但结构不符（字段缺失、数量不匹配）
    #[error("Unexpected {format} layout in {path}\nReason: {reason}")]
    FormatError {
        format: String,
        path: String,
        reason: String,
    },

    /// 字段存在但无法解析为数值
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    /// 作业输出文件名既不含 "single" 也不含 "My"
    #[error("Unrecognised job output file: {path} (name must contain 'single' or 'My')")]
    UnrecognizedFormat { path: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CorrectionError>;
