//! # VASPsol 作业输出解析器
//!
//! 从作业输出文件读取弛豫结束时的电子数与费米能级偏移。
//!
//! ## 两种输出约定（按文件名区分）
//! - 文件名含 `single`：第 2 行，字段 0 = 电子数，字段 1 = 费米偏移
//! - 文件名含 `My`：最后一行，字段 1 = 电子数，字段 2 = 费米偏移
//! - 其他：`UnrecognizedFormat` 错误
//!
//! ## 依赖关系
//! - 被 `commands/correct.rs` 使用
//! - 文件名来自 `parsers/job.rs`

use super::{field, parse_f64, read_file};
use crate::error::{CorrectionError, Result};
use std::path::Path;

const FORMAT: &str = "job output";

/// 作业输出的行布局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutputKind {
    /// 单点计算：第 2 行
    Single,
    /// 弛豫作业：最后一行
    Relaxation,
}

impl JobOutputKind {
    /// 按文件名判定布局
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        if file_name.contains("single") {
            Ok(JobOutputKind::Single)
        } else if file_name.contains("My") {
            Ok(JobOutputKind::Relaxation)
        } else {
            Err(CorrectionError::UnrecognizedFormat {
                path: file_name.to_string(),
            })
        }
    }

    /// (电子数字段, 费米偏移字段)
    fn columns(self) -> (usize, usize) {
        match self {
            JobOutputKind::Single => (0, 1),
            JobOutputKind::Relaxation => (1, 2),
        }
    }
}

/// 末态电子数与费米偏移
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FermiState {
    pub ne_final: f64,
    pub fermi_shift: f64,
}

/// 解析作业输出文件
pub fn parse_job_output(path: &Path) -> Result<FermiState> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let kind = JobOutputKind::from_file_name(&file_name)?;
    let content = read_file(path)?;
    let state = parse_job_output_content(&content, kind, &path.display().to_string())?;
    log::debug!(
        "{:?} job output {}: ne_final={} fermi_shift={}",
        kind,
        path.display(),
        state.ne_final,
        state.fermi_shift
    );
    Ok(state)
}

/// 从字符串内容解析
pub fn parse_job_output_content(
    content: &str,
    kind: JobOutputKind,
    path: &str,
) -> Result<FermiState> {
    let lines: Vec<&str> = content.lines().collect();

    let line = match kind {
        JobOutputKind::Single => lines.get(1),
        JobOutputKind::Relaxation => lines.last(),
    }
    .ok_or_else(|| CorrectionError::FormatError {
        format: FORMAT.to_string(),
        path: path.to_string(),
        reason: format!("file has only {} lines", lines.len()),
    })?;

    let parts: Vec<&str> = line.split_whitespace().collect();
    let (ne_col, fermi_col) = kind.columns();

    Ok(FermiState {
        ne_final: parse_f64(field(&parts, ne_col, FORMAT, path)?, FORMAT, path)?,
        fermi_shift: parse_f64(field(&parts, fermi_col, FORMAT, path)?, FORMAT, path)?,
    })
}
