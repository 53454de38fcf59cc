//! # 解析器模块
//!
//! 提供 VASP/VASPsol 各输出文件的解析器，以及它们共用的读取与取字段工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: job, oszicar, job_out, potcar, poscar, submit

pub mod job;
pub mod job_out;
pub mod oszicar;
pub mod poscar;
pub mod potcar;
pub mod submit;

use crate::error::{CorrectionError, Result};
use std::fs;
use std::path::Path;

/// 读取整个文件
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CorrectionError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 列出目录中的文件名（按名称排序）
pub fn list_dir(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(CorrectionError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut names: Vec<String> = fs::read_dir(dir)
        .map_err(|e| CorrectionError::FileReadError {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    Ok(names)
}

/// 取空白分隔的第 `idx` 个字段
pub fn field<'a>(parts: &[&'a str], idx: usize, format: &str, path: &str) -> Result<&'a str> {
    parts
        .get(idx)
        .copied()
        .ok_or_else(|| CorrectionError::FormatError {
            format: format.to_string(),
            path: path.to_string(),
            reason: format!(
                "expected at least {} fields, found {} in line '{}'",
                idx + 1,
                parts.len(),
                parts.join(" ")
            ),
        })
}

/// 将字段解析为浮点数
pub fn parse_f64(token: &str, format: &str, path: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| CorrectionError::ParseError {
            format: format.to_string(),
            path: path.to_string(),
            reason: format!("'{}' is not a number", token),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_out_of_range() {
        let parts = vec!["1", "2"];
        assert_eq!(field(&parts, 1, "x", "f").unwrap(), "2");
        assert!(matches!(
            field(&parts, 2, "x", "f"),
            Err(CorrectionError::FormatError { .. })
        ));
    }

    #[test]
    fn test_parse_f64_fortran_style() {
        assert!((parse_f64("-.10E+03", "x", "f").unwrap() + 100.0).abs() < 1e-9);
        assert!(matches!(
            parse_f64("abc", "x", "f"),
            Err(CorrectionError::ParseError { .. })
        ));
    }

    #[test]
    fn test_list_dir_missing() {
        let result = list_dir(Path::new("/definitely/not/a/dir"));
        assert!(matches!(
            result,
            Err(CorrectionError::DirectoryNotFound { .. })
        ));
    }
}
