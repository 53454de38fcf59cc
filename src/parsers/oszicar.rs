//! # VASP OSZICAR 解析器
//!
//! 提取最后一个离子步的能量 (E0)。
//!
//! ## OSZICAR 离子步行格式
//! ```text
//!    1 F= -.10234567E+03 E0= -.10234000E+03  d E =-.102346E+03
//! ```
//! 判定条件：`F=`、`E0=`、`d`、`E` 均作为完整字段出现；第 5 个字段 (索引 4) 为能量。
//!
//! ## 依赖关系
//! - 被 `commands/correct.rs` 使用

use super::{parse_f64, read_file};
use crate::error::{CorrectionError, Result};
use std::path::Path;

const FORMAT: &str = "OSZICAR";
const MARKERS: [&str; 4] = ["F=", "E0=", "d", "E"];

/// 解析 OSZICAR 文件，返回原始能量 (eV)
pub fn parse_oszicar(path: &Path) -> Result<f64> {
    let content = read_file(path)?;
    let energy = parse_oszicar_content(&content, &path.display().to_string())?;
    log::debug!("raw energy {} from {}", energy, path.display());
    Ok(energy)
}

/// 从字符串内容提取最后一个离子步能量
pub fn parse_oszicar_content(content: &str, path: &str) -> Result<f64> {
    let last = content
        .lines()
        .map(|l| l.split_whitespace().collect::<Vec<_>>())
        .filter(|parts| MARKERS.iter().all(|m| parts.contains(m)))
        .last()
        .ok_or_else(|| CorrectionError::NotFound {
            what: format!("Ionic step energy line in {}", path),
            pattern: "a line with 'F=', 'E0=', 'd', 'E'".to_string(),
        })?;

    // 四个标记都在时至少有 4 个字段，索引 4 仍可能缺失
    let token = super::field(&last, 4, FORMAT, path)?;
    parse_f64(token, FORMAT, path)
}
