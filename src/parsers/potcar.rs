//! # VASP POTCAR 头信息解析器
//!
//! 读取每个赝势的元素符号 (TITEL 行) 与价电子数 (POMASS 行中的 ZVAL)。
//!
//! ## 相关行格式
//! ```text
//!    TITEL  = PAW_PBE Fe_pv 06Sep2000
//!    POMASS =   55.847; ZVAL   =   14.000    mass and valenz
//! ```
//! - TITEL 行字段 3 为元素，超过 2 个字符时截断为前 2 个
//! - POMASS 行字段 5 为 ZVAL
//! - 第 n 个 TITEL 与第 n 个 POMASS 按位置配对
//!
//! ## 依赖关系
//! - 被 `commands/correct.rs` 使用
//! - 构建 `models/element.rs` 中的 `ElementTable`

use super::{field, parse_f64, read_file};
use crate::error::Result;
use crate::models::ElementTable;
use std::path::Path;

const FORMAT: &str = "POTCAR";

/// 解析 POTCAR 文件
pub fn parse_potcar(path: &Path) -> Result<ElementTable> {
    let content = read_file(path)?;
    let table = parse_potcar_content(&content, &path.display().to_string())?;
    log::debug!(
        "{} elements from {}: {:?}",
        table.records.len(),
        path.display(),
        table.symbols()
    );
    Ok(table)
}

/// 从字符串内容解析元素表（原子数尚未填充）
pub fn parse_potcar_content(content: &str, path: &str) -> Result<ElementTable> {
    let mut symbols: Vec<String> = Vec::new();
    let mut zvals: Vec<f64> = Vec::new();

    for line in content.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.contains(&"TITEL") {
            let element = field(&parts, 3, FORMAT, path)?;
            symbols.push(element.chars().take(2).collect());
        }

        if parts.contains(&"POMASS") {
            let zval = field(&parts, 5, FORMAT, path)?;
            zvals.push(parse_f64(zval, FORMAT, path)?);
        }
    }

    ElementTable::pair(symbols, zvals, path)
}
