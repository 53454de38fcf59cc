//! # 提交脚本参数解析器
//!
//! 从作业提交脚本 (`*.sl`) 中读取 `utarget=` 与 `phiref=`，计算参考电化学势
//! μₑ = −phiref − utarget。
//!
//! ## 依赖关系
//! - 被 `commands/correct.rs` 使用

use super::{list_dir, parse_f64, read_file};
use crate::error::{CorrectionError, Result};
use std::path::{Path, PathBuf};

const FORMAT: &str = "submit script";
const UTARGET: &str = "utarget";
const PHIREF: &str = "phiref";

/// 取目录中（按名称排序）第一个文件名含 `.sl` 的文件
pub fn find_submit_script(dir: &Path) -> Result<PathBuf> {
    list_dir(dir)?
        .into_iter()
        .find(|n| n.contains(".sl"))
        .map(|n| dir.join(n))
        .ok_or_else(|| CorrectionError::NotFound {
            what: format!("Submit script in {}", dir.display()),
            pattern: "'*.sl'".to_string(),
        })
}

/// 解析提交脚本，返回 μₑ (eV)
pub fn parse_submit_script(path: &Path) -> Result<f64> {
    let content = read_file(path)?;
    let mu_e = parse_submit_content(&content, &path.display().to_string())?;
    log::debug!("mu_e {} from {}", mu_e, path.display());
    Ok(mu_e)
}

/// 从字符串内容计算 μₑ
///
/// 只接受空白分隔的 `key=value` 字段（key 前的 `-` 会被忽略）；
/// 同一个 key 出现多次时以最后一次为准。
pub fn parse_submit_content(content: &str, path: &str) -> Result<f64> {
    let mut utarget: Option<f64> = None;
    let mut phiref: Option<f64> = None;

    for line in content.lines() {
        for token in line.split_whitespace() {
            let Some((key, value)) = token.split_once('=') else {
                continue;
            };
            let slot = match key.trim_start_matches('-') {
                UTARGET => &mut utarget,
                PHIREF => &mut phiref,
                _ => continue,
            };
            let value = value.trim_matches(|c: char| c == '"' || c == '\'' || c == ';');
            *slot = Some(parse_f64(value, FORMAT, path)?);
        }
    }

    let missing = |key: &str| CorrectionError::MissingKey {
        key: key.to_string(),
        path: path.to_string(),
    };
    let utarget = utarget.ok_or_else(|| missing(UTARGET))?;
    let phiref = phiref.ok_or_else(|| missing(PHIREF))?;

    Ok(-phiref - utarget)
}
