//! # 作业输出文件定位
//!
//! 在计算目录中按 `name.id.out` 的命名约定查找最新一次作业的输出文件。
//!
//! ## 依赖关系
//! - 被 `commands/correct.rs` 使用
//! - 使用 `config.rs` 中的 `IdOrder`

use super::list_dir;
use crate::config::IdOrder;
use crate::error::{CorrectionError, Result};
use std::cmp::Ordering;
use std::path::Path;

const FORMAT: &str = "job output name";

/// 从文件名解析出的作业标识
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobId {
    pub name: String,
    pub id: String,
}

impl JobId {
    /// 按 `.` 切分文件名，第二段为 id
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let parts: Vec<&str> = file_name.trim_end().split('.').collect();
        if parts.len() < 2 {
            return Err(CorrectionError::FormatError {
                format: FORMAT.to_string(),
                path: file_name.to_string(),
                reason: "expected 'name.id.out'".to_string(),
            });
        }
        Ok(JobId {
            name: parts[0].to_string(),
            id: parts[1].to_string(),
        })
    }

    /// 还原为 `{name}.{id}.out`
    pub fn file_name(&self) -> String {
        format!("{}.{}.out", self.name, self.id)
    }
}

/// 在目录中查找 id 最大的作业输出文件名
pub fn resolve_job_output(dir: &Path, order: IdOrder) -> Result<String> {
    let names = list_dir(dir)?;
    let file_name = latest_job(&names, order)?.file_name();
    log::debug!("resolved job output '{}' ({} ids)", file_name, order);
    Ok(file_name)
}

/// 从文件名列表中选出最新作业
///
/// 只考虑名称中含 `.out` 的条目；id 相同时取列表中最先出现的一个。
pub fn latest_job(names: &[String], order: IdOrder) -> Result<JobId> {
    let jobs: Vec<JobId> = names
        .iter()
        .filter(|n| n.contains(".out"))
        .map(|n| JobId::from_file_name(n))
        .collect::<Result<_>>()?;

    if jobs.is_empty() {
        return Err(CorrectionError::NotFound {
            what: "Job output file".to_string(),
            pattern: "'name.id.out'".to_string(),
        });
    }

    let mut best = &jobs[0];
    for job in &jobs[1..] {
        if compare_ids(&job.id, &best.id, order)? == Ordering::Greater {
            best = job;
        }
    }

    Ok(best.clone())
}

fn compare_ids(a: &str, b: &str, order: IdOrder) -> Result<Ordering> {
    match order {
        IdOrder::Lexical => Ok(a.cmp(b)),
        IdOrder::Numeric => Ok(numeric_id(a)?.cmp(&numeric_id(b)?)),
    }
}

fn numeric_id(id: &str) -> Result<u64> {
    id.parse().map_err(|_| CorrectionError::ParseError {
        format: FORMAT.to_string(),
        path: id.to_string(),
        reason: format!("job id '{}' is not an integer", id),
    })
}
