//! # 修正计算配置
//!
//! 列出一次修正计算需要读取的全部输入文件路径。
//! 默认值对应当前目录下 VASP 的固定文件名，测试可以注入任意夹具目录。
//!
//! ## 依赖关系
//! - 被 `cli/`、`commands/` 使用
//! - 路径被 `parsers/` 消费

use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// 作业 id 的比较方式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum IdOrder {
    /// Compare ids as unsigned integers
    #[default]
    Numeric,
    /// Compare ids as strings (e.g. "9" > "10")
    Lexical,
}

impl std::fmt::Display for IdOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdOrder::Numeric => write!(f, "numeric"),
            IdOrder::Lexical => write!(f, "lexical"),
        }
    }
}

/// 输入文件配置
#[derive(Debug, Clone)]
pub struct CorrectionConfig {
    /// 计算目录
    pub workdir: PathBuf,
    /// 离子步能量日志
    pub oszicar: PathBuf,
    /// 赝势头文件
    pub potcar: PathBuf,
    /// 弛豫后结构
    pub contcar: PathBuf,
    /// 作业输出文件；`None` 时按 `name.id.out` 自动查找最新作业
    pub job_output: Option<PathBuf>,
    /// 提交脚本；`None` 时取目录中第一个 `.sl` 文件
    pub submit_script: Option<PathBuf>,
    /// 自动查找作业时 id 的比较方式
    pub id_order: IdOrder,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        CorrectionConfig {
            workdir: PathBuf::from("."),
            oszicar: PathBuf::from("OSZICAR"),
            potcar: PathBuf::from("POTCAR"),
            contcar: PathBuf::from("CONTCAR"),
            job_output: None,
            submit_script: None,
            id_order: IdOrder::default(),
        }
    }
}

impl CorrectionConfig {
    /// 以 `dir` 为计算目录，其余取默认文件名
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        CorrectionConfig {
            workdir: dir.into(),
            ..Default::default()
        }
    }

    /// 相对路径相对于计算目录解析
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workdir.join(path)
        }
    }

    pub fn oszicar_path(&self) -> PathBuf {
        self.resolve(&self.oszicar)
    }

    pub fn potcar_path(&self) -> PathBuf {
        self.resolve(&self.potcar)
    }

    pub fn contcar_path(&self) -> PathBuf {
        self.resolve(&self.contcar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_are_relative_to_workdir() {
        let config = CorrectionConfig::in_dir("/tmp/calc");
        assert_eq!(config.oszicar_path(), PathBuf::from("/tmp/calc/OSZICAR"));
        assert_eq!(config.potcar_path(), PathBuf::from("/tmp/calc/POTCAR"));
        assert_eq!(config.contcar_path(), PathBuf::from("/tmp/calc/CONTCAR"));
        assert_eq!(config.id_order, IdOrder::Numeric);
        assert!(config.job_output.is_none());
    }

    #[test]
    fn test_absolute_override_is_kept() {
        let mut config = CorrectionConfig::in_dir("/tmp/calc");
        config.potcar = PathBuf::from("/shared/POTCAR");
        assert_eq!(config.potcar_path(), PathBuf::from("/shared/POTCAR"));
    }
}
