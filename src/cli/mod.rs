//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。每个输入文件都可以单独覆盖，
//! 默认读取计算目录下的 VASP 固定文件名。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 转换为 `config.rs` 中的 `CorrectionConfig`

use crate::config::{CorrectionConfig, IdOrder};
use clap::Parser;
use std::path::PathBuf;

/// vaspsol-correct - VASPsol 恒电势计算的电荷与电势修正
#[derive(Parser, Debug)]
#[command(name = "vaspsol-correct")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Charge- and potential-corrected total energy for a VASPsol constant-potential run",
    long_about = None
)]
pub struct Cli {
    /// Calculation directory containing OSZICAR, POTCAR, CONTCAR, *.out and *.sl
    #[arg(short, long, env = "VASPSOL_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Ionic step log (relative paths resolve against --dir)
    #[arg(long, default_value = "OSZICAR")]
    pub oszicar: PathBuf,

    /// Pseudopotential file with TITEL/POMASS headers
    #[arg(long, default_value = "POTCAR")]
    pub potcar: PathBuf,

    /// Relaxed structure
    #[arg(long, default_value = "CONTCAR")]
    pub contcar: PathBuf,

    /// Job output file (default: newest 'name.id.out' in --dir)
    #[arg(long)]
    pub job_output: Option<PathBuf>,

    /// Submit script with utarget= and phiref= (default: first '*.sl' in --dir)
    #[arg(long)]
    pub submit_script: Option<PathBuf>,

    /// How job ids in 'name.id.out' are compared when picking the newest job
    #[arg(long, value_enum, default_value_t = IdOrder::Numeric)]
    pub id_order: IdOrder,

    /// Print the resolved inputs and the per-element electron table
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> CorrectionConfig {
        CorrectionConfig {
            oszicar: self.oszicar.clone(),
            potcar: self.potcar.clone(),
            contcar: self.contcar.clone(),
            job_output: self.job_output.clone(),
            submit_script: self.submit_script.clone(),
            id_order: self.id_order,
            ..CorrectionConfig::in_dir(&self.dir)
        }
    }
}
