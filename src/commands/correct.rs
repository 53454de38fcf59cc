//! # 能量修正命令实现
//!
//! 依次读取五个输入量，组合出费米修正与电子修正后的总能量并打印报告。
//!
//! ## 流程
//! 1. 定位作业输出文件 (`name.id.out`)
//! 2. OSZICAR → 原始能量
//! 3. 作业输出 → 末态电子数、费米偏移
//! 4. POTCAR + CONTCAR → 初始电子数
//! 5. 提交脚本 → μₑ
//! 6. 组合修正，打印报告
//!
//! 任一步失败即返回错误，不输出部分报告。
//!
//! ## 依赖关系
//! - 使用 `cli/` 定义的参数与 `config.rs`
//! - 使用 `parsers/`, `models/`
//! - 使用 `utils/output.rs`

use crate::cli::Cli;
use crate::config::CorrectionConfig;
use crate::error::Result;
use crate::models::{Correction, CorrectionInputs, Crystal, ElementTable};
use crate::parsers::{job, job_out, oszicar, poscar, potcar, submit};
use crate::utils::output;

use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 一次修正计算读取到的全部内容
#[derive(Debug)]
pub struct CorrectionRun {
    pub job_output: PathBuf,
    pub submit_script: PathBuf,
    pub elements: ElementTable,
    pub crystal: Crystal,
    pub correction: Correction,
}

/// 元素表行
#[derive(Debug, Clone, Tabled)]
struct ElementRow {
    #[tabled(rename = "Element")]
    element: String,
    #[tabled(rename = "ZVAL")]
    zval: String,
    #[tabled(rename = "Atoms")]
    atoms: usize,
    #[tabled(rename = "Electrons")]
    electrons: String,
}

/// 执行修正命令
pub fn execute(args: Cli) -> Result<()> {
    let config = args.config();
    let run = run_correction(&config)?;

    if args.verbose {
        print_inputs(&run);
    }

    output::print_header("VASPsol Energy Correction");
    println!("{}", run.correction.report());

    Ok(())
}

/// 读取全部输入并计算修正
pub fn run_correction(config: &CorrectionConfig) -> Result<CorrectionRun> {
    let job_output = match &config.job_output {
        Some(path) => config.resolve(path),
        None => config
            .workdir
            .join(job::resolve_job_output(&config.workdir, config.id_order)?),
    };

    let raw_energy = oszicar::parse_oszicar(&config.oszicar_path())?;
    let fermi = job_out::parse_job_output(&job_output)?;
    let (elements, crystal) = initial_electrons(config)?;

    let submit_script = match &config.submit_script {
        Some(path) => config.resolve(path),
        None => submit::find_submit_script(&config.workdir)?,
    };
    let mu_e = submit::parse_submit_script(&submit_script)?;

    let correction = Correction::compute(CorrectionInputs {
        raw_energy,
        ne_initial: elements.initial_electrons(),
        ne_final: fermi.ne_final,
        fermi_shift: fermi.fermi_shift,
        mu_e,
    });
    log::debug!("{:?}", correction);

    Ok(CorrectionRun {
        job_output,
        submit_script,
        elements,
        crystal,
        correction,
    })
}

/// POTCAR 元素表与 CONTCAR 结构，元素表中已填入原子数
fn initial_electrons(config: &CorrectionConfig) -> Result<(ElementTable, Crystal)> {
    let mut elements = potcar::parse_potcar(&config.potcar_path())?;
    let crystal = poscar::parse_poscar_file(&config.contcar_path(), &elements.symbols())?;
    elements.count_atoms(&crystal);
    Ok((elements, crystal))
}

fn print_inputs(run: &CorrectionRun) {
    output::print_header("Inputs");
    output::print_info(&format!("Job output:    {}", run.job_output.display()));
    output::print_info(&format!("Submit script: {}", run.submit_script.display()));
    output::print_info(&format!(
        "Structure:     {} ({} atoms, {:.3} Å³)",
        run.crystal.formula(),
        run.crystal.atoms.len(),
        run.crystal.lattice.volume().abs()
    ));

    let rows: Vec<ElementRow> = run
        .elements
        .records
        .iter()
        .map(|r| ElementRow {
            element: r.symbol.clone(),
            zval: format!("{:.3}", r.zval),
            atoms: r.count,
            electrons: format!("{:.3}", r.electrons()),
        })
        .collect();
    println!("{}", Table::new(&rows));

    output::print_info(&format!(
        "Fermi correction:    {} eV",
        run.correction.fermi_correction
    ));
    output::print_info(&format!(
        "Electron correction: {} eV",
        run.correction.electron_correction
    ));

    let unmatched: Vec<&str> = run
        .elements
        .records
        .iter()
        .filter(|r| r.count == 0)
        .map(|r| r.symbol.as_str())
        .collect();
    if !unmatched.is_empty() {
        output::print_warning(&format!(
            "POTCAR elements with no atoms in {}: {}",
            run.crystal.name,
            unmatched.join(", ")
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdOrder;
    use crate::error::CorrectionError;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const OSZICAR: &str = "   1 F= -.99000000E+02 E0= -.98500000E+02  d E =-.990000E+02\n   2 F= -.10010000E+03 E0= -.10000000E+03  d E =-.110000E+01\n";
    const POTCAR: &str = "   TITEL  = PAW_PBE O 08Apr2002\n   POMASS =   16.000; ZVAL   =    6.000    mass and valenz\n   TITEL  = PAW_PBE H 15Jun2001\n   POMASS =    1.000; ZVAL   =    1.000    mass and valenz\n";
    const SUBMIT: &str = "#!/bin/bash\n#SBATCH -J relax\nutarget=4.5\nphiref=-0.2\nsrun vasp_std\n";

    fn contcar() -> String {
        let mut s = String::from("water\n1.0\n10.0 0.0 0.0\n0.0 10.0 0.0\n0.0 0.0 10.0\nO H\n8 16\nDirect\n");
        for i in 0..24 {
            s.push_str(&format!("0.{:02} 0.0 0.0\n", i));
        }
        s
    }

    fn write_fixture(dir: &Path, job_name: &str, job_content: &str) {
        fs::write(dir.join("OSZICAR"), OSZICAR).unwrap();
        fs::write(dir.join("POTCAR"), POTCAR).unwrap();
        fs::write(dir.join("CONTCAR"), contcar()).unwrap();
        fs::write(dir.join("submit.sl"), SUBMIT).unwrap();
        fs::write(dir.join(job_name), job_content).unwrap();
    }

    #[test]
    fn test_end_to_end_relaxation_job() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path(), "MyVASPJob.12.out", "  1  64.0  0.0\n  2  63.0  0.1\n");
        fs::write(dir.path().join("MyVASPJob.3.out"), "  1  0.0  0.0\n").unwrap();

        let run = run_correction(&CorrectionConfig::in_dir(dir.path())).unwrap();
        let c = run.correction;

        assert_eq!(run.job_output, dir.path().join("MyVASPJob.12.out"));
        assert_eq!(run.submit_script, dir.path().join("submit.sl"));
        assert!((c.raw_energy - (-100.0)).abs() < 1e-9);
        assert!((c.net_charge - 1.0).abs() < 1e-9);
        assert!((c.fermi_corrected_energy - (-100.1)).abs() < 1e-9);
        assert!((c.final_corrected_energy - (-104.4)).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_job() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path(), "single.7.out", "header\n  63.5  -0.2\n");

        let run = run_correction(&CorrectionConfig::in_dir(dir.path())).unwrap();
        let c = run.correction;
        assert!((c.net_charge - 0.5).abs() < 1e-9);
        // 0.5 * 0.2 = 0.1
        assert!((c.fermi_corrected_energy - (-99.9)).abs() < 1e-9);
        // -99.9 + 0.5 * -4.3
        assert!((c.final_corrected_energy - (-102.05)).abs() < 1e-9);
    }

    #[test]
    fn test_report_is_deterministic() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path(), "MyVASPJob.1.out", "  2  63.0  0.1\n");
        let config = CorrectionConfig::in_dir(dir.path());

        let first = run_correction(&config).unwrap().correction.report();
        let second = run_correction(&config).unwrap().correction.report();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unrecognized_job_name_fails() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path(), "relax.4.out", "  2  63.0  0.1\n");

        let result = run_correction(&CorrectionConfig::in_dir(dir.path()));
        assert!(matches!(
            result,
            Err(CorrectionError::UnrecognizedFormat { .. })
        ));
    }

    #[test]
    fn test_explicit_paths_override_discovery() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path(), "MyVASPJob.9.out", "  2  63.0  0.1\n");
        fs::write(dir.path().join("MyVASPJob.10.out"), "  2  60.0  0.1\n").unwrap();
        fs::write(dir.path().join("other.sl"), "utarget=0.0\nphiref=0.0\n").unwrap();

        let mut config = CorrectionConfig::in_dir(dir.path());
        config.job_output = Some(PathBuf::from("MyVASPJob.9.out"));
        config.submit_script = Some(PathBuf::from("submit.sl"));

        let run = run_correction(&config).unwrap();
        assert!((run.correction.net_charge - 1.0).abs() < 1e-9);
        assert!((run.correction.mu_e - (-4.3)).abs() < 1e-9);
    }

    #[test]
    fn test_lexical_order_picks_string_max() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path(), "MyVASPJob.9.out", "  2  63.0  0.1\n");
        fs::write(dir.path().join("MyVASPJob.10.out"), "  2  60.0  0.1\n").unwrap();

        let mut config = CorrectionConfig::in_dir(dir.path());
        config.id_order = IdOrder::Lexical;
        let run = run_correction(&config).unwrap();
        assert_eq!(run.job_output, dir.path().join("MyVASPJob.9.out"));

        config.id_order = IdOrder::Numeric;
        let run = run_correction(&config).unwrap();
        assert_eq!(run.job_output, dir.path().join("MyVASPJob.10.out"));
    }

    #[test]
    fn test_missing_oszicar() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path(), "MyVASPJob.1.out", "  2  63.0  0.1\n");
        fs::remove_file(dir.path().join("OSZICAR")).unwrap();

        assert!(matches!(
            run_correction(&CorrectionConfig::in_dir(dir.path())),
            Err(CorrectionError::FileReadError { .. })
        ));
    }
}
