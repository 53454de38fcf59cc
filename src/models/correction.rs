//! # 能量修正结果数据模型
//!
//! 组合原始能量、电子数与参考电势，计算费米修正与电子修正后的总能量。
//!
//! ```text
//! net_charge             = ne_initial − ne_final
//! fermi_correction       = net_charge × (−fermi_shift)
//! fermi_corrected_energy = raw_energy + fermi_correction
//! electron_correction    = net_charge × mu_e
//! final_corrected_energy = fermi_corrected_energy + electron_correction
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/correct.rs` 使用
//! - 无外部模块依赖

/// 修正所需的五个标量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionInputs {
    /// OSZICAR 中最后一个离子步能量 (eV)
    pub raw_energy: f64,
    /// 弛豫前电子数
    pub ne_initial: f64,
    /// 弛豫后电子数
    pub ne_final: f64,
    /// 费米能级偏移 (eV)
    pub fermi_shift: f64,
    /// 参考电化学势 μₑ (eV)
    pub mu_e: f64,
}

/// 修正结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    pub raw_energy: f64,
    pub net_charge: f64,
    pub fermi_shift: f64,
    pub mu_e: f64,
    pub fermi_correction: f64,
    pub fermi_corrected_energy: f64,
    pub electron_correction: f64,
    pub final_corrected_energy: f64,
}

impl Correction {
    pub fn compute(inputs: CorrectionInputs) -> Self {
        let net_charge = inputs.ne_initial - inputs.ne_final;

        let fermi_correction = net_charge * (-inputs.fermi_shift);
        let fermi_corrected_energy = inputs.raw_energy + fermi_correction;

        let electron_correction = net_charge * inputs.mu_e;
        let final_corrected_energy = fermi_corrected_energy + electron_correction;

        Correction {
            raw_energy: inputs.raw_energy,
            net_charge,
            fermi_shift: inputs.fermi_shift,
            mu_e: inputs.mu_e,
            fermi_correction,
            fermi_corrected_energy,
            electron_correction,
            final_corrected_energy,
        }
    }

    /// 报告文本，顺序固定
    pub fn report(&self) -> String {
        format!(
            "The raw energy is {},\n\
             the net charge is {},\n\
             the Fermi shift is {},\n\
             \u{03BC}\u{2091} is {},\n\
             the Fermi corrected energy is {},\n\
             the Fermi and electron (full) corrected energy is {}",
            self.raw_energy,
            self.net_charge,
            self.fermi_shift,
            self.mu_e,
            self.fermi_corrected_energy,
            self.final_corrected_energy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> CorrectionInputs {
        CorrectionInputs {
            raw_energy: -100.0,
            ne_initial: 64.0,
            ne_final: 63.0,
            fermi_shift: 0.1,
            mu_e: -4.3,
        }
    }

    #[test]
    fn test_compose_reference_values() {
        let c = Correction::compute(reference());
        assert!((c.net_charge - 1.0).abs() < 1e-9);
        assert!((c.fermi_correction - (-0.1)).abs() < 1e-9);
        assert!((c.fermi_corrected_energy - (-100.1)).abs() < 1e-9);
        assert!((c.electron_correction - (-4.3)).abs() < 1e-9);
        assert!((c.final_corrected_energy - (-104.4)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_net_charge_leaves_energy() {
        let mut inputs = reference();
        inputs.ne_final = inputs.ne_initial;
        let c = Correction::compute(inputs);
        assert_eq!(c.final_corrected_energy, inputs.raw_energy);
    }

    #[test]
    fn test_report_order_and_determinism() {
        let a = Correction::compute(reference()).report();
        let b = Correction::compute(reference()).report();
        assert_eq!(a, b);

        let lines: Vec<&str> = a.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "The raw energy is -100,");
        assert_eq!(lines[1], "the net charge is 1,");
        assert_eq!(lines[2], "the Fermi shift is 0.1,");
        assert_eq!(lines[3], "μₑ is -4.3,");
        assert_eq!(lines[4], "the Fermi corrected energy is -100.1,");
        // shortest round-trip formatting keeps the binary residue
        assert_eq!(
            lines[5],
            "the Fermi and electron (full) corrected energy is -104.39999999999999"
        );
    }
}
