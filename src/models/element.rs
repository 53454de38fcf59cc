//! # 元素价电子数据模型
//!
//! 保存 POTCAR 中每个元素的符号与价电子数 (ZVAL)，并结合结构计算初始电子数。
//!
//! ## 依赖关系
//! - 被 `parsers/potcar.rs` 构建
//! - 使用 `models/structure.rs`

use super::Crystal;
use crate::error::{CorrectionError, Result};

/// 单个元素记录
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRecord {
    /// 元素符号（最多 2 个字符）
    pub symbol: String,

    /// 价电子数
    pub zval: f64,

    /// 结构中该元素的原子数
    pub count: usize,
}

impl ElementRecord {
    /// 该元素贡献的电子数
    pub fn electrons(&self) -> f64 {
        self.zval * self.count as f64
    }
}

/// 按 POTCAR 顺序排列的元素表
#[derive(Debug, Clone, Default)]
pub struct ElementTable {
    pub records: Vec<ElementRecord>,
}

impl ElementTable {
    /// 按位置配对符号与 ZVAL，数量不一致时报错
    pub fn pair(symbols: Vec<String>, zvals: Vec<f64>, path: &str) -> Result<Self> {
        if symbols.len() != zvals.len() {
            return Err(CorrectionError::FormatError {
                format: "POTCAR".to_string(),
                path: path.to_string(),
                reason: format!(
                    "{} TITEL lines but {} POMASS lines",
                    symbols.len(),
                    zvals.len()
                ),
            });
        }

        let records = symbols
            .into_iter()
            .zip(zvals)
            .map(|(symbol, zval)| ElementRecord {
                symbol,
                zval,
                count: 0,
            })
            .collect();

        Ok(ElementTable { records })
    }

    pub fn symbols(&self) -> Vec<String> {
        self.records.iter().map(|r| r.symbol.clone()).collect()
    }

    /// 用结构中的原子数填充每条记录
    pub fn count_atoms(&mut self, crystal: &Crystal) {
        for record in &mut self.records {
            record.count = crystal.count_element(&record.symbol);
        }
    }

    /// 初始电子数 = Σ ZVAL × 原子数
    pub fn initial_electrons(&self) -> f64 {
        self.records.iter().map(ElementRecord::electrons).sum()
    }
}
