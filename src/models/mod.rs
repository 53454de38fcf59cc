//! # 数据模型模块
//!
//! 定义结构、元素记录与能量修正结果。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 子模块: structure, element, correction

pub mod correction;
pub mod element;
pub mod structure;

pub use correction::{Correction, CorrectionInputs};
pub use element::ElementTable;
pub use structure::{Atom, Crystal, Lattice};
