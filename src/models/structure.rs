//! # 晶体结构数据模型
//!
//! CONTCAR 解析后的结构表示，提供按元素计数与化学式。
//!
//! ## 依赖关系
//! - 被 `parsers/poscar.rs` 构建
//! - 被 `models/element.rs` 使用

use std::collections::BTreeMap;

/// 晶格
#[derive(Debug, Clone)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    pub matrix: [[f64; 3]; 3],
}

impl Lattice {
    pub fn from_vectors(matrix: [[f64; 3]; 3]) -> Self {
        Lattice { matrix }
    }

    /// 晶格体积 (Å³)
    pub fn volume(&self) -> f64 {
        let a = self.matrix[0];
        let b = self.matrix[1];
        let c = self.matrix[2];

        // 行列式
        a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0])
    }
}

/// 原子（只保留电子数计算需要的元素符号）
#[derive(Debug, Clone)]
pub struct Atom {
    pub element: String,
}

impl Atom {
    pub fn new(element: impl Into<String>) -> Self {
        Atom {
            element: element.into(),
        }
    }
}

/// 晶体结构
#[derive(Debug, Clone)]
pub struct Crystal {
    pub name: String,
    pub lattice: Lattice,
    pub atoms: Vec<Atom>,
}

impl Crystal {
    pub fn new(name: impl Into<String>, lattice: Lattice, atoms: Vec<Atom>) -> Self {
        Crystal {
            name: name.into(),
            lattice,
            atoms,
        }
    }

    /// 全部原子的元素符号（含重复）
    pub fn symbols(&self) -> Vec<&str> {
        self.atoms.iter().map(|a| a.element.as_str()).collect()
    }

    /// 指定元素的原子数
    pub fn count_element(&self, symbol: &str) -> usize {
        self.symbols().into_iter().filter(|s| *s == symbol).count()
    }

    /// 化学式（按元素符号排序）
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

        for atom in &self.atoms {
            *counts.entry(atom.element.as_str()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(el, count)| {
                if count == 1 {
                    el.to_string()
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic(a: f64) -> Lattice {
        Lattice::from_vectors([[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a]])
    }

    #[test]
    fn test_lattice_volume_cubic() {
        assert!((cubic(5.0).volume() - 125.0).abs() < 1e-6);
    }

    #[test]
    fn test_count_and_formula() {
        let atoms = vec![
            Atom::new("Pt"),
            Atom::new("O"),
            Atom::new("H"),
            Atom::new("H"),
        ];
        let crystal = Crystal::new("slab", cubic(4.0), atoms);

        assert_eq!(crystal.count_element("H"), 2);
        assert_eq!(crystal.count_element("Na"), 0);
        assert_eq!(crystal.symbols(), vec!["Pt", "O", "H", "H"]);
        assert_eq!(crystal.formula(), "H2OPt");
    }
}
