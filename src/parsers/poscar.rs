//! # VASP POSCAR/CONTCAR 格式解析器
//!
//! 解析 VASP POSCAR/CONTCAR 文件，得到含重复原子的元素符号列表。
//!
//! ## POSCAR 格式说明
//! ```text
//! Comment line (structure name)
//! 1.0                    # scaling factor (负值表示目标体积)
//! a1 a2 a3               # lattice vector a
//! b1 b2 b3               # lattice vector b
//! c1 c2 c3               # lattice vector c
//! Element1 Element2 ...  # element symbols (VASP 5+)
//! n1 n2 ...              # number of atoms per element
//! Selective dynamics     # optional
//! Direct/Cartesian       # coordinate type
//! x1 y1 z1               # atom positions
//! ...
//! ```
//!
//! VASP 4 格式没有元素行，此时按 POTCAR 中的元素顺序补全。
//!
//! ## 依赖关系
//! - 被 `commands/correct.rs` 使用
//! - 使用 `models/structure.rs`

use super::read_file;
use crate::error::{CorrectionError, Result};
use crate::models::{Atom, Crystal, Lattice};
use std::path::Path;

/// 解析 POSCAR/CONTCAR 文件
///
/// `potcar_species` 仅在 VASP 4 格式（无元素行）时使用。
pub fn parse_poscar_file(path: &Path, potcar_species: &[String]) -> Result<Crystal> {
    let content = read_file(path)?;
    let crystal = parse_poscar_content(&content, &path.display().to_string(), potcar_species)?;
    log::debug!(
        "{} atoms ({}) from {}",
        crystal.atoms.len(),
        crystal.formula(),
        path.display()
    );
    Ok(crystal)
}

fn parse_error(path: &str, reason: impl Into<String>) -> CorrectionError {
    CorrectionError::ParseError {
        format: "poscar".to_string(),
        path: path.to_string(),
        reason: reason.into(),
    }
}

/// 从字符串内容解析 POSCAR 格式
pub fn parse_poscar_content(content: &str, path: &str, potcar_species: &[String]) -> Result<Crystal> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.len() < 8 {
        return Err(parse_error(path, "File too short"));
    }

    // Line 0: Comment/name
    let name = lines[0].trim().to_string();

    // Line 1: Scaling factor
    let scale: f64 = lines[1]
        .split_whitespace()
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| parse_error(path, "Invalid scaling factor at line 2"))?;

    // Lines 2-4: Lattice vectors
    let mut matrix = [[0.0; 3]; 3];
    for i in 0..3 {
        let parts: Vec<f64> = lines[2 + i]
            .split_whitespace()
            .take(3)
            .filter_map(|s| s.parse().ok())
            .collect();
        if parts.len() < 3 {
            return Err(parse_error(
                path,
                format!("Invalid lattice vector at line {}", 3 + i),
            ));
        }
        matrix[i] = [parts[0], parts[1], parts[2]];
    }
    let lattice = scaled_lattice(matrix, scale);

    // Line 5: Element symbols (VASP 5+) or atom counts (VASP 4)
    let line5_parts: Vec<&str> = lines[5].split_whitespace().collect();
    if line5_parts.is_empty() {
        return Err(parse_error(path, "Empty element/count line at line 6"));
    }

    let (elements, counts, atom_line_start) = if line5_parts[0].parse::<usize>().is_ok() {
        // VASP 4 format: no element line, species come from POTCAR
        let counts = parse_counts(&line5_parts, path, 6)?;
        if counts.len() != potcar_species.len() {
            return Err(parse_error(
                path,
                format!(
                    "{} atom counts without element line but POTCAR lists {} elements",
                    counts.len(),
                    potcar_species.len()
                ),
            ));
        }
        (potcar_species.to_vec(), counts, 6)
    } else {
        // VASP 5+ format: element symbols on line 5, counts on line 6
        let elements: Vec<String> = line5_parts.iter().map(|s| chemical_symbol(s)).collect();
        let count_parts: Vec<&str> = lines[6].split_whitespace().collect();
        let counts = parse_counts(&count_parts, path, 7)?;
        if counts.len() != elements.len() {
            return Err(parse_error(
                path,
                format!(
                    "{} element symbols but {} atom counts",
                    elements.len(),
                    counts.len()
                ),
            ));
        }
        (elements, counts, 7)
    };

    // Check for "Selective dynamics" line
    let mut coord_line = atom_line_start;
    if lines.len() > coord_line
        && lines[coord_line]
            .trim()
            .to_lowercase()
            .starts_with('s')
    {
        coord_line += 1;
    }

    // Coordinate type line
    if lines.len() <= coord_line {
        return Err(parse_error(path, "Missing coordinate type line"));
    }

    // Atom positions: one coordinate line per atom
    let mut atoms: Vec<Atom> = Vec::new();
    let mut line_idx = coord_line + 1;

    for (elem, &count) in elements.iter().zip(counts.iter()) {
        for _ in 0..count {
            let valid = lines
                .get(line_idx)
                .map(|l| {
                    l.split_whitespace()
                        .take(3)
                        .filter(|s| s.parse::<f64>().is_ok())
                        .count()
                        == 3
                })
                .unwrap_or(false);
            if !valid {
                return Err(parse_error(
                    path,
                    format!("Missing or invalid position for {} at line {}", elem, line_idx + 1),
                ));
            }
            atoms.push(Atom::new(elem.clone()));
            line_idx += 1;
        }
    }

    Ok(Crystal::new(name, lattice, atoms))
}

/// 解析每种元素的原子数
fn parse_counts(parts: &[&str], path: &str, line_no: usize) -> Result<Vec<usize>> {
    parts
        .iter()
        .map(|s| {
            s.parse::<usize>().map_err(|_| {
                parse_error(path, format!("Invalid atom count '{}' at line {}", s, line_no))
            })
        })
        .collect()
}

/// `Fe_pv`、`O/5dcf7ad` 之类的标签只保留元素符号
fn chemical_symbol(label: &str) -> String {
    label.split(['_', '/']).next().unwrap_or(label).to_string()
}

/// 正缩放因子直接相乘；负值为目标体积
fn scaled_lattice(matrix: [[f64; 3]; 3], scale: f64) -> Lattice {
    let raw = Lattice::from_vectors(matrix);
    let factor = if scale < 0.0 {
        let volume = raw.volume().abs();
        if volume > 0.0 {
            (scale.abs() / volume).cbrt()
        } else {
            1.0
        }
    } else {
        scale
    };

    Lattice::from_vectors(matrix.map(|row| row.map(|x| x * factor)))
}
