//! # 取样网格模块
//!
//! ## 设计思路
//!
//! 在预览图上按固定步长铺一张规则格点，既用于网格表格展示，也用于 CSV 导出。
//! 两种输出共享同一遍取样，顺序统一为行优先（y 外层、x 内层）。
//!
//! ## 实现思路
//!
//! - `step = max(min_step, round(width / target_columns))`，`round` 为四舍五入（半数进位），
//!   例如宽 900、目标 40 列时 22.5 进位为 23。
//! - `xs = 0, step, 2·step, … < width`，`ys` 同理；`(0, 0)` 始终在格点中。

use serde::Serialize;

use super::{ColorSample, DisplayedImage};

/// 计算网格步长。`target_columns` 为 0 时按 1 处理。
///
/// # 示例
/// ```rust
/// use color_inspector::inspector::grid_step;
///
/// assert_eq!(grid_step(900, 40, 4), 23);
/// assert_eq!(grid_step(100, 40, 4), 4);
/// ```
pub fn grid_step(width: u32, target_columns: u32, min_step: u32) -> u32 {
    let columns = target_columns.max(1) as u64;
    let rounded = (2 * width as u64 + columns) / (2 * columns);
    (rounded as u32).max(min_step).max(1)
}

/// 单轴格点坐标：`0, step, 2·step, …` 且小于 `len`。
pub fn axis_coordinates(len: u32, step: u32) -> Vec<u32> {
    (0..len).step_by(step.max(1) as usize).collect()
}

/// 一次网格取样的结果。
#[derive(Debug, Clone, Serialize)]
pub struct SamplingGrid {
    pub step: u32,
    pub xs: Vec<u32>,
    pub ys: Vec<u32>,
    /// `rows[i][j]` 对应坐标 `(xs[j], ys[i])`。
    pub rows: Vec<Vec<ColorSample>>,
}

impl SamplingGrid {
    pub fn build(image: &DisplayedImage, target_columns: u32, min_step: u32) -> Self {
        let (width, height) = image.dimensions();
        let step = grid_step(width, target_columns, min_step);
        let xs = axis_coordinates(width, step);
        let ys = axis_coordinates(height, step);

        let rows = ys
            .iter()
            .map(|&y| {
                xs.iter()
                    .map(|&x| ColorSample::new(x, y, image.pixel(x, y)))
                    .collect()
            })
            .collect();

        Self { step, xs, ys, rows }
    }

    /// 行优先展开的全部取样记录（导出顺序）。
    pub fn records(&self) -> impl Iterator<Item = &ColorSample> {
        self.rows.iter().flatten()
    }

    pub fn x_labels(&self) -> Vec<String> {
        self.xs.iter().map(u32::to_string).collect()
    }

    pub fn y_labels(&self) -> Vec<String> {
        self.ys.iter().map(u32::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.xs.len() * self.ys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 网格说明，例如 `网格自动取样 • 每 23px 取样 • 列 = X，行 = Y`。
    pub fn caption(&self) -> String {
        format!("网格自动取样 • 每 {}px 取样 • 列 = X，行 = Y", self.step)
    }
}
