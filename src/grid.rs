//! Static point grid uploaded once per sketch.

/// Normalized coordinate of the `index`-th point out of `count`.
///
/// A single point sits at 0 instead of dividing by zero.
fn unit(index: u32, count: u32) -> f32 {
    if count > 1 {
        index as f32 / (count - 1) as f32
    } else {
        0.0
    }
}

/// Builds `columns * rows` points in [0,1]², column-major.
pub fn point_grid(columns: u32, rows: u32) -> Vec<[f32; 2]> {
    let mut points = Vec::with_capacity(columns as usize * rows as usize);
    for i in 0..columns {
        let x = unit(i, columns);
        for j in 0..rows {
            points.push([x, unit(j, rows)]);
        }
    }
    points
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointGrid {
    columns: u32,
    rows: u32,
    points: Vec<[f32; 2]>,
}

impl PointGrid {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            points: point_grid(columns, rows),
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[[f32; 2]] {
        &self.points
    }

    /// Interleaved `x, y, x, y, ...` as laid out in the vertex buffer.
    pub fn flat(&self) -> &[f32] {
        self.points.as_flattened()
    }

    /// Count passed to `drawArrays`.
    pub fn vertex_count(&self) -> i32 {
        i32::try_from(self.points.len()).unwrap_or(i32::MAX)
    }
}
