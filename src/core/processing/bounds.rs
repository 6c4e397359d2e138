use ndarray::{Axis, s};

use crate::error::{Error, Result};
use crate::types::{BoundingBox, Mask};

/// Smallest box enclosing every `true` cell of `mask`.
///
/// `bottom` and `right` are the inclusive maximum row and column. Returns
/// [`Error::EmptyMask`] when no cell is set.
pub fn extract_bounds(mask: &Mask) -> Result<BoundingBox> {
    let (rows, cols) = mask.dim();
    let empty = || Error::EmptyMask {
        width: cols as u32,
        height: rows as u32,
    };

    let occupied_rows: Vec<usize> = mask
        .axis_iter(Axis(0))
        .enumerate()
        .filter(|(_, row)| row.iter().any(|&m| m))
        .map(|(i, _)| i)
        .collect();
    let (top, bottom) = match (occupied_rows.first(), occupied_rows.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(empty()),
    };

    // Only rows inside [top, bottom] can contain set cells.
    let band = mask.slice(s![top..=bottom, ..]);
    let mut occupied_cols = band
        .axis_iter(Axis(1))
        .enumerate()
        .filter(|(_, col)| col.iter().any(|&m| m))
        .map(|(j, _)| j);
    let left = occupied_cols.next().ok_or_else(empty)?;
    let right = occupied_cols.last().unwrap_or(left);

    Ok(BoundingBox::new(
        top as u32,
        left as u32,
        bottom as u32,
        right as u32,
    ))
}
