use tracing::debug;

use crate::types::BoundingBox;

/// Grow `bounds` by `amount` on every side, clamped to `[0, height] x [0, width]`.
///
/// The result always satisfies `top <= bottom <= height` and
/// `left <= right <= width`, whatever the input box.
pub fn pad_bounds(bounds: BoundingBox, amount: u32, height: u32, width: u32) -> BoundingBox {
    let top = bounds.top.saturating_sub(amount).min(height);
    let left = bounds.left.saturating_sub(amount).min(width);
    let bottom = bounds.bottom.saturating_add(amount).clamp(top, height);
    let right = bounds.right.saturating_add(amount).clamp(left, width);

    let padded = BoundingBox::new(top, left, bottom, right);
    debug!(
        "Padding bounds: {} + {}px within {}x{} -> {}",
        bounds, amount, width, height, padded
    );
    padded
}
