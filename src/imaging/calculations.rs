//! Pure calculation functions for mockup geometry.
//!
//! All functions here are pure and testable without any I/O or images.

/// Fit `source` inside `bounds` preserving aspect ratio, never enlarging.
///
/// Sources that already fit are returned unchanged. Otherwise the limiting
/// edge is scaled to the bound and the other edge is rounded, with a floor
/// of one pixel so extreme aspect ratios never collapse to zero.
///
/// # Examples
/// ```
/// # use mockup_batch::imaging::fit_inside;
/// // 2000x1500 into the mobile content box: width-bound
/// assert_eq!(fit_inside((2000, 1500), (335, 772)), (335, 251));
///
/// // 4000x3000 into the default content box: height-bound
/// assert_eq!(fit_inside((4000, 3000), (1100, 700)), (933, 700));
///
/// // Small sources stay small
/// assert_eq!(fit_inside((300, 200), (1100, 700)), (300, 200));
/// ```
pub fn fit_inside(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (max_w, max_h) = bounds;

    if src_w == 0 || src_h == 0 || (src_w <= max_w && src_h <= max_h) {
        return source;
    }

    let scale_w = max_w as f64 / src_w as f64;
    let scale_h = max_h as f64 / src_h as f64;

    if scale_w <= scale_h {
        // Width is the limiting edge
        let h = (src_h as f64 * scale_w).round() as u32;
        (max_w, h.clamp(1, max_h))
    } else {
        // Height is the limiting edge
        let w = (src_w as f64 * scale_h).round() as u32;
        (w.clamp(1, max_w), max_h)
    }
}

/// Top-left offset that centers `content` on `canvas`.
///
/// When `content` exactly fills the template's content box the offset equals
/// the template padding on every side.
pub fn center_offset(canvas: (u32, u32), content: (u32, u32)) -> (u32, u32) {
    (
        canvas.0.saturating_sub(content.0) / 2,
        canvas.1.saturating_sub(content.1) / 2,
    )
}
