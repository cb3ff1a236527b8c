/// Density cap applied to the backing store: past 2x the extra raster cost
/// buys nothing visible in a background effect.
pub const DENSITY_CAP: f64 = 2.0;

/// Effective density for a reported device pixel ratio. Non-positive or
/// missing ratios fall back to 1.
pub fn effective_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(DENSITY_CAP)
    } else {
        1.0
    }
}

/// Physical backing extent for one logical axis. The floor of one pixel
/// keeps a zero-sized viewport as a harmless no-op surface rather than an
/// invalid canvas.
pub fn backing_extent(logical: f64, ratio: f64) -> u32 {
    ((logical * ratio) as u32).max(1)
}
