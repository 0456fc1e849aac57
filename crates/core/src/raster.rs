//! Disc-with-wedge rasterizer.
//!
//! The player sprite is a filled disc with an angular sector left undrawn,
//! the open mouth. This module decides which pixels belong to the disc;
//! it never touches the backend. Each qualifying pixel is handed to the
//! caller's sink individually, so the frame driver can plot immediately
//! and tests can collect coordinates.

use chomper_types::Vec2;

use crate::geometry::angle_diff;

/// Rasterize a filled disc with a mouth wedge cut out.
///
/// `center` is truncated to integer pixel coordinates. The scan covers the
/// half-open square `[-r, r)` on both axes, so the column and row at `+r`
/// are never visited while the ones at `-r` are. A pixel is emitted when
/// both hold:
///
/// - it is inside the disc: `dx*dx + dy*dy <= r*r`, boundary inclusive
///   (integer test, no antialiasing);
/// - it is outside the mouth: the angular distance between the pixel's
///   polar angle and `facing_deg` is strictly greater than half of
///   `mouth_deg`. A pixel exactly on the wedge boundary belongs to the
///   mouth and is skipped.
///
/// The scan is O(r*r) and runs every frame; at the 12px radius used here
/// that is cheap enough that no incremental scheme is warranted.
pub fn disc_with_mouth<F>(center: Vec2, radius: f32, mouth_deg: f32, facing_deg: f32, mut plot: F)
where
    F: FnMut(i32, i32),
{
    let r = radius as i32;
    let cx = center.x as i32;
    let cy = center.y as i32;

    for w in 0..r * 2 {
        for h in 0..r * 2 {
            let dx = w - r;
            let dy = h - r;

            if dx * dx + dy * dy > r * r {
                continue;
            }

            let angle = (dy as f32).atan2(dx as f32).to_degrees();
            if angle_diff(angle, facing_deg) > mouth_deg / 2.0 {
                plot(cx + dx, cy + dy);
            }
        }
    }
}
