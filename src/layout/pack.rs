//! Component packing into the final global layout.
//!
//! Each relaxed component is wrapped in an axis-aligned bounding box padded
//! by the rendered node footprint, the boxes are laid out left to right
//! with a fixed gap (wrapping to a new row once a finite maximum row width
//! is exceeded), and the assembled layout is recentered on the origin.

use super::force::LocalLayout;

/// Packing parameters.
///
/// The node footprint matches what the frontend draws (a 140x40 chip), so
/// boxes account for rendered extent, not just point positions.
pub struct PackConfig {
    /// Rendered node width added around each position.
    pub node_width: f64,
    /// Rendered node height added around each position.
    pub node_height: f64,
    /// Gap between component bounding boxes, and between rows.
    pub gap: f64,
    /// Row wraps once the next box would exceed this width. The default is
    /// infinite, which keeps everything on one row.
    pub max_row_width: f64,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            node_width: 140.0,
            node_height: 40.0,
            gap: 80.0,
            max_row_width: f64::INFINITY,
        }
    }
}

/// Place every component's local layout into the global position buffers.
///
/// `groups[k]` lists the global slots of component `k`; `locals[k]` holds
/// its centered local positions in the same member order. Components are
/// placed in the given order, then the whole assembly is translated so the
/// centroid of all node positions lands on the origin.
pub fn pack_components(
    groups: &[Vec<usize>],
    locals: &[LocalLayout],
    config: &PackConfig,
    pos_x: &mut [f64],
    pos_y: &mut [f64],
) {
    debug_assert_eq!(groups.len(), locals.len());

    let half_w = config.node_width / 2.0;
    let half_h = config.node_height / 2.0;

    let mut cursor_x = 0.0;
    let mut row_y = 0.0;
    let mut row_height = 0.0_f64;

    for (group, local) in groups.iter().zip(locals) {
        if group.is_empty() {
            continue;
        }

        // Bounding box of the centered local layout, padded by the node
        // footprint on every side.
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for i in 0..group.len() {
            let x = local.pos_x[i];
            let y = local.pos_y[i];
            if x < min_x {
                min_x = x;
            }
            if x > max_x {
                max_x = x;
            }
            if y < min_y {
                min_y = y;
            }
            if y > max_y {
                max_y = y;
            }
        }
        min_x -= half_w;
        max_x += half_w;
        min_y -= half_h;
        max_y += half_h;

        let width = max_x - min_x;
        let height = max_y - min_y;

        if cursor_x > 0.0 && cursor_x + width > config.max_row_width {
            cursor_x = 0.0;
            row_y += row_height + config.gap;
            row_height = 0.0;
        }

        let offset_x = cursor_x - min_x;
        let offset_y = row_y - min_y;
        for (i, &slot) in group.iter().enumerate() {
            pos_x[slot] = local.pos_x[i] + offset_x;
            pos_y[slot] = local.pos_y[i] + offset_y;
        }

        row_height = row_height.max(height);
        cursor_x += width + config.gap;
    }

    recenter_global(pos_x, pos_y);
}

/// Translate all positions so their centroid is the origin.
fn recenter_global(pos_x: &mut [f64], pos_y: &mut [f64]) {
    let n = pos_x.len();
    if n == 0 {
        return;
    }

    let mean_x = pos_x.iter().sum::<f64>() / n as f64;
    let mean_y = pos_y.iter().sum::<f64>() / n as f64;
    for i in 0..n {
        pos_x[i] -= mean_x;
        pos_y[i] -= mean_y;
    }
}
