use super::{NodeBox, Side};

// ── Routing geometry ────────────────────────────────────────────────
/// Stub length a connector travels away from its box before turning.
const ROUTE_GAP: f32 = 20.0;
/// Fallback divisor when a non-positive zoom scale reaches the router.
const SCALE_FLOOR: f32 = 1e-3;

/// Routes an orthogonal connector between two measured boxes. Boxes are in
/// screen space; both are divided by the zoom `scale` first so the path
/// stays anchored while zoomed. `radius` rounds the corners.
pub fn route(
    source: &NodeBox,
    source_side: Side,
    target: &NodeBox,
    target_side: Side,
    scale: f32,
    radius: f32,
) -> String {
    let scale = scale.max(SCALE_FLOOR);
    let source_point = source.unscale(scale).anchor_point(source_side);
    let target_point = target.unscale(scale).anchor_point(target_side);
    smooth_step_path(source_point, source_side, target_point, target_side, radius)
}

/// Builds the smooth-step path between two already-unscaled points.
pub fn smooth_step_path(
    source: (f32, f32),
    source_side: Side,
    target: (f32, f32),
    target_side: Side,
    radius: f32,
) -> String {
    let points = route_points(source, source_side, target, target_side, ROUTE_GAP);

    let mut path = format!("M {} {}", points[0].0, points[0].1);
    for idx in 1..points.len().saturating_sub(1) {
        path.push(' ');
        path.push_str(&bend_segment(
            points[idx - 1],
            points[idx],
            points[idx + 1],
            radius,
        ));
    }
    if points.len() > 1 {
        let last = points[points.len() - 1];
        path.push_str(&format!(" L {} {}", last.0, last.1));
    }
    path
}

/// Waypoints of the orthogonal route: source, a stub point off each box,
/// one or two interior turns, target. Consecutive duplicates are dropped so
/// degenerate geometry still yields a clean polyline.
fn route_points(
    source: (f32, f32),
    source_side: Side,
    target: (f32, f32),
    target_side: Side,
    gap: f32,
) -> Vec<(f32, f32)> {
    let (sdx, sdy) = source_side.direction();
    let (tdx, tdy) = target_side.direction();
    let source_gap = (source.0 + sdx * gap, source.1 + sdy * gap);
    let target_gap = (target.0 + tdx * gap, target.1 + tdy * gap);

    // The travel axis follows the side the connector leaves from.
    let along_x = source_side.is_horizontal();
    let curr_dir = if along_x {
        if source_gap.0 < target_gap.0 { 1.0 } else { -1.0 }
    } else if source_gap.1 < target_gap.1 {
        1.0
    } else {
        -1.0
    };
    let (source_along, target_along) = if along_x { (sdx, tdx) } else { (sdy, tdy) };

    let mid: Vec<(f32, f32)> = if source_along * target_along == -1.0 {
        // Opposed sides on the travel axis: split the route through the
        // midpoint between the anchors.
        let center_x = (source.0 + target.0) / 2.0;
        let center_y = (source.1 + target.1) / 2.0;
        let vertical_split = vec![(center_x, source_gap.1), (center_x, target_gap.1)];
        let horizontal_split = vec![(source_gap.0, center_y), (target_gap.0, center_y)];
        if (source_along == curr_dir) == along_x {
            vertical_split
        } else {
            horizontal_split
        }
    } else {
        // Mixed (or matching) sides: a single turn, taking one coordinate
        // from each stub point.
        let source_target = (source_gap.0, target_gap.1);
        let target_source = (target_gap.0, source_gap.1);
        let mut turn = if along_x {
            if sdx == curr_dir { target_source } else { source_target }
        } else if sdy == curr_dir {
            source_target
        } else {
            target_source
        };

        if source_side != target_side {
            // The single turn can land behind the target when the boxes
            // overlap on the cross axis; flip which stub donates which
            // coordinate so the route approaches from the open side.
            let (source_cross, target_cross) = if along_x {
                (source_gap.1, target_gap.1)
            } else {
                (source_gap.0, target_gap.0)
            };
            let same_dir = source_along == if along_x { tdy } else { tdx };
            let flip = if source_along == 1.0 {
                (!same_dir && source_cross > target_cross)
                    || (same_dir && source_cross < target_cross)
            } else {
                (!same_dir && source_cross < target_cross)
                    || (same_dir && source_cross > target_cross)
            };
            if flip {
                turn = if along_x { source_target } else { target_source };
            }
        }
        vec![turn]
    };

    let mut points: Vec<(f32, f32)> = Vec::with_capacity(mid.len() + 4);
    points.push(source);
    for point in [source_gap].into_iter().chain(mid).chain([target_gap, target]) {
        if points.last() == Some(&point) {
            continue;
        }
        // fold collinear runs so aligned routes degenerate to one segment
        if points.len() >= 2 {
            let a = points[points.len() - 2];
            let b = points[points.len() - 1];
            if (a.0 == b.0 && b.0 == point.0) || (a.1 == b.1 && b.1 == point.1) {
                let last = points.len() - 1;
                points[last] = point;
                continue;
            }
        }
        points.push(point);
    }
    points
}

/// Emits the segment arriving at `b`, rounding the corner toward `c` with a
/// quadratic bend. Collinear triples fall back to a straight line, so
/// axis-aligned runs degenerate without emitting a curve.
fn bend_segment(a: (f32, f32), b: (f32, f32), c: (f32, f32), radius: f32) -> String {
    let bend = (distance(a, b) / 2.0)
        .min(distance(b, c) / 2.0)
        .min(radius);
    let (x, y) = b;

    // Waypoints are axis-aligned by construction, exact compares hold.
    if (a.0 == x && x == c.0) || (a.1 == y && y == c.1) {
        return format!("L {x} {y}");
    }

    if a.1 == y {
        // horizontal approach, vertical exit
        let x_dir = if a.0 < c.0 { -1.0 } else { 1.0 };
        let y_dir = if a.1 < c.1 { 1.0 } else { -1.0 };
        return format!(
            "L {} {y} Q {x} {y} {x} {}",
            x + bend * x_dir,
            y + bend * y_dir
        );
    }

    // vertical approach, horizontal exit
    let x_dir = if a.0 < c.0 { 1.0 } else { -1.0 };
    let y_dir = if a.1 < c.1 { -1.0 } else { 1.0 };
    format!(
        "L {x} {} Q {x} {y} {} {y}",
        y + bend * y_dir,
        x + bend * x_dir
    )
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}
