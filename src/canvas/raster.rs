//! Integer rasterization of lines and circles
//!
//! Both algorithms only ever call [`Plot::plot`]; they never check bounds themselves.
//! A surface that reports its [`Plot::extent`] lets them skip the stretches of a
//! shape that cannot land on it, without changing which visible cells are chosen.
//! Error terms and deltas are kept in `i64` so that endpoints anywhere in the `i32`
//! range cannot overflow.

/// A surface that accepts individual raster points
pub trait Plot {
    fn plot(&mut self, x: i32, y: i32);

    /// Visible `(width, height)`. When `Some`, points outside `0..width` by
    /// `0..height` must be dropped by [`Plot::plot`], so they may go unplotted.
    fn extent(&self) -> Option<(i32, i32)> {
        None
    }
}

/// Draw a straight line from `(x1, y1)` to `(x2, y2)` with Bresenham's algorithm.
///
/// The start point is plotted first, then one point per unit step along the driving
/// axis (the one with the larger delta), so exactly `1 + max(|dx|, |dy|)` points are
/// emitted and the last one is `(x2, y2)`. On a surface with an extent only the steps
/// whose driving coordinate is visible are walked.
pub fn line<P: Plot + ?Sized>(target: &mut P, x1: i32, y1: i32, x2: i32, y2: i32) {
    tracing::trace!(x1, y1, x2, y2, "rasterize line");

    target.plot(x1, y1);

    let dx = (i64::from(x2) - i64::from(x1)).abs();
    let dy = (i64::from(y2) - i64::from(y1)).abs();

    if dx > dy {
        step_line(target, (x1, y1), (x2, y2), dx, dy, false);
    } else {
        // y drives: walk the transposed line and swap back when plotting
        step_line(target, (y1, x1), (y2, x2), dy, dx, true);
    }
}

fn step_line<P: Plot + ?Sized>(
    target: &mut P,
    start: (i32, i32),
    end: (i32, i32),
    major_delta: i64,
    minor_delta: i64,
    transposed: bool,
) {
    if major_delta == 0 {
        return;
    }

    let (mut major, mut minor) = (i64::from(start.0), i64::from(start.1));
    let major_step = (i64::from(end.0) - major).signum();
    let minor_step = (i64::from(end.1) - minor).signum();

    let (first, last) = match target.extent() {
        Some((width, height)) => {
            let span = i64::from(if transposed { height } else { width });
            visible_steps(major, major_step, span, major_delta)
        }
        None => (1, major_delta),
    };
    if first > last {
        return;
    }

    // Resume the walk just before the first visible step.
    let skipped = first - 1;
    let advanced = minor_advances(skipped, major_delta, minor_delta);
    major += skipped * major_step;
    minor += advanced * minor_step;
    let mut p = error_term(skipped, advanced, major_delta, minor_delta);

    for _ in first..=last {
        major += major_step;

        if p < 0 {
            p += 2 * minor_delta;
        } else {
            minor += minor_step;
            p += 2 * minor_delta - 2 * major_delta;
        }

        // Both coordinates stay between the i32 endpoints.
        let (x, y) = if transposed {
            (minor, major)
        } else {
            (major, minor)
        };
        target.plot(x as i32, y as i32);
    }
}

/// Range of step numbers `k` in `1..=steps` whose driving coordinate
/// `start + k * step` falls inside `0..span`. Empty when `first > last`.
fn visible_steps(start: i64, step: i64, span: i64, steps: i64) -> (i64, i64) {
    let (lo, hi) = if step > 0 {
        (-start, span - 1 - start)
    } else {
        (start - (span - 1), start)
    };
    (lo.max(1), hi.min(steps))
}

/// How many times the minor coordinate has moved after `k` steps:
/// `floor((2 * k * minor + major) / (2 * major))`.
fn minor_advances(k: i64, major_delta: i64, minor_delta: i64) -> i64 {
    let k = i128::from(k);
    let (major, minor) = (i128::from(major_delta), i128::from(minor_delta));
    ((2 * k * minor + major) / (2 * major)) as i64
}

/// Decision variable after `k` steps with `advanced` minor moves.
fn error_term(k: i64, advanced: i64, major_delta: i64, minor_delta: i64) -> i64 {
    let (k, advanced) = (i128::from(k), i128::from(advanced));
    let (major, minor) = (i128::from(major_delta), i128::from(minor_delta));
    // Always within [-2 * major, 2 * minor].
    (2 * minor - major + 2 * k * minor - 2 * advanced * major) as i64
}

/// Draw a circle of `radius` around `(cx, cy)` with the midpoint algorithm.
///
/// The 8-way symmetric set is emitted once for the starting octant point and again after
/// every step, so the result is symmetric under all reflections about the centre.
/// Callers reject negative radii before getting here.
pub fn circle<P: Plot + ?Sized>(target: &mut P, cx: i32, cy: i32, radius: i32) {
    tracing::trace!(cx, cy, radius, "rasterize circle");

    let (cx, cy) = (i64::from(cx), i64::from(cy));
    let mut x: i64 = 0;
    let mut y = i64::from(radius);
    let mut d = 3 - 2 * y;

    let x_limit = match target.extent() {
        Some(extent) => match visible_reach(cx, cy, y, extent) {
            Some(reach) => reach,
            None => return,
        },
        None => i64::MAX,
    };

    plot_octants(target, cx, cy, x, y);

    while y >= x {
        x += 1;
        if x > x_limit {
            break;
        }

        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }

        plot_octants(target, cx, cy, x, y);
    }
}

/// Largest step `x` at which a circle around `(cx, cy)` can still put a point inside
/// `extent`, or `None` when it never can.
///
/// Every emitted point has `x` in one coordinate and `y` in the other, with
/// `x <= y + 2`. So once `x` exceeds the nearer of the two reaches by 2, every point
/// misses either horizontally or vertically.
fn visible_reach(cx: i64, cy: i64, radius: i64, (width, height): (i32, i32)) -> Option<i64> {
    let (width, height) = (i64::from(width), i64::from(height));
    if width <= 0 || height <= 0 {
        return None;
    }

    // Radius 0 still steps once onto the diagonals.
    let outer = radius + 1;
    if cx + outer < 0 || cx - outer >= width || cy + outer < 0 || cy - outer >= height {
        return None;
    }

    let reach_x = cx.abs().max((width - 1 - cx).abs());
    let reach_y = cy.abs().max((height - 1 - cy).abs());

    // Points stay within 1.5 of the radius; a surface well inside the ring is untouched.
    let farthest = i128::from(reach_x).pow(2) + i128::from(reach_y).pow(2);
    if radius > 2 && farthest < i128::from(radius - 2).pow(2) {
        return None;
    }

    Some(reach_x.min(reach_y) + 2)
}

fn plot_octants<P: Plot + ?Sized>(target: &mut P, cx: i64, cy: i64, x: i64, y: i64) {
    for (px, py) in [
        (cx + x, cy + y),
        (cx - x, cy + y),
        (cx + x, cy - y),
        (cx - x, cy - y),
        (cx + y, cy + x),
        (cx - y, cy + x),
        (cx + y, cy - x),
        (cx - y, cy - x),
    ] {
        // Anything outside i32 is necessarily off the canvas.
        if let (Ok(px), Ok(py)) = (i32::try_from(px), i32::try_from(py)) {
            target.plot(px, py);
        }
    }
}
