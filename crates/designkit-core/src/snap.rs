//! Snap functionality for aligning objects to the grid, the canvas and each other.

use kurbo::{Point, Rect};

/// Grid size for snapping.
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Distance within which magnetic snapping engages, in canvas pixels (inclusive).
pub const MAGNETIC_SNAP_THRESHOLD: f64 = 8.0;

/// Positions closer than this are treated as coincident when emitting guides.
const COINCIDENT_EPSILON: f64 = 0.01;

/// Snap mode for dragging objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapMode {
    /// No snapping.
    None,
    /// Snap the top-left corner to grid intersections.
    Grid,
    /// Snap edges and centers to the canvas and other objects.
    #[default]
    Magnetic,
    /// Magnetic first, grid on any axis that did not snap magnetically.
    All,
}

impl SnapMode {
    /// Cycle to the next snap mode.
    pub fn next(self) -> Self {
        match self {
            SnapMode::None => SnapMode::Grid,
            SnapMode::Grid => SnapMode::Magnetic,
            SnapMode::Magnetic => SnapMode::All,
            SnapMode::All => SnapMode::None,
        }
    }

    pub fn snaps_to_grid(self) -> bool {
        matches!(self, SnapMode::Grid | SnapMode::All)
    }

    pub fn snaps_magnetically(self) -> bool {
        matches!(self, SnapMode::Magnetic | SnapMode::All)
    }

    pub fn is_enabled(self) -> bool {
        self != SnapMode::None
    }
}

/// Snap a point to the nearest grid intersection.
///
/// A non-positive grid size disables snapping.
pub fn snap_to_grid(x: f64, y: f64, grid_size: f64) -> Point {
    if grid_size <= 0.0 {
        return Point::new(x, y);
    }
    Point::new(
        (x / grid_size).round() * grid_size,
        (y / grid_size).round() * grid_size,
    )
}

/// Orientation of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuideOrientation {
    /// A vertical line at some x; emitted by horizontal-axis matches.
    Vertical,
    /// A horizontal line at some y; emitted by vertical-axis matches.
    Horizontal,
}

/// A transient alignment guide shown while dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guide {
    pub orientation: GuideOrientation,
    pub position: f64,
}

impl Guide {
    pub fn vertical(x: f64) -> Self {
        Self {
            orientation: GuideOrientation::Vertical,
            position: x,
        }
    }

    pub fn horizontal(y: f64) -> Self {
        Self {
            orientation: GuideOrientation::Horizontal,
            position: y,
        }
    }
}

/// Result of a magnetic snap.
#[derive(Debug, Clone, PartialEq)]
pub struct MagneticSnap {
    /// Resulting top-left x.
    pub x: f64,
    /// Resulting top-left y.
    pub y: f64,
    pub snapped_x: bool,
    pub snapped_y: bool,
    pub guides: Vec<Guide>,
}

impl MagneticSnap {
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Outcome of resolving a single axis.
struct AxisSnap {
    start: f64,
    snapped: bool,
    guides: Vec<f64>,
}

/// Reference points along one axis: leading edge, center, trailing edge.
fn axis_refs(start: f64, length: f64) -> [f64; 3] {
    [start, start + length / 2.0, start + length]
}

fn snap_axis(start: f64, length: f64, targets: &[f64], threshold: f64) -> AxisSnap {
    let refs = axis_refs(start, length);

    let mut best: Option<(f64, f64)> = None;
    for &target in targets {
        for &r in &refs {
            let delta = target - r;
            if best.is_none_or(|(d, _)| delta.abs() < d.abs()) {
                best = Some((delta, target));
            }
        }
    }

    let Some((delta, _)) = best.filter(|(d, _)| d.abs() <= threshold) else {
        return AxisSnap {
            start,
            snapped: false,
            guides: Vec::new(),
        };
    };

    let snapped_refs = axis_refs(start + delta, length);
    let mut guides: Vec<f64> = Vec::new();
    for &target in targets {
        let coincident = snapped_refs
            .iter()
            .any(|r| (r - target).abs() < COINCIDENT_EPSILON);
        let duplicate = guides
            .iter()
            .any(|g| (g - target).abs() < COINCIDENT_EPSILON);
        if coincident && !duplicate {
            guides.push(target);
        }
    }

    AxisSnap {
        start: start + delta,
        snapped: true,
        guides,
    }
}

/// Alignment targets along one axis: canvas start/center/end plus each
/// other object's leading edge, center and trailing edge.
fn axis_targets(canvas_length: f64, others: impl Iterator<Item = (f64, f64)>) -> Vec<f64> {
    let mut targets = vec![0.0, canvas_length / 2.0, canvas_length];
    for (start, end) in others {
        targets.extend([start, (start + end) / 2.0, end]);
    }
    targets
}

/// Magnetic snap with the default threshold. See [`magnetic_snap_with_threshold`].
pub fn magnetic_snap(
    dragged: Rect,
    others: &[Rect],
    canvas_width: f64,
    canvas_height: f64,
) -> MagneticSnap {
    magnetic_snap_with_threshold(
        dragged,
        others,
        canvas_width,
        canvas_height,
        MAGNETIC_SNAP_THRESHOLD,
    )
}

/// Snap a dragged rectangle to the canvas and to other objects.
///
/// Each axis is resolved independently: the closest target to any of the
/// dragged object's three reference points wins, and snaps if it is within
/// `threshold`. Every target coincident with a snapped reference point gets
/// one guide. Callers pass only the rectangles of visible, non-dragged objects.
pub fn magnetic_snap_with_threshold(
    dragged: Rect,
    others: &[Rect],
    canvas_width: f64,
    canvas_height: f64,
    threshold: f64,
) -> MagneticSnap {
    let x_targets = axis_targets(canvas_width, others.iter().map(|r| (r.x0, r.x1)));
    let y_targets = axis_targets(canvas_height, others.iter().map(|r| (r.y0, r.y1)));

    let x = snap_axis(dragged.x0, dragged.width(), &x_targets, threshold);
    let y = snap_axis(dragged.y0, dragged.height(), &y_targets, threshold);

    let guides = x
        .guides
        .iter()
        .map(|&pos| Guide::vertical(pos))
        .chain(y.guides.iter().map(|&pos| Guide::horizontal(pos)))
        .collect();

    MagneticSnap {
        x: x.start,
        y: y.start,
        snapped_x: x.snapped,
        snapped_y: y.snapped,
        guides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: (f64, f64) = (390.0, 844.0);

    fn other() -> Rect {
        Rect::new(200.0, 100.0, 300.0, 200.0)
    }

    fn dragged_at(x: f64) -> Rect {
        Rect::new(x, 500.0, x + 20.0, 520.0)
    }

    #[test]
    fn test_snap_to_grid() {
        let p = snap_to_grid(15.0, 25.0, 20.0);
        assert_eq!(p, Point::new(20.0, 20.0));
    }

    #[test]
    fn test_snap_to_grid_exact() {
        assert_eq!(snap_to_grid(40.0, 60.0, 20.0), Point::new(40.0, 60.0));
    }

    #[test]
    fn test_snap_to_grid_negative() {
        assert_eq!(snap_to_grid(-11.0, -9.0, 20.0), Point::new(-20.0, -0.0));
    }

    #[test]
    fn test_snap_to_grid_is_idempotent() {
        for &(x, y) in &[(13.3, 97.1), (-4.9, 10.0), (1234.5, -0.1), (9.99, 10.01)] {
            for &g in &[1.0, 8.0, 20.0, 33.3] {
                let once = snap_to_grid(x, y, g);
                let twice = snap_to_grid(once.x, once.y, g);
                assert_eq!(once, twice, "({x}, {y}) grid {g}");
            }
        }
    }

    #[test]
    fn test_snap_to_grid_disabled() {
        assert_eq!(snap_to_grid(3.3, 4.4, 0.0), Point::new(3.3, 4.4));
    }

    #[test]
    fn test_snap_mode_cycle() {
        assert_eq!(SnapMode::None.next(), SnapMode::Grid);
        assert_eq!(SnapMode::Grid.next(), SnapMode::Magnetic);
        assert_eq!(SnapMode::Magnetic.next(), SnapMode::All);
        assert_eq!(SnapMode::All.next(), SnapMode::None);
    }

    #[test]
    fn test_snap_mode_flags() {
        assert!(!SnapMode::None.is_enabled());
        assert!(SnapMode::Grid.snaps_to_grid());
        assert!(!SnapMode::Grid.snaps_magnetically());
        assert!(SnapMode::All.snaps_to_grid() && SnapMode::All.snaps_magnetically());
    }

    #[test]
    fn test_magnetic_snap_within_threshold() {
        let result = magnetic_snap(dragged_at(207.0), &[other()], CANVAS.0, CANVAS.1);
        assert_eq!(result.x, 200.0);
        assert!(result.snapped_x);
        assert_eq!(result.guides, vec![Guide::vertical(200.0)]);
    }

    #[test]
    fn test_magnetic_snap_outside_threshold() {
        let result = magnetic_snap(dragged_at(209.0), &[other()], CANVAS.0, CANVAS.1);
        assert_eq!(result.x, 209.0);
        assert!(!result.snapped_x);
        assert!(result.guides.is_empty());
    }

    #[test]
    fn test_magnetic_snap_threshold_is_inclusive() {
        let result = magnetic_snap(dragged_at(208.0), &[other()], CANVAS.0, CANVAS.1);
        assert_eq!(result.x, 200.0);
    }

    #[test]
    fn test_axes_resolve_independently() {
        // Near the other object's top edge but far from any x target.
        let dragged = Rect::new(60.0, 103.0, 80.0, 123.0);
        let result = magnetic_snap(dragged, &[other()], CANVAS.0, CANVAS.1);
        assert!(!result.snapped_x);
        assert_eq!(result.x, 60.0);
        assert!(result.snapped_y);
        assert_eq!(result.y, 100.0);
        assert_eq!(result.guides, vec![Guide::horizontal(100.0)]);
    }

    #[test]
    fn test_snaps_to_canvas_center() {
        // Center at 197, canvas center 195.
        let dragged = Rect::new(147.0, 600.0, 247.0, 640.0);
        let result = magnetic_snap(dragged, &[], CANVAS.0, CANVAS.1);
        assert_eq!(result.x, 145.0);
        assert_eq!(result.guides, vec![Guide::vertical(195.0)]);
    }

    #[test]
    fn test_one_guide_per_coincident_target() {
        // Same width as the other object: left, center and right all coincide.
        let dragged = Rect::new(203.0, 600.0, 303.0, 640.0);
        let result = magnetic_snap(dragged, &[other()], CANVAS.0, CANVAS.1);
        assert_eq!(result.x, 200.0);
        assert_eq!(
            result.guides,
            vec![
                Guide::vertical(200.0),
                Guide::vertical(250.0),
                Guide::vertical(300.0),
            ]
        );
    }

    #[test]
    fn test_duplicate_targets_emit_one_guide() {
        let twin = other();
        let dragged = Rect::new(205.0, 600.0, 225.0, 640.0);
        let result = magnetic_snap(dragged, &[other(), twin], CANVAS.0, CANVAS.1);
        assert_eq!(result.guides, vec![Guide::vertical(200.0)]);
    }
}
