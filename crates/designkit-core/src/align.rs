//! Alignment and distribution.
//!
//! Pure functions over object bounds. They return the new top-left corner of
//! every input rectangle, in input order, or `None` when the action is
//! unavailable for that many objects.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Edge or center line to align to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignEdge {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

impl AlignEdge {
    pub const ALL: [AlignEdge; 6] = [
        AlignEdge::Left,
        AlignEdge::Center,
        AlignEdge::Right,
        AlignEdge::Top,
        AlignEdge::Middle,
        AlignEdge::Bottom,
    ];

    /// Left, center and right move objects along x only.
    pub fn is_horizontal(self) -> bool {
        matches!(self, AlignEdge::Left | AlignEdge::Center | AlignEdge::Right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributeAxis {
    Horizontal,
    Vertical,
}

/// Minimum number of objects distribution needs.
pub const MIN_DISTRIBUTE_COUNT: usize = 3;

/// Align rectangles to an edge.
///
/// A single rectangle aligns to `canvas`; two or more align to their union.
/// Returns `None` for an empty slice.
pub fn align(bounds: &[Rect], edge: AlignEdge, canvas: Rect) -> Option<Vec<Point>> {
    let reference = match bounds {
        [] => return None,
        [_] => canvas,
        [first, rest @ ..] => rest.iter().fold(*first, |acc, r| acc.union(*r)),
    };

    let positions = bounds
        .iter()
        .map(|r| {
            let (x, y) = (r.x0, r.y0);
            match edge {
                AlignEdge::Left => Point::new(reference.x0, y),
                AlignEdge::Center => Point::new(reference.center().x - r.width() / 2.0, y),
                AlignEdge::Right => Point::new(reference.x1 - r.width(), y),
                AlignEdge::Top => Point::new(x, reference.y0),
                AlignEdge::Middle => Point::new(x, reference.center().y - r.height() / 2.0),
                AlignEdge::Bottom => Point::new(x, reference.y1 - r.height()),
            }
        })
        .collect();
    Some(positions)
}

/// Space rectangles so the gaps between consecutive bounding boxes are equal.
///
/// Rectangles are ordered by their leading edge on `axis`; the first and
/// last stay put and only interior ones move. Returns `None` for fewer than
/// [`MIN_DISTRIBUTE_COUNT`] rectangles.
pub fn distribute(bounds: &[Rect], axis: DistributeAxis) -> Option<Vec<Point>> {
    if bounds.len() < MIN_DISTRIBUTE_COUNT {
        return None;
    }

    let span = |r: &Rect| match axis {
        DistributeAxis::Horizontal => (r.x0, r.x1),
        DistributeAxis::Vertical => (r.y0, r.y1),
    };

    let mut order: Vec<usize> = (0..bounds.len()).collect();
    order.sort_by(|&a, &b| span(&bounds[a]).0.total_cmp(&span(&bounds[b]).0));

    let first = span(&bounds[order[0]]);
    let last = span(&bounds[order[order.len() - 1]]);
    let interior = &order[1..order.len() - 1];
    let occupied: f64 = interior
        .iter()
        .map(|&i| {
            let (start, end) = span(&bounds[i]);
            end - start
        })
        .sum();
    let gap = (last.0 - first.1 - occupied) / (order.len() - 1) as f64;

    let mut positions: Vec<Point> = bounds.iter().map(|r| r.origin()).collect();
    let mut cursor = first.1 + gap;
    for &i in interior {
        let (start, end) = span(&bounds[i]);
        positions[i] = match axis {
            DistributeAxis::Horizontal => Point::new(cursor, bounds[i].y0),
            DistributeAxis::Vertical => Point::new(bounds[i].x0, cursor),
        };
        cursor += end - start + gap;
    }
    Some(positions)
}
