use lyon::math::point;
use lyon::path::iterator::*;
use lyon::path::{Event, Path};

use super::{Bounds, Color, Point};

/// Flattening tolerance for smoothed outlines, in scene units.
const SMOOTH_TOLERANCE: f32 = 0.05;

/// A polyline or smoothed curve whose points live directly in scene
/// coordinates.
///
/// There is no separate position offset: moving a path rewrites its
/// points, so a translation can never be counted twice.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEntity {
    points: Vec<Point>,
    pub stroke_color: Color,
    pub stroke_width: f64,
    smooth: bool,
    closed: bool,
    outline: Vec<Point>,
}

impl PathEntity {
    pub fn new(points: Vec<Point>) -> Self {
        let mut path = Self {
            points,
            stroke_color: Color::default(),
            stroke_width: 0.1,
            smooth: false,
            closed: false,
            outline: Vec::new(),
        };
        path.retessellate();
        path
    }

    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self.retessellate();
        self
    }

    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self.retessellate();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Replaces the point list and rebuilds the outline.
    pub fn set_points(&mut self, points: Vec<Point>) {
        self.points = points;
        self.retessellate();
    }

    pub fn is_smooth(&self) -> bool {
        self.smooth
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Tessellated outline in scene coordinates. Equal to the points for a
    /// plain polyline (plus the closing point when closed).
    pub fn outline(&self) -> &[Point] {
        &self.outline
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(self.outline.iter().copied()).unwrap_or_default()
    }

    /// Mean of the points. Used as the rotation pivot.
    pub fn centroid(&self) -> Point {
        if self.points.is_empty() {
            return Point::default();
        }
        let n = self.points.len() as f64;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }

    /// Index of the point closest to `p`, if one lies within `tolerance`.
    pub fn nearest_point(&self, p: Point, tolerance: f64) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, q)| (i, q.distance_to(&p)))
            .filter(|(_, d)| *d <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    fn retessellate(&mut self) {
        self.outline = tessellate(&self.points, self.smooth, self.closed);
    }
}

fn tessellate(points: &[Point], smooth: bool, closed: bool) -> Vec<Point> {
    if !smooth || points.len() < 3 {
        let mut out = points.to_vec();
        if closed && points.len() > 2 {
            out.push(points[0]);
        }
        return out;
    }

    let n = points.len() as isize;
    let at = |i: isize| -> Point {
        let idx = if closed {
            i.rem_euclid(n)
        } else {
            i.clamp(0, n - 1)
        };
        points[idx as usize]
    };

    // Catmull-Rom through every point, expressed as cubic Béziers.
    let mut builder = Path::builder();
    builder.begin(point(points[0].x as f32, points[0].y as f32));
    let segments = if closed { n } else { n - 1 };
    for i in 0..segments {
        let (p0, p1, p2, p3) = (at(i - 1), at(i), at(i + 1), at(i + 2));
        let c1 = Point::new(p1.x + (p2.x - p0.x) / 6.0, p1.y + (p2.y - p0.y) / 6.0);
        let c2 = Point::new(p2.x - (p3.x - p1.x) / 6.0, p2.y - (p3.y - p1.y) / 6.0);
        builder.cubic_bezier_to(
            point(c1.x as f32, c1.y as f32),
            point(c2.x as f32, c2.y as f32),
            point(p2.x as f32, p2.y as f32),
        );
    }
    builder.end(closed);
    let path = builder.build();

    let mut out = Vec::new();
    for event in path.iter().flattened(SMOOTH_TOLERANCE) {
        match event {
            Event::Begin { at } => out.push(Point::new(at.x as f64, at.y as f64)),
            Event::Line { to, .. } => out.push(Point::new(to.x as f64, to.y as f64)),
            Event::End { first, close, .. } => {
                let first = Point::new(first.x as f64, first.y as f64);
                if close && out.last() != Some(&first) {
                    out.push(first);
                }
            }
            _ => {}
        }
    }
    out
}
