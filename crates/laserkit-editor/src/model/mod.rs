//! Entity model for the editing core.
//!
//! An [`Entity`] is one of three kinds of graphical object. Paths keep their
//! geometry as a point list in scene coordinates; images and text keep an
//! untransformed payload plus an affine placement. Both kinds expose the same
//! snapshot protocol: [`Entity::state`] returns an [`EntityState`] and
//! [`Entity::set_state`] puts one back. Commands only ever talk to entities
//! through that pair.

mod color;
mod path;
mod raster;
mod text;

pub use color::Color;
pub use path::PathEntity;
pub use raster::ImageEntity;
pub use text::TextEntity;

use std::fmt;

use laserkit_core::constants::GEOMETRY_EPSILON;
use laserkit_core::EditorError;
use lyon::geom::euclid;
use serde::{Deserialize, Serialize};

/// 2x3 affine placement in scene units (`x' = x·m11 + y·m21 + m31`).
pub type Affine = euclid::default::Transform2D<f64>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn transformed(&self, t: &Affine) -> Point {
        let p = t.transform_point(euclid::default::Point2D::new(self.x, self.y));
        Point::new(p.x, p.y)
    }
}

/// Axis-aligned rectangle. Y grows downward, so `min_y` is the top edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Rectangle from a corner and a size.
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Smallest rectangle covering all points, `None` when there are none.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        points.into_iter().fold(None, |acc: Option<Bounds>, p| {
            Some(match acc {
                None => Bounds::new(p.x, p.y, p.x, p.y),
                Some(b) => Bounds::new(
                    b.min_x.min(p.x),
                    b.min_y.min(p.y),
                    b.max_x.max(p.x),
                    b.max_y.max(p.y),
                ),
            })
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn origin(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    pub fn inflate(&self, amount: f64) -> Bounds {
        Bounds::new(
            self.min_x - amount,
            self.min_y - amount,
            self.max_x + amount,
            self.max_y + amount,
        )
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Bounds {
        Bounds::new(self.min_x + dx, self.min_y + dy, self.max_x + dx, self.max_y + dy)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }

    /// Bounding box of this rectangle after mapping it through `t`.
    pub fn transformed(&self, t: &Affine) -> Bounds {
        Bounds::from_points(self.corners().iter().map(|c| c.transformed(t))).unwrap_or(*self)
    }

    /// Union of all rectangles, `None` for an empty iterator.
    pub fn union_all(bounds: impl IntoIterator<Item = Bounds>) -> Option<Bounds> {
        bounds
            .into_iter()
            .fold(None, |acc: Option<Bounds>, b| Some(acc.map_or(b, |a| a.union(&b))))
    }
}

/// Stable identity of an entity within a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Geometric snapshot of an entity, tagged with the protocol it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityState {
    /// Full point list of a path, in scene coordinates.
    Points(Vec<Point>),
    /// Affine placement of an image or text entity.
    Transform(Affine),
}

impl EntityState {
    pub fn protocol(&self) -> &'static str {
        match self {
            EntityState::Points(_) => "points",
            EntityState::Transform(_) => "transform",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MirrorAxis {
    /// Flip left/right around the vertical center line.
    Horizontal,
    /// Flip top/bottom around the horizontal center line.
    Vertical,
}

/// Rotation by `angle` radians around `pivot`.
pub fn rotation_about(pivot: Point, angle: f64) -> Affine {
    Affine::translation(-pivot.x, -pivot.y)
        .then_rotate(euclid::Angle::radians(angle))
        .then_translate(euclid::default::Vector2D::new(pivot.x, pivot.y))
}

/// Reflection across the center line through `center`.
pub fn mirror_about(center: Point, axis: MirrorAxis) -> Affine {
    let (sx, sy) = match axis {
        MirrorAxis::Horizontal => (-1.0, 1.0),
        MirrorAxis::Vertical => (1.0, -1.0),
    };
    Affine::translation(-center.x, -center.y)
        .then_scale(sx, sy)
        .then_translate(euclid::default::Vector2D::new(center.x, center.y))
}

/// Maps rectangle `from` onto rectangle `to`, origin to origin.
pub fn rect_mapping(from: &Bounds, to: &Bounds) -> Affine {
    let (sx, sy) = scale_factors(from, to);
    Affine::translation(-from.min_x, -from.min_y)
        .then_scale(sx, sy)
        .then_translate(euclid::default::Vector2D::new(to.min_x, to.min_y))
}

/// Per-axis scale from `from` to `to`. A degenerate axis keeps factor 1.
pub fn scale_factors(from: &Bounds, to: &Bounds) -> (f64, f64) {
    let sx = if from.width().abs() > GEOMETRY_EPSILON {
        to.width() / from.width()
    } else {
        1.0
    };
    let sy = if from.height().abs() > GEOMETRY_EPSILON {
        to.height() / from.height()
    } else {
        1.0
    };
    (sx, sy)
}

pub fn rotate_point(p: Point, pivot: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let dx = p.x - pivot.x;
    let dy = p.y - pivot.y;
    Point::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
}

/// Wraps an angle into `(-π, π]`.
pub fn normalize_angle(angle: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    let a = angle.rem_euclid(TAU);
    if a > PI {
        a - TAU
    } else {
        a
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Path(PathEntity),
    Image(ImageEntity),
    Text(TextEntity),
}

/// A graphical object on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub selected: bool,
    pub visible: bool,
    pub locked: bool,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind) -> Self {
        let name = match &kind {
            EntityKind::Path(_) => "Path",
            EntityKind::Image(_) => "Image",
            EntityKind::Text(_) => "Text",
        };
        Self {
            id,
            name: format!("{} {}", name, id.0),
            selected: false,
            visible: true,
            locked: false,
            kind,
        }
    }

    pub fn path(id: EntityId, path: PathEntity) -> Self {
        Self::new(id, EntityKind::Path(path))
    }

    pub fn image(id: EntityId, image: ImageEntity) -> Self {
        Self::new(id, EntityKind::Image(image))
    }

    pub fn text(id: EntityId, text: TextEntity) -> Self {
        Self::new(id, EntityKind::Text(text))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mutation protocol this entity accepts.
    pub fn protocol(&self) -> &'static str {
        match self.kind {
            EntityKind::Path(_) => "points",
            EntityKind::Image(_) | EntityKind::Text(_) => "transform",
        }
    }

    /// Visible and unlocked, so gestures and selection-wide operations may
    /// touch it.
    pub fn is_editable(&self) -> bool {
        self.visible && !self.locked
    }

    pub fn state(&self) -> EntityState {
        match &self.kind {
            EntityKind::Path(p) => EntityState::Points(p.points().to_vec()),
            EntityKind::Image(i) => EntityState::Transform(i.transform()),
            EntityKind::Text(t) => EntityState::Transform(t.transform()),
        }
    }

    /// Replaces the geometry. A state of the other protocol is rejected and
    /// leaves the entity untouched.
    pub fn set_state(&mut self, state: EntityState) -> Result<(), EditorError> {
        match (&mut self.kind, state) {
            (EntityKind::Path(p), EntityState::Points(points)) => p.set_points(points),
            (EntityKind::Image(i), EntityState::Transform(t)) => i.set_transform(t),
            (EntityKind::Text(x), EntityState::Transform(t)) => x.set_transform(t),
            (_, state) => {
                return Err(EditorError::ProtocolMismatch {
                    entity: self.id.0,
                    expected: self.protocol(),
                    found: state.protocol(),
                })
            }
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        match &self.kind {
            EntityKind::Path(p) => p.bounds(),
            EntityKind::Image(i) => i.local_rect().transformed(&i.transform()),
            EntityKind::Text(t) => t.local_rect().transformed(&t.transform()),
        }
    }

    /// Rotation pivot: centroid of the points for paths, bounding box
    /// center otherwise.
    pub fn pivot(&self) -> Point {
        match &self.kind {
            EntityKind::Path(p) => p.centroid(),
            _ => self.bounds().center(),
        }
    }

    /// Current heading in radians.
    ///
    /// Affine entities decompose their transform. Paths have no stored
    /// heading, so the angle from the centroid to the first point stands in.
    pub fn orientation(&self) -> f64 {
        match &self.kind {
            EntityKind::Path(p) => match p.points().first() {
                Some(first) => {
                    let c = p.centroid();
                    if first.distance_to(&c) <= GEOMETRY_EPSILON {
                        0.0
                    } else {
                        (first.y - c.y).atan2(first.x - c.x)
                    }
                }
                None => 0.0,
            },
            EntityKind::Image(i) => transform_angle(&i.transform()),
            EntityKind::Text(t) => transform_angle(&t.transform()),
        }
    }

    /// Scene-space outline: the tessellated path, or the four placed corners
    /// (closed) of an image or text box.
    pub fn outline(&self) -> Vec<Point> {
        match &self.kind {
            EntityKind::Path(p) => p.outline().to_vec(),
            EntityKind::Image(i) => placed_corners(&i.local_rect(), &i.transform()),
            EntityKind::Text(t) => placed_corners(&t.local_rect(), &t.transform()),
        }
    }

    pub fn points(&self) -> Option<&[Point]> {
        match &self.kind {
            EntityKind::Path(p) => Some(p.points()),
            _ => None,
        }
    }

    pub fn transform(&self) -> Option<Affine> {
        match &self.kind {
            EntityKind::Path(_) => None,
            EntityKind::Image(i) => Some(i.transform()),
            EntityKind::Text(t) => Some(t.transform()),
        }
    }

    /// Stroke color of a path or fill color of text. Images have none.
    pub fn color(&self) -> Option<Color> {
        match &self.kind {
            EntityKind::Path(p) => Some(p.stroke_color),
            EntityKind::Text(t) => Some(t.color),
            EntityKind::Image(_) => None,
        }
    }

    /// Returns `false` when the entity kind carries no color.
    pub fn set_color(&mut self, color: Color) -> bool {
        match &mut self.kind {
            EntityKind::Path(p) => p.stroke_color = color,
            EntityKind::Text(t) => t.color = color,
            EntityKind::Image(_) => return false,
        }
        true
    }

    pub fn as_path(&self) -> Option<&PathEntity> {
        match &self.kind {
            EntityKind::Path(p) => Some(p),
            _ => None,
        }
    }

    /// State after mapping the geometry through a scene-space transform.
    pub fn transformed_state(&self, t: &Affine) -> EntityState {
        match &self.kind {
            EntityKind::Path(p) => {
                EntityState::Points(p.points().iter().map(|q| q.transformed(t)).collect())
            }
            EntityKind::Image(i) => EntityState::Transform(i.transform().then(t)),
            EntityKind::Text(x) => EntityState::Transform(x.transform().then(t)),
        }
    }

    pub fn translated_state(&self, dx: f64, dy: f64) -> EntityState {
        match &self.kind {
            EntityKind::Path(p) => {
                EntityState::Points(p.points().iter().map(|q| q.translated(dx, dy)).collect())
            }
            _ => self.transformed_state(&Affine::translation(dx, dy)),
        }
    }

    /// State after rotating by `angle` radians around `pivot`.
    pub fn rotated_state(&self, angle: f64, pivot: Point) -> EntityState {
        match &self.kind {
            EntityKind::Path(p) => EntityState::Points(
                p.points()
                    .iter()
                    .map(|q| rotate_point(*q, pivot, angle))
                    .collect(),
            ),
            _ => self.transformed_state(&rotation_about(pivot, angle)),
        }
    }

    /// State after reflecting around the entity's own bounding-box center.
    pub fn mirrored_state(&self, axis: MirrorAxis) -> EntityState {
        let c = self.bounds().center();
        match &self.kind {
            EntityKind::Path(p) => EntityState::Points(
                p.points()
                    .iter()
                    .map(|q| match axis {
                        MirrorAxis::Horizontal => Point::new(2.0 * c.x - q.x, q.y),
                        MirrorAxis::Vertical => Point::new(q.x, 2.0 * c.y - q.y),
                    })
                    .collect(),
            ),
            _ => self.transformed_state(&mirror_about(c, axis)),
        }
    }

    /// State after stretching rectangle `from` onto rectangle `to`.
    pub fn scaled_state(&self, from: &Bounds, to: &Bounds) -> EntityState {
        match &self.kind {
            EntityKind::Path(p) => {
                let (sx, sy) = scale_factors(from, to);
                EntityState::Points(
                    p.points()
                        .iter()
                        .map(|q| {
                            Point::new(
                                to.min_x + (q.x - from.min_x) * sx,
                                to.min_y + (q.y - from.min_y) * sy,
                            )
                        })
                        .collect(),
                )
            }
            _ => self.transformed_state(&rect_mapping(from, to)),
        }
    }
}

fn transform_angle(t: &Affine) -> f64 {
    t.m12.atan2(t.m11)
}

fn placed_corners(rect: &Bounds, t: &Affine) -> Vec<Point> {
    let mut out: Vec<Point> = rect.corners().iter().map(|c| c.transformed(t)).collect();
    out.push(out[0]);
    out
}
