//! Path-data accumulation, after the SVG path grammar
//! (<https://www.w3.org/TR/SVGTiny12/paths.html#PathElement>).

use crate::point::{Point, Unit};

use core::fmt;
use core::slice;
use alloc::vec::{self, Vec};

use vek::bezier::CubicBezier2;
use vek::geom::Rect;

use PathError::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EntryKind {
    MoveTo,
    LineTo,
    CurveTo,
    ClosePath,
}

impl EntryKind {
    pub fn as_text(self) -> &'static str {
        match self {
            EntryKind::MoveTo => "MoveTo",
            EntryKind::LineTo => "LineTo",
            EntryKind::CurveTo => "CurveTo",
            EntryKind::ClosePath => "ClosePath",
        }
    }
}

/// One command of a path.
///
/// A cubic Bézier segment takes three consecutive `CurveTo` entries:
/// first control point, second control point, end point. Its start point
/// is the point of the entry preceding them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PathEntry<T> {
    pub kind: EntryKind,
    pub point: Point<T>,
}

impl<T> PathEntry<T> {
    pub const fn new(kind: EntryKind, point: Point<T>) -> Self {
        Self { kind, point }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PathError {
    Empty,
    MissingMoveTo,
    /// The `CurveTo` run ending before `index` isn't a multiple of three.
    IncompleteCurve { index: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Empty => write!(f, "path has no entries"),
            MissingMoveTo => write!(f, "path doesn't start with a MoveTo entry"),
            IncompleteCurve { index } => write!(f, "incomplete curve before entry {}", index),
        }
    }
}

pub type PathResult<T> = Result<T, PathError>;

/// Structured view of the entries, one item per drawing command.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment<T> {
    MoveTo(Point<T>),
    LineTo(Point<T>),
    CurveTo {
        ctrl0: Point<T>,
        ctrl1: Point<T>,
        end: Point<T>,
    },
    ClosePath,
}

/// An ordered, never empty list of path entries.
///
/// The current point, used to resolve relative coordinates and as the
/// start of curves, is the point of the last entry that isn't a
/// `ClosePath`. Closing doesn't move it back to the start of the subpath.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<T> {
    entries: Vec<PathEntry<T>>,
}

impl<T: Unit> Default for Path<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Unit> Path<T> {
    /// Path starting at `(0, 0)`.
    pub fn new() -> Self {
        Self::starting_at(Point::origin())
    }

    /// Path starting at `start`, in absolute coordinates.
    pub fn starting_at<P: Into<Point<T>>>(start: P) -> Self {
        let mut entries = Vec::with_capacity(8);
        entries.push(PathEntry::new(EntryKind::MoveTo, start.into()));
        Self { entries }
    }

    /// Builds a path from raw entries, checking the invariants the
    /// builder methods maintain.
    pub fn from_entries(entries: Vec<PathEntry<T>>) -> PathResult<Self> {
        let path = Self { entries };
        path.validate()?;
        Ok(path)
    }

    /// Checks that the path is non-empty, starts with a `MoveTo` and
    /// that its `CurveTo` runs come in multiples of three.
    pub fn validate(&self) -> PathResult<()> {
        match self.entries.first() {
            None => return Err(Empty),
            Some(first) if first.kind != EntryKind::MoveTo => return Err(MissingMoveTo),
            _ => (),
        }

        let mut run = 0;
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.kind == EntryKind::CurveTo {
                run += 1;
            } else if run % 3 != 0 {
                return Err(IncompleteCurve { index: i });
            } else {
                run = 0;
            }
        }

        match run % 3 {
            0 => Ok(()),
            _ => Err(IncompleteCurve { index: self.entries.len() }),
        }
    }

    /// Always `false`: every constructor pushes a `MoveTo`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[PathEntry<T>] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, PathEntry<T>> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, PathEntry<T>> {
        self.entries.iter_mut()
    }

    /// Point of the last entry, `ClosePath` markers aside.
    pub fn current_point(&self) -> Point<T> {
        debug_assert!(!self.entries.is_empty());
        self.entries
            .iter()
            .rev()
            .find(|e| e.kind != EntryKind::ClosePath)
            .map_or(Point::origin(), |e| e.point)
    }

    fn resolve(&self, point: Point<T>, relative: bool) -> Point<T> {
        match relative {
            true => self.current_point() + point,
            false => point,
        }
    }

    fn push(&mut self, kind: EntryKind, point: Point<T>) {
        self.entries.push(PathEntry::new(kind, point));
    }

    fn push_move(&mut self, point: Point<T>, relative: bool) {
        debug_assert!(!self.entries.is_empty());
        let point = self.resolve(point, relative);

        match self.entries.last_mut() {
            Some(last) if last.kind == EntryKind::MoveTo => last.point = point,
            _ => self.entries.push(PathEntry::new(EntryKind::MoveTo, point)),
        }
    }

    /// Starts a new subpath at `point`.
    ///
    /// If the last entry is already a `MoveTo`, its point is replaced.
    pub fn move_to<P: Into<Point<T>>>(&mut self, point: P) {
        self.push_move(point.into(), false);
    }

    pub fn rel_move_to<P: Into<Point<T>>>(&mut self, offset: P) {
        self.push_move(offset.into(), true);
    }

    pub fn line_to<P: Into<Point<T>>>(&mut self, point: P) {
        debug_assert!(!self.entries.is_empty());
        self.push(EntryKind::LineTo, point.into());
    }

    pub fn rel_line_to<P: Into<Point<T>>>(&mut self, offset: P) {
        let point = self.resolve(offset.into(), true);
        self.line_to(point);
    }

    /// Horizontal line to `x`, keeping the current `y`.
    ///
    /// As with SVG `H`, `y` is not reset to zero.
    pub fn hline_to(&mut self, x: T) {
        let y = self.current_point().y;
        self.line_to(Point::new(x, y));
    }

    pub fn rel_hline_to(&mut self, dx: T) {
        self.rel_line_to(Point::new(dx, T::zero()));
    }

    /// Vertical line to `y`, keeping the current `x`.
    ///
    /// As with SVG `V`, `x` is not reset to zero.
    pub fn vline_to(&mut self, y: T) {
        let x = self.current_point().x;
        self.line_to(Point::new(x, y));
    }

    pub fn rel_vline_to(&mut self, dy: T) {
        self.rel_line_to(Point::new(T::zero(), dy));
    }

    fn push_curve(&mut self, ctrl0: Point<T>, ctrl1: Point<T>, end: Point<T>, relative: bool) {
        debug_assert!(!self.entries.is_empty());
        let ctrl0 = self.resolve(ctrl0, relative);
        let ctrl1 = self.resolve(ctrl1, relative);
        let end = self.resolve(end, relative);

        self.push(EntryKind::CurveTo, ctrl0);
        self.push(EntryKind::CurveTo, ctrl1);
        self.push(EntryKind::CurveTo, end);
    }

    /// Cubic Bézier curve from the current point to `end`,
    /// using `ctrl0` and `ctrl1` as control points.
    pub fn curve_to<P: Into<Point<T>>>(&mut self, ctrl0: P, ctrl1: P, end: P) {
        self.push_curve(ctrl0.into(), ctrl1.into(), end.into(), false);
    }

    /// Same as [`Path::curve_to`], all three points being offsets from
    /// the current point.
    pub fn rel_curve_to<P: Into<Point<T>>>(&mut self, ctrl0: P, ctrl1: P, end: P) {
        self.push_curve(ctrl0.into(), ctrl1.into(), end.into(), true);
    }

    fn push_quad(&mut self, ctrl: Point<T>, end: Point<T>, relative: bool) {
        debug_assert!(!self.entries.is_empty());
        let start = self.current_point();
        let ctrl = self.resolve(ctrl, relative);
        let end = self.resolve(end, relative);

        if start == ctrl && ctrl == end {
            log::debug!("skipping zero-length quadratic curve at {:?}", start);
            return;
        }

        // degree elevation, in the unit's own arithmetic:
        // C1 = P0 + 2 (C - P0) / 3
        // C2 = C + (P1 - C) / 3
        let one = T::one();
        let two = one + one;
        let three = two + one;
        let ctrl0 = Point::new(
            start.x + (ctrl.x - start.x).mul_div(two, three),
            start.y + (ctrl.y - start.y).mul_div(two, three),
        );
        let ctrl1 = Point::new(
            ctrl.x + (end.x - ctrl.x).mul_div(one, three),
            ctrl.y + (end.y - ctrl.y).mul_div(one, three),
        );

        self.push_curve(ctrl0, ctrl1, end, false);
    }

    /// Quadratic Bézier curve from the current point to `end` with
    /// control point `ctrl`, stored as the equivalent cubic curve.
    ///
    /// Nothing is added when the current point, `ctrl` and `end` are
    /// the same point.
    pub fn quad_to<P: Into<Point<T>>>(&mut self, ctrl: P, end: P) {
        self.push_quad(ctrl.into(), end.into(), false);
    }

    pub fn rel_quad_to<P: Into<Point<T>>>(&mut self, ctrl: P, end: P) {
        self.push_quad(ctrl.into(), end.into(), true);
    }

    pub fn close_path(&mut self) {
        debug_assert!(!self.entries.is_empty());
        self.push(EntryKind::ClosePath, Point::origin());
    }

    /// Inserts the entries of `other` in front of this path's entries.
    ///
    /// Note that `other` ends up *before* the existing entries,
    /// not after them.
    pub fn append_path(&mut self, other: &Path<T>) {
        log::trace!("prepending {} entries to a path of {}", other.len(), self.len());
        let mut entries = Vec::with_capacity(other.len() + self.len());
        entries.extend_from_slice(&other.entries);
        entries.extend_from_slice(&self.entries);
        self.entries = entries;
    }

    /// Groups entries into drawing commands, each run of three
    /// `CurveTo` entries becoming one [`Segment::CurveTo`].
    pub fn segments(&self) -> Segments<'_, T> {
        Segments {
            entries: &self.entries,
            index: 0,
        }
    }

    /// Every cubic curve of the path, with its start point.
    pub fn cubic_curves(&self) -> CubicCurves<'_, T> {
        CubicCurves {
            segments: self.segments(),
            current: Point::origin(),
        }
    }

    /// Not implemented yet: always `None`.
    pub fn bounding_rect(&self) -> Option<Rect<T, T>> {
        log::debug!("bounding_rect is not implemented");
        None
    }

    /// Rectangle containing every point and control point.
    ///
    /// Not implemented yet: always `None`.
    pub fn control_point_rect(&self) -> Option<Rect<T, T>> {
        log::debug!("control_point_rect is not implemented");
        None
    }

    pub fn log_entries(&self) {
        log::info!(    "| INDEX |   COMMAND   |   X   |   Y   |");

        for (i, entry) in self.entries.iter().enumerate() {
            let (x, y) = (entry.point.x, entry.point.y);
            let kind = entry.kind.as_text();
            log::info!("| {:^5} | {:^11} | {:^5?} | {:^5?} |", i, kind, x, y);
        }
    }
}

impl<'a, T> IntoIterator for &'a Path<T> {
    type Item = &'a PathEntry<T>;
    type IntoIter = slice::Iter<'a, PathEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Path<T> {
    type Item = &'a mut PathEntry<T>;
    type IntoIter = slice::IterMut<'a, PathEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}

impl<T> IntoIterator for Path<T> {
    type Item = PathEntry<T>;
    type IntoIter = vec::IntoIter<PathEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

pub struct Segments<'a, T> {
    entries: &'a [PathEntry<T>],
    index: usize,
}

impl<'a, T: Unit> Iterator for Segments<'a, T> {
    type Item = PathResult<Segment<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.index)?;
        self.index += 1;

        Some(Ok(match entry.kind {
            EntryKind::MoveTo => Segment::MoveTo(entry.point),
            EntryKind::LineTo => Segment::LineTo(entry.point),
            EntryKind::ClosePath => Segment::ClosePath,
            EntryKind::CurveTo => {
                let rest = &self.entries[self.index..];
                match rest {
                    [c1, c2, ..] if c1.kind == EntryKind::CurveTo && c2.kind == EntryKind::CurveTo => {
                        self.index += 2;
                        Segment::CurveTo {
                            ctrl0: entry.point,
                            ctrl1: c1.point,
                            end: c2.point,
                        }
                    }
                    _ => {
                        let run = rest.iter().take_while(|e| e.kind == EntryKind::CurveTo).count();
                        let index = self.index + run;
                        // nothing sensible follows a broken run
                        self.index = self.entries.len();
                        return Some(Err(IncompleteCurve { index }));
                    }
                }
            }
        }))
    }
}

pub struct CubicCurves<'a, T> {
    segments: Segments<'a, T>,
    current: Point<T>,
}

impl<'a, T: Unit> Iterator for CubicCurves<'a, T> {
    type Item = PathResult<CubicBezier2<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.segments.next()? {
                Err(e) => return Some(Err(e)),
                Ok(Segment::MoveTo(p)) | Ok(Segment::LineTo(p)) => self.current = p,
                Ok(Segment::ClosePath) => (),
                Ok(Segment::CurveTo { ctrl0, ctrl1, end }) => {
                    let start = self.current;
                    self.current = end;
                    return Some(Ok(CubicBezier2 {
                        start: start.into(),
                        ctrl0: ctrl0.into(),
                        ctrl1: ctrl1.into(),
                        end: end.into(),
                    }));
                }
            }
        }
    }
}
