//! Reusable path buffer.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

/// 2D point in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Single path instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verb", rename_all = "snake_case")]
pub enum PathVerb {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Sequence of contours built from move/line/close verbs.
///
/// `reset` keeps the allocation so the same buffer can be refilled every
/// frame without allocating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    verbs: Vec<PathVerb>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            verbs: Vec::with_capacity(capacity),
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.verbs.push(PathVerb::MoveTo(Point::new(x, y)));
    }

    /// Append a line from the current point. A line on an empty path starts
    /// its contour at the origin.
    pub fn line_to(&mut self, x: f32, y: f32) {
        if self.verbs.is_empty() {
            self.verbs.push(PathVerb::MoveTo(Point::default()));
        }
        self.verbs.push(PathVerb::LineTo(Point::new(x, y)));
    }

    pub fn close(&mut self) {
        if !self.verbs.is_empty() {
            self.verbs.push(PathVerb::Close);
        }
    }

    pub fn reset(&mut self) {
        self.verbs.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    /// Split into contours, each a list of points plus whether it was closed.
    pub fn contours(&self) -> Vec<(Vec<Point>, bool)> {
        let mut contours = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        let mut start = Point::default();

        for verb in &self.verbs {
            match *verb {
                PathVerb::MoveTo(p) => {
                    if !current.is_empty() {
                        contours.push((std::mem::take(&mut current), false));
                    }
                    start = p;
                    current.push(p);
                }
                PathVerb::LineTo(p) => {
                    if current.is_empty() {
                        current.push(start);
                    }
                    current.push(p);
                }
                PathVerb::Close => {
                    if !current.is_empty() {
                        contours.push((std::mem::take(&mut current), true));
                    }
                }
            }
        }
        if !current.is_empty() {
            contours.push((current, false));
        }

        contours
    }
}

/// Scoped borrow of a [`Path`] that is empty on entry and reset on drop.
pub struct PathScope<'a> {
    path: &'a mut Path,
}

impl<'a> PathScope<'a> {
    pub fn new(path: &'a mut Path) -> Self {
        path.reset();
        Self { path }
    }
}

impl Deref for PathScope<'_> {
    type Target = Path;

    fn deref(&self) -> &Path {
        self.path
    }
}

impl DerefMut for PathScope<'_> {
    fn deref_mut(&mut self) -> &mut Path {
        self.path
    }
}

impl Drop for PathScope<'_> {
    fn drop(&mut self) {
        self.path.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_keeps_capacity() {
        let mut path = Path::with_capacity(4);
        path.move_to(0.0, 0.0);
        path.line_to(1.0, 1.0);
        let capacity = path.verbs.capacity();
        path.reset();
        assert!(path.is_empty());
        assert_eq!(path.verbs.capacity(), capacity);
    }

    #[test]
    fn test_line_on_empty_path_starts_at_origin() {
        let mut path = Path::new();
        path.line_to(3.0, 4.0);
        assert_eq!(
            path.verbs(),
            &[
                PathVerb::MoveTo(Point::new(0.0, 0.0)),
                PathVerb::LineTo(Point::new(3.0, 4.0))
            ]
        );
    }

    #[test]
    fn test_close_on_empty_path_is_ignored() {
        let mut path = Path::new();
        path.close();
        assert!(path.is_empty());
    }

    #[test]
    fn test_contours_split_on_move_and_close() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(1.0, 0.0);
        path.line_to(1.0, 1.0);
        path.close();
        path.move_to(5.0, 5.0);
        path.line_to(6.0, 6.0);

        let contours = path.contours();
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[0].0.len(), 3);
        assert!(contours[0].1);
        assert_eq!(contours[1].0, vec![Point::new(5.0, 5.0), Point::new(6.0, 6.0)]);
        assert!(!contours[1].1);
    }

    #[test]
    fn test_scope_resets_on_entry_and_drop() {
        let mut path = Path::new();
        path.move_to(9.0, 9.0);
        {
            let mut scope = PathScope::new(&mut path);
            assert!(scope.is_empty());
            scope.move_to(1.0, 1.0);
            scope.line_to(2.0, 2.0);
            assert_eq!(scope.len(), 2);
        }
        assert!(path.is_empty());
    }
}
