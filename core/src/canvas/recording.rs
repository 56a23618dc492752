//! Canvas that records primitives instead of rasterising them.

use serde::{Deserialize, Serialize};

use super::{Canvas, Paint, Path, PathVerb, Point};

/// One recorded primitive together with the paint it was drawn with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Line { from: Point, to: Point, paint: Paint },
    Circle { center: Point, radius: f32, paint: Paint },
    Point { at: Point, paint: Paint },
    Path { verbs: Vec<PathVerb>, paint: Paint },
}

impl DrawCommand {
    pub fn paint(&self) -> &Paint {
        match self {
            Self::Line { paint, .. }
            | Self::Circle { paint, .. }
            | Self::Point { paint, .. }
            | Self::Path { paint, .. } => paint,
        }
    }
}

/// Canvas that keeps every draw call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the canvas empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Point { at, .. } => Some(*at),
            _ => None,
        })
    }

    /// Serialize the recorded frame as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Line {
            from: Point::new(x0, y0),
            to: Point::new(x1, y1),
            paint: paint.clone(),
        });
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Circle {
            center: Point::new(cx, cy),
            radius,
            paint: paint.clone(),
        });
    }

    fn draw_point(&mut self, x: f32, y: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Point {
            at: Point::new(x, y),
            paint: paint.clone(),
        });
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        self.commands.push(DrawCommand::Path {
            verbs: path.verbs().to_vec(),
            paint: paint.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Color, PaintStyle};

    #[test]
    fn test_records_in_call_order() {
        let mut canvas = RecordingCanvas::new();
        let paint = Paint::default();
        canvas.draw_circle(1.0, 2.0, 3.0, &paint);
        canvas.draw_line(0.0, 0.0, 1.0, 1.0, &paint);
        canvas.draw_point(4.0, 5.0, &paint);

        assert_eq!(canvas.len(), 3);
        assert!(matches!(canvas.commands()[0], DrawCommand::Circle { .. }));
        assert_eq!(canvas.lines().count(), 1);
        assert_eq!(canvas.points().collect::<Vec<_>>(), vec![Point::new(4.0, 5.0)]);
    }

    #[test]
    fn test_path_snapshot_is_independent_of_buffer() {
        let mut canvas = RecordingCanvas::new();
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(1.0, 0.0);
        canvas.draw_path(&path, &Paint::default());
        path.reset();

        match &canvas.commands()[0] {
            DrawCommand::Path { verbs, .. } => assert_eq!(verbs.len(), 2),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_json_export() {
        let mut canvas = RecordingCanvas::new();
        let mut paint = Paint::default();
        paint.set_color(Color::rgb(255, 0, 0));
        paint.set_style(PaintStyle::Stroke);
        canvas.draw_circle(10.0, 10.0, 5.0, &paint);

        let json = canvas.to_json().unwrap();
        assert!(json.contains("\"kind\": \"circle\""));
        assert!(json.contains("\"style\": \"stroke\""));

        let parsed: Vec<DrawCommand> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, canvas.take());
        assert!(canvas.is_empty());
    }
}
