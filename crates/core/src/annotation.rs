//! Normalized bounding-box labels and their sidecar text format.
//!
//! One label per line: `<class_id> <x_center> <y_center> <width> <height>`,
//! geometric fields normalized by the canvas and printed with 6 decimals.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{CanvasSize, PixelBox};

/// Object classes understood by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectClass {
    /// A single icon glyph.
    Icon,
    /// A panel hosting a row or column of icons.
    Panel,
}

impl ObjectClass {
    /// Numeric label id written to the sidecar file.
    pub const fn id(self) -> u32 {
        match self {
            ObjectClass::Icon => 0,
            ObjectClass::Panel => 1,
        }
    }
}

impl TryFrom<u32> for ObjectClass {
    type Error = AnnotationParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ObjectClass::Icon),
            1 => Ok(ObjectClass::Panel),
            other => Err(AnnotationParseError::UnknownClass(other)),
        }
    }
}

/// Errors produced while reading label lines.
#[derive(Debug, Error, PartialEq)]
pub enum AnnotationParseError {
    /// Line did not contain exactly five fields.
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),
    /// Class id is not an unsigned integer.
    #[error("invalid class id '{0}'")]
    InvalidClass(String),
    /// Class id is numeric but not a known class.
    #[error("unknown class id {0}")]
    UnknownClass(u32),
    /// A geometric field failed to parse.
    #[error("invalid {field} value '{value}'")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// Raw text that failed to parse.
        value: String,
    },
    /// Error on a specific line of a multi-line label file.
    #[error("line {line}: {source}")]
    Line {
        /// 1-based line number.
        line: usize,
        /// Underlying parse failure.
        #[source]
        source: Box<AnnotationParseError>,
    },
}

/// A class label with a box normalized to `[0, 1]` by canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Object class.
    pub class: ObjectClass,
    /// Box center x / canvas width.
    pub x_center: f64,
    /// Box center y / canvas height.
    pub y_center: f64,
    /// Box width / canvas width.
    pub width: f64,
    /// Box height / canvas height.
    pub height: f64,
}

impl Annotation {
    /// Normalize a pixel box against the canvas it was placed on.
    pub fn normalized(class: ObjectClass, bounds: &PixelBox, canvas: CanvasSize) -> Self {
        let canvas_w = f64::from(canvas.width);
        let canvas_h = f64::from(canvas.height);
        let (cx, cy) = bounds.center();
        Self {
            class,
            x_center: cx / canvas_w,
            y_center: cy / canvas_h,
            width: f64::from(bounds.width()) / canvas_w,
            height: f64::from(bounds.height()) / canvas_h,
        }
    }

    /// Denormalize back to `(x_min, y_min, x_max, y_max)` in pixels.
    pub fn to_pixel_bounds(&self, canvas: CanvasSize) -> (f64, f64, f64, f64) {
        let canvas_w = f64::from(canvas.width);
        let canvas_h = f64::from(canvas.height);
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        (
            (self.x_center - half_w) * canvas_w,
            (self.y_center - half_h) * canvas_h,
            (self.x_center + half_w) * canvas_w,
            (self.y_center + half_h) * canvas_h,
        )
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.6} {:.6} {:.6} {:.6}",
            self.class.id(),
            self.x_center,
            self.y_center,
            self.width,
            self.height
        )
    }
}

impl FromStr for Annotation {
    type Err = AnnotationParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [class, x_center, y_center, width, height] = fields.as_slice() else {
            return Err(AnnotationParseError::FieldCount(fields.len()));
        };

        let class_id: u32 = class
            .parse()
            .map_err(|_| AnnotationParseError::InvalidClass((*class).to_string()))?;

        Ok(Self {
            class: ObjectClass::try_from(class_id)?,
            x_center: parse_field("x_center", x_center)?,
            y_center: parse_field("y_center", y_center)?,
            width: parse_field("width", width)?,
            height: parse_field("height", height)?,
        })
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<f64, AnnotationParseError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AnnotationParseError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Render a label file: one line per annotation, each newline-terminated.
pub fn format_labels(annotations: &[Annotation]) -> String {
    let mut out = String::with_capacity(annotations.len() * 40);
    for annotation in annotations {
        out.push_str(&annotation.to_string());
        out.push('\n');
    }
    out
}

/// Parse a label file, skipping blank lines.
pub fn parse_labels(input: &str) -> Result<Vec<Annotation>, AnnotationParseError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            line.parse().map_err(|err| AnnotationParseError::Line {
                line: idx + 1,
                source: Box::new(err),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_annotation_formats_six_decimals() {
        let bounds = PixelBox::from_origin_size(100, 50, 60, 160);
        let ann = Annotation::normalized(ObjectClass::Panel, &bounds, CanvasSize::REFERENCE);
        assert_eq!(ann.to_string(), "1 0.162500 0.276596 0.075000 0.340426");
    }

    #[test]
    fn icon_class_id_is_zero() {
        let bounds = PixelBox::from_origin_size(0, 0, 40, 40);
        let ann = Annotation::normalized(ObjectClass::Icon, &bounds, CanvasSize::REFERENCE);
        assert!(ann.to_string().starts_with("0 "));
    }

    #[test]
    fn parse_reproduces_formatted_line() {
        let line = "0 0.512500 0.123404 0.050000 0.085106";
        let ann: Annotation = line.parse().expect("valid line");
        assert_eq!(ann.class, ObjectClass::Icon);
        assert_eq!(ann.to_string(), line);
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        assert_eq!(
            "0 0.5 0.5 0.1".parse::<Annotation>(),
            Err(AnnotationParseError::FieldCount(4))
        );
        assert_eq!(
            "2 0.5 0.5 0.1 0.1".parse::<Annotation>(),
            Err(AnnotationParseError::UnknownClass(2))
        );
        assert_eq!(
            "x 0.5 0.5 0.1 0.1".parse::<Annotation>(),
            Err(AnnotationParseError::InvalidClass("x".into()))
        );
        assert!(matches!(
            "1 0.5 nan 0.1 0.1".parse::<Annotation>(),
            Err(AnnotationParseError::InvalidNumber { field: "y_center", .. })
        ));
    }

    #[test]
    fn pixel_bounds_reconstruct_box() {
        let canvas = CanvasSize::REFERENCE;
        let bounds = PixelBox::from_origin_size(13, 27, 45, 45);
        let ann = Annotation::normalized(ObjectClass::Icon, &bounds, canvas);
        let (x0, y0, x1, y1) = ann.to_pixel_bounds(canvas);
        assert!((x0 - 13.0).abs() < 1e-6);
        assert!((y0 - 27.0).abs() < 1e-6);
        assert!((x1 - 58.0).abs() < 1e-6);
        assert!((y1 - 72.0).abs() < 1e-6);
    }

    #[test]
    fn empty_label_file() {
        assert_eq!(format_labels(&[]), "");
        assert_eq!(parse_labels("").expect("empty parses"), Vec::new());
    }

    #[test]
    fn label_file_reports_line_numbers() {
        let input = "1 0.5 0.5 0.1 0.1\n\n0 0.5\n";
        let err = parse_labels(input).expect_err("third line is short");
        assert_eq!(err.to_string(), "line 3: expected 5 fields, found 2");
    }
}
