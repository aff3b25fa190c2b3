//! Path serialization shared by the vector writers
//!
//! Converts kurbo paths into SVG `d` strings and into PDF / PostScript
//! painting operators.

use kurbo::{BezPath, PathEl, Point, QuadBez};

/// Format a coordinate with at most `precision` decimals
///
/// Trailing zeros are dropped and `-0` prints as `0`. Minified numbers
/// also lose their leading zero (`0.5` becomes `.5`).
pub fn format_number(value: f64, precision: usize, minify: bool) -> String {
    let mut s = format!("{:.*}", precision, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    if minify {
        if let Some(rest) = s.strip_prefix("0.") {
            s = format!(".{rest}");
        } else if let Some(rest) = s.strip_prefix("-0.") {
            s = format!("-.{rest}");
        }
    }
    s
}

/// Convert a path into an SVG `d` attribute value
pub fn path_to_d(path: &BezPath, precision: usize, minify: bool) -> String {
    let num = |v: f64| format_number(v, precision, minify);
    let pt = |p: Point| format!("{} {}", num(p.x), num(p.y));

    let mut d = String::new();
    for el in path.elements() {
        if !minify && !d.is_empty() {
            d.push(' ');
        }
        match el {
            PathEl::MoveTo(p) => {
                d.push('M');
                d.push_str(&pt(*p));
            }
            PathEl::LineTo(p) => {
                d.push('L');
                d.push_str(&pt(*p));
            }
            PathEl::QuadTo(c, p) => {
                d.push_str(&format!("Q{} {}", pt(*c), pt(*p)));
            }
            PathEl::CurveTo(c1, c2, p) => {
                d.push_str(&format!("C{} {} {}", pt(*c1), pt(*c2), pt(*p)));
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

/// Painting operator vocabulary of a page-description language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operators {
    /// `m l c h`
    Pdf,
    /// `moveto lineto curveto closepath`
    PostScript,
}

impl Operators {
    fn names(self) -> [&'static str; 4] {
        match self {
            Operators::Pdf => ["m", "l", "c", "h"],
            Operators::PostScript => ["moveto", "lineto", "curveto", "closepath"],
        }
    }
}

/// Convert a path into construction operators, one per line
///
/// Neither PDF nor PostScript has quadratic segments, so those are raised
/// to cubics.
pub fn path_to_operators(path: &BezPath, ops: Operators, precision: usize) -> String {
    let [move_to, line_to, curve_to, close] = ops.names();
    let num = |v: f64| format_number(v, precision, false);
    let pt = |p: Point| format!("{} {}", num(p.x), num(p.y));

    let mut out = String::new();
    let mut current = Point::ZERO;
    let mut start = Point::ZERO;
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                out.push_str(&format!("{} {}\n", pt(p), move_to));
                current = p;
                start = p;
            }
            PathEl::LineTo(p) => {
                out.push_str(&format!("{} {}\n", pt(p), line_to));
                current = p;
            }
            PathEl::QuadTo(c, p) => {
                let cubic = QuadBez::new(current, c, p).raise();
                out.push_str(&format!(
                    "{} {} {} {}\n",
                    pt(cubic.p1),
                    pt(cubic.p2),
                    pt(cubic.p3),
                    curve_to
                ));
                current = p;
            }
            PathEl::CurveTo(c1, c2, p) => {
                out.push_str(&format!("{} {} {} {}\n", pt(c1), pt(c2), pt(p), curve_to));
                current = p;
            }
            PathEl::ClosePath => {
                out.push_str(close);
                out.push('\n');
                current = start;
            }
        }
    }
    out
}
