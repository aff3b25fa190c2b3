//! Encapsulated PostScript writer

use crate::font::MM_TO_PT;
use crate::scene::{Canvas, Color};

use super::path::{format_number, path_to_operators, Operators};

/// Serialize a canvas as an EPSF-3.0 document sized in points
pub fn canvas_to_eps(canvas: &Canvas) -> String {
    let width_pt = canvas.width() * MM_TO_PT;
    let height_pt = canvas.height() * MM_TO_PT;
    let num = |v: f64| format_number(v, 4, false);

    let mut out = String::new();
    out.push_str("%!PS-Adobe-3.0 EPSF-3.0\n");
    out.push_str(&format!(
        "%%BoundingBox: 0 0 {} {}\n",
        width_pt.ceil() as i64,
        height_pt.ceil() as i64
    ));
    out.push_str(&format!(
        "%%HiResBoundingBox: 0 0 {} {}\n",
        num(width_pt),
        num(height_pt)
    ));
    out.push_str(&format!("%%Creator: {}\n", env!("CARGO_PKG_NAME")));
    out.push_str("%%LanguageLevel: 2\n");
    out.push_str("%%EndComments\n");

    out.push_str("gsave\n");
    let scale = format_number(MM_TO_PT, 6, false);
    out.push_str(&format!("{scale} {scale} scale\n"));

    out.push_str(&set_color(canvas.background()));
    out.push_str(&format!(
        "newpath\n0 0 moveto\n{w} 0 lineto\n{w} {h} lineto\n0 {h} lineto\nclosepath\nfill\n",
        w = num(canvas.width()),
        h = num(canvas.height())
    ));
    for item in canvas.items() {
        let ops = path_to_operators(&item.path, Operators::PostScript, 4);
        if ops.is_empty() {
            continue;
        }
        out.push_str(&set_color(item.fill));
        out.push_str("newpath\n");
        out.push_str(&ops);
        out.push_str("fill\n");
    }
    out.push_str("grestore\nshowpage\n%%EOF\n");
    out
}

fn set_color(color: Color) -> String {
    let [r, g, b] = color.unit_components().map(|c| format_number(c, 4, false));
    format!("{r} {g} {b} setrgbcolor\n")
}
