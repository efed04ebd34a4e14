use anyhow::{anyhow, bail, Context, Result};
use nalgebra_glm::DVec2;

/// Parses control points, one per line, as `x y` or `x,y`.
///
/// Blank lines and anything after a `#` are ignored.  Integer pixel
/// coordinates parse like any other number.
pub(crate) fn parse_points(text: &str) -> Result<Vec<DVec2>> {
    let mut out = vec![];
    for (i, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let p = parse_point(line).with_context(|| format!("line {}: {line:?}", i + 1))?;
        out.push(p);
    }
    Ok(out)
}

fn parse_point(line: &str) -> Result<DVec2> {
    let mut fields = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty());
    let mut next = |axis: &str| -> Result<f64> {
        let s = fields.next().ok_or_else(|| anyhow!("missing {axis} coordinate"))?;
        let v: f64 = s
            .parse()
            .with_context(|| format!("bad {axis} coordinate {s:?}"))?;
        if !v.is_finite() {
            bail!("{axis} coordinate {s:?} is not finite");
        }
        Ok(v)
    };
    let x = next("x")?;
    let y = next("y")?;
    if let Some(extra) = fields.next() {
        bail!("unexpected trailing field {extra:?}");
    }
    Ok(DVec2::new(x, y))
}

/// Formats curve points as `x y` lines
pub(crate) fn format_points(points: &[DVec2]) -> String {
    let mut out = String::new();
    for p in points {
        out += &format!("{} {}\n", p.x, p.y);
    }
    out
}
