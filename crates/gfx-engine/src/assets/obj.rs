use std::io::BufRead;

use crate::math::{Mesh, Triangle, Vec3};

use super::ObjError;

/// Parses OBJ geometry from `reader`.
///
/// Supported statements:
/// - `v x y z [w]` vertex position (`w` ignored)
/// - `f a b c ...` face; each corner is `i`, `i/t`, `i//n` or `i/t/n`,
///   1-based, negative indices count back from the latest vertex.
///   Polygons are fan-triangulated around their first corner.
///
/// Everything else is skipped.
pub fn parse_obj(reader: impl BufRead) -> Result<Mesh, ObjError> {
    let mut vertices: Vec<Vec3> = Vec::new();
    let mut triangles: Vec<Triangle> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        let content = match line.split_once('#') {
            Some((before, _)) => before,
            None => line.as_str(),
        };
        let mut tokens = content.split_whitespace();

        match tokens.next() {
            Some("v") => vertices.push(parse_vertex(tokens, line_no)?),
            Some("f") => {
                let corners = tokens
                    .map(|t| resolve_index(t, vertices.len(), line_no).map(|i| vertices[i]))
                    .collect::<Result<Vec<Vec3>, ObjError>>()?;

                if corners.len() < 3 {
                    return Err(ObjError::syntax(
                        line_no,
                        format!("face needs at least 3 vertices, got {}", corners.len()),
                    ));
                }

                for k in 1..corners.len() - 1 {
                    triangles.push(Triangle::new(corners[0], corners[k], corners[k + 1]));
                }
            }
            _ => {}
        }
    }

    Ok(Mesh::new(triangles))
}

fn parse_vertex<'a>(mut tokens: impl Iterator<Item = &'a str>, line: usize) -> Result<Vec3, ObjError> {
    let mut coord = |axis: &str| -> Result<f32, ObjError> {
        let tok = tokens
            .next()
            .ok_or_else(|| ObjError::syntax(line, format!("vertex is missing its {axis} coordinate")))?;
        let value = tok
            .parse::<f32>()
            .map_err(|_| ObjError::syntax(line, format!("invalid number {tok:?}")))?;
        if !value.is_finite() {
            return Err(ObjError::syntax(line, format!("non-finite {axis} coordinate {tok:?}")));
        }
        Ok(value)
    };

    Ok(Vec3::new(coord("x")?, coord("y")?, coord("z")?))
}

/// Maps a face corner token to a 0-based vertex index.
fn resolve_index(token: &str, vertex_count: usize, line: usize) -> Result<usize, ObjError> {
    let raw = token.split('/').next().unwrap_or_default();
    let index: i64 = raw
        .parse()
        .map_err(|_| ObjError::syntax(line, format!("invalid vertex index {token:?}")))?;

    let resolved = match index {
        0 => None,
        i if i > 0 => usize::try_from(i - 1).ok(),
        i => usize::try_from(-i).ok().and_then(|back| vertex_count.checked_sub(back)),
    };

    resolved
        .filter(|&i| i < vertex_count)
        .ok_or_else(|| {
            ObjError::syntax(
                line,
                format!("vertex index {index} out of range ({vertex_count} vertices defined)"),
            )
        })
}
