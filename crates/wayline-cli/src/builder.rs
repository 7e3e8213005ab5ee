//! Interactive route assembly
//!
//! Prompts on the terminal's own input stream, field by field: route
//! name, current-position X/Y, then the starting and destination points.
//! Fail-fast: the first bad input abandons the whole assembly and the
//! caller reports it as an element-construction failure.

use std::io::{BufRead, Write};

use wayline_core::{Coordinates, Location, Result, WaylineError};

/// Name given to a location when the user leaves the prompt blank
pub const DEFAULT_LOCATION_NAME: &str = "Unnamed";

/// The constructor fields of a route, before an ID is bound
#[derive(Debug, Clone)]
pub struct RouteDraft {
    pub name: String,
    pub coordinates: Coordinates,
    pub from: Location,
    pub to: Location,
}

/// Assemble a route draft from interactive input
///
/// # Errors
///
/// Returns `ElementConstruction` on the first unparseable field, on
/// trailing garbage after a coordinate line, or on end of input.
pub fn read_route_draft<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<RouteDraft> {
    writeln!(output, "Assembling a new route...")?;

    write!(output, "Enter a name (can't be empty): ")?;
    output.flush()?;
    let name = read_line(input)?;

    writeln!(
        output,
        "Enter the X and Y coordinates of the current position, separated by a comma:"
    )?;
    let (x, y) = read_xy(input)?;
    let coordinates = Coordinates::new(x, y);

    let from = read_location(input, output, "starting")?;
    let to = read_location(input, output, "destination")?;

    Ok(RouteDraft {
        name,
        coordinates,
        from,
        to,
    })
}

fn read_location<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    kind: &str,
) -> Result<Location> {
    writeln!(
        output,
        "Enter the X, Y and Z coordinates of the {kind} point, separated by a comma:"
    )?;
    let (x, y, z) = read_xyz(input)?;

    writeln!(output, "Enter that location's name (leave blank for the default):")?;
    let name = read_line(input)?;
    let name = if name.trim().is_empty() {
        DEFAULT_LOCATION_NAME.to_string()
    } else {
        name
    };

    Location::new(x, y, z, name).map_err(|err| construction(err.to_string()))
}

/// Read one line, stripped of its line ending; EOF is a construction
/// failure.
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(construction("unexpected end of input"));
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

fn read_xy<R: BufRead>(input: &mut R) -> Result<(i64, i64)> {
    let line = read_line(input)?;
    let tokens = split_values(&line);
    if tokens.len() != 2 {
        return Err(construction(if tokens.len() > 2 {
            "unexpected characters at the end of the line"
        } else {
            "could not read the X and Y values"
        }));
    }
    let x = parse_i64(tokens[0], "X")?;
    let y = parse_i64(tokens[1], "Y")?;
    Ok((x, y))
}

fn read_xyz<R: BufRead>(input: &mut R) -> Result<(i64, i64, f32)> {
    let line = read_line(input)?;
    let tokens = split_values(&line);
    if tokens.len() != 3 {
        return Err(construction(if tokens.len() > 3 {
            "unexpected characters at the end of the line"
        } else {
            "could not read the X, Y and Z values"
        }));
    }
    let x = parse_i64(tokens[0], "X")?;
    let y = parse_i64(tokens[1], "Y")?;
    let z = tokens[2]
        .parse::<f32>()
        .map_err(|_| construction("could not read the Z value"))?;
    Ok((x, y, z))
}

fn split_values(line: &str) -> Vec<&str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect()
}

fn parse_i64(token: &str, axis: &str) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|_| construction(format!("could not read the {axis} value")))
}

fn construction(reason: impl Into<String>) -> WaylineError {
    WaylineError::ElementConstruction {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn draft_from(input: &str) -> Result<RouteDraft> {
        let mut output = Vec::new();
        read_route_draft(&mut Cursor::new(input.to_string()), &mut output)
    }

    #[test]
    fn test_full_assembly() {
        let draft = draft_from("Coastal run\n1, 2\n0, 0, 0\nPier\n3, 4, 0\n\n").unwrap();

        assert_eq!(draft.name, "Coastal run");
        assert_eq!(draft.coordinates, Coordinates::new(1, 2));
        assert_eq!(draft.from.name, "Pier");
        // Blank destination name falls back to the default.
        assert_eq!(draft.to.name, DEFAULT_LOCATION_NAME);
        assert_eq!(draft.to.x, 3);
        assert_eq!(draft.to.y, 4);
    }

    #[test]
    fn test_bad_xy_fails_fast() {
        let result = draft_from("name\nnot numbers\n");
        assert!(matches!(
            result,
            Err(WaylineError::ElementConstruction { .. })
        ));
    }

    #[test]
    fn test_trailing_garbage_is_rejected() {
        let result = draft_from("name\n1, 2, 3\n");
        assert!(matches!(
            result,
            Err(WaylineError::ElementConstruction { .. })
        ));
    }

    #[test]
    fn test_eof_mid_assembly_fails() {
        let result = draft_from("name\n1, 2\n");
        assert!(matches!(
            result,
            Err(WaylineError::ElementConstruction { .. })
        ));
    }

    #[test]
    fn test_non_finite_z_is_rejected() {
        let result = draft_from("name\n1, 2\n0, 0, NaN\nBase\n1, 1, 1\nCamp\n");
        assert!(matches!(
            result,
            Err(WaylineError::ElementConstruction { .. })
        ));
    }
}
