use versics::{Body, BodyError, SolverConfig, Vec2};

/// A rope hanging from its first point with a braced box on the free end.
pub fn swing(solver: SolverConfig) -> Result<Body, BodyError> {
    let points: Vec<Vec2> = [
        (450.0, 50.0), (480.0, 50.0), (510.0, 50.0), (540.0, 50.0), (570.0, 50.0),
        (600.0, 50.0), (630.0, 50.0), (660.0, 50.0), (690.0, 50.0), (720.0, 50.0),
        (750.0, 30.0), (750.0, 70.0), (790.0, 30.0), (790.0, 70.0),
    ]
    .into_iter()
    .map(Vec2::from)
    .collect();
    let sticks = [
        (0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7), (7, 8),
        (8, 9), (9, 10), (10, 11), (11, 9), (11, 13), (10, 12), (12, 13), (10, 13),
    ];
    Ok(Body::at_rest(&points, &sticks, &[0])?.with_solver(solver))
}

/// A square cloth hung from its two top corners.
pub fn cloth(columns: usize, rows: usize, spacing: f64, origin: Vec2, solver: SolverConfig) -> Result<Body, BodyError> {
    let mut body = Body::at_rest(&[], &[], &[])?.with_solver(solver);
    if columns == 0 || rows == 0 {
        return Ok(body);
    }
    for row in 0..rows {
        for column in 0..columns {
            body.add_particle(origin + Vec2::new(column as f64 * spacing, row as f64 * spacing));
        }
    }
    let index = |column: usize, row: usize| row * columns + column;
    for row in 0..rows {
        for column in 0..columns {
            if column + 1 < columns {
                body.add_link(index(column, row), index(column + 1, row))?;
            }
            if row + 1 < rows {
                body.add_link(index(column, row), index(column, row + 1))?;
            }
        }
    }
    let top_left = body.particles()[index(0, 0)].position;
    let top_right = body.particles()[index(columns - 1, 0)].position;
    body.pin(index(0, 0), top_left)?;
    body.pin(index(columns - 1, 0), top_right)?;
    Ok(body)
}

/// A free rope lying along the floor, used to show dragging.
pub fn rope(links: usize, length: f64, start: Vec2, solver: SolverConfig) -> Result<Body, BodyError> {
    let points: Vec<Vec2> = (0..=links)
        .map(|i| start + Vec2::new(i as f64 * length, 0.0))
        .collect();
    let pairs: Vec<(usize, usize)> = (0..links).map(|i| (i, i + 1)).collect();
    Ok(Body::at_rest(&points, &pairs, &[])?.with_solver(solver))
}
