use flo_line_raster::*;

///
/// Endpoints used by the tests that check properties over a range of lines
///
fn test_lines() -> Vec<(Vector3, Vector3)> {
    let targets = [
        Vector3::new(0, 0, 0),
        Vector3::new(3, -2, 5),
        Vector3::new(-6, 6, 1),
        Vector3::new(5, 5, 5),
        Vector3::new(6, 1, 0),
        Vector3::new(2, 2, -1),
        Vector3::new(7, -3, 2),
    ];

    let mut lines = vec![];
    for x in -6..=6 {
        for y in -6..=6 {
            for z in -6..=6 {
                for target in targets.iter() {
                    lines.push((Vector3::new(x, y, z), *target));
                }
            }
        }
    }

    lines
}

fn major_axis(from: Vector3, to: Vector3) -> usize {
    let delta = (to - from).abs();

    if delta.x >= delta.y && delta.x >= delta.z {
        0
    } else if delta.y >= delta.z {
        1
    } else {
        2
    }
}

#[test]
fn single_point_line() {
    let mut line = LineRasterizer::new(Vector3::new(3, 3, 3), Vector3::new(3, 3, 3));

    assert!(line.next_point() == Some(Vector3::new(3, 3, 3)));
    assert!(line.next_point() == None);
    assert!(line.is_done());
}

#[test]
fn line_with_three_axes() {
    let points = LineRasterizer::new(Vector3::new(0, 0, 0), Vector3::new(10, 5, -4)).collect::<Vec<_>>();
    let expected = vec![
        (0, 0, 0), (1, 0, 0), (2, 1, -1), (3, 1, -1), (4, 2, -2), (5, 3, -2),
        (6, 4, -3), (7, 4, -3), (8, 5, -4), (9, 5, -4), (10, 5, -4),
    ].into_iter().map(Vector3::from).collect::<Vec<_>>();

    assert!(points == expected, "Unexpected points {:?}", points);
}

#[test]
fn major_axis_is_x() {
    let mut line = LineRasterizer::new(Vector3::new(0, 0, 0), Vector3::new(10, 5, -4));

    assert!(line.major_axis() == None);
    line.next_point();
    assert!(line.major_axis() == Some(0));
}

#[test]
fn backwards_diagonal() {
    let points = LineRasterizer::new(Vector3::new(5, 5, 5), Vector3::new(0, 0, 0)).collect::<Vec<_>>();
    let expected = (0..=5).rev().map(|p| Vector3::new(p, p, p)).collect::<Vec<_>>();

    assert!(points == expected, "Unexpected points {:?}", points);
}

#[test]
fn axis_aligned_line() {
    let points = LineRasterizer::new(Vector3::new(0, 7, 0), Vector3::new(0, 0, 0)).collect::<Vec<_>>();
    let expected = (0..=7).rev().map(|y| Vector3::new(0, y, 0)).collect::<Vec<_>>();

    assert!(points == expected, "Unexpected points {:?}", points);
}

#[test]
fn exhaustion_is_idempotent() {
    let mut line = LineRasterizer::new(Vector3::new(0, 0, 0), Vector3::new(2, 1, 0));

    while line.next_point().is_some() { }

    for _ in 0..10 {
        assert!(line.next_point() == None);
        assert!(line.from() == Vector3::new(2, 1, 0));
    }
}

#[test]
fn point_count_is_largest_delta_plus_one() {
    for (from, to) in test_lines() {
        let points      = LineRasterizer::new(from, to).collect::<Vec<_>>();
        let expected    = from.chebyshev_distance(&to) as usize + 1;

        assert!(points.len() == expected, "{:?} -> {:?} generated {} points (expected {})", from, to, points.len(), expected);
        assert!(points[0] == from, "{:?} -> {:?} did not start at the start", from, to);
        assert!(points[points.len()-1] == to, "{:?} -> {:?} did not finish at the end ({:?})", from, to, points);
    }
}

#[test]
fn size_hint_is_exact() {
    let mut line = LineRasterizer::new(Vector3::new(0, 0, 0), Vector3::new(10, 5, -4));

    for remaining in (0..=11).rev() {
        assert!(line.len() == remaining, "Expected {} points remaining, got {}", remaining, line.len());
        line.next();
    }
}

#[test]
fn steps_are_single_units() {
    for (from, to) in test_lines() {
        let points  = LineRasterizer::new(from, to).collect::<Vec<_>>();
        let major   = major_axis(from, to);

        for pair in points.windows(2) {
            let step = pair[1] - pair[0];

            assert!(step[major].abs() == 1, "{:?} -> {:?}: major axis did not move one unit ({:?})", from, to, pair);
            assert!(step.abs().max_component() == 1, "{:?} -> {:?}: moved more than one unit ({:?})", from, to, pair);
        }
    }
}

#[test]
fn axes_are_monotonic() {
    for (from, to) in test_lines() {
        let points  = LineRasterizer::new(from, to).collect::<Vec<_>>();
        let delta   = to - from;

        for pair in points.windows(2) {
            let step = pair[1] - pair[0];

            for axis in 0..3 {
                assert!(step[axis] * delta[axis] >= 0, "{:?} -> {:?}: axis {} moved backwards ({:?})", from, to, axis, pair);
                assert!(delta[axis] != 0 || step[axis] == 0, "{:?} -> {:?}: axis {} should not move ({:?})", from, to, axis, pair);
            }
        }
    }
}

#[test]
fn reverse_line_follows_the_same_path() {
    for (from, to) in test_lines() {
        let forward     = LineRasterizer::new(from, to).collect::<Vec<_>>();
        let mut reverse = LineRasterizer::new(to, from).collect::<Vec<_>>();
        reverse.reverse();

        // Tie-breaks can differ, but the two lines should never be more than one unit apart
        assert!(forward.len() == reverse.len(), "{:?} -> {:?}: lengths differ", from, to);
        for (a, b) in forward.iter().zip(reverse.iter()) {
            assert!(a.chebyshev_distance(b) <= 1, "{:?} -> {:?}: {:?} and {:?} are too far apart", from, to, a, b);
        }
    }
}

#[test]
fn points_stay_close_to_ideal_line() {
    for (from, to) in test_lines() {
        if from == to { continue; }

        let major   = major_axis(from, to);
        let delta   = to - from;
        let span    = delta[major];

        for point in LineRasterizer::new(from, to) {
            // Distance from the ideal line along each axis, scaled by the major axis span
            let t = point[major] - from[major];

            for axis in 0..3 {
                let offset = (point[axis] - from[axis]) * span - t * delta[axis];
                assert!(offset.abs() < 2 * span.abs(), "{:?} -> {:?}: {:?} is too far from the line", from, to, point);
            }
        }
    }
}

#[test]
fn restarting_requires_new_rasterizer() {
    let from = Vector3::new(-3, 4, 9);
    let to   = Vector3::new(8, -2, 1);

    let mut line    = LineRasterizer::new(from, to);
    let first       = line.by_ref().collect::<Vec<_>>();
    let second      = line.collect::<Vec<_>>();
    let again       = LineRasterizer::new(from, to).collect::<Vec<_>>();

    assert!(second.is_empty());
    assert!(first == again);
}

#[test]
fn line_spanning_whole_i32_range() {
    let from = Vector3::new(i32::MIN, 0, 0);
    let to   = Vector3::new(i32::MAX, 1, -1);

    // 2^32 points, which is more than fits in an i32
    let mut line = LineRasterizer::new(from, to);
    assert!(line.len() as u64 == 1u64 << 32, "Unexpected length {}", line.len());

    let start       = line.by_ref().take(5).collect::<Vec<_>>();
    let expected    = (0..5).map(|offset| Vector3::new(i32::MIN + offset, 0, 0)).collect::<Vec<_>>();

    assert!(start == expected, "Unexpected points {:?}", start);
    assert!(line.major_axis() == Some(0));
    assert!(line.len() as u64 == (1u64 << 32) - 5, "Unexpected length {}", line.len());
}

#[test]
fn diagonal_across_whole_i32_range() {
    let mut line = LineRasterizer::new(Vector3::new(i32::MIN, i32::MIN, i32::MIN), Vector3::new(i32::MAX, i32::MAX, i32::MAX));

    let start       = line.by_ref().take(4).collect::<Vec<_>>();
    let expected    = (0..4).map(|offset| Vector3::new(i32::MIN + offset, i32::MIN + offset, i32::MIN + offset)).collect::<Vec<_>>();

    assert!(start == expected, "Unexpected points {:?}", start);
    assert!(line.len() as u64 == (1u64 << 32) - 4, "Unexpected length {}", line.len());
}
