use std::collections::HashSet;

use fractal_gen::curves::{Gosper, HTree, Hilbert, Koch};
use fractal_gen::math::is_closed;
use fractal_gen::shapes::initial_shape;
use fractal_gen::traits::CurveGenerator;
use glam::Vec3;

fn segment_length(points: &[Vec3], segment: usize) -> f32 {
    points[2 * segment].distance(points[2 * segment + 1])
}

#[cfg(test)]
mod koch_tests {
    use super::*;

    #[test]
    fn test_point_count_per_iteration() {
        let mut points = initial_shape("triangle", 3.0, 6.0).unwrap();
        for _ in 0..4 {
            let edges = points.len() - 1;
            let next = Koch.generate(&points, 1);
            assert_eq!(next.len(), 4 * edges + 1);
            points = next;
        }
    }

    #[test]
    fn test_closed_seed_stays_closed() {
        let seed = initial_shape("hexagon", 3.0, 6.0).unwrap();
        let out = Koch.generate(&seed, 3);
        assert!(is_closed(&out));
    }

    #[test]
    fn test_degenerate_edge_is_skipped() {
        let a = Vec3::ZERO;
        let b = Vec3::new(3.0, 0.0, 0.0);
        let out = Koch.generate(&[a, a, b], 1);
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|p| p.is_finite()));
        assert_eq!(out[0], a);
        assert_eq!(out[4], b);
    }

    #[test]
    fn test_matches_across_iteration_calls() {
        let seed = initial_shape("triangle", 3.0, 6.0).unwrap();
        let twice = Koch.generate(&Koch.generate(&seed, 1), 1);
        assert_eq!(Koch.generate(&seed, 2), twice);
    }
}

#[cfg(test)]
mod gosper_tests {
    use super::*;

    #[test]
    fn test_point_count() {
        let seed = initial_shape("hexagon", 3.0, 6.0).unwrap();
        let out = Gosper.generate(&seed, 2);
        let first = 3 * 6 + 1;
        assert_eq!(out.len(), 3 * (first - 1) + 1);
    }

    #[test]
    fn test_zero_iterations_returns_seed() {
        let seed = initial_shape("triangle", 3.0, 6.0).unwrap();
        assert_eq!(Gosper.generate(&seed, 0), seed);
    }

    #[test]
    fn test_degenerate_edges_produce_no_nan() {
        let out = Gosper.generate(&[Vec3::X, Vec3::X, Vec3::X], 2);
        assert_eq!(out, vec![Vec3::X]);
    }
}

#[cfg(test)]
mod h_tree_tests {
    use super::*;

    #[test]
    fn test_generation_sizes_and_lengths() {
        let seed = initial_shape("line", 10.0, 0.0).unwrap();
        let out = HTree.generate(&seed, 3);
        assert_eq!(out.len(), 2 * (1 + 2 + 4 + 8));

        let generations = [(0..1, 10.0), (1..3, 5.0), (3..7, 2.5), (7..15, 1.25)];
        for (range, expected) in generations {
            for segment in range {
                assert!((segment_length(&out, segment) - expected).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_children_centered_on_parent_endpoints() {
        let seed = [Vec3::new(-5.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0)];
        let out = HTree.generate(&seed, 2);
        for (child, endpoint) in [(1, seed[0]), (2, seed[1])] {
            let mid = (out[2 * child] + out[2 * child + 1]) * 0.5;
            assert!((mid - endpoint).length() < 1e-6);
        }
        // second generation is parallel to the seed again
        let v = out[7] - out[6];
        assert!(v.y.abs() < 1e-6);
    }

    #[test]
    fn test_zero_iterations_returns_seed_segments() {
        let seed = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE];
        assert_eq!(HTree.generate(&seed, 0), seed);
    }
}

#[cfg(test)]
mod hilbert_tests {
    use super::*;

    #[test]
    fn test_space_filling_grid_walk() {
        let seed = initial_shape("hilbert", 4.0, 0.0).unwrap();
        for iterations in 0..4u32 {
            let side = 1i32 << (iterations + 1);
            let step = 4.0 / (side - 1) as f32;
            let curve = Hilbert.generate(&seed, iterations);
            assert_eq!(curve.len(), (side * side) as usize);

            let cells: Vec<(i32, i32)> = curve
                .iter()
                .map(|p| {
                    let fx = (p.x + 2.0) / step;
                    let fy = (p.y + 2.0) / step;
                    assert!((fx - fx.round()).abs() < 1e-3, "off-grid x {}", p.x);
                    assert!((fy - fy.round()).abs() < 1e-3, "off-grid y {}", p.y);
                    (fx.round() as i32, fy.round() as i32)
                })
                .collect();

            let unique: HashSet<_> = cells.iter().copied().collect();
            assert_eq!(unique.len(), cells.len(), "a grid cell was revisited");
            assert!(cells.iter().all(|&(x, y)| (0..side).contains(&x) && (0..side).contains(&y)));
            for pair in cells.windows(2) {
                let d = (pair[1].0 - pair[0].0).abs() + (pair[1].1 - pair[0].1).abs();
                assert_eq!(d, 1);
            }
        }
    }

    #[test]
    fn test_order_one_visits_seed_corners() {
        let seed = initial_shape("hilbert", 2.0, 0.0).unwrap();
        let curve = Hilbert.generate(&seed, 0);
        assert_eq!(curve.len(), 4);
        for corner in &seed {
            assert!(curve.iter().any(|p| (*p - *corner).length() < 1e-6));
        }
    }

    #[test]
    fn test_flat_bounding_box_uses_unit_extent() {
        let seed = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)];
        let curve = Hilbert.generate(&seed, 1);
        let width = curve.iter().map(|p| p.x).fold(f32::MIN, f32::max)
            - curve.iter().map(|p| p.x).fold(f32::MAX, f32::min);
        assert!((width - 1.0).abs() < 1e-5);
    }
}
