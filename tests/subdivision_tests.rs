use fractal_gen::cells::{SquareCell, TriangleCell};
use fractal_gen::math::is_closed;
use fractal_gen::shapes::initial_shape;
use fractal_gen::subdivision::{
    circle, CirclePacking, Sierpinski, Sierpinski3d, TSquare, TSquare3d, Vicsek, Vicsek3d,
    VicsekPattern,
};
use fractal_gen::traits::{CellGenerator, FractalCell, Generations};
use glam::Vec3;

fn unit_square() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 0.0),
    ]
}

fn assert_branching<G: CellGenerator>(gen: &G, expected: usize) {
    assert_eq!(gen.branching(), expected, "{}", gen.name());
    for depth in 0..4u32 {
        let cells = gen.generate(depth, Generations::Current);
        assert_eq!(cells.len(), expected.pow(depth), "{} at depth {}", gen.name(), depth);
    }
    let mut children = Vec::new();
    gen.subdivide(&gen.root(), &mut children);
    assert_eq!(children.len(), expected);
}

#[cfg(test)]
mod branching_tests {
    use super::*;

    #[test]
    fn test_children_per_parent() {
        let triangle = initial_shape("sierpinski", 3.0, 0.0).unwrap();
        assert_branching(&Sierpinski::from_seed(&triangle), 3);
        assert_branching(&Vicsek::from_seed(&unit_square()), 5);
        assert_branching(&TSquare::from_seed(&unit_square()), 4);
        assert_branching(&TSquare3d::new(Vec3::ZERO, 3.0), 8);
        assert_branching(&Vicsek3d::new(Vec3::ZERO, 3.0, VicsekPattern::Standard7), 7);
        assert_branching(&Vicsek3d::new(Vec3::ZERO, 3.0, VicsekPattern::UnionFaceRules), 15);
        assert_branching(&Sierpinski3d::new(Vec3::ZERO, 3.0), 4);
        assert_branching(&CirclePacking::new(&initial_shape("circle", 1.0, 0.0).unwrap(), 3.0), 4);
    }

    #[test]
    fn test_zero_iterations_is_the_root() {
        let gen = Vicsek::from_seed(&unit_square());
        assert_eq!(gen.generate(0, Generations::Current), vec![gen.root()]);
        assert_eq!(gen.generate(0, Generations::All), vec![gen.root()]);

        let tetra = Sierpinski3d::new(Vec3::ZERO, 2.0);
        assert_eq!(tetra.generate(0, Generations::All), vec![tetra.root()]);
    }

    #[test]
    fn test_all_generations_accumulate_in_order() {
        let gen = TSquare::from_seed(&unit_square());
        let all = gen.generate(2, Generations::All);
        assert_eq!(all.len(), 1 + 4 + 16);
        assert_eq!(all[0], gen.root());
        assert_eq!(&all[1..5], gen.generate(1, Generations::Current).as_slice());
        assert_eq!(&all[5..], gen.generate(2, Generations::Current).as_slice());
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_sierpinski_two_iterations() {
        let seed = initial_shape("sierpinski", 10.0, 0.0).unwrap();
        let root_edge = seed[0].distance(seed[1]);
        let cells = Sierpinski::from_seed(&seed).generate(2, Generations::Current);
        assert_eq!(cells.len(), 9);
        for cell in &cells {
            let [a, b, c] = cell.corners();
            for edge in [a.distance(b), b.distance(c), c.distance(a)] {
                assert!((edge - root_edge / 4.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_vicsek_unit_square() {
        let cells = Vicsek::from_seed(&unit_square()).generate(1, Generations::Current);
        assert_eq!(cells.len(), 5);
        let third = 1.0 / 3.0;
        let center = Vec3::new(0.5, 0.5, 0.0);
        assert_eq!(cells[0], SquareCell::new(center, third));
        for cell in &cells[1..] {
            let offset = (cell.center - center).abs();
            assert!((offset.x - third).abs() < 1e-6);
            assert!((offset.y - third).abs() < 1e-6);
            assert!((cell.size - third).abs() < 1e-6);
        }
    }

    #[test]
    fn test_sierpinski_3d_volumes_halve_edges() {
        let gen = Sierpinski3d::new(Vec3::new(0.0, 1.0, 0.0), 4.0);
        let root_edge = gen.root().size();
        let cells = gen.generate(3, Generations::Current);
        assert_eq!(cells.len(), 64);
        assert!(cells.iter().all(|c| (c.size() - root_edge / 8.0).abs() < 1e-4));
    }

    #[test]
    fn test_root_from_explicit_triangle() {
        let tri = TriangleCell::new(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0), Vec3::new(0.0, 4.0, 0.0));
        let cells = Sierpinski::new(tri).generate(1, Generations::Current);
        assert_eq!(cells[1].corners()[1], Vec3::new(4.0, 0.0, 0.0));
    }
}

#[cfg(test)]
mod polyline_tests {
    use super::*;

    #[test]
    fn test_every_loop_is_closed() {
        let path = Vicsek::from_seed(&unit_square()).generate_polyline(2, Generations::Current);
        assert_eq!(path.len(), 25 * 5);
        for chunk in path.chunks(5) {
            assert!(is_closed(chunk));
        }

        let seed = initial_shape("sierpinski", 5.0, 0.0).unwrap();
        let path = Sierpinski::from_seed(&seed).generate_polyline(2, Generations::Current);
        assert_eq!(path.len(), 9 * 4);
        for chunk in path.chunks(4) {
            assert!(is_closed(chunk));
        }
    }

    #[test]
    fn test_circle_loops_are_closed_and_scaled() {
        let template = initial_shape("circle", 1.0, 0.0).unwrap();
        let loops = circle::generate_loops(&template, 2, 3.0, Generations::All);
        assert_eq!(loops.len(), 1 + 4 + 16);
        for l in &loops {
            assert!(is_closed(l));
        }
        // root loop has the root radius
        assert!(loops[0].iter().all(|p| (p.length() - 3.0).abs() < 1e-4));

        let current = circle::generate_loops(&template, 2, 3.0, Generations::Current);
        assert_eq!(current.len(), 16);
    }

    #[test]
    fn test_circle_loops_follow_each_subtree() {
        let template = initial_shape("circle", 1.0, 0.0).unwrap();
        let loops = circle::generate_loops(&template, 2, 3.0, Generations::All);
        let center = |l: &Vec<Vec3>| {
            let ring = &l[..l.len() - 1];
            ring.iter().copied().sum::<Vec3>() / ring.len() as f32
        };
        assert!((center(&loops[1]) - Vec3::new(0.0, 3.0, 0.0)).length() < 1e-4);
        assert!((center(&loops[2]) - Vec3::new(0.0, 4.0, 0.0)).length() < 1e-4);
        assert!((center(&loops[6]) - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_flat_strip_follows_each_subtree() {
        let template = initial_shape("circle", 1.0, 0.0).unwrap();
        let flat = circle::generate_flat(&template, 2);
        // 65-point closed circle plus one separator each
        let stride = template.len() + 1;
        assert_eq!(flat.len(), 21 * stride);
        let third = &flat[2 * stride..3 * stride - 2];
        let center = third.iter().copied().sum::<Vec3>() / third.len() as f32;
        assert!((center - Vec3::new(0.0, 4.0, 0.0)).length() < 1e-4);
    }
}
