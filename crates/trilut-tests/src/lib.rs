//! Integration tests for trilut crates.
//!
//! These tests run the whole path a color pipeline takes: LUT text on disk
//! -> [`trilut_grid::Grid`] -> neighbor lookup -> trilinear interpolation.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::io::Write;
    use tempfile::tempdir;
    use trilut_grid::{
        locate_neighbors, read_lut, read_lut_auto, Channel, EdgeMode, Grid, GridError, Sampler,
    };
    use trilut_math::{trilinear, trilinear_points, InterpError};

    /// Writes a LUT the way grading tools dump them: one row per entry.
    fn write_lut(path: &std::path::Path, grid: &Grid) {
        let mut file = std::fs::File::create(path).expect("create failed");
        writeln!(file, "# {}^3 test LUT", grid.size()).expect("write failed");
        for row in grid.data().chunks(grid.size()) {
            let row: Vec<String> = row.iter().map(|v| format!("{:.9}", v)).collect();
            writeln!(file, "{}", row.join(" ")).expect("write failed");
        }
    }

    /// A smooth non-linear grade: channel mix plus a mild curve.
    fn graded(size: usize) -> Grid {
        let n = (size - 1) as f64;
        Grid::from_fn(size, |ch, i, j, k| {
            let (r, g, b) = (i as f64 / n, j as f64 / n, k as f64 / n);
            match ch {
                Channel::Red => (0.9 * r + 0.1 * g).powf(1.1),
                Channel::Green => 0.8 * g + 0.1 * r + 0.1 * b,
                Channel::Blue => b * b,
            }
        })
        .expect("graded grid")
    }

    #[test]
    fn test_file_to_sample_identity() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("IdentityLUT33.txt");
        let identity = Grid::from_fn(33, |ch, i, j, k| [i, j, k][ch.index()] as f64 / 32.0).unwrap();
        write_lut(&path, &identity);

        let grid = read_lut(&path, 33).expect("read failed");
        let sampler = Sampler::new(&grid);
        let step = sampler.step();

        let q = [150.0, 230.0, 71.0];
        let s = sampler.sample(q).expect("sample failed");
        assert_eq!(s.query, q);
        for c in 0..3 {
            assert_abs_diff_eq!(s.rgb[c], q[c] / step / 32.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_auto_size_matches_explicit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graded.txt");
        write_lut(&path, &graded(9));

        let explicit = read_lut(&path, 9).unwrap();
        let auto = read_lut_auto(&path).unwrap();
        assert_eq!(explicit.size(), 9);
        assert_eq!(auto, explicit);
    }

    #[test]
    fn test_wrong_declared_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graded.txt");
        write_lut(&path, &graded(9));
        assert!(matches!(read_lut(&path, 33), Err(GridError::InvalidSize(_))));
    }

    #[test]
    fn test_green_channel_like_manual_path() {
        // Locate, rescale by step, interpolate one channel by hand.
        let grid = graded(33);
        let q = [150.0, 230.0, 71.0];
        let n = locate_neighbors(q, &grid).unwrap();
        let point = q.map(|v| v / n.step);
        let manual = trilinear(point, &n.green).unwrap();

        let s = Sampler::new(&grid).sample(q).unwrap();
        assert_eq!(manual.value, s.rgb[Channel::Green.index()]);
        assert_eq!(manual.coord, point);
    }

    #[test]
    fn test_samples_at_grid_nodes_are_exact() {
        let grid = graded(17);
        let sampler = Sampler::new(&grid).with_extent(17.0);
        for (i, j, k) in [(0, 0, 0), (3, 9, 12), (15, 1, 7), (16, 16, 16)] {
            let s = sampler.sample([i as f64, j as f64, k as f64]).unwrap();
            for ch in Channel::ALL {
                assert_abs_diff_eq!(
                    s.rgb[ch.index()],
                    grid.get(ch, i, j, k).unwrap(),
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_neighbors_bound_every_query() {
        let grid = graded(33);
        for n in 0..=255 {
            let q = [n as f64, (255 - n) as f64, (n * 7 % 256) as f64];
            let cells = locate_neighbors(q, &grid).unwrap();
            for axis in 0..3 {
                let scaled = (q[axis] / cells.step).min(32.0);
                assert!(cells.low[axis] as f64 <= scaled, "axis {} at {:?}", axis, q);
                assert!(scaled <= cells.high()[axis] as f64, "axis {} at {:?}", axis, q);
            }
            for c in cells.red.corners() {
                assert!(c.i <= 32.0 && c.j <= 32.0 && c.k <= 32.0);
            }
        }
    }

    #[test]
    fn test_output_stays_within_cell_values() {
        let grid = graded(33);
        let sampler = Sampler::new(&grid);
        let q = [101.0, 37.5, 249.0];
        let cells = locate_neighbors(q, &grid).unwrap();
        let s = sampler.sample(q).unwrap();
        for ch in Channel::ALL {
            let values: Vec<f64> = cells.channel(ch).corners().iter().map(|c| c.value).collect();
            let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let v = s.rgb[ch.index()];
            assert!(lo - 1e-12 <= v && v <= hi + 1e-12);
        }
    }

    #[test]
    fn test_strict_edge_surfaces_error() {
        let grid = graded(33);
        let strict = Sampler::new(&grid).with_edge_mode(EdgeMode::Strict);
        let clamp = Sampler::new(&grid);
        let q = [255.0, 128.0, 64.0];

        assert!(matches!(strict.sample(q), Err(GridError::IndexOutOfRange { axis: 0, .. })));
        let s = clamp.sample(q).unwrap();
        assert!(s.rgb.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_corner_slice_arity_through_grid() {
        let grid = graded(5);
        let n = locate_neighbors([10.0, 20.0, 30.0], &grid).unwrap();
        let corners = n.blue.corners();
        assert!(trilinear_points([0.5, 0.5, 0.5], &corners).is_ok());
        assert_eq!(
            trilinear_points([0.5, 0.5, 0.5], &corners[1..]),
            Err(InterpError::Arity { expected: 8, found: 7 })
        );
    }

    #[test]
    fn test_batch_matches_single() {
        let grid = graded(33);
        let sampler = Sampler::new(&grid);
        let queries: Vec<[f64; 3]> = (0..64)
            .map(|n| [n as f64 * 4.0, 255.0 - n as f64 * 3.0, (n * 13 % 256) as f64])
            .collect();

        let batch = sampler.sample_batch(&queries);
        assert_eq!(batch.len(), queries.len());
        for (q, r) in queries.iter().zip(batch) {
            assert_eq!(r.unwrap(), sampler.sample(*q).unwrap());
        }
    }

    #[test]
    fn test_grid_shared_across_threads() {
        let grid = graded(17);
        let expected = Sampler::new(&grid).sample([64.0, 128.0, 192.0]).unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| Sampler::new(&grid).sample([64.0, 128.0, 192.0]).unwrap()))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }
}
