use pgmseam::{
    calculate_energy, horizontal_cost, remove_horizontal_seam, remove_vertical_seam, seamcarve,
    trace_horizontal, trace_vertical, vertical_cost, Axis, SeamCarver, SeamError,
    TwoDimensionalMap,
};

// A small linear congruential generator, so the grids below are
// arbitrary but the same on every run.
fn noisy(width: u32, height: u32, seed: u64) -> TwoDimensionalMap<u8> {
    let mut state = seed;
    let data = (0..width * height)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 56) as u8
        })
        .collect();
    TwoDimensionalMap::from_vec(width, height, data).unwrap()
}

fn connected(seam: &[u32]) -> bool {
    seam.windows(2)
        .all(|w| (i64::from(w[0]) - i64::from(w[1])).abs() <= 1)
}

#[test]
fn seams_are_connected_and_span_the_grid() {
    for seed in 0..20 {
        let grid = noisy(7 + seed as u32 % 5, 4 + seed as u32 % 3, seed);
        let energy = calculate_energy(&grid);

        let vertical = trace_vertical(&vertical_cost(&energy));
        assert_eq!(vertical.len(), grid.height() as usize);
        assert!(vertical.iter().all(|&x| x < grid.width()));
        assert!(connected(&vertical));

        let horizontal = trace_horizontal(&horizontal_cost(&energy));
        assert_eq!(horizontal.len(), grid.width() as usize);
        assert!(horizontal.iter().all(|&y| y < grid.height()));
        assert!(connected(&horizontal));
    }
}

#[test]
fn vertical_costs_start_from_the_top_row() {
    let grid = noisy(9, 6, 3);
    let energy = calculate_energy(&grid);
    let cost = vertical_cost(&energy);
    for x in 0..9u32 {
        assert_eq!(cost[(x, 0)], energy[(x, 0)]);
    }
    for (c, e) in cost.as_slice().iter().zip(energy.as_slice()) {
        assert!(c >= e);
    }
}

// The cheapest cell on the bottom row of the cost map is exactly the
// total energy of the traced seam.
#[test]
fn traced_seam_costs_what_the_cost_map_says() {
    let grid = noisy(12, 8, 11);
    let energy = calculate_energy(&grid);
    let cost = vertical_cost(&energy);
    let seam = trace_vertical(&cost);
    let total: u64 = seam
        .iter()
        .enumerate()
        .map(|(y, &x)| energy[(x, y as u32)])
        .sum();
    let cheapest = (0..12u32).map(|x| cost[(x, 7)]).min().unwrap();
    assert_eq!(total, cheapest);
}

#[test]
fn each_removal_shrinks_exactly_one_axis() {
    let mut grid = noisy(6, 5, 7);
    let seam = trace_vertical(&vertical_cost(&calculate_energy(&grid)));
    remove_vertical_seam(&mut grid, &seam);
    assert_eq!(grid.dimensions(), (5, 5));

    let seam = trace_horizontal(&horizontal_cost(&calculate_energy(&grid)));
    remove_horizontal_seam(&mut grid, &seam);
    assert_eq!(grid.dimensions(), (5, 4));
    assert_eq!(grid.as_slice().len(), 20);
}

#[test]
fn carving_is_deterministic() {
    let first = seamcarve(noisy(20, 15, 42), 6, 4).unwrap();
    let second = seamcarve(noisy(20, 15, 42), 6, 4).unwrap();
    assert_eq!(first.dimensions(), (14, 11));
    assert_eq!(first, second);
}

#[test]
fn carving_down_to_one_pixel() {
    let carved = seamcarve(noisy(5, 4, 1), 4, 3).unwrap();
    assert_eq!(carved.dimensions(), (1, 1));
}

// Vertical seams come out before horizontal ones: carving both in one
// call is the same as carving the columns, then the rows.
#[test]
fn columns_are_carved_before_rows() {
    let both = seamcarve(noisy(10, 10, 5), 3, 2).unwrap();
    let columns = seamcarve(noisy(10, 10, 5), 3, 0).unwrap();
    let then_rows = seamcarve(columns, 0, 2).unwrap();
    assert_eq!(both, then_rows);
}

#[test]
fn over_specified_requests_fail_before_any_work() {
    let grid = TwoDimensionalMap::from_vec(2, 2, vec![1u8, 2, 3, 4]).unwrap();
    let mut carver = SeamCarver::new(grid.clone());
    let err = carver.carve(2, 0).unwrap_err();
    assert_eq!(
        err,
        SeamError::Configuration {
            axis: Axis::Columns,
            requested: 2,
            available: 2
        }
    );
    assert_eq!(carver.grid(), &grid);
}

#[test]
fn uniform_grid_keeps_its_value() {
    let grid = TwoDimensionalMap::from_vec(3, 3, vec![128u16; 9]).unwrap();
    assert!(calculate_energy(&grid).as_slice().iter().all(|&e| e == 0));
    let carved = seamcarve(grid, 1, 0).unwrap();
    assert_eq!(carved.dimensions(), (2, 3));
    assert!(carved.as_slice().iter().all(|&p| p == 128));
}
