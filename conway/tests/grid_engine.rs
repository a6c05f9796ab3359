use std::collections::HashSet;

use conway::{GridEngine, GridError};

fn set_cells(engine: &mut GridEngine, cells: &[(usize, usize)]) {
    for &(x, y) in cells {
        engine.set_alive(x, y, true).unwrap();
    }
}

fn assert_alive(engine: &GridEngine, cells: &[(usize, usize)]) {
    for &(x, y) in cells {
        assert!(engine.is_alive(x, y).unwrap(), "expected alive at ({x},{y})");
    }
}

fn collect_live(engine: &GridEngine) -> HashSet<(usize, usize)> {
    engine.cells().filter(|c| c.alive).map(|c| (c.x, c.y)).collect()
}

// Set-based stepper clipped to a width x height box.
fn step_naive(cells: &HashSet<(usize, usize)>, width: usize, height: usize) -> HashSet<(usize, usize)> {
    let mut next = HashSet::new();
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let mut neighbors = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let (nx, ny) = (x + dx, y + dy);
                    if nx < 0 || ny < 0 {
                        continue;
                    }
                    if cells.contains(&(nx as usize, ny as usize)) {
                        neighbors += 1;
                    }
                }
            }
            let alive = cells.contains(&(x as usize, y as usize));
            let next_alive = if alive {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
            if next_alive {
                next.insert((x as usize, y as usize));
            }
        }
    }
    next
}

#[test]
fn reset_leaves_no_live_neighbors() {
    let mut engine = GridEngine::new(5, 5);
    set_cells(&mut engine, &[(0, 0), (1, 1), (2, 2), (4, 4), (3, 0)]);
    engine.reset();
    for y in 0..5 {
        for x in 0..5 {
            assert_eq!(engine.count_live_neighbors(x, y).unwrap(), 0);
        }
    }
    assert_eq!(engine.live_count(), 0);
}

#[test]
fn toggle_twice_restores_state() {
    let mut engine = GridEngine::new(64, 48);
    set_cells(&mut engine, &[(10, 10)]);
    for &(x, y) in &[(10, 10), (0, 0), (63, 47)] {
        let before = engine.is_alive(x, y).unwrap();
        engine.toggle(x, y).unwrap();
        assert_ne!(engine.is_alive(x, y).unwrap(), before);
        engine.toggle(x, y).unwrap();
        assert_eq!(engine.is_alive(x, y).unwrap(), before);
    }
}

#[test]
fn lone_cell_dies() {
    let mut engine = GridEngine::new(5, 5);
    engine.toggle(2, 2).unwrap();
    engine.advance_generation();
    assert!(!engine.is_alive(2, 2).unwrap());
    assert_eq!(engine.live_count(), 0);
    assert_eq!(engine.generation(), 1);
}

#[test]
fn block_is_stable() {
    let mut engine = GridEngine::new(5, 5);
    let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
    set_cells(&mut engine, &block);
    engine.advance_generation();
    assert_alive(&engine, &block);
    assert_eq!(collect_live(&engine), block.into_iter().collect());
}

#[test]
fn blinker_oscillates() {
    let mut engine = GridEngine::new(5, 5);
    let horizontal = [(1, 2), (2, 2), (3, 2)];
    let vertical = [(2, 1), (2, 2), (2, 3)];
    set_cells(&mut engine, &horizontal);

    engine.advance_generation();
    assert_eq!(collect_live(&engine), vertical.into_iter().collect());

    engine.advance_generation();
    assert_eq!(collect_live(&engine), horizontal.into_iter().collect());
}

#[test]
fn blinker_on_edge_loses_clipped_cells() {
    // Vertical phase would need row -1, which does not exist.
    let mut engine = GridEngine::new(5, 5);
    set_cells(&mut engine, &[(1, 0), (2, 0), (3, 0)]);
    engine.advance_generation();
    assert_eq!(collect_live(&engine), [(2, 0), (2, 1)].into_iter().collect());
}

#[test]
fn corner_never_counts_phantom_neighbors() {
    let mut engine = GridEngine::new(5, 5);
    set_cells(&mut engine, &[(1, 0), (0, 1), (1, 1)]);
    assert_eq!(engine.count_live_neighbors(0, 0).unwrap(), 3);

    let mut full = GridEngine::new(5, 5);
    for y in 0..5 {
        for x in 0..5 {
            full.set_alive(x, y, true).unwrap();
        }
    }
    assert_eq!(full.count_live_neighbors(0, 0).unwrap(), 3);
}

#[test]
fn one_past_the_edge_is_out_of_bounds() {
    let mut engine = GridEngine::new(64, 48);
    let expected = GridError::OutOfBounds { x: 64, y: 0, width: 64, height: 48 };
    assert_eq!(engine.toggle(64, 0), Err(expected));
    assert_eq!(engine.count_live_neighbors(64, 0), Err(expected));

    let expected = GridError::OutOfBounds { x: 0, y: 48, width: 64, height: 48 };
    assert_eq!(engine.toggle(0, 48), Err(expected));
    assert_eq!(engine.count_live_neighbors(0, 48), Err(expected));
    assert_eq!(engine.live_count(), 0);
}

#[test]
fn cell_snapshot_reports_position_and_state() {
    let mut engine = GridEngine::new(5, 5);
    engine.toggle(3, 1).unwrap();
    let cell = engine.cell(3, 1).unwrap();
    assert_eq!((cell.x, cell.y, cell.alive), (3, 1, true));
    assert!(!engine.cell(1, 3).unwrap().alive);
    assert!(engine.cell(5, 5).is_err());
    assert!(engine.contains(4, 4) && !engine.contains(4, 5));
}

#[test]
fn out_of_bounds_message_names_the_cell() {
    let engine = GridEngine::new(5, 5);
    let err = engine.is_alive(5, 2).unwrap_err();
    assert_eq!(err.to_string(), "cell (5, 2) is outside the 5x5 grid");
}

#[test]
fn random_soup_matches_naive() {
    let (width, height) = (17, 11);
    let mut engine = GridEngine::new(width, height);
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    for y in 0..height {
        for x in 0..width {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            if (seed >> 33) % 3 == 0 {
                engine.set_alive(x, y, true).unwrap();
            }
        }
    }

    let mut expected = collect_live(&engine);
    for _ in 0..32 {
        engine.advance_generation();
        expected = step_naive(&expected, width, height);
        assert_eq!(collect_live(&engine), expected, "generation {}", engine.generation());
    }
}
