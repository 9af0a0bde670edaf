use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sudoku_solver::sudoku::grid::{EMPTY, EXAMPLE, Grid, SIZE};
use sudoku_solver::sudoku::solver::{Backtracking, Engine, Outcome};

fn bench_example(c: &mut Criterion) {
    c.bench_function("solve_example", |b| {
        b.iter(|| {
            let mut grid = Grid::new(black_box(EXAMPLE));
            assert_eq!(Backtracking::new(&mut grid).solve(), Outcome::Solved);
            grid
        });
    });
}

fn bench_empty_grid(c: &mut Criterion) {
    c.bench_function("solve_empty_grid", |b| {
        b.iter(|| {
            let mut grid = Grid::new(black_box([[EMPTY; SIZE]; SIZE]));
            assert_eq!(Backtracking::new(&mut grid).solve(), Outcome::Solved);
            grid
        });
    });
}

fn bench_already_solved(c: &mut Criterion) {
    let mut solved = Grid::new(EXAMPLE);
    Backtracking::new(&mut solved).solve();
    let cells: [[u8; SIZE]; SIZE] = (&solved).into();

    c.bench_function("solve_already_solved", |b| {
        b.iter(|| {
            let mut grid = Grid::new(black_box(cells));
            Backtracking::new(&mut grid).solve()
        });
    });
}

criterion_group!(benches, bench_example, bench_empty_grid, bench_already_solved);
criterion_main!(benches);
