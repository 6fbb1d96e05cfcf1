use std::time::{Duration, Instant};

use mazerun::{
    animator::{AnimationStatus, PathAnimator},
    generators::generate,
    session::PlayerSession,
    solvers::{Solver, solve_maze},
};

/// Largest grid the generator accepts.
const PROFILE_GRID_SIZE: u8 = u8::MAX;
const DEFAULT_ITERATIONS: usize = 20;

fn main() -> std::io::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_ITERATIONS);

    let mut generate_time = Duration::ZERO;
    let mut solve_times = [(Solver::Bfs, Duration::ZERO, 0), (Solver::Dfs, Duration::ZERO, 0)];
    let mut replay_time = Duration::ZERO;
    // Solutions that were not valid routes or did not end the session on replay
    let mut failures = 0;

    for seed in 0..num_iters as u64 {
        let started = Instant::now();
        let maze = generate(PROFILE_GRID_SIZE, Some(seed)).map_err(std::io::Error::other)?;
        generate_time += started.elapsed();

        for (solver, total, cells) in solve_times.iter_mut() {
            let started = Instant::now();
            let path = solve_maze(&maze, *solver);
            *total += started.elapsed();
            let Some(path) = path else {
                failures += 1;
                continue;
            };
            *cells += path.len();
            if !path.is_valid_for(&maze) {
                failures += 1;
                continue;
            }

            let mut session = PlayerSession::new(maze.clone());
            let started = Instant::now();
            let status = PathAnimator::play(path, Duration::ZERO).run_to_end(&mut session, |_| {});
            replay_time += started.elapsed();
            if status != (AnimationStatus::Finished { goal_reached: true }) {
                failures += 1;
            }
        }
    }

    println!(
        "{} mazes of {}x{} cells",
        num_iters, PROFILE_GRID_SIZE, PROFILE_GRID_SIZE
    );
    println!(
        "generate: {:?} per maze",
        generate_time / num_iters.max(1) as u32
    );
    for (solver, total, cells) in solve_times {
        println!(
            "{}: {:?} per maze, {} path cells on average",
            solver,
            total / num_iters.max(1) as u32,
            cells / num_iters.max(1)
        );
    }
    println!(
        "replay: {:?} per solution, {} failed solutions",
        replay_time / (2 * num_iters.max(1)) as u32,
        failures
    );
    Ok(())
}
