use std::time::Duration;

use crate::solvers::Solver;

/// Delay between two cells of an animated solution.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(100);
/// How often the elapsed time line is refreshed.
pub const DEFAULT_CLOCK_TICK: Duration = Duration::from_secs(1);

/// Environment variable holding a fixed generation seed.
pub const SEED_ENV: &str = "MAZERUN_SEED";
/// Environment variable overriding the animation step delay, in milliseconds.
pub const STEP_DELAY_ENV: &str = "MAZERUN_STEP_DELAY_MS";

/// Maze size choices offered to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridSize {
    Small,
    Medium,
    Large,
}

impl GridSize {
    /// Number of rows and columns of the grid.
    pub const fn cells(self) -> u8 {
        match self {
            GridSize::Small => 10,
            GridSize::Medium => 15,
            GridSize::Large => 20,
        }
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GridSize::Small => "Easy",
            GridSize::Medium => "Medium",
            GridSize::Large => "Hard",
        };
        write!(f, "{} ({}x{})", label, self.cells(), self.cells())
    }
}

/// Available maze sizes
pub const GRID_SIZES: [GridSize; 3] = [GridSize::Small, GridSize::Medium, GridSize::Large];
/// Available maze solvers
pub const SOLVERS: [Solver; 2] = [Solver::Bfs, Solver::Dfs];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Base seed for generated mazes, `None` for a fresh random maze each time.
    /// The n-th maze of a run uses `seed + n`, see [`GameConfig::seed_for`].
    pub seed: Option<u64>,
    /// Delay between two cells of an animated solution
    pub step_delay: Duration,
    /// Refresh interval of the elapsed time display
    pub clock_tick: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            step_delay: DEFAULT_STEP_DELAY,
            clock_tick: DEFAULT_CLOCK_TICK,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by the `MAZERUN_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Values that fail to parse are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = GameConfig::default();

        if let Some(raw) = lookup(SEED_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(e) => tracing::warn!("[config] Ignoring {}={:?}: {}", SEED_ENV, raw, e),
            }
        }

        if let Some(raw) = lookup(STEP_DELAY_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.step_delay = Duration::from_millis(ms),
                Err(e) => tracing::warn!("[config] Ignoring {}={:?}: {}", STEP_DELAY_ENV, raw, e),
            }
        }

        config
    }

    /// Seed of the `round`-th maze generated in this run (counting from 0).
    /// A fixed base seed replays the same sequence of mazes, and each new maze differs from the last.
    pub fn seed_for(&self, round: u64) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(round))
    }
}
