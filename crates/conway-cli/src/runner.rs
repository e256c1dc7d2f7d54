//! Paced run loop.
//!
//! [`run`] advances the board once per iteration, hands the result to a
//! [`GenerationCallback`], and sleeps for the configured tick interval. It
//! ends when the shutdown future completes, when `max_generations` is
//! reached, or, if enabled, when a generation changes nothing. With the
//! default configuration only the shutdown future ends it.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use conway_core::config::RunConfig;
use conway_core::{Board, GenerationSummary};
use tracing::{debug, info};

use crate::render;

/// Errors that can occur during the run loop.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Writing a generation to the terminal failed.
    #[error("failed to render generation: {source}")]
    Render {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// Reason why the run loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEndReason {
    /// Reached the configured `max_generations` limit.
    GenerationLimitReached,
    /// A generation produced no births and no deaths.
    Stable,
    /// The shutdown future completed.
    Interrupted,
}

/// Result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    /// The reason the run ended.
    pub end_reason: RunEndReason,
    /// Total number of generations advanced.
    pub generations: u64,
    /// Summary of the last generation.
    pub final_summary: GenerationSummary,
}

/// Callback invoked after each generation.
pub trait GenerationCallback {
    /// Called with the zero-based turn number after the board has advanced.
    fn on_generation(
        &mut self,
        turn: u64,
        summary: &GenerationSummary,
        board: &Board,
    ) -> std::io::Result<()>;
}

/// Prints each generation under a turn banner.
pub struct TerminalRenderer<W> {
    output: W,
    show_coordinates: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// Create a renderer writing to `output`.
    pub const fn new(output: W, show_coordinates: bool) -> Self {
        Self {
            output,
            show_coordinates,
        }
    }

    /// Give back the output stream.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<W: Write> GenerationCallback for TerminalRenderer<W> {
    fn on_generation(
        &mut self,
        turn: u64,
        _summary: &GenerationSummary,
        board: &Board,
    ) -> std::io::Result<()> {
        let frame = if self.show_coordinates {
            render::numbered(board)
        } else {
            render::plain(board)
        };
        writeln!(self.output, "=== Turn {turn} ===")?;
        self.output.write_all(frame.as_bytes())?;
        self.output.flush()
    }
}

/// Run generations until a termination condition is met.
///
/// At least one generation always runs; the shutdown future is first
/// checked after it.
///
/// # Arguments
///
/// * `board` - The board to advance, held exclusively for the whole run
/// * `config` - Tick interval and end conditions
/// * `callback` - Called after each generation, typically to draw it
/// * `shutdown` - Completes when the run should stop; checked between
///   generations
///
/// # Errors
///
/// Returns [`RunError`] if the callback fails to write a generation.
pub async fn run<F>(
    board: &mut Board,
    config: &RunConfig,
    callback: &mut dyn GenerationCallback,
    shutdown: F,
) -> Result<RunResult, RunError>
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let interval = Duration::from_millis(config.tick_interval_ms);
    let mut generations: u64 = 0;

    info!(
        dimension = board.dimension(),
        population = board.population(),
        tick_interval_ms = config.tick_interval_ms,
        max_generations = config.max_generations,
        stop_when_stable = config.stop_when_stable,
        "Run starting"
    );

    loop {
        let summary = board.advance_generation();
        callback.on_generation(generations, &summary, board)?;
        generations = generations.saturating_add(1);

        if config.max_generations > 0 && generations >= config.max_generations {
            info!(generations, "Generation limit reached");
            return Ok(RunResult {
                end_reason: RunEndReason::GenerationLimitReached,
                generations,
                final_summary: summary,
            });
        }

        if config.stop_when_stable && summary.is_stable() {
            info!(generations, population = summary.population, "Board is stable");
            return Ok(RunResult {
                end_reason: RunEndReason::Stable,
                generations,
                final_summary: summary,
            });
        }

        tokio::select! {
            biased;
            () = &mut shutdown => {
                info!(generations, "Shutdown requested");
                return Ok(RunResult {
                    end_reason: RunEndReason::Interrupted,
                    generations,
                    final_summary: summary,
                });
            }
            () = tokio::time::sleep(interval) => {
                debug!(generations, "Tick interval elapsed");
            }
        }
    }
}

/// Log how the run ended.
pub fn log_run_end(result: &RunResult) {
    info!(
        reason = ?result.end_reason,
        generations = result.generations,
        final_population = result.final_summary.population,
        "Run ended"
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Records every callback invocation.
    #[derive(Default)]
    struct Recorder {
        turns: Vec<u64>,
        populations: Vec<usize>,
    }

    impl GenerationCallback for Recorder {
        fn on_generation(
            &mut self,
            turn: u64,
            summary: &GenerationSummary,
            board: &Board,
        ) -> std::io::Result<()> {
            assert_eq!(summary.population, board.population());
            self.turns.push(turn);
            self.populations.push(summary.population);
            Ok(())
        }
    }

    fn blinker() -> Board {
        Board::with_live_cells(5, [(1, 2), (2, 2), (3, 2)]).unwrap()
    }

    fn config(max_generations: u64, stop_when_stable: bool) -> RunConfig {
        RunConfig {
            tick_interval_ms: 500,
            max_generations,
            stop_when_stable,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn stops_at_generation_limit() {
        let mut board = blinker();
        let mut recorder = Recorder::default();

        let result = run(
            &mut board,
            &config(4, false),
            &mut recorder,
            std::future::pending(),
        )
        .await
        .unwrap();

        assert_eq!(result.end_reason, RunEndReason::GenerationLimitReached);
        assert_eq!(result.generations, 4);
        assert_eq!(recorder.turns, vec![0, 1, 2, 3]);
        assert_eq!(recorder.populations, vec![3, 3, 3, 3]);
        assert_eq!(board, blinker());
    }

    #[tokio::test(start_paused = true)]
    async fn waits_the_tick_interval_between_generations() {
        let mut board = blinker();
        let mut recorder = Recorder::default();
        let started = tokio::time::Instant::now();

        run(
            &mut board,
            &config(3, false),
            &mut recorder,
            std::future::pending(),
        )
        .await
        .unwrap();

        // Two pauses between three generations; none after the last.
        assert_eq!(started.elapsed(), Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_stable() {
        let mut board = Board::with_live_cells(6, [(0, 0), (1, 0), (0, 1)]).unwrap();
        let mut recorder = Recorder::default();

        let result = run(
            &mut board,
            &config(0, true),
            &mut recorder,
            std::future::pending(),
        )
        .await
        .unwrap();

        // The L-tromino fills in to a block, then the block is still.
        assert_eq!(result.end_reason, RunEndReason::Stable);
        assert_eq!(result.generations, 2);
        assert_eq!(board.population(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_ends_an_unbounded_run() {
        let mut board = blinker();
        let mut recorder = Recorder::default();

        let result = run(
            &mut board,
            &config(0, false),
            &mut recorder,
            tokio::time::sleep(Duration::from_millis(1200)),
        )
        .await
        .unwrap();

        assert_eq!(result.end_reason, RunEndReason::Interrupted);
        // Generations at t = 0, 500, 1000; the shutdown lands during the
        // third pause.
        assert_eq!(result.generations, 3);
        assert_eq!(recorder.turns, vec![0, 1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn terminal_renderer_prints_turn_banner() {
        let mut board = blinker();
        let mut renderer = TerminalRenderer::new(Vec::new(), false);

        run(
            &mut board,
            &config(2, false),
            &mut renderer,
            std::future::pending(),
        )
        .await
        .unwrap();

        let output = String::from_utf8(renderer.into_output()).unwrap();
        let first = output.find("=== Turn 0 ===").unwrap();
        let second = output.find("=== Turn 1 ===").unwrap();
        assert!(first < second);
        assert_eq!(output.matches('X').count(), 6);
    }
}
