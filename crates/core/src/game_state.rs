//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, active piece, shape queue,
//! timers and scoring. It handles input, gravity, locking, line clears, leveling and
//! the Active/GameOver lifecycle.
//!
//! # Tick order
//!
//! [`GameState::tick`] runs once per frame:
//!
//! 1. Input: restart while game over; otherwise horizontal moves (debounced), rotation
//!    (debounced) and soft drop on/off.
//! 2. Timers (only while active): gravity, then the two debounce timers. A gravity step
//!    that lands the piece locks it, clears full rows, scores and spawns the next piece
//!    before the tick returns.

use log::{debug, info};

use crate::board::Board;
use crate::rng::{PreviewQueue, ShapeSource};
use crate::scoring::{
    calculate_line_score, next_fall_speed_ms, should_level_up, soft_drop_speed_ms,
    timer_duration_ms,
};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::tetromino::{Descent, Tetromino};
use crate::timer::Timer;
use crate::types::{GameEvent, KeyState, PieceKind, Phase, Timings, PREVIEW_LEN, START_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerEvent {
    Gravity,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<Q = PreviewQueue> {
    board: Board,
    active: Option<Tetromino>,
    shapes: Q,
    timings: Timings,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    /// Gravity interval at the current level, before soft drop.
    fall_speed_ms: f32,
    /// Gravity interval while soft drop is held, fixed at reset from the start speed.
    soft_drop_ms: u32,
    soft_drop: bool,
    gravity: Timer<TimerEvent>,
    horizontal_move: Timer,
    rotate: Timer,
    /// Pending events, drained by the frontend.
    events: Vec<GameEvent>,
    /// Timestamp of the current tick.
    now_ms: u64,
}

impl GameState<PreviewQueue> {
    /// Create a new game with the given RNG seed and default timings
    pub fn new(seed: u32) -> Self {
        Self::with_timings(seed, Timings::default())
    }

    pub fn with_timings(seed: u32, timings: Timings) -> Self {
        Self::with_source(PreviewQueue::new(seed), timings)
    }
}

impl<Q: ShapeSource> GameState<Q> {
    /// Create a game drawing shapes from `shapes`.
    ///
    /// The game starts active at time 0 with the first piece already spawned.
    pub fn with_source(shapes: Q, timings: Timings) -> Self {
        let fall_speed_ms = timings.start_speed_ms as f32;
        let mut state = Self {
            board: Board::new(),
            active: None,
            shapes,
            timings,
            phase: Phase::Active,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            fall_speed_ms,
            soft_drop_ms: timer_duration_ms(soft_drop_speed_ms(fall_speed_ms)),
            soft_drop: false,
            gravity: Timer::repeating(timer_duration_ms(fall_speed_ms), TimerEvent::Gravity),
            horizontal_move: Timer::one_shot(timings.move_wait_ms),
            rotate: Timer::one_shot(timings.rotate_wait_ms),
            events: Vec::new(),
            now_ms: 0,
        };
        state.reset();
        state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_speed_ms(&self) -> f32 {
        self.fall_speed_ms
    }

    /// Current gravity timer duration (soft drop applied).
    pub fn gravity_interval_ms(&self) -> u32 {
        self.gravity.duration_ms()
    }

    pub fn soft_drop_engaged(&self) -> bool {
        self.soft_drop
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct grid access for tests and tooling.
    ///
    /// The active piece is not re-validated against the edited grid.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn shape_source(&self) -> &Q {
        &self.shapes
    }

    /// Events emitted since the last drain, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Wipe the board and all stats and start a new game at the current time.
    pub fn reset(&mut self) {
        self.phase = Phase::Active;
        self.board.clear();
        self.active = None;

        self.level = START_LEVEL;
        self.score = 0;
        self.lines = 0;
        self.fall_speed_ms = self.timings.start_speed_ms as f32;
        self.soft_drop_ms = timer_duration_ms(soft_drop_speed_ms(self.fall_speed_ms));
        self.soft_drop = false;

        self.gravity = Timer::repeating(timer_duration_ms(self.fall_speed_ms), TimerEvent::Gravity);
        self.horizontal_move = Timer::one_shot(self.timings.move_wait_ms);
        self.rotate = Timer::one_shot(self.timings.rotate_wait_ms);
        self.gravity.activate(self.now_ms);

        info!("new game at {}ms", self.now_ms);
        self.events.push(GameEvent::Reset);
        self.events.push(GameEvent::ScoreChanged {
            lines: 0,
            score: 0,
            level: self.level,
        });

        self.spawn_next_piece();
    }

    /// Clear full rows, then spawn the next shape from the queue.
    ///
    /// If any spawn cell on the visible grid is already occupied the game is over and no
    /// piece is created. Returns whether a piece was spawned.
    pub fn spawn_next_piece(&mut self) -> bool {
        self.line_clear_pass();

        let kind = self.shapes.next_shape();
        if self.board.is_spawn_blocked(kind) {
            self.phase = Phase::GameOver;
            self.active = None;
            info!(
                "game over: {} blocked at spawn (score {}, level {}, lines {})",
                kind.as_str(),
                self.score,
                self.level,
                self.lines
            );
            self.events.push(GameEvent::GameOver {
                score: self.score,
                level: self.level,
            });
            return false;
        }

        debug!("spawn {}", kind.as_str());
        self.active = Some(Tetromino::new(kind));
        self.events.push(GameEvent::PieceSpawned { kind });
        true
    }

    /// Remove every full row and score them. Returns the number of rows removed.
    ///
    /// A pass that finds no full rows changes nothing and emits no events.
    pub fn line_clear_pass(&mut self) -> usize {
        let cleared = self.board.clear_full_rows();
        if cleared.is_empty() {
            return 0;
        }

        debug!("cleared rows {:?}", cleared.as_slice());
        let count = cleared.len() as u32;
        self.events.push(GameEvent::LinesCleared { count });
        self.calculate_scores(count);
        cleared.len()
    }

    /// Add lines and points, level up when the line threshold is reached, and report
    /// the new totals.
    ///
    /// A level up puts gravity on the new fall speed even while soft drop is held; the
    /// fast speed comes back on the next press of the down key.
    pub fn calculate_scores(&mut self, num_lines: u32) {
        self.lines += num_lines;
        self.score = self
            .score
            .saturating_add(calculate_line_score(num_lines as usize, self.level));

        if should_level_up(self.lines, self.level) {
            self.level += 1;
            self.fall_speed_ms = next_fall_speed_ms(self.fall_speed_ms);
            self.gravity.set_duration_ms(timer_duration_ms(self.fall_speed_ms));
            debug!(
                "level {} (fall speed {:.2}ms)",
                self.level, self.fall_speed_ms
            );
            self.events.push(GameEvent::LevelUp { level: self.level });
        }

        self.events.push(GameEvent::ScoreChanged {
            lines: self.lines,
            score: self.score,
            level: self.level,
        });
    }

    /// Try to shift the active piece sideways.
    pub fn move_horizontal(&mut self, delta: i8) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        piece.move_horizontal(delta, &self.board)
    }

    /// Try to rotate the active piece about its pivot.
    pub fn rotate(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        piece.rotate(&self.board)
    }

    /// Gravity step: move the active piece down one row, or lock it and spawn the next.
    ///
    /// Returns true only if the piece moved.
    pub fn move_down(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        match piece.move_down(&self.board) {
            Descent::Moved => true,
            Descent::Landed => {
                self.lock_active();
                self.spawn_next_piece();
                false
            }
        }
    }

    /// Process one frame at time `now_ms` with the given key states.
    pub fn tick(&mut self, now_ms: u64, keys: KeyState) {
        self.now_ms = now_ms;
        self.handle_input(keys);

        if self.phase == Phase::Active {
            self.update_timers();
        }
    }

    /// [`tick`](Self::tick), then export the frame.
    pub fn run(&mut self, now_ms: u64, keys: KeyState) -> GameSnapshot {
        self.tick(now_ms, keys);
        self.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.next_queue = [None; PREVIEW_LEN];
        for (slot, &kind) in out.next_queue.iter_mut().zip(self.shapes.preview()) {
            *slot = Some(kind);
        }
        out.game_over = self.is_game_over();
        out.soft_drop = self.soft_drop;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn handle_input(&mut self, keys: KeyState) {
        if self.phase == Phase::GameOver {
            if keys.restart {
                self.reset();
            }
            return;
        }

        if !self.horizontal_move.is_active() {
            if keys.left {
                self.move_horizontal(-1);
                self.horizontal_move.activate(self.now_ms);
            }
            if keys.right {
                self.move_horizontal(1);
                self.horizontal_move.activate(self.now_ms);
            }
        }

        if !self.rotate.is_active() && keys.rotate {
            self.rotate();
            self.rotate.activate(self.now_ms);
        }

        if keys.down != self.soft_drop {
            self.soft_drop = keys.down;
            self.apply_gravity_speed();
        }
    }

    fn update_timers(&mut self) {
        let now = self.now_ms;
        if let Some(TimerEvent::Gravity) = self.gravity.update(now) {
            self.move_down();
        }
        self.horizontal_move.update(now);
        self.rotate.update(now);
    }

    /// Swap gravity between the soft drop interval and the current fall speed.
    fn apply_gravity_speed(&mut self) {
        let duration = if self.soft_drop {
            self.soft_drop_ms
        } else {
            timer_duration_ms(self.fall_speed_ms)
        };
        self.gravity.set_duration_ms(duration);
    }

    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        let written = self.board.lock_blocks(piece.blocks());
        if written < piece.blocks().len() {
            debug!(
                "{} of 4 blocks of {} locked above the top edge",
                piece.blocks().len() - written,
                piece.kind().as_str()
            );
        }
        debug!("lock {} at {:?}", piece.kind().as_str(), piece.positions());
        self.events.push(GameEvent::PieceLocked { kind: piece.kind() });
    }
}

impl Default for GameState<PreviewQueue> {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Shape source that always hands out the same kind. Handy for drills and tests.
pub fn repeat_shape(kind: PieceKind) -> impl FnMut() -> PieceKind + Clone {
    move || kind
}
