use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::input::{sample_direction, Buttons};
use crate::snake::{Direction, Snake};
use crate::term::{Color, Screen, GRID_BOTTOM, GRID_LEFT, GRID_RIGHT, GRID_TOP};
use crate::Cell;

pub const GRID_ROWS: u8 = 10;
pub const GRID_COLS: u8 = 10;
pub const GRID_CAPACITY: usize = GRID_ROWS as usize * GRID_COLS as usize;

const INITIAL_SNAKE_LENGTH: u8 = 3;
const SCORE_PER_FOOD: u32 = 10;
const TICKS_PER_STEP: u8 = 5;

/// Result of one logical game tick.
#[derive(Debug, PartialEq)]
pub enum TickOutcome {
    /// Direction is Stopped, nothing happened.
    Idle,
    /// The head advanced; old_tail is the vacated cell, None when the
    /// snake grew instead.
    Moved { new_head: Cell, old_tail: Option<Cell> },
    Collision,
    Win,
}

/// All mutable state of one round. Owned exclusively by the engine.
pub struct GameState {
    snake: Snake,
    food: Option<Cell>,
    score: u32,
}

impl GameState {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let snake = Snake::new(GRID_ROWS / 2, GRID_COLS / 2 - 1, INITIAL_SNAKE_LENGTH);
        let mut state = GameState { snake, food: None, score: 0 };
        state.place_food(rng);
        state
    }

    pub fn steer(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    /// One tick: advance the head in the current direction, detect wall and
    /// self collisions, handle food and growth.
    pub fn advance_tick<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        let (dr, dc) = match self.snake.direction().offset() {
            Some(d) => d,
            None => return TickOutcome::Idle,
        };

        let (row, col) = self.snake.head();
        let row = row as i16 + dr;
        let col = col as i16 + dc;
        // no wraparound: leaving the grid ends the round
        if row < 0 || row >= GRID_ROWS as i16 || col < 0 || col >= GRID_COLS as i16 {
            return TickOutcome::Collision;
        }
        let new_head = (row as u8, col as u8);

        let ate = self.food == Some(new_head);
        if ate && self.snake.len() == GRID_CAPACITY {
            return TickOutcome::Win;
        }
        if self.snake.contains(new_head) {
            return TickOutcome::Collision;
        }

        if ate {
            self.snake.grow(new_head);
            self.score += SCORE_PER_FOOD;
            self.food = None;
            if self.snake.len() == GRID_CAPACITY {
                // growth just filled the board, there is nowhere left to go
                return TickOutcome::Win;
            }
            self.place_food(rng);
            TickOutcome::Moved { new_head, old_tail: None }
        } else {
            let old_tail = self.snake.advance(new_head);
            TickOutcome::Moved { new_head, old_tail: Some(old_tail) }
        }
    }

    /// Uniform choice among the cells not occupied by the body. Leaves the
    /// food unset when the board is full.
    fn place_food<R: Rng>(&mut self, rng: &mut R) {
        let mut free: Vec<Cell> = Vec::with_capacity(GRID_CAPACITY - self.snake.len());
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                if !self.snake.contains((row, col)) {
                    free.push((row, col));
                }
            }
        }
        self.food = free.choose(rng).copied();
    }
}

#[derive(Debug, PartialEq)]
enum Phase {
    StartScreen,
    Playing,
    GameOver,
}

pub struct GameConfig {
    /// Wait for select on the game-over screen before the next round starts;
    /// false restarts immediately.
    pub wait_for_restart: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { wait_for_restart: true }
    }
}

/// Ties the state engine to the screen and button collaborators and runs the
/// start/playing/game-over round lifecycle. The caller invokes game_process
/// at a fixed rate; logical ticks run once every TICKS_PER_STEP calls.
pub struct SnakeGame<S: Screen, B: Buttons> {
    screen: S,
    buttons: B,
    config: GameConfig,
    rng: StdRng,
    state: GameState,
    phase: Phase,
    tick_counter: u8,
}

impl<S: Screen, B: Buttons> SnakeGame<S, B> {
    pub fn new(screen: S, buttons: B, config: GameConfig, mut rng: StdRng) -> Self {
        let state = GameState::new(&mut rng);
        SnakeGame {
            screen,
            buttons,
            config,
            rng,
            state,
            phase: Phase::StartScreen,
            tick_counter: 0,
        }
    }

    /// One-time setup: init the display and show the start screen.
    pub fn game_init(&mut self) {
        self.screen.setup();
        self.show_start_screen();
    }

    /// One outer poll tick. Returns false once the player quit.
    pub fn game_process(&mut self) -> bool {
        self.buttons.poll();
        if self.buttons.quit() {
            self.screen.restore();
            return false;
        }

        match self.phase {
            Phase::StartScreen => {
                if self.buttons.select() {
                    self.start_round();
                }
            }
            Phase::GameOver => {
                if !self.config.wait_for_restart || self.buttons.select() {
                    self.start_round();
                }
            }
            Phase::Playing => {
                // direction is sampled every call, movement only every 5th
                let dir = sample_direction(self.state.snake.direction(), &mut self.buttons);
                self.state.steer(dir);

                self.tick_counter = (self.tick_counter + 1) % TICKS_PER_STEP;
                if self.tick_counter == 0 {
                    let outcome = self.state.advance_tick(&mut self.rng);
                    self.apply_outcome(outcome);
                }
            }
        }

        true
    }

    fn apply_outcome(&mut self, outcome: TickOutcome) {
        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Moved { new_head, old_tail } => {
                match old_tail {
                    Some((row, col)) => self.screen.fill_cell(row, col, Color::Background),
                    None => self.draw_score(),
                }
                self.screen.fill_cell(new_head.0, new_head.1, Color::Snake);
                if let Some((row, col)) = self.state.food {
                    self.screen.fill_cell(row, col, Color::Food);
                }
                self.screen.flush();
            }
            TickOutcome::Collision => self.end_round(false),
            TickOutcome::Win => self.end_round(true),
        }
    }

    fn start_round(&mut self) {
        self.state = GameState::new(&mut self.rng);
        self.tick_counter = 0;

        self.screen.clear_screen(Color::Background);
        self.screen.draw_rectangle(GRID_TOP, GRID_LEFT, GRID_BOTTOM, GRID_RIGHT, Color::Grid);
        for &(row, col) in self.state.snake.cells() {
            self.screen.fill_cell(row, col, Color::Snake);
        }
        if let Some((row, col)) = self.state.food {
            self.screen.fill_cell(row, col, Color::Food);
        }
        self.draw_score();
        self.screen.flush();

        self.phase = Phase::Playing;
    }

    fn end_round(&mut self, win: bool) {
        self.screen.clear_screen(Color::Background);
        let title = if win { "You win!" } else { "GAME OVER" };
        self.screen.draw_text(40, 100, title, Color::Text, Color::Background, 20);
        let score = format!("Total score: {}", self.state.score);
        self.screen.draw_text(40, 140, &score, Color::Text, Color::Background, 16);
        if self.config.wait_for_restart {
            self.screen.draw_text(20, 200, "Press Enter to restart", Color::Text, Color::Background, 12);
        }
        self.screen.flush();

        // presses from the round just ended must not trigger the restart
        self.buttons.clear();
        self.phase = Phase::GameOver;
    }

    fn show_start_screen(&mut self) {
        self.screen.clear_screen(Color::Background);
        self.screen.draw_text(20, 80, "==== SNAKE ====", Color::Text, Color::Background, 16);
        self.screen.draw_text(20, 120, "Arrow keys or WASD to steer", Color::Text, Color::Background, 12);
        self.screen.draw_text(20, 150, "Press Enter to start, q to quit", Color::Text, Color::Background, 12);
        self.screen.flush();
        self.phase = Phase::StartScreen;
    }

    fn draw_score(&mut self) {
        let text = format!("Score: {}  Len: {}", self.state.score, self.state.snake.len());
        self.screen.draw_text(20, 250, &text, Color::Text, Color::Background, 16);
    }
}
