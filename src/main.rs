mod game;
mod input;
mod snake;
mod term;

use std::thread::sleep;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;

use game::{GameConfig, SnakeGame};
use input::TermButtons;
use term::TermScreen;

/// A grid cell as (row, col).
pub type Cell = (u8, u8);

const POLL_INTERVAL_MS: u64 = 40;

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let rng = StdRng::seed_from_u64(seed);

    let mut game = SnakeGame::new(TermScreen::new(), TermButtons::new(), GameConfig::default(), rng);
    game.game_init();

    loop {
        sleep(Duration::from_millis(POLL_INTERVAL_MS));
        // game_process returns false once the player quits
        if !game.game_process() {
            break;
        }
    }
}
