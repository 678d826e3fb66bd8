//! Rules layer: next-body generation, win and loss tracking, the drop flow
//! and the flat score list

mod factory;
mod host;
mod scoreboard;
mod session;
mod state;

pub use self::factory::RankUnlockFactory;
pub use self::host::GameHost;
pub use self::scoreboard::{ScoreEntry, Scoreboard, DEFAULT_TOP_SCORES, MAX_DISPLAY_NAME};
pub use self::session::{GameSession, LOSS_MESSAGE, SAVE_SCORE_PROMPT, WIN_MESSAGE};
pub use self::state::{GameStateHandler, Notice, StateFlags};
