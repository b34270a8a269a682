//! Lexgrid demo driver.
//!
//! Builds the startup configuration from a word list, plays one greedy
//! game to completion, then replays it from the bare identity triple and
//! verifies the reconstruction matches — the same check a stateless
//! request handler relies on.

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lexgrid::core::multiset::LetterCounts;
use lexgrid::game::score::score_word;
use lexgrid::request::ScoreRecord;
use lexgrid::{Game, GameConfig, VERSION};

const DEFAULT_WORD_LIST: &str = "/usr/share/dict/words";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_WORD_LIST.to_string());

    info!("Lexgrid v{}", VERSION);
    let config = GameConfig::load(&path)
        .with_context(|| format!("building configuration from {path}"))?;

    let mut game = Game::new(&config);
    info!(seed = game.seed, started = game.started_unix(), "demo game");

    while !game.over {
        match best_playable_word(&game, &config) {
            Some(word) => {
                let points = score_word(&word, &config.values);
                game.apply_move(&word, &config)
                    .context("greedy move was validated against the same board")?;
                info!(word = %word, points, total = game.score(&config.values), "played");
            }
            None => {
                warn!(board = %LetterCounts::from_letters(&game.letters), "no word fits, passing");
                game.apply_move("", &config)
                    .context("a pass is always legal")?;
            }
        }
    }

    // The stateless contract: the identity triple alone rebuilds the game.
    let replayed = Game::replay(game.seed, game.started, &game.moves, &config)
        .context("replaying the finished game")?;
    anyhow::ensure!(
        replayed.letters == game.letters
            && replayed.over
            && replayed.score(&config.values) == game.score(&config.values),
        "replay diverged from live play"
    );
    info!("replay verified: identical grid and score");

    let record = ScoreRecord::from_game(&game, &config)
        .context("game just finished, record must exist")?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

/// Highest-scoring dictionary word spellable from the current tiles.
fn best_playable_word(game: &Game, config: &GameConfig) -> Option<String> {
    let tiles = LetterCounts::from_letters(&game.letters);
    config
        .dictionary
        .words()
        .filter(|w| tiles.contains(&LetterCounts::from_word(w)))
        .max_by_key(|w| score_word(w, &config.values))
        .map(str::to_string)
}
