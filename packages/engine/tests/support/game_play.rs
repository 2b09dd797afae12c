//! Drivers that play whole games through the public engine API.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use schnapsen_engine::{Card, GameConfig, GameEngine, GameState, Move, PlayerId};

pub const MAX_MOVES: usize = 1000;

pub fn card(token: &str) -> Card {
    token.parse().expect("valid card token")
}

pub fn new_game(config: GameConfig) -> GameEngine {
    GameEngine::new("anna", "Anna", "bert", "Bert", config).expect("valid setup")
}

/// How a driver picks among the legal moves of the player on turn.
#[derive(Clone, Copy, Debug)]
pub enum Policy {
    /// Always the first listed move: plays the first card in hand.
    FirstCard,
    /// Uniformly random among all legal moves.
    Random,
    /// Random, but never a marriage, close, or exchange.
    RandomCardsOnly,
}

/// Play until the game finishes, returning every snapshot along the way
/// (the initial state first).
pub fn play_out(engine: &mut GameEngine, policy: Policy, seed: u64) -> Vec<GameState> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut history = vec![engine.snapshot()];

    for _ in 0..MAX_MOVES {
        if engine.state().is_finished() {
            return history;
        }
        let to_act: PlayerId = engine.state().current_player_id.clone();
        let mut moves = engine.legal_moves(&to_act);
        if matches!(policy, Policy::RandomCardsOnly) {
            moves.retain(|m| matches!(m, Move::PlayCard { .. }));
        }
        assert!(!moves.is_empty(), "{to_act} is on turn with no legal move");

        let mv = match policy {
            Policy::FirstCard => moves.swap_remove(0),
            Policy::Random | Policy::RandomCardsOnly => {
                let i = rng.random_range(0..moves.len());
                moves.swap_remove(i)
            }
        };
        let next = engine.submit(mv).expect("legal move is accepted");
        history.push(next);
    }
    panic!("game did not finish within {MAX_MOVES} moves");
}

pub fn play_random(seed: u64) -> (GameEngine, Vec<GameState>) {
    let mut engine = new_game(GameConfig::with_seed(seed));
    let history = play_out(&mut engine, Policy::Random, seed);
    (engine, history)
}
