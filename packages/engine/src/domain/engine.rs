//! The rules engine: owns the game state and is the only thing that mutates it.
//!
//! Every move goes through `validate_move` before any mutation, so a rejected
//! move leaves the state exactly as it was. Moves are applied atomically
//! within a single call; sharing one engine between callers needs an outer
//! lock (one per game is enough).

use tracing::{debug, info};
use ulid::Ulid;

use super::cards_logic::marriage_points;
use super::dealing::{deal_from, dealing_rng, full_deck, require_full_deck, shuffled};
use super::moves::{Move, MoveRequest, MoveValidation};
use super::scoring::{game_result, recompute_score, GameResult};
use super::snapshot::PlayerView;
use super::state::{GameState, Phase, Player, PlayerId, Seat, Trick};
use super::tricks::play_card;
use super::validation::validate_move;
use crate::config::GameConfig;
use crate::domain::{Card, Rank, Suit};
use crate::errors::{DomainError, MoveError};

#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
    config: GameConfig,
}

impl GameEngine {
    /// Shuffle a fresh deck and deal a new game. Player 1 leads the first trick.
    pub fn new(
        player1_id: impl Into<PlayerId>,
        player1_name: impl Into<String>,
        player2_id: impl Into<PlayerId>,
        player2_name: impl Into<String>,
        config: GameConfig,
    ) -> Result<Self, DomainError> {
        config.validate()?;
        let mut rng = dealing_rng(config.seed);
        let deck = shuffled(&full_deck(), &mut rng);
        Self::with_deck(
            player1_id,
            player1_name,
            player2_id,
            player2_name,
            config,
            &deck,
        )
    }

    /// Deal from a caller-supplied deck order instead of shuffling.
    pub fn with_deck(
        player1_id: impl Into<PlayerId>,
        player1_name: impl Into<String>,
        player2_id: impl Into<PlayerId>,
        player2_name: impl Into<String>,
        config: GameConfig,
        deck: &[Card],
    ) -> Result<Self, DomainError> {
        config.validate()?;
        let mut first = Player::new(player1_id.into(), player1_name);
        let mut second = Player::new(player2_id.into(), player2_name);
        if first.id == second.id {
            return Err(DomainError::setup(format!(
                "player ids must differ, both are {}",
                first.id
            )));
        }

        let deal = deal_from(deck)?;
        let [hand1, hand2] = deal.hands;
        first.hand = hand1;
        second.hand = hand2;

        let state = GameState {
            id: format!("game-{}", Ulid::new()),
            phase: Phase::Playing,
            current_player_id: first.id.clone(),
            players: [first, second],
            deck: deal.talon,
            trump_suit: deal.trump_card.suit,
            trump_card: Some(deal.trump_card),
            current_trick: Trick::default(),
            trick_history: Vec::new(),
            talon_closed: false,
            closed_by: None,
            winner_id: None,
            winner_points: 0,
        };

        info!(
            game_id = %state.id,
            trump = ?state.trump_suit,
            trump_card = %deal.trump_card,
            leader = %state.current_player_id,
            "Game dealt"
        );

        Ok(Self { state, config })
    }

    /// Adopt an existing state after checking its invariants: two distinct
    /// players with the current player among them, derived scores, a
    /// playable current trick, a phase that agrees with the talon, and every
    /// one of the 20 cards present exactly once.
    pub fn from_state(state: GameState, config: GameConfig) -> Result<Self, DomainError> {
        config.validate()?;
        let [first, second] = &state.players;
        if first.id == second.id {
            return Err(DomainError::setup("player ids must differ"));
        }
        if state.seat_of(&state.current_player_id).is_none() {
            return Err(DomainError::setup(format!(
                "current player {} is not seated",
                state.current_player_id
            )));
        }
        for p in &state.players {
            if p.score != recompute_score(p) {
                return Err(DomainError::setup(format!(
                    "score of {} is {} but its tricks and announcements give {}",
                    p.id,
                    p.score,
                    recompute_score(p)
                )));
            }
        }
        if state.is_finished() != state.winner_id.is_some() {
            return Err(DomainError::setup(
                "winner must be set exactly when the game is finished",
            ));
        }
        if state.current_trick.follow_card.is_some() || state.current_trick.winner.is_some() {
            return Err(DomainError::setup(
                "current trick must hold at most a lead card",
            ));
        }
        if state.talon_closed != state.closed_by.is_some() {
            return Err(DomainError::setup(
                "closed_by must be set exactly when the talon is closed",
            ));
        }
        if let Some(closer) = &state.closed_by {
            if state.seat_of(closer).is_none() {
                return Err(DomainError::setup(format!(
                    "talon closed by {closer}, who is not seated"
                )));
            }
        }
        if !state.is_finished() && (state.phase == Phase::TalonClosed) != state.talon_closed {
            return Err(DomainError::setup(format!(
                "phase {:?} disagrees with talon_closed = {}",
                state.phase, state.talon_closed
            )));
        }
        if state.trump_card.is_none() && !state.deck.is_empty() {
            return Err(DomainError::setup(
                "face-up trump card may only be gone once the talon is empty",
            ));
        }
        require_full_deck(&state.accounted_cards())?;
        Ok(Self { state, config })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the live state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the state; changes to it never reach the engine.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Populated only once the game is finished.
    pub fn result(&self) -> Option<GameResult> {
        game_result(&self.state)
    }

    /// Pure check, usable to pre-filter moves. Never mutates.
    pub fn check(&self, mv: &Move) -> Result<(), MoveError> {
        validate_move(&self.state, &self.config, mv)
    }

    pub fn validate(&self, mv: &Move) -> MoveValidation {
        self.check(mv).into()
    }

    pub fn validate_request(&self, req: &MoveRequest) -> MoveValidation {
        match Move::try_from(req.clone()) {
            Ok(mv) => self.validate(&mv),
            Err(e) => MoveValidation::rejected(e),
        }
    }

    /// Validate and apply a move, returning the new snapshot.
    pub fn submit(&mut self, mv: Move) -> Result<GameState, DomainError> {
        if let Err(e) = self.check(&mv) {
            debug!(
                game_id = %self.state.id,
                player_id = %mv.player_id(),
                kind = mv.kind(),
                code = %e.code(),
                reason = %e,
                "Move rejected"
            );
            return Err(e.into());
        }

        self.apply(&mv);
        Ok(self.snapshot())
    }

    pub fn submit_request(&mut self, req: MoveRequest) -> Result<GameState, DomainError> {
        let mv = Move::try_from(req)?;
        self.submit(mv)
    }

    /// Every move `player` could submit right now: plays in hand order, then
    /// closing the talon, marriages by suit, and the trump exchange.
    pub fn legal_moves(&self, player: &PlayerId) -> Vec<Move> {
        let Some(p) = self.state.player(player) else {
            return Vec::new();
        };

        let mut candidates: Vec<Move> = p
            .hand
            .iter()
            .map(|&card| Move::PlayCard {
                player_id: player.clone(),
                card,
            })
            .collect();
        candidates.push(Move::CloseTalon {
            player_id: player.clone(),
        });
        candidates.extend(Suit::ALL.into_iter().map(|suit| Move::AnnounceMarriage {
            player_id: player.clone(),
            suit,
        }));
        candidates.push(Move::ExchangeTrump {
            player_id: player.clone(),
        });

        candidates.retain(|mv| self.check(mv).is_ok());
        candidates
    }

    /// Per-player snapshot hiding the opponent's hand and the talon.
    pub fn player_view(&self, player: &PlayerId) -> Option<PlayerView> {
        PlayerView::for_player(&self.state, player, self.legal_moves(player))
    }

    fn apply(&mut self, mv: &Move) {
        let seat = self.state.current_seat();
        match mv {
            Move::PlayCard { card, .. } => {
                let outcome = play_card(&mut self.state, seat, *card, self.config.target_score);
                debug!(
                    game_id = %self.state.id,
                    player_id = %mv.player_id(),
                    %card,
                    trick_completed = outcome.trick_completed,
                    "Card played"
                );
                if outcome.phase_transitioned == Some(Phase::Finished) {
                    self.log_game_end();
                }
            }
            Move::CloseTalon { .. } => self.close_talon(seat),
            Move::AnnounceMarriage { suit, .. } => self.announce_marriage(seat, *suit),
            Move::ExchangeTrump { .. } => self.exchange_trump(seat),
        }
    }

    fn close_talon(&mut self, seat: Seat) {
        let id = self.state.players[seat].id.clone();
        self.state.talon_closed = true;
        self.state.closed_by = Some(id.clone());
        self.state.phase = Phase::TalonClosed;
        debug!(game_id = %self.state.id, player_id = %id, talon = self.state.talon_size(), "Talon closed");
    }

    fn announce_marriage(&mut self, seat: Seat, suit: Suit) {
        let points = marriage_points(suit, self.state.trump_suit);
        let player = &mut self.state.players[seat];
        player.announcements = player.announcements.saturating_add(points);
        player.marriages.push(suit);
        player.score = recompute_score(player);
        debug!(
            game_id = %self.state.id,
            player_id = %player.id,
            ?suit,
            points,
            score = player.score,
            "Marriage announced"
        );
    }

    fn exchange_trump(&mut self, seat: Seat) {
        let trump_suit = self.state.trump_suit;
        let Some(face_up) = self.state.trump_card else {
            return;
        };
        let hand = &mut self.state.players[seat].hand;
        let Some(pos) = hand
            .iter()
            .position(|c| c.suit == trump_suit && c.rank == Rank::Jack)
        else {
            return;
        };
        let jack = hand.remove(pos);
        hand.push(face_up);
        self.state.trump_card = Some(jack);
        debug!(
            game_id = %self.state.id,
            player_id = %self.state.players[seat].id,
            taken = %face_up,
            "Trump exchanged"
        );
    }

    fn log_game_end(&self) {
        if let Some(result) = self.result() {
            info!(
                game_id = %self.state.id,
                winner = %result.winner_id,
                winner_score = result.winner_score,
                loser_score = result.loser_score,
                game_points = result.game_points,
                tricks = self.state.trick_history.len(),
                "Game finished"
            );
        }
    }
}
