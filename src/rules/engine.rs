//! Match engine: the single owner of a match.
//!
//! `MatchEngine` holds the [`MatchState`] aggregate together with the RNG,
//! the card catalog, the effect registry and the signal hub. Every request
//! is validated here, turned into effect events and drained through one
//! [`EffectProcessor`]; turn flow is delegated to [`super::turn`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::aura::AuraCalculator;
use crate::cards::{Card, CardCatalog, CardId, Placement};
use crate::core::{
    CardUid, GameRng, GameRngState, MatchConfig, MatchState, PlayerId, PlayerMap, RandomSource, RegistryError,
    Result,
};
use crate::economy;
use crate::effects::{CardEffectRegistry, DrainReport, EffectEvent, EffectProcessor, PlayContext};
use crate::signals::{SignalHub, SignalSink};

use super::actions::{ActionOutcome, GameResult, MatchActions, Rejection};
use super::turn;

/// Serializable capture of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub state: MatchState,
    pub rng: GameRngState,
}

impl MatchSnapshot {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Owns and runs one match.
///
/// ## Example
///
/// ```
/// use influence_ccg::core::PlayerId;
/// use influence_ccg::games::starter;
/// use influence_ccg::rules::MatchActions;
///
/// let mut engine = starter::new_match(42).unwrap();
/// assert_eq!(engine.state().current_player(), Some(PlayerId::ONE));
///
/// engine.submit_pass(PlayerId::ONE);
/// assert_eq!(engine.state().current_player(), Some(PlayerId::TWO));
/// ```
pub struct MatchEngine<R: RandomSource = GameRng> {
    state: MatchState,
    rng: R,
    catalog: Arc<CardCatalog>,
    registry: Arc<CardEffectRegistry>,
    hub: SignalHub,
    auras: AuraCalculator,
}

impl MatchEngine<GameRng> {
    /// Build and deal a match with the standard effect registry.
    pub fn new(config: MatchConfig, catalog: CardCatalog, decks: PlayerMap<Vec<CardId>>, seed: u64) -> Result<Self> {
        Self::with_rng(config, catalog, CardEffectRegistry::standard(), decks, GameRng::new(seed))
    }

    /// Capture state and RNG position.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    /// Resume a match from a snapshot.
    pub fn restore(snapshot: MatchSnapshot, catalog: CardCatalog, registry: CardEffectRegistry) -> Result<Self> {
        snapshot.state.config.validate()?;
        registry.validate()?;
        registry.validate_catalog(&catalog)?;
        Ok(Self {
            state: snapshot.state,
            rng: GameRng::from_state(&snapshot.rng),
            catalog: Arc::new(catalog),
            registry: Arc::new(registry),
            hub: SignalHub::new(),
            auras: AuraCalculator::standard(),
        })
    }

    /// Independent copy for lookahead. Subscribers are not carried over.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            state: self.state.clone(),
            rng: self.rng.fork(),
            catalog: Arc::clone(&self.catalog),
            registry: Arc::clone(&self.registry),
            hub: SignalHub::new(),
            auras: self.auras,
        }
    }
}

impl<R: RandomSource> MatchEngine<R> {
    /// Build and deal a match.
    ///
    /// Fails if the config is invalid, the registry is incomplete, a
    /// catalog card carries an unknown effect key, or a deck names a card
    /// the catalog does not know.
    pub fn with_rng(
        config: MatchConfig,
        catalog: CardCatalog,
        registry: CardEffectRegistry,
        decks: PlayerMap<Vec<CardId>>,
        mut rng: R,
    ) -> Result<Self> {
        config.validate()?;
        registry.validate()?;
        registry.validate_catalog(&catalog)?;

        let mut state = MatchState::new(config);
        for (player, ids) in decks.iter() {
            let mut deck = Vec::with_capacity(ids.len());
            for &id in ids {
                let def = catalog.get(id).ok_or(RegistryError::UnknownCard(id))?;
                let uid = state.alloc_uid();
                deck.push(Card::from_definition(def, uid, player));
            }
            rng.shuffle(&mut deck);
            state.player_mut(player).deck = deck.into_iter().collect();
        }

        let mut engine = Self {
            state,
            rng,
            catalog: Arc::new(catalog),
            registry: Arc::new(registry),
            hub: SignalHub::new(),
            auras: AuraCalculator::standard(),
        };
        tracing::info!(seed = ?engine.rng.checkpoint().map(|s| s.seed), "match dealt");
        turn::begin_match(&mut engine.processor());
        Ok(engine)
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn registry(&self) -> &CardEffectRegistry {
        &self.registry
    }

    /// Register a UI subscriber.
    pub fn subscribe(&mut self, sink: impl SignalSink + 'static) {
        self.hub.subscribe(sink);
    }

    /// A player's current derived influence.
    #[must_use]
    pub fn influence(&self, player: PlayerId) -> i32 {
        self.auras.derived_influence(&self.state, player)
    }

    /// Strength of a card on either board.
    #[must_use]
    pub fn card_strength(&self, uid: CardUid) -> Option<i32> {
        self.auras.card_strength(&self.state, uid)
    }

    /// Complete `player`'s pending selection with an optional target.
    pub fn resolve_selection(&mut self, player: PlayerId, target: Option<CardUid>) -> ActionOutcome {
        if self.state.is_over() {
            return self.reject(Rejection::GameOver);
        }
        match self.state.pending {
            Some(pending) if pending.acting_player == player => {
                self.processor().run([EffectEvent::StealResolve { player, target }]);
                self.settle();
                ActionOutcome::Applied
            }
            _ => self.reject(Rejection::NoSelection(player)),
        }
    }

    /// Abandon `player`'s pending selection.
    pub fn cancel_selection(&mut self, player: PlayerId) -> ActionOutcome {
        match self.state.pending {
            Some(pending) if pending.acting_player == player => {
                self.processor().run([EffectEvent::CancelSelection { player }]);
                self.settle();
                ActionOutcome::Applied
            }
            _ => self.reject(Rejection::NoSelection(player)),
        }
    }

    /// Drain externally supplied events.
    pub fn submit_events(&mut self, events: impl IntoIterator<Item = EffectEvent>) -> DrainReport {
        let report = self.processor().run(events);
        self.settle();
        report
    }

    fn processor(&mut self) -> EffectProcessor<'_, R> {
        EffectProcessor {
            state: &mut self.state,
            rng: &mut self.rng,
            hub: &mut self.hub,
            auras: self.auras,
        }
    }

    /// A seat left with neither deck nor hand loses as soon as a drain completes.
    fn settle(&mut self) {
        if !self.state.is_over() {
            turn::check_exhaustion(&mut self.state, &[PlayerId::ONE, PlayerId::TWO]);
        }
    }

    fn reject(&mut self, rejection: Rejection) -> ActionOutcome {
        tracing::debug!(%rejection, "request rejected");
        self.state.log(format!("Rejected: {rejection}"));
        ActionOutcome::Rejected(rejection)
    }

    /// Common checks for anything `player` does on their turn.
    fn check_turn(&self, player: PlayerId) -> std::result::Result<(), Rejection> {
        if self.state.is_over() {
            return Err(Rejection::GameOver);
        }
        if self.state.pending.is_some() {
            return Err(Rejection::SelectionPending);
        }
        if self.state.current_player() != Some(player) {
            return Err(Rejection::NotYourTurn(player));
        }
        if self.state.player(player).flags.passed {
            return Err(Rejection::AlreadyPassed(player));
        }
        Ok(())
    }

    fn check_play(&self, player: PlayerId, uid: CardUid) -> std::result::Result<&Card, Rejection> {
        self.check_turn(player)?;
        let ps = self.state.player(player);
        let card = ps.hand.iter().find(|c| c.uid == uid).ok_or(Rejection::NotInHand(uid))?;
        if let Placement::Lane(lane) = card.placement {
            if !ps.board.has_room(lane, &self.state.config.lane_capacity) {
                return Err(Rejection::LaneFull(lane));
            }
        }
        let needed = economy::cost(card, &self.state, player);
        if !economy::can_afford(&self.state, player, card) {
            return Err(Rejection::InsufficientAp {
                needed,
                available: ps.ap,
            });
        }
        Ok(card)
    }
}

impl<R: RandomSource> MatchActions for MatchEngine<R> {
    fn legal_plays(&self, player: PlayerId) -> Vec<CardUid> {
        self.state
            .player(player)
            .hand
            .iter()
            .filter(|c| self.check_play(player, c.uid).is_ok())
            .map(|c| c.uid)
            .collect()
    }

    fn cost_of(&self, player: PlayerId, uid: CardUid) -> Option<u32> {
        let card = self.state.player(player).hand.iter().find(|c| c.uid == uid)?;
        Some(economy::cost(card, &self.state, player))
    }

    fn submit_play(&mut self, player: PlayerId, uid: CardUid) -> ActionOutcome {
        let card = match self.check_play(player, uid) {
            Ok(card) => card.clone(),
            Err(rejection) => return self.reject(rejection),
        };
        let cost = economy::cost(&card, &self.state, player);
        let mut events = vec![
            EffectEvent::SpendAp { player, amount: cost },
            EffectEvent::PlaceCard { player, uid },
        ];
        events.extend(self.registry.resolve(&PlayContext {
            state: &self.state,
            player,
            card: &card,
        }));
        tracing::debug!(%player, card = %card, cost, "play");
        self.processor().run(events);
        self.settle();
        ActionOutcome::Applied
    }

    fn submit_pass(&mut self, player: PlayerId) -> ActionOutcome {
        if let Err(rejection) = self.check_turn(player) {
            return self.reject(rejection);
        }
        turn::pass(&mut self.processor(), player);
        self.settle();
        ActionOutcome::Applied
    }

    fn end_turn(&mut self, player: PlayerId) -> ActionOutcome {
        if let Err(rejection) = self.check_turn(player) {
            return self.reject(rejection);
        }
        turn::end_turn(&mut self.processor(), player);
        self.settle();
        ActionOutcome::Applied
    }

    fn result(&self) -> Option<GameResult> {
        self.state.result()
    }
}

impl<R: RandomSource> std::fmt::Debug for MatchEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("round", &self.state.round)
            .field("turn", &self.state.turn)
            .field("phase", &self.state.phase)
            .field("hub", &self.hub)
            .finish_non_exhaustive()
    }
}
