//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::sync::mpsc::{self, Receiver};

use influence_ccg::cards::{Card, CardDefinition, CardId, Placement};
use influence_ccg::core::{CardUid, FixedRng, MatchConfig, MatchPhase, MatchState, PlayerId, PlayerMap};
use influence_ccg::effects::{DrainReport, EffectEvent, EffectProcessor};
use influence_ccg::games::starter::StarterBuilder;
use influence_ccg::rules::MatchEngine;
use influence_ccg::signals::{SignalHub, UiSignal};
use influence_ccg::zones::Lane;

/// Route engine tracing to the test harness. Set `RUST_LOG` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A bare match state driven directly through the effect processor.
pub struct Table {
    pub state: MatchState,
    pub rng: FixedRng,
    hub: SignalHub,
    signals: Receiver<UiSignal>,
    next_template: u32,
}

impl Table {
    pub fn new() -> Self {
        Self::with_config(MatchConfig::default())
    }

    pub fn with_config(config: MatchConfig) -> Self {
        init_tracing();
        let (tx, rx) = mpsc::channel();
        let mut hub = SignalHub::new();
        hub.subscribe(tx);
        let mut state = MatchState::new(config);
        state.phase = MatchPhase::PlayerTurn(PlayerId::ONE);
        Self {
            state,
            rng: FixedRng::always(1),
            hub,
            signals: rx,
            next_template: 100,
        }
    }

    fn instantiate(&mut self, player: PlayerId, def: &CardDefinition) -> Card {
        let uid = self.state.alloc_uid();
        Card::from_definition(def, uid, player)
    }

    /// Put a card straight onto `player`'s board.
    pub fn place(&mut self, player: PlayerId, def: &CardDefinition) -> CardUid {
        let card = self.instantiate(player, def);
        let uid = card.uid;
        let caps = self.state.config.lane_capacity;
        let board = &mut self.state.player_mut(player).board;
        match def.placement {
            Placement::Lane(lane) => board.place(lane, card, &caps).expect("lane full"),
            Placement::Permanent(slot) => {
                board.set_permanent(slot, card);
            }
        }
        uid
    }

    /// Put a card into `player`'s hand.
    pub fn give(&mut self, player: PlayerId, def: &CardDefinition) -> CardUid {
        let card = self.instantiate(player, def);
        let uid = card.uid;
        self.state.player_mut(player).hand.push_back(card);
        uid
    }

    /// Add `count` copies of a card to the bottom of `player`'s deck.
    pub fn stack_deck(&mut self, player: PlayerId, def: &CardDefinition, count: usize) {
        for _ in 0..count {
            let card = self.instantiate(player, def);
            self.state.player_mut(player).deck.push_back(card);
        }
    }

    /// A fresh government definition.
    pub fn gov(&mut self, tier: u8, influence: i32) -> CardDefinition {
        self.next_template += 1;
        CardDefinition::government(CardId::new(self.next_template), format!("Member {}", self.next_template), tier, influence)
    }

    /// A fresh special definition.
    pub fn special(&mut self, lane: Lane) -> CardDefinition {
        self.next_template += 1;
        CardDefinition::special(
            CardId::new(self.next_template),
            format!("Special {}", self.next_template),
            Placement::Lane(lane),
        )
    }

    pub fn run(&mut self, events: impl IntoIterator<Item = EffectEvent>) -> DrainReport {
        EffectProcessor::new(&mut self.state, &mut self.rng, &mut self.hub).run(events)
    }

    pub fn processor(&mut self) -> EffectProcessor<'_, FixedRng> {
        EffectProcessor::new(&mut self.state, &mut self.rng, &mut self.hub)
    }

    /// Signals emitted since the last call.
    pub fn signals(&self) -> Vec<UiSignal> {
        self.signals.try_iter().collect()
    }

    pub fn log_contains(&self, needle: &str) -> bool {
        self.state.log.iter().any(|line| line.contains(needle))
    }

    pub fn log_position(&self, needle: &str) -> Option<usize> {
        self.state.log.iter().position(|line| line.contains(needle))
    }
}

/// Engine over unshuffled decks: the first cards of each list form the
/// opening hand.
pub fn scripted_engine(one: Vec<CardId>, two: Vec<CardId>, rolls: Vec<u32>) -> MatchEngine<FixedRng> {
    init_tracing();
    StarterBuilder::new()
        .decks(PlayerMap::from_pair(one, two))
        .build_with_rng(FixedRng::new(rolls))
        .expect("valid starter match")
}

/// Every uid in the match appears exactly once.
pub fn assert_unique_residency(state: &MatchState) {
    let mut uids: Vec<CardUid> = state.all_uids().collect();
    let total = uids.len();
    uids.sort();
    uids.dedup();
    assert_eq!(uids.len(), total, "a uid is resident in more than one container");
}

/// Lanes never exceed capacity.
pub fn assert_lanes_within_capacity(state: &MatchState) {
    let caps = state.config.lane_capacity;
    for (player, ps) in state.players.iter() {
        for lane in Lane::ALL {
            assert!(
                ps.board.lane(lane).len() <= caps.of(lane),
                "{player}'s {lane} lane over capacity"
            );
        }
    }
}
