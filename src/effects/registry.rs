//! Card effect registry: maps a played card to its on-play events.
//!
//! Dispatch is keyed by [`EffectKey`], a closed enum with a snake_case
//! string form stored on card definitions. Older content that predates
//! effect keys is served by a legacy name-to-key alias table. Both tables
//! are validated when a match is built, so a misspelt key is caught before
//! play instead of silently doing nothing.

use rustc_hash::FxHashMap;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::cards::{Card, CardCatalog};
use crate::core::{MatchState, PlayerId, RegistryError};
use crate::selection::StealVariant;
use crate::triggers::TrapKind;
use crate::zones::{Lane, PermanentSlot};

use super::event::EffectEvent;

/// Every on-play effect the engine can dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum EffectKey {
    GrantAp,
    DrawTwo,
    Rally,
    SmearCampaign,
    Investigation,
    ScandalTrap,
    AmbushTrap,
    LeakTrap,
    FilibusterTrap,
    Bodyguard,
    MirrorPolicy,
    Opportunist,
    Bribe,
    Blackmail,
    Purge,
    Recall,
    Reform,
    Austerity,
    Grassroots,
    Wiretap,
    EmergencyPowers,
    GagOrder,
    Recycle,
    Tenure,
    Whistleblower,
    Repeal,
    Pardon,
}

/// What a handler gets to look at.
#[derive(Clone, Copy, Debug)]
pub struct PlayContext<'a> {
    /// State before the card is placed.
    pub state: &'a MatchState,
    pub player: PlayerId,
    /// The card being played.
    pub card: &'a Card,
}

impl PlayContext<'_> {
    #[must_use]
    pub fn opponent(&self) -> PlayerId {
        self.player.other()
    }
}

/// Produces the events a card triggers when played.
pub type EffectHandler = fn(&PlayContext<'_>) -> Vec<EffectEvent>;

/// Dispatch table from effect keys to handlers.
///
/// ## Example
///
/// ```
/// use influence_ccg::effects::{CardEffectRegistry, EffectKey};
///
/// let registry = CardEffectRegistry::standard();
/// assert!(registry.validate().is_ok());
/// assert!(registry.handler(EffectKey::Rally).is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardEffectRegistry {
    handlers: FxHashMap<EffectKey, EffectHandler>,
    aliases: FxHashMap<String, String>,
}

impl CardEffectRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a handler for every key and the legacy alias table.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for key in EffectKey::iter() {
            registry.register(key, standard_handler(key));
        }
        for (name, key) in LEGACY_ALIASES {
            registry.alias(*name, *key);
        }
        registry
    }

    /// Register or replace the handler for `key`.
    pub fn register(&mut self, key: EffectKey, handler: EffectHandler) {
        self.handlers.insert(key, handler);
    }

    /// Map a card name to an effect key string.
    pub fn alias(&mut self, name: impl Into<String>, key: impl Into<String>) {
        self.aliases.insert(name.into(), key.into());
    }

    #[must_use]
    pub fn handler(&self, key: EffectKey) -> Option<EffectHandler> {
        self.handlers.get(&key).copied()
    }

    /// Check that every key has a handler and every alias points at one.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if let Some(key) = EffectKey::iter().find(|k| !self.handlers.contains_key(k)) {
            return Err(RegistryError::MissingHandler(key.to_string()));
        }
        let mut aliases: Vec<_> = self.aliases.iter().collect();
        aliases.sort();
        for (alias, key) in aliases {
            let registered = key.parse::<EffectKey>().is_ok_and(|k| self.handlers.contains_key(&k));
            if !registered {
                return Err(RegistryError::DanglingAlias {
                    alias: alias.clone(),
                    key: key.clone(),
                });
            }
        }
        Ok(())
    }

    /// Check that every catalog card's effect key parses.
    pub fn validate_catalog(&self, catalog: &CardCatalog) -> Result<(), RegistryError> {
        for def in catalog.iter() {
            if let Some(key) = &def.effect_key {
                if key.parse::<EffectKey>().is_err() {
                    return Err(RegistryError::UnknownEffectKey {
                        card: def.name.clone(),
                        key: key.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Effect key for a card: its own key first, then the legacy alias.
    ///
    /// `Ok(None)` means the card has no on-play effect. `Err` carries the
    /// string that failed to parse.
    pub fn key_for<'a>(&'a self, card: &'a Card) -> Result<Option<EffectKey>, &'a str> {
        let raw = match (&card.effect_key, self.aliases.get(&card.name)) {
            (Some(key), _) => key.as_str(),
            (None, Some(alias)) => alias.as_str(),
            (None, None) => return Ok(None),
        };
        raw.parse::<EffectKey>().map(Some).map_err(|_| raw)
    }

    /// On-play events for `ctx.card`.
    ///
    /// Unknown keys and missing handlers are logged no-ops.
    #[must_use]
    pub fn resolve(&self, ctx: &PlayContext<'_>) -> Vec<EffectEvent> {
        let key = match self.key_for(ctx.card) {
            Ok(Some(key)) => key,
            Ok(None) => {
                tracing::trace!(card = %ctx.card, "no on-play effect");
                return Vec::new();
            }
            Err(raw) => {
                tracing::warn!(card = %ctx.card, key = raw, "unknown effect key");
                return vec![EffectEvent::log(format!("{} has unknown effect `{raw}`", ctx.card))];
            }
        };
        match self.handler(key) {
            Some(handler) => handler(ctx),
            None => {
                tracing::warn!(card = %ctx.card, %key, "no handler registered");
                vec![EffectEvent::log(format!("{} has no handler for `{key}`", ctx.card))]
            }
        }
    }
}

/// Names of older cards that carry no effect key.
pub const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("Spin Doctor", "rally"),
    ("Old Guard", "tenure"),
    ("Leaked Memo", "whistleblower"),
    ("Backroom Deal", "bribe"),
];

fn standard_handler(key: EffectKey) -> EffectHandler {
    match key {
        EffectKey::GrantAp => |ctx| vec![EffectEvent::AdjustAp { player: ctx.player, delta: 1 }],
        EffectKey::DrawTwo => |ctx| vec![EffectEvent::DrawCards { player: ctx.player, count: 2 }],
        EffectKey::Rally => |ctx| {
            vec![EffectEvent::BuffStrongestGovernment {
                player: ctx.player,
                amount: 2,
            }]
        },
        EffectKey::SmearCampaign => |ctx| {
            vec![EffectEvent::DebuffStrongestGovernment {
                player: ctx.opponent(),
                amount: 2,
            }]
        },
        EffectKey::Investigation => |ctx| vec![EffectEvent::DeactivateStrongestGovernment { player: ctx.opponent() }],
        EffectKey::ScandalTrap => |ctx| trap(ctx, TrapKind::Scandal),
        EffectKey::AmbushTrap => |ctx| trap(ctx, TrapKind::Ambush),
        EffectKey::LeakTrap => |ctx| trap(ctx, TrapKind::MediaLeak),
        EffectKey::FilibusterTrap => |ctx| trap(ctx, TrapKind::Filibuster),
        EffectKey::Bodyguard => |ctx| vec![EffectEvent::ShieldStrongestGovernment { player: ctx.player }],
        EffectKey::MirrorPolicy => |ctx| vec![EffectEvent::SetMirror { player: ctx.player }],
        EffectKey::Opportunist => |ctx| vec![EffectEvent::SetOpportunist { player: ctx.player }],
        EffectKey::Bribe => |ctx| {
            vec![EffectEvent::StealStart {
                player: ctx.player,
                variant: StealVariant::Bribe,
            }]
        },
        EffectKey::Blackmail => |ctx| {
            vec![EffectEvent::StealStart {
                player: ctx.player,
                variant: StealVariant::Blackmail,
            }]
        },
        EffectKey::Purge => |ctx| vec![EffectEvent::DestroyWeakestGovernment { player: ctx.opponent() }],
        EffectKey::Recall => |ctx| vec![EffectEvent::ReturnStrongestToHand { player: ctx.opponent() }],
        EffectKey::Reform => |ctx| vec![EffectEvent::CleanseBoard { player: ctx.player }],
        EffectKey::Austerity => |ctx| {
            vec![EffectEvent::AdjustAp {
                player: ctx.opponent(),
                delta: -1,
            }]
        },
        EffectKey::Grassroots => |ctx| {
            vec![EffectEvent::BuffAllGovernment {
                player: ctx.player,
                amount: 1,
            }]
        },
        EffectKey::Wiretap => |ctx| {
            vec![
                EffectEvent::RevealHand { player: ctx.opponent() },
                EffectEvent::DisarmTrap { player: ctx.opponent() },
            ]
        },
        EffectKey::EmergencyPowers => |ctx| {
            vec![EffectEvent::GrantBonusAp {
                player: ctx.player,
                amount: 1,
            }]
        },
        EffectKey::GagOrder => |ctx| vec![EffectEvent::SkipNextDraw { player: ctx.opponent() }],
        EffectKey::Recycle => |ctx| vec![EffectEvent::RecoverFromDiscard { player: ctx.player }],
        EffectKey::Tenure => |ctx| vec![EffectEvent::ProtectCard { uid: ctx.card.uid }],
        EffectKey::Whistleblower => |ctx| {
            vec![EffectEvent::DiscardRandom {
                player: ctx.opponent(),
                count: 1,
            }]
        },
        EffectKey::Repeal => |ctx| {
            vec![EffectEvent::ClearPermanent {
                player: ctx.opponent(),
                slot: PermanentSlot::Government,
            }]
        },
        EffectKey::Pardon => pardon,
    }
}

fn trap(ctx: &PlayContext<'_>, kind: TrapKind) -> Vec<EffectEvent> {
    vec![EffectEvent::RegisterTrap {
        player: ctx.player,
        trap: kind,
    }]
}

fn pardon(ctx: &PlayContext<'_>) -> Vec<EffectEvent> {
    let board = &ctx.state.player(ctx.player).board;
    match board.lane(Lane::Government).iter().find(|c| !c.is_active()) {
        Some(card) => vec![EffectEvent::ReactivateCard { uid: card.uid }],
        None => vec![EffectEvent::log(format!("{} finds no one to pardon", ctx.player))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId, Placement};
    use crate::core::{CardUid, MatchConfig};

    fn card(def: &CardDefinition) -> Card {
        Card::from_definition(def, CardUid(7), PlayerId::ONE)
    }

    fn instant(name: &str) -> CardDefinition {
        CardDefinition::special(CardId::new(1), name, Placement::Lane(Lane::Instant))
    }

    #[test]
    fn test_standard_registry_is_valid() {
        let registry = CardEffectRegistry::standard();
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_missing_handler_detected() {
        let mut registry = CardEffectRegistry::new();
        registry.register(EffectKey::Rally, standard_handler(EffectKey::Rally));

        assert!(matches!(registry.validate(), Err(RegistryError::MissingHandler(_))));
    }

    #[test]
    fn test_dangling_alias_detected() {
        let mut registry = CardEffectRegistry::standard();
        registry.alias("Ghost", "haunt");

        assert_eq!(
            registry.validate(),
            Err(RegistryError::DanglingAlias {
                alias: "Ghost".to_string(),
                key: "haunt".to_string(),
            })
        );
    }

    #[test]
    fn test_catalog_validation() {
        let registry = CardEffectRegistry::standard();
        let good = CardCatalog::new().with(instant("Rally").with_effect(EffectKey::Rally));
        let bad = CardCatalog::new().with(instant("Spin").with_effect_key("spin"));

        assert!(registry.validate_catalog(&good).is_ok());
        assert!(matches!(
            registry.validate_catalog(&bad),
            Err(RegistryError::UnknownEffectKey { .. })
        ));
    }

    #[test]
    fn test_key_takes_precedence_over_alias() {
        let registry = CardEffectRegistry::standard();
        let keyed = card(&instant("Spin Doctor").with_effect(EffectKey::DrawTwo));
        let aliased = card(&instant("Spin Doctor"));
        let plain = card(&instant("Nobody"));

        assert_eq!(registry.key_for(&keyed), Ok(Some(EffectKey::DrawTwo)));
        assert_eq!(registry.key_for(&aliased), Ok(Some(EffectKey::Rally)));
        assert_eq!(registry.key_for(&plain), Ok(None));
    }

    #[test]
    fn test_unknown_key_resolves_to_log() {
        let registry = CardEffectRegistry::standard();
        let state = MatchState::new(MatchConfig::default());
        let spin = card(&instant("Spin").with_effect_key("spin"));
        let ctx = PlayContext {
            state: &state,
            player: PlayerId::ONE,
            card: &spin,
        };

        let events = registry.resolve(&ctx);
        assert!(matches!(events.as_slice(), [EffectEvent::Log { .. }]));
    }

    #[test]
    fn test_handlers_target_the_right_side() {
        let registry = CardEffectRegistry::standard();
        let state = MatchState::new(MatchConfig::default());
        let smear = card(&instant("Smear").with_effect(EffectKey::SmearCampaign));
        let ctx = PlayContext {
            state: &state,
            player: PlayerId::ONE,
            card: &smear,
        };

        assert_eq!(
            registry.resolve(&ctx),
            vec![EffectEvent::DebuffStrongestGovernment {
                player: PlayerId::TWO,
                amount: 2,
            }]
        );
    }
}
