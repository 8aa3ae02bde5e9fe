use crate::cards::{CardCatalog, CardDefinition, CardId, CardTag, Placement};
use crate::effects::EffectKey;
use crate::zones::{Lane, PermanentSlot};

/// Starter card ids.
pub mod ids {
    use crate::cards::CardId;

    // Government
    pub const BACKBENCHER: CardId = CardId::new(1);
    pub const PARTY_WHIP: CardId = CardId::new(2);
    pub const COMMITTEE_CHAIR: CardId = CardId::new(3);
    pub const CABINET_MINISTER: CardId = CardId::new(4);
    pub const PRIME_MINISTER: CardId = CardId::new(5);
    pub const SPIN_DOCTOR: CardId = CardId::new(6);
    pub const OLD_GUARD: CardId = CardId::new(7);
    pub const CHIEF_OF_STAFF: CardId = CardId::new(8);
    pub const HOME_SECRETARY: CardId = CardId::new(9);

    // Public lane
    pub const TABLOID_EDITOR: CardId = CardId::new(20);
    pub const OMBUDSMAN: CardId = CardId::new(21);
    pub const VOLUNTEER: CardId = CardId::new(22);
    pub const FIXER: CardId = CardId::new(23);
    pub const LOBBYIST: CardId = CardId::new(24);
    pub const UNION_ORGANISER: CardId = CardId::new(25);

    // Instants
    pub const SMEAR_CAMPAIGN: CardId = CardId::new(30);
    pub const SNAP_POLL: CardId = CardId::new(31);
    pub const DOSSIER: CardId = CardId::new(32);
    pub const AMBUSH_INTERVIEW: CardId = CardId::new(33);
    pub const LEAK_HUNT: CardId = CardId::new(34);
    pub const PROCEDURAL_MOTION: CardId = CardId::new(35);
    pub const SECURITY_DETAIL: CardId = CardId::new(36);
    pub const MIRROR_POLICY: CardId = CardId::new(37);
    pub const PURGE: CardId = CardId::new(38);
    pub const NO_CONFIDENCE: CardId = CardId::new(39);
    pub const REFORM_BILL: CardId = CardId::new(40);
    pub const GAG_ORDER: CardId = CardId::new(41);
    pub const ARCHIVE_DIG: CardId = CardId::new(42);
    pub const LEAKED_MEMO: CardId = CardId::new(43);
    pub const REPEAL_ACT: CardId = CardId::new(44);
    pub const ROYAL_PARDON: CardId = CardId::new(45);
    pub const BACKROOM_DEAL: CardId = CardId::new(46);
    pub const BUDGET_SURPLUS: CardId = CardId::new(47);

    // Permanents
    pub const LANDSLIDE: CardId = CardId::new(50);
    pub const STATE_OF_EMERGENCY: CardId = CardId::new(51);
    pub const MINISTRY_OF_INFORMATION: CardId = CardId::new(52);
}

fn public(id: CardId, name: &str) -> CardDefinition {
    CardDefinition::special(id, name, Placement::Lane(Lane::Public))
}

fn instant(id: CardId, name: &str, key: EffectKey) -> CardDefinition {
    CardDefinition::special(id, name, Placement::Lane(Lane::Instant)).with_effect(key)
}

fn permanent(id: CardId, name: &str, slot: PermanentSlot, tag: CardTag) -> CardDefinition {
    CardDefinition::special(id, name, Placement::Permanent(slot)).with_tag(tag)
}

/// Every starter card.
#[must_use]
pub fn starter_catalog() -> CardCatalog {
    use ids::*;

    CardCatalog::new()
        // Government
        .with(CardDefinition::government(BACKBENCHER, "Backbencher", 1, 2))
        .with(CardDefinition::government(PARTY_WHIP, "Party Whip", 2, 3))
        .with(CardDefinition::government(COMMITTEE_CHAIR, "Committee Chair", 2, 3).with_effect(EffectKey::Rally))
        .with(CardDefinition::government(CABINET_MINISTER, "Cabinet Minister", 3, 5))
        .with(CardDefinition::government(PRIME_MINISTER, "Prime Minister", 3, 6))
        .with(CardDefinition::government(SPIN_DOCTOR, "Spin Doctor", 1, 1))
        .with(CardDefinition::government(OLD_GUARD, "Old Guard", 2, 2))
        .with(
            CardDefinition::government(CHIEF_OF_STAFF, "Chief of Staff", 2, 2)
                .with_effect(EffectKey::EmergencyPowers),
        )
        .with(
            CardDefinition::government(HOME_SECRETARY, "Home Secretary", 3, 4)
                .with_effect(EffectKey::Investigation),
        )
        // Public lane
        .with(
            public(TABLOID_EDITOR, "Tabloid Editor")
                .with_tag(CardTag::Media)
                .with_effect(EffectKey::Opportunist),
        )
        .with(
            public(OMBUDSMAN, "Ombudsman")
                .with_tag(CardTag::Watchdog)
                .with_effect(EffectKey::Wiretap),
        )
        .with(public(VOLUNTEER, "Campaign Volunteer").with_effect(EffectKey::Grassroots))
        .with(public(FIXER, "Fixer").with_effect(EffectKey::Bribe))
        .with(public(LOBBYIST, "Lobbyist").with_effect(EffectKey::Blackmail))
        .with(public(UNION_ORGANISER, "Union Organiser").with_effect(EffectKey::Austerity))
        // Instants
        .with(instant(SMEAR_CAMPAIGN, "Smear Campaign", EffectKey::SmearCampaign))
        .with(instant(SNAP_POLL, "Snap Poll", EffectKey::DrawTwo))
        .with(instant(DOSSIER, "Dossier", EffectKey::ScandalTrap))
        .with(instant(AMBUSH_INTERVIEW, "Ambush Interview", EffectKey::AmbushTrap))
        .with(instant(LEAK_HUNT, "Leak Hunt", EffectKey::LeakTrap))
        .with(instant(PROCEDURAL_MOTION, "Procedural Motion", EffectKey::FilibusterTrap))
        .with(instant(SECURITY_DETAIL, "Security Detail", EffectKey::Bodyguard))
        .with(instant(MIRROR_POLICY, "Mirror Policy", EffectKey::MirrorPolicy))
        .with(instant(PURGE, "Purge", EffectKey::Purge))
        .with(instant(NO_CONFIDENCE, "Vote of No Confidence", EffectKey::Recall))
        .with(instant(REFORM_BILL, "Reform Bill", EffectKey::Reform))
        .with(instant(GAG_ORDER, "Gag Order", EffectKey::GagOrder))
        .with(instant(ARCHIVE_DIG, "Archive Dig", EffectKey::Recycle))
        .with(CardDefinition::special(LEAKED_MEMO, "Leaked Memo", Placement::Lane(Lane::Instant)))
        .with(instant(REPEAL_ACT, "Repeal Act", EffectKey::Repeal))
        .with(instant(ROYAL_PARDON, "Royal Pardon", EffectKey::Pardon))
        .with(CardDefinition::special(BACKROOM_DEAL, "Backroom Deal", Placement::Lane(Lane::Instant)))
        .with(instant(BUDGET_SURPLUS, "Budget Surplus", EffectKey::GrantAp))
        // Permanents
        .with(permanent(LANDSLIDE, "Landslide Mandate", PermanentSlot::Government, CardTag::Mandate))
        .with(permanent(
            STATE_OF_EMERGENCY,
            "State of Emergency",
            PermanentSlot::Government,
            CardTag::Martial,
        ))
        .with(permanent(
            MINISTRY_OF_INFORMATION,
            "Ministry of Information",
            PermanentSlot::Public,
            CardTag::Propaganda,
        ))
}

/// The 30-card list each starter deck is built from.
pub const STARTER_DECK: &[CardId] = &[
    ids::BACKBENCHER,
    ids::BACKBENCHER,
    ids::BACKBENCHER,
    ids::PARTY_WHIP,
    ids::PARTY_WHIP,
    ids::COMMITTEE_CHAIR,
    ids::CABINET_MINISTER,
    ids::PRIME_MINISTER,
    ids::SPIN_DOCTOR,
    ids::OLD_GUARD,
    ids::CHIEF_OF_STAFF,
    ids::HOME_SECRETARY,
    ids::TABLOID_EDITOR,
    ids::OMBUDSMAN,
    ids::VOLUNTEER,
    ids::FIXER,
    ids::LOBBYIST,
    ids::UNION_ORGANISER,
    ids::SMEAR_CAMPAIGN,
    ids::SNAP_POLL,
    ids::DOSSIER,
    ids::AMBUSH_INTERVIEW,
    ids::PROCEDURAL_MOTION,
    ids::SECURITY_DETAIL,
    ids::MIRROR_POLICY,
    ids::PURGE,
    ids::GAG_ORDER,
    ids::BUDGET_SURPLUS,
    ids::LANDSLIDE,
    ids::MINISTRY_OF_INFORMATION,
];
