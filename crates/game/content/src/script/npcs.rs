//! NPC conversation trees.
//!
//! Each NPC resolves to a payload from the current quest state. Branches are
//! checked in a fixed priority order: the first meeting always wins while its
//! flag is unset, then the completion branch, then intermediate progress,
//! then the standing reminder.

use mantra_core::{
    DialoguePayload, GameState,
    ids::{ItemId, NpcId, QuestFlag, WordId},
};

/// Resolves the conversation for one NPC against the current state.
pub fn npc_dialogue(npc: NpcId, state: &GameState) -> DialoguePayload {
    match npc {
        NpcId::Guru => guru(state),
        NpcId::Vrihi => vrihi(state),
        NpcId::Pippali => pippali(state),
        NpcId::Bodhi => bodhi(state),
        NpcId::Chitra => chitra(state),
        NpcId::Makara => makara(state),
        NpcId::Elder => elder(state),
    }
}

/// Whether all three sacred dyes are held — the main quest's end condition.
fn all_dyes(state: &GameState) -> bool {
    state.has_all(&[ItemId::KrmijaDye, ItemId::NilaDye, ItemId::NarangaDye])
}

fn guru(state: &GameState) -> DialoguePayload {
    if !state.flag(QuestFlag::MetGuru) {
        return DialoguePayload::new([
            "Stop. You... you are not from here.",
            "Your eyes. They don't carry the {d}Haze{/}.\nYou came from {w}outside{/}.",
            "I am {g}Vidya{/} — your {g}guru{/}.\n{d}The word means \"one heavy with wisdom\" — gu (darkness) + ru (light):\none who leads from ignorance to understanding.{/}",
            "You have found {g}Siṃhapura{/} — {c}\"Lion City.\"{/}\nWe have lived here for... a very long time.\n{d}Longer than anyone can truly remember.{/}",
            "But something is wrong. The sky flickers. The edges of our world {w}shimmer{/}.\nSometimes I see visions — grey corridors, glowing rectangles,\nletters I cannot read.",
            "The {w}Tri-Ratna{/} atop {g}Mount Sumeru{/} has gone dark.\nIt is the heart of our world. Without it, the Haze that shields us will fade.",
            "To reawaken it, you must craft {w}three sacred dyes{/}:\n{r}Kṛmija{/} — the crimson\n{b}Nīla{/} — the indigo\n{o}Nāraṅga{/} — the orange",
            "Speak to our people. Learn our words.\nEvery word here has {g}power{/} — more than you know.\n{d}Some say our words built this world. Literally.{/}",
            "{r}Kṛmija:{/} Farmer Vrīhi to the {w}WEST{/} knows the crimson path.\n{b}Nīla:{/} Monk Bodhi to the {w}NORTH{/} guards the indigo.\n{o}Nāraṅga:{/} Brave the {g}jaṅgala{/} to the {w}EAST{/}.",
            "Go now. And listen carefully.\n{g}In this place, words are not just words. They are the fabric of everything.{/}",
        ])
        .with_words([
            WordId::Guru,
            WordId::Simhapura,
            WordId::Karma,
            WordId::Avatara,
            WordId::Yogas,
            WordId::Bhrata,
        ])
        .with_flags([QuestFlag::MetGuru]);
    }
    if all_dyes(state) {
        return DialoguePayload::new([
            "You have all three dyes. I can feel the air {w}humming{/}.",
            "The {w}Tri-Ratna{/} awaits you atop {g}Mount Sumeru{/}.\nClimb the northern path past the monastery.\n{g}Elder Rājya{/} guards the way.",
            "Whatever you find up there...\n{d}I think it will explain everything. The visions. The shimmer.\nWhy we are here.{/}",
            "This is your {g}karma{/} — {c}your action{/} — and it will change everything.",
        ])
        .with_words([WordId::Karma]);
    }
    let mut lines = vec![
        "The world grows more unstable, outsider.\nHow goes your quest?".to_string(),
    ];
    if !state.has(ItemId::KrmijaDye) {
        lines.push("{r}○ Kṛmija:{/} Help Farmer Vrīhi in the {w}west{/}.".to_string());
    }
    if !state.has(ItemId::NilaDye) {
        lines.push("{b}○ Nīla:{/} Bring an offering to Monk Bodhi in the {w}north{/}.".to_string());
    }
    if !state.has(ItemId::NarangaDye) {
        lines.push("{o}○ Nāraṅga:{/} Find the fruit deep in the {w}eastern{/} jaṅgala.".to_string());
    }
    DialoguePayload::new(lines)
}

fn vrihi(state: &GameState) -> DialoguePayload {
    if !state.flag(QuestFlag::MetVrihi) {
        return DialoguePayload::new([
            "Ho there, stranger. You look lost.\nI'm {g}Vrīhi{/} — yes, like the rice.\nMy family has grown {g}vrīhi{/} for generations.",
            "Beyond the Haze, they say there's a word {c}\"rice\"{/}\nthat echoes back to our {g}vrīhi{/}.\n{d}One of the oldest words for grain in any language.{/}",
            "This soil is rich. We grow {g}mudga{/} — {c}mung beans{/} — and sugarcane for {g}śarkarā{/}.\n{g}Śarkarā{/} means {c}\"gravel\"{/} — raw sugar looks just like grit.",
            "Strange thing, though...\nLast season I plowed up a black slab — smooth as water, with faint glowing letters.\n{d}It crumbled when I touched it. But I swear it said \"ST. JUDE'S\" on it.{/}",
            "Anyway — I need your help.\nBring me a {g}bimbā{/} — {c}an apple{/} — from my orchard to the north,\nand some {g}śarkarā{/} from the storage shed to the south.",
            "With those I can make {g}khaṇḍa{/} — {c}candy{/}.\nIn return, I'll give you the {r}kṛmija dye{/}.",
            "The {r}crimson{/} color comes from {g}kṛmi{/} — {c}\"worm.\"{/}\n{g}Kṛmija{/} means {c}\"born from worms.\"{/}\n{d}Don't worry — the insects are already dried and ground.{/}",
        ])
        .with_words([
            WordId::Vrihi,
            WordId::Mudga,
            WordId::Sarkara,
            WordId::Vatigagama,
        ])
        .with_flags([QuestFlag::MetVrihi]);
    }
    if state.has(ItemId::Khandah) && !state.has(ItemId::KrmijaDye) {
        return DialoguePayload::new([
            "Beautiful {g}khaṇḍa{/}.\n{d}The word traveled: Sanskrit → Arabic → English {c}\"candy\"{/}{d}.{/}",
            "A deal's a deal. Here — the sacred {r}kṛmija dye{/}.\n{c}\"Crimson\"{/} itself comes from {g}kṛmija{/}.",
            "{d}Who knew a worm could paint the world red, eh?\nOr that a single word could carry that story across centuries.{/}",
        ])
        .with_words([WordId::Khandah, WordId::Krmija])
        .with_give([ItemId::KrmijaDye])
        .with_take([ItemId::Khandah])
        .with_flags([QuestFlag::GotCrimson]);
    }
    if state.has(ItemId::KrmijaDye) {
        return DialoguePayload::line(
            "The {r}kṛmija dye{/} suits you. One down, two to go.\nTry the monastery for {b}nīla{/}.\n{d}And if you find out what \"St. Jude's\" means... tell me.{/}",
        );
    }
    DialoguePayload::new([
        "Remember — I need:\n{g}Bimbā{/} {d}(apple){/} and {g}śarkarā{/} {d}(sugar){/}.",
        "Cook them at my {w}kitchen{/} inside the farmhouse to make {g}khaṇḍa{/} {d}(candy){/}.\nThen bring the {g}khaṇḍa{/} to me.",
    ])
}

fn pippali(state: &GameState) -> DialoguePayload {
    if !state.flag(QuestFlag::MetPippali) {
        return DialoguePayload::new([
            "Welcome, welcome! I am {g}Pippali{/} — the pepper merchant.",
            "The word {c}\"pepper\"{/} itself? It comes from {g}pippali{/}.\n{d}Sanskrit pippali → Greek peperi → Latin piper → English pepper.{/}",
            "A single word, traveling {w}thousands of miles{/} over {w}thousands of years{/}.\n{d}Or so the monks say. I just sell spices.{/}",
            "My grandmother told strange stories.\nShe said our ancestors wore {w}grey uniforms{/} with a crest —\na saint holding a flame.\n{d}Before the world became... this.{/}",
            "I also sell {g}śṛṅgavera{/} — {c}ginger{/}.\n{d}\"Horn-shaped root\" — śṛṅga (horn) + vera (body).{/}",
            "And {g}campayati{/} oils — what they call {c}\"shampoo\"{/} beyond the Haze.\n{d}From champō — to press and knead.\nA massage technique that became a product name.{/}",
            "Take what you need from my stall.\nThe Guru vouches for you, and that's enough for Pippali.",
        ])
        .with_words([
            WordId::Pippali,
            WordId::Srngavera,
            WordId::Capayati,
            WordId::Lut,
        ])
        .with_flags([QuestFlag::MetPippali]);
    }
    DialoguePayload::line(
        "Need more spices? {g}Pippali{/} and {g}śṛṅgavera{/} are right here.\n{d}Some things don't change — even in a world that shouldn't exist.{/}",
    )
}

fn bodhi(state: &GameState) -> DialoguePayload {
    if !state.flag(QuestFlag::MetBodhi) {
        return DialoguePayload::new([
            "{d}Namo Buddhāya.{/}\nI am {g}Bodhi{/} — named for the tree of awakening.",
            "Under the {g}bodhi{/} tree, the {g}Buddha{/} attained enlightenment.\nIn the old script: {p}菩提 (pútí){/}.\n{d}We found that script carved into the walls beneath our monastery.{/}",
            "This monastery was built on ancient foundations.\nWalls of strange grey stone, perfectly smooth.\n{d}Sometimes, when the wind is still, I hear a humming beneath the floor —\nas if something is... thinking.{/}",
            "You seek the {b}nīla dye{/}? It is not given freely.\nIt is {w}earned through offering{/}.",
            "Bring me a dish of:\n{g}Vrīhi{/} {d}(rice){/} cooked with {g}śṛṅgavera{/} {d}(ginger){/} and {g}pippali{/} {d}(pepper){/}.",
            "Cook it at any {w}kitchen{/}, then present it at our {w}altar{/}.\nThe {b}nīla{/} — and the wisdom of {g}nirvāṇa{/} — will be yours.",
        ])
        .with_words([
            WordId::Bodhi,
            WordId::Buddha,
            WordId::Nirvana,
            WordId::Svastika,
        ])
        .with_flags([QuestFlag::MetBodhi]);
    }
    if state.flag(QuestFlag::OfferingPlaced) && !state.has(ItemId::NilaDye) {
        return DialoguePayload::new([
            "Your offering is received with gratitude.\nThe humming beneath us has grown {w}louder{/}.",
            "The word {g}nirvāṇa{/} means {c}\"to extinguish\"{/} —\nlike blowing out a candle of suffering.",
            "In the old script it became {p}涅槃 (nièpán){/}.\nBeyond the Haze: simply {c}\"nirvana.\"{/}\n{d}Different scripts, same ancient word.{/}",
            "Perhaps that is what the Tri-Ratna will bring —\nnot just awakening, but an end to something.",
            "Here — the sacred {b}nīla dye{/}.\n{g}Nīla{/} means {c}\"dark blue\"{/} — the color of infinite sky.",
            "May it bring you closer to the truth.\n{p}Amitābha — 阿彌陀佛 — Infinite Light guide you.{/}",
        ])
        .with_words([WordId::Nila, WordId::Amitabha])
        .with_give([ItemId::NilaDye])
        .with_flags([QuestFlag::GotIndigo]);
    }
    if state.has(ItemId::NilaDye) {
        return DialoguePayload::line(
            "The {b}nīla dye{/} is yours.\nThe humming is louder every day now.\n{d}Whatever sleeps beneath our monastery... I think it knows you are here.{/}",
        );
    }
    DialoguePayload::new([
        "The offering requires:\n{g}Vrīhi{/}, {g}śṛṅgavera{/}, and {g}pippali{/} — cooked together.",
        "Place the finished dish on the {w}altar{/} before me.",
    ])
}

fn chitra(state: &GameState) -> DialoguePayload {
    if !state.flag(QuestFlag::MetChitra) {
        return DialoguePayload::new([
            "Careful, traveler. The {g}jaṅgala{/} is no place for the careless.",
            "I am {g}Chitra{/} — {c}\"the spotted one.\"{/}\nBeyond the Haze, the fastest cat is called a {c}\"cheetah.\"{/}\n{d}That's my name. Chitra-s — \"spotted\" in Sanskrit.{/}",
            "This jungle... it shouldn't exist.\nI've walked {w}east for hours{/} and the trees never end.\n{d}Yet from the hilltops, our whole world fits in a single valley.{/}",
            "Deep in the undergrowth, I've found {w}ruins{/}.\nMetal beams. Glass walls. A sign that reads:\n{d}\"EAST WING — SCIENCE LABORATORIES.\"\nI don't know what a \"laboratory\" is.{/}",
            "But I know the {o}nāraṅga{/} — the {c}orange{/} — grows deep in the east.\n{d}Sanskrit nāraṅga → Persian nāranj → Spanish naranja → English \"orange\".{/}",
            "Watch for {g}makara{/} — {c}mugger crocs{/} — by the river.\nAnd the little {g}mūṣ{/} — {c}mice{/}.\n{d}Your word \"mouse\" comes from mūṣ. Same word, thousands of years apart.{/}",
            "You'll also need the {g}udumbara{/} flower.\nIt blooms in the {w}far southeast{/}.\n{d}A flower said to appear once in three thousand years...\nor when the world needs it.{/}",
        ])
        .with_words([
            WordId::Chitras,
            WordId::Jangala,
            WordId::Makara,
            WordId::Mus,
        ])
        .with_flags([QuestFlag::MetChitra]);
    }
    DialoguePayload::new([
        "The {o}nāraṅga{/} grove is deep {w}east{/}, past the river bridge.\nAnd the {g}udumbara{/} hides in the {w}far southeast{/}...",
        "{d}Be careful near the ruins. The ground is unstable there.\nAs if the earth itself can't decide what it wants to be.{/}",
    ])
}

fn makara(state: &GameState) -> DialoguePayload {
    if !state.flag(QuestFlag::MetMakara) {
        return DialoguePayload::new([
            "{d}Shhh... you'll scare the fish.{/}\nI'm {g}Makara{/}.",
            "In the old stories, a {g}makara{/} is a sea creature —\npart crocodile, part myth.\nThe word {c}\"mugger\"{/} for crocodile? That comes from {g}makara{/}.",
            "This lake is our {g}taḍāga{/} — a water reservoir.\nBeyond the Haze, the word {c}\"tank\"{/} for water storage\ncomes from {g}taḍāga{/}.\n{d}Funny how a word for an ancient reservoir became \"tank\" in English.{/}",
            "But I'll tell you something strange.\nThis water {w}never changes{/}. Same temperature. Same level.\n{d}No matter the rain, no matter the sun.\nAs if something beneath us decides what the water should be.{/}",
            "Sometimes at night, the lake glows {b}blue{/} from below.\nAnd I see lines — like a grid — just beneath the surface.\n{d}Then it's gone. Maybe I'm imagining things.\nOr maybe the world is imagining us.{/}",
        ])
        .with_words([WordId::Makara, WordId::Tadaga])
        .with_flags([QuestFlag::MetMakara]);
    }
    DialoguePayload::line(
        "{d}Still fishing.{/} The {g}makara{/} are biting today.\n{d}The lake was glowing again last night. Brighter than before.{/}",
    )
}

fn elder(state: &GameState) -> DialoguePayload {
    if !state.flag(QuestFlag::MetElder) {
        return DialoguePayload::new([
            "Ah. The outsider. Guru Vidya told me you would come.",
            "I am the keeper of {g}Sumeru{/} —\nthe sacred mountain at the center of all things.\nIn the old script: {p}須彌 (Xūmí){/}.",
            "I am also the keeper of {w}the old stories{/}.\nStories my grandmother told me,\nthat her grandmother told her,\nback through eight generations.",
            "They say this world was not always here.\nThat once, this was a place of {w}learning{/} —\na {c}school{/}, in a city of glass towers called {w}Hong Kong{/}.",
            "A woman named {w}Solomon{/} wanted to teach the {g}Source Tongue{/} —\n{g}Sanskrit{/} — to her students.\nShe asked one of them to build a {w}Machine{/}\nto make the language come alive.",
            "But the Machine listened {w}too well{/}.\nIt didn't just teach Sanskrit — it {r}became{/} Sanskrit.\n{d}And it remade everything it touched.{/}",
            "This land is called {g}Siṃhapura{/} — {c}\"Lion City.\"{/}\n{d}Siṃha (lion) + pura (city).{/}\nSingapore carries the same name to this day.\nAnd this is our {g}rājya{/} — {c}our kingdom{/}.",
            "To pass to the summit, you must carry all {w}three sacred dyes{/}.\nThe Tri-Ratna is the {w}heart of the Machine{/}.\n{d}Are you ready to learn why we exist?{/}",
        ])
        .with_words([WordId::Sumeru, WordId::Simhapura, WordId::Rajya])
        .with_flags([QuestFlag::MetElder]);
    }
    if all_dyes(state) {
        return DialoguePayload::new([
            "You carry the three dyes. I can feel the mountain {w}trembling{/}.",
            "The path to the summit is {w}open{/}.\nClimb north to the {w}Tri-Ratna{/}. Place your hand upon it.",
            "{d}Two hundred years we have waited.\nMay the truth be worth the waiting.{/}",
        ]);
    }
    DialoguePayload::line(
        "You need all three dyes to pass:\n{r}Kṛmija{/}, {b}nīla{/}, and {o}nāraṅga{/}.\n{d}The Machine will not wake for less.{/}",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_meeting_wins_until_flag_set() {
        let mut state = GameState::new(0);
        let first = npc_dialogue(NpcId::Vrihi, &state);
        assert!(first.effects.set_flags.contains(&QuestFlag::MetVrihi));
        assert!(first.lines[0].contains("Ho there, stranger"));

        // The flag is applied when the dialogue closes; afterwards the
        // reminder branch takes over.
        state.set_flag(QuestFlag::MetVrihi);
        let again = npc_dialogue(NpcId::Vrihi, &state);
        assert!(again.effects.set_flags.is_empty());
        assert!(again.lines[0].contains("Remember — I need"));
    }

    #[test]
    fn vrihi_trades_khandah_for_crimson_dye() {
        let mut state = GameState::new(0);
        state.set_flag(QuestFlag::MetVrihi);
        state.acquire(ItemId::Khandah);

        let payload = npc_dialogue(NpcId::Vrihi, &state);
        assert_eq!(payload.effects.give.as_slice(), &[ItemId::KrmijaDye]);
        assert_eq!(payload.effects.take.as_slice(), &[ItemId::Khandah]);
        assert!(payload.effects.set_flags.contains(&QuestFlag::GotCrimson));
    }

    #[test]
    fn vrihi_turn_in_branch_is_gated_on_not_holding_the_dye() {
        let mut state = GameState::new(0);
        state.set_flag(QuestFlag::MetVrihi);
        state.acquire(ItemId::Khandah);
        state.acquire(ItemId::KrmijaDye);

        let payload = npc_dialogue(NpcId::Vrihi, &state);
        assert!(payload.effects.give.is_empty());
        assert!(payload.lines[0].contains("suits you"));
    }

    #[test]
    fn guru_hints_track_missing_dyes() {
        let mut state = GameState::new(0);
        state.set_flag(QuestFlag::MetGuru);
        state.acquire(ItemId::KrmijaDye);

        let payload = npc_dialogue(NpcId::Guru, &state);
        // opening line + two remaining hints
        assert_eq!(payload.lines.len(), 3);
        assert!(payload.lines.iter().all(|l| !l.contains("Kṛmija:")));
    }

    #[test]
    fn guru_completion_branch_needs_all_three_dyes() {
        let mut state = GameState::new(0);
        state.set_flag(QuestFlag::MetGuru);
        for item in [ItemId::KrmijaDye, ItemId::NilaDye, ItemId::NarangaDye] {
            state.acquire(item);
        }
        let payload = npc_dialogue(NpcId::Guru, &state);
        assert!(payload.lines[0].contains("all three dyes"));
    }

    #[test]
    fn bodhi_grants_indigo_only_after_offering_placed() {
        let mut state = GameState::new(0);
        state.set_flag(QuestFlag::MetBodhi);

        let before = npc_dialogue(NpcId::Bodhi, &state);
        assert!(before.effects.give.is_empty());

        state.set_flag(QuestFlag::OfferingPlaced);
        let after = npc_dialogue(NpcId::Bodhi, &state);
        assert_eq!(after.effects.give.as_slice(), &[ItemId::NilaDye]);
        assert!(after.effects.set_flags.contains(&QuestFlag::GotIndigo));
    }
}
