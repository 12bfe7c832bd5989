//! Persona catalog.
//!
//! A fixed, read-only list of professional archetypes. The catalog is built
//! once on first access and never changes at runtime. Saved cards only keep
//! a `(persona_id, persona_name)` snapshot, so every read path re-joins
//! against this catalog via [`resolve`].

use std::sync::LazyLock;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A named professional archetype with base and "evolved" flavor text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub description: String,
    pub evolved_name: String,
    pub evolved_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_persona_id: Option<String>,
}

struct Entry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    evolved_name: &'static str,
    evolved_description: &'static str,
    counter: Option<&'static str>,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "coffee-badger",
        name: "Coffee Badger",
        description: "Burrows into the break room at 9:02 and defends the last pot of dark roast with territorial ferocity.",
        evolved_name: "Caffeine Overlord",
        evolved_description: "Has ascended beyond the break room. The espresso machine now reports directly to them.",
        counter: Some("meeting-maximalist"),
    },
    Entry {
        id: "meeting-maximalist",
        name: "Meeting Maximalist",
        description: "Believes any problem can be solved with a sixty-minute sync and a follow-up to schedule the next sync.",
        evolved_name: "Calendar Tyrant",
        evolved_description: "Owns every free slot in the building and books the conference rooms a fiscal year in advance.",
        counter: Some("coffee-badger"),
    },
    Entry {
        id: "inbox-zero-monk",
        name: "Inbox Zero Monk",
        description: "Achieves spiritual clarity by archiving your urgent email unread.",
        evolved_name: "Enlightened Archivist",
        evolved_description: "Has transcended email entirely. Reachable only by carrier pigeon and quarterly review.",
        counter: Some("reply-all-warlord"),
    },
    Entry {
        id: "reply-all-warlord",
        name: "Reply-All Warlord",
        description: "Answers company-wide announcements with a heartfelt 'Thanks!' to four thousand colleagues.",
        evolved_name: "Distribution List Emperor",
        evolved_description: "Commands the largest mailing list in the org and is not afraid to use it.",
        counter: Some("inbox-zero-monk"),
    },
    Entry {
        id: "pyromancer-of-files",
        name: "Pyromancer of Files",
        description: "Finds catharsis in mass-deleting legacy documents.",
        evolved_name: "Archduke of Deletion",
        evolved_description: "Has reduced the shared drive to a single folder named 'final_FINAL_v2'.",
        counter: Some("spreadsheet-sorcerer"),
    },
    Entry {
        id: "spreadsheet-sorcerer",
        name: "Spreadsheet Sorcerer",
        description: "Bends reality with nested VLOOKUPs nobody else dares to open.",
        evolved_name: "Grand Pivot Wizard",
        evolved_description: "The quarterly forecast is a single cell whose formula is forty lines long and load-bearing.",
        counter: Some("pyromancer-of-files"),
    },
    Entry {
        id: "synergy-shaman",
        name: "Synergy Shaman",
        description: "Speaks fluent buzzword and can pivot any conversation into a paradigm shift.",
        evolved_name: "Chief Paradigm Officer",
        evolved_description: "Has leveraged so many core competencies that the org chart is now a Venn diagram.",
        counter: Some("mute-button-ninja"),
    },
    Entry {
        id: "mute-button-ninja",
        name: "Mute Button Ninja",
        description: "Has perfected the art of being 'on the call' while being absolutely elsewhere.",
        evolved_name: "Shadow Attendee",
        evolved_description: "Has attended three all-hands meetings this week without ever being seen or heard.",
        counter: Some("synergy-shaman"),
    },
    Entry {
        id: "slide-deck-bard",
        name: "Slide Deck Bard",
        description: "Can turn a two-line status update into a forty-slide saga with star-wipe transitions.",
        evolved_name: "Keynote Laureate",
        evolved_description: "Their appendix slides have appendix slides.",
        counter: None,
    },
];

static CATALOG: LazyLock<Vec<Persona>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|e| Persona {
            id: e.id.to_string(),
            name: e.name.to_string(),
            description: e.description.to_string(),
            evolved_name: e.evolved_name.to_string(),
            evolved_description: e.evolved_description.to_string(),
            counter_persona_id: e.counter.map(str::to_string),
        })
        .collect()
});

/// The full catalog, in display order. Never empty.
pub fn catalog() -> &'static [Persona] {
    &CATALOG
}

/// Look up a persona by id.
pub fn find(id: &str) -> Option<&'static Persona> {
    catalog().iter().find(|p| p.id == id)
}

/// Resolve a persona id, falling back to the first catalog entry when the
/// id is unknown. Unknown ids are never an error on read paths.
pub fn resolve(id: &str) -> &'static Persona {
    find(id).unwrap_or(&catalog()[0])
}

/// The persona designed to counter `id`, if it has one.
pub fn counter_of(id: &str) -> Option<&'static Persona> {
    find(id)
        .and_then(|p| p.counter_persona_id.as_deref())
        .and_then(find)
}

/// Pick the persona for a fresh card.
///
/// When `countering` names a persona with a defined counter, that counter is
/// returned. Otherwise a random persona other than `countering` is chosen.
/// Without `countering`, any persona may be chosen.
pub fn pick_default<R: Rng + ?Sized>(countering: Option<&str>, rng: &mut R) -> &'static Persona {
    let all = catalog();

    if let Some(id) = countering {
        if let Some(counter) = counter_of(id) {
            return counter;
        }
        let others: Vec<&Persona> = all.iter().filter(|p| p.id != id).collect();
        if let Some(&p) = others.choose(rng) {
            return p;
        }
    }

    all.choose(rng).unwrap_or(&all[0])
}
