use serde::{Deserialize, Serialize};

use crate::model::Terrain;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum NamingStyle {
    Fantasy,
    Germanic,
    Celtic,
    Latin,
    Elvish,
    Desert,
    Norse,
    Custom(String),
}

labelled_enum_open!(NamingStyle, "naming style", {
    Fantasy => "fantasy",
    Germanic => "germanic",
    Celtic => "celtic",
    Latin => "latin",
    Elvish => "elvish",
    Desert => "desert",
    Norse => "norse",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum NamePattern {
    PrefixSuffix,
    PrefixMiddleSuffix,
}

labelled_enum!(NamePattern, "name pattern", {
    PrefixSuffix => "prefix+suffix",
    PrefixMiddleSuffix => "prefix+middle+suffix",
});

// --- Fantasy: generic high-fantasy ---

const FANTASY_PREFIXES: &[&str] = &[
    "Ael", "Bryn", "Cal", "Dun", "Eld", "Fal", "Gal", "Hal", "Ith", "Kar", "Lor", "Mor", "Nor",
    "Ost", "Pel", "Quel", "Rav", "Sil", "Thal", "Umb", "Val", "Wyn", "Xan", "Yr", "Zan",
];

const FANTASY_MIDDLES: &[&str] = &["an", "dor", "el", "ith", "mar", "or", "ril", "th", "ur", "wyn"];

const FANTASY_SUFFIXES: &[&str] = &[
    "dell", "dor", "fall", "gard", "hold", "keep", "mere", "moor", "reach", "rest", "spire",
    "vale", "wick", "wyn",
];

// --- Germanic: hard stems, -burg/-heim ---

const GERMANIC_PREFIXES: &[&str] = &[
    "Alt", "Berg", "Brand", "Eisen", "Falk", "Gold", "Grau", "Hoch", "Kalt", "Lang", "Rot",
    "Schwarz", "Stein", "Wald", "Weiss", "Wolf",
];

const GERMANIC_MIDDLES: &[&str] = &["en", "er", "ing", "s"];

const GERMANIC_SUFFIXES: &[&str] = &[
    "au", "bach", "berg", "burg", "dorf", "feld", "furt", "hausen", "heim", "stadt", "tal",
];

// --- Celtic: soft consonants, -more/-ach ---

const CELTIC_PREFIXES: &[&str] = &[
    "Aber", "Bally", "Bran", "Caer", "Dun", "Glen", "Inver", "Kil", "Llan", "Pen", "Ros", "Strath",
    "Tre",
];

const CELTIC_MIDDLES: &[&str] = &["a", "en", "i", "o"];

const CELTIC_SUFFIXES: &[&str] = &[
    "ach", "allan", "arrow", "dare", "eny", "gorm", "more", "nagh", "owen", "ross", "wen",
];

// --- Latin: -ium/-ia ---

const LATIN_PREFIXES: &[&str] = &[
    "Aqu", "Aur", "Cast", "Flav", "Lucr", "Magn", "Nov", "Port", "Sept", "Terr", "Val", "Vic",
];

const LATIN_MIDDLES: &[&str] = &["an", "ent", "il", "or"];

const LATIN_SUFFIXES: &[&str] = &["a", "ia", "ium", "ona", "um", "us", "entum", "ensis"];

// --- Elvish: flowing vowels ---

const ELVISH_PREFIXES: &[&str] = &[
    "Ael", "Cael", "Eryn", "Fael", "Gil", "Ithil", "Lor", "Mir", "Nen", "Sil", "Tir", "Thar",
];

const ELVISH_MIDDLES: &[&str] = &["a", "ath", "el", "ia", "ir"];

const ELVISH_SUFFIXES: &[&str] = &["dor", "duin", "endil", "ion", "ith", "lond", "nor", "rien", "wen"];

// --- Desert ---

const DESERT_PREFIXES: &[&str] = &[
    "Al", "Bah", "Dar", "Khal", "Mar", "Qas", "Ras", "Sab", "Tar", "Zah",
];

const DESERT_MIDDLES: &[&str] = &["a", "ir", "u"];

const DESERT_SUFFIXES: &[&str] = &["abad", "an", "ara", "esh", "id", "im", "ir", "kand", "un"];

// --- Norse: fjords and -vik ---

const NORSE_PREFIXES: &[&str] = &[
    "Ask", "Bjorn", "Frey", "Grim", "Hald", "Jarn", "Kol", "Rag", "Sig", "Thor", "Ulf",
];

const NORSE_MIDDLES: &[&str] = &["a", "ar", "s"];

const NORSE_SUFFIXES: &[&str] = &["by", "fjord", "gard", "heim", "holm", "nes", "stad", "vik"];

pub(crate) struct StyleTables {
    pub prefixes: &'static [&'static str],
    pub middles: &'static [&'static str],
    pub suffixes: &'static [&'static str],
}

pub(crate) fn builtin_tables(style: &NamingStyle) -> Option<StyleTables> {
    let (prefixes, middles, suffixes) = match style {
        NamingStyle::Fantasy => (FANTASY_PREFIXES, FANTASY_MIDDLES, FANTASY_SUFFIXES),
        NamingStyle::Germanic => (GERMANIC_PREFIXES, GERMANIC_MIDDLES, GERMANIC_SUFFIXES),
        NamingStyle::Celtic => (CELTIC_PREFIXES, CELTIC_MIDDLES, CELTIC_SUFFIXES),
        NamingStyle::Latin => (LATIN_PREFIXES, LATIN_MIDDLES, LATIN_SUFFIXES),
        NamingStyle::Elvish => (ELVISH_PREFIXES, ELVISH_MIDDLES, ELVISH_SUFFIXES),
        NamingStyle::Desert => (DESERT_PREFIXES, DESERT_MIDDLES, DESERT_SUFFIXES),
        NamingStyle::Norse => (NORSE_PREFIXES, NORSE_MIDDLES, NORSE_SUFFIXES),
        NamingStyle::Custom(_) => return None,
    };
    Some(StyleTables {
        prefixes,
        middles,
        suffixes,
    })
}

/// Styles each terrain prefers.
pub(crate) fn builtin_terrain_styles(terrain: Terrain) -> Vec<NamingStyle> {
    use NamingStyle::*;
    match terrain {
        Terrain::Plains => vec![Latin, Germanic, Fantasy],
        Terrain::Hills => vec![Celtic, Germanic],
        Terrain::Mountains => vec![Germanic, Fantasy],
        Terrain::Forests => vec![Elvish, Celtic],
        Terrain::Swamps => vec![Fantasy, Celtic],
        Terrain::Deserts => vec![Desert, Fantasy],
        Terrain::Water => vec![Norse, Fantasy],
    }
}

pub(crate) struct GeographicTables {
    pub adjectives: &'static [&'static str],
    pub small: &'static [&'static str],
    pub medium: &'static [&'static str],
    pub large: &'static [&'static str],
}

pub(crate) fn builtin_geographic(terrain: Terrain) -> GeographicTables {
    match terrain {
        Terrain::Plains => GeographicTables {
            adjectives: &["Golden", "Green", "Windswept", "Rolling", "Amber", "Quiet"],
            small: &["Meadow", "Field", "Lea"],
            medium: &["Fields", "Downs", "Plains"],
            large: &["Steppe", "Grasslands", "Prairie"],
        },
        Terrain::Hills => GeographicTables {
            adjectives: &["Rolling", "Grey", "Shepherd's", "Misty", "Copper", "Barrow"],
            small: &["Knoll", "Hill", "Tor"],
            medium: &["Hills", "Rises", "Fells"],
            large: &["Highlands", "Uplands", "Wolds"],
        },
        Terrain::Mountains => GeographicTables {
            adjectives: &["Iron", "Frost", "Thunder", "Grey", "Dragon's", "Broken"],
            small: &["Peak", "Crag", "Spire"],
            medium: &["Peaks", "Crags", "Heights"],
            large: &["Mountains", "Range", "Massif"],
        },
        Terrain::Forests => GeographicTables {
            adjectives: &["Dark", "Whispering", "Elder", "Tangled", "Silver", "Deep"],
            small: &["Copse", "Grove", "Thicket"],
            medium: &["Wood", "Woods", "Forest"],
            large: &["Wildwood", "Greatwood", "Weald"],
        },
        Terrain::Swamps => GeographicTables {
            adjectives: &["Black", "Sunken", "Rotting", "Misty", "Weeping", "Murky"],
            small: &["Bog", "Mire", "Pool"],
            medium: &["Marsh", "Fen", "Swamp"],
            large: &["Fens", "Marshlands", "Morass"],
        },
        Terrain::Deserts => GeographicTables {
            adjectives: &["Burning", "Red", "Endless", "Shifting", "Bleached", "Silent"],
            small: &["Dunes", "Flats", "Pan"],
            medium: &["Barrens", "Sands", "Wastes"],
            large: &["Desert", "Expanse", "Erg"],
        },
        Terrain::Water => GeographicTables {
            adjectives: &["Azure", "Still", "Stormy", "Glass", "Deep", "Shimmering"],
            small: &["Pond", "Tarn", "Pool"],
            medium: &["Lake", "Bay", "Sound"],
            large: &["Sea", "Gulf", "Ocean"],
        },
    }
}
