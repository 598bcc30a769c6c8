//! Built-in vocabularies for the standard styles
//!
//! Grouped dictionary entries are `(group, words)` pairs; a group only
//! takes part in a template when every part of speech it needs has it.

/// Grouped word list: semantic group name and its words
pub type GroupedWords = &'static [(&'static str, &'static [&'static str])];

pub const EN_ADJECTIVES: GroupedWords = &[
    ("nature", &["silent", "wild", "green", "misty", "mossy", "ancient", "quiet", "golden"]),
    ("tech", &["digital", "binary", "quantum", "neon", "rapid", "glitchy", "wired", "virtual"]),
    ("fantasy", &["arcane", "mystic", "enchanted", "cursed", "brave", "royal", "shadowy", "elder"]),
    ("space", &["cosmic", "stellar", "lunar", "solar", "orbital", "distant"]),
    ("animals", &["swift", "sly", "fierce", "fuzzy", "sleepy", "lucky"]),
    ("weather", &["stormy", "frosty", "sunny", "windy"]),
];

pub const EN_NOUNS: GroupedWords = &[
    ("nature", &["forest", "river", "fern", "willow", "stone", "meadow", "brook", "oak"]),
    ("tech", &["byte", "kernel", "circuit", "cipher", "vector", "socket", "pixel", "matrix"]),
    ("fantasy", &["wizard", "dragon", "knight", "phoenix", "golem", "rune", "griffin", "paladin"]),
    ("space", &["comet", "nebula", "rocket", "planet", "quasar", "meteor"]),
    ("animals", &["fox", "wolf", "otter", "falcon", "panda", "lynx", "raven", "badger"]),
    ("weather", &["thunder", "blizzard", "breeze", "drizzle"]),
];

pub const EN_VERBS: GroupedWords = &[
    ("nature", &["flows", "grows", "rustles", "blooms", "drifts", "whispers"]),
    ("tech", &["compiles", "boots", "hacks", "syncs", "renders", "parses"]),
    ("fantasy", &["casts", "soars", "guards", "slays", "summons", "roars"]),
    ("space", &["orbits", "launches", "glows", "spins", "drifts"]),
    ("animals", &["hunts", "prowls", "howls", "dashes", "naps", "pounces"]),
    ("music", &["plays", "sings", "drums"]),
];

pub const RU_ADJECTIVES: GroupedWords = &[
    ("nature", &["тихий", "дикий", "зелёный", "древний", "туманный"]),
    ("tech", &["цифровой", "быстрый", "неоновый", "квантовый"]),
    ("fantasy", &["магический", "храбрый", "тёмный", "проклятый"]),
    ("space", &["космический", "лунный", "звёздный"]),
    ("animals", &["хитрый", "ловкий", "сонный", "грозный"]),
];

pub const RU_NOUNS: GroupedWords = &[
    ("nature", &["лес", "ручей", "камень", "дуб", "папоротник"]),
    ("tech", &["байт", "код", "сервер", "пиксель"]),
    ("fantasy", &["маг", "дракон", "рыцарь", "феникс"]),
    ("space", &["комета", "ракета", "планета"]),
    ("animals", &["лис", "волк", "ёж", "сокол", "барсук"]),
];

pub const RU_VERBS: GroupedWords = &[
    ("nature", &["шумит", "растёт", "течёт", "цветёт"]),
    ("tech", &["грузит", "взламывает", "считает", "кодит"]),
    ("fantasy", &["колдует", "летит", "сражается", "рычит"]),
    ("space", &["сияет", "кружит", "мчится"]),
    ("animals", &["охотится", "воет", "бежит", "крадётся"]),
];

// Minecraft-youtuber style
pub const MC_PREFIXES: &[&str] = &[
    "Sky", "Dream", "Techno", "Captain", "Pixel", "Block", "Ender", "Creeper",
    "Redstone", "Diamond", "Mega", "Lord", "Mister", "Epic", "Crafty", "Nether",
];

pub const MC_SUFFIXES: &[&str] = &[
    "TDM", "Does", "Blade", "Craft", "Miner", "Gamer", "Builder", "Plays",
    "Boy", "Girl", "Slayer", "King", "Wolf", "Mine", "Hero", "Pro",
];

pub const MC_SINGLE_WORDS: &[&str] = &[
    "Blockhead", "Pickaxe", "Notchling", "Bedrock", "Creepz", "Endermind",
    "Steveo", "Redstoner", "Cobble", "Obsidian",
];

// Counter-Strike pro-scene style; "" is the bare-number slot
pub const CS_STEMS: &[&str] = &[
    "frag", "nade", "clutch", "spray", "flick", "tapper", "peek", "lurker",
    "smoke", "flash", "rusher", "entry", "anchor", "rifler", "baiter", "headshot",
    "onetap", "wallbang", "eco", "deagle",
];

pub const CS_SUFFIXES: &[&str] = &[
    "", "", "x", "z", "er", "ik", "ov", "_pro", "gg", "ez", "wp", "tv", "fx",
];

pub const CS_LEET_MAP: &str = "a:4,e:3,i:1,o:0,s:5,t:7";

// Dota pro-scene style
pub const DOTA_LATIN_BASES: &[&str] = &[
    "Vikin", "Emo", "Ganker", "Midas", "Tinker", "Rampage", "Aegis", "Techies",
    "Blink", "Farm", "Stack", "Dagon",
];

pub const DOTA_CYRILLIC_BASES: &[&str] = &[
    "Стас", "Вован", "Димон", "Саня", "Тёма", "Колян", "Лёха", "Макс",
];

pub const DOTA_CYRILLIC_SUFFIXES: &[&str] = &[
    "Роамер", "Керри", "Гангер", "Мидер", "Саппорт", "Тащер", "Фидер",
];

pub const DOTA_LATIN_SUFFIXES: &[&str] = &[
    "Phantom", "Invoker", "Carry", "Roamer", "Ganker", "Mid", "Support", "Smurf",
];

// Counter-Strike 1.6 classic style
pub const CS16_CORE_WORDS: &[&str] = &[
    "Killer", "Terminator", "Ninja", "Boss", "Zver", "Demon", "Kiborg",
    "Nagibator", "Bandit", "Hunter",
];

pub const CS16_GAME_WORDS: &[&str] = &[
    "Headshot", "AWP", "Deagle", "Dust", "Bomb", "Knife", "Defuse", "Frag",
    "Camper", "Rush",
];

pub const CS16_MEME_WORDS: &[&str] = &[
    "Noob", "Lol", "Pwnz", "Ololo", "Kek", "Medved", "Preved", "Lamer",
    "Imba", "Rofl",
];

pub const CS16_RANDOM_WORDS: &[&str] = &[
    "Вася", "Петя", "Кот", "Волк", "Медведь", "Зверь", "Пушка", "Гроза",
    "Shadow", "Zlo",
];

pub const CS16_SEPARATORS: &[&str] = &["_", "-", ".", "|", "/", ""];

pub const CS16_DECORATIONS: &[&str] = &["xXx", "~", "*", "=", "!", "^"];

pub const CS16_MATH_SYMBOLS: &[&str] = &["+", "=", "*", "%", "#"];

pub const CS16_LEET_MAP: &str = "a:4,e:3,i:1,o:0,s:5,t:7,b:8,а:4,е:3,о:0,з:3";

pub const LATIN_TO_CYR_MAP: &str =
    "a:а,e:е,o:о,p:р,c:с,x:х,y:у,k:к,m:м,t:т,h:н,A:А,E:Е,O:О,P:Р,C:С,X:Х,K:К,M:М,T:Т,H:Н,B:В";

pub const CYR_TO_LATIN_MAP: &str =
    "а:a,е:e,о:o,р:p,с:c,х:x,у:y,к:k,м:m,т:t,н:h,А:A,Е:E,О:O,Р:P,С:C,Х:X,К:K,М:M,Т:T,Н:H,В:B";

/// `&[&str]` -> owned list for config structs
pub fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}
