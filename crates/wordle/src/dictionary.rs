//! Solution words
//!
//! A small embedded list of five-letter words. The browser original filtered
//! a full dictionary down to five-letter entries at startup; here the list is
//! pre-filtered at compile time instead.

use rand::seq::SliceRandom;

/// Five-letter solution candidates, lowercase.
pub const WORDS: &[&str] = &[
    "about", "above", "abuse", "actor", "adapt", "admit", "adopt", "after", "again", "agent",
    "agree", "ahead", "alarm", "album", "alert", "alike", "alive", "allow", "alone", "along",
    "amber", "amble", "anger", "angle", "apple", "apply", "arbor", "arena", "argue", "arise",
    "armor", "aroma", "aside", "asset", "audio", "audit", "avoid", "awake", "award", "aware",
    "badge", "baker", "basic", "batch", "beach", "began", "begin", "bench", "berry", "birth",
    "black", "blade", "blame", "blank", "blast", "blaze", "blend", "block", "board", "boast",
    "brain", "brand", "brave", "bread", "break", "brick", "brief", "bring", "broad", "brown",
    "brush", "build", "bunch", "burst", "cabin", "cable", "candy", "cargo", "carry", "catch",
    "cause", "chain", "chair", "chalk", "charm", "chart", "chase", "cheap", "check", "chess",
    "chest", "chief", "child", "chill", "choir", "chose", "claim", "clash", "class", "clean",
    "clear", "climb", "clock", "close", "cloud", "coach", "coast", "could", "count", "court",
    "cover", "craft", "crane", "crash", "cream", "crisp", "cross", "crowd", "crown", "curve",
    "cycle", "daily", "dance", "delta", "dense", "depth", "dirty", "dozen", "draft", "drain",
    "drama", "dream", "dress", "drift", "drink", "drive", "dusty", "eager", "early", "earth",
    "eight", "elbow", "elder", "empty", "enjoy", "enter", "equal", "error", "event", "every",
    "exact", "exist", "extra", "faith", "false", "fancy", "fault", "favor", "fence", "fever",
    "field", "fifth", "fight", "final", "first", "flame", "flash", "fleet", "float", "flock",
    "floor", "flour", "fluid", "focus", "force", "forge", "forth", "found", "frame", "fresh",
    "front", "frost", "fruit", "giant", "given", "glass", "globe", "glory", "grace", "grade",
    "grain", "grand", "grant", "grape", "grasp", "grass", "great", "green", "greet", "grief",
    "group", "grove", "guard", "guess", "guide", "habit", "happy", "harsh", "heart", "heavy",
    "hedge", "hello", "hinge", "hoist", "honey", "honor", "horse", "hotel", "house", "human",
    "humor", "ideal", "image", "imply", "index", "inner", "input", "issue", "ivory", "joint",
    "judge", "juice", "knife", "knock", "known", "label", "labor", "large", "laser", "later",
    "laugh", "layer", "learn", "least", "leave", "legal", "lemon", "level", "light", "limit",
    "local", "logic", "loose", "lower", "loyal", "lucky", "lunch", "magic", "major", "maple",
    "march", "match", "mayor", "medal", "media", "merge", "merit", "metal", "meter", "might",
    "minor", "mixed", "model", "money", "month", "moral", "motor", "mount", "mouse", "mouth",
    "movie", "music", "naive", "nerve", "never", "night", "noble", "noise", "north", "novel",
    "nurse", "ocean", "offer", "often", "olive", "onion", "orbit", "order", "organ", "other",
    "ought", "outer", "owner", "paint", "panel", "paper", "party", "patch", "pause", "peace",
    "pearl", "phase", "phone", "photo", "piano", "piece", "pilot", "pitch", "place", "plain",
    "plane", "plant", "plate", "point", "pound", "power", "press", "price", "pride", "prime",
    "print", "prior", "prize", "proof", "proud", "prove", "pulse", "queen", "quick", "quiet",
    "quite", "radio", "raise", "rally", "range", "rapid", "ratio", "reach", "ready", "realm",
    "rebel", "refer", "reign", "relax", "reply", "ridge", "right", "rigid", "risky", "rival",
    "river", "robot", "rocky", "rough", "round", "route", "royal", "rural", "scale", "scene",
    "scope", "score", "sense", "serve", "seven", "shade", "shaft", "shake", "shall", "shape",
    "share", "sharp", "sheep", "sheet", "shelf", "shell", "shift", "shine", "shirt", "shock",
    "shore", "short", "shout", "sight", "silly", "since", "sixth", "skill", "slate", "sleep",
    "slice", "slide", "slope", "small", "smart", "smile", "smoke", "snake", "solar", "solid",
    "solve", "sound", "south", "space", "spare", "spark", "speak", "speed", "spend", "spice",
    "spike", "spine", "spite", "split", "sport", "staff", "stage", "stair", "stake", "stand",
    "stare", "start", "state", "steam", "steel", "steep", "stick", "still", "stock", "stone",
    "store", "storm", "story", "stout", "strap", "straw", "strip", "stuck", "study", "stuff",
    "style", "sugar", "suite", "sunny", "super", "surge", "sweet", "swift", "sword", "table",
    "taste", "teach", "thank", "theme", "there", "thick", "thing", "think", "third", "those",
    "three", "throw", "tiger", "tight", "timer", "title", "toast", "today", "token", "torch",
    "total", "touch", "tough", "tower", "trace", "track", "trade", "trail", "train", "treat",
    "trend", "trial", "tribe", "trick", "truck", "truly", "trunk", "trust", "truth", "twice",
    "uncle", "under", "union", "unity", "until", "upper", "urban", "usage", "usual", "valid",
    "value", "vapor", "video", "vigor", "virus", "visit", "vital", "vivid", "vocal", "voice",
    "wagon", "waste", "watch", "water", "weary", "weigh", "wheat", "wheel", "where", "which",
    "while", "white", "whole", "widen", "width", "woman", "world", "worry", "worth", "would",
    "wound", "wrist", "write", "wrong", "yield", "young", "youth",
];

/// Pick a random solution not present in `history`.
///
/// Returns `None` once every word has been played.
pub fn pick_solution(history: &[String]) -> Option<&'static str> {
    let available: Vec<&'static str> = WORDS
        .iter()
        .copied()
        .filter(|word| !history.iter().any(|played| played == word))
        .collect();
    available.choose(&mut rand::thread_rng()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_words_are_five_letters() {
        for word in WORDS {
            assert_eq!(word.len(), 5, "{word} is not five letters");
        }
    }

    #[test]
    fn test_pick_excludes_history() {
        // Everything but one word in history forces a deterministic pick.
        let history: Vec<String> = WORDS[1..].iter().map(|w| (*w).to_string()).collect();
        assert_eq!(pick_solution(&history), Some(WORDS[0]));
    }

    #[test]
    fn test_exhausted_dictionary_yields_none() {
        let history: Vec<String> = WORDS.iter().map(|w| (*w).to_string()).collect();
        assert_eq!(pick_solution(&history), None);
    }

    #[test]
    fn test_no_duplicate_words() {
        let mut seen = std::collections::HashSet::new();
        for word in WORDS {
            assert!(seen.insert(word), "{word} appears twice");
        }
    }
}
