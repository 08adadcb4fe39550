//! Built-in word list, used when no wordfile can be read.

/// A small set of common english words.
pub const DEFAULT_WORDS: &[&str] = &[
    "ab", "ad", "ae", "ag", "ah", "ai", "al", "am", "an", "ar", "as", "at", "aw", "ax",
    "ay", "be", "bi", "bo", "by", "da", "de", "do", "ed", "ef", "eh", "el", "em", "en", "er",
    "es", "ex", "fa", "go", "ha", "he", "hi", "hm", "ho", "id", "if", "in", "is", "it", "jo",
    "ka", "la", "li", "lo", "ma", "me", "mi", "mo", "mu", "my", "na", "ne", "no", "nu", "od",
    "oe", "of", "oh", "oi", "om", "on", "op", "or", "os", "ow", "ox", "oy", "pa", "pe", "pi",
    "qi", "re", "sh", "si", "so", "ta", "ti", "to", "uh", "um", "un", "up", "us", "ut", "we",
    "wo", "xi", "xu", "ya", "ye", "yo", "za", "ace", "act", "add", "age", "ago", "aid", "aim",
    "air", "all", "and", "ant", "any", "ape", "apt", "arc", "are", "ark", "arm", "art", "ash",
    "ask", "ate", "axe", "bad", "bag", "ban", "bar", "bat", "bay", "bed", "bee", "bet", "bid",
    "big", "bin", "bit", "box", "boy", "bud", "bug", "bus", "but", "buy", "cab", "can", "cap",
    "car", "cat", "cow", "cry", "cub", "cup", "cut", "dad", "day", "den", "dew", "did", "die",
    "dig", "dim", "dip", "dog", "dot", "dry", "due", "dug", "ear", "eat", "egg", "end", "era",
    "eve", "eye", "fan", "far", "fat", "fed", "few", "fig", "fin", "fit", "fix", "fly", "fog",
    "for", "fox", "fun", "fur", "gap", "gas", "gel", "get", "gum", "gun", "gut", "guy", "had",
    "ham", "has", "hat", "hen", "her", "hid", "him", "hip", "his", "hit", "hop", "hot", "how",
    "hug", "hut", "ice", "ill", "ink", "inn", "ion", "its", "jam", "jar", "jaw", "jet", "job",
    "jog", "joy", "jug", "keg", "key", "kid", "kin", "kit", "lab", "lap", "law", "lay", "led",
    "leg", "let", "lid", "lie", "lip", "lit", "log", "lot", "low", "mad", "man", "map", "mat",
    "may", "men", "met", "mix", "mob", "mop", "mud", "mug", "nap", "net", "new", "nod", "nor",
    "not", "now", "nut", "oak", "oar", "odd", "off", "oil", "old", "one", "opt", "orb", "ore",
    "our", "out", "owl", "own", "pad", "pan", "pat", "paw", "pay", "pea", "pen", "pet", "pie",
    "pig", "pin", "pit", "pod", "pop", "pot", "pro", "pub", "pun", "pup", "put", "rag", "ram",
    "ran", "rap", "rat", "raw", "ray", "red", "rib", "rid", "rim", "rip", "rob", "rod", "rot",
    "row", "rub", "rug", "run", "rut", "sad", "sap", "sat", "saw", "say", "sea", "see", "set",
    "sew", "she", "shy", "sin", "sip", "sir", "sit", "six", "ski", "sky", "sly", "sob", "son",
    "sop", "sow", "soy", "spa", "spy", "sub", "sum", "sun", "sup", "tab", "tag", "tan", "tap",
    "tar", "tax", "tea", "ten", "the", "tie", "tin", "tip", "toe", "ton", "too", "top", "tow",
    "toy", "try", "tub", "tug", "two", "ups", "urn", "use", "van", "vat", "vet", "via", "vow",
    "wag", "war", "was", "wax", "way", "web", "wed", "wet", "who", "why", "wig", "win", "wit",
    "won", "wow", "yak", "yam", "yes", "yet", "you", "zap", "zip", "zoo", "able", "acts",
    "also", "area", "army", "away", "baby", "back", "bake", "ball", "band", "bank", "base",
    "bath", "bear", "beat", "been", "beer", "bell", "belt", "best", "bird", "blue", "boat",
    "body", "bone", "book", "born", "both", "bowl", "burn", "busy", "cake", "call", "calm",
    "came", "camp", "card", "care", "cart", "case", "cash", "cast", "cats", "city", "club",
    "coat", "code", "cold", "come", "cook", "cool", "copy", "cost", "crew", "dark", "data",
    "date", "dawn", "dead", "deal", "dear", "deep", "desk", "diet", "dish", "door", "down",
    "draw", "drop", "drum", "duck", "dust", "duty", "each", "earn", "east", "easy", "edge",
    "else", "even", "ever", "exit", "face", "fact", "fair", "fall", "farm", "fast", "fear",
    "feel", "feet", "fell", "felt", "file", "fill", "film", "find", "fine", "fire", "firm",
    "fish", "five", "flat", "flow", "food", "foot", "form", "four", "free", "from", "full",
    "fund", "gain", "game", "gate", "gave", "gift", "girl", "give", "glad", "goal", "goes",
    "gold", "golf", "gone", "good", "gray", "grew", "grow", "hair", "half", "hall", "hand",
    "hard", "harm", "hate", "have", "head", "hear", "heat", "held", "help", "here", "hero",
    "high", "hill", "hire", "hold", "hole", "home", "hope", "host", "hour", "huge", "hung",
    "hunt", "idea", "inch", "iron", "item", "jazz", "join", "joke", "jump", "jury", "just",
    "keen", "keep", "kept", "kick", "kind", "king", "knee", "knew", "know", "lack", "lady",
    "laid", "lake", "land", "lane", "last", "late", "lead", "left", "less", "life", "lift",
    "like", "line", "link", "list", "live", "load", "loan", "lock", "long", "look", "lord",
    "lose", "loss", "lost", "loud", "love", "luck", "made", "mail", "main", "make", "male",
    "many", "mark", "mass", "meal", "mean", "meat", "meet", "menu", "mere", "mild", "milk",
    "mill", "mind", "mine", "miss", "mode", "mood", "moon", "more", "most", "move", "much",
    "must", "name", "navy", "near", "neck", "need", "news", "next", "nice", "nine", "none",
    "nose", "note", "okay", "once", "only", "onto", "open", "oral", "over", "pace", "pack",
    "page", "paid", "pain", "pair", "palm", "park", "part", "pass", "past", "path", "peak",
    "pick", "pile", "pine", "pink", "pipe", "plan", "play", "plot", "plus", "poem", "poet",
    "pole", "pool", "poor", "port", "post", "pull", "pure", "push", "quit", "quiz", "race",
    "rail", "rain", "rank", "rare", "rate", "read", "real", "rely", "rent", "rest", "rice",
    "rich", "ride", "ring", "rise", "risk", "road", "rock", "role", "roll", "roof", "room",
    "root", "rope", "rose", "rule", "rush", "safe", "said", "sake", "sale", "salt", "same",
    "sand", "save", "scat", "seat", "seed", "seek", "seem", "seen", "self", "sell", "send",
    "sent", "ship", "shop", "shot", "show", "shut", "sick", "side", "sign", "sing", "site",
    "size", "skin", "slip", "slow", "snow", "soft", "soil", "sold", "sole", "some", "song",
    "soon", "sort", "soul", "spot", "star", "stay", "step", "stop", "such", "suit", "sure",
    "swim", "tail", "take", "tale", "talk", "tall", "tank", "tape", "task", "team", "tear",
    "tell", "tend", "term", "test", "text", "than", "that", "them", "then", "they", "thin",
    "this", "thus", "tide", "tidy", "tied", "till", "time", "tiny", "tone", "took", "tool",
    "tour", "town", "trap", "tree", "trip", "true", "tune", "turn", "twin", "type", "unit",
    "upon", "used", "user", "vary", "vast", "very", "view", "vote", "wage", "wait", "wake",
    "walk", "wall", "want", "warm", "wash", "wave", "weak", "wear", "week", "well", "went",
    "were", "west", "what", "when", "whom", "wide", "wife", "wild", "will", "wind", "wine",
    "wing", "wire", "wise", "wish", "with", "wood", "word", "wore", "work", "yard", "yeah",
    "year", "your", "zero", "zone", "about", "above", "actor", "after", "again", "agent",
    "agree", "ahead", "alarm", "album", "alive", "allow", "alone", "along", "among", "anger",
    "angle", "apple", "apply", "arena", "argue", "arise", "aside", "avoid", "award", "aware",
    "badly", "basic", "beach", "begin", "being", "below", "bench", "birth", "black", "blade",
    "blame", "blind", "block", "blood", "board", "brain", "brand", "bread", "break", "brick",
    "brief", "bring", "broad", "brown", "build", "carry", "catch", "cause", "chain", "chair",
    "charm", "chart", "cheap", "check", "chest", "chief", "child", "claim", "class", "clean",
    "clear", "climb", "clock", "close", "cloud", "coach", "coast", "count", "court", "cover",
    "craft", "crash", "cream", "crime", "cross", "crowd", "dance", "death", "delay", "depth",
    "doubt", "draft", "drama", "dream", "dress", "drink", "drive", "early", "earth", "empty",
    "enemy", "enjoy", "enter", "entry", "equal", "error", "event", "exact", "exist", "extra",
    "faith", "false", "fault", "field", "fight", "final", "first", "flame", "floor", "focus",
    "force", "frame", "fresh", "front", "fruit", "funny", "giant", "given", "glass", "grace",
    "grade", "grain", "grand", "grant", "grass", "great", "green", "group", "guard", "guess",
    "guest", "guide", "happy", "heart", "heavy", "horse", "hotel", "house", "human", "ideal",
    "image", "index", "inner", "input", "issue", "joint", "judge", "juice", "knife", "labor",
    "large", "laser", "later", "laugh", "layer", "learn", "least", "leave", "legal", "level",
    "light", "limit", "local", "logic", "loose", "lower", "lucky", "lunch", "magic", "major",
    "maker", "march", "match", "maybe", "mayor", "metal", "minor", "model", "money", "month",
    "moral", "motor", "mount", "mouse", "mouth", "movie", "music", "never", "night", "noise",
    "north", "novel", "nurse", "ocean", "offer", "often", "order", "other", "owner", "paint",
    "panel", "paper", "party", "peace", "phase", "phone", "photo", "piano", "piece", "pilot",
    "pitch", "place", "plain", "plane", "plant", "plate", "point", "pound", "power", "press",
    "price", "pride", "prime", "print", "prior", "prize", "proof", "proud", "queen", "quick",
    "quiet", "quite", "radio", "raise", "range", "rapid", "ratio", "reach", "ready", "refer",
    "reply", "right", "river", "rough", "round", "route", "royal", "rural", "scale", "scene",
    "scope", "score", "sense", "serve", "seven", "shade", "shake", "shape", "share", "sharp",
    "sheep", "sheet", "shelf", "shell", "shift", "shirt", "shock", "shoot", "short", "sight",
    "skill", "sleep", "slide", "small", "smart", "smile", "smoke", "solid", "solve", "sorry",
    "sound", "south", "space", "spare", "speak", "speed", "spend", "split", "sport", "staff",
    "stage", "stand", "start", "state", "steam", "steel", "stick", "still", "stock", "stone",
    "store", "storm", "story", "strip", "study", "stuff", "style", "sugar", "sweet", "table",
    "taste", "teach", "thank", "theme", "there", "thick", "thing", "think", "third", "three",
    "throw", "tight", "title", "today", "topic", "total", "touch", "tough", "tower", "track",
    "trade", "train", "treat", "trend", "trial", "truck", "trust", "truth", "twice", "uncle",
    "under", "union", "unity", "until", "upper", "upset", "urban", "usual", "valid", "value",
    "video", "visit", "vital", "voice", "waste", "watch", "water", "wheel", "where", "which",
    "while", "white", "whole", "woman", "world", "worry", "worth", "would", "write", "wrong",
    "young", "youth",
];
