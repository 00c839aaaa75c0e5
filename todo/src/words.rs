//! Static word tables backing mock-data generation.
//!
//! Curated, never empty. The Korean tables combine as
//! `noun + 는` / `root + connective` / `root + 하다.`; the English
//! tables feed title (`verb noun`) and sentence generation.

/// Korean phrase nouns for titles
pub(crate) const KR_PHRASE_NOUNS: &[&str] = &[
    "고양이",
    "강아지",
    "화분",
    "블로그",
    "자전거",
    "일기장",
    "수채화",
    "반찬",
    "플레이리스트",
    "텃밭",
    "모형",
    "사진첩",
];

/// The three fixed action nouns appended to Korean titles
pub(crate) const KR_ACTION_NOUNS: &[&str] = &["키우기", "만들기", "찾기"];

/// Korean subject nouns seeding content sentences
pub(crate) const KR_NOUNS: &[&str] = &[
    "바다", "하늘", "커피", "음악", "여행", "마음", "공원", "저녁", "바람", "도시",
];

/// Korean adjective roots; combine with a connective or the closing `하다.`
pub(crate) const KR_ADJECTIVES: &[&str] = &[
    "조용", "신선", "화려", "든든", "차분", "유쾌", "특별", "평범", "상쾌", "아늑",
];

/// Korean connective suffixes for adjective roots
pub(crate) const KR_SUFFIXES: &[&str] = &["하고", "하며", "하지만", "해서", "하다가"];

/// English verbs for titles
pub(crate) const EN_VERBS: &[&str] = &[
    "review", "plan", "organize", "sketch", "practice", "update", "clean", "draft", "measure",
    "water",
];

/// English nouns for titles
pub(crate) const EN_NOUNS: &[&str] = &[
    "notes",
    "groceries",
    "garden",
    "budget",
    "playlist",
    "inbox",
    "workshop",
    "schedule",
    "backlog",
    "recipes",
];

/// English filler words for generated sentences
pub(crate) const EN_WORDS: &[&str] = &[
    "the", "quiet", "morning", "light", "river", "keeps", "turning", "under", "old", "bridges",
    "while", "birds", "gather", "slowly", "over", "warm", "fields", "and", "wind", "carries",
    "soft", "voices", "through", "open", "doors", "toward", "distant", "hills",
];
