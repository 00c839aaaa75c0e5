//! Mock content and list generation.
//!
//! Seeds a to-do list with synthetic titles and bodies before any real
//! user input exists. Two language modes are supported; everything
//! random goes through the environment's [`RandomSource`], so seeded
//! sources make generation fully deterministic.

use crate::reducer::TodoEnvironment;
use crate::types::{TodoId, TodoItem, TodoListState};
use crate::words;
use chrono::Days;
use composable_todo_core::environment::{choose, Clock, RandomSource};

/// How far in the past generated items are dated
const CREATION_BACKDATE_DAYS: u64 = 10;

/// Language mode for generated content
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    /// Korean titles and content
    Kr,
    /// English titles and content
    #[default]
    En,
}

impl Language {
    /// Resolves a configuration tag
    ///
    /// Recognizes `"kr"` and `"en"`; any other tag falls back to
    /// Korean.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "en" => Self::En,
            _ => Self::Kr,
        }
    }
}

/// Generates a title in the given language
///
/// Korean: a phrase noun plus one of the three fixed action nouns.
/// English: verb plus noun, first character upper-cased.
#[must_use]
pub fn generate_title(env: &TodoEnvironment, language: Language) -> String {
    let random = env.random.as_ref();
    match language {
        Language::Kr => format!(
            "{} {}",
            choose(random, words::KR_PHRASE_NOUNS),
            choose(random, words::KR_ACTION_NOUNS),
        ),
        Language::En => capitalize(&format!(
            "{} {}",
            choose(random, words::EN_VERBS),
            choose(random, words::EN_NOUNS),
        )),
    }
}

/// Generates body text in the given language
///
/// Korean: a subject noun with the topic particle, then adjective
/// clauses until the character count exceeds `content_length`, closed
/// with a final `하다.` predicate. The clause loop runs at least once,
/// so even a zero target yields content.
///
/// English: a sentence of exactly `content_length` words (minimum one),
/// capitalized and period-terminated.
#[must_use]
pub fn generate_content(env: &TodoEnvironment, language: Language, content_length: usize) -> String {
    let random = env.random.as_ref();
    match language {
        Language::Kr => generate_content_kr(random, content_length),
        Language::En => generate_content_en(random, content_length),
    }
}

fn generate_content_kr(random: &dyn RandomSource, min_chars: usize) -> String {
    let mut content = format!("{}는 ", choose(random, words::KR_NOUNS));
    loop {
        content.push_str(*choose(random, words::KR_ADJECTIVES));
        content.push_str(*choose(random, words::KR_SUFFIXES));
        content.push(' ');
        if content.chars().count() > min_chars {
            break;
        }
    }
    content.push_str(*choose(random, words::KR_ADJECTIVES));
    content.push_str("하다.");
    content
}

fn generate_content_en(random: &dyn RandomSource, word_count: usize) -> String {
    let mut sentence = String::new();
    for position in 0..word_count.max(1) {
        if position > 0 {
            sentence.push(' ');
        }
        sentence.push_str(*choose(random, words::EN_WORDS));
    }
    let mut sentence = capitalize(&sentence);
    sentence.push('.');
    sentence
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars
        .next()
        .map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

/// Display date stamped on created items: ten days before now
pub(crate) fn stamp_creation_date(clock: &dyn Clock) -> String {
    let now = clock.now();
    let stamped = now
        .checked_sub_days(Days::new(CREATION_BACKDATE_DAYS))
        .unwrap_or(now);
    stamped.format("%m/%d/%Y").to_string()
}

/// Generates an ordered list of `data_num` to-do items
///
/// Each item gets a fresh unique id, generated title and content,
/// `completed = false`, and a creation date stamped ten days in the
/// past. `data_num = 0` yields an empty list.
#[must_use]
pub fn generate_todo_list(
    env: &TodoEnvironment,
    data_num: usize,
    content_length: usize,
    language: Language,
) -> TodoListState {
    let items = (0..data_num)
        .map(|_| {
            TodoItem::new(
                TodoId::from_uuid(env.ids.generate()),
                generate_title(env, language),
                generate_content(env, language, content_length),
                Some(stamp_creation_date(env.clock.as_ref())),
            )
        })
        .collect();

    TodoListState { items }
}

/// Generates a list for the mock store variant: Korean only, undated
#[must_use]
pub(crate) fn generate_mock_todo_list(
    env: &TodoEnvironment,
    data_num: usize,
    content_length: usize,
) -> TodoListState {
    let items = (0..data_num)
        .map(|_| {
            TodoItem::new(
                TodoId::from_uuid(env.ids.generate()),
                generate_title(env, Language::Kr),
                generate_content(env, Language::Kr, content_length),
                None,
            )
        })
        .collect();

    TodoListState { items }
}
