//! Text substrate: normalization, phrase matching, string similarity
//!
//! Every engine downstream works on the normalized form produced here.
//! All functions are pure — no caching, no shared state.

mod normalize;
mod phrase;
mod similarity;

pub use normalize::{normalize, tokenize};
pub use phrase::{
    any_phrase, count_phrases, has_phrase, negated_nearby, DEFAULT_NEGATION_WINDOW,
    NEGATION_TOKENS,
};
pub use similarity::similarity_ratio;
