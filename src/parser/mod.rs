pub mod input;
pub mod target;

// Re-export the public API so call sites can stay short.
pub use input::{clean_word_length, parse_targets, split_letter_list, split_word_lengths};
pub use target::{ShapePart, TargetShape};
