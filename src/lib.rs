// Reusable library API, used by the CLI and by anyone embedding the solver
pub mod dictionary;
pub mod errors;
pub mod letter_bag;
pub mod log;
pub mod parser;
pub mod partition;
pub mod shape;
pub mod solver;
mod trigram_char;

pub use trigram_char::DEFAULT_PUNCTUATION;
