mod constraints;
mod data;
mod display;
mod results;

pub use constraints::*;
pub use data::WordBank;
pub use data::DEFAULT_WORD_LENGTH;
pub use display::*;
pub use results::*;
