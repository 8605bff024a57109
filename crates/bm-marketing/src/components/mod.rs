//! Landing page components

mod cards;
mod magnifier;
mod results;
mod reveal;

pub use cards::ScoreCard;
pub use magnifier::{BgMagnifiers, MagnifierSvg};
pub use results::ResultsView;
pub use reveal::RevealWord;
