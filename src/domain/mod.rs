pub mod article;
pub mod filter;

pub use article::{is_reaction_symbol, Article, REACTION_SYMBOLS};
pub use filter::{SortKey, ViewFilter};
