pub mod article;
pub mod dateguess;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod lang;
mod metadata;
pub mod parse;
pub mod scrape;

pub use article::ArticleRecord;
pub use dateguess::{Accuracy, DateGuess, guess_date};
pub use error::{GazetteError, Result};
pub use extract::{Extraction, extract, extract_images, extract_text};
pub use fetch::{FetchConfig, download};
pub use lang::detect_language;
pub use parse::{Document, Element};
pub use scrape::ArticleScraper;
