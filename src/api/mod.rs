pub mod client;
pub mod dictionary;
pub mod source;
pub mod types;

pub use client::{PageClient, answers_path, game_path};
pub use dictionary::DictionaryApi;
pub use source::{DefinitionSource, FetchError};
