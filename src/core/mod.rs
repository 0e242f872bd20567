//! # Core Logic
//!
//! Everything that decides *what* gets written, independent of how pages are
//! fetched.
//!
//! ```text
//!        ┌────────────┐      ┌────────────┐
//!        │    api     │      │   scrape   │
//!        │ (reqwest)  │      │ (scraper)  │
//!        └─────┬──────┘      └─────┬──────┘
//!              │   raw HTML / JSON │
//!              └─────────┬─────────┘
//!                        ▼
//!           ┌─────────────────────────┐
//!           │          CORE           │
//!           │                         │
//!           │  • extract (hint words) │
//!           │  • text (transforms)    │
//!           │  • puzzle (records)     │
//!           │  • store (JSON files)   │
//!           │  • config               │
//!           └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`extract`]: walks page JSON and harvests hint words. No I/O. Pure.
//! - [`text`]: masking, spangram labels, word list joins
//! - [`puzzle`]: serde shapes of the output files
//! - [`store`]: atomic JSON writes
//! - [`config`]: layered settings

pub mod config;
pub mod extract;
pub mod puzzle;
pub mod store;
pub mod text;

pub use extract::{collect_hint_words, extract_words};
