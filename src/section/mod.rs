//! Section resolution: which top-level blocks the renderer draws, in order.
//!
//! ```text
//! layout.sections ──(or default order)──► drop unknown ids ──► label + visibility
//!                                                                   │
//!                                   ordered_sections ◄──────────────┘
//!                                          │ is_visible
//!                                          ▼
//!                                   visible_sections
//! ```
//!
//! Both functions read a `&SiteConfig` and nothing else, so they are pure and
//! can be called from any thread.

mod id;
mod resolve;

pub use id::SectionId;
pub use resolve::{Section, ordered_sections, visible_sections};
