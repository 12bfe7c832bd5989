//! Domain types for the satirical sharing card service.
//!
//! Everything in this crate is pure: the persona catalog, the editable card
//! model and its validation, the submission workflow states, card layout
//! rendering, and sitemap generation. Storage lives in `jokester-db`, the
//! generative model client in `jokester-genai`.

pub mod card;
pub mod error;
pub mod persona;
pub mod render;
pub mod roles;
pub mod session;
pub mod sitemap;
pub mod submission;
pub mod types;
