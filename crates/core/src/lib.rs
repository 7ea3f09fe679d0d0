//! Domain logic for the Vernissage content backend.
//!
//! Pure, I/O-free building blocks shared by the persistence and HTTP
//! layers: the error taxonomy, shared id/timestamp types, slug
//! generation, YouTube reference parsing, reorder validation, and
//! config/locale rules.

pub mod error;
pub mod locale;
pub mod media;
pub mod ordering;
pub mod section;
pub mod site_config;
pub mod slug;
pub mod types;
pub mod youtube;
