//! Request extractors shared by the admin write surface.

pub mod auth;
