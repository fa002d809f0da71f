//! HTTP request handlers.
//!
//! `pages` renders the server-side HTML pages; `api` serves the optional
//! JSON endpoints. Both layers only orchestrate: they pull data through the
//! repositories and hand it to the template engine or the serializer.

pub mod api;
pub mod pages;
