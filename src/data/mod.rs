//! Database repository layer for all domain entities.
//!
//! Repositories wrap the shared connection pool and perform all queries and
//! inserts for their entity kind, converting SeaORM entities into view models
//! at the boundary. Each seedable kind also exposes a `seed_defaults` routine
//! that populates default rows when its table is empty.

pub mod achievement;
pub mod badge;
pub mod clan;
pub mod cursor_theme;
pub mod gradient_theme;
pub mod player;
pub mod quest;
pub mod shop;
pub mod site_theme;
pub mod title;
pub mod tournament;

#[cfg(test)]
mod test;
