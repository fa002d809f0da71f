//! Domain and view models.
//!
//! These types sit between the repository layer and the rendering layer:
//! repositories convert SeaORM entities into them, and controllers hand them
//! to templates or serialize them for the JSON API.

pub mod clan;
pub mod player;
pub mod seed;
pub mod statistics;
pub mod tournament;
