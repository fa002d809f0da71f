//! Factory methods for creating test data.
//!
//! Each entity kind has a factory module with a builder-style `Factory`
//! struct for customization and a `create_*` convenience function for quick
//! default creation. Factories handle foreign keys explicitly: pass the ids
//! of previously created rows.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let player = factory::player::PlayerFactory::new(&db)
//!     .username("Herobrine")
//!     .kills(120)
//!     .wins(30)
//!     .build()
//!     .await?;
//! let clan = factory::clan::create_clan(&db, player.id).await?;
//! ```

pub mod clan;
pub mod helpers;
pub mod player;
pub mod quest;
