#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares the Relic Rooms experience.

use relic_rooms_core::{Notice, RoomRasterView};
use relic_rooms_world::{query, World};

/// Produces data required to greet the player and to surface milestones.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Derives the banner that should be shown when the experience starts.
    #[must_use]
    pub fn welcome_banner<'world>(&self, world: &'world World) -> &'world str {
        query::welcome_banner(world)
    }

    /// Exposes the current room's sub-image for presentation purposes.
    #[must_use]
    pub fn room_view<'world>(&self, world: &'world World) -> RoomRasterView<'world> {
        query::room_raster(world)
    }

    /// External completion check: every key collected while standing in the
    /// objective room.
    #[must_use]
    pub fn expedition_complete(&self, world: &World) -> bool {
        query::expedition_complete(world)
    }

    /// Milestone notice for the notification sink, present only once the
    /// expedition is complete.
    #[must_use]
    pub fn completion_notice(&self, world: &World) -> Option<Notice> {
        self.expedition_complete(world)
            .then(Notice::expedition_complete)
    }
}
