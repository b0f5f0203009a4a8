#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that collects key pixels touched by the actor footprint.

use relic_rooms_core::{Command, Event, Inventory, KeyColor, PixelRect, RoomRasterView};

/// Pure system that scans the raster under the actor and emits collection
/// commands for keys the inventory does not hold yet.
#[derive(Debug, Default)]
pub struct KeyCollector;

impl KeyCollector {
    /// Consumes world events and immutable views to emit at most one
    /// [`Command::CollectKey`].
    ///
    /// Every pixel under the footprint is compared against each key's exact
    /// color, in scan order: pixels row-major, colors in priority order.
    /// Already-collected colors are skipped, so re-touching a collected
    /// key's pixel is a no-op and the one-shot narrative message can never
    /// repeat. Footprint pixels hanging past the room edge are ignored.
    pub fn handle(
        &self,
        events: &[Event],
        raster: RoomRasterView<'_>,
        footprint: PixelRect,
        inventory: Inventory,
        out: &mut Vec<Command>,
    ) {
        if !events
            .iter()
            .any(|event| matches!(event, Event::TimeAdvanced { .. }))
        {
            return;
        }

        if inventory.all_collected() {
            return;
        }

        for y in footprint.top()..footprint.bottom() {
            for x in footprint.left()..footprint.right() {
                if x < 0 || y < 0 {
                    continue;
                }
                let Some(pixel) = raster.pixel(x as u32, y as u32) else {
                    continue;
                };
                for color in KeyColor::ALL {
                    if inventory.is_collected(color) {
                        continue;
                    }
                    if pixel == color.rgb() {
                        out.push(Command::CollectKey { color });
                        return;
                    }
                }
            }
        }
    }
}
