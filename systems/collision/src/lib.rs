#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pixel-exact collision resolution between an actor footprint and a room
//! walkability mask.
//!
//! The resolver is stateless and side-effect-free: it answers the static
//! overlap question for the room as currently fixed, and the caller rolls the
//! actor back on a blocked verdict. Room-boundary crossings are resolved by
//! the world after an accepted move.

use relic_rooms_core::{FootprintMask, PixelPoint, PixelRect, WalkMaskView};

/// Temporary mask layers composed over the precomputed base mask per query.
///
/// The base mask is never mutated; overlays express the two runtime
/// exceptions to it. A `sealed` rectangle is solid regardless of the base
/// mask and of any `open` rectangle, which models the gated passage of a
/// special room while its key is still missing. `open` rectangles are
/// walkable regardless of the base mask, which lets the actor stand on
/// teleport letter tiles without registering a wall hit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Overlays<'a> {
    open: &'a [PixelRect],
    sealed: Option<PixelRect>,
}

impl<'a> Overlays<'a> {
    /// Composes overlays from open rectangles and an optional sealed region.
    #[must_use]
    pub const fn new(open: &'a [PixelRect], sealed: Option<PixelRect>) -> Self {
        Self { open, sealed }
    }

    /// Overlays that leave the base mask untouched.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            open: &[],
            sealed: None,
        }
    }

    fn classify(&self, pixel: PixelPoint) -> Option<bool> {
        if let Some(sealed) = self.sealed {
            if sealed.contains(pixel) {
                return Some(true);
            }
        }
        if self.open.iter().any(|rect| rect.contains(pixel)) {
            return Some(false);
        }
        None
    }
}

/// Tests whether the actor mask, translated to `origin` in room-local
/// pixels, overlaps any solid cell of the composed mask.
///
/// A mask cell and an actor cell that are both solid at the same absolute
/// pixel produce a blocked verdict. Pixels outside the room bounds are open,
/// so an actor sliding across a room edge is never stopped by the void.
#[must_use]
pub fn blocked(
    mask: WalkMaskView<'_>,
    actor: &FootprintMask,
    origin: PixelPoint,
    overlays: Overlays<'_>,
) -> bool {
    for local_y in 0..actor.height() {
        for local_x in 0..actor.width() {
            if !actor.is_solid(local_x, local_y) {
                continue;
            }
            let pixel = origin.translated(local_x as i32, local_y as i32);
            match overlays.classify(pixel) {
                Some(solid) => {
                    if solid {
                        return true;
                    }
                }
                None => {
                    if mask.is_blocked(pixel.x(), pixel.y()) {
                        return true;
                    }
                }
            }
        }
    }
    false
}
