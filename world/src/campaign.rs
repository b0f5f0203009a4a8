//! Hand-authored content for the campaign map asset.
//!
//! The letter coordinates are map-global pixels, written down from the cheat
//! map variant that renders every glyph in its key color. They only make
//! sense together with the campaign raster; synthetic maps should build
//! their own [`TeleportLayout`].

use relic_rooms_core::{PixelPoint, RoomCoord};
use relic_rooms_system_teleport::{
    PairSide, TeleportLayout, TeleportTile, TeleportZone, TileLabel,
};

const fn one(base: char, x: i32, y: i32) -> TeleportTile {
    TeleportTile::new(TileLabel::new(base, PairSide::One), PixelPoint::new(x, y))
}

const fn two(base: char, x: i32, y: i32) -> TeleportTile {
    TeleportTile::new(TileLabel::new(base, PairSide::Two), PixelPoint::new(x, y))
}

const fn room(column: u32, row: u32) -> RoomCoord {
    RoomCoord::new(column, row)
}

/// Teleport zones and letter tiles of the campaign map.
#[must_use]
pub fn layout() -> TeleportLayout {
    let zones = vec![
        TeleportZone::new(vec![room(0, 0), room(0, 1), room(1, 0), room(1, 1)]),
        TeleportZone::new(vec![
            room(1, 4),
            room(1, 5),
            room(2, 5),
            room(0, 6),
            room(1, 6),
        ]),
        TeleportZone::new(vec![room(2, 7), room(2, 8), room(3, 7), room(3, 8)]),
        TeleportZone::new(vec![room(4, 8), room(4, 9)]),
    ];

    let tiles = vec![
        (
            room(0, 0),
            vec![
                one('A', 5, 154),
                one('B', 5, 89),
                one('C', 5, 25),
                one('F', 74, 4),
                one('E', 233, 4),
            ],
        ),
        (
            room(0, 1),
            vec![one('D', 5, 283), two('E', 233, 368), two('F', 74, 368)],
        ),
        (room(1, 0), vec![two('D', 622, 89)]),
        (
            room(1, 1),
            vec![two('A', 622, 347), two('B', 622, 283), two('C', 622, 219)],
        ),
        (
            room(1, 4),
            vec![
                one('J', 324, 797),
                one('L', 624, 797),
                one('K', 324, 926),
                one('M', 624, 926),
            ],
        ),
        (
            room(1, 5),
            vec![one('A', 324, 1118), one('B', 324, 1055), one('C', 324, 990)],
        ),
        (
            room(2, 5),
            vec![
                two('A', 940, 1118),
                two('B', 940, 1055),
                two('C', 940, 990),
                one('D', 882, 968),
                one('E', 850, 968),
                one('F', 818, 968),
                one('G', 768, 968),
                one('H', 736, 968),
                one('I', 709, 968),
            ],
        ),
        (
            room(0, 6),
            vec![
                two('L', 3, 1183),
                two('M', 3, 1312),
                two('D', 242, 1334),
                two('E', 211, 1334),
                two('F', 179, 1334),
                two('G', 130, 1334),
                two('H', 96, 1334),
                two('I', 69, 1334),
            ],
        ),
        (
            room(1, 6),
            vec![two('J', 624, 1185), two('K', 624, 1310)],
        ),
        (room(2, 7), vec![one('C', 645, 1440), one('D', 645, 1377)]),
        (room(3, 7), vec![two('C', 1260, 1440), two('D', 1260, 1377)]),
        (room(2, 8), vec![one('A', 645, 1634), one('B', 645, 1698)]),
        (room(3, 8), vec![two('A', 1260, 1634), two('B', 1260, 1698)]),
        (
            room(4, 8),
            vec![
                one('A', 1284, 1570),
                one('B', 1284, 1634),
                one('C', 1284, 1700),
                two('D', 1583, 1570),
                two('E', 1583, 1634),
                two('F', 1583, 1700),
            ],
        ),
        (
            room(4, 9),
            vec![
                two('A', 1583, 1763),
                two('B', 1583, 1827),
                two('C', 1583, 1891),
                one('D', 1284, 1763),
                one('E', 1284, 1827),
                one('F', 1284, 1891),
            ],
        ),
    ];

    TeleportLayout::new(zones, tiles)
}
