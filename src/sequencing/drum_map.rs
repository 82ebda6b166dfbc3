//! Reference drum patterns and their layout on the pattern map.
//!
//! Each node is 96 levels: 32 kick steps, 32 snare steps, 32 hi-hat steps.
//! A level is both a probability rank and an intensity: the higher it is,
//! the lower the density at which the step starts firing, and levels above
//! the accent threshold play accented.

/// Steps per channel in a node.
pub const NODE_STEPS: usize = 32;

/// Channels per node.
pub const NODE_CHANNELS: usize = 3;

/// Side length of the square node map.
pub const MAP_SIZE: usize = 3;

pub(crate) type Node = [u8; NODE_STEPS * NODE_CHANNELS];

#[rustfmt::skip]
pub(crate) static NODES: [Node; 6] = [
    // 0: Four on the floor
    [
        255, 0, 40, 0, 20, 0, 60, 0, 230, 0, 40, 0, 20, 0, 60, 0,
        250, 0, 40, 0, 20, 0, 60, 0, 225, 0, 40, 0, 20, 0, 60, 0,
        0, 10, 0, 30, 0, 10, 0, 30, 240, 10, 0, 30, 0, 10, 0, 30,
        0, 10, 0, 30, 0, 10, 0, 30, 245, 10, 0, 30, 0, 10, 0, 30,
        120, 50, 200, 50, 120, 50, 200, 50, 120, 50, 200, 50, 120, 50, 200, 50,
        120, 50, 200, 50, 120, 50, 200, 50, 120, 50, 200, 50, 120, 50, 200, 50,
    ],
    // 1: Broken beat
    [
        255, 0, 0, 35, 0, 0, 170, 0, 0, 35, 220, 0, 35, 0, 0, 35,
        0, 0, 35, 0, 200, 35, 0, 0, 35, 0, 0, 150, 0, 0, 35, 0,
        0, 45, 0, 0, 0, 45, 0, 0, 250, 45, 0, 0, 0, 45, 90, 0,
        0, 45, 0, 0, 0, 45, 0, 0, 250, 45, 0, 0, 0, 45, 110, 0,
        150, 25, 150, 70, 210, 25, 150, 70, 150, 25, 150, 70, 210, 25, 150, 70,
        150, 25, 150, 70, 210, 25, 150, 70, 150, 25, 150, 70, 210, 25, 150, 70,
    ],
    // 2: Half time
    [
        255, 0, 0, 0, 0, 0, 25, 0, 0, 0, 0, 180, 25, 0, 0, 0,
        0, 0, 25, 0, 140, 0, 0, 0, 25, 0, 0, 0, 0, 0, 25, 0,
        0, 0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 0, 20,
        255, 0, 0, 0, 0, 0, 0, 20, 0, 0, 0, 0, 80, 0, 0, 20,
        190, 15, 60, 15, 130, 15, 60, 15, 190, 15, 60, 15, 130, 15, 60, 15,
        190, 15, 60, 15, 130, 15, 60, 15, 190, 15, 60, 15, 130, 15, 60, 15,
    ],
    // 3: Sparse
    [
        240, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 120, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 200, 0, 0, 0, 0, 0, 0, 0,
        20, 0, 20, 0, 100, 0, 20, 0, 20, 0, 20, 0, 100, 0, 20, 0,
        20, 0, 20, 0, 100, 0, 20, 0, 20, 0, 20, 0, 100, 0, 20, 0,
    ],
    // 4: Shuffle
    [
        255, 30, 0, 0, 30, 0, 0, 30, 0, 0, 190, 0, 0, 30, 0, 0,
        230, 0, 0, 30, 0, 0, 30, 0, 0, 30, 170, 0, 30, 0, 0, 30,
        0, 0, 40, 0, 0, 40, 0, 0, 235, 0, 0, 40, 0, 0, 40, 0,
        0, 40, 0, 0, 40, 100, 0, 40, 240, 0, 40, 0, 0, 85, 0, 0,
        220, 45, 45, 140, 45, 45, 220, 45, 45, 140, 45, 45, 220, 45, 45, 140,
        45, 45, 220, 45, 45, 140, 45, 45, 220, 45, 45, 140, 45, 45, 220, 45,
    ],
    // 5: Busy
    [
        255, 55, 55, 160, 55, 55, 55, 55, 55, 55, 220, 55, 55, 130, 55, 55,
        200, 55, 55, 55, 55, 55, 180, 55, 55, 55, 150, 55, 55, 55, 55, 55,
        30, 65, 30, 65, 30, 65, 30, 65, 255, 65, 30, 65, 120, 65, 30, 65,
        30, 65, 110, 65, 30, 65, 30, 65, 255, 65, 30, 65, 30, 65, 140, 65,
        230, 110, 170, 110, 230, 110, 170, 110, 230, 110, 170, 110, 230, 110, 170, 110,
        230, 110, 170, 110, 230, 110, 170, 110, 230, 110, 170, 110, 230, 110, 170, 110,
    ],
];

/// Node index at each map corner, `NODE_MAP[x][y]`.
pub(crate) static NODE_MAP: [[usize; MAP_SIZE]; MAP_SIZE] = [
    [0, 3, 2],
    [1, 0, 5],
    [4, 2, 5],
];
