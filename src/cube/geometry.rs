//! Static geometry of the cube.
//!
//! ```text
//!    v6----- v5
//!   /|      /|
//!  v1------v0|
//!  | |     | |
//!  | |v7---|-|v4
//!  |/      |/
//!  v2------v3
//! ```
//!
//! Every face owns its four corners so that each corner can carry the face's flat normal,
//! giving 24 vertices in total. Positions span `[-1, 1]`; the model matrix scales them up.

/// Number of distinct vertices (4 per face, 6 faces).
pub const VERTEX_COUNT: usize = 24;

/// Number of indices (2 triangles per face, 6 faces).
pub const INDEX_COUNT: usize = 36;

/// Vertex positions, 3 floats per vertex, tightly packed.
#[rustfmt::skip]
pub const POSITIONS: [f32; VERTEX_COUNT * 3] = [
     1.0,  1.0,  1.0,  -1.0,  1.0,  1.0,  -1.0, -1.0,  1.0,   1.0, -1.0,  1.0, // v0-v1-v2-v3 front
     1.0,  1.0,  1.0,   1.0, -1.0,  1.0,   1.0, -1.0, -1.0,   1.0,  1.0, -1.0, // v0-v3-v4-v5 right
     1.0,  1.0,  1.0,   1.0,  1.0, -1.0,  -1.0,  1.0, -1.0,  -1.0,  1.0,  1.0, // v0-v5-v6-v1 up
    -1.0,  1.0,  1.0,  -1.0,  1.0, -1.0,  -1.0, -1.0, -1.0,  -1.0, -1.0,  1.0, // v1-v6-v7-v2 left
    -1.0, -1.0, -1.0,   1.0, -1.0, -1.0,   1.0, -1.0,  1.0,  -1.0, -1.0,  1.0, // v7-v4-v3-v2 down
     1.0, -1.0, -1.0,  -1.0, -1.0, -1.0,  -1.0,  1.0, -1.0,   1.0,  1.0, -1.0, // v4-v7-v6-v5 back
];

/// Per-vertex face normals, 3 floats per vertex. The shader widens them to `vec4` with `w = 0`.
#[rustfmt::skip]
pub const NORMALS: [f32; VERTEX_COUNT * 3] = [
     0.0,  0.0,  1.0,   0.0,  0.0,  1.0,   0.0,  0.0,  1.0,   0.0,  0.0,  1.0, // front
     1.0,  0.0,  0.0,   1.0,  0.0,  0.0,   1.0,  0.0,  0.0,   1.0,  0.0,  0.0, // right
     0.0,  1.0,  0.0,   0.0,  1.0,  0.0,   0.0,  1.0,  0.0,   0.0,  1.0,  0.0, // up
    -1.0,  0.0,  0.0,  -1.0,  0.0,  0.0,  -1.0,  0.0,  0.0,  -1.0,  0.0,  0.0, // left
     0.0, -1.0,  0.0,   0.0, -1.0,  0.0,   0.0, -1.0,  0.0,   0.0, -1.0,  0.0, // down
     0.0,  0.0, -1.0,   0.0,  0.0, -1.0,   0.0,  0.0, -1.0,   0.0,  0.0, -1.0, // back
];

/// Triangle list over [`POSITIONS`]/[`NORMALS`], counter-clockwise seen from outside.
#[rustfmt::skip]
pub const INDICES: [u32; INDEX_COUNT] = [
     0,  1,  2,   0,  2,  3, // front
     4,  5,  6,   4,  6,  7, // right
     8,  9, 10,   8, 10, 11, // up
    12, 13, 14,  12, 14, 15, // left
    16, 17, 18,  16, 18, 19, // down
    20, 21, 22,  20, 22, 23, // back
];
