//! Fixed geometry of the side-3 triangular hexagon
//!
//! The region is a regular hexagon cut from the triangular grid, 54 unit
//! triangles in total. Triangles are numbered row by row from the top; two
//! triangles are adjacent when they share an edge, which gives boundary
//! triangles degree 2 and interior triangles degree 3. The rows below are
//! the complete edge-adjacency relation and never change at runtime; all
//! removal is expressed through the visibility overlay in
//! [`graph`](crate::spatial::graph).

/// Number of unit triangles in the full hexagon
pub const TRIANGLE_COUNT: usize = 54;

/// Triangle indices forming the radius-1 sub-hexagon at the top corner
pub const CORNER_TRIANGLES: [usize; 6] = [0, 1, 3, 4, 8, 9];

/// Edge-adjacency rows, index-aligned: entry `i` lists the triangles sharing an edge with triangle `i`
pub(crate) const NEIGHBOR_ROWS: [&[usize]; TRIANGLE_COUNT] = [
    &[1, 3],        // 0
    &[0, 4],        // 1
    &[3, 7],        // 2
    &[0, 2, 8],     // 3
    &[1, 5, 9],     // 4
    &[4, 10],       // 5
    &[7, 12],       // 6
    &[2, 6, 13],    // 7
    &[3, 9, 14],    // 8
    &[4, 8, 15],    // 9
    &[5, 11, 16],   // 10
    &[10, 17],      // 11
    &[6, 18],       // 12
    &[7, 14, 19],   // 13
    &[8, 13, 20],   // 14
    &[9, 16, 21],   // 15
    &[10, 15, 22],  // 16
    &[11, 23],      // 17
    &[12, 19, 24],  // 18
    &[13, 18, 25],  // 19
    &[14, 21, 26],  // 20
    &[15, 20, 27],  // 21
    &[16, 23, 28],  // 22
    &[17, 22, 29],  // 23
    &[18, 30],      // 24
    &[19, 26, 31],  // 25
    &[20, 25, 32],  // 26
    &[21, 28, 33],  // 27
    &[22, 27, 34],  // 28
    &[23, 35],      // 29
    &[24, 31, 36],  // 30
    &[25, 30, 37],  // 31
    &[26, 33, 38],  // 32
    &[27, 32, 39],  // 33
    &[28, 35, 40],  // 34
    &[29, 34, 41],  // 35
    &[30, 42],      // 36
    &[31, 38, 43],  // 37
    &[32, 37, 44],  // 38
    &[33, 40, 45],  // 39
    &[34, 39, 46],  // 40
    &[35, 47],      // 41
    &[36, 43],      // 42
    &[37, 42, 48],  // 43
    &[38, 45, 49],  // 44
    &[39, 44, 50],  // 45
    &[40, 47, 51],  // 46
    &[41, 46],      // 47
    &[43, 49],      // 48
    &[44, 48, 52],  // 49
    &[45, 51, 53],  // 50
    &[46, 50],      // 51
    &[49, 53],      // 52
    &[50, 52],      // 53
];
