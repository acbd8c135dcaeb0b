/// Single coordinate axis used for rows and columns.
///
/// Signed on purpose: the bounds-safe grid queries and the flood fill
/// deliberately probe positions outside the grid, including negative ones.
pub type Coord = i32;

const DISPLACEMENTS: [(Coord, Coord); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Yields the 8 positions surrounding `(row, col)`, without bounds
/// filtering. Out-of-grid results are resolved by the grid's bounds-safe
/// queries, so edges and corners need no special-casing.
pub fn neighbors(row: Coord, col: Coord) -> impl Iterator<Item = (Coord, Coord)> {
    DISPLACEMENTS
        .iter()
        .map(move |&(d_row, d_col)| (row + d_row, col + d_col))
}
