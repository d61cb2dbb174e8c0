use super::super::Square;

/// Knight offsets in the order the search enumerates them.
pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// An L-shaped jump; knights ignore whatever stands in between.
pub(crate) fn is_knight_move(from: Square, to: Square) -> bool {
    let d_row = from.0.abs_diff(to.0);
    let d_col = from.1.abs_diff(to.1);
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_match_predicate() {
        let from = Square(4, 4);
        for (dr, dc) in KNIGHT_OFFSETS {
            let to = from.offset(dr, dc).unwrap();
            assert!(is_knight_move(from, to));
        }
        let reachable = Square::all().filter(|&to| is_knight_move(from, to)).count();
        assert_eq!(reachable, 8);
    }

    #[test]
    fn test_corner_knight() {
        let reachable = Square::all()
            .filter(|&to| is_knight_move(Square(0, 0), to))
            .count();
        assert_eq!(reachable, 2);
    }
}
