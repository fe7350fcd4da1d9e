use super::*;

#[test]
fn test_coord_to_sq_corners() {
    assert_eq!(coord_to_sq("a1"), Some(0));
    assert_eq!(coord_to_sq("h1"), Some(7));
    assert_eq!(coord_to_sq("h8"), Some(63));
    assert_eq!(coord_to_sq("e4"), Some(28));
    assert_eq!(coord_to_sq("i1"), None);
    assert_eq!(coord_to_sq("a9"), None);
}

#[test]
fn test_square_colors() {
    // a1 is dark, h1 is light
    assert!(!is_light_square(0));
    assert!(is_light_square(7));
    // c1 dark, f8 dark, c8 light
    assert!(!is_light_square(coord_to_sq("c1").unwrap()));
    assert!(!is_light_square(coord_to_sq("f8").unwrap()));
    assert!(is_light_square(coord_to_sq("c8").unwrap()));
}

#[test]
fn test_piece_kind_conversion_is_exhaustive() {
    let cozy = [
        cozy_chess::Piece::Pawn,
        cozy_chess::Piece::Knight,
        cozy_chess::Piece::Bishop,
        cozy_chess::Piece::Rook,
        cozy_chess::Piece::Queen,
        cozy_chess::Piece::King,
    ];
    let ours = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
    for (p, kind) in cozy.into_iter().zip(ours) {
        assert_eq!(PieceKind::from(p), kind);
    }
    assert_eq!(Color::from(cozy_chess::Color::White), Color::White);
    assert_eq!(Color::from(cozy_chess::Color::Black), Color::Black);
}
