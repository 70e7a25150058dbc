use super::*;

#[test]
fn test_parse_labels_names_and_letters() {
    let side = SideSnapshot::parse_labels(["king", "Q", "rook", "n", "PAWN"]).unwrap();
    assert_eq!(
        side.pieces,
        vec![
            PieceKind::King,
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Pawn
        ]
    );
}

#[test]
fn test_parse_labels_rejects_unknown() {
    let err = SideSnapshot::parse_labels(["king", "archbishop"]).unwrap_err();
    assert_eq!(
        err,
        MaterialError::InvalidPieceKind {
            label: "archbishop".to_string()
        }
    );
}

#[test]
fn test_starting_side_counts() {
    let counts = SideSnapshot::starting().counts();
    assert_eq!(counts, crate::config::STARTING_COUNTS);
    assert_eq!(SideSnapshot::starting().len(), 16);
}

#[test]
fn test_count_kinds_tallies_repeats() {
    let counts = count_kinds(&[PieceKind::Pawn, PieceKind::Queen, PieceKind::Pawn]);
    assert_eq!(counts.get(PieceKind::Pawn), 2);
    assert_eq!(counts.get(PieceKind::Queen), 1);
    assert_eq!(counts.get(PieceKind::Rook), 0);
}

#[test]
fn test_count_kinds_empty() {
    let counts = count_kinds(&[]);
    for kind in PieceKind::ALL {
        assert_eq!(counts.get(kind), 0);
    }
}

#[test]
fn test_from_fen_startpos() {
    let snapshot =
        BoardSnapshot::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .unwrap();
    assert_eq!(snapshot.white.counts(), crate::config::STARTING_COUNTS);
    assert_eq!(snapshot.black.counts(), crate::config::STARTING_COUNTS);
}

#[test]
fn test_from_fen_placement_only() {
    let snapshot = BoardSnapshot::from_fen("k7/8/1Q6/8/8/8/8/1K6").unwrap();
    assert_eq!(snapshot.white.pieces, vec![PieceKind::Queen, PieceKind::King]);
    assert_eq!(snapshot.black.pieces, vec![PieceKind::King]);
}

#[test]
fn test_from_fen_rejects_bad_char() {
    let err = BoardSnapshot::from_fen("k7/8/8/8/8/8/8/1K4X1").unwrap_err();
    assert!(matches!(err, MaterialError::InvalidPieceKind { label } if label == "X"));
}

#[test]
fn test_from_fen_empty_string() {
    let snapshot = BoardSnapshot::from_fen("").unwrap();
    assert!(snapshot.white.is_empty());
    assert!(snapshot.black.is_empty());
}
