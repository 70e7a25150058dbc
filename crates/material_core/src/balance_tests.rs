use super::*;
use crate::types::PieceKind::*;

fn starting() -> Vec<PieceKind> {
    SideSnapshot::starting().pieces
}

fn without(mut pieces: Vec<PieceKind>, remove: &[PieceKind]) -> Vec<PieceKind> {
    for kind in remove {
        let pos = pieces.iter().position(|k| k == kind).unwrap();
        pieces.remove(pos);
    }
    pieces
}

#[test]
fn test_empty_board() {
    let result = compute_material_balance(&[], &[]);
    assert_eq!(result, MaterialResult::default());
    assert_eq!(result.point_advantage, 0);
    assert!(result.white_captures.is_empty());
    assert!(result.black_captures.is_empty());
}

#[test]
fn test_one_side_wiped_out() {
    let result = compute_material_balance(&[], &[King]);
    assert_eq!(result.point_advantage, 0);
    assert_eq!(result.white_captures.total(), 16);
    assert_eq!(result.white_captures.entries[0], (King, 1));
    assert_eq!(result.black_captures.total(), 15);
}

#[test]
fn test_starting_position_balanced() {
    let result = compute_material_balance(&starting(), &starting());
    assert_eq!(result.point_advantage, 0);
    assert!(result.white_captures.is_empty());
    assert!(result.black_captures.is_empty());
    assert_eq!(result.leader(), None);
}

#[test]
fn test_black_missing_queen() {
    let black = without(starting(), &[Queen]);
    let result = compute_material_balance(&starting(), &black);

    assert_eq!(result.point_advantage, 9);
    assert_eq!(result.black_captures.entries, vec![(Queen, 1)]);
    assert!(result.white_captures.is_empty());
    assert_eq!(result.leader(), Some(Color::White));
    assert_eq!(result.advantage_for(Color::Black), -9);
}

#[test]
fn test_white_missing_pawn() {
    let white = without(starting(), &[Pawn]);
    let result = compute_material_balance(&white, &starting());

    assert_eq!(result.point_advantage, -1);
    assert_eq!(result.white_captures.count(Pawn), 1);
    assert_eq!(result.leader(), Some(Color::Black));
}

#[test]
fn test_breakdown_sorted_by_value() {
    let black = without(starting(), &[Queen, Rook, Pawn, Pawn, Bishop]);
    let result = compute_material_balance(&starting(), &black);

    assert_eq!(
        result.black_captures.entries,
        vec![(Pawn, 2), (Bishop, 1), (Rook, 1), (Queen, 1)]
    );
    assert_eq!(result.point_advantage, 2 + 3 + 5 + 9);
}

#[test]
fn test_knight_before_bishop() {
    // Bishop removed first, knight still listed first
    let white = without(starting(), &[Bishop, Knight, Knight]);
    let result = compute_material_balance(&white, &starting());

    assert_eq!(result.white_captures.entries, vec![(Knight, 2), (Bishop, 1)]);
}

#[test]
fn test_clamps_impossible_queens() {
    let mut white = starting();
    white.extend([Queen, Queen]);
    let result = compute_material_balance(&white, &starting());

    assert_eq!(result.white_captures.count(Queen), 0);
    assert!(result.white_captures.is_empty());
    assert_eq!(
        result.surplus,
        vec![Surplus {
            color: Color::White,
            kind: Queen,
            excess: 2
        }]
    );
    assert_eq!(result.point_advantage, 18);
}

#[test]
fn test_idempotent() {
    let white = without(starting(), &[Knight, Pawn]);
    let black = without(starting(), &[Rook]);
    let first = compute_material_balance(&white, &black);
    let second = compute_material_balance(&white, &black);
    assert_eq!(first, second);
}

#[test]
fn test_order_within_snapshot_irrelevant() {
    let white = starting();
    let mut reversed = white.clone();
    reversed.reverse();
    let black = without(starting(), &[Bishop]);

    assert_eq!(
        compute_material_balance(&white, &black),
        compute_material_balance(&reversed, &black)
    );
}

#[test]
fn test_compute_from_labels() {
    let calc = MaterialBalance::default();
    let result = calc
        .compute_from_labels(&["king", "queen"], &["king", "rook"])
        .unwrap();
    assert_eq!(result.point_advantage, 4);
}

#[test]
fn test_compute_from_labels_rejects_unknown() {
    let calc = MaterialBalance::default();
    let err = calc
        .compute_from_labels(&["king"], &["king", "dragon"])
        .unwrap_err();
    assert!(matches!(err, MaterialError::InvalidPieceKind { label } if label == "dragon"));
}

#[test]
fn test_custom_config() {
    let mut config = MaterialConfig::default();
    config.piece_values.bishop = 4;
    let calc = MaterialBalance::new(config);

    let white = without(starting(), &[Bishop, Knight]);
    let result = calc.compute(&white, &starting());

    assert_eq!(result.point_advantage, -7);
    assert_eq!(result.white_captures.entries, vec![(Knight, 1), (Bishop, 1)]);
}

#[test]
fn test_result_serializes() {
    let black = without(starting(), &[Queen]);
    let result = compute_material_balance(&starting(), &black);
    let json = serde_json::to_string(&result).unwrap();
    let back: MaterialResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
