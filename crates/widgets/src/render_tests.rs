use super::*;
use material_core::{compute_material_balance, SideSnapshot};

fn starting() -> Vec<PieceKind> {
    SideSnapshot::starting().pieces
}

fn remove(pieces: &mut Vec<PieceKind>, kind: PieceKind) {
    let pos = pieces.iter().position(|&k| k == kind).unwrap();
    pieces.remove(pos);
}

/// White lost a knight and two pawns, black lost a queen: white +4
fn sample_result() -> MaterialResult {
    let mut white = starting();
    remove(&mut white, PieceKind::Knight);
    remove(&mut white, PieceKind::Pawn);
    remove(&mut white, PieceKind::Pawn);
    let mut black = starting();
    remove(&mut black, PieceKind::Queen);
    compute_material_balance(&white, &black)
}

#[test]
fn test_format_advantage() {
    assert_eq!(format_advantage(3), "+3");
    assert_eq!(format_advantage(0), "0");
    assert_eq!(format_advantage(-2), "-2");
}

#[test]
fn test_text_summary_matches_widget() {
    let overlay = TextSummary.render(&sample_result());
    assert_eq!(overlay.to_string(), "white: +4");

    let balanced = compute_material_balance(&starting(), &starting());
    assert_eq!(TextSummary.render(&balanced).to_string(), "white: 0");
}

#[test]
fn test_icon_row() {
    let overlay = IconRow.render(&sample_result());
    assert_eq!(overlay.lines.len(), 2);
    assert_eq!(overlay.lines[0].text, "white: 2x♙ ♘ +4");
    assert_eq!(overlay.lines[1].text, "black: ♛");
}

#[test]
fn test_icon_row_balanced_start() {
    let result = compute_material_balance(&starting(), &starting());
    let overlay = IconRow.render(&result);
    assert_eq!(overlay.to_string(), "white:\nblack:");
}

#[test]
fn test_positioned_overlay_orientation() {
    let result = sample_result();

    let overlay = PositionedOverlay::new(Orientation::White).render(&result);
    assert_eq!(overlay.line(Anchor::Top), Some("♛"));
    assert_eq!(overlay.line(Anchor::Bottom), Some("2x♙ ♘ +4"));

    let overlay = PositionedOverlay::new(Orientation::Black).render(&result);
    assert_eq!(overlay.line(Anchor::Top), Some("2x♙ ♘ +4"));
    assert_eq!(overlay.line(Anchor::Bottom), Some("♛"));
}

#[test]
fn test_make_renderer_by_style() {
    assert_eq!(make_renderer(RenderStyle::Text, Orientation::White).name(), "text");
    assert_eq!(make_renderer(RenderStyle::Icons, Orientation::White).name(), "icons");
    assert_eq!(
        make_renderer(RenderStyle::Overlay, Orientation::Black).name(),
        "overlay"
    );
}

#[test]
fn test_style_from_str() {
    assert_eq!("ICONS".parse::<RenderStyle>(), Ok(RenderStyle::Icons));
    assert_eq!("positioned".parse::<RenderStyle>(), Ok(RenderStyle::Overlay));
    assert!("fancy".parse::<RenderStyle>().is_err());
}

#[test]
fn test_orientation_flip() {
    assert_eq!(Orientation::White.flipped(), Orientation::Black);
    assert_eq!(Orientation::Black.top(), Color::White);
}
