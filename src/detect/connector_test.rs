use super::*;
use crate::config::RenderConfig;
use crate::detect::tests::detect;
use crate::grid::CharGrid;

// --- Shafts ---

#[test]
fn down_arrow_with_shaft_above() {
    let (claimed, grid, drawing) = detect(down_arrow, "|\n|\nv", 0, 2);
    assert!(claimed);
    assert!(grid.is_blank());
    assert_eq!(drawing.arrows().count(), 1);
    let (from, to) = drawing.arrows().next().unwrap();
    assert_eq!(from.x, to.x);
    assert!(to.y > from.y);
}

#[test]
fn freestanding_down_tip_above_its_shaft() {
    let (claimed, grid, drawing) = detect(down_arrow, "˅\n|\n|", 0, 0);
    assert!(claimed);
    assert!(grid.is_blank());
    assert_eq!(drawing.primitives.len(), 1);
    let (from, to) = drawing.arrows().next().unwrap();
    assert_eq!(from.x, to.x);
    assert!(to.y > from.y, "head must point down: {from:?} -> {to:?}");
}

#[test]
fn freestanding_up_tip_below_its_shaft() {
    let (claimed, grid, drawing) = detect(up_arrow, "|\n|\n˄", 0, 2);
    assert!(claimed);
    assert!(grid.is_blank());
    let (from, to) = drawing.arrows().next().unwrap();
    assert!(to.y < from.y, "head must point up: {from:?} -> {to:?}");
}

#[test]
fn ascii_tip_does_not_flip() {
    let (claimed, grid, drawing) = detect(down_arrow, "v\n|", 0, 0);
    assert!(!claimed);
    assert_eq!(grid, CharGrid::from_text("v\n|"));
    assert!(drawing.primitives.is_empty());
}

#[test]
fn tip_without_shaft_is_not_an_arrow() {
    let (claimed, _, _) = detect(up_arrow, "^\n \n|", 0, 0);
    assert!(!claimed);
}

#[test]
fn up_arrow_with_shaft_below() {
    let (claimed, grid, drawing) = detect(up_arrow, "^\n|", 0, 0);
    assert!(claimed);
    assert!(grid.is_blank());
    let (from, to) = drawing.arrows().next().unwrap();
    assert!(to.y < from.y);
}

#[test]
fn horizontal_arrows() {
    let (claimed, grid, drawing) = detect(right_arrow, "--->", 3, 0);
    assert!(claimed);
    assert!(grid.is_blank());
    let (from, to) = drawing.arrows().next().unwrap();
    assert!(to.x > from.x);

    let (claimed, grid, drawing) = detect(left_arrow, "<--", 0, 0);
    assert!(claimed);
    assert!(grid.is_blank());
    let (from, to) = drawing.arrows().next().unwrap();
    assert!(to.x < from.x);
}

#[test]
fn wrong_axis_shaft_is_ignored() {
    let (claimed, _, _) = detect(right_arrow, "|\n>", 0, 1);
    assert!(!claimed);
}

// --- Junctions ---

#[test]
fn junction_stays_and_branch_becomes_line() {
    let (claimed, grid, drawing) = detect(down_arrow, "---+\n   |\n   v", 3, 2);
    assert!(claimed);
    assert_eq!(grid.to_text(), "---+\n    \n    \n");
    assert_eq!(drawing.arrows().count(), 1);
    assert_eq!(drawing.lines().count(), 1);
}

#[test]
fn branches_follow_further_junctions() {
    let text = "+--\n|  \n+--+\n   |\n   v";
    let (claimed, _, drawing) = detect(down_arrow, text, 3, 4);
    assert!(claimed);
    // (3,2) -> (0,2), then (0,2) -> (0,0), then (0,0) -> (2,0)
    assert_eq!(drawing.lines().count(), 3);
}

#[test]
fn connector_loop_terminates() {
    let text = "+--+\n|  |\n+--+\n   |\n   v";
    let (claimed, _, drawing) = detect(down_arrow, text, 3, 4);
    assert!(claimed);
    assert_eq!(drawing.arrows().count(), 1);
    assert_eq!(drawing.lines().count(), 4);
}

#[test]
fn shared_junction_branches_are_drawn_once() {
    let config = RenderConfig::default();
    let mut grid = CharGrid::from_text("+----+\n|    |\nv    v");
    let mut renderer = Renderer::new(&config);
    assert!(down_arrow(&mut grid, 0, 2, &mut renderer).unwrap());
    assert!(down_arrow(&mut grid, 5, 2, &mut renderer).unwrap());
    let drawing = renderer.finish(6, 3);
    assert_eq!(drawing.arrows().count(), 2);
    // only the top run; each vertical run is its own arrow's shaft
    assert_eq!(drawing.lines().count(), 1);
}

#[test]
fn run_into_another_tip_is_left_to_that_arrow() {
    let (claimed, grid, drawing) = detect(down_arrow, "+--+\n|  |\nv  v", 0, 2);
    assert!(claimed);
    assert_eq!(drawing.lines().count(), 1);
    // the other arrow is still whole
    assert_eq!(grid.to_text(), "+--+\n   |\n   v\n");
}

// --- Helpers ---

#[test]
fn cells_between_excludes_ends() {
    assert_eq!(cells_between((0, 0), (0, 3)), vec![(0, 1), (0, 2)]);
    assert_eq!(cells_between((4, 1), (1, 1)), vec![(2, 1), (3, 1)]);
    assert!(cells_between((0, 0), (0, 1)).is_empty());
    assert!(cells_between((0, 0), (1, 1)).is_empty());
}
