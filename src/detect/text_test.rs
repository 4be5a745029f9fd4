use super::*;
use crate::detect::tests::detect;
use crate::render::Point;
use crate::grid::Grid;

fn run_text(line: &str, x: usize) -> (bool, String, Option<String>) {
    let (claimed, grid, drawing) = detect(text, line, x, 0);
    let found = drawing.texts().next().map(|(_, t)| t.to_owned());
    (claimed, grid.to_text(), found)
}

#[test]
fn single_word() {
    let (claimed, rest, found) = run_text("hello", 0);
    assert!(claimed);
    assert_eq!(rest, "     \n");
    assert_eq!(found.as_deref(), Some("hello"));
}

#[test]
fn anchor_of_first_cell() {
    let (_, _, drawing) = detect(text, "hello", 0, 0);
    let (at, _) = drawing.texts().next().unwrap();
    assert_eq!(*at, Point { x: 33, y: 26 });
}

#[test]
fn single_spaces_join_words() {
    let (_, rest, found) = run_text("a big box", 0);
    assert_eq!(found.as_deref(), Some("a big box"));
    assert_eq!(rest.trim(), "");
}

#[test]
fn double_space_ends_run() {
    let (_, rest, found) = run_text("left  right", 0);
    assert_eq!(found.as_deref(), Some("left"));
    assert_eq!(rest, "      right\n");
}

#[test]
fn border_glyphs_end_run() {
    assert_eq!(run_text("ab|cd", 0).2.as_deref(), Some("ab"));
    assert_eq!(run_text("ab+cd", 0).2.as_deref(), Some("ab"));
    assert_eq!(run_text("ab +cd", 0).2.as_deref(), Some("ab"));
}

#[test]
fn dash_inside_run_is_text() {
    assert_eq!(run_text("x-ray", 0).2.as_deref(), Some("x-ray"));
}

#[test]
fn trailing_space_in_last_column_is_dropped() {
    let (_, _, found) = run_text("end ", 0);
    assert_eq!(found.as_deref(), Some("end"));
}

#[test]
fn border_and_blank_cells_never_start_text() {
    for start in [" a", "+a", "|a", "-a"] {
        let (claimed, rest, found) = run_text(start, 0);
        assert!(!claimed, "{start:?}");
        assert_eq!(rest, format!("{start}\n"));
        assert_eq!(found, None);
    }
}

#[test]
fn run_starts_mid_row() {
    let (_, rest, found) = run_text("|  ok |", 3);
    assert_eq!(found.as_deref(), Some("ok"));
    assert_eq!(rest, "|     |\n");
}
