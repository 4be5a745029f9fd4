use super::*;
use crate::grid::{CharGrid, TextGrid};

fn sample() -> CharGrid {
    CharGrid::from_text("abcd\nefgh\nijkl")
}

// --- SubGrid ---

#[test]
fn sub_grid_must_fit_parent() {
    let grid = sample();
    assert!(SubGrid::new(&grid, 1, 1, 3, 2).is_ok());
    assert_eq!(
        SubGrid::new(&grid, 2, 1, 3, 2).err(),
        Some(GridError::RegionOutOfBounds { x: 2, y: 1, width: 3, height: 2, outer_width: 4, outer_height: 3 })
    );
}

#[test]
fn sub_grid_hides_cells_outside_window() {
    let grid = sample();
    let sub = SubGrid::new(&grid, 1, 1, 2, 1).unwrap();
    assert_eq!(sub.get(0, 0), Some('f'));
    assert_eq!(sub.get(2, 0), None);
    assert_eq!(sub.get(0, 1), None);
}

#[test]
fn nested_sub_grids_compose_offsets() {
    let grid = sample();
    let outer = SubGrid::new(&grid, 1, 0, 3, 3).unwrap();
    let inner = SubGrid::new(&outer, 1, 1, 2, 2).unwrap();
    assert_eq!(inner.get(0, 0), Some('g'));
    assert_eq!(inner.get(1, 1), Some('l'));
    assert_eq!(inner.offset(), (1, 1));
}

#[test]
fn empty_window_is_valid() {
    let grid = sample();
    let sub = SubGrid::new(&grid, 4, 3, 0, 0).unwrap();
    assert_eq!(sub.width(), 0);
    assert_eq!(sub.to_text(), "");
}

// --- SubGridMut ---

#[test]
fn writes_through_mutable_window_reach_parent() {
    let mut grid = sample();
    {
        let mut sub = SubGridMut::new(&mut grid, 1, 1, 2, 2).unwrap();
        sub.set_char_at(0, 0, '*').unwrap();
        sub.fill(1, 0, 1, 2, ' ').unwrap();
    }
    assert_eq!(grid.to_text(), "abcd\ne* h\nij l\n");
}

#[test]
fn mutable_window_rejects_writes_outside_itself() {
    let mut grid = sample();
    let mut sub = SubGridMut::new(&mut grid, 0, 0, 2, 2).unwrap();
    assert!(sub.set_char_at(2, 0, '*').is_err());
    assert!(sub.fill(1, 1, 2, 1, '*').is_err());
    drop(sub);
    assert_eq!(grid, sample());
}

#[test]
fn mutable_window_over_trait_object() {
    let mut grid = sample();
    let dynamic: &mut dyn GridMut = &mut grid;
    let mut sub = SubGridMut::new(dynamic, 2, 2, 2, 1).unwrap();
    sub.set_char_at(1, 0, '#').unwrap();
    assert_eq!(grid.get(3, 2), Some('#'));
}

// --- Section ---

#[test]
fn row_section_reads_forward_and_backward() {
    let grid = TextGrid::from_lines(["abcd"]);
    let row = Section::row(&grid, 0).unwrap();
    assert_eq!(row.len(), 4);
    assert_eq!(row.chars_from(1).collect::<String>(), "bcd");
    assert_eq!(row.chars_before(3).collect::<String>(), "cba");
}

#[test]
fn column_section() {
    let grid = sample();
    let column = Section::column(&grid, 1).unwrap();
    assert_eq!(column.to_string(), "bfj");
    assert_eq!(column.char_at(2), Ok('j'));
    assert!(column.char_at(3).is_err());
}

#[test]
fn section_iterators_clamp_to_length() {
    let grid = sample();
    let row = Section::row(&grid, 0).unwrap();
    assert_eq!(row.chars_from(10).count(), 0);
    assert_eq!(row.chars_before(10).collect::<String>(), "dcba");
    assert_eq!(row.chars_before(0).count(), 0);
}

#[test]
fn section_slice() {
    let grid = sample();
    let row = Section::row(&grid, 2).unwrap();
    assert_eq!(row.slice(1, 3), Ok("jk".to_owned()));
    assert_eq!(row.slice(2, 2), Ok(String::new()));
    assert!(row.slice(3, 5).is_err());
}

#[test]
fn section_out_of_range_is_error() {
    let grid = sample();
    assert!(Section::row(&grid, 3).is_err());
    assert!(Section::column(&grid, 4).is_err());
}

#[test]
fn section_over_sub_grid_uses_window_coordinates() {
    let grid = sample();
    let sub = SubGrid::new(&grid, 1, 1, 2, 2).unwrap();
    assert_eq!(Section::row(&sub, 1).unwrap().to_string(), "jk");
    assert_eq!(Section::column(&sub, 0).unwrap().to_string(), "fj");
}
