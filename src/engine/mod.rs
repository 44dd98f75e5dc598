//! Engine module - the placement protocol over the core grid

pub mod place;

pub use place::{
    can_place, clear_lines, commit, detect_full_lines, footprint, place, Footprint, FullLines,
    LineSet, PlaceOutcome, Rejected,
};
