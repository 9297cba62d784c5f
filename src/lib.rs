#![no_std]
extern crate alloc;

pub mod point;
pub mod path;
pub mod pen;


#[doc(inline)]
pub use {
    point::Point,
    point::Unit,
    path::Path,
    path::PathEntry,
    path::EntryKind,
    path::Segment,
    path::PathError,
    path::PathResult,
    pen::Pen,
    pen::CapStyle,
};

pub type IntPath = Path<i32>;
pub type FloatPath = Path<f32>;
