#![doc = include_str!("../readme.md")]

pub mod badge;
pub mod button;
pub mod canvas;
pub mod event;
pub mod geom;
pub mod indicator;
pub mod tags;
pub mod tip;

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
