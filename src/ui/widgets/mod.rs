//! Interactive widgets

pub mod dropdown;
