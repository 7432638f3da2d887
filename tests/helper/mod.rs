#![allow(dead_code)]

pub mod fakes;

pub use fakes::*;
