#![allow(non_snake_case)]

pub mod filter;
pub mod issues;
pub mod stat;

pub use filter::*;
pub use issues::*;
pub use stat::*;
