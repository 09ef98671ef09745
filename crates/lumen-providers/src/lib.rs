#![allow(non_snake_case)]

pub mod issues;

pub use issues::{collect, DatasetError, IssueStore};
