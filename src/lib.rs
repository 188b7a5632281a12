//! Compiler from Qt Designer `.ui` form descriptions to C++ headers.
//!
//! A form is parsed into the [`dom`] tree, then a sequence of generator passes
//! from [`cpp`] walks it with a [`TreeWalker`](treewalker::TreeWalker). The
//! passes share one [`Driver`](driver::Driver), which hands out the C++
//! identifiers for every object of the form. [`Uic`](uic::Uic) runs the whole
//! pipeline.

#[macro_use]
pub mod cpp;

pub mod classinfo;
pub mod customwidgets;
pub mod dom;
pub mod driver;
pub mod error;
pub mod option;
pub mod treewalker;
pub mod uic;
pub mod utils;
pub mod xml;

pub use error::{Error, Result};
