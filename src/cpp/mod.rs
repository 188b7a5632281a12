//! C++ code generation passes.
//!
//! Each pass is a [`TreeWalker`](crate::treewalker::TreeWalker) appending to a
//! borrowed `String`. Passes run one after the other against the same
//! [`Driver`](crate::driver::Driver), so names handed out by an early pass are
//! what later passes refer to.

// Writing into a `String` cannot fail.
macro_rules! emit {
    ($out:expr, $($arg:tt)*) => {{
        use std::fmt::Write as _;
        let _ = $out.write_fmt(format_args!($($arg)*));
    }};
}

macro_rules! emitln {
    ($out:expr) => {
        $out.push('\n')
    };
    ($out:expr, $($arg:tt)*) => {{
        emit!($out, $($arg)*);
        $out.push('\n');
    }};
}

mod extract_images;
mod write_declaration;
mod write_icondata;
mod write_icondeclaration;
mod write_iconinitialization;
mod write_includes;
mod write_initialization;

pub use extract_images::ExtractImages;
pub use write_declaration::WriteDeclaration;
pub use write_icondata::WriteIconData;
pub use write_icondeclaration::WriteIconDeclaration;
pub use write_iconinitialization::WriteIconInitialization;
pub use write_includes::WriteIncludes;
pub use write_initialization::WriteInitialization;
