mod left;
mod navbar;

pub use left::Left;
pub use navbar::Navbar;
