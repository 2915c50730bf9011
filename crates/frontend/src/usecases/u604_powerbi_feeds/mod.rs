pub mod view;

pub use view::PowerBiFeedsView;
