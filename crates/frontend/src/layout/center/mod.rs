pub mod center;
pub mod section_views;

pub use center::Center;
pub use section_views::SectionViews;
