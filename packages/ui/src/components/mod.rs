//! Small building blocks shared by the forum pages.

mod error_banner;
pub use error_banner::ErrorBanner;

mod owner_controls;
pub use owner_controls::OwnerControls;

mod edit_field;
pub use edit_field::EditField;
