mod layout;
pub use layout::ForumLayout;

mod home;
pub use home::Home;

mod topics;
pub use topics::Topics;

mod posts;
pub use posts::Posts;

mod post_detail;
pub use post_detail::PostDetail;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod not_found;
pub use not_found::NotFound;
