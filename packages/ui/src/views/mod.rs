mod home;
pub use home::HomeView;

mod topics;
pub use topics::TopicsView;

mod posts;
pub use posts::PostsView;

mod post_detail;
pub use post_detail::PostDetailView;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;
