mod gm_list_page;
mod gm_profile_page;
mod not_found_page;

pub use gm_list_page::GmListPage;
pub use gm_profile_page::{GmProfilePage, GmProfilePageProps};
pub use not_found_page::NotFoundPage;
