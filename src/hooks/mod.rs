mod use_directory;
mod use_now;
mod use_remote;

pub use use_directory::{use_directory, DirectoryContext};
pub use use_now::use_now;
pub use use_remote::use_remote;
