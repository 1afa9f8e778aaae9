mod directory_provider;

pub use directory_provider::{DirectoryHandle, DirectoryProvider, DirectoryProviderProps};
