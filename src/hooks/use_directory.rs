use crate::config::Config;
use crate::model::PlayerDirectory;
use std::rc::Rc;
use yew::prelude::*;

/// Directory and configuration shared with every view.
#[derive(Clone)]
pub struct DirectoryContext {
    pub config: Config,
    pub directory: Rc<dyn PlayerDirectory>,
}

impl PartialEq for DirectoryContext {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && Rc::ptr_eq(&self.directory, &other.directory)
    }
}

/// Hook to access the player directory
#[hook]
pub fn use_directory() -> DirectoryContext {
    use_context::<DirectoryContext>().expect("use_directory must be used within a DirectoryProvider")
}
