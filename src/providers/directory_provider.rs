use crate::api::ChessComClient;
use crate::config::Config;
use crate::hooks::DirectoryContext;
use crate::model::PlayerDirectory;
use std::rc::Rc;
use yew::prelude::*;

/// Shared handle to a directory implementation, compared by identity.
#[derive(Clone)]
pub struct DirectoryHandle(pub Rc<dyn PlayerDirectory>);

impl PartialEq for DirectoryHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct DirectoryProviderProps {
    #[prop_or_default]
    pub config: Config,
    /// Overrides the chess.com client built from `config`.
    #[prop_or_default]
    pub directory: Option<DirectoryHandle>,
    pub children: Children,
}

#[function_component(DirectoryProvider)]
pub fn directory_provider(props: &DirectoryProviderProps) -> Html {
    let context = use_memo(
        (props.config.clone(), props.directory.clone()),
        |(config, directory)| {
            let directory = match directory {
                Some(handle) => handle.0.clone(),
                None => {
                    log::info!("Using player directory at {}", config.api_base_url);
                    Rc::new(ChessComClient::new(config.clone())) as Rc<dyn PlayerDirectory>
                }
            };
            DirectoryContext {
                config: config.clone(),
                directory,
            }
        },
    );

    html! {
        <ContextProvider<DirectoryContext> context={(*context).clone()}>
            {props.children.clone()}
        </ContextProvider<DirectoryContext>>
    }
}
