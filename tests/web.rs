#![cfg(all(target_arch = "wasm32", feature = "yew"))]

mod support;

use gm_explorer::components::{LastOnlineComp, LastOnlineProps};
use gm_explorer::model::{ApiError, Roster};
use gm_explorer::pages::{GmListPage, GmProfilePage};
use gm_explorer::providers::{DirectoryHandle, DirectoryProvider};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use support::{named_profile, ScriptedDirectory};
use wasm_bindgen_test::*;
use web_sys::Element;
use yew::prelude::*;
use yew_router::BrowserRouter;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Clone, PartialEq)]
enum Page {
    List,
    Profile(AttrValue),
}

/// Lets a test switch the mounted page after the first render.
#[derive(Clone, Default)]
struct Navigate(Rc<RefCell<Option<Callback<Page>>>>);

impl PartialEq for Navigate {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Navigate {
    fn to(&self, page: Page) {
        let callback = self.0.borrow().clone();
        if let Some(callback) = callback {
            callback.emit(page);
        }
    }
}

#[derive(Properties, PartialEq)]
struct HarnessProps {
    directory: DirectoryHandle,
    page: Page,
    #[prop_or_default]
    navigate: Navigate,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let page = use_state(|| props.page.clone());
    {
        let page = page.clone();
        *props.navigate.0.borrow_mut() = Some(Callback::from(move |next| page.set(next)));
    }

    html! {
        <BrowserRouter>
            <DirectoryProvider directory={Some(props.directory.clone())}>
                {match &*page {
                    Page::List => html! { <GmListPage /> },
                    Page::Profile(username) => html! {
                        <GmProfilePage username={Some(username.clone())} />
                    },
                }}
            </DirectoryProvider>
        </BrowserRouter>
    }
}

fn mount_point() -> Element {
    console_error_panic_hook::set_once();
    let root = gloo::utils::document().create_element("div").unwrap();
    gloo::utils::body().append_child(&root).unwrap();
    root
}

fn mount(
    directory: ScriptedDirectory,
    page: Page,
    navigate: Navigate,
) -> (Element, yew::AppHandle<Harness>) {
    let root = mount_point();
    let props = HarnessProps {
        directory: DirectoryHandle(Rc::new(directory)),
        page,
        navigate,
    };
    let app = yew::Renderer::<Harness>::with_root_and_props(root.clone(), props).render();
    (root, app)
}

async fn settle() {
    yew::platform::time::sleep(Duration::from_millis(20)).await;
}

fn text_of(root: &Element) -> String {
    root.text_content().unwrap_or_default()
}

#[wasm_bindgen_test]
async fn missing_last_online_is_reported_as_unavailable() {
    let root = mount_point();

    let props = yew::props!(LastOnlineProps {});
    yew::Renderer::<LastOnlineComp>::with_root_and_props(root.clone(), props).render();
    settle().await;

    let text = text_of(&root);
    assert!(text.contains("No last_online data available"));
    assert!(!text.contains("00:00:00"));
}

#[wasm_bindgen_test]
async fn empty_roster_shows_no_players_found() {
    let directory = ScriptedDirectory::with_roster(Ok(Roster::default()));
    let (root, _app) = mount(directory, Page::List, Navigate::default());
    settle().await;

    let text = text_of(&root);
    assert!(text.contains("No players found."));
    assert!(!text.contains("Loading"));
}

#[wasm_bindgen_test]
async fn roster_404_shows_error_without_spinner() {
    let directory = ScriptedDirectory::with_roster(Err(ApiError::Status(404)));
    let (root, _app) = mount(directory, Page::List, Navigate::default());
    settle().await;

    let text = text_of(&root);
    assert!(text.contains("Error loading players: HTTP 404"));
    assert!(!text.contains("Loading"));
}

#[wasm_bindgen_test]
async fn roster_lists_players_with_profile_links() {
    let roster = Roster::new(vec!["hikaru".to_string(), "magnuscarlsen".to_string()]);
    let directory = ScriptedDirectory::with_roster(Ok(roster));
    let (root, _app) = mount(directory, Page::List, Navigate::default());
    settle().await;

    let text = text_of(&root);
    assert!(text.contains("hikaru"));
    assert!(text.contains("magnuscarlsen"));
    let link = root
        .query_selector("a.gm-explorer-player-list__name[href='/player/hikaru']")
        .unwrap()
        .expect("profile link for hikaru");
    assert_eq!(link.text_content().as_deref(), Some("hikaru"));
}

#[wasm_bindgen_test]
async fn unknown_player_shows_404_without_spinner() {
    let directory = ScriptedDirectory::default();
    let page = Page::Profile("ghost".into());
    let (root, _app) = mount(directory, page, Navigate::default());
    settle().await;

    let text = text_of(&root);
    assert!(text.contains("HTTP 404"));
    assert!(!text.contains("Loading"));
}

#[wasm_bindgen_test]
async fn newer_username_wins_when_previous_resolves_last() {
    let directory = ScriptedDirectory::default();
    let alice_tx = directory.expect_profile("alice");
    let bob_tx = directory.expect_profile("bob");
    let navigate = Navigate::default();
    let (root, _app) = mount(directory, Page::Profile("alice".into()), navigate.clone());
    settle().await;
    assert!(text_of(&root).contains("Loading profile..."));

    navigate.to(Page::Profile("bob".into()));
    settle().await;
    bob_tx.send(Ok(named_profile("bob", "Bob Player"))).unwrap();
    settle().await;
    assert!(text_of(&root).contains("Bob Player"));

    alice_tx
        .send(Ok(named_profile("alice", "Alice Player")))
        .unwrap();
    settle().await;

    let text = text_of(&root);
    assert!(text.contains("Bob Player"));
    assert!(!text.contains("Alice Player"));
    assert!(!text.contains("Loading"));
}

#[wasm_bindgen_test]
async fn previous_profile_is_not_shown_after_username_changes() {
    let directory = ScriptedDirectory::default();
    let alice_tx = directory.expect_profile("alice");
    let _bob_tx = directory.expect_profile("bob");
    let navigate = Navigate::default();
    let (root, _app) = mount(directory, Page::Profile("alice".into()), navigate.clone());
    alice_tx
        .send(Ok(named_profile("alice", "Alice Player")))
        .unwrap();
    settle().await;
    assert!(text_of(&root).contains("Alice Player"));

    navigate.to(Page::Profile("bob".into()));
    settle().await;

    let text = text_of(&root);
    assert!(!text.contains("Alice Player"));
    assert!(text.contains("Loading profile..."));
}

#[wasm_bindgen_test]
async fn response_after_unmount_is_ignored() {
    let directory = ScriptedDirectory::default();
    let alice_tx = directory.expect_profile("alice");
    let (root, app) = mount(directory, Page::Profile("alice".into()), Navigate::default());
    settle().await;

    app.destroy();
    alice_tx
        .send(Ok(named_profile("alice", "Alice Player")))
        .unwrap();
    settle().await;

    assert!(!text_of(&root).contains("Alice Player"));
}
