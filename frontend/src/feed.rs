use futures::future::AbortHandle;
use gloo_console::{error, log};
use postfeed::{FeedConfig, Post, ViewState};
use yew::prelude::*;

use crate::{api::spawn_fetch, card::open_in_new_tab, grid::PostGrid};

pub enum Msg {
    Settled(postfeed::Result<Vec<Post>>),
}

#[derive(Properties, PartialEq)]
pub struct PostFeedProps {
    pub config: FeedConfig,
}

/// Root component, fetches the posts once and shows whatever came back.
pub struct PostFeed {
    state: ViewState,
    open: Callback<String>,
    fetch: AbortHandle,
}

impl Component for PostFeed {
    type Message = Msg;
    type Properties = PostFeedProps;

    fn create(ctx: &Context<Self>) -> Self {
        let fetch = spawn_fetch(
            ctx.props().config.clone(),
            ctx.link().callback(Msg::Settled),
        );

        Self {
            state: ViewState::Loading,
            open: Callback::from(|link: String| open_in_new_tab(&link)),
            fetch,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let config = &ctx.props().config;

        match msg {
            Msg::Settled(result) => {
                match &result {
                    Ok(posts) => log!(format!(
                        "Loaded {} posts from {}",
                        posts.len(),
                        config.url()
                    )),
                    Err(e) => error!(format!("Error loading posts from {}: {e}", config.url())),
                }

                self.state.settle(result, config.empty)
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
          <FeedView state={self.state.clone()} open={self.open.clone()} />
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // a late response must not reach a destroyed component
        self.fetch.abort();
    }
}

#[derive(Properties, PartialEq)]
pub struct FeedViewProps {
    pub state: ViewState,
    /// called with the link of a clicked card
    pub open: Callback<String>,
}

#[function_component(FeedView)]
pub fn feed_view(props: &FeedViewProps) -> Html {
    match &props.state {
        ViewState::Loading => html! {
          <div class="loader-container">
            <div class="loader" />
          </div>
        },
        ViewState::Failed(e) => html! {
          <div class="error">{format!("Error: {e}")}</div>
        },
        ViewState::Loaded(posts) => html! {
          <div class="app">
            <h1>{"Most Recent Published Posts"}</h1>
            <PostGrid posts={posts.clone()} open={props.open.clone()} />
          </div>
        },
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::time::Duration;

    use postfeed::FeedConfig;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::Element;

    use super::{PostFeed, PostFeedProps};

    wasm_bindgen_test_configure!(run_in_browser);

    fn unreachable() -> PostFeedProps {
        PostFeedProps {
            config: FeedConfig {
                origin: "http://127.0.0.1:1".to_string(),
                ..FeedConfig::default()
            },
        }
    }

    fn root() -> Element {
        let root = gloo_utils::document().create_element("div").unwrap();
        gloo_utils::body().append_child(&root).unwrap();
        root
    }

    #[wasm_bindgen_test]
    async fn failed_fetch_replaces_the_loader() {
        let root = root();
        let _app = yew::Renderer::<PostFeed>::with_root_and_props(root.clone(), unreachable())
            .render();
        yew::platform::time::sleep(Duration::ZERO).await;
        assert!(root.query_selector(".loader").unwrap().is_some());

        for _ in 0..50 {
            if root.query_selector(".error").unwrap().is_some() {
                break;
            }
            yew::platform::time::sleep(Duration::from_millis(100)).await;
        }

        assert_eq!(
            root.text_content().unwrap_or_default(),
            "Error: Network issue. Please try again later."
        );
        assert!(root.query_selector(".loader").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn destroyed_feed_ignores_the_late_response() {
        let root = root();
        let app = yew::Renderer::<PostFeed>::with_root_and_props(root.clone(), unreachable())
            .render();
        yew::platform::time::sleep(Duration::ZERO).await;

        app.destroy();
        yew::platform::time::sleep(Duration::from_millis(1_000)).await;

        assert!(root.query_selector(".error").unwrap().is_none());
        assert_eq!(root.text_content().unwrap_or_default(), "");
    }
}
