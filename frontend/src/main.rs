use feed::{PostFeed, PostFeedProps};
use postfeed::FeedConfig;

mod api;
mod card;
mod feed;
mod grid;

fn main() {
    // readable panics in the browser console
    console_error_panic_hook::set_once();

    let config = FeedConfig::from_build_env();
    yew::Renderer::<PostFeed>::with_props(PostFeedProps { config }).render();
}
