use postfeed::Post;
use yew::{function_component, html, Callback, Html, Properties};

use crate::card::PostCard;

#[derive(Properties, PartialEq)]
pub struct PostGridProps {
    pub posts: Vec<Post>,
    pub open: Callback<String>,
}

#[function_component(PostGrid)]
pub fn grid(props: &PostGridProps) -> Html {
    if props.posts.is_empty() {
        return html! {
          <p class="empty">{"No posts published yet"}</p>
        };
    }

    html! {
      <div class="card-container">
        {for props.posts.iter().map(|post| html! {
          <PostCard key={post.id} post={post.clone()} open={props.open.clone()} />
        })}
      </div>
    }
}
