use gloo_console::error;
use postfeed::Post;
use web_sys::MouseEvent;
use yew::{function_component, html, AttrValue, Callback, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
    /// called with the post link when the card is clicked
    pub open: Callback<String>,
}

/// Open `link` in a new browsing context without leaking the referrer
pub fn open_in_new_tab(link: &str) {
    let opened = gloo_utils::window().open_with_url_and_target_and_features(
        link,
        "_blank",
        "noopener,noreferrer",
    );

    // with `noopener` the result is always null, so a blocked popup looks
    // like success and only a thrown error can be reported
    if opened.is_err() {
        error!("Error opening", link.to_string());
    }
}

fn markup(html: &str) -> Html {
    Html::from_html_unchecked(AttrValue::from(html.to_string()))
}

#[function_component(PostCard)]
pub fn card(props: &PostCardProps) -> Html {
    let post = &props.post;

    let onclick = post.link().map(|link| {
        let link = link.to_string();
        let open = props.open.clone();
        Callback::from(move |_: MouseEvent| open.emit(link.clone()))
    });

    // the anchor opens the tab itself, the card must not open another one
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
      <div class="card" onclick={onclick}>
        if let Some(src) = post.image() {
          <img src={src.to_string()} alt={post.title_html().to_string()} />
        }
        <div class="card-content">
          <h2>{markup(post.title_html())}</h2>
          <div class="excerpt">{markup(post.excerpt_html())}</div>
          if let Some(link) = post.link() {
            <a
              href={link.to_string()}
              target="_blank"
              rel="noreferrer"
              onclick={stop}
            >
              {"Read more"}
            </a>
          }
          if let Some(name) = post.author_name() {
            <p class="author">{format!("By {name}")}</p>
          }
        </div>
      </div>
    }
}
