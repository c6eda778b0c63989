use blog_core::Catalog;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::post::{PostDetail, PostNotFound};

mod post;

const EXCERPT_CHARS: usize = 150;
const TAILWIND_BROWSER: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/post/:id")]
    PostDetail { id: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    info!(posts = Catalog::builtin().len(), "launching blog front end");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_BROWSER }
        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    let catalog = Catalog::builtin();

    rsx! {
        div { class: "max-w-6xl mx-auto px-6 py-12",
            h1 { class: "text-4xl font-bold text-gray-900 mb-10 text-center", "All Posts" }

            div { class: "grid gap-8 md:grid-cols-2 lg:grid-cols-3",
                for post in catalog.posts() {
                    article {
                        key: "{post.id}",
                        class: "bg-white rounded-2xl shadow-lg hover:shadow-2xl transition overflow-hidden",
                        Link { to: Route::PostDetail { id: post.id.to_string() },
                            img {
                                src: "{post.image_url}",
                                alt: "{post.title}",
                                class: "w-full h-40 object-cover",
                            }
                            div { class: "p-8",
                                h2 { class: "text-2xl font-bold text-gray-900 mb-3 line-clamp-2", "{post.title}" }
                                p { class: "text-gray-600 line-clamp-3", "{post.excerpt(EXCERPT_CHARS)}" }
                                div { class: "mt-6 text-sm text-indigo-600 font-medium", "Read more →" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Any path the router does not know, including `/post` with no id.
#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    info!(path = %segments.join("/"), "unmatched route");
    rsx! {
        PostNotFound {}
    }
}
