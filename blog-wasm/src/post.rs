use blog_core::copy::{
    ADD_COMMENT, BACK_TO_HOME, COMMENTS_HEADING, COMMENT_PLACEHOLDER, IMAGE_HEIGHT, IMAGE_WIDTH,
    NAME_PLACEHOLDER, NO_COMMENTS, POST_NOT_FOUND,
};
use blog_core::{Catalog, CommentBoard, Post, PostView};
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn PostDetail(id: String) -> Element {
    let catalog = Catalog::builtin();

    match PostView::resolve(&catalog, Some(id.as_str())) {
        PostView::Found(post) => rsx! {
            PostArticle { post: *post }
        },
        PostView::NotFound => rsx! {
            PostNotFound {}
        },
    }
}

#[component]
pub fn PostNotFound() -> Element {
    rsx! {
        div { class: "flex items-center justify-center h-screen text-gray-600",
            p { class: "text-xl", "{POST_NOT_FOUND}" }
        }
    }
}

#[component]
fn PostArticle(post: Post) -> Element {
    rsx! {
        div { class: "relative bg-gradient-to-br from-blue-500 via-indigo-600 to-purple-700 text-white min-h-screen",
            div { class: "absolute inset-0 bg-black/50" }
            div { class: "relative z-10 flex flex-col justify-center items-center min-h-screen px-5",
                div { class: "max-w-4xl w-full bg-white shadow-lg rounded-lg overflow-hidden",
                    div { class: "p-6",
                        h1 { class: "text-3xl font-bold text-gray-800", "{post.title}" }
                        img {
                            src: "{post.image_url}",
                            alt: "{post.title}",
                            width: "{IMAGE_WIDTH}",
                            height: "{IMAGE_HEIGHT}",
                            class: "my-4 rounded-lg",
                        }
                        p { class: "post-content mt-4 whitespace-pre-wrap leading-relaxed text-gray-800",
                            "{post.content}"
                        }
                    }
                    CommentsSection {}
                }
                div { class: "mt-8 mb-16 text-center",
                    Link {
                        to: Route::Home {},
                        class: "px-6 py-2 bg-yellow-500 text-white rounded-lg hover:bg-gray-700 transition",
                        "{BACK_TO_HOME}"
                    }
                }
            }
        }
    }
}

/// Session-local comments; dropped with the page.
#[component]
fn CommentsSection() -> Element {
    let mut board = use_signal(CommentBoard::new);

    let draft = board.read().draft().clone();
    let comments = board.read().comments().to_vec();

    let on_add = move |_| {
        // A blank name or comment leaves the form as typed, with no message.
        let _ = board.write().add_comment();
    };

    rsx! {
        div { class: "p-6 border-t border-gray-200",
            h2 { class: "text-2xl font-semibold mb-4 text-gray-800", "{COMMENTS_HEADING}" }

            if comments.is_empty() {
                p { class: "text-gray-500", "{NO_COMMENTS}" }
            } else {
                ul { class: "space-y-4",
                    for (index, item) in comments.iter().enumerate() {
                        li {
                            key: "{index}",
                            class: "flex flex-col space-y-2 bg-gray-100 p-4 rounded-lg shadow-sm text-gray-800",
                            span { class: "font-medium text-blue-600", "{item.name}:" }
                            span { "{item.comment}" }
                        }
                    }
                }
            }

            div { class: "mt-6",
                input {
                    r#type: "text",
                    value: "{draft.name}",
                    placeholder: NAME_PLACEHOLDER,
                    oninput: move |evt| board.write().set_draft_name(evt.value()),
                    class: "w-full p-4 mb-3 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 text-gray-800"
                }
                textarea {
                    value: "{draft.comment}",
                    placeholder: COMMENT_PLACEHOLDER,
                    oninput: move |evt| board.write().set_draft_comment(evt.value()),
                    class: "w-full p-4 border rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 text-gray-800"
                }
                button {
                    onclick: on_add,
                    class: "mt-3 px-6 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition",
                    "{ADD_COMMENT}"
                }
            }
        }
    }
}
