mod config;
mod logging;
mod render;

use blog_core::{Catalog, CommentBoard, PostView};
use clap::Parser;
use tracing::debug;

use crate::config::AppConfig;
use crate::logging::init_logging;

#[derive(Parser, Debug)]
#[clap(about = "Read the built-in blog posts from a terminal")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// List every post in the catalog.
    List,
    /// Render one post page, optionally after a scripted comment session.
    Show {
        id: String,
        /// Comment to add before rendering, as NAME=TEXT. Repeatable.
        #[clap(long = "comment", value_name = "NAME=TEXT", value_parser = parse_comment)]
        comments: Vec<(String, String)>,
        #[clap(long)]
        json: bool,
    },
}

fn parse_comment(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(name, text)| (name.to_string(), text.to_string()))
        .ok_or_else(|| format!("expected NAME=TEXT, got `{arg}`"))
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = AppConfig::from_env()?;
    init_logging(&config)?;

    let catalog = Catalog::builtin();

    match args.command {
        Command::List => {
            for post in catalog.posts() {
                println!("- [{}] {}", post.id, post.title);
            }
        }
        Command::Show { id, comments, json } => {
            let view = PostView::resolve(&catalog, Some(id.as_str()));
            let mut board = CommentBoard::new();

            if view.is_found() {
                for (name, text) in comments {
                    board.set_draft_name(name);
                    board.set_draft_comment(text);
                    // same as the page: invalid input is dropped without a message
                    let _ = board.add_comment();
                }
            } else {
                debug!(post_id = %id, "skipping comments for missing post");
            }

            if json {
                println!("{}", render::render_json(&view, &board)?);
            } else {
                print!(
                    "{}",
                    render::render_text(&view, &board, config.site_url.as_deref())
                );
            }
        }
    }

    Ok(())
}
