//! Chapter 7: Interfaces
//! Example: Decoding a JSON web service response into typed records
//!
//! Run with: cargo run --bin p07_web_service
//! Point it elsewhere with SYNTAX_TOUR_POSTS_URL=http://... cargo run --bin p07_web_service

use colored::Colorize;
use std::process::ExitCode;
use syntax_tour::config::TourConfig;
use syntax_tour::logging;
use syntax_tour::posts::PostsClient;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match TourConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Config error:".red(), e);
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config);

    let client = PostsClient::new(config.posts_url);
    match client.first_post().await {
        Ok(post) => {
            for line in post.render() {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(url = client.url(), error = %e, "could not load posts");
            eprintln!("{} {}", "Fetch failed:".red(), e);
            ExitCode::FAILURE
        }
    }
}
