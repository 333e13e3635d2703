//! Terminal version of the favorites screen.
//!
//! ```text
//! cargo run --features cli --bin favorites
//! cargo run --features cli --bin favorites -- --session <SECRET>
//! ```

use async_trait::async_trait;
use clap::{Arg, Command};
use restate_gateway::prelude::*;
use tokio::io::{stdin, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use url::Url;

/// Prints the authorization URL and waits for the callback URL to be pasted
struct TerminalBrowser {
    input: Mutex<Lines<BufReader<Stdin>>>,
}

#[async_trait]
impl AuthBrowser for TerminalBrowser {
    async fn open_auth_session(&self, auth_url: &Url, redirect_uri: &str) -> BrowserResult {
        println!("Open this URL to sign in:\n\n  {}\n", auth_url);
        println!("Paste the URL you were sent to ({}...):", redirect_uri);

        match self.input.lock().await.next_line().await {
            Ok(Some(line)) if line.trim().starts_with(redirect_uri) => BrowserResult::Success {
                url: line.trim().to_string(),
            },
            Ok(Some(line)) if line.trim().is_empty() => BrowserResult::Cancel,
            _ => BrowserResult::Dismiss,
        }
    }
}

async fn prompt(input: &Mutex<Lines<BufReader<Stdin>>>, question: &str) -> String {
    println!("{}", question);
    match input.lock().await.next_line().await {
        Ok(Some(line)) => line.trim().to_string(),
        _ => String::new(),
    }
}

fn print_favorites(favorites: &[Document<FavoriteGame>]) {
    println!("\nFavorite Games");
    if favorites.is_empty() {
        println!("No favorites found!");
        return;
    }
    for (index, favorite) in favorites.iter().enumerate() {
        println!("  [{}] {} (game {})", index + 1, favorite.data.title, favorite.data.game_id);
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let matches = Command::new("favorites")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List and remove favorite games")
        .arg(
            Arg::new("session")
                .long("session")
                .value_name("SECRET")
                .takes_value(true)
                .help("Use an existing session secret instead of signing in"),
        )
        .get_matches();

    if let Err(e) = run(matches.value_of("session")).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(session_secret: Option<&str>) -> Result<(), Error> {
    let gateway = Gateway::from_env()?;
    let browser = TerminalBrowser {
        input: Mutex::new(BufReader::new(stdin()).lines()),
    };

    match session_secret {
        Some(secret) => {
            gateway
                .set_session(Session {
                    id: "current".to_string(),
                    user_id: String::new(),
                    secret: secret.to_string(),
                    provider: String::new(),
                    created_at: None,
                    expire: None,
                })
                .await
        }
        None => {
            if !gateway.login(&browser).await {
                return Err(Error::auth("sign in failed"));
            }
        }
    }

    let user_id = gateway
        .get_user_id()
        .await?
        .ok_or_else(|| Error::auth("account has no user id"))?;

    let mut favorites = gateway.fetch_favorite_games(&user_id).await;
    loop {
        print_favorites(&favorites);
        if favorites.is_empty() {
            return Ok(());
        }

        let choice = prompt(&browser.input, "\nNumber to delete (empty to quit):").await;
        if choice.is_empty() {
            return Ok(());
        }
        let Some(favorite) = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| favorites.get(i))
        else {
            println!("No entry {}", choice);
            continue;
        };

        let answer = prompt(
            &browser.input,
            "Are you sure you want to delete this game from your favorites? [y/N]",
        )
        .await;
        if !answer.eq_ignore_ascii_case("y") {
            continue;
        }

        let deleted = gateway.delete_game(&favorite.id).await;
        match deleted {
            Ok(()) => favorites = gateway.fetch_favorite_games(&user_id).await,
            Err(_) => println!("Failed to delete game. Please try again."),
        }
    }
}
