//! Leadboard CLI - Terminal client for the Leadboard dashboard
//!
//! Mirrors the web client: sign-up/sign-in against the API, then a
//! dashboard rendered from the chart endpoint plus the locally
//! persisted UI slices (theme, organization, favorites, date range).

mod store;
mod views;

use anyhow::{bail, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use leadboard_core::domain::user::validate_email;
use leadboard_core::domain::RangePreset;
use leadboard_sdk::{ApiClient, SdkError, SignInRequest, SignUpRequest};

use store::{Session, Store, Theme};

const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

// Client-side form rules, stricter than the server's
const MIN_NAME_LEN: usize = 2;
const MIN_PASSWORD_LEN: usize = 8;

#[derive(Parser)]
#[command(name = "leadboard")]
#[command(about = "Leadboard dashboard client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL
    #[arg(long, env = "LEADBOARD_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and sign in
    SignUp {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign in to an existing account
    SignIn {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Drop the stored session
    SignOut,

    /// Show the signed-in user
    Whoami,

    /// Render the dashboard for the active date range
    Dashboard,

    /// Show or change the dashboard date range
    Range {
        /// Preset tab: 1d, 3d, 7d or 30d
        preset: Option<RangePreset>,

        /// Custom range start (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<NaiveDate>,

        /// Custom range end (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<NaiveDate>,
    },

    /// Set or toggle the color theme
    Theme {
        /// light, dark or toggle
        mode: String,
    },

    /// Show or rename the organization
    Org {
        /// New name; empty or omitted shows the current one
        name: Option<String>,
    },

    /// Manage pinned sidebar contacts
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List pinned contacts
    List,

    /// Toggle the heart on one entry (1-based position)
    Heart { position: usize },

    /// Move an entry to a new position (1-based)
    Move { from: usize, to: usize },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut store = Store::open()?;

    match cli.command {
        Commands::SignUp {
            name,
            email,
            password,
        } => {
            validate_sign_up(&name, &email, &password)?;

            let client = ApiClient::new(&cli.api_url)?;
            let session = client
                .sign_up(SignUpRequest {
                    name,
                    email,
                    password,
                })
                .await?;

            let user = session.user.clone();
            store.set_session(Session {
                access_token: session.access_token,
                user: session.user,
            })?;

            println!("{}", format!("✓ Welcome, {}!", user.name).green().bold());
            println!("Signed in as {} <{}>", user.name, user.email);
        }

        Commands::SignIn { email, password } => {
            validate_sign_in(&email, &password)?;

            let client = ApiClient::new(&cli.api_url)?;
            let session = client.sign_in(SignInRequest { email, password }).await?;

            let user = session.user.clone();
            store.set_session(Session {
                access_token: session.access_token,
                user: session.user,
            })?;

            println!(
                "{}",
                format!("✓ Welcome back, {}!", user.name).green().bold()
            );
        }

        Commands::SignOut => {
            store.clear_session()?;
            println!("{}", "✓ Signed out".green().bold());
        }

        Commands::Whoami => {
            let session = require_session(&store)?;
            let client = ApiClient::with_token(&cli.api_url, &session.access_token)?;

            match client.me().await {
                Ok(user) => {
                    store.update_profile(user.clone())?;

                    println!("[{}] {}", user.initials(), user.name.bold());
                    println!("  {} {}", "Email:".bold(), user.email);
                    println!("  {} {}", "User ID:".bold(), user.id);
                }
                Err(SdkError::Unauthorized(_)) => {
                    store.clear_session()?;
                    bail!("Session expired. Please sign in again.");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Commands::Dashboard => {
            let session = require_session(&store)?;
            let client = ApiClient::with_token(&cli.api_url, &session.access_token)?;
            let window = store.state().date_range.effective();

            match client.chart_data(window.start, window.end).await {
                Ok(points) => {
                    let state = store.state();
                    println!(
                        "{}",
                        views::render_header(&state.organization, &session.user, state.theme)
                    );
                    println!("{}", views::render_range_line(&state.date_range));
                    println!();
                    println!("{}", views::render_chart(&points));
                    println!();
                    println!("{}", views::render_contact_cards());
                }
                Err(SdkError::Unauthorized(_)) => {
                    store.clear_session()?;
                    bail!("Session expired. Please sign in again.");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Commands::Range { preset, from, to } => {
            let today = Utc::now().date_naive();

            match (preset, from, to) {
                // Bare `range` only prints the current window
                (None, None, None) => {}
                (Some(RangePreset::Custom), Some(from), Some(to)) | (None, Some(from), Some(to)) => {
                    store.set_custom_range(from, to)?;
                }
                (Some(RangePreset::Custom), _, _) => {
                    bail!("The custom range needs --from and --to");
                }
                (Some(tab), None, None) => {
                    store.set_range_tab(tab, today)?;
                }
                (Some(_), _, _) => {
                    bail!("Pass either a preset or --from/--to, not both");
                }
                (None, _, _) => {
                    bail!("--from and --to must be given together");
                }
            }

            println!("{}", views::render_range_line(&store.state().date_range));
        }

        Commands::Theme { mode } => {
            let theme = match mode.as_str() {
                "toggle" => store.toggle_theme()?,
                other => {
                    let theme: Theme = other
                        .parse()
                        .map_err(|_| anyhow::anyhow!("Expected light, dark or toggle"))?;
                    store.set_theme(theme)?;
                    theme
                }
            };

            println!("✓ Theme set to {}", theme.to_string().bold());
        }

        Commands::Org { name } => match name {
            Some(name) => {
                store.set_organization(&name)?;
                println!(
                    "✓ Organization renamed to {}",
                    store.state().organization.bold()
                );
            }
            None => println!("{}", store.state().organization),
        },

        Commands::Favorites { action } => match action {
            FavoritesAction::List => {
                for (position, item) in store.state().favorites.iter().enumerate() {
                    let heart = if item.hearted {
                        "♥".red().to_string()
                    } else {
                        "♡".to_string()
                    };
                    println!("{:>2}. {} {}", position + 1, heart, item.name);
                }
            }

            FavoritesAction::Heart { position } => {
                let toggled = position
                    .checked_sub(1)
                    .map(|index| store.toggle_heart(index))
                    .transpose()?
                    .unwrap_or(false);

                if !toggled {
                    bail!("No favorite at position {}", position);
                }

                let item = &store.state().favorites[position - 1];
                let verb = if item.hearted { "Hearted" } else { "Unhearted" };
                println!("{}", format!("✓ {} {}", verb, item.name).green().bold());
            }

            FavoritesAction::Move { from, to } => {
                let moved = match (from.checked_sub(1), to.checked_sub(1)) {
                    (Some(from), Some(to)) => store.move_favorite(from, to)?,
                    _ => false,
                };

                if !moved {
                    bail!("Positions must be between 1 and {}", store.state().favorites.len());
                }

                println!("{}", format!("✓ Moved entry to position {}", to).green().bold());
            }
        },
    }

    Ok(())
}

/// The stored session, or an instruction to sign in.
fn require_session(store: &Store) -> Result<Session> {
    store
        .state()
        .session
        .clone()
        .ok_or_else(|| anyhow::anyhow!("Not signed in. Run `leadboard sign-in` first."))
}

fn validate_sign_up(name: &str, email: &str, password: &str) -> Result<()> {
    if name.trim().chars().count() < MIN_NAME_LEN {
        bail!("Name must be at least {} characters", MIN_NAME_LEN);
    }
    if validate_email(email).is_err() {
        bail!("Please enter a valid email address");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        bail!("Password must be at least {} characters", MIN_PASSWORD_LEN);
    }
    Ok(())
}

fn validate_sign_in(email: &str, password: &str) -> Result<()> {
    if validate_email(email).is_err() {
        bail!("Please enter a valid email address");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        bail!("Password must be at least {} characters", MIN_PASSWORD_LEN);
    }
    Ok(())
}
