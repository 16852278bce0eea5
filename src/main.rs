use anyhow::{bail, Context, Result};
use app_ui::{
    sign_out, NavigationStack, ProductDetailBody, ProductListView, Route, ThemeState, Toast, ToastQueue,
};
use catalog_client::ProductId;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use storefront::{AppConfig, Storefront};

/// Browse the product catalog from the terminal
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Login email, used when no session is stored
    #[arg(long)]
    email: Option<String>,

    /// Login password, used when no session is stored
    #[arg(long)]
    password: Option<String>,

    /// Additional pages to load after the first one
    #[arg(long, default_value_t = 0)]
    pages: u32,

    /// Filter the loaded products by title or category
    #[arg(long)]
    search: Option<String>,

    /// Show one product's details
    #[arg(long)]
    product: Option<ProductId>,

    /// Clear the stored session and exit
    #[arg(long)]
    logout: bool,

    /// Use the dark theme
    #[arg(long)]
    dark: bool,

    /// Window width used to pick the grid layout
    #[arg(long, default_value_t = 400.0)]
    width: f32,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = AppConfig::from_env().context("Failed to read configuration")?;
    let app = Storefront::open(config).context("Failed to start storefront")?;
    let theme = ThemeState::from_system(args.dark);
    let mut toasts = ToastQueue::new();

    if let Err(err) = app.session().restore_session().await {
        tracing::warn!(error = %err, "continuing without a stored session");
    }

    if args.logout {
        sign_out(app.session(), &mut toasts).await;
        print_toasts(&mut toasts);
        return Ok(());
    }

    let mut stack = NavigationStack::new(Route::Products);
    if stack.apply_gate(&app.session().state()) == Some(Route::Login) {
        let mut login = app.login_screen();
        if let Some(email) = &args.email {
            login.form.email = email.clone();
        }
        if let Some(password) = &args.password {
            login.form.password = password.clone();
        }

        let outcome = login.submit(&mut toasts).await;
        print_toasts(&mut toasts);
        if outcome.is_none() {
            bail!("Not signed in");
        }
        stack.apply_gate(&app.session().state());
    }

    let list = app.product_list_screen();
    list.on_mount().await;
    for _ in 0..args.pages {
        if list.on_end_reached().await.is_none() {
            break;
        }
    }
    if let Some(term) = &args.search {
        list.on_search(term);
    }

    println!("== {} ==", stack.current().title());
    print_list(&list.render(&theme, args.width));

    if let Some(id) = args.product {
        stack.push(Route::ProductDetail { id });
        let mut detail = app.product_detail_screen(id);
        detail.load().await;

        println!();
        println!("== {} ==", stack.current().title());
        print_detail(&detail.render());
    }

    Ok(())
}

fn print_toasts(toasts: &mut ToastQueue) {
    for Toast { title, message, .. } in toasts.drain() {
        match message {
            Some(message) => eprintln!("[{}] {}", title, message),
            None => eprintln!("[{}]", title),
        }
    }
}

fn print_list(view: &ProductListView) {
    if !view.search_bar.value.is_empty() {
        println!("Search: {}", view.search_bar.value);
    }
    if let Some(banner) = &view.error {
        println!("! {} ({})", banner.message, banner.retry_label);
    }
    if let Some(message) = &view.empty_message {
        println!("{}", message);
    }

    for (index, card) in view.cards.iter().enumerate() {
        if index > 0 && index % view.columns.max(1) == 0 {
            println!();
        }
        println!(
            "#{:<4} {:<40} {:>10}  {:<8} {}",
            card.id, card.title, card.price, card.rating, card.category_badge
        );
    }
}

fn print_detail(body: &ProductDetailBody) {
    match body {
        ProductDetailBody::Loading => println!("Loading..."),
        ProductDetailBody::NotFound(message) => println!("{}", message),
        ProductDetailBody::Product(view) => {
            println!("{}  {}", view.title, view.rating);
            println!("{}", view.price);
            println!("{}", view.category);
            println!();
            println!("{}", view.description);
        }
    }
}
