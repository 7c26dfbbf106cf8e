use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand};

use cardsethub_sdk::listings::marketplace_search_url;
use cardsethub_sdk::logging;
use cardsethub_sdk::models::{Card, Listing};
use cardsethub_sdk::view::{
    card_detail, price_chart, top_prices, CardGridAction, CardGridState, CardSort, Page,
    RarityFilter, SetBrowserAction, SetBrowserState, SetFilter, TopPricesAction, TopPricesState,
};
use cardsethub_sdk::{config, CardSetHub, Route};

#[derive(Debug, Parser)]
#[command(name = "cardsethub")]
#[command(about = "Browse Pokemon TCG sets, cards, prices and marketplace listings")]
struct Cli {
    #[arg(long, global = true, default_value = config::CATALOG_BASE)]
    catalog_url: String,

    #[arg(long, global = true, default_value = config::LISTINGS_BASE)]
    listings_url: String,

    #[arg(long, global = true, help = "Link listings to the sandbox marketplace")]
    sandbox: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List sets grouped by series
    Sets {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, help = "Only sets released in 2022 or later")]
        recent: bool,
    },
    /// Show a set and a page of its cards
    Set {
        id: String,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "price-desc")]
        sort: CardSort,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show a card with prices and marketplace listings
    Card {
        id: String,
        #[arg(long)]
        no_listings: bool,
        #[arg(long)]
        no_chart: bool,
    },
    /// Show the most expensive cards
    TopPrices {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "ALL")]
        rarity: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Open a view by its path, e.g. `/set/base1`
    Open { path: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let hub = match CardSetHub::builder()
        .catalog_base(&cli.catalog_url)
        .listings_base(&cli.listings_url)
        .sandbox(cli.sandbox)
        .credentials_from_env()
        .build()
    {
        Ok(hub) => hub,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialise client");
            eprintln!("Failed to initialise client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("{}", hub);

    let command = match cli.command {
        Command::Open { path } => match command_for_route(Route::parse(&path)) {
            Some(command) => command,
            None => return ExitCode::SUCCESS,
        },
        other => other,
    };

    match run(&hub, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "view failed");
            eprintln!("Error loading data. Please try again later. ({})", e);
            ExitCode::FAILURE
        }
    }
}

/// Map a route onto a command with default view state. Routes without data
/// are printed here and yield `None`.
fn command_for_route(route: Route) -> Option<Command> {
    match route {
        Route::Home => {
            println!("CardSetHub");
            println!("  /set-search   browse sets by series");
            println!("  /top-prices   most expensive cards");
            println!("  /set/<id>     cards of a set");
            println!("  /card/<id>    card prices and listings");
            None
        }
        Route::Auth => {
            println!("Sign-in is not available: accounts are not supported.");
            None
        }
        Route::NotFound(path) => {
            println!("404: no page at {}", path);
            None
        }
        Route::SetSearch => Some(Command::Sets {
            search: String::new(),
            recent: false,
        }),
        Route::TopPrices => Some(Command::TopPrices {
            search: String::new(),
            rarity: "ALL".to_string(),
            page: 1,
        }),
        Route::SetDetail(id) => Some(Command::Set {
            id,
            search: String::new(),
            sort: CardSort::default(),
            page: 1,
        }),
        Route::CardDetail(id) => Some(Command::Card {
            id,
            no_listings: false,
            no_chart: false,
        }),
    }
}

fn run(hub: &CardSetHub, command: Command) -> cardsethub_sdk::Result<()> {
    match command {
        Command::Sets { search, recent } => {
            let sets = hub.sets().list()?;
            let filter = if recent { SetFilter::Recent } else { SetFilter::All };
            let state = SetBrowserState::default()
                .update(SetBrowserAction::Search(search))
                .update(SetBrowserAction::Filter(filter));

            let groups = state.render(&sets);
            if groups.is_empty() {
                println!("No sets found.");
            }
            for group in groups {
                println!("\n{}", group.series);
                for set in group.sets {
                    println!(
                        "  {:<12} {:<40} {:>4} cards  {}",
                        set.id, set.name, set.total, set.release_date
                    );
                }
            }
        }
        Command::Set {
            id,
            search,
            sort,
            page,
        } => {
            let detail = hub.sets().with_cards(&id)?;
            let set = &detail.set;
            println!("{} ({})", set.name, set.series);
            println!("Released {}  |  {} cards", set.release_date, set.total);
            let badges = set.legality_badges();
            if !badges.is_empty() {
                println!("{}", badges.join("  "));
            }

            let state = CardGridState::default()
                .update(CardGridAction::Search(search))
                .update(CardGridAction::Sort(sort))
                .update(CardGridAction::GoToPage(page));
            let view = state.render(&detail.cards);

            println!("\nShowing {} cards", view.total);
            for card in &view.items {
                let price = card
                    .secondary_market_price()
                    .map(|p| format!("${:.2}", p))
                    .unwrap_or_default();
                println!("  {:<8} {:<32} {:>10}  {}", card.number, card.name, price, card.id);
            }
            print_pager(&view);
        }
        Command::Card {
            id,
            no_listings,
            no_chart,
        } => {
            let card = hub.cards().get(&id)?;
            print_card(&card);

            if !no_chart {
                let history =
                    price_chart::synthesize_history(&card, Utc::now().date_naive(), &mut rand::thread_rng());
                println!("\nPrice history (30 days, simulated)");
                println!("  {:<8} {:>10} {:>10} {:>10} {:>10}", "date", "raw", "psa8", "psa9", "psa10");
                for point in history.iter().step_by(5) {
                    println!(
                        "  {:<8} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
                        point.date, point.raw, point.psa8, point.psa9, point.psa10
                    );
                }
            }

            if !no_listings {
                let listings = hub.listings().search(&card_detail::listing_query(&card));
                print_listings(hub, &card, &listings);
            }
        }
        Command::TopPrices {
            search,
            rarity,
            page,
        } => {
            println!("Loading most expensive cards...");
            let ranked = hub.top_prices().fetch()?;
            let state = TopPricesState::default()
                .update(TopPricesAction::Search(search))
                .update(TopPricesAction::Rarity(RarityFilter::parse(&rarity)))
                .update(TopPricesAction::GoToPage(page));
            let view = state.render(&ranked);

            for card in &view.items {
                let (normal, reverse) = top_prices::display_prices(card);
                println!(
                    "  {:<32} {:<20} #{:<6} {:<16} normal {:>9} reverse {:>9}",
                    card.name,
                    card.set.name,
                    card.number,
                    card.rarity.as_deref().unwrap_or("-"),
                    normal.map(|p| format!("${}", p)).unwrap_or_else(|| "-".into()),
                    reverse.map(|p| format!("${}", p)).unwrap_or_else(|| "-".into()),
                );
            }
            print_pager(&view);
        }
        Command::Open { .. } => {}
    }
    Ok(())
}

fn print_card(card: &Card) {
    println!("{} #{}", card.name, card.number);
    println!(
        "Set: {}  |  Card Number: {}",
        card.set.name,
        card_detail::collector_reference(card)
    );
    if let Some(ref artist) = card.artist {
        println!("Illustrator: {}", artist);
    }
    if let Some(ref rarity) = card.rarity {
        println!("Rarity: {}", rarity);
    }
    if let Some(ref types) = card.types {
        println!("Types: {}", types.join(", "));
    }
    if let Some(ref from) = card.evolves_from {
        println!("Evolves from: {}", from);
    }
    for attack in card.attacks.iter().flatten() {
        println!("Attack: {} [{}] {} {}", attack.name, attack.cost.join(" "), attack.damage, attack.text);
    }
    for weakness in card.weaknesses.iter().flatten() {
        println!("Weakness: {} {}", weakness.type_field, weakness.value);
    }
    for resistance in card.resistances.iter().flatten() {
        println!("Resistance: {} {}", resistance.type_field, resistance.value);
    }

    let finishes = card_detail::tcgplayer_rows(card);
    if !finishes.is_empty() {
        println!("\nTCGplayer");
        for finish in finishes {
            let rows: Vec<String> = finish
                .rows
                .iter()
                .map(|r| format!("{} ${:.2}", r.label, r.value))
                .collect();
            println!("  {:<24} {}", finish.finish, rows.join("  "));
        }
    }

    let market_rows = card_detail::cardmarket_rows(card);
    if !market_rows.is_empty() {
        println!("\nCardmarket");
        for row in market_rows {
            println!("  {:<28} €{:.2}", row.label, row.value);
        }
    }
}

fn print_listings(hub: &CardSetHub, card: &Card, listings: &[Listing]) {
    println!("\nMarketplace listings");
    if listings.is_empty() {
        println!("  No listings found.");
        println!("  Search on the marketplace: {}", card_detail::listing_fallback_url(card));
        return;
    }
    for listing in listings {
        println!(
            "  {} {:>10} {}",
            listing.price.currency, listing.price.value, listing.title
        );
        println!("      {}", hub.listings().view_item_url(&listing.item_id));
    }
    println!(
        "  See all: {}",
        marketplace_search_url(&card_detail::listing_query(card), true)
    );
}

fn print_pager(view: &Page<'_, Card>) {
    if view.page_count > 1 {
        let pages: Vec<String> = view
            .window
            .iter()
            .map(|p| {
                if *p == view.page {
                    format!("[{}]", p)
                } else {
                    p.to_string()
                }
            })
            .collect();
        println!("\nPage {} of {}: {}", view.page, view.page_count, pages.join(" "));
    } else if view.is_empty() {
        println!("No cards found.");
    }
}
