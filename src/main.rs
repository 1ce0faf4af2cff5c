use clap::Parser;
use food_cart::config::Command;
use food_cart::utils::format::{format_currency_with, format_datetime, parse_timestamp};
use food_cart::utils::forms::validate_required;
use food_cart::utils::notify::{Severity, Toaster};
use food_cart::utils::{logger, validation::Validate};
use food_cart::{ApiClient, AppConfig, AppError, CartLedger, CartLine, CliConfig, SharedCatalog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut toaster = Toaster::new(config.toast_dismiss_after());
    match run(&cli.command, &config, &mut toaster).await {
        Ok(()) => Ok(()),
        Err(e) => {
            toaster.show(e.user_friendly_message(), Severity::Danger);
            eprintln!("❌ {}", e.user_friendly_message());
            let exit_code = match e {
                AppError::ValidationError { .. } => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

async fn run(
    command: &Command,
    config: &AppConfig,
    toaster: &mut Toaster,
) -> food_cart::Result<()> {
    let symbol = config.currency_symbol();
    let catalog = SharedCatalog::new(config.catalog());

    match command {
        Command::Menu => {
            for item in catalog.snapshot().items() {
                println!(
                    "{:>3}  {:<20} {}",
                    item.id,
                    item.name,
                    format_currency_with(symbol, item.price)
                );
            }
        }
        Command::Total { items } => {
            let cart = build_cart(&catalog, items);
            print_cart(&cart, symbol);
        }
        Command::Order { items, address } => {
            if let Some(message) = validate_required(Some(address.as_str()), "Delivery address") {
                return Err(AppError::ValidationError { message });
            }
            let cart = build_cart(&catalog, items);
            print_cart(&cart, symbol);

            let client = ApiClient::with_timeout(
                config.api.base_url.clone(),
                config.api.csrf_token.clone(),
                config.timeout(),
            )?;
            let response = client
                .place_order(&cart.to_order_request(address.as_str()))
                .await?;
            toaster.show(response.message.clone(), Severity::Success);
            println!("✅ {}", response.message);
        }
        Command::Orders => {
            let client = ApiClient::with_timeout(
                config.api.base_url.clone(),
                config.api.csrf_token.clone(),
                config.timeout(),
            )?;
            let orders = client.fetch_orders().await?;
            if orders.is_empty() {
                toaster.show("No orders yet", Severity::Info);
            }
            for order in orders {
                let placed = order
                    .order_timestamp
                    .as_deref()
                    .and_then(|ts| parse_timestamp(ts).ok())
                    .map(|ts| format_datetime(&ts))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "#{:<5} {:<20} x{:<3} {:>10}  {}  {}",
                    order.order_id,
                    order.item_name,
                    order.quantity,
                    format_currency_with(symbol, order.price * order.quantity as f64),
                    placed,
                    order.delivery_address
                );
            }
        }
    }

    Ok(())
}

fn build_cart(catalog: &SharedCatalog, items: &[CartLine]) -> CartLedger<SharedCatalog> {
    let mut cart = CartLedger::new(catalog.clone())
        .with_display_hook(|| tracing::debug!("🛒 Cart display refreshed"));
    for line in items {
        cart.add_item(line.item_id, line.quantity);
    }
    cart
}

fn print_cart(cart: &CartLedger<SharedCatalog>, symbol: &str) {
    for line in cart.lines() {
        let unit = cart.item_price(line.item_id);
        println!(
            "{:>3} x{:<3} @ {:>10} = {}",
            line.item_id,
            line.quantity,
            format_currency_with(symbol, unit),
            format_currency_with(symbol, unit * line.quantity as f64)
        );
    }
    println!("Total: {}", format_currency_with(symbol, cart.total()));
}
