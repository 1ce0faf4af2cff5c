use crate::domain::model::{CartLine, ItemId};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "food-cart")]
#[command(about = "Cart, pricing and order helper for the food ordering app")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Override the API base URL")]
    pub base_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the menu and its prices
    Menu,
    /// Price a cart without contacting the server
    Total {
        #[arg(long = "item", value_name = "ID:QTY", value_parser = parse_cart_line)]
        items: Vec<CartLine>,
    },
    /// Place an order for the given cart
    Order {
        #[arg(long = "item", value_name = "ID:QTY", value_parser = parse_cart_line)]
        items: Vec<CartLine>,

        #[arg(long)]
        address: String,
    },
    /// List orders already placed
    Orders,
}

/// `ID` or `ID:QTY`; quantity defaults to 1 and may be negative.
pub fn parse_cart_line(arg: &str) -> Result<CartLine, String> {
    let (id, quantity) = match arg.split_once(':') {
        Some((id, qty)) => (id, qty.trim().parse::<i64>().map_err(|e| e.to_string())?),
        None => (arg, 1),
    };
    let item_id: ItemId = id.parse().map_err(|e| format!("invalid item id '{}': {}", id, e))?;
    Ok(CartLine { item_id, quantity })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cart_line() {
        assert_eq!(
            parse_cart_line("1:2").unwrap(),
            CartLine {
                item_id: ItemId(1),
                quantity: 2,
            }
        );
        assert_eq!(
            parse_cart_line("4").unwrap(),
            CartLine {
                item_id: ItemId(4),
                quantity: 1,
            }
        );
        assert_eq!(parse_cart_line("3:-1").unwrap().quantity, -1);
        assert!(parse_cart_line("x:1").is_err());
        assert!(parse_cart_line("1:two").is_err());
    }

    #[test]
    fn test_cli_parses_order_command() {
        let cli = CliConfig::try_parse_from([
            "food-cart",
            "--verbose",
            "order",
            "--item",
            "1:2",
            "--item",
            "4",
            "--address",
            "12 MG Road",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Command::Order { items, address } => {
                assert_eq!(items.len(), 2);
                assert_eq!(address, "12 MG Road");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_json_logs_flag() {
        let cli = CliConfig::try_parse_from(["food-cart", "--json-logs", "menu"]).unwrap();
        assert!(cli.json_logs);
        assert!(matches!(cli.command, Command::Menu));
    }
}
