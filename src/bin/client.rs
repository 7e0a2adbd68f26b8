use clap::{Args, Parser, Subcommand};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "drink-round")]
#[command(about = "organizer cli to manage group drink orders against the server", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// group order related ops
    #[command(arg_required_else_help = true)]
    Order(OrderArgs),
}

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    #[arg(help = "Group order id to operate")]
    id: String,
    #[command(subcommand)]
    command: OrderCmds,
}

#[derive(Debug, Subcommand)]
enum OrderCmds {
    /// stop accepting new submissions
    Lock,
    /// start accepting submissions again
    Unlock,
    /// print the live per-item aggregate
    Summary,
}

const HOST: &str = "http://localhost:8080";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryResponse {
    per_item: Vec<PerItem>,
    total_items: u64,
    total_price: u64,
    submission_count: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PerItem {
    menu_item_name: String,
    price: u32,
    quantity: u64,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();

    match args.command {
        Commands::Order(order) => {
            let id = order.id;
            match order.command {
                cmd @ (OrderCmds::Lock | OrderCmds::Unlock) => {
                    let status = if matches!(cmd, OrderCmds::Lock) {
                        "locked"
                    } else {
                        "open"
                    };
                    let res = Client::new()
                        .patch(format!("{}/v1/group-orders/{}/status", HOST, id))
                        .json(&serde_json::json!({ "status": status }))
                        .send()
                        .await?;
                    match res.status() {
                        StatusCode::OK => {
                            println!("group order {} is now {}", id, status);
                        }
                        StatusCode::NOT_FOUND => {
                            println!("group order {} does not exist", id);
                        }
                        unexpected => {
                            println!("got unexpected status code, {}", unexpected);
                        }
                    }
                }
                OrderCmds::Summary => {
                    let res = Client::new()
                        .get(format!("{}/v1/group-orders/{}/summary", HOST, id))
                        .send()
                        .await?;
                    match res.status() {
                        StatusCode::OK => {
                            let summary = res
                                .json::<SummaryResponse>()
                                .await
                                .expect("failed to parse summary, aborting");
                            for item in &summary.per_item {
                                println!(
                                    "{} x{} = NT${}",
                                    item.menu_item_name,
                                    item.quantity,
                                    item.price as u64 * item.quantity
                                );
                            }
                            println!(
                                "{} drinks, NT${} total, {} people",
                                summary.total_items, summary.total_price, summary.submission_count
                            );
                        }
                        StatusCode::NOT_FOUND => {
                            println!("group order {} does not exist", id);
                        }
                        unexpected => {
                            println!("got unexpected status code, {}", unexpected);
                        }
                    }
                }
            }
        }
    };
    Ok(())
}
