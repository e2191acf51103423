use clap::{Parser, Subcommand};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

/// Command line client for the orders service
#[derive(Parser, Debug)]
#[command(name = "orders")]
#[command(about = "client cli used to manage orders on the server", version, long_about = None
)]
struct Cli {
    #[arg(long, global = true, default_value = DEFAULT_HOST, help = "Base url of the server")]
    host: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// list all orders
    List,
    /// show one order
    #[command(arg_required_else_help = true)]
    Get {
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
    /// create an order with a caller supplied id
    #[command(arg_required_else_help = true)]
    Create {
        #[arg(long, allow_negative_numbers = true)]
        id: i32,
        #[arg(long, help = "Name of the customer placing the order.")]
        customer_name: String,
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
    },
    /// change customer name and amount of an order
    #[command(arg_required_else_help = true)]
    Update {
        #[arg(allow_negative_numbers = true)]
        id: i32,
        #[arg(long)]
        customer_name: String,
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
    },
    /// remove every order with the id
    #[command(arg_required_else_help = true)]
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
}

const DEFAULT_HOST: &str = "http://localhost:8080";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Order {
    id: i32,
    customer_name: String,
    amount: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PutOrderRequest {
    customer_name: String,
    amount: f64,
}

fn print_order(order: &Order) {
    println!("{:>8}  {:<24}  {:>12.2}", order.id, order.customer_name, order.amount);
}

async fn report_failure(res: Response) -> Result<(), anyhow::Error> {
    match res.status() {
        StatusCode::NOT_FOUND => {
            println!("Resource not found");
        },
        StatusCode::BAD_REQUEST => {
            println!("Bad request, {}", res.text().await?);
        },
        unexpected => {
            println!("got unexpected status code, {}", unexpected);
        },
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let client = Client::new();
    let orders_url = format!("{}/orders", args.host.trim_end_matches('/'));

    match args.command {
        Commands::List => {
            let res = client.get(&orders_url).send().await?;
            if res.status() != StatusCode::OK {
                return report_failure(res).await;
            }
            let orders = res.json::<Vec<Order>>().await?;
            println!("{} order(s)", orders.len());
            orders.iter().for_each(print_order);
        },
        Commands::Get { id } => {
            let res = client.get(format!("{}/{}", orders_url, id)).send().await?;
            match res.status() {
                StatusCode::OK => {
                    print_order(&res.json::<Order>().await?);
                },
                StatusCode::NOT_FOUND => {
                    println!("{}", res.text().await?);
                },
                _ => report_failure(res).await?,
            }
        },
        Commands::Create { id, customer_name, amount } => {
            println!("creating order={}", id);
            let res = client
                .post(&orders_url)
                .json(&Order { id, customer_name, amount })
                .send()
                .await?;
            match res.status() {
                StatusCode::CREATED => {
                    println!("order {} created", id);
                },
                _ => report_failure(res).await?,
            }
        },
        Commands::Update { id, customer_name, amount } => {
            println!("updating order={}", id);
            let res = client
                .put(format!("{}/{}", orders_url, id))
                .json(&PutOrderRequest { customer_name, amount })
                .send()
                .await?;
            match res.status() {
                StatusCode::OK => {
                    println!("order {} updated", id);
                },
                _ => report_failure(res).await?,
            }
        },
        Commands::Delete { id } => {
            let res = client.delete(format!("{}/{}", orders_url, id)).send().await?;
            match res.status() {
                StatusCode::OK => {
                    println!("orders with id {} removed", id);
                },
                _ => report_failure(res).await?,
            }
        },
    };
    Ok(())
}
