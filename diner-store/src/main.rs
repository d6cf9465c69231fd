use anyhow::{Context, bail};
use diner_store::db::schema;
use diner_store::{Database, Restaurant, setup_environment};
use serde::Serialize;
use shared::models::Dish;

const USAGE: &str = "usage: diner-store <init | clear | drop | report YEAR>";

/// Yearly summary printed by `report`
#[derive(Debug, Serialize)]
struct Report {
    year: i32,
    top_average_spenders: Vec<i64>,
    top_rated_dishes: Vec<i64>,
    anonymous_favourite: Option<Dish>,
    low_raters_without_order: Vec<i64>,
    non_worth_price_increase: Vec<i64>,
    cumulative_profit: Vec<(u32, f64)>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    let config = setup_environment()?;

    let mut args = std::env::args().skip(1);
    let command = args.next().context(USAGE)?;

    // 2. 连接数据库
    let db = Database::connect(&config).await?;

    match command.as_str() {
        "init" => schema::create_tables(db.pool()).await?,
        "clear" => schema::clear_tables(db.pool()).await?,
        "drop" => schema::drop_tables(db.pool()).await?,
        "report" => {
            let year: i32 = args
                .next()
                .context(USAGE)?
                .parse()
                .context("YEAR must be a number")?;
            schema::create_tables(db.pool()).await?;
            let store = Restaurant::new(db.clone());
            let report = Report {
                year,
                top_average_spenders: store.get_customers_spent_max_avg_amount_money().await,
                top_rated_dishes: store.get_top_rated_dishes().await,
                anonymous_favourite: store.get_most_purchased_dish_among_anonymous_order().await,
                low_raters_without_order: store.get_customers_rated_but_not_ordered().await,
                non_worth_price_increase: store.get_non_worth_price_increase().await,
                cumulative_profit: store.get_cumulative_profit_per_month(year).await,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        other => bail!("unknown command `{other}`\n{USAGE}"),
    }

    db.close().await;
    tracing::info!(command = %command, "Done");
    Ok(())
}
