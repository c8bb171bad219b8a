//! Command handlers
//!
//! Each subcommand loads what it needs from the store, runs against the API or
//! the cached data, and writes or prints the result.

use super::args::{Cli, Command, FetchArgs, FilterArgs, HistogramArgs, ReportArgs, ReportKind};
use crate::api::Nutritionix;
use crate::config::Settings;
use crate::fetch::Fetcher;
use crate::histogram::{Histogram, HistogramOptions};
use crate::menu::{field_names, filter_items, parse_value, MenuItem, RestaurantMenu};
use crate::report;
use crate::store::{to_json_string, Store};
use anyhow::{Context, Result};
use tracing::info;

/// Execute the parsed command against loaded settings
pub async fn run(cli: Cli, settings: Settings) -> Result<()> {
    let store = Store::new(settings.paths.clone());

    match cli.command {
        Command::Ids { names } => ids(&settings, &store, names).await,
        Command::Fetch(args) => fetch(&settings, &store, args).await,
        Command::FetchAll { out } => fetch_all(&settings, &store, out.as_deref()).await,
        Command::Filter(args) => filter(&store, args),
        Command::Report(args) => print_report(&settings, &store, args),
        Command::Histogram(args) => histogram(&settings, &store, args),
        Command::Keys { input } => {
            let items = store.load_menu(input.as_deref())?;
            for name in field_names(&items) {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

fn connect(settings: &Settings, store: &Store) -> Result<Nutritionix> {
    let credentials = store
        .credentials()
        .context("failed to read API credentials")?;
    Nutritionix::from_settings(&settings.api, credentials).context("failed to create API client")
}

async fn ids(settings: &Settings, store: &Store, names: Vec<String>) -> Result<()> {
    let names = if names.is_empty() {
        settings.restaurants.0.clone()
    } else {
        names
    };

    let api = connect(settings, store)?;
    let ids = api.find_restaurants(&names).await?;
    for id in &ids {
        info!("{}: {}", id.name, id.id);
    }
    store.save_restaurant_ids(&ids)?;
    Ok(())
}

async fn fetch(settings: &Settings, store: &Store, args: FetchArgs) -> Result<()> {
    let api = connect(settings, store)?;

    let brand_id = match (args.target.brand_id, args.target.restaurant) {
        (Some(id), _) => id,
        (None, Some(name)) => api.find_restaurant(&name).await?.id,
        (None, None) => anyhow::bail!("either --brand-id or --restaurant is required"),
    };

    let fetcher = Fetcher::with_settings(api, &settings.api);
    let items = fetcher
        .fetch_all(&brand_id)
        .await
        .with_context(|| format!("failed to fetch menu for brand {}", brand_id))?;

    store.save_menu(args.out.as_deref(), &items)?;
    Ok(())
}

async fn fetch_all(settings: &Settings, store: &Store, out: Option<&std::path::Path>) -> Result<()> {
    let ids = store
        .load_restaurant_ids()
        .context("failed to read restaurant ids; run `ids` first")?;
    let fetcher = Fetcher::with_settings(connect(settings, store)?, &settings.api);

    let mut menus = Vec::with_capacity(ids.len());
    for id in ids {
        info!("Fetching menu for {}", id.name);
        let items = fetcher
            .fetch_all(&id.id)
            .await
            .with_context(|| format!("failed to fetch menu for {}", id.name))?;
        menus.push(RestaurantMenu::new(id.name, items));
    }

    store.save_collection(out, &menus)?;
    Ok(())
}

fn filter(store: &Store, args: FilterArgs) -> Result<()> {
    let items = store.load_menu(args.input.as_deref())?;
    let value = parse_value(&args.value);
    let kept: Vec<MenuItem> = filter_items(&items, &args.field, &value, args.negate)
        .into_iter()
        .cloned()
        .collect();

    info!("Kept {} of {} item(s)", kept.len(), items.len());
    match args.out {
        Some(path) => store.save_menu(Some(path.as_path()), &kept)?,
        None => println!("{}", to_json_string(&kept)?),
    }
    Ok(())
}

fn print_report(settings: &Settings, store: &Store, args: ReportArgs) -> Result<()> {
    let items = store.load_menu(args.input.as_deref())?;
    match args.kind {
        ReportKind::MaxSugar => print!("{}", report::max_sugar(&items, &args.brand, &settings.report)),
        ReportKind::LowSugar => print!("{}", report::low_sugar(&items, &args.brand, &settings.report)),
    }
    Ok(())
}

fn histogram(settings: &Settings, store: &Store, args: HistogramArgs) -> Result<()> {
    let options = HistogramOptions {
        bins: args.bins.unwrap_or(settings.histogram.bins),
        x_max: args.x_max,
        title: args.title,
        label: args.label,
    };
    let width = settings.histogram.bar_width;

    if args.collection {
        let menus = store.load_collection(args.input.as_deref())?;
        for histogram in Histogram::compare(&menus, &args.field, &options)? {
            println!("{}", histogram.render(width));
        }
    } else {
        let items = store.load_menu(args.input.as_deref())?;
        print!("{}", Histogram::from_menu(&items, &args.field, &options)?.render(width));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PathSettings;
    use clap::Parser;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_in(dir: &std::path::Path, base_url: &str) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = base_url.to_string();
        settings.paths = PathSettings {
            credentials: dir.join("credentials.json"),
            restaurant_ids: dir.join("restaurant_ids.json"),
            menu_dump: dir.join("dump.json"),
            menu_collection: dir.join("restaurant_menu_data.json"),
        };
        std::fs::write(
            &settings.paths.credentials,
            r#"{"appId": "id", "appKey": "key"}"#,
        )
        .unwrap();
        settings
    }

    fn page(total: usize, names: &[&str]) -> serde_json::Value {
        let hits: Vec<_> = names
            .iter()
            .map(|n| json!({"_id": n, "fields": {"item_name": n, "brand_name": "Qdoba"}}))
            .collect();
        json!({"total": total, "hits": hits})
    }

    #[tokio::test]
    async fn test_ids_then_fetch_all() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path(), &server.uri());

        Mock::given(method("GET"))
            .and(path("/brand/search"))
            .and(query_param("query", "Qdoba"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total": 1,
                "hits": [{"fields": {"name": "Qdoba", "_id": "q1"}}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_partial_json(json!({"filters": {"brand_id": "q1"}, "offset": 0})))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(2, &["Bowl", "Taco"])))
            .expect(1)
            .mount(&server)
            .await;

        let cli = Cli::try_parse_from(["menu-nutrition", "ids", "Qdoba"]).unwrap();
        run(cli, settings.clone()).await.unwrap();

        let cli = Cli::try_parse_from(["menu-nutrition", "fetch-all"]).unwrap();
        run(cli, settings.clone()).await.unwrap();

        let store = Store::new(settings.paths.clone());
        let menus = store.load_collection(None).unwrap();
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].name, "Qdoba");
        assert_eq!(menus[0].menu[1].display_name(), "Taco");
    }

    #[tokio::test]
    async fn test_filter_writes_matching_items() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path(), "http://127.0.0.1:1/");
        let store = Store::new(settings.paths.clone());
        let items: Vec<MenuItem> = serde_json::from_value(json!([
            {"item_name": "Bowl", "menu_category": "entree"},
            {"item_name": "Soda", "menu_category": "drink"}
        ]))
        .unwrap();
        store.save_menu(None, &items).unwrap();

        let out = dir.path().join("drinks.json");
        let cli = Cli::try_parse_from([
            "menu-nutrition",
            "filter",
            "--field",
            "menu_category",
            "--value",
            "entree",
            "--negate",
            "--out",
            out.to_str().unwrap(),
        ])
        .unwrap();
        run(cli, settings).await.unwrap();

        let kept = store.load_menu(Some(out.as_path())).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].display_name(), "Soda");
    }

    #[tokio::test]
    async fn test_fetch_without_credentials_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = settings_in(dir.path(), "http://127.0.0.1:1/");
        settings.paths.credentials = dir.path().join("missing.json");

        let cli = Cli::try_parse_from(["menu-nutrition", "fetch", "--brand-id", "q1"]).unwrap();
        let err = run(cli, settings).await.unwrap_err();
        assert!(err.to_string().contains("credentials"));
    }
}
