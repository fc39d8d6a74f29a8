mod api;
mod config;
mod macros;
mod model;
mod template;
mod view;

use std::{error::Error, fs, path::PathBuf, time::Duration};

use api::OrderClient;
use clap::Parser;
use enum_iterator::all;
use log::{debug, info};
use model::{OrderEnvelope, OrderUid};
use template::{
    flatten::{ItemField, OrderField},
    Templates,
};

#[derive(Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
#[command(bin_name = env!("CARGO_BIN_NAME"))]
enum Cli {
    #[command(about = "Prints tool version")]
    #[command(long_about = None)]
    Version,

    #[command(about = "Fetch an order from the order service and render it")]
    #[command(long_about = None)]
    Show(ShowArgs),

    #[command(about = "Render an order from a saved service response")]
    #[command(long_about = None)]
    Render(RenderArgs),

    #[command(about = "List placeholders used by templates")]
    #[command(long_about = None)]
    Inspect(TemplateArgs),
}

#[derive(clap::Args)]
struct ShowArgs {
    #[arg(short='c', long, default_value=Some("./config.toml"))]
    config_path: PathBuf,

    #[arg()]
    order_uid: Option<String>,
}

#[derive(clap::Args)]
struct TemplateArgs {
    #[arg(long)]
    order_template: PathBuf,

    #[arg(long)]
    item_template: PathBuf,
}

#[derive(clap::Args)]
struct RenderArgs {
    #[command(flatten)]
    templates: TemplateArgs,

    #[arg(long)]
    order_path: PathBuf,

    #[arg(long)]
    out_path: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match Cli::parse() {
        Cli::Version => {
            println!(env!("CARGO_PKG_VERSION"));
        }
        Cli::Show(args) => {
            show(args)?;
        }
        Cli::Render(args) => {
            render(args)?;
        }
        Cli::Inspect(args) => {
            inspect(args)?;
        }
    };

    Ok(())
}

/// Запрашивает заказ у сервиса и печатает его разметку.
fn show(args: ShowArgs) -> anyhow::Result<()> {
    debug!("Подгружаем конфиг из {:?}", args.config_path);
    let cfg = config::load(args.config_path)?;

    let templates = Templates::load(&cfg.order_template_path, &cfg.item_template_path)?;

    let uid = match args.order_uid {
        Some(uid) => uid,
        None => inquire::Text::new("Идентификатор заказа").prompt()?,
    };
    let uid = OrderUid::new(&uid).map_err(|e| e.context("order uid"))?;

    let client = OrderClient::new(&cfg.base_url, Duration::from_secs(cfg.timeout_secs))?;

    info!("Запрашиваем заказ {}", uid);
    let html = view::present(client.get_order(&uid), &templates);

    println!("{}", html);

    Ok(())
}

/// Рендерит заказ из сохранённого ответа сервиса.
fn render(args: RenderArgs) -> anyhow::Result<()> {
    let templates = Templates::load(&args.templates.order_template, &args.templates.item_template)?;

    debug!("Читаем заказ из {:?}", args.order_path);
    let lookup = fs::read_to_string(&args.order_path)
        .map_err(anyhow::Error::from)
        .and_then(|body| Ok(serde_json::from_str::<OrderEnvelope>(&body)?))
        .map(|envelope| envelope.order);

    let html = view::present(lookup, &templates);

    match args.out_path {
        Some(path) => {
            info!("Сохраняем разметку в {:?}", path);
            fs::write(path, html)?;
        }
        None => println!("{}", html),
    }

    Ok(())
}

/// Печатает плейсхолдеры шаблонов и отмечает неизвестные.
fn inspect(args: TemplateArgs) -> anyhow::Result<()> {
    let templates = Templates::load(&args.order_template, &args.item_template)?;

    let unknown_order = templates.unknown_order_placeholders();
    println!("order template:");
    for ph in templates.order.placeholders() {
        print_placeholder(ph, unknown_order.contains(ph));
    }

    let unknown_item = templates.unknown_item_placeholders();
    println!("item template:");
    for ph in templates.item.placeholders() {
        print_placeholder(ph, unknown_item.contains(ph));
    }

    let unused: Vec<String> = all::<OrderField>()
        .map(|f| f.to_string())
        .filter(|f| !templates.order.placeholders().contains(f))
        .chain(
            all::<ItemField>()
                .map(|f| f.to_string())
                .filter(|f| !templates.item.placeholders().contains(f)),
        )
        .collect();
    if !unused.is_empty() {
        println!("unused: {}", unused.join(", "));
    }

    Ok(())
}

fn print_placeholder(name: &str, unknown: bool) {
    if unknown {
        println!("  {{{{{}}}}} (unknown)", name);
    } else {
        println!("  {{{{{}}}}}", name);
    }
}
