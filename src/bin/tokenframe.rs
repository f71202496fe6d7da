use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tokenframe::{
    CardResolver, FontSet, FrameTemplate, RenderRequest, RenderResources, RendererKind,
    ScryfallClient, TokenConfig, TokenError, TokenImage, TokenOrder, TokenRenderer,
    create_renderer, generate_token, search_cards,
};

#[derive(Parser, Debug)]
#[command(name = "tokenframe", version)]
struct Cli {
    /// JSON config file; missing keys keep their defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the frame image and fonts (overrides config and environment).
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look a card up by name and render a token with its art.
    Generate(GenerateArgs),
    /// Render a token from a local art file without contacting the card database.
    Render(RenderArgs),
    /// Search the card database and print the first matches as JSON.
    Search(SearchArgs),
    /// Print one card record as JSON.
    Card(CardArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Exact card name.
    #[arg(long)]
    name: String,

    #[arg(long, default_value = "")]
    power: String,

    #[arg(long, default_value = "")]
    toughness: String,

    /// Printed subtype; defaults to the card's own subtypes.
    #[arg(long)]
    subtype: Option<String>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Use the frameless fallback renderer.
    #[arg(long, default_value_t = false)]
    basic: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Art image file.
    #[arg(long)]
    art: PathBuf,

    #[arg(long)]
    name: String,

    #[arg(long, default_value = "")]
    power: String,

    #[arg(long, default_value = "")]
    toughness: String,

    #[arg(long, default_value = "Creature")]
    meta_types: String,

    #[arg(long, default_value = "")]
    subtype: String,

    #[arg(long, default_value = "")]
    oracle: String,

    #[arg(long, default_value = "")]
    mana_cost: String,

    #[arg(long, default_value = "")]
    artist: String,

    /// Card color; repeat for multicolored tokens.
    #[arg(long = "color")]
    colors: Vec<String>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Use the frameless fallback renderer.
    #[arg(long, default_value_t = false)]
    basic: bool,
}

#[derive(Parser, Debug)]
struct SearchArgs {
    query: String,

    /// Maximum number of cards to print (defaults to the configured limit).
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Parser, Debug)]
struct CardArgs {
    id: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref(), cli.assets)?;
    match cli.cmd {
        Command::Generate(args) => cmd_generate(&cfg, args),
        Command::Render(args) => cmd_render(&cfg, args),
        Command::Search(args) => cmd_search(&cfg, args),
        Command::Card(args) => cmd_card(&cfg, args),
    }
}

fn load_config(path: Option<&Path>, assets: Option<PathBuf>) -> anyhow::Result<TokenConfig> {
    let cfg = match path {
        Some(p) => TokenConfig::from_path(p)?,
        None => TokenConfig::default(),
    };
    let mut cfg = cfg.with_env_overrides()?;
    if let Some(dir) = assets {
        cfg.assets_dir = dir;
    }
    tracing::debug!(assets = %cfg.assets_dir.display(), "configuration loaded");
    Ok(cfg)
}

fn build_renderer(cfg: &TokenConfig, basic: bool) -> anyhow::Result<Box<dyn TokenRenderer>> {
    let (kind, resources) = if basic {
        let resources = RenderResources {
            basic_font: Some(cfg.asset_path(&cfg.basic_font)),
            ..RenderResources::default()
        };
        (RendererKind::Basic, resources)
    } else {
        let resources = RenderResources {
            frame: Some(Arc::new(FrameTemplate::load(&cfg.frame_path())?)),
            fonts: Some(Arc::new(FontSet::load(cfg)?)),
            basic_font: None,
        };
        (RendererKind::Frame, resources)
    };
    Ok(create_renderer(kind, &resources)?)
}

fn cmd_generate(cfg: &TokenConfig, args: GenerateArgs) -> anyhow::Result<()> {
    let renderer = build_renderer(cfg, args.basic)?;
    let resolver = ScryfallClient::from_config(cfg);

    let mut order = TokenOrder::new(args.name).with_stats(args.power, args.toughness);
    order.subtype = args.subtype;

    let token = generate_token(&resolver, &*renderer, &order).map_err(report)?;
    write_png(&token, &args.out)
}

fn cmd_render(cfg: &TokenConfig, args: RenderArgs) -> anyhow::Result<()> {
    let renderer = build_renderer(cfg, args.basic)?;
    let art = std::fs::read(&args.art)
        .with_context(|| format!("read art from '{}'", args.art.display()))?;

    let request = RenderRequest {
        art,
        name: args.name,
        power: args.power,
        toughness: args.toughness,
        meta_types: args.meta_types,
        subtype: args.subtype,
        oracle_text: args.oracle,
        mana_cost: args.mana_cost,
        artist: args.artist,
        colors: args.colors,
    };
    let token = renderer.render(&request).map_err(report)?;
    write_png(&token, &args.out)
}

fn cmd_search(cfg: &TokenConfig, args: SearchArgs) -> anyhow::Result<()> {
    let resolver = ScryfallClient::from_config(cfg);
    let limit = args.limit.unwrap_or(cfg.search_limit);
    let summary = search_cards(&resolver, &args.query, limit).map_err(report)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn cmd_card(cfg: &TokenConfig, args: CardArgs) -> anyhow::Result<()> {
    let resolver = ScryfallClient::from_config(cfg);
    let card = resolver.card_by_id(&args.id).map_err(report)?;
    println!("{}", serde_json::to_string_pretty(&card)?);
    Ok(())
}

fn report(err: TokenError) -> anyhow::Error {
    tracing::error!(error = %err, "token request failed");
    anyhow::anyhow!(err.user_message())
}

fn write_png(token: &TokenImage, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let png = token.encode_png()?;
    std::fs::write(out, png).with_context(|| format!("write png '{}'", out.display()))?;

    tracing::info!(width = token.width, height = token.height, "wrote token");
    eprintln!("wrote {}", out.display());
    Ok(())
}
