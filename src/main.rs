//! CLI for rights-badge - rights statement badge resolver

use clap::Parser;
use rights_badge::{
    BadgeColor, BadgeOptions, BadgeResolver, BadgeStyle, HtmlRenderer, HttpFetcher, Renderer,
};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rights statement URIs to resolve
    #[arg(required = true)]
    uris: Vec<String>,

    /// Badge style: icons or buttons
    #[arg(long, default_value = "buttons")]
    style: BadgeStyle,

    /// Badge color variant
    #[arg(long, default_value = "dark")]
    color: BadgeColor,

    /// Badge image height in pixels
    #[arg(long, default_value_t = 31)]
    height: u32,

    /// Prefix for badge image paths (e.g. a CDN base URL)
    #[arg(long, default_value = "")]
    asset_base: String,

    /// Accept-Language header value used to pick the label language
    #[arg(long, default_value = "en")]
    accept_language: String,

    /// Metadata request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Print resolution results as JSON instead of HTML
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let fetcher = match HttpFetcher::with_timeout(Duration::from_secs(args.timeout_secs)) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            eprintln!("Error building HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let resolver = BadgeResolver::with_asset_base(fetcher, args.asset_base);
    let options = BadgeOptions {
        style: args.style,
        color: args.color,
        image_height_px: args.height,
    };
    let renderer = HtmlRenderer::new(args.height);

    for uri in &args.uris {
        let result = resolver.resolve(uri, &options, &args.accept_language);
        if args.json {
            match serde_json::to_string(&result) {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    eprintln!("Error serializing result: {}", e);
                    std::process::exit(1);
                }
            }
        } else {
            println!("{}", renderer.render(&result));
        }
    }
}
