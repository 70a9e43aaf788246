// src/main.rs
use anyhow::{Context, Result};
use themefont::{SystemFontCache, SystemFontRole};
use tracing_subscriber::EnvFilter;

fn parse_roles(args: &[String]) -> Result<Vec<SystemFontRole>> {
    if args.is_empty() {
        return Ok(SystemFontRole::ALL.to_vec());
    }

    args.iter()
        .map(|arg| {
            arg.parse::<SystemFontRole>()
                .with_context(|| format!("expected one of: {}", keyword_list()))
        })
        .collect()
}

fn keyword_list() -> String {
    SystemFontRole::ALL
        .iter()
        .map(|role| role.css_keyword())
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let roles = parse_roles(&args)?;
    tracing::debug!("Resolving {} system font roles", roles.len());

    let cache = SystemFontCache::global();
    for role in roles {
        println!("{}: {}", role, cache.resolve(role));
    }

    Ok(())
}
