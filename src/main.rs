use clap::Parser;
use newshead::application::{init, list_posts, ConfigService, RenderHeadService};
use newshead::cli::{format_config, format_post_list, Cli, Commands};
use newshead::error::NewsheadError;
use newshead::infrastructure::FileSystemRepository;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), NewsheadError> {
    match cli.command {
        Some(Commands::Init { path, site }) => init::init(&path, &site),
        Some(Commands::List) => {
            let repo = FileSystemRepository::discover()?;
            let posts = list_posts(&repo)?;
            print!("{}", format_post_list(&posts));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                print!("{}", format_config(&config));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: newshead config [--list | <key> [<value>]]");
                println!("Valid keys: site, suppress_noindex, created");
                Ok(())
            }
        }
        None => {
            if let Some(slug) = cli.slug {
                let repo = FileSystemRepository::discover()?;
                let service = RenderHeadService::new(repo);
                let head = service.execute(&slug)?;
                if !head.is_empty() {
                    println!("{}", head);
                }
                Ok(())
            } else {
                println!("newshead - Head meta-tag renderer for news content");
                println!("Use --help for usage information");
                Ok(())
            }
        }
    }
}
