use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use picks_core::{
    CarouselLayout, PersonalizedPicks,
    catalog::load_products,
    demo::{DEMO_SUBTITLE, DEMO_TITLE, sample_products},
};
use picks_demo::{DemoCommand, DemoSession, Outcome, interactive, parse_script};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "picks-demo")]
#[command(about = "Drive the Personalized Picks carousel from the terminal")]
struct Cli {
    /// Comma separated commands to run instead of the interactive menu,
    /// e.g. "next,next,goto 3,prev,select 2"
    #[arg(long)]
    script: Option<String>,

    /// JSON catalog to show instead of the sample coffee makers
    #[arg(long, value_name = "FILE")]
    products: Option<PathBuf>,

    /// Carousel title
    #[arg(long)]
    title: Option<String>,

    /// Carousel subtitle (defaults to an item count)
    #[arg(long)]
    subtitle: Option<String>,

    /// One pagination dot per product instead of a fixed five
    #[arg(long, default_value_t = false)]
    dots_per_product: bool,
}

impl Cli {
    fn build_carousel(&self) -> anyhow::Result<PersonalizedPicks> {
        let (products, default_subtitle) = match &self.products {
            Some(path) => (
                load_products(path).with_context(|| {
                    format!("failed to load products from {}", path.display())
                })?,
                None,
            ),
            None => (sample_products(), Some(DEMO_SUBTITLE)),
        };

        let mut carousel = PersonalizedPicks::new(products)
            .with_title(self.title.as_deref().unwrap_or(DEMO_TITLE));
        if let Some(subtitle) = self.subtitle.as_deref().or(default_subtitle) {
            carousel = carousel.with_subtitle(subtitle);
        }
        if self.dots_per_product {
            carousel = carousel.with_layout(CarouselLayout::per_product());
        }
        Ok(carousel)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let script = cli
        .script
        .as_deref()
        .map(parse_script)
        .transpose()
        .context("invalid --script")?;
    let mut session = DemoSession::new(cli.build_carousel()?);
    info!(
        products = session.carousel().products().len(),
        "demo carousel ready"
    );

    // Prompts block; keep them off the async workers so announcement clears
    // still fire.
    tokio::task::spawn_blocking(move || match script {
        Some(commands) => {
            run_script(&mut session, commands);
            Ok(())
        }
        None => interactive::run(&mut session),
    })
    .await
    .context("demo session panicked")?
}

fn run_script(session: &mut DemoSession, commands: Vec<DemoCommand>) {
    println!("{}", session.render());
    for command in commands {
        println!("> {command}");
        let outcome = session.apply(command);
        if outcome == Outcome::Quit {
            break;
        }
        if let Some(message) = outcome.message() {
            println!("{message}");
        }
        println!("{}", session.render());
    }
}
