use anyhow::Result;
use dialoguer::{Input, Select, console::Term};

use crate::{
    command::DemoCommand,
    session::{DemoSession, Outcome},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Next,
    Previous,
    GoTo,
    ShopNow,
    BrokenImage,
    Dismiss,
    Quit,
}

const MENU: [MenuItem; 7] = [
    MenuItem::Next,
    MenuItem::Previous,
    MenuItem::GoTo,
    MenuItem::ShopNow,
    MenuItem::BrokenImage,
    MenuItem::Dismiss,
    MenuItem::Quit,
];

fn menu_label(session: &DemoSession, item: MenuItem) -> String {
    let carousel = session.carousel();
    match item {
        MenuItem::Next if carousel.is_next_disabled() => {
            "Next slide (at last slide)".to_string()
        }
        MenuItem::Next => "Next slide".to_string(),
        MenuItem::Previous if carousel.is_previous_disabled() => {
            "Previous slide (at first slide)".to_string()
        }
        MenuItem::Previous => "Previous slide".to_string(),
        MenuItem::GoTo => format!(
            "Go to slide (0-{})",
            carousel.dot_count().saturating_sub(1)
        ),
        MenuItem::ShopNow => "Shop now".to_string(),
        MenuItem::BrokenImage => "Simulate a broken product image".to_string(),
        MenuItem::Dismiss => format!(
            "Dismiss notifications ({})",
            session.harness().toasts().len()
        ),
        MenuItem::Quit => "Quit".to_string(),
    }
}

/// Pick a product from the current window.
fn pick_visible_product(
    session: &DemoSession,
    prompt: &str,
) -> Result<Option<DemoCommand>> {
    let visible = session.carousel().visible_products();
    if visible.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = visible
        .iter()
        .map(|item| {
            format!(
                "#{} {} ({})",
                item.product.id, item.product.name, item.formatted_price
            )
        })
        .collect();
    let choice = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_on(&Term::stderr())?;
    Ok(Some(DemoCommand::Select(visible[choice].product.id.clone())))
}

fn prompt_command(session: &DemoSession) -> Result<Option<DemoCommand>> {
    let labels: Vec<String> =
        MENU.iter().map(|item| menu_label(session, *item)).collect();
    let choice = Select::new()
        .with_prompt("Personalized Picks (use arrows/enter)")
        .items(&labels)
        .default(0)
        .interact_on(&Term::stderr())?;

    let command = match MENU[choice] {
        MenuItem::Next => DemoCommand::Next,
        MenuItem::Previous => DemoCommand::Previous,
        MenuItem::GoTo => {
            let raw: String = Input::new()
                .with_prompt("Slide index")
                .default(session.carousel().current_index().to_string())
                .interact_text_on(&Term::stderr())?;
            DemoCommand::GoTo(raw)
        }
        MenuItem::ShopNow => {
            return pick_visible_product(session, "Shop now for");
        }
        MenuItem::BrokenImage => {
            let Some(DemoCommand::Select(product_id)) =
                pick_visible_product(session, "Break the image of")?
            else {
                return Ok(None);
            };
            DemoCommand::BrokenImage(product_id)
        }
        MenuItem::Dismiss => DemoCommand::Dismiss,
        MenuItem::Quit => DemoCommand::Quit,
    };
    Ok(Some(command))
}

/// Menu loop; renders to stdout after every step until the user quits.
pub fn run(session: &mut DemoSession) -> Result<()> {
    println!("{}", session.render());
    loop {
        let Some(command) = prompt_command(session)? else {
            continue;
        };
        let outcome = session.apply(command);
        if outcome == Outcome::Quit {
            return Ok(());
        }
        if let Some(message) = outcome.message() {
            println!("{message}");
        }
        println!("{}", session.render());
    }
}
