use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use mealform_core::shopping::{ShoppingItem, shopping_list};
use mealform_engine::session::SessionStatus;
use mealform_engine::view::ViewModel;
use mealform_runtime::config_store::{ConfigStore, apply_env_overrides};
use mealform_runtime::runtime_controller::build_controller;

/// Ask the meal planner for a weekly menu built from what you have at home.
#[derive(Parser, Debug)]
#[command(name = "mealform", version)]
struct Args {
    /// Let the planner assume basic pantry staples (salt, oil, garlic, onion).
    #[arg(long)]
    extras: bool,

    /// JSON config file. Missing files fall back to defaults.
    #[arg(long, env = "MEALFORM_CONFIG", default_value = "mealform.json")]
    config: PathBuf,

    /// Available ingredients, free text. May be empty.
    ingredients: Vec<String>,
}

fn setup_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn render_text(vm: &ViewModel, shopping: &[ShoppingItem]) -> String {
    let mut out = String::new();

    if let Some(banner) = &vm.error_banner {
        let _ = writeln!(out, "! {banner}");
    }

    for day in vm.menu.iter().flatten() {
        let _ = writeln!(out, "\n== {} ==", day.day);
        for meal in &day.meals {
            let _ = writeln!(out, "{}: {}", meal.slot_label, meal.name);
            let _ = writeln!(out, "  {}", meal.ingredients);
            let _ = writeln!(out, "  {}", meal.preparation_steps);
        }
    }

    if !shopping.is_empty() {
        out.push_str("\n-- shopping list --\n");
        for item in shopping {
            let _ = writeln!(out, "- {}: {}", item.ingredient, item.count);
        }
    }

    out
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    setup_logging();
    let args = Args::parse();

    let mut cfg = ConfigStore::at_path(args.config.clone())
        .load()
        .with_context(|| format!("load config {}", args.config.display()))?;
    apply_env_overrides(&mut cfg, |k| std::env::var(k).ok())?;
    log::info!("using endpoint {}", cfg.endpoint);

    let controller = build_controller(&cfg);
    controller.update_ingredients(args.ingredients.join(" "));
    if args.extras {
        controller.toggle_extras();
    }

    let pending = controller.submit();
    eprintln!("{}", controller.render().submit_label);
    pending.await;

    let state = controller.state();
    let shopping = state.menu().map(shopping_list).unwrap_or_default();
    print!("{}", render_text(&controller.render(), &shopping));

    if state.status() == SessionStatus::Failed {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
