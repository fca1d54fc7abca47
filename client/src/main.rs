//! Drives one full order against a running server: fetch config and
//! catalog, assemble a mixed order through the pickers, validate, submit,
//! then watch the print status until PRINTED or timeout.

use std::env;

use anyhow::{Context, bail};

use client::{Api, PollOutcome, PollSchedule, Submission, submit_order, watch_order};
use menu::IngredientCategory;
use order::{ConfigSelector, IngredientPicker, OrderDraft, SandwichConfig, SandwichCount, validate};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url =
        env::var("CANTEEN_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let api = Api::new(base_url);

    let service = api.get_service_status().await?;
    if !service.is_open {
        bail!(
            "service is closed: {}",
            service.message.as_deref().unwrap_or("no message")
        );
    }

    let windows = api.get_order_windows().await?;
    let departments = api.get_departments().await?;
    let wings = api.get_wings().await?;
    let specials = api.get_special_sandwiches().await?;
    let ingredients = api.get_ingredients().await?;

    println!("Order window: {:?}", windows.order_window);
    println!("Specials: {}", specials.len());
    println!("Ingredients: {}", ingredients.len());

    let mut selector = ConfigSelector::new();
    selector.choose_count(SandwichCount::Two);
    selector.choose_combination(SandwichConfig::Mixed);

    let mut picker = IngredientPicker::new(ingredients.clone());
    let bread = picker
        .in_category(IngredientCategory::Bread)
        .first()
        .map(|i| i.id.clone())
        .context("no bread on the menu")?;
    picker.toggle(&bread);

    let draft = OrderDraft {
        first_name: "Test".into(),
        last_name: "Employee".into(),
        department_id: departments.first().context("no departments")?.id.clone(),
        wing_id: wings.first().context("no wings")?.id.clone(),
        pickup_time: windows.order_window.from.to_string(),
        has_allergies: false,
        allergies_text: String::new(),
        sandwich_config: selector.current(),
        selected_special_id: specials.first().context("no specials")?.id.clone(),
        selected_ingredient_ids: picker.selected_ids(),
        selected_extra_ids: vec![],
        notes: "placed by the demo client".into(),
    };

    let payload = validate(&draft, &windows, &ingredients)
        .map_err(|errors| anyhow::anyhow!("draft rejected: {errors}"))?;
    println!("Draft validated: {} sandwich entries", payload.sandwiches.len());

    let mut submission = Submission::Idle;
    submit_order(&api, &payload, |state| {
        if *state == Submission::Submitting {
            println!("Submitting order...");
        }
        submission = state.clone();
    })
    .await;

    let order_id = match submission {
        Submission::Submitted { order_id } => order_id,
        Submission::Failed { message } => bail!("submission failed: {message}"),
        state => bail!("submission ended in a non-terminal state: {state:?}"),
    };
    println!("Submitted as {order_id}");

    let outcome = watch_order(&api, &order_id, PollSchedule::default(), |percent| {
        println!("  printing... {percent}%");
    })
    .await?;

    match outcome {
        PollOutcome::Printed { elapsed } => {
            println!("Printed after {:.0?}", elapsed);
        }
        PollOutcome::TimedOut => {
            println!("Still not printed; check again later");
        }
    }

    Ok(())
}
