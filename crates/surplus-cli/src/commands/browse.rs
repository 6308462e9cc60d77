use anyhow::Result;
use surplus_application::{BrowseState, SurplusApp};
use surplus_core::browse::FoodItem;

pub async fn run(app: &SurplusApp, distance: Option<f64>, search: Option<String>) -> Result<()> {
    let controller = match search.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => app.browse_search(term),
        _ => app.browse(),
    };

    let state = match distance {
        Some(km) => controller.set_threshold(km).await,
        None => controller.refresh().await,
    };
    let threshold = controller.threshold();

    match state {
        BrowseState::Loaded(items) => {
            println!(
                "{} item(s) within {} km ({})",
                items.len(),
                threshold.km(),
                controller.source_name()
            );
            for item in &items {
                print_item(item);
            }
        }
        BrowseState::Empty => {
            println!("No food available within {} km.", threshold.km());
            if !threshold.is_max() {
                println!("Try a wider distance, e.g. `surplus browse --distance 20`.");
            }
        }
        BrowseState::Failed(message) => anyhow::bail!(message),
        BrowseState::Loading => {}
    }
    Ok(())
}

fn print_item(item: &FoodItem) {
    let distance = item
        .distance_km
        .map(|km| format!("{km:.1} km"))
        .unwrap_or_else(|| "?".to_string());
    print!("  [{}] {} ({distance})", item.id, item.name);
    if let Some(category) = &item.category {
        print!(" - {category}");
    }
    println!();
    if let Some(description) = item.description.as_deref().filter(|d| !d.is_empty()) {
        println!("      {description}");
    }
}
