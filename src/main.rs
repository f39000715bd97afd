use recipe_stripper::import_recipe;
use recipe_stripper::normalize::format_total_time;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let url = args.get(1).ok_or("Please provide a URL as an argument")?;

    let recipe = import_recipe(url)?;

    if let Some(servings) = &recipe.servings_yield {
        eprintln!("Serves: {}", servings);
    }
    if let Some(time) = recipe.total_time.as_deref().and_then(format_total_time) {
        eprintln!("Time: {}", time);
    }
    println!("{}", serde_json::to_string_pretty(&recipe)?);

    Ok(())
}
