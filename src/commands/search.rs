use anyhow::Result;
use cloudcue_activities::LocalStorage;
use cloudcue_ui::{views, Frontend, Route, SaveOutcome};

pub async fn run<S: LocalStorage>(
    frontend: &mut Frontend<S>,
    city: &str,
    tag: Option<&str>,
    save: &[String],
) -> Result<bool> {
    if Route::from_search_input(city).is_none() {
        anyhow::bail!("Please enter a city name");
    }
    let city = city.trim();

    let result = frontend.search(city).await;

    if let Ok(page) = &result {
        for id in save {
            match frontend.save(page, id) {
                Ok(SaveOutcome::Added) => println!("❤️ Saved {}", id),
                Ok(SaveOutcome::AlreadySaved) => println!("{} is already a favorite", id),
                Ok(SaveOutcome::NotInResults) => {
                    println!("No activity with id {} in these results", id)
                }
                Err(e) => println!("{}", views::error_panel(&e)),
            }
        }
        if !save.is_empty() {
            println!();
        }
    }

    println!("{}", frontend.render_search(city, &result, tag));
    Ok(result.is_ok())
}
