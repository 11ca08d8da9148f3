use cloudcue_activities::LocalStorage;
use cloudcue_ui::{views, Frontend, Route};

pub async fn run<S: LocalStorage>(frontend: &Frontend<S>, path: &str, tag: Option<&str>) -> bool {
    match Route::parse(path) {
        Ok(route) => {
            println!("{}", frontend.open(&route, tag).await);
            true
        }
        Err(e) => {
            println!("{}", views::error_panel(&e));
            false
        }
    }
}
