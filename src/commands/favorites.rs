use cloudcue_activities::LocalStorage;
use cloudcue_ui::{views, Frontend};

pub fn list<S: LocalStorage>(frontend: &Frontend<S>, tag: Option<&str>) -> bool {
    println!("{}", views::render_favorites(frontend.favorites(), tag));
    true
}

pub fn remove<S: LocalStorage>(frontend: &mut Frontend<S>, id: &str) -> bool {
    match frontend.remove_favorite(id) {
        Ok(true) => {
            println!("Removed {} from favorites", id);
            true
        }
        Ok(false) => {
            println!("{} is not in your favorites", id);
            false
        }
        Err(e) => {
            println!("{}", views::error_panel(&e));
            false
        }
    }
}
