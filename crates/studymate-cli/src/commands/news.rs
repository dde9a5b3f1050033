use clap::Subcommand;
use studymate_core::storage::Database;

#[derive(Subcommand)]
pub enum NewsAction {
    /// Toggle a bookmark on an article id
    Bookmark {
        /// Article id
        id: i64,
    },
    /// List bookmarked article ids
    List,
}

pub fn run(action: NewsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        NewsAction::Bookmark { id } => {
            if db.toggle_bookmark(id)? {
                println!("bookmarked {id}");
            } else {
                println!("removed bookmark {id}");
            }
        }
        NewsAction::List => {
            for id in db.load_bookmarks() {
                println!("{id}");
            }
        }
    }

    Ok(())
}
