//! Native entry point: a line-oriented shell over the inventory session.
//!
//! Images are read from disk and kept in an in-memory blob table, standing in
//! for the browser's object URLs.

#[cfg(not(target_arch = "wasm32"))]
mod shell {
    use std::io::{self, BufRead, Write};
    use std::path::Path;

    use inventory_manager::constants::{APP_TITLE, GALLERY_TITLE};
    use inventory_manager::provider::{MemoryBlobProvider, SourceFile};
    use inventory_manager::view::{DetailView, GridView, NavLink};
    use inventory_manager::{AppConfig, Category, InventoryApp, Message, Route};

    type App = InventoryApp<MemoryBlobProvider>;

    const HELP: &str = "\
Commands:
  add <name> | <type> | <description> | <cover> [more images...]
  list                 show the gallery grid
  open <n>             open item n (1-based)
  next / prev          move through the open item's images
  show <k>             jump to image k (1-based)
  close                back to the grid
  view                 show the current page
  default <type>       set and save the category new items start with
  save                 save preferences
  help                 this text
  quit                 exit";

    pub fn run() -> io::Result<()> {
        let mut config = AppConfig::load_from_default_path();
        inventory_manager::logging::init(config.preferences.log_level);

        let provider = MemoryBlobProvider::new(config.preferences.blob_origin.clone());
        let mut app = InventoryApp::new(provider, &config);

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        writeln!(stdout, "{}\n{}\n{}", APP_TITLE, render_nav(&app.nav_view()), HELP)?;

        for line in stdin.lock().lines() {
            let line = line?;
            let (command, args) = match line.trim().split_once(' ') {
                Some((command, args)) => (command, args.trim()),
                None => (line.trim(), ""),
            };

            let output = match command {
                "" => continue,
                "quit" | "exit" => break,
                "help" => HELP.to_string(),
                "add" => add(&mut app, args),
                "list" => {
                    app.update(Message::Navigate(Route::Gallery));
                    render_grid(&app.grid_view())
                }
                "open" => open(&mut app, args),
                "next" => {
                    app.update(Message::NextImage);
                    render_current(&app)
                }
                "prev" => {
                    app.update(Message::PrevImage);
                    render_current(&app)
                }
                "show" => show(&mut app, args),
                "close" => {
                    app.update(Message::CloseItem);
                    render_current(&app)
                }
                "view" => render_current(&app),
                "default" => match set_default(&mut app, &mut config, args) {
                    Ok(message) => format!("{}\n{}", message, save(&config)),
                    Err(message) => message,
                },
                "save" => save(&config),
                other => format!("Unknown command '{}'. Type 'help'.", other),
            };
            writeln!(stdout, "{}", output)?;
            stdout.flush()?;
        }

        app.teardown();
        Ok(())
    }

    fn add(app: &mut App, args: &str) -> String {
        let fields: Vec<&str> = args.splitn(4, '|').map(str::trim).collect();
        let [name, category, description, files] = fields[..] else {
            return "Usage: add <name> | <type> | <description> | <cover> [more images...]"
                .to_string();
        };

        let category: Category = match category.parse() {
            Ok(category) => category,
            Err(e) => return e.to_string(),
        };

        let mut files = files.split_whitespace().map(|p| SourceFile::from_path(Path::new(p)));
        let cover = match files.next().transpose() {
            Ok(cover) => cover,
            Err(e) => return format!("Cannot read cover image: {}", e),
        };
        let additional = match files.collect::<io::Result<Vec<_>>>() {
            Ok(additional) => additional,
            Err(e) => return format!("Cannot read image: {}", e),
        };

        app.update(Message::Navigate(Route::AddItem));
        app.update(Message::NameChanged(name.to_string()));
        app.update(Message::CategorySelected(category));
        app.update(Message::DescriptionChanged(description.to_string()));
        app.update(Message::CoverPicked(cover));
        app.update(Message::AdditionalPicked(additional));
        app.update(Message::SubmitItem);

        match app.add_error() {
            Some(e) => {
                let message = format!("Not added: {}", e);
                app.update(Message::Navigate(Route::Gallery));
                message
            }
            None => format!("Added '{}' ({} items)", name, app.list_items().len()),
        }
    }

    fn open(app: &mut App, args: &str) -> String {
        let Some(id) = parse_position(args).and_then(|n| app.store().id_at(n)) else {
            return format!("No item '{}'", args);
        };
        app.update(Message::OpenItem(id));
        render_current(app)
    }

    fn show(app: &mut App, args: &str) -> String {
        let Some(count) = app.gallery().and_then(|gallery| gallery.image_count()) else {
            return "No item is open".to_string();
        };
        match parse_position(args) {
            Some(index) if index < count => {
                app.update(Message::ShowImage(index));
                render_current(app)
            }
            _ => format!("Pick an image between 1 and {}", count),
        }
    }

    /// Change the category new drafts start with, in the session and the config.
    fn set_default(app: &mut App, config: &mut AppConfig, args: &str) -> Result<String, String> {
        let category = args.parse::<Category>().map_err(|e| e.to_string())?;
        app.set_default_category(category);
        config.preferences.default_category = category;
        Ok(format!("New items start as {}", category.label()))
    }

    fn save(config: &AppConfig) -> String {
        match config.save_to_default_path() {
            Ok(()) => "Preferences saved".to_string(),
            Err(e) => format!("Could not save preferences: {}", e),
        }
    }

    /// Parse a 1-based position into an index.
    fn parse_position(args: &str) -> Option<usize> {
        args.parse::<usize>().ok()?.checked_sub(1)
    }

    fn render_current(app: &App) -> String {
        let page = match app.route() {
            Route::AddItem => "Add New Item".to_string(),
            Route::Gallery => match app.detail_view() {
                Some(detail) => render_detail(&detail),
                None => render_grid(&app.grid_view()),
            },
        };
        format!("{}\n{}", render_nav(&app.nav_view()), page)
    }

    fn render_nav(links: &[NavLink]) -> String {
        links
            .iter()
            .map(|link| {
                if link.active {
                    format!("[{}]", link.label)
                } else {
                    format!(" {} ", link.label)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn render_grid(view: &GridView) -> String {
        match view {
            GridView::Empty { message } => format!("{}\n  {}", GALLERY_TITLE, message),
            GridView::Cards { cards } => {
                let mut out = GALLERY_TITLE.to_string();
                for card in cards {
                    out.push_str(&format!(
                        "\n  {}. {} [{}] {}",
                        card.id.index() + 1,
                        card.name,
                        card.category,
                        card.cover
                    ));
                }
                out
            }
        }
    }

    fn render_detail(view: &DetailView) -> String {
        let strip: Vec<String> = view
            .thumbnails
            .iter()
            .map(|t| {
                if t.active {
                    format!("[{}]", t.index + 1)
                } else {
                    format!(" {} ", t.index + 1)
                }
            })
            .collect();
        format!(
            "{} [{}]\n{}\n  {} ({})\n  {}",
            view.name,
            view.category,
            view.description,
            view.image,
            view.progress(),
            strip.join("")
        )
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(e) = shell::run() {
        eprintln!("Application error: {}", e);
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
