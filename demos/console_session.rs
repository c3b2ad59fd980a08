//! Console session over a file-backed address book.
//!
//! Loads configuration, seeds an empty book from the profile API, adds a
//! contact through a draft and prints the directory.
//!
//! Run with: cargo run --example console_session
//! Set RUST_LOG=address_book=debug to see dispatches and writes.

use address_book::book::AddressBook;
use address_book::bootstrap::RandomUserClient;
use address_book::config::Config;
use address_book::storage::FileStore;
use address_book::validation::{Field, ValidationSchema};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match Config::default_path() {
        Some(path) => Config::load_or_default(&path)?,
        None => Config::default(),
    };
    let store = FileStore::new(config.storage_dir()?);
    println!("=== Address Book ({}) ===\n", store.dir().display());

    let mut book = AddressBook::open_or_default(store, config.storage.key.clone())
        .with_status(config.default_status);

    if book.needs_bootstrap() && config.bootstrap.enabled {
        let client = RandomUserClient::new(&config.bootstrap)?;
        if let Some(task) = book.start_bootstrap(client) {
            let added = book.complete_bootstrap(task.join().await)?;
            println!("Bootstrap contact added: {added}");
        }
    }

    book.begin_create()?;
    let mut draft = book.open_draft().ok_or("selection did not open a draft")?;
    draft.set_field(Field::Name, "Donna Noble");
    draft.set_field(Field::Email, "donna@example");
    draft.set_field(Field::Phone, "+44 20 7946 0002");

    if let Err(errors) = draft.save(ValidationSchema::contact()) {
        for (field, message) in errors.iter() {
            println!("  {field}: {message}");
        }
        if let Some(banner) = draft.banner() {
            println!("  {banner}");
        }
    }

    draft.set_field(Field::Email, "donna@example.com");
    let actions = draft
        .save(ValidationSchema::contact())
        .map_err(|errors| format!("{} fields still invalid", errors.len()))?;
    book.apply(actions)?;

    println!("\n[{}]", book.state().filters.status);
    for (initial, contacts) in book.directory().iter() {
        println!("{}", initial.to_uppercase());
        for contact in contacts {
            println!("  {} <{}> {}", contact.name, contact.email, contact.phone);
        }
    }

    println!("\nDispatched: {}", book.log().action_names().join(", "));
    Ok(())
}
