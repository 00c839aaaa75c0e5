//! CLI walkthrough of the Composable Todo stores.
//!
//! Demonstrates generation in both languages, every store operation,
//! and the snapshot persistence round trip.

use composable_todo::{
    Language, MockTodoStore, TodoEdit, TodoEnvironment, TodoItem, TodoOptions, TodoStore,
};
use composable_todo_core::environment::{KeyValueStore, MemoryStore};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_items(items: &[TodoItem]) {
    for todo in items {
        let status = if todo.completed { "✓" } else { " " };
        let date = todo.date.as_deref().unwrap_or("-");
        println!("  [{status}] {:<30} ({date})", todo.title);
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_demo=debug,composable_todo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Composable Todo Demo ===\n");

    // One shared persistence sink for the whole session
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

    let mut store = TodoStore::new(
        TodoOptions::new()
            .with_data_num(5)
            .with_lang(Language::En)
            .with_storage(true),
        TodoEnvironment::default(),
        Arc::clone(&storage),
    );

    println!("Generated {} items:", store.items().len());
    print_items(store.items());

    // Add
    println!("\n>>> add_todo(\"Water the garden\", …)");
    if let Err(error) = store.add_todo("Water the garden", "Back rows first, then the pots") {
        println!("  rejected: {error}");
    }
    print_items(store.items());

    // Validation failure surfaces as a typed error, not a state change
    println!("\n>>> add_todo(\"\", …)");
    if let Err(error) = store.add_todo("", "no title given") {
        println!("  rejected: {error}");
    }

    // Toggle the freshly added item
    if let Some(last) = store.items().last().map(|todo| todo.id.clone()) {
        println!("\n>>> toggle_completion(last)");
        store.toggle_completion(last.clone());
        print_items(store.items());

        // Edit its title, keep its content
        println!("\n>>> edit_todo(last, title: \"Water the whole garden\")");
        store.edit_todo(last.clone(), TodoEdit::new().with_title("Water the whole garden"));
        print_items(store.items());

        // Delete it again
        println!("\n>>> delete_todo(last)");
        store.delete_todo(last);
        print_items(store.items());
    }

    // Persistence round trip: a new store over the same sink resumes
    let survivors = store.items().len();
    drop(store);
    let resumed = TodoStore::new(
        TodoOptions::new().with_data_num(5).with_storage(true),
        TodoEnvironment::default(),
        Arc::clone(&storage),
    );
    println!("\nResumed from snapshot: {} items (was {survivors})", resumed.items().len());

    // The reduced, Korean-only mock variant
    println!("\n--- MockTodoStore (Korean, undated) ---");
    let mut mock = MockTodoStore::new(3, 25, TodoEnvironment::default());
    print_items(mock.items());

    mock.add_todo("화분 키우기", "창가에 두고 물 주기");
    if let Some(added) = mock.items().last().map(|todo| todo.id.clone()) {
        mock.toggle_todo(added);
    }
    println!("\nAfter add + toggle:");
    print_items(mock.items());

    println!("\n=== Demo Complete ===");
}
