//! Todo demo binary
//!
//! Builds types, creators and a reducer once, then folds a few actions
//! through the reducer, printing each state.

use reducer_sauce_core::{Action, Reducer};
use serde_json::json;
use todo::{TodoAction, todo_actions, todo_reducer, unhandled_tags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=debug,reducer_sauce_core=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todo Demo ===\n");

    let actions = todo_actions()?;
    let reducer = todo_reducer(&actions);

    println!("Types:");
    for (name, tag) in actions.types.iter() {
        println!("  {name} -> {tag}");
    }
    let missing = unhandled_tags(&reducer);
    if !missing.is_empty() {
        println!("Unhandled tags: {missing:?}");
    }

    let creators = &actions.creators;
    let script = [
        creators.create("addTodo", &[json!("buy milk")]),
        creators.create("addTodo", &[json!("walk the dog")]),
        creators.create("toggleTodo", &[json!(0)]),
        Some(Action::from_typed(&TodoAction::AddTodo {
            text: "write docs".to_string(),
        })?),
        Some(Action::new("NOT_A_TODO_ACTION")),
        creators.create("clearCompleted", &[]),
    ];

    let mut state = reducer.reduce(None, None);
    for action in &script {
        println!("\n>>> Dispatching: {}", serde_json::to_string(action)?);
        state = reducer.reduce(Some(state), action.as_ref());
        println!("{}", serde_json::to_string_pretty(&state)?);
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
