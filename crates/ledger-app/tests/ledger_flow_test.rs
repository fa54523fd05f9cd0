//! End-to-end flow over the in-memory adapters: create, edit, search,
//! select and bulk delete.

use std::sync::Arc;

use ledger_app::{AppDeps, DeleteSelectedOutcome, QueryCoordinator};
use ledger_core::{ErrorCategory, InvalidExpressionError, LedgerError};
use ledger_infra::{InMemoryCatalogStore, InMemoryUiStateRepository};

fn deps() -> AppDeps {
    AppDeps {
        catalog_store: Arc::new(InMemoryCatalogStore::new()),
        ui_state: Arc::new(InMemoryUiStateRepository::new()),
    }
}

#[tokio::test]
async fn test_create_edit_search_select_delete() {
    let coordinator = QueryCoordinator::from_deps(&deps());

    let widget = coordinator.create_entry("Widget", "8+2+5").await.unwrap();
    assert_eq!(widget.duration(), 15.0);
    coordinator.create_entry("Gadget", "1").await.unwrap();

    let widget = coordinator
        .update_entry(widget.id(), "Widget", "8+2+5+5")
        .await
        .unwrap();
    assert_eq!(widget.duration(), 20.0);
    assert_eq!(widget.time_expression(), "8+2+5+5");

    let found = coordinator.set_search_query("wid").await;
    assert_eq!(found.entries.len(), 1);
    assert_eq!(found.entries[0].id(), widget.id());
    assert_eq!(found.entries[0].duration(), 20.0);

    coordinator.set_selected(widget.id(), true).await;
    let outcome = coordinator.delete_selected().await.unwrap();
    match outcome {
        DeleteSelectedOutcome::Deleted { removed, view, .. } => {
            assert_eq!(removed, 1);
            assert!(view.entries.is_empty(), "search still active, nothing matches");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    let everything = coordinator.set_search_query("").await;
    let names: Vec<&str> = everything.entries.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["Gadget"]);
    assert!(coordinator.selected_ids().await.is_empty());
}

#[tokio::test]
async fn test_invalid_expression_leaves_catalog_untouched() {
    let coordinator = QueryCoordinator::from_deps(&deps());

    for bad in ["", "   ", "8+", "+8", "8++2", "8-2", "abc"] {
        let err = coordinator.create_entry("Widget", bad).await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvalidExpression, "{bad:?}");
    }

    let err = coordinator.create_entry("Widget", "8++2").await.unwrap_err();
    assert!(matches!(
        err,
        LedgerError::InvalidExpression(InvalidExpressionError::EmptyTerm { position: 1 })
    ));

    assert!(coordinator.visible_entries().await.entries.is_empty());
}

#[tokio::test]
async fn test_delete_is_idempotent_across_reloads() {
    let deps = deps();
    let coordinator = QueryCoordinator::from_deps(&deps);
    let entry = coordinator.create_entry("Widget", "1").await.unwrap();

    coordinator.set_selected(entry.id(), true).await;
    coordinator.delete_selected().await.unwrap();

    coordinator.set_selected(entry.id(), true).await;
    let outcome = coordinator.delete_selected().await.unwrap();
    assert_eq!(outcome, DeleteSelectedOutcome::NothingSelected);
}
