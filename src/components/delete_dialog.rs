//! Modal dialog confirming a product deletion.
//!
//! The dialog owns only the item and reports a [`DialogOutcome`] through its
//! close callback. Issuing the delete request is the host's job.

#[cfg(test)]
#[path = "delete_dialog_test.rs"]
mod delete_dialog_test;

use leptos::prelude::*;

use crate::net::types::Product;

/// How the user resolved the dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    Confirm(T),
    Cancel,
}

impl<T> DialogOutcome<T> {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirm(_))
    }
}

/// The item awaiting confirmation.
#[derive(Clone, Debug)]
pub struct DeleteDialog<T> {
    item: T,
}

impl<T: Clone> DeleteDialog<T> {
    pub fn new(item: T) -> Self {
        Self { item }
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn confirm(&self) -> DialogOutcome<T> {
        DialogOutcome::Confirm(self.item.clone())
    }

    pub fn cancel(&self) -> DialogOutcome<T> {
        DialogOutcome::Cancel
    }
}

/// Confirmation dialog for deleting `item`.
///
/// Every way out (Cancel, Delete, backdrop click) runs `on_close` once.
#[component]
pub fn DeleteConfirmDialog(item: Product, on_close: Callback<DialogOutcome<Product>>) -> impl IntoView {
    let name = item.display_name().to_owned();
    let dialog = StoredValue::new(DeleteDialog::new(item));

    let cancel = move || on_close.run(dialog.with_value(DeleteDialog::cancel));
    let confirm = move || on_close.run(dialog.with_value(DeleteDialog::confirm));

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel()>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Product"</h2>
                <p class="dialog__danger">
                    "Are you sure you want to delete " <strong>{name}</strong> "?"
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| cancel()>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| confirm()>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
