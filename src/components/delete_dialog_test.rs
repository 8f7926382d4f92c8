use super::*;

#[test]
fn confirm_reports_the_held_item() {
    let dialog = DeleteDialog::new("milk".to_owned());
    assert_eq!(dialog.confirm(), DialogOutcome::Confirm("milk".to_owned()));
    assert!(dialog.confirm().is_confirmed());
}

#[test]
fn cancel_reports_no_item() {
    let dialog = DeleteDialog::new("milk".to_owned());
    let outcome = dialog.cancel();
    assert_eq!(outcome, DialogOutcome::Cancel);
    assert!(!outcome.is_confirmed());
}

#[test]
fn dialog_keeps_item_untouched() {
    let dialog = DeleteDialog::new(vec![1, 2, 3]);
    let _ = dialog.cancel();
    let _ = dialog.confirm();
    assert_eq!(dialog.item(), &vec![1, 2, 3]);
}
