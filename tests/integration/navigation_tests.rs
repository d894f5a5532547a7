use futures::executor::block_on;
use oxide_forms::{NavigationRequest, Presentable, View};

use super::{given_state, initial_state, DETAILS_ROW, NOTE_ROW};

#[test]
fn given_text_field_when_editing_ended_should_not_navigate() {
    let test = given_state(initial_state());
    let navigation = test.driver.navigation();

    test.end_editing_name("y");

    assert!(navigation.is_empty());
}

#[test]
fn given_text_field_when_submitted_should_commit_then_pop_once() {
    let test = given_state(initial_state());
    let navigation = test.driver.navigation();

    test.submit_name("z");

    assert_eq!(test.driver.state().name, "z");
    let requests = navigation.drain();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].is_pop());
}

#[test]
fn given_detail_row_when_selected_should_push_nested_form() {
    let test = given_state(initial_state());
    let navigation = test.driver.navigation();

    test.driver.select_row(DETAILS_ROW).expect("row exists");

    match navigation.try_next() {
        Some(NavigationRequest::Push(screen)) => assert_eq!(screen.title(), "Details"),
        other => panic!("expected a push, got {other:?}"),
    }
    assert!(navigation.try_next().is_none());
}

#[test]
fn given_pushed_form_when_text_submitted_should_pop_on_parent_queue() {
    let test = given_state(initial_state());
    let navigation = test.driver.navigation();

    test.driver.select_row(DETAILS_ROW).expect("row exists");
    let screen = match navigation.try_next() {
        Some(NavigationRequest::Push(screen)) => screen,
        other => panic!("expected a push, got {other:?}"),
    };

    let mut note: Option<View> = None;
    screen.visit_table(&mut |table| {
        assert_eq!(table.number_of_sections(), 1);
        note = table.cell(NOTE_ROW).and_then(|cell| cell.accessory().cloned());
    });
    let note = note.expect("note row has an accessory");
    let field = note.as_text_field().expect("note row");
    field.type_text("remember");
    field.submit();

    assert_eq!(navigation.len(), 1);
    assert!(navigation.try_next().is_some_and(|request| request.is_pop()));
    assert!(navigation.is_empty());

    let mut shown = None;
    screen.visit_table(&mut |table| {
        shown = table
            .cell(NOTE_ROW)
            .and_then(|cell| cell.accessory().and_then(View::as_text_field).map(|field| field.text()));
    });
    assert_eq!(shown.as_deref(), Some("remember"));
    assert_eq!(test.driver.state().name, "x");
}

#[test]
fn given_pushed_form_when_unknown_row_selected_should_report_out_of_range() {
    let test = given_state(initial_state());
    let navigation = test.driver.navigation();

    test.driver.select_row(DETAILS_ROW).expect("row exists");
    let Some(NavigationRequest::Push(screen)) = navigation.try_next() else {
        panic!("expected a push");
    };

    assert!(screen.select_row(NOTE_ROW).is_ok());
    assert!(screen.select_row(DETAILS_ROW).is_err());
    assert!(!screen.did_appear());
}

#[test]
fn given_pending_request_should_resolve_async_next() {
    let test = given_state(initial_state());
    let navigation = test.driver.navigation();

    test.submit_name("z");

    let request = block_on(navigation.next());
    assert!(request.is_some_and(|request| request.is_pop()));
}

#[test]
fn given_released_driver_should_close_navigation_queue() {
    let test = given_state(initial_state());
    let navigation = test.driver.navigation();

    drop(test);

    assert!(block_on(navigation.next()).is_none());
}

#[test]
fn given_driver_should_present_its_title() {
    let test = given_state(initial_state());

    assert_eq!(test.driver.title(), "Settings");
}
