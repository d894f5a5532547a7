use mockall::{mock, predicate::eq, Sequence};
use oxide_forms::{FormDriver, FormOptions, FormTable, HostCall, ListHost};

use super::{build_settings, given_state, given_state_with_options, initial_state};

mock! {
    pub Host {}

    impl ListHost for Host {
        fn reload_data(&mut self, table: &FormTable);
        fn set_animations_enabled(&mut self, enabled: bool);
        fn begin_updates(&mut self);
        fn set_footer_text(&mut self, section: usize, text: Option<String>);
        fn end_updates(&mut self);
    }
}

#[test]
fn given_toggle_should_reload_rows_then_rewrite_footers_without_animation() {
    let mut host = MockHost::new();
    let mut sequence = Sequence::new();

    host.expect_reload_data()
        .withf(|table| table.footer_title(0) == Some("Sync is off"))
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    host.expect_reload_data()
        .withf(|table| table.number_of_sections() == 2 && table.footer_title(0) == Some("Sync is on"))
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    host.expect_set_animations_enabled()
        .with(eq(false))
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    host.expect_begin_updates()
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    host.expect_set_footer_text()
        .with(eq(0), eq(Some("Sync is on".to_string())))
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    host.expect_set_footer_text()
        .with(eq(1), eq(Some("Signed in as x".to_string())))
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    host.expect_end_updates()
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    host.expect_set_animations_enabled()
        .with(eq(true))
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());

    let driver = FormDriver::new(
        initial_state(),
        FormOptions::new("Settings"),
        build_settings,
        Box::new(host),
    );

    driver.change(|state| state.enabled = true).expect("change applied");
}

#[test]
fn given_name_edit_should_update_footer_independently_of_row_reload() {
    let test = given_state(initial_state());
    test.host.clear();

    test.end_editing_name("y");

    test.host.with_calls(|calls| {
        assert_eq!(
            calls,
            &vec![
                HostCall::ReloadData {
                    footers: vec![
                        Some("Sync is off".to_string()),
                        Some("Signed in as y".to_string()),
                    ],
                },
                HostCall::SetAnimationsEnabled(false),
                HostCall::BeginUpdates,
                HostCall::SetFooterText(0, Some("Sync is off".to_string())),
                HostCall::SetFooterText(1, Some("Signed in as y".to_string())),
                HostCall::EndUpdates,
                HostCall::SetAnimationsEnabled(true),
            ]
        );
    });
    assert_eq!(test.host.reload_count(), 1);
    assert_eq!(test.host.footer_text(1), Some(Some("Signed in as y".to_string())));
}

#[test]
fn given_footer_refresh_disabled_should_only_reload_rows() {
    let test = given_state_with_options(
        initial_state(),
        FormOptions::new("Settings").with_refresh_footers(false),
    );

    test.toggle_switch(true);

    assert!(!test.driver.options().refresh_footers);
    assert_eq!(test.driver.options().title, "Settings");
    assert_eq!(test.host.count(), 2);
    assert_eq!(test.host.reload_count(), 2);
    assert_eq!(test.host.footer_text(0), None);
}
