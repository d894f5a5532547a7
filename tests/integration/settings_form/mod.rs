use oxide_forms::{
    control_cell, detail_text_cell, field, section, sections, text_field, ui_switch, FormDriver,
    FormOptions, IndexPath, RenderedElement, RenderingContext, Section, TestListHost, View,
};

pub(crate) const SWITCH_ROW: IndexPath = IndexPath::new(0, 0);
pub(crate) const DETAILS_ROW: IndexPath = IndexPath::new(0, 1);
pub(crate) const NAME_ROW: IndexPath = IndexPath::new(1, 0);
pub(crate) const NOTE_ROW: IndexPath = IndexPath::new(0, 0);

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestState {
    pub(crate) enabled: bool,
    pub(crate) name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DetailState {
    pub(crate) note: String,
}

pub(crate) fn build_settings(
    context: &RenderingContext<TestState>,
) -> RenderedElement<Vec<Section>, TestState> {
    let footer = if context.state().enabled {
        "Sync is on"
    } else {
        "Sync is off"
    };

    let details = detail_text_cell("Details", |state: &TestState| state.name.clone(), {
        let context = context.clone();
        move || {
            context.push_form(
                DetailState {
                    note: String::new(),
                },
                FormOptions::new("Details"),
                build_details,
                TestListHost::new().boxed(),
            );
        }
    });

    sections([
        section(
            [
                control_cell("Sync", ui_switch(context, field!(TestState, enabled))),
                details,
            ],
            Some(footer.to_string()),
        ),
        section(
            [control_cell("Name", text_field(context, field!(TestState, name)))],
            Some(format!("Signed in as {}", context.state().name)),
        ),
    ])
}

fn build_details(context: &RenderingContext<DetailState>) -> RenderedElement<Vec<Section>, DetailState> {
    sections([section(
        [control_cell("Note", text_field(context, field!(DetailState, note)))],
        None,
    )])
}

pub(crate) struct FormTest {
    pub(crate) driver: FormDriver<TestState>,
    pub(crate) host: TestListHost,
}

impl FormTest {
    pub(crate) fn accessory(&self, index_path: IndexPath) -> View {
        self.driver.with_table(|table| {
            table
                .cell(index_path)
                .and_then(|cell| cell.accessory().cloned())
                .expect("row has an accessory")
        })
    }

    pub(crate) fn toggle_switch(&self, on: bool) {
        let view = self.accessory(SWITCH_ROW);
        view.as_switch().expect("switch row").toggle_to(on);
    }

    pub(crate) fn switch_is_on(&self) -> bool {
        let view = self.accessory(SWITCH_ROW);
        view.as_switch().expect("switch row").is_on()
    }

    pub(crate) fn name_text(&self) -> String {
        let view = self.accessory(NAME_ROW);
        view.as_text_field().expect("name row").text()
    }

    pub(crate) fn end_editing_name(&self, text: &str) {
        let view = self.accessory(NAME_ROW);
        let field = view.as_text_field().expect("name row");
        field.type_text(text);
        field.end_editing();
    }

    pub(crate) fn submit_name(&self, text: &str) {
        let view = self.accessory(NAME_ROW);
        let field = view.as_text_field().expect("name row");
        field.type_text(text);
        field.submit();
    }
}

pub(crate) fn given_state(state: TestState) -> FormTest {
    given_state_with_options(state, FormOptions::new("Settings"))
}

pub(crate) fn given_state_with_options(state: TestState, options: FormOptions) -> FormTest {
    let host = TestListHost::new();
    let driver = FormDriver::new(state, options, build_settings, host.boxed());
    FormTest { driver, host }
}

pub(crate) fn initial_state() -> TestState {
    TestState {
        enabled: false,
        name: "x".to_string(),
    }
}
